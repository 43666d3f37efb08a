//! The storage seam the HTTP layer depends on.

use async_trait::async_trait;
use kinship_core::{Location, Person, PersonPath, PersonUpdate, RelationshipKind};

use crate::client::{GraphClient, GraphError};

/// Operations the Kinship API performs against the people graph.
///
/// Each call issues at most one query; consistency between concurrent
/// callers is left to the database.
#[async_trait]
pub trait PeopleStore: Send + Sync {
    async fn list_people(&self) -> Result<Vec<Person>, GraphError>;

    async fn create_person(&self, name: &str, email: &str) -> Result<Person, GraphError>;

    async fn get_person(&self, name: &str) -> Result<Option<Person>, GraphError>;

    /// `None` when no person matched.
    async fn update_person(
        &self,
        name: &str,
        update: &PersonUpdate,
    ) -> Result<Option<Person>, GraphError>;

    /// Number of Person nodes removed (0 when none matched).
    async fn delete_person(&self, name: &str) -> Result<i64, GraphError>;

    async fn link(&self, kind: RelationshipKind, from: &str, to: &str) -> Result<(), GraphError>;

    async fn friends_of(&self, name: &str) -> Result<Vec<Person>, GraphError>;

    async fn location_of(&self, name: &str) -> Result<Option<Location>, GraphError>;

    async fn residents_of(&self, location: &str) -> Result<Vec<Person>, GraphError>;

    async fn shortest_path(&self, from: &str, to: &str) -> Result<Option<PersonPath>, GraphError>;

    async fn ping(&self) -> Result<(), GraphError>;
}

#[async_trait]
impl PeopleStore for GraphClient {
    async fn list_people(&self) -> Result<Vec<Person>, GraphError> {
        GraphClient::list_people(self).await
    }

    async fn create_person(&self, name: &str, email: &str) -> Result<Person, GraphError> {
        GraphClient::create_person(self, name, email).await
    }

    async fn get_person(&self, name: &str) -> Result<Option<Person>, GraphError> {
        GraphClient::get_person(self, name).await
    }

    async fn update_person(
        &self,
        name: &str,
        update: &PersonUpdate,
    ) -> Result<Option<Person>, GraphError> {
        GraphClient::update_person(self, name, update).await
    }

    async fn delete_person(&self, name: &str) -> Result<i64, GraphError> {
        GraphClient::delete_person(self, name).await
    }

    async fn link(&self, kind: RelationshipKind, from: &str, to: &str) -> Result<(), GraphError> {
        GraphClient::link(self, kind, from, to).await
    }

    async fn friends_of(&self, name: &str) -> Result<Vec<Person>, GraphError> {
        GraphClient::friends_of(self, name).await
    }

    async fn location_of(&self, name: &str) -> Result<Option<Location>, GraphError> {
        GraphClient::location_of(self, name).await
    }

    async fn residents_of(&self, location: &str) -> Result<Vec<Person>, GraphError> {
        GraphClient::residents_of(self, location).await
    }

    async fn shortest_path(&self, from: &str, to: &str) -> Result<Option<PersonPath>, GraphError> {
        GraphClient::shortest_path(self, from, to).await
    }

    async fn ping(&self) -> Result<(), GraphError> {
        GraphClient::ping(self).await
    }
}
