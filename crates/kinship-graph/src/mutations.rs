//! Write operations for the people graph.
//!
//! Relationships use MERGE so repeating a request does not duplicate
//! edges. Person updates go through [`person_update_query`], which only
//! sets the properties the caller provided.

use kinship_core::{present, Person, PersonUpdate, RelationshipKind};
use neo4rs::{query, Query};

use crate::client::{GraphClient, GraphError};
use crate::queries::person_from_row;

/// One `SET` assignment: node property, parameter name, bound value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub property: &'static str,
    pub param: &'static str,
    pub value: &'a str,
}

impl GraphClient {
    // ── People ───────────────────────────────────────────────────

    /// Create a Person node and return it as stored.
    pub async fn create_person(&self, name: &str, email: &str) -> Result<Person, GraphError> {
        let q = query("CREATE (p:Person {name: $name, email: $email}) RETURN p")
            .param("name", name.to_string())
            .param("email", email.to_string());

        let row = self.query_one(q).await?.ok_or_else(|| {
            GraphError::Serialization("CREATE returned no row".to_string())
        })?;
        let person = person_from_row(&row, "p")?;
        tracing::info!(name = %person.name, "Person created");
        Ok(person)
    }

    /// Apply a partial update. `None` when no person has that name, or
    /// when the update carries no fields.
    pub async fn update_person(
        &self,
        name: &str,
        update: &PersonUpdate,
    ) -> Result<Option<Person>, GraphError> {
        let Some(q) = person_update_query(name, update) else {
            return Ok(None);
        };

        match self.query_one(q).await? {
            Some(row) => {
                let person = person_from_row(&row, "p")?;
                tracing::info!(name, updated = %person.name, "Person updated");
                Ok(Some(person))
            }
            None => Ok(None),
        }
    }

    /// Delete a person and every relationship attached to it.
    ///
    /// Returns the number of Person nodes removed.
    pub async fn delete_person(&self, name: &str) -> Result<i64, GraphError> {
        let q = query(
            "MATCH (p:Person {name: $name})
             DETACH DELETE p
             RETURN count(p) AS deleted",
        )
        .param("name", name.to_string());

        let deleted = match self.query_one(q).await? {
            Some(row) => row.get::<i64>("deleted").map_err(|e| {
                GraphError::Serialization(format!("Failed to read deleted count: {e}"))
            })?,
            None => 0,
        };
        tracing::info!(name, deleted, "Person delete executed");
        Ok(deleted)
    }

    // ── Relationships ────────────────────────────────────────────

    /// Create `(from)-[kind]->(to)` when both endpoints exist.
    ///
    /// A missing endpoint matches no rows and nothing is written; this is
    /// not reported as an error.
    pub async fn link(
        &self,
        kind: RelationshipKind,
        from: &str,
        to: &str,
    ) -> Result<(), GraphError> {
        let q = query(&link_cypher(kind))
            .param("from", from.to_string())
            .param("to", to.to_string());

        self.run(q).await?;
        tracing::info!(rel = kind.cypher_type(), from, to, "Relationship merged");
        Ok(())
    }

    // ── Locations ────────────────────────────────────────────────

    /// Create or reuse a Location node by name.
    pub async fn merge_location(&self, name: &str, country: &str) -> Result<(), GraphError> {
        let q = query(
            "MERGE (l:Location {name: $name})
             ON CREATE SET l.country = $country",
        )
        .param("name", name.to_string())
        .param("country", country.to_string());

        self.run(q).await
    }
}

/// Cypher that merges a relationship of `kind` between two named nodes.
pub(crate) fn link_cypher(kind: RelationshipKind) -> String {
    let rel = kind.cypher_type();
    let target = kind.target_label();
    let on_create = match kind {
        RelationshipKind::FriendOf => " ON CREATE SET r.since = datetime()",
        RelationshipKind::FatherOf | RelationshipKind::LivesIn => "",
    };
    format!(
        "MATCH (a:Person {{name: $from}}), (b:{target} {{name: $to}})
         MERGE (a)-[r:{rel}]->(b){on_create}"
    )
}

/// Assignments for the fields present in `update`, in a fixed order.
pub fn person_assignments(update: &PersonUpdate) -> Vec<Assignment<'_>> {
    let mut out = Vec::new();
    if let Some(value) = present(update.new_name.as_deref()) {
        out.push(Assignment {
            property: "name",
            param: "new_name",
            value,
        });
    }
    if let Some(value) = present(update.email.as_deref()) {
        out.push(Assignment {
            property: "email",
            param: "email",
            value,
        });
    }
    out
}

/// `MATCH (p:<label> {name: $name}) SET ... RETURN p` for the given
/// assignments. `None` if there is nothing to set.
pub fn set_cypher(label: &str, assignments: &[Assignment<'_>]) -> Option<String> {
    if assignments.is_empty() {
        return None;
    }
    let sets: Vec<String> = assignments
        .iter()
        .map(|a| format!("p.{} = ${}", a.property, a.param))
        .collect();
    Some(format!(
        "MATCH (p:{label} {{name: $name}}) SET {} RETURN p",
        sets.join(", ")
    ))
}

/// Build the parameterized update query for a person.
pub fn person_update_query(name: &str, update: &PersonUpdate) -> Option<Query> {
    let assignments = person_assignments(update);
    let cypher = set_cypher("Person", &assignments)?;

    let mut q = query(&cypher).param("name", name.to_string());
    for a in &assignments {
        q = q.param(a.param, a.value.to_string());
    }
    Some(q)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(new_name: Option<&str>, email: Option<&str>) -> PersonUpdate {
        PersonUpdate {
            new_name: new_name.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn email_only_update_leaves_name_alone() {
        let u = update(None, Some("a@x.com"));
        let cypher = set_cypher("Person", &person_assignments(&u)).unwrap();
        assert_eq!(
            cypher,
            "MATCH (p:Person {name: $name}) SET p.email = $email RETURN p"
        );
    }

    #[test]
    fn rename_and_email_together() {
        let u = update(Some("Alicia"), Some("a@x.com"));
        let assignments = person_assignments(&u);
        assert_eq!(assignments.len(), 2);
        assert_eq!(assignments[0].value, "Alicia");
        let cypher = set_cypher("Person", &assignments).unwrap();
        assert!(cypher.contains("SET p.name = $new_name, p.email = $email"));
    }

    #[test]
    fn blank_fields_are_skipped() {
        let u = update(Some(""), Some(""));
        assert!(person_assignments(&u).is_empty());
        assert!(set_cypher("Person", &[]).is_none());
        assert!(person_update_query("Alice", &u).is_none());
    }

    #[test]
    fn values_never_reach_the_query_text() {
        let u = update(Some("x}) DETACH DELETE p //"), None);
        let cypher = set_cypher("Person", &person_assignments(&u)).unwrap();
        assert!(!cypher.contains("DETACH"));
    }

    #[test]
    fn friend_of_sets_since_on_create() {
        let cypher = link_cypher(RelationshipKind::FriendOf);
        assert!(cypher.contains("(b:Person {name: $to})"));
        assert!(cypher.contains("MERGE (a)-[r:FRIEND_OF]->(b) ON CREATE SET r.since = datetime()"));
    }

    #[test]
    fn lives_in_matches_location() {
        let cypher = link_cypher(RelationshipKind::LivesIn);
        assert!(cypher.contains("(b:Location {name: $to})"));
        assert!(cypher.contains("MERGE (a)-[r:LIVES_IN]->(b)"));
        assert!(!cypher.contains("since"));
    }

    #[test]
    fn father_of_has_no_properties() {
        let cypher = link_cypher(RelationshipKind::FatherOf);
        assert!(cypher.ends_with("MERGE (a)-[r:FATHER_OF]->(b)"));
    }
}
