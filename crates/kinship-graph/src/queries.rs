//! Read operations for the people graph.

use kinship_core::{Location, Person, PersonPath, MAX_PATH_HOPS};
use neo4rs::query;

use crate::client::{GraphClient, GraphError};

impl GraphClient {
    // ── People ───────────────────────────────────────────────────

    /// List every Person node.
    pub async fn list_people(&self) -> Result<Vec<Person>, GraphError> {
        let rows = self.query_rows(query("MATCH (p:Person) RETURN p")).await?;
        people_from_rows(rows, "p")
    }

    /// Look a person up by name.
    pub async fn get_person(&self, name: &str) -> Result<Option<Person>, GraphError> {
        let q =
            query("MATCH (p:Person {name: $name}) RETURN p").param("name", name.to_string());

        match self.query_one(q).await? {
            Some(row) => Ok(Some(person_from_row(&row, "p")?)),
            None => Ok(None),
        }
    }

    // ── Neighbours ───────────────────────────────────────────────

    /// People the named person has an outgoing FRIEND_OF edge to.
    ///
    /// An unknown name yields an empty list, same as a person without friends.
    pub async fn friends_of(&self, name: &str) -> Result<Vec<Person>, GraphError> {
        let q = query("MATCH (p:Person {name: $name})-[:FRIEND_OF]->(f:Person) RETURN f")
            .param("name", name.to_string());

        let rows = self.query_rows(q).await?;
        people_from_rows(rows, "f")
    }

    /// Where the named person lives, if a LIVES_IN edge exists.
    pub async fn location_of(&self, name: &str) -> Result<Option<Location>, GraphError> {
        let q = query("MATCH (p:Person {name: $name})-[:LIVES_IN]->(l:Location) RETURN l")
            .param("name", name.to_string());

        match self.query_one(q).await? {
            Some(row) => {
                let node: neo4rs::Node = row.get("l").map_err(|e| {
                    GraphError::Serialization(format!("Failed to deserialize location: {e}"))
                })?;
                Ok(Some(node_to_location(&node)?))
            }
            None => Ok(None),
        }
    }

    /// Everyone with a LIVES_IN edge to the named location.
    pub async fn residents_of(&self, location: &str) -> Result<Vec<Person>, GraphError> {
        let q = query("MATCH (p:Person)-[:LIVES_IN]->(l:Location {name: $name}) RETURN p")
            .param("name", location.to_string());

        let rows = self.query_rows(q).await?;
        people_from_rows(rows, "p")
    }

    // ── Path Queries ─────────────────────────────────────────────

    /// Shortest path between two people, in either direction, of at most
    /// [`MAX_PATH_HOPS`] relationships.
    pub async fn shortest_path(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Option<PersonPath>, GraphError> {
        let q = query(&shortest_path_cypher(MAX_PATH_HOPS))
            .param("from", from.to_string())
            .param("to", to.to_string());

        let Some(row) = self.query_one(q).await? else {
            return Ok(None);
        };

        let nodes: Vec<Option<String>> = row.get("names").map_err(|e| {
            GraphError::Serialization(format!("Failed to deserialize path nodes: {e}"))
        })?;
        let relationships: Vec<String> = row.get("relationships").map_err(|e| {
            GraphError::Serialization(format!("Failed to deserialize path relationships: {e}"))
        })?;

        Ok(Some(PersonPath {
            nodes,
            relationships,
        }))
    }
}

/// Cypher for the bounded shortest-path projection.
///
/// Variable-length bounds cannot be parameters, so the hop limit is the
/// one interpolated value; it is an integer, never user input.
pub(crate) fn shortest_path_cypher(max_hops: u32) -> String {
    format!(
        "MATCH path = shortestPath((a:Person {{name: $from}})-[*..{max_hops}]-(b:Person {{name: $to}}))
         RETURN [n IN nodes(path) | n.name] AS names,
                [rel IN relationships(path) | type(rel)] AS relationships"
    )
}

/// Decode the Person node bound to `column`.
pub(crate) fn person_from_row(row: &neo4rs::Row, column: &str) -> Result<Person, GraphError> {
    let node: neo4rs::Node = row
        .get(column)
        .map_err(|e| GraphError::Serialization(format!("Failed to deserialize person: {e}")))?;
    node_to_person(&node)
}

fn people_from_rows(rows: Vec<neo4rs::Row>, column: &str) -> Result<Vec<Person>, GraphError> {
    let mut people = Vec::with_capacity(rows.len());
    for row in rows {
        people.push(person_from_row(&row, column)?);
    }
    Ok(people)
}

/// Convert a neo4rs::Node to a Person.
fn node_to_person(node: &neo4rs::Node) -> Result<Person, GraphError> {
    let name: String = node
        .get("name")
        .map_err(|e| GraphError::Serialization(format!("Person without name: {e}")))?;
    Ok(Person {
        name,
        email: node.get::<String>("email").ok(),
    })
}

fn node_to_location(node: &neo4rs::Node) -> Result<Location, GraphError> {
    let name: String = node
        .get("name")
        .map_err(|e| GraphError::Serialization(format!("Location without name: {e}")))?;
    Ok(Location {
        name,
        country: node.get::<String>("country").ok(),
    })
}
