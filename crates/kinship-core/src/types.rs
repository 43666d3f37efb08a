//! Core domain types for the Kinship people graph.
//!
//! These mirror the nodes and relationships stored in Neo4j. The API owns no
//! separate data model: a `Person` is addressed everywhere by `name`.

use serde::{Deserialize, Serialize};

/// Maximum number of relationships a shortest-path search may traverse.
///
/// Longer paths are reported as "no path".
pub const MAX_PATH_HOPS: u32 = 4;

// ── Nodes ─────────────────────────────────────────────────────────

/// A person node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: Some(email.into()),
        }
    }
}

/// A place people live in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

// ── Relationships ─────────────────────────────────────────────────

/// The directed relationships this API can create.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipKind {
    /// Person → Person, carries a `since` timestamp.
    FriendOf,
    /// Person → Person.
    FatherOf,
    /// Person → Location.
    LivesIn,
}

impl RelationshipKind {
    /// The relationship type as stored in Neo4j.
    pub fn cypher_type(&self) -> &'static str {
        match self {
            Self::FriendOf => "FRIEND_OF",
            Self::FatherOf => "FATHER_OF",
            Self::LivesIn => "LIVES_IN",
        }
    }

    /// Label of the node at the head of the relationship.
    pub fn target_label(&self) -> &'static str {
        match self {
            Self::FriendOf | Self::FatherOf => "Person",
            Self::LivesIn => "Location",
        }
    }

    /// Confirmation message returned once the relationship is requested.
    pub fn confirmation(&self, from: &str, to: &str) -> String {
        match self {
            Self::FriendOf => format!("{from} is now friends with {to}"),
            Self::FatherOf => format!("{from} is now father of {to}"),
            Self::LivesIn => format!("{from} now lives in {to}"),
        }
    }
}

// ── Updates ───────────────────────────────────────────────────────

/// Partial update of a person. Only the fields present are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl PersonUpdate {
    /// Drop blank fields, so `""` counts as "not provided".
    pub fn normalized(self) -> Self {
        Self {
            new_name: self.new_name.filter(|s| !s.is_empty()),
            email: self.email.filter(|s| !s.is_empty()),
        }
    }

    /// True when there is nothing to write.
    pub fn is_empty(&self) -> bool {
        present(self.new_name.as_deref()).is_none() && present(self.email.as_deref()).is_none()
    }
}

// ── Paths ─────────────────────────────────────────────────────────

/// Projection of a shortest path: node names in order, and the type of
/// each relationship between consecutive nodes. A node without a `name`
/// property projects as `None` (`null` in JSON).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonPath {
    pub nodes: Vec<Option<String>>,
    pub relationships: Vec<String>,
}

impl PersonPath {
    /// Number of relationships traversed.
    pub fn hops(&self) -> usize {
        self.relationships.len()
    }

    /// Human-readable summary, e.g. `Alice knows Carol via FRIEND_OF → FATHER_OF`.
    pub fn explanation(&self) -> String {
        fn name(node: Option<&Option<String>>) -> &str {
            node.map(|n| n.as_deref().unwrap_or("null")).unwrap_or_default()
        }
        let first = name(self.nodes.first());
        let last = name(self.nodes.last());
        format!(
            "{first} knows {last} via {}",
            self.relationships.join(" → ")
        )
    }
}

/// A request field counts as provided only when it is non-empty.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
