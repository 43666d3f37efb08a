//! kinship-core: Shared types, configuration, and error handling for the Kinship people graph.
//!
//! This crate provides the foundational types used across all Kinship components:
//! - Node types (Person, Location) as stored in Neo4j
//! - Relationship kinds (FRIEND_OF, FATHER_OF, LIVES_IN)
//! - Path projections and their human-readable explanation
//! - Layered configuration
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use self::config::KinshipConfig;
pub use error::KinshipError;
pub use types::{
    present, Location, Person, PersonPath, PersonUpdate, RelationshipKind, MAX_PATH_HOPS,
};
