//! Kinship Graph — Neo4j client for the people graph.
//!
//! Every read and write of Person and Location nodes flows through this
//! crate. All values reach Neo4j as bound query parameters.

pub mod client;
pub mod mutations;
pub mod queries;
pub mod store;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use store::PeopleStore;
