//! kinship-api: HTTP endpoints over the Kinship people graph.
//!
//! Each request is validated, translated into a single parameterized
//! Cypher query through a [`PeopleStore`](kinship_graph::PeopleStore),
//! and shaped into a JSON response. Failures render as `{"error": ...}`.

pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::{create_app, run_server};
pub use state::AppState;
