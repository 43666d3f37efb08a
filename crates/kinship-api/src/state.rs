//! Application state shared by the Axum handlers.

use std::sync::Arc;

use kinship_graph::PeopleStore;

/// Shared by every handler. The store is a pooled client, so cloning the
/// state never opens a connection.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PeopleStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PeopleStore>) -> Self {
        Self { store }
    }
}
