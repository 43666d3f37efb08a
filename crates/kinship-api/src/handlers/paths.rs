//! Shortest-path lookups between two people.
//!
//! Both endpoints run their own search; nothing is shared between them.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use kinship_core::{present, PersonPath};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExplainParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Explanation {
    pub explanation: String,
    #[serde(flatten)]
    pub path: PersonPath,
}

pub async fn raw_path(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<PersonPath>, ApiError> {
    let Path((from, to)) = path?;
    find_path(&state, &from, &to).await.map(Json)
}

pub async fn explain(
    State(state): State<AppState>,
    params: Result<Query<ExplainParams>, QueryRejection>,
) -> Result<Json<Explanation>, ApiError> {
    let Query(params) = params?;
    let (Some(from), Some(to)) = (
        present(params.from.as_deref()),
        present(params.to.as_deref()),
    ) else {
        return Err(ApiError::validation("Missing from or to parameter"));
    };

    let path = find_path(&state, from, to).await?;
    Ok(Json(Explanation {
        explanation: path.explanation(),
        path,
    }))
}

async fn find_path(state: &AppState, from: &str, to: &str) -> Result<PersonPath, ApiError> {
    let path = state
        .store
        .shortest_path(from, to)
        .await?
        .ok_or_else(|| ApiError::not_found("No path found"))?;
    tracing::debug!(from, to, hops = path.hops(), "Path found");
    Ok(path)
}
