//! `POST /relationships/*`.
//!
//! A name that matches no node is not an error: nothing is written and the
//! confirmation is still returned.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use kinship_core::{present, RelationshipKind};
use serde::Deserialize;

use super::{json_body, Message};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PersonPair {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Residency {
    pub person: Option<String>,
    pub location: Option<String>,
}

pub async fn create_friendship(
    State(state): State<AppState>,
    payload: Result<Json<PersonPair>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let body = json_body(payload)?;
    link_people(&state, RelationshipKind::FriendOf, &body).await
}

pub async fn create_fatherhood(
    State(state): State<AppState>,
    payload: Result<Json<PersonPair>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let body = json_body(payload)?;
    link_people(&state, RelationshipKind::FatherOf, &body).await
}

pub async fn create_residency(
    State(state): State<AppState>,
    payload: Result<Json<Residency>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let body = json_body(payload)?;
    let (Some(person), Some(location)) = (
        present(body.person.as_deref()),
        present(body.location.as_deref()),
    ) else {
        return Err(ApiError::validation("Missing person or location"));
    };
    link(&state, RelationshipKind::LivesIn, person, location).await
}

async fn link_people(
    state: &AppState,
    kind: RelationshipKind,
    body: &PersonPair,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let (Some(from), Some(to)) = (present(body.from.as_deref()), present(body.to.as_deref()))
    else {
        return Err(ApiError::validation("Missing from or to name"));
    };
    link(state, kind, from, to).await
}

async fn link(
    state: &AppState,
    kind: RelationshipKind,
    from: &str,
    to: &str,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    state.store.link(kind, from, to).await?;
    Ok((
        StatusCode::CREATED,
        Json(Message::new(kind.confirmation(from, to))),
    ))
}
