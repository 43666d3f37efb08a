//! `/people` and `/location/:name/people`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kinship_core::{present, Location, Person, PersonUpdate};
use serde::Deserialize;

use super::{json_body, Message};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct NewPerson {
    pub name: Option<String>,
    pub email: Option<String>,
}

pub async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<Person>>, ApiError> {
    Ok(Json(state.store.list_people().await?))
}

pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<NewPerson>, JsonRejection>,
) -> Result<(StatusCode, Json<Person>), ApiError> {
    let body = json_body(payload)?;
    let (Some(name), Some(email)) = (
        present(body.name.as_deref()),
        present(body.email.as_deref()),
    ) else {
        return Err(ApiError::validation("Missing name or email"));
    };

    let person = state.store.create_person(name, email).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

pub async fn get_person(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Person>, ApiError> {
    let Path(name) = path?;
    state
        .store
        .get_person(&name)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Person not found"))
}

pub async fn update_person(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<PersonUpdate>, JsonRejection>,
) -> Result<Json<Person>, ApiError> {
    let Path(name) = path?;
    let update = json_body(payload)?.normalized();
    if update.is_empty() {
        return Err(ApiError::validation("No new data provided"));
    }

    state
        .store
        .update_person(&name, &update)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Person not found"))
}

pub async fn delete_person(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(name) = path?;
    if state.store.delete_person(&name).await? == 0 {
        return Err(ApiError::not_found("Person not found"));
    }
    Ok(Json(Message::new(format!("{name} deleted successfully"))))
}

/// Outgoing FRIEND_OF neighbours. Unknown people have no friends.
pub async fn list_friends(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Person>>, ApiError> {
    let Path(name) = path?;
    Ok(Json(state.store.friends_of(&name).await?))
}

pub async fn get_location(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Location>, ApiError> {
    let Path(name) = path?;
    state
        .store
        .location_of(&name)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Location not found"))
}

pub async fn list_residents(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Person>>, ApiError> {
    let Path(location) = path?;
    Ok(Json(state.store.residents_of(&location).await?))
}
