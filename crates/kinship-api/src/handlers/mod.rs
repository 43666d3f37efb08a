//! HTTP request handlers.

pub mod health;
pub mod paths;
pub mod people;
pub mod relationships;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;

/// Body of confirmation responses.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Unwrap a JSON body. A request without a JSON content type is read as an
/// empty object, so field validation reports what is missing.
pub(crate) fn json_body<T: Default>(
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}
