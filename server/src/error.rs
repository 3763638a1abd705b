//! Errors returned by store operations and argument parsing.
//!
//! Every variant maps to one HTTP status; the `Display` text is the
//! `message` field of the JSON envelope sent back to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::types::Message;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// A request argument was missing or malformed. Carries the field name.
    #[error("invalid {0}")]
    InvalidArgument(&'static str),

    #[error("item not found")]
    NotFound,

    #[error("item {0} already exists")]
    AlreadyExists(String),
}

impl InventoryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            InventoryError::InvalidArgument(_) | InventoryError::AlreadyExists(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            InventoryError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(Message::new(self.to_string(), status))).into_response()
    }
}
