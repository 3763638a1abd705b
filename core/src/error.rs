//! Error types for the inventory API client.
//!
//! # Design
//! `NotFound` gets its own variant because callers routinely branch on it.
//! Other failures that come back with the server's `{message, status_code}`
//! envelope land in `Rejected`; anything else keeps the raw status and body
//! in `HttpError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the item does not exist.
    #[error("item not found")]
    NotFound,

    /// The server refused the request and explained why.
    #[error("HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),
}
