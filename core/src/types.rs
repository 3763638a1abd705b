//! DTOs for the inventory API.
//!
//! Defined independently of the server crate; the integration test catches
//! schema drift between the two.

use serde::{Deserialize, Serialize};

/// A single inventory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: i64,
    pub quantity: i64,
}

/// Fields to change on an existing item. `None` fields are not sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    pub price: Option<i64>,
    pub quantity: Option<i64>,
}

/// The `{message, status_code}` envelope used for errors and delete
/// confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
    pub status_code: u16,
}
