//! Synchronous API client core for the inventory service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller executes the round-trip, which keeps
//! the core deterministic and testable.
//!
//! # Design
//! - `InventoryClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - Query values are percent-encoded, so item names may hold any text.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::InventoryClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Item, ItemUpdate, Message};
