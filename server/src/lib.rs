//! In-memory inventory store served over HTTP.
//!
//! # Overview
//! Clients list, show, create, update and delete named items (`name`,
//! `price`, `quantity`). All arguments travel in the query string and every
//! response is JSON.
//!
//! # Design
//! - [`Inventory`] owns the map behind one lock and is shared with the
//!   router as state, so tests build a fresh store per case.
//! - [`params`] turns raw query pairs into validated arguments; a repeated
//!   key resolves to its first value. An update looks the item up first and
//!   then applies every supplied field or none.
//! - [`InventoryError`] carries both the HTTP status and the message text of
//!   the `{message, status_code}` envelope.

pub mod config;
pub mod error;
pub mod http;
pub mod params;
pub mod store;
pub mod types;

pub use config::Config;
pub use error::InventoryError;
pub use http::{app, app_with, run};
pub use store::Inventory;
pub use types::{seed_items, Item, ItemPatch, Message};
