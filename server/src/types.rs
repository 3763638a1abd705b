//! Wire types for the inventory API.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// A single inventory entry. `name` is the store key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: i64,
    pub quantity: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: i64, quantity: i64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// Fields to change on an existing item. `None` leaves the field as is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub price: Option<i64>,
    pub quantity: Option<i64>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.quantity.is_none()
    }

    pub fn apply(self, item: &mut Item) {
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
    }
}

/// Status envelope used for errors and for delete confirmations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
    pub status_code: u16,
}

impl Message {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status_code: status.as_u16(),
        }
    }
}

/// The four items every default store starts with.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new("cpu_amd", 24999, 12),
        Item::new("cpu_intel", 20999, 24),
        Item::new("gpu_amd", 47999, 40),
        Item::new("gpu_nvidia", 89999, 5),
    ]
}
