//! Query-string arguments for each route.
//!
//! Handlers extract the raw `(key, value)` pairs and build these structs
//! from them. A repeated key resolves to its first value and a missing key
//! reads as an empty string, so "absent" and "empty" behave the same.
//! Numeric fields stay as strings until the handler asks for them to be
//! validated, so the error names the field.

use crate::error::InventoryError;
use crate::types::{Item, ItemPatch};

/// Decoded query string, in the order the keys appeared.
pub type QueryPairs = Vec<(String, String)>;

fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn first_or_empty(pairs: &[(String, String)], key: &str) -> String {
    first(pairs, key).unwrap_or_default().to_string()
}

/// `?item=<name>`, used by show and delete.
#[derive(Debug, Default)]
pub struct ItemQuery {
    pub item: String,
}

impl ItemQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            item: first_or_empty(pairs, "item"),
        }
    }
}

/// `?name=&price=&quantity=`, used by create.
#[derive(Debug, Default)]
pub struct CreateQuery {
    pub name: String,
    pub price: String,
    pub quantity: String,
}

impl CreateQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            name: first_or_empty(pairs, "name"),
            price: first_or_empty(pairs, "price"),
            quantity: first_or_empty(pairs, "quantity"),
        }
    }

    /// Validates price, then quantity, then name.
    pub fn into_item(self) -> Result<Item, InventoryError> {
        let price = parse_int("price", &self.price)?;
        let quantity = parse_int("quantity", &self.quantity)?;
        if self.name.is_empty() {
            return Err(InventoryError::InvalidArgument("name"));
        }
        Ok(Item {
            name: self.name,
            price,
            quantity,
        })
    }
}

/// `?item=<name>[&price=][&quantity=]`, used by update.
#[derive(Debug, Default)]
pub struct UpdateQuery {
    pub item: String,
    pub price: Option<String>,
    pub quantity: Option<String>,
}

impl UpdateQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            item: first_or_empty(pairs, "item"),
            price: first(pairs, "price").map(str::to_string),
            quantity: first(pairs, "quantity").map(str::to_string),
        }
    }

    /// Validates both fields before anything is applied.
    pub fn patch(&self) -> Result<ItemPatch, InventoryError> {
        Ok(ItemPatch {
            price: parse_optional_int("price", self.price.as_deref())?,
            quantity: parse_optional_int("quantity", self.quantity.as_deref())?,
        })
    }
}

fn parse_int(field: &'static str, raw: &str) -> Result<i64, InventoryError> {
    raw.parse::<i64>()
        .map_err(|_| InventoryError::InvalidArgument(field))
}

fn parse_optional_int(field: &'static str, raw: Option<&str>) -> Result<Option<i64>, InventoryError> {
    match raw {
        None | Some("") => Ok(None),
        Some(raw) => parse_int(field, raw).map(Some),
    }
}
