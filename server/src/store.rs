//! The in-memory inventory store.
//!
//! # Design
//! A single `RwLock` guards the whole map. Reads share the lock; every
//! mutation does its existence check and its write under one write guard,
//! so two requests racing on the same name cannot both succeed or lose an
//! update.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::error::InventoryError;
use crate::types::{seed_items, Item, ItemPatch};

#[derive(Debug, Default)]
pub struct Inventory {
    items: RwLock<HashMap<String, Item>>,
}

impl Inventory {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the default seed items.
    pub fn seeded() -> Self {
        Self::from_items(seed_items())
    }

    /// Builds a store keyed by each item's name. Later duplicates win.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.name.clone(), item))
            .collect();
        Self {
            items: RwLock::new(items),
        }
    }

    /// Snapshot of every stored item, keyed by name.
    pub async fn list(&self) -> HashMap<String, Item> {
        self.items.read().await.clone()
    }

    pub async fn show(&self, name: &str) -> Result<Item, InventoryError> {
        self.items
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or(InventoryError::NotFound)
    }

    pub async fn create(&self, item: Item) -> Result<(), InventoryError> {
        let mut items = self.items.write().await;
        if items.contains_key(&item.name) {
            return Err(InventoryError::AlreadyExists(item.name));
        }
        items.insert(item.name.clone(), item);
        Ok(())
    }

    /// Applies `patch` to the named item and returns the result.
    pub async fn update(&self, name: &str, patch: ItemPatch) -> Result<Item, InventoryError> {
        self.update_with(name, || Ok(patch)).await
    }

    /// Looks the item up, then builds the patch, then applies it, all under
    /// one write guard. A missing item wins over a bad patch, and a failed
    /// patch leaves the item untouched.
    pub async fn update_with<F>(&self, name: &str, patch: F) -> Result<Item, InventoryError>
    where
        F: FnOnce() -> Result<ItemPatch, InventoryError>,
    {
        let mut items = self.items.write().await;
        let item = items.get_mut(name).ok_or(InventoryError::NotFound)?;
        patch()?.apply(item);
        Ok(item.clone())
    }

    /// Removes the named item, returning what was stored.
    pub async fn delete(&self, name: &str) -> Result<Item, InventoryError> {
        self.items
            .write()
            .await
            .remove(name)
            .ok_or(InventoryError::NotFound)
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}
