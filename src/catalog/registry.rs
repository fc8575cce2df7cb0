//! Catalog Registry
//!
//! The in-memory store of catalog items shared by every request handler.
//! A single reader/writer lock guards one map: `upsert` and `purchase` take
//! the write side, `get`, `list` and `len` take the read side. No I/O ever
//! happens while the lock is held.

use super::models::CatalogItem;
use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// Reasons a purchase is refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PurchaseError {
    #[error("egg not found: {0}")]
    NotFound(String),

    #[error("quantity must be positive (available: {available})")]
    InvalidQuantity { available: u32 },

    #[error("only {available} available, {requested} requested")]
    Insufficient { available: u32, requested: u64 },
}

/// Concurrency-safe mapping from item id to [`CatalogItem`]
#[derive(Debug, Default)]
pub struct CatalogRegistry {
    items: RwLock<HashMap<String, CatalogItem>>,
}

impl CatalogRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `item` under its id, replacing any previous entry wholesale
    pub fn upsert(&self, item: CatalogItem) {
        self.write().insert(item.id.clone(), item);
    }

    /// Returns a copy of the item stored under `id`
    pub fn get(&self, id: &str) -> Option<CatalogItem> {
        self.read().get(id).cloned()
    }

    /// Snapshot of every item, taken under one read acquisition.
    ///
    /// The returned values are owned copies; later writes never show up in
    /// a snapshot already handed out. Order is unspecified.
    pub fn list(&self) -> Vec<CatalogItem> {
        self.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Takes `quantity` eggs out of stock and returns the updated item.
    ///
    /// Check and decrement happen under the same write guard, so concurrent
    /// buyers can never drive the stock below zero.
    pub fn purchase(&self, id: &str, quantity: i64) -> Result<CatalogItem, PurchaseError> {
        let mut items = self.write();
        let item = items
            .get_mut(id)
            .ok_or_else(|| PurchaseError::NotFound(id.to_string()))?;

        let available = item.quantity_available;
        if quantity <= 0 {
            return Err(PurchaseError::InvalidQuantity { available });
        }

        let requested = quantity as u64;
        if requested > u64::from(available) {
            return Err(PurchaseError::Insufficient {
                available,
                requested,
            });
        }

        // requested <= available, so it fits in a u32
        item.quantity_available = available - requested as u32;
        Ok(item.clone())
    }

    // Every critical section leaves the map consistent, so a poisoned lock
    // still guards valid data.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CatalogItem>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CatalogItem>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}
