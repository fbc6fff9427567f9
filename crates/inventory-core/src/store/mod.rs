//! Inventory Store
//!
//! Owns the authoritative product collection and its durable mirror.
//! Every mutation rewrites the whole snapshot through the injected
//! [`ProductStorage`]; in-memory state changes only after the write lands.

use crate::domain::{DomainError, DomainResult, Entity, Product, ProductId};
use crate::editor::ProductDraft;
use crate::repository::ProductStorage;


/// Source of fresh product ids
pub trait IdSource {
    fn next_id(&mut self) -> ProductId;
}

/// Ids taken from the wall clock in milliseconds
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIds;

impl IdSource for TimestampIds {
    fn next_id(&mut self) -> ProductId {
        chrono::Utc::now().timestamp_millis().max(0) as ProductId
    }
}

/// Ids counting up from a fixed start
#[derive(Debug, Clone, Copy)]
pub struct SequentialIds(pub ProductId);

impl Default for SequentialIds {
    fn default() -> Self {
        SequentialIds(1)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> ProductId {
        let id = self.0;
        self.0 += 1;
        id
    }
}

pub struct InventoryStore<S, I = TimestampIds> {
    storage: S,
    ids: I,
    products: Vec<Product>,
}

impl<S: ProductStorage, I: IdSource + Default> InventoryStore<S, I> {
    /// Load the persisted collection, falling back to empty on any failure
    pub fn load(storage: S) -> Self {
        Self::load_with_ids(storage, I::default())
    }
}

impl<S: ProductStorage, I: IdSource> InventoryStore<S, I> {
    pub fn load_with_ids(storage: S, ids: I) -> Self {
        let products = read_or_empty(&storage);
        Self { storage, ids, products }
    }

    /// Re-read the persisted snapshot, replacing in-memory state
    pub fn reload(&mut self) {
        self.products = read_or_empty(&self.storage);
    }

    /// Products in insertion order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Insert or replace a product from a draft.
    ///
    /// A draft whose id matches a record overwrites that record entirely.
    /// Any other draft becomes a new record with a fresh id.
    pub fn save(&mut self, draft: ProductDraft) -> DomainResult<Product> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|f| f.label()).collect();
            return Err(DomainError::InvalidInput(format!("missing {}", names.join(", "))));
        }

        let existing = draft.id.and_then(|id| self.products.iter().position(|p| p.id() == id));
        let mut updated = self.products.clone();
        let product = match existing {
            Some(index) => {
                let product = draft.into_product(updated[index].id)?;
                updated[index] = product.clone();
                log::debug!("Updating product {}", product.id);
                product
            }
            None => {
                let id = self.fresh_id();
                let product = draft.into_product(id)?;
                updated.push(product.clone());
                log::debug!("Creating product {}", id);
                product
            }
        };

        self.commit(updated)?;
        Ok(product)
    }

    /// Remove a product by id. Unknown ids are a no-op and return `false`.
    pub fn remove(&mut self, id: ProductId) -> DomainResult<bool> {
        let mut updated = self.products.clone();
        updated.retain(|p| p.id() != id);
        let removed = updated.len() != self.products.len();
        if removed {
            log::debug!("Removing product {}", id);
        } else {
            log::debug!("Remove of unknown product {} ignored", id);
        }
        self.commit(updated)?;
        Ok(removed)
    }

    fn commit(&mut self, updated: Vec<Product>) -> DomainResult<()> {
        if let Err(e) = self.storage.put(&updated) {
            log::error!("Failed to persist {} products: {}", updated.len(), e);
            return Err(e);
        }
        self.products = updated;
        Ok(())
    }

    fn fresh_id(&mut self) -> ProductId {
        let candidate = self.ids.next_id();
        if self.products.iter().any(|p| p.id == candidate) {
            // Same-millisecond creation; step past the largest id
            self.products.iter().map(|p| p.id).max().unwrap_or(candidate) + 1
        } else {
            candidate
        }
    }
}

fn read_or_empty<S: ProductStorage>(storage: &S) -> Vec<Product> {
    match storage.get() {
        Ok(Some(products)) => {
            log::info!("Loaded {} products", products.len());
            products
        }
        Ok(None) => {
            log::info!("No stored products, starting empty");
            Vec::new()
        }
        Err(e) => {
            log::warn!("Ignoring unreadable product snapshot: {}", e);
            Vec::new()
        }
    }
}
