//! Browser Storage
//!
//! `window.localStorage` slot holding the product snapshot.

use inventory_core::repository::snapshot;
use inventory_core::{DomainError, DomainResult, InventoryStore, Product, ProductStorage};

/// Inventory store backed by the browser slot
pub type Inventory = InventoryStore<BrowserStorage>;

/// One named localStorage key. The handle is looked up on every call, so
/// the adapter itself holds no JS objects.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> Result<web_sys::Storage, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    window
        .local_storage()
        .map_err(|e| format!("{:?}", e))?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

impl ProductStorage for BrowserStorage {
    fn get(&self) -> DomainResult<Option<Vec<Product>>> {
        let storage = local_storage().map_err(DomainError::Storage)?;
        let text = storage
            .get_item(&self.key)
            .map_err(|e| DomainError::Storage(format!("{:?}", e)))?;
        text.as_deref().map(snapshot::decode).transpose()
    }

    fn put(&mut self, products: &[Product]) -> DomainResult<()> {
        let storage = local_storage().map_err(DomainError::Storage)?;
        let text = snapshot::encode(products)?;
        storage
            .set_item(&self.key, &text)
            .map_err(|e| DomainError::Storage(format!("{:?}", e)))
    }
}
