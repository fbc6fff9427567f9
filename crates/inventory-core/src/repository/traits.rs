//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for the persistent snapshot slot.
//! Implementations can use browser localStorage, a file, memory, etc.

use crate::domain::{DomainResult, Product};

/// A single persistent slot holding the whole product collection.
///
/// Writes always replace the full snapshot; there is no delta persistence.
pub trait ProductStorage {
    /// Read the stored collection. `Ok(None)` when the slot was never written.
    fn get(&self) -> DomainResult<Option<Vec<Product>>>;

    /// Replace the stored collection.
    fn put(&mut self, products: &[Product]) -> DomainResult<()>;
}

impl<S: ProductStorage + ?Sized> ProductStorage for Box<S> {
    fn get(&self) -> DomainResult<Option<Vec<Product>>> {
        (**self).get()
    }

    fn put(&mut self, products: &[Product]) -> DomainResult<()> {
        (**self).put(products)
    }
}
