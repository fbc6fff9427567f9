//! In-Memory Storage
//!
//! Holds the serialized snapshot text in memory. Used in tests and
//! anywhere no durable slot is available.

use crate::domain::{DomainError, DomainResult, Product};
use super::snapshot;
use super::traits::ProductStorage;

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    snapshot: Option<String>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw snapshot text already in the slot
    pub fn with_snapshot(text: impl Into<String>) -> Self {
        Self {
            snapshot: Some(text.into()),
            ..Self::default()
        }
    }

    /// Make every subsequent `put` fail, simulating a full or unavailable slot
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw text currently stored
    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }

    /// Number of successful writes
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ProductStorage for MemoryStorage {
    fn get(&self) -> DomainResult<Option<Vec<Product>>> {
        self.snapshot.as_deref().map(snapshot::decode).transpose()
    }

    fn put(&mut self, products: &[Product]) -> DomainResult<()> {
        if self.fail_writes {
            return Err(DomainError::Storage("memory slot rejected write".to_string()));
        }
        self.snapshot = Some(snapshot::encode(products)?);
        self.writes += 1;
        Ok(())
    }
}
