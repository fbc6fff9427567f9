//! File Storage
//!
//! Keeps the snapshot in a single JSON file, rewritten on every `put`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{DomainResult, Product};
use super::snapshot;
use super::traits::ProductStorage;

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductStorage for FileStorage {
    fn get(&self) -> DomainResult<Option<Vec<Product>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        snapshot::decode(&text).map(Some)
    }

    fn put(&mut self, products: &[Product]) -> DomainResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let text = snapshot::encode(products)?;
        // Write next to the target and rename so readers never see half a file
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("Wrote {} products to {}", products.len(), self.path.display());
        Ok(())
    }
}
