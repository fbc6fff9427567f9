//! Application Context
//!
//! Shared state provided via Leptos Context API. All mutations of the
//! inventory go through here so components stay thin.

use leptos::prelude::*;
use inventory_core::{FieldChange, InventoryConfig, PageState, ProductId, SubmitOutcome};

use crate::storage::Inventory;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Authoritative product collection and its storage slot
    pub inventory: RwSignal<Inventory>,
    /// Editor panel and pending delete requests
    pub page: RwSignal<PageState>,
    pub config: StoredValue<InventoryConfig>,
}

impl AppContext {
    pub fn new(inventory: Inventory, config: InventoryConfig) -> Self {
        Self {
            inventory: RwSignal::new(inventory),
            page: RwSignal::new(PageState::new()),
            config: StoredValue::new(config),
        }
    }

    pub fn currency(&self) -> String {
        self.config.with_value(|c| c.currency_symbol.clone())
    }

    pub fn open_create(&self) {
        self.page.update(|p| p.editor_mut().open_create());
    }

    pub fn open_edit(&self, id: ProductId) {
        let product = self.inventory.with_untracked(|s| s.get(id).cloned());
        match product {
            Some(product) => self.page.update(|p| p.editor_mut().open_edit(&product)),
            None => tracing::warn!("[APP] Edit requested for unknown product {}", id),
        }
    }

    pub fn close_editor(&self) {
        self.page.update(|p| p.editor_mut().close());
    }

    pub fn change(&self, change: FieldChange) {
        self.page.update(|p| p.editor_mut().change(change));
    }

    /// Submit the editor's draft to the inventory
    pub fn submit(&self) {
        let mut page = self.page.get_untracked();
        let result = self.inventory.try_update(|store| page.editor_mut().submit(store));
        match result {
            Some(Ok(SubmitOutcome::Saved(product))) => {
                tracing::info!("[APP] Saved product {} ({})", product.id, product.name);
            }
            Some(Ok(SubmitOutcome::Blocked(missing))) => {
                let names: Vec<&str> = missing.iter().map(|f| f.label()).collect();
                tracing::warn!("[APP] Submit blocked, missing: {}", names.join(", "));
            }
            Some(Ok(SubmitOutcome::NotOpen)) | None => return,
            Some(Err(e)) => tracing::error!("[APP] Save failed: {}", e),
        }
        self.page.set(page);
    }

    /// Ask to delete a row; nothing happens until confirmed
    pub fn request_row_delete(&self, id: ProductId) {
        self.page.update(|p| p.request_row_delete(id));
    }

    /// Ask to delete the record open in the editor
    pub fn request_editor_delete(&self) {
        self.page.update(|p| {
            p.request_editor_delete();
        });
    }

    /// Whether a delete is waiting on the confirmation dialog
    pub fn delete_pending(&self) -> bool {
        self.page.with(|p| p.delete_pending().is_some())
    }

    pub fn confirm_delete(&self) {
        let mut page = self.page.get_untracked();
        match self.inventory.try_update(|store| page.confirm_delete(store)) {
            Some(Ok(Some(id))) => tracing::info!("[APP] Deleted product {}", id),
            Some(Ok(None)) | None => {}
            Some(Err(e)) => tracing::error!("[APP] Delete failed: {}", e),
        }
        self.page.set(page);
    }

    pub fn cancel_delete(&self) {
        self.page.update(|p| p.cancel_delete());
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
