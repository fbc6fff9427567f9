//! Page State
//!
//! The editor panel plus the table's row-delete request. Both feed the
//! same confirmation dialog, so at most one delete is pending at a time.

use crate::domain::{DomainResult, ProductId};
use crate::repository::ProductStorage;
use crate::store::{IdSource, InventoryStore};
use super::{DeleteConfirmation, ProductEditor};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    editor: ProductEditor,
    row_delete: DeleteConfirmation,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editor(&self) -> &ProductEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut ProductEditor {
        &mut self.editor
    }

    /// Ask to delete a table row, replacing any pending editor delete
    pub fn request_row_delete(&mut self, id: ProductId) {
        self.editor.cancel_delete();
        self.row_delete.request(id);
    }

    /// Ask to delete the record open in the editor, replacing any pending row delete
    pub fn request_editor_delete(&mut self) -> bool {
        if !self.editor.request_delete() {
            return false;
        }
        self.row_delete.cancel();
        true
    }

    /// Id awaiting confirmation, if any
    pub fn delete_pending(&self) -> Option<ProductId> {
        self.editor.delete_pending().or(self.row_delete.pending())
    }

    /// Remove the pending record. Returns `Ok(None)` when nothing was pending.
    pub fn confirm_delete<S, I>(&mut self, store: &mut InventoryStore<S, I>) -> DomainResult<Option<ProductId>>
    where
        S: ProductStorage,
        I: IdSource,
    {
        if self.editor.delete_pending().is_some() {
            return self.editor.confirm_delete(store);
        }
        let Some(id) = self.row_delete.confirm() else {
            return Ok(None);
        };
        store.remove(id)?;
        self.editor.forget(id);
        Ok(Some(id))
    }

    pub fn cancel_delete(&mut self) {
        self.row_delete.cancel();
        self.editor.cancel_delete();
    }
}
