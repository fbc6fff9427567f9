//! Product Editor
//!
//! State behind the side panel: closed, creating, or editing one record.
//! Holds a draft until submit hands it to the [`InventoryStore`].

mod confirm;
mod draft;
mod page;

pub use confirm::{ConfirmOutcome, DeleteConfirmation};
pub use draft::{parse_amount, FieldChange, ProductDraft, RequiredField};
pub use page::PageState;

use crate::domain::{DomainResult, Product, ProductId};
use crate::repository::ProductStorage;
use crate::store::{IdSource, InventoryStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Closed,
    Create,
    Edit(ProductId),
}

/// Result of submitting the editor
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Draft stored; the editor has closed
    Saved(Product),
    /// Required fields are empty; nothing was stored
    Blocked(Vec<RequiredField>),
    /// Submit while closed
    NotOpen,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductEditor {
    mode: EditorMode,
    draft: ProductDraft,
    delete: DeleteConfirmation,
    /// Bumped by every open, so a view can tell a fresh form from the same one
    generation: u64,
}

impl ProductEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_create(&mut self) {
        *self = Self {
            mode: EditorMode::Create,
            generation: self.generation + 1,
            ..Self::default()
        };
    }

    /// Open on an existing record; the draft starts as a full copy of it
    pub fn open_edit(&mut self, product: &Product) {
        *self = Self {
            mode: EditorMode::Edit(product.id),
            draft: ProductDraft::from_product(product),
            delete: DeleteConfirmation::Idle,
            generation: self.generation + 1,
        };
    }

    /// Discard the draft without touching storage
    pub fn close(&mut self) {
        *self = Self {
            generation: self.generation,
            ..Self::default()
        };
    }

    /// Count of opens so far. Changes whenever the draft is reseeded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != EditorMode::Closed
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Edit(_))
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() { "Edit Product" } else { "New Product" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Update" } else { "Create" }
    }

    /// Apply one field change. Ignored while closed.
    pub fn change(&mut self, change: FieldChange) {
        if self.is_open() {
            self.draft = self.draft.with(change);
        }
    }

    /// Hand the draft to the store.
    ///
    /// On storage failure the error is returned and the editor stays open
    /// with its draft, so the user can retry.
    pub fn submit<S, I>(&mut self, store: &mut InventoryStore<S, I>) -> DomainResult<SubmitOutcome>
    where
        S: ProductStorage,
        I: IdSource,
    {
        if !self.is_open() {
            return Ok(SubmitOutcome::NotOpen);
        }
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            return Ok(SubmitOutcome::Blocked(missing));
        }
        let saved = store.save(self.draft.clone())?;
        self.close();
        Ok(SubmitOutcome::Saved(saved))
    }

    /// Ask to delete the record being edited. Only valid in edit mode.
    pub fn request_delete(&mut self) -> bool {
        match self.mode {
            EditorMode::Edit(id) => {
                self.delete.request(id);
                true
            }
            _ => false,
        }
    }

    pub fn delete_pending(&self) -> Option<ProductId> {
        self.delete.pending()
    }

    /// Confirm a pending delete: removes the record and closes the editor.
    ///
    /// Returns `Ok(None)` when no delete was pending.
    pub fn confirm_delete<S, I>(&mut self, store: &mut InventoryStore<S, I>) -> DomainResult<Option<ProductId>>
    where
        S: ProductStorage,
        I: IdSource,
    {
        let Some(id) = self.delete.pending() else {
            return Ok(None);
        };
        store.remove(id)?;
        self.close();
        Ok(Some(id))
    }

    /// Back out of a pending delete, keeping the draft
    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
    }

    /// Close if the editor is showing a record that was removed elsewhere
    pub fn forget(&mut self, id: ProductId) {
        if self.mode == EditorMode::Edit(id) {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::repository::MemoryStorage;
    use crate::store::SequentialIds;

    fn empty_store() -> InventoryStore<MemoryStorage, SequentialIds> {
        InventoryStore::load(MemoryStorage::new())
    }

    fn fill_required(editor: &mut ProductEditor) {
        editor.change(FieldChange::Name("Tomato".to_string()));
        editor.change(FieldChange::Price(Some(40.0)));
        editor.change(FieldChange::Category(Some(Category::Vegetables)));
    }

    #[test]
    fn test_starts_closed() {
        let editor = ProductEditor::new();
        assert!(!editor.is_open());
        assert_eq!(editor.mode(), EditorMode::Closed);
    }

    #[test]
    fn test_create_mode_labels() {
        let mut editor = ProductEditor::new();
        editor.open_create();
        assert_eq!(editor.mode(), EditorMode::Create);
        assert_eq!(editor.title(), "New Product");
        assert_eq!(editor.submit_label(), "Create");
        assert_eq!(editor.draft(), &ProductDraft::default());
    }

    #[test]
    fn test_reopening_same_target_starts_new_generation() {
        let milk = Product::new(4, "Milk", 50.0, Category::DairyAndCreams);
        let mut editor = ProductEditor::new();

        editor.open_edit(&milk);
        let first = editor.generation();
        editor.change(FieldChange::Price(Some(55.0)));
        editor.open_edit(&milk);

        assert_eq!(editor.mode(), EditorMode::Edit(4));
        assert_ne!(editor.generation(), first);
        assert_eq!(editor.draft().price, Some(50.0));

        editor.open_create();
        let create = editor.generation();
        editor.change(FieldChange::Name("typed".to_string()));
        editor.open_create();
        assert_ne!(editor.generation(), create);
        assert_eq!(editor.draft(), &ProductDraft::default());
    }

    #[test]
    fn test_close_keeps_generation_moving_forward() {
        let mut editor = ProductEditor::new();
        editor.open_create();
        let opened = editor.generation();
        editor.close();
        assert_eq!(editor.generation(), opened);
        editor.open_create();
        assert!(editor.generation() > opened);
    }

    #[test]
    fn test_edit_mode_seeds_full_record() {
        let mut product = Product::new(3, "Ghee", 500.0, Category::DairyAndCreams);
        product.description = "Cow ghee".to_string();
        let mut editor = ProductEditor::new();
        editor.open_edit(&product);

        assert_eq!(editor.mode(), EditorMode::Edit(3));
        assert_eq!(editor.title(), "Edit Product");
        assert_eq!(editor.submit_label(), "Update");
        assert_eq!(editor.draft().description, "Cow ghee");
    }

    #[test]
    fn test_submit_blocked_on_missing_fields() {
        let mut store = empty_store();
        let mut editor = ProductEditor::new();
        editor.open_create();
        editor.change(FieldChange::Name("Tomato".to_string()));

        let outcome = editor.submit(&mut store).unwrap();

        assert_eq!(outcome, SubmitOutcome::Blocked(vec![RequiredField::Price, RequiredField::Category]));
        assert!(editor.is_open());
        assert!(store.is_empty());
        assert_eq!(store.storage().writes(), 0);
    }

    #[test]
    fn test_submit_saves_and_closes() {
        let mut store = empty_store();
        let mut editor = ProductEditor::new();
        editor.open_create();
        fill_required(&mut editor);

        let outcome = editor.submit(&mut store).unwrap();

        match outcome {
            SubmitOutcome::Saved(product) => assert_eq!(product.name, "Tomato"),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!editor.is_open());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_submit_failure_keeps_draft() {
        let mut storage = MemoryStorage::new();
        storage.fail_writes(true);
        let mut store: InventoryStore<_, SequentialIds> = InventoryStore::load(storage);
        let mut editor = ProductEditor::new();
        editor.open_create();
        fill_required(&mut editor);

        assert!(editor.submit(&mut store).is_err());
        assert!(editor.is_open());
        assert_eq!(editor.draft().name, "Tomato");
        assert!(store.is_empty());
    }

    #[test]
    fn test_submit_while_closed() {
        let mut store = empty_store();
        let mut editor = ProductEditor::new();
        assert_eq!(editor.submit(&mut store).unwrap(), SubmitOutcome::NotOpen);
    }

    #[test]
    fn test_close_discards_draft() {
        let mut store = empty_store();
        let mut editor = ProductEditor::new();
        editor.open_create();
        fill_required(&mut editor);
        editor.close();

        assert!(!editor.is_open());
        assert_eq!(editor.draft(), &ProductDraft::default());
        assert_eq!(store.storage().writes(), 0);
        assert_eq!(editor.submit(&mut store).unwrap(), SubmitOutcome::NotOpen);
    }

    #[test]
    fn test_delete_not_available_in_create_mode() {
        let mut editor = ProductEditor::new();
        editor.open_create();
        assert!(!editor.request_delete());
        assert_eq!(editor.delete_pending(), None);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut store = empty_store();
        let saved = store.save(ProductDraft {
            name: "Tomato".to_string(),
            price: Some(40.0),
            category: Some(Category::Vegetables),
            ..ProductDraft::default()
        }).unwrap();

        let mut editor = ProductEditor::new();
        editor.open_edit(&saved);
        assert!(editor.request_delete());
        editor.cancel_delete();

        assert_eq!(editor.confirm_delete(&mut store).unwrap(), None);
        assert_eq!(store.len(), 1);
        assert!(editor.is_open());

        editor.request_delete();
        assert_eq!(editor.confirm_delete(&mut store).unwrap(), Some(saved.id));
        assert!(store.is_empty());
        assert!(!editor.is_open());
    }

    #[test]
    fn test_forget_closes_only_matching_record() {
        let product = Product::new(8, "Bread", 35.0, Category::PackagedFood);
        let mut editor = ProductEditor::new();
        editor.open_edit(&product);
        editor.forget(9);
        assert!(editor.is_open());
        editor.forget(8);
        assert!(!editor.is_open());
    }
}
