//! Product Inventory Core
//!
//! Layered architecture:
//! - domain: Product entity, categories and errors
//! - repository: Storage abstraction, snapshot codec and backends
//! - store: The inventory store mediating all mutations
//! - editor: Product editor state, drafts and delete confirmation

pub mod config;
pub mod domain;
pub mod editor;
pub mod repository;
pub mod store;

pub use config::InventoryConfig;
pub use domain::{format_price, Category, DomainError, DomainResult, Entity, Product, ProductId};
pub use editor::{
    ConfirmOutcome, DeleteConfirmation, EditorMode, FieldChange, PageState, ProductDraft, ProductEditor,
    RequiredField, SubmitOutcome,
};
pub use repository::{FileStorage, MemoryStorage, ProductStorage};
pub use store::{IdSource, InventoryStore, SequentialIds, TimestampIds};
