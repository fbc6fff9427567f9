//! UI Components
//!
//! Leptos components for the inventory page.

mod category_select;
mod confirm_dialog;
mod product_editor;
mod product_table;

pub use category_select::CategorySelect;
pub use confirm_dialog::ConfirmDialog;
pub use product_editor::ProductEditorPanel;
pub use product_table::ProductTable;
