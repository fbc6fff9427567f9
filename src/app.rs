//! Product Inventory App
//!
//! Main application component: toolbar, product table, editor panel and
//! the delete confirmation dialog.

use leptos::prelude::*;
use inventory_core::{InventoryConfig, InventoryStore};

use crate::components::{ConfirmDialog, ProductEditorPanel, ProductTable};
use crate::context::AppContext;
use crate::storage::BrowserStorage;

#[component]
pub fn App() -> impl IntoView {
    let config = InventoryConfig::default();
    let inventory = InventoryStore::load(BrowserStorage::new(config.storage_key.clone()));
    tracing::info!("[APP] Starting with {} products", inventory.len());

    let ctx = AppContext::new(inventory, config);
    provide_context(ctx);

    let products = Memo::new(move |_| ctx.inventory.with(|s| s.products().to_vec()));
    let delete_open = Signal::derive(move || ctx.delete_pending());

    view! {
        <div class="app-layout">
            <h1 class="app-title">"Product Inventory"</h1>

            <div class="toolbar">
                <button class="add-btn" on:click=move |_| ctx.open_create()>
                    "+ Add Product"
                </button>
            </div>

            <ProductTable products=products />

            <p class="item-count">{move || format!("{} products", products.get().len())}</p>

            <ProductEditorPanel />

            <ConfirmDialog
                open=delete_open
                title="Confirm Deletion"
                message="Are you sure you want to delete this product?"
                on_confirm=Callback::new(move |_: ()| ctx.confirm_delete())
                on_cancel=Callback::new(move |_: ()| ctx.cancel_delete())
            />
        </div>
    }
}
