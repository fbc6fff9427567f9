//! Product Table Component
//!
//! Lists every product with per-row edit and delete actions.

use leptos::prelude::*;
use inventory_core::{format_price, Product};

use crate::context::use_app_context;

#[component]
pub fn ProductTable(products: Memo<Vec<Product>>) -> impl IntoView {
    let ctx = use_app_context();
    let currency = ctx.currency();

    view! {
        <table class="product-table">
            <thead>
                <tr>
                    <th>"Product Name"</th>
                    <th>"Price"</th>
                    <th>"Old Price"</th>
                    <th>"Category"</th>
                    <th>"Active"</th>
                    <th>"Description"</th>
                    <th>"Action"</th>
                </tr>
            </thead>
            <tbody>
                // Rows are rebuilt from the snapshot so in-place edits re-render
                {move || products.get().into_iter().map(|product| {
                    let id = product.id;
                    let price = format_price(&currency, product.price);
                    let old_price = product.old_price
                        .map(|amount| format_price(&currency, amount))
                        .unwrap_or_default();
                    view! {
                        <tr>
                            <td>{product.name.clone()}</td>
                            <td>{price}</td>
                            <td>{old_price}</td>
                            <td>{product.category.as_str()}</td>
                            <td>{product.active_label()}</td>
                            <td>{product.description.clone()}</td>
                            <td class="row-actions">
                                <button class="edit-btn" on:click=move |_| ctx.open_edit(id)>"Edit"</button>
                                <button class="delete-btn" on:click=move |_| ctx.request_row_delete(id)>"Delete"</button>
                            </td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}
