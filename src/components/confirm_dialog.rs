//! Confirm Dialog Component
//!
//! Modal confirmation gating destructive actions.

use leptos::prelude::*;

/// Modal dialog with confirm/cancel actions
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `on_confirm` - Callback when the user confirms
/// * `on_cancel` - Callback when the user backs out
#[component]
pub fn ConfirmDialog(
    open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <h2 class="modal-title">{title.clone()}</h2>
                    <p>{message.clone()}</p>
                    <div class="modal-actions">
                        <button
                            class="confirm-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_confirm.run(());
                            }
                        >
                            "Yes, Delete"
                        </button>
                        <button
                            class="cancel-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_cancel.run(());
                            }
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
