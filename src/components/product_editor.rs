//! Product Editor Panel
//!
//! Side panel form for creating or editing one product. Every control
//! reports through its `name` attribute; the draft only changes by
//! whole-field replacement.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use inventory_core::{EditorMode, FieldChange};

use crate::components::CategorySelect;
use crate::context::use_app_context;

/// Read the field name and value off whichever control fired the event
fn field_change(ev: &web_sys::Event) -> Option<FieldChange> {
    let target = ev.target()?;
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        return FieldChange::from_input(&input.name(), &input.value(), input.checked());
    }
    if let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() {
        return FieldChange::from_input(&select.name(), &select.value(), false);
    }
    if let Some(area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return FieldChange::from_input(&area.name(), &area.value(), false);
    }
    None
}

#[component]
pub fn ProductEditorPanel() -> impl IntoView {
    let ctx = use_app_context();
    let page = ctx.page;

    // Inputs are seeded each time the panel opens, not on every keystroke,
    // so partially typed numbers are not rewritten under the cursor.
    // Reopening the same target also reseeds: the generation moves.
    let opened = Memo::new(move |_| page.with(|p| (p.editor().mode(), p.editor().generation())));
    let mode = Memo::new(move |_| opened.get().0);
    let seed = move |read: fn(&inventory_core::ProductDraft) -> String| {
        move || {
            let _ = opened.get();
            page.with_untracked(|p| read(p.editor().draft()))
        }
    };

    let on_field = move |ev: web_sys::Event| {
        if let Some(change) = field_change(&ev) {
            ctx.change(change);
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    let selected_category = Signal::derive(move || page.with(|p| p.editor().draft().category));

    view! {
        <Show when=move || mode.get() != EditorMode::Closed>
            <div class="editor-panel">
                <div class="editor-header">
                    <h2 class="editor-title">{move || page.with(|p| p.editor().title())}</h2>
                    <button class="close-btn" on:click=move |_| ctx.close_editor()>"×"</button>
                </div>

                <form class="editor-form" on:submit=on_submit>
                    <div class="editor-section">
                        <label class="editor-label">"Product Name"</label>
                        <input
                            type="text"
                            name="name"
                            required
                            class="field-input"
                            prop:value=seed(|d| d.name.clone())
                            on:input=on_field
                        />
                    </div>

                    <div class="editor-section">
                        <label class="editor-label">"Price"</label>
                        <input
                            type="number"
                            name="price"
                            step="any"
                            required
                            class="field-input"
                            prop:value=seed(|d| d.price_input())
                            on:input=on_field
                        />
                    </div>

                    <div class="editor-section">
                        <label class="editor-label">"Old Price"</label>
                        <input
                            type="number"
                            name="oldPrice"
                            step="any"
                            class="field-input"
                            prop:value=seed(|d| d.old_price_input())
                            on:input=on_field
                        />
                    </div>

                    <div class="editor-section">
                        <label class="editor-label">"Category"</label>
                        <CategorySelect selected=selected_category on_change=on_field />
                    </div>

                    <div class="editor-section checkbox-row">
                        <input
                            type="checkbox"
                            name="isActive"
                            prop:checked=move || {
                                let _ = opened.get();
                                page.with_untracked(|p| p.editor().draft().is_active)
                            }
                            on:change=on_field
                        />
                        <label>"Is Active"</label>
                    </div>

                    <div class="editor-section">
                        <label class="editor-label">"Description"</label>
                        <textarea
                            name="description"
                            rows="4"
                            class="field-input"
                            prop:value=seed(|d| d.description.clone())
                            on:input=on_field
                        ></textarea>
                    </div>

                    <div class="editor-actions">
                        <button type="submit" class="submit-btn">
                            {move || page.with(|p| p.editor().submit_label())}
                        </button>
                        <Show when=move || page.with(|p| p.editor().is_editing())>
                            <button
                                type="button"
                                class="delete-btn"
                                on:click=move |_| ctx.request_editor_delete()
                            >
                                "Delete"
                            </button>
                        </Show>
                    </div>
                </form>
            </div>
        </Show>
    }
}
