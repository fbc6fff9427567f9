//! Category Select Component

use leptos::prelude::*;
use inventory_core::Category;

/// Dropdown over the fixed category set with an empty placeholder
#[component]
pub fn CategorySelect(
    selected: Signal<Option<Category>>,
    on_change: impl Fn(web_sys::Event) + 'static,
) -> impl IntoView {
    view! {
        <select name="category" required class="field-input" on:change=on_change>
            <option value="" prop:selected=move || selected.get().is_none()>"Select Category"</option>
            {Category::ALL.iter().map(|category| {
                let category = *category;
                view! {
                    <option
                        value=category.as_str()
                        prop:selected=move || selected.get() == Some(category)
                    >
                        {category.as_str()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
