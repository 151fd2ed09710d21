//! Filter Bar Component
//!
//! Three free-text inputs over title, description and owner. Every edit
//! rewrites the shared query, which also snaps paging back to the first
//! page.

use leptos::prelude::*;

use crate::query::ListQuery;

#[component]
pub fn FilterBar(
    query: ReadSignal<ListQuery>,
    set_query: WriteSignal<ListQuery>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <input
                type="text"
                class="filter-input"
                placeholder="🔍 Title..."
                prop:value=move || query.get().title
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_query.update(|q| q.edit_title(value));
                }
            />
            <input
                type="text"
                class="filter-input"
                placeholder="📝 Description..."
                prop:value=move || query.get().description
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_query.update(|q| q.edit_description(value));
                }
            />
            <input
                type="text"
                class="filter-input"
                placeholder="🎬 Owner..."
                prop:value=move || query.get().owner
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_query.update(|q| q.edit_owner(value));
                }
            />
        </div>
    }
}
