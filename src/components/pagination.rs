//! Pagination Controls
//!
//! Previous / Next over the fixed 14-row window, gated so the offset can
//! never leave the known result range.

use leptos::prelude::*;

use crate::query::ListQuery;

#[component]
pub fn Pagination(
    query: ReadSignal<ListQuery>,
    set_query: WriteSignal<ListQuery>,
    total: ReadSignal<u64>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="page-btn"
                disabled=move || !query.get().has_prev()
                on:click=move |_| set_query.update(|q| q.prev_page())
            >
                "← Previous"
            </button>
            <span class="page-label">{move || query.get().page_label()}</span>
            <button
                class="page-btn"
                disabled=move || !query.get().has_next(total.get())
                on:click=move |_| {
                    let t = total.get();
                    set_query.update(|q| q.next_page(t));
                }
            >
                "Next →"
            </button>
        </div>
    }
}
