//! Video Contributions Frontend App
//!
//! Root component wiring the filterable, paginated listing together.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::components::{ContributionList, FilterBar, Pagination};
use crate::models::{Contribution, ContributionPage};
use crate::query::ListQuery;
use crate::url_sync::{BrowserUrl, UrlStore};

#[component]
pub fn App() -> impl IntoView {
    // State, with the query seeded from whatever URL we were opened on
    let initial = ListQuery::from_query_str(&BrowserUrl.read());
    let (query, set_query) = signal(initial);
    let (contributions, set_contributions) = signal(Vec::<Contribution>::new());
    let (total, set_total) = signal(0u64);
    let (request_seq, set_request_seq) = signal(0u64);

    // Mirror the query into the address bar and refetch whenever it changes
    Effect::new(move |_| {
        let q = query.get();
        BrowserUrl.write(&q.to_query_string());

        let seq = request_seq.get_untracked() + 1;
        set_request_seq.set(seq);

        spawn_local(async move {
            let result = api::list_contributions(&q).await;
            // A newer request went out while this one was in flight
            if request_seq.try_get_untracked() != Some(seq) {
                return;
            }
            if let Some(line) = apply_fetch_result(result, set_contributions, set_total) {
                web_sys::console::error_1(&format!("[App] {line}").into());
            }
        });
    });

    view! {
        <div class="page">
            <h1 class="page-title">"🎥 Video Contributions"</h1>

            <FilterBar query=query set_query=set_query />

            <ContributionList contributions=contributions />

            <Pagination query=query set_query=set_query total=total />
        </div>
    }
}

/// Applies a finished fetch to the listing signals.
///
/// A failure leaves both signals exactly as they were and hands back one
/// diagnostic line for the console.
fn apply_fetch_result(
    result: Result<ContributionPage, ApiError>,
    set_contributions: WriteSignal<Vec<Contribution>>,
    set_total: WriteSignal<u64>,
) -> Option<String> {
    match result {
        Ok(page) => {
            set_contributions.set(page.contributions);
            set_total.set(page.total);
            None
        }
        Err(err) => Some(format!("contributions fetch failed: {err}")),
    }
}
