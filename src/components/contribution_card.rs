use chrono::{Local, Utc};
use leptos::prelude::*;

use crate::models::{format_timestamp, Contribution};

/// One contribution, with its status judged at render time.
#[component]
pub fn ContributionCard(contribution: Contribution) -> impl IntoView {
    let status = contribution.status_at(Utc::now());
    let start = format_timestamp(&contribution.start_time.with_timezone(&Local));
    let end = format_timestamp(&contribution.end_time.with_timezone(&Local));

    view! {
        <div class="contribution-card">
            <h2 class="contribution-title">{contribution.title}</h2>
            <p class="contribution-description">{contribution.description}</p>
            <div class="contribution-meta">
                <p>
                    <span class="meta-label">"🕒 Start:"</span>
                    " "
                    {start}
                </p>
                <p>
                    <span class="meta-label">"⏰ End:"</span>
                    " "
                    {end}
                </p>
                <p>
                    <span class="meta-label">"🎬 Owner:"</span>
                    " "
                    {contribution.owner}
                </p>
                <p>
                    <span class="meta-label">"📺 Status:"</span>
                    " "
                    <span class=format!("status-badge {}", status.css_class())>
                        {status.label()}
                    </span>
                </p>
            </div>
        </div>
    }
}
