use leptos::prelude::*;

use crate::components::ContributionCard;
use crate::models::Contribution;

#[component]
pub fn ContributionList(contributions: ReadSignal<Vec<Contribution>>) -> impl IntoView {
    view! {
        <div class="contribution-grid">
            <For
                each=move || contributions.get()
                key=|c| c.id
                children=move |c| {
                    view! { <ContributionCard contribution=c /> }
                }
            />
        </div>
    }
}
