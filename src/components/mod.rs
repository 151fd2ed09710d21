//! UI Components
//!
//! Reusable Leptos components.

mod contribution_card;
mod contribution_list;
mod filter_bar;
mod pagination;

pub use contribution_card::ContributionCard;
pub use contribution_list::ContributionList;
pub use filter_bar::FilterBar;
pub use pagination::Pagination;
