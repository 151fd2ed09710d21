//! Contributions API Client
//!
//! Thin fetch layer over the backend's read-only listing endpoint. URL
//! assembly is kept separate from the network call so it can be tested
//! without a browser.

use reqwasm::http::Request;
use thiserror::Error;

use crate::models::ContributionPage;
use crate::query::{encode_pairs, ListQuery};

/// Backend origin used when no override is baked in at build time.
const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server answered {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Backend origin, overridable with `CONTRIBUTIONS_API_BASE` at build time.
fn api_base() -> &'static str {
    option_env!("CONTRIBUTIONS_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Full request URL for one page of the filtered listing.
fn request_url(base: &str, query: &ListQuery) -> String {
    format!(
        "{}/contributions/?{}",
        base.trim_end_matches('/'),
        encode_pairs(&query.to_request_pairs())
    )
}

/// Fetches the page of contributions selected by `query`.
pub async fn list_contributions(query: &ListQuery) -> Result<ContributionPage, ApiError> {
    let url = request_url(api_base(), query);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<ContributionPage>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
