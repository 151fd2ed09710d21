//! Address-Bar Synchronization
//!
//! The browser's query string behind a two-method interface, so the view
//! state can be rebuilt from a URL and mirrored back without the rest of
//! the app touching `web_sys`.

use wasm_bindgen::JsValue;

/// The address-bar capability: read the current query string, replace it.
pub trait UrlStore {
    /// Current query string, without the leading `?`.
    fn read(&self) -> String;

    /// Replaces the whole query string; an empty string clears it.
    fn write(&self, query: &str);
}

/// `UrlStore` over the browser's History API.
///
/// Writes use `replaceState`, so filtering does not grow the history by
/// one entry per keystroke.
pub struct BrowserUrl;

impl UrlStore for BrowserUrl {
    fn read(&self) -> String {
        let Some(window) = web_sys::window() else {
            return String::new();
        };
        let search = window.location().search().unwrap_or_default();
        search.trim_start_matches('?').to_string()
    }

    fn write(&self, query: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let path = window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string());
        let url = if query.is_empty() {
            path
        } else {
            format!("{path}?{query}")
        };
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
        }
    }
}
