//! Video Contributions Frontend Entry Point

mod api;
mod app;
mod components;
mod models;
mod query;
mod url_sync;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
