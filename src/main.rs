//! Product Inventory Frontend Entry Point

mod app;
mod components;
mod context;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    // Console output for tracing events; `log` records from the core crate are bridged in
    tracing_wasm::set_as_global_default();
    if let Err(e) = tracing_log::LogTracer::init() {
        tracing::warn!("log bridge not installed: {}", e);
    }

    mount_to_body(App);
}
