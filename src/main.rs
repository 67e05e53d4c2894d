#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod context;
mod hooks;
mod routes;
mod services;
mod stores;
mod utils;

use context::AppContext;
use stores::config_store;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting webclone");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Resolve the backend once per app instance and hand it down as context
    use_context_provider(|| AppContext::new(config_store::load_config()));

    rsx! {
        Router::<routes::Route> {}
    }
}
