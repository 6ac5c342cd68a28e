#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    utils::locale::apply_browser_locale();
    log::info!("Starting password reset frontend (wasm)");

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__PASSRESET_ENV is present (env.js), it takes precedence.
    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
    });

    router::mount_app();
}
