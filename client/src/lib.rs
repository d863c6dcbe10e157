//! # admin-client
//!
//! Leptos single-page admin console.
//!
//! Start-up builds one [`bootstrap::Bootstrap`]: an explicit component
//! registry, the message/loading/loading-bar plugins, and a view loader for
//! the `Login`, `Dashboard` and `Article` routes. It then mounts on `#app`.
//! With the `csr` feature the crate compiles to the browser bundle and
//! [`start`] runs on load.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod pages;
pub mod plugins;
pub mod registry;
pub mod router;

/// Browser entry point. A mount failure is fatal: there is nothing to render into.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mut host = bootstrap::DomHost;
    if let Err(e) = bootstrap::Bootstrap::standard().mount(&mut host, bootstrap::APP_ANCHOR) {
        log::error!("admin client failed to mount: {e}");
        panic!("admin client failed to mount: {e}");
    }
}
