//! # client
//!
//! Leptos + WASM frontend for the GO train refund portal.
//!
//! This crate contains the app shell, the route table, the landing and contact
//! pages, and the bridge to the external "Sign in with Google" widget. The
//! browser entry point lives behind the `csr` feature; everything else builds
//! and tests on the host.

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod util;

pub use app::App;

/// Browser entry point: mounts [`App`] into the `#app` element of the entry
/// document.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }

    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(app::MOUNT_ELEMENT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    let Some(root) = root else {
        log::error!("mount element #{} not found", app::MOUNT_ELEMENT_ID);
        return;
    };

    leptos::mount::mount_to(root, App).forget();
}
