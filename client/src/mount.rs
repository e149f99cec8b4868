//! Browser entry points: mount a variant into its page element.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::app::App;
use crate::variant::Variant;

/// Error returned by [`mount`].
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no browser window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("mount element #{0} not found")]
    MissingElement(&'static str),
    #[error("mount element #{0} is not an HTML element")]
    NotHtmlElement(&'static str),
}

/// Mount `variant` into the element with its mount id. The app stays
/// mounted for the lifetime of the page.
///
/// # Errors
///
/// Returns a [`MountError`] if the window, document, or mount element is
/// unavailable.
pub fn mount(variant: Variant) -> Result<(), MountError> {
    let document = web_sys::window()
        .ok_or(MountError::NoWindow)?
        .document()
        .ok_or(MountError::NoDocument)?;
    let id = variant.mount_id();
    let element = document
        .get_element_by_id(id)
        .ok_or(MountError::MissingElement(id))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement(id))?;

    log::info!("mounting {variant} app into #{id}");
    leptos::mount::mount_to(element, move || view! { <App variant=variant/> }).forget();
    Ok(())
}

fn start(variant: Variant) {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger init failed: {err}").into());
    }
    if let Err(err) = mount(variant) {
        log::error!("mount failed: {err}");
    }
}

/// Fragment-routed variant, mounted into `#container`.
#[wasm_bindgen]
pub fn mount_hash() {
    start(Variant::Hash);
}

/// Exact-route in-page variant, mounted into `#root`.
#[wasm_bindgen]
pub fn mount_browser() {
    start(Variant::Browser);
}

/// Persistent-shell in-page variant, mounted into `#root`.
#[wasm_bindgen]
pub fn mount_shell() {
    start(Variant::Shell);
}
