//! # client
//!
//! Leptos + WASM frontend for the client-side routing demos.
//!
//! Three variants share one set of pages and one route outlet and differ
//! only in their route table and navigation strategy (see [`variant`]).
//! Path matching itself lives in the `routing` crate.
//!
//! Features:
//! - `csr`: browser build; exports `mount_hash`, `mount_browser` and
//!   `mount_shell` to JavaScript.
//! - `ssr`: enables [`render::render_path`] for static rendering.

pub mod app;
pub mod components;
#[cfg(feature = "csr")]
pub mod mount;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod render;
pub mod util;
pub mod variant;

pub use variant::{PageView, Variant};
