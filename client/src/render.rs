//! Static rendering of a path's matched views.
//!
//! Used by the `pathview render` command to show exactly which markup a
//! variant mounts for a given address without a browser.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::sync::Arc;

use leptos::prelude::*;
use routing::RouteError;

use crate::components::route_outlet::RouteOutlet;
use crate::variant::Variant;

/// Render the HTML of every view `variant` mounts at `input`, in table
/// order, through the same outlet the browser apps use. `input` is read
/// with the variant's strategy, so the hash variant accepts `#/home`. An
/// unmatched path renders no page markup.
///
/// # Errors
///
/// Returns a [`RouteError`] if the variant's table cannot be built.
pub fn render_path(variant: Variant, input: &str) -> Result<String, RouteError> {
    let table = Arc::new(variant.table()?);
    let location = variant.strategy().parse(input);
    let owner = Owner::new();
    let html = owner.with(|| {
        view! { <RouteOutlet table=table location=Signal::stored(location)/> }.to_html()
    });
    Ok(html)
}
