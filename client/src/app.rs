//! Root application components, one per variant.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;
use routing::{Location, RouteError, RouteTable, Strategy};

use crate::components::nav::Nav;
use crate::components::route_outlet::RouteOutlet;
use crate::util::address_bar;
use crate::variant::{PageView, Variant};

/// Build `variant`'s table, falling back to an empty one (renders nothing)
/// if a declaration is rejected.
pub fn shared_table(variant: Variant) -> Arc<RouteTable<PageView>> {
    table_or_empty(variant, variant.table())
}

/// Share a built table, or log the rejection and share an empty one.
/// `leptos::logging` writes to the browser console under `csr` and to
/// stderr elsewhere, so a rejected table is never silent.
fn table_or_empty(
    variant: Variant,
    built: Result<RouteTable<PageView>, RouteError>,
) -> Arc<RouteTable<PageView>> {
    match built {
        Ok(table) => Arc::new(table),
        Err(err) => {
            leptos::logging::error!("{variant} route table rejected: {err}");
            Arc::new(RouteTable::default())
        }
    }
}

/// Root component. Provides the meta context and mounts the variant's app.
#[component]
pub fn App(variant: Variant) -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=variant.title()/>
        {match variant {
            Variant::Hash => view! { <HashApp/> }.into_any(),
            Variant::Browser => view! { <BrowserApp/> }.into_any(),
            Variant::Shell => view! { <ShellApp/> }.into_any(),
        }}
    }
}

/// Fragment-routed app. The current path is read from `location.hash` at
/// load and re-read on every `hashchange`.
#[component]
pub fn HashApp() -> impl IntoView {
    let location = RwSignal::new(address_bar::current(Strategy::Fragment));
    address_bar::watch_fragment(location);

    view! { <RouteOutlet table=shared_table(Variant::Hash) location=location/> }
}

/// In-page app whose routes are all exact. Links live outside the table.
#[component]
pub fn BrowserApp() -> impl IntoView {
    view! {
        <Router>
            <Nav strategy=Strategy::InPage/>
            <PathOutlet table=shared_table(Variant::Browser)/>
        </Router>
    }
}

/// In-page app whose Home view is a persistent shell on a prefix `/` route.
#[component]
pub fn ShellApp() -> impl IntoView {
    view! {
        <Router>
            <PathOutlet table=shared_table(Variant::Shell)/>
        </Router>
    }
}

/// Outlet driven by the router's pathname. Must be rendered inside `Router`.
#[component]
fn PathOutlet(table: Arc<RouteTable<PageView>>) -> impl IntoView {
    let pathname = use_location().pathname;
    let location = Signal::derive(move || Location::from_pathname(&pathname.get()));

    view! { <RouteOutlet table=table location=location/> }
}
