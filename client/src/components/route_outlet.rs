//! Renders every view whose route matches the current location.
//!
//! DESIGN
//! ======
//! The outlet keys mounted views by their table index. When the location
//! changes, views that still match stay mounted (so a prefix `/` shell is not
//! rebuilt on every navigation), views that stopped matching are unmounted,
//! and newly matching views are mounted in table order.

#[cfg(all(test, feature = "ssr"))]
#[path = "route_outlet_test.rs"]
mod route_outlet_test;

use std::sync::Arc;

use leptos::prelude::*;
use routing::{Location, RouteTable};

use crate::variant::PageView;

/// Route outlet over a shared table and a reactive location.
#[component]
pub fn RouteOutlet(
    table: Arc<RouteTable<PageView>>,
    #[prop(into)] location: Signal<Location>,
) -> impl IntoView {
    let matched = {
        let table = Arc::clone(&table);
        move || {
            let location = location.get();
            table.resolve(&location).indices().to_vec()
        }
    };

    view! {
        <For
            each=matched
            key=|index| *index
            children=move |index| {
                table.routes().get(index).map(|route| route.view().render())
            }
        />
    }
}
