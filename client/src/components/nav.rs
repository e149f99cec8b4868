//! Navigation links shared by the in-page variants.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;
use routing::Strategy;

const LINKS: [(&str, &str); 3] = [("Home", "/"), ("About", "/about"), ("Login", "/login")];

/// `(label, href)` pairs for `strategy`.
pub fn nav_links(strategy: Strategy) -> Vec<(&'static str, String)> {
    LINKS
        .iter()
        .map(|(label, path)| (*label, strategy.href(path)))
        .collect()
}

/// Link bar. Under the in-page strategy the surrounding `Router` intercepts
/// clicks, so following a link never reloads the page.
#[component]
pub fn Nav(strategy: Strategy) -> impl IntoView {
    view! {
        <nav class="nav">
            <ul>
                {nav_links(strategy)
                    .into_iter()
                    .map(|(label, href)| view! { <li><a href=href>{label}</a></li> })
                    .collect_view()}
            </ul>
        </nav>
    }
}
