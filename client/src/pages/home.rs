//! Home page, standalone and as the persistent shell.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use routing::Strategy;

use crate::components::nav::Nav;
use crate::variant::PageView;

/// Home as an ordinary exact-route page.
pub const VIEW: PageView = PageView::new("home", render);

/// Home as the shell rendered on every path by a prefix `/` route. Carries
/// the navigation links so they stay on screen.
pub const SHELL_VIEW: PageView = PageView::new("home", render_shell);

fn render() -> AnyView {
    view! { <HomePage/> }.into_any()
}

fn render_shell() -> AnyView {
    view! {
        <header class="home-shell">
            <Nav strategy=Strategy::InPage/>
            <HomePage/>
        </header>
    }
    .into_any()
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"This is my home component!"</h1>
        </div>
    }
}
