//! Single-page app view served by the fragment-routed variant.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::variant::PageView;

pub const VIEW: PageView = PageView::new("app", render);

fn render() -> AnyView {
    view! { <AppPage/> }.into_any()
}

#[component]
pub fn AppPage() -> impl IntoView {
    view! {
        <div>
            <h1>"Our App Component"</h1>
        </div>
    }
}
