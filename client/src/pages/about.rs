//! About page.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::variant::PageView;

pub const VIEW: PageView = PageView::new("about", render);

fn render() -> AnyView {
    view! { <AboutPage/> }.into_any()
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h2>"This is my about component!"</h2>
        </div>
    }
}
