//! Login page: a username/password form with no submit behaviour.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authentication belongs to an external collaborator. Submitting the form
//! is prevented so it neither reloads the page nor leaves the router.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::variant::PageView;

pub const VIEW: PageView = PageView::new("login", render);

fn render() -> AnyView {
    view! { <LoginPage/> }.into_any()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <label for="username">"Username"</label>
                <input id="username" name="username" type="text"/>
                <label for="password">"Password"</label>
                <input id="password" name="password" type="password"/>
                <input type="submit" value="Submit"/>
            </form>
        </div>
    }
}
