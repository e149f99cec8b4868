use super::*;
use crate::app::shared_table;
use crate::variant::Variant;

fn outlet_html(variant: Variant, path: &str) -> String {
    let owner = Owner::new();
    owner.with(|| {
        view! {
            <RouteOutlet
                table=shared_table(variant)
                location=Signal::stored(Location::from_pathname(path))
            />
        }
        .to_html()
    })
}

fn has_page_markup(html: &str) -> bool {
    ["<div", "<form", "<header", "<h1", "<h2"]
        .iter()
        .any(|tag| html.contains(tag))
}

// =============================================================
// Table order
// =============================================================

#[test]
fn shell_outlet_mounts_home_before_about() {
    let html = outlet_html(Variant::Shell, "/about");
    let home = html.find("This is my home component!").expect("home mounted");
    let about = html.find("This is my about component!").expect("about mounted");
    assert!(home < about, "{html}");
}

#[test]
fn shell_outlet_mounts_login_form_under_shell() {
    let html = outlet_html(Variant::Shell, "/login");
    assert!(html.contains("This is my home component!"), "{html}");
    assert!(html.contains(r#"type="password""#), "{html}");
    assert!(!html.contains("This is my about component!"), "{html}");
}

// =============================================================
// Exact routes
// =============================================================

#[test]
fn browser_outlet_mounts_only_the_exact_match() {
    let html = outlet_html(Variant::Browser, "/about");
    assert!(html.contains("This is my about component!"), "{html}");
    assert!(!html.contains("This is my home component!"), "{html}");
}

#[test]
fn browser_outlet_renders_nothing_for_unmatched_path() {
    let html = outlet_html(Variant::Browser, "/nowhere");
    assert!(!has_page_markup(&html), "{html}");
}

#[test]
fn outlet_output_is_stable_for_same_location() {
    assert_eq!(
        outlet_html(Variant::Shell, "/about"),
        outlet_html(Variant::Shell, "/about")
    );
}
