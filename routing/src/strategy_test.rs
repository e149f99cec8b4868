use super::*;

#[test]
fn default_strategy_is_in_page() {
    assert_eq!(Strategy::default(), Strategy::InPage);
    assert!(!Strategy::InPage.is_fragment());
    assert!(Strategy::Fragment.is_fragment());
}

#[test]
fn fragment_strategy_reads_the_hash() {
    let loc = Strategy::Fragment.location("/index.html", "#/home?_k=abc123");
    assert_eq!(loc.path(), "/home");
}

#[test]
fn fragment_strategy_ignores_the_pathname() {
    let loc = Strategy::Fragment.location("/about", "");
    assert!(loc.is_root());
}

#[test]
fn in_page_strategy_reads_the_pathname() {
    let loc = Strategy::InPage.location("/about/", "#ignored");
    assert_eq!(loc.path(), "/about");
}

#[test]
fn parse_accepts_fragment_input() {
    assert_eq!(Strategy::Fragment.parse("#/home").path(), "/home");
    assert_eq!(Strategy::Fragment.parse("home").path(), "/home");
    assert_eq!(Strategy::InPage.parse("login").path(), "/login");
}

#[test]
fn href_uses_fragment_or_path() {
    assert_eq!(Strategy::Fragment.href("home"), "#/home");
    assert_eq!(Strategy::Fragment.href("/"), "#/");
    assert_eq!(Strategy::InPage.href("about/"), "/about");
}

#[test]
fn strategy_display_and_serde_names_agree() {
    for strategy in [Strategy::Fragment, Strategy::InPage] {
        let json = serde_json::to_string(&strategy).expect("serialize");
        assert_eq!(json, format!("\"{strategy}\""));
    }
}
