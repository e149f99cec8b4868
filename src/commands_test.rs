use super::*;

fn steps(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| (*t).to_owned()).collect()
}

// =============================================================
// routes
// =============================================================

#[test]
fn routes_lists_shell_table_in_order() {
    let report = routes(Variant::Shell).expect("routes");
    assert_eq!(report.mount_id, "root");
    let rows: Vec<_> = report
        .routes
        .iter()
        .map(|r| (r.pattern.as_str(), r.mode, r.view))
        .collect();
    assert_eq!(
        rows,
        [
            ("/", MatchMode::Prefix, "home"),
            ("/about", MatchMode::Exact, "about"),
            ("/login", MatchMode::Exact, "login"),
        ]
    );
}

#[test]
fn routes_text_output_names_strategy_and_mount() {
    let text = routes(Variant::Hash).expect("routes").to_string();
    assert!(text.starts_with("variant hash (fragment navigation, mounts into #container)"));
    assert!(text.contains("/home"));
}

#[test]
fn routes_json_output_uses_lowercase_names() {
    let json = serde_json::to_value(routes(Variant::Browser).expect("routes")).expect("json");
    assert_eq!(json["variant"], "browser");
    assert_eq!(json["strategy"], "in-page");
    assert_eq!(json["routes"][0]["mode"], "exact");
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_reads_input_with_variant_strategy() {
    let hash = resolve(Variant::Hash, "#/home").expect("resolve");
    assert_eq!(hash.views, ["app"]);
    let shell = resolve(Variant::Shell, "/about/").expect("resolve");
    assert_eq!(shell.location.path(), "/about");
    assert_eq!(shell.views, ["home", "about"]);
}

#[test]
fn resolve_text_output_marks_unmatched_paths() {
    let unmatched = resolve(Variant::Browser, "/nowhere").expect("resolve");
    assert_eq!(unmatched.to_string(), "/nowhere -> (nothing)");
    let login = resolve(Variant::Shell, "/login").expect("resolve");
    assert_eq!(login.to_string(), "/login -> home, login");
}

// =============================================================
// walk
// =============================================================

#[test]
fn walk_back_reproduces_earlier_matches() {
    let entries = walk(Variant::Shell, &steps(&["/about", "/login", "back"])).expect("walk");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].resolution, entries[2].resolution);
    assert_eq!(entries[1].resolution.views, ["home", "login"]);
    assert!(entries.iter().all(|e| e.changed));
}

#[test]
fn walk_edges_and_repeats_report_no_change() {
    let entries = walk(Variant::Browser, &steps(&["back", "/", "forward"])).expect("walk");
    assert!(entries.iter().all(|e| !e.changed));
    assert!(entries.iter().all(|e| e.resolution.views == ["home"]));
    assert!(entries[0].to_string().ends_with("(no change)"));
}

#[test]
fn walk_step_serializes_with_kind_and_target() {
    let entries = walk(Variant::Shell, &steps(&["/about"])).expect("walk");
    let json = serde_json::to_value(&entries[0]).expect("json");
    assert_eq!(json["step"]["kind"], "push");
    assert_eq!(json["step"]["target"], "/about");
    assert_eq!(json["location"], "/about");
}

// =============================================================
// render
// =============================================================

#[test]
fn render_about_contains_about_text() {
    let html = render(Variant::Browser, "/about").expect("render");
    assert!(html.contains("This is my about component!"), "{html}");
}

#[test]
fn walk_bare_back_is_a_history_move_but_slashed_back_is_a_push() {
    assert_eq!(Step::parse("back"), Step::Back);
    assert_eq!(Step::parse("forward"), Step::Forward);
    assert_eq!(Step::parse("/back"), Step::Push("/back".to_owned()));

    let entries = walk(Variant::Shell, &steps(&["/back", "back"])).expect("walk");
    assert_eq!(entries[0].step, Step::Push("/back".to_owned()));
    assert_eq!(entries[0].resolution.location.path(), "/back");
    assert_eq!(entries[1].step, Step::Back);
    assert!(entries[1].resolution.location.is_root());
}
