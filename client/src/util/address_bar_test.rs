#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn current_is_root_outside_a_browser() {
    assert!(current(Strategy::Fragment).is_root());
    assert!(current(Strategy::InPage).is_root());
}

#[test]
fn watch_fragment_is_noop_but_callable() {
    let owner = Owner::new();
    owner.with(|| {
        let location = RwSignal::new(Location::from_pathname("/home"));
        watch_fragment(location);
        assert_eq!(location.get_untracked().path(), "/home");
    });
}
