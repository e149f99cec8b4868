use super::*;

#[test]
fn in_page_links_are_plain_paths() {
    let links = nav_links(Strategy::InPage);
    assert_eq!(
        links,
        [
            ("Home", "/".to_owned()),
            ("About", "/about".to_owned()),
            ("Login", "/login".to_owned()),
        ]
    );
}

#[test]
fn fragment_links_are_hash_prefixed() {
    let hrefs: Vec<_> = nav_links(Strategy::Fragment)
        .into_iter()
        .map(|(_, href)| href)
        .collect();
    assert_eq!(hrefs, ["#/", "#/about", "#/login"]);
}
