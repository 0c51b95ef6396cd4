use super::*;

#[test]
fn anchor_target_strips_hash() {
    assert_eq!(anchor_target("#mains"), Some("mains"));
}

#[test]
fn anchor_target_rejects_non_fragment_links() {
    assert_eq!(anchor_target("/menu"), None);
    assert_eq!(anchor_target("https://example.com/#x"), None);
    assert_eq!(anchor_target("mains"), None);
}

#[test]
fn anchor_target_rejects_bare_hash() {
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target(""), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn scroll_is_noop_without_browser() {
    assert!(!scroll_to_anchor("#mains"));
    assert!(!scroll_to_anchor("/menu"));
}
