use super::*;

#[test]
fn banner_starts_hidden() {
    let banner = BannerState::new();
    assert!(!banner.is_visible());
    assert_eq!(banner.message(), "");
}

#[test]
fn show_sets_message_and_visibility() {
    let mut banner = BannerState::new();
    banner.show("navigation failed");
    assert!(banner.is_visible());
    assert_eq!(banner.message(), "navigation failed");
}

#[test]
fn hide_is_immediate() {
    let mut banner = BannerState::new();
    banner.show("x");
    banner.hide();
    assert!(!banner.is_visible());
}

#[test]
fn expire_hides_matching_generation() {
    let mut banner = BannerState::new();
    let generation = banner.show("x");
    assert!(banner.expire(generation));
    assert!(!banner.is_visible());
}

#[test]
fn stale_expiry_does_not_hide_newer_message() {
    let mut banner = BannerState::new();
    let first = banner.show("first");
    let second = banner.show("second");
    assert_ne!(first, second);
    assert!(!banner.expire(first));
    assert!(banner.is_visible());
    assert_eq!(banner.message(), "second");
    assert!(banner.expire(second));
}

#[test]
fn expire_after_manual_hide_is_noop() {
    let mut banner = BannerState::new();
    let generation = banner.show("x");
    banner.hide();
    assert!(!banner.expire(generation));
}

#[test]
fn log_accepts_any_display() {
    log(&"plain message", "test");
    log(&crate::error::NavError::PageNotFound("page-x".into()), "test");
}
