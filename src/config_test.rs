#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn missing_element_yields_defaults() {
    assert_eq!(parse(None).unwrap(), SiteConfig::default());
}

#[test]
fn blank_element_yields_defaults() {
    assert_eq!(parse(Some("  \n ")).unwrap(), SiteConfig::default());
}

#[test]
fn element_text_is_parsed() {
    let config = parse(Some(r#"{ "site_name": "Northwind", "log_level": "warn" }"#)).unwrap();
    assert_eq!(config.site_name, "Northwind");
    assert_eq!(config.log_level, "warn");
}

#[test]
fn invalid_text_is_an_error() {
    assert!(parse(Some("<not json>")).is_err());
    assert!(parse(Some(r#"{ "home_route": "nowhere" }"#)).is_err());
}

#[test]
fn load_outside_browser_is_default() {
    assert_eq!(load().unwrap(), SiteConfig::default());
}
