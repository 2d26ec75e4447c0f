#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_are_valid() {
    let config = SiteConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.home(), PageId::Hub);
    assert_eq!(config.mobile_breakpoint_px, 768.0);
    assert_eq!(config.sweep_cooldown_ms, 1200.0);
    assert!(config.respect_reduced_motion);
}

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
}

#[test]
fn partial_object_overrides_only_given_fields() {
    let config = SiteConfig::from_json(r#"{ "site_name": "Acme", "banner_hide_ms": 8000 }"#).unwrap();
    assert_eq!(config.site_name, "Acme");
    assert_eq!(config.banner_hide_ms, 8000);
    assert_eq!(config.home_route, "hub");
}

#[test]
fn unknown_fields_are_ignored() {
    let config = SiteConfig::from_json(r#"{ "colour": "teal" }"#).unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(SiteConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
    assert!(matches!(
        SiteConfig::from_json(r#"{ "banner_hide_ms": "soon" }"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn unknown_home_route_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "home_route": "pricing" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownHomeRoute(ref r) if r == "pricing"));
}

#[test]
fn alternative_home_route_is_accepted() {
    let config = SiteConfig::from_json(r#"{ "home_route": "contact" }"#).unwrap();
    assert_eq!(config.home(), PageId::Contact);
}

#[test]
fn non_positive_sizes_are_rejected() {
    for raw in [
        r#"{ "mobile_breakpoint_px": 0 }"#,
        r#"{ "sweep_duration_ms": -1 }"#,
        r#"{ "sweep_cooldown_ms": -5 }"#,
        r#"{ "sweep_cooldown_ms": 0 }"#,
        r#"{ "banner_hide_ms": 0 }"#,
    ] {
        assert!(matches!(SiteConfig::from_json(raw), Err(ConfigError::NonPositive { .. })), "{raw}");
    }
}

#[test]
fn log_level_is_validated() {
    assert!(matches!(
        SiteConfig::from_json(r#"{ "log_level": "loud" }"#),
        Err(ConfigError::LogLevel(_))
    ));
    let config = SiteConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
    assert_eq!(config.level_filter(), LevelFilter::Debug);
}

#[test]
fn error_messages_name_the_field() {
    let err = SiteConfig::from_json(r#"{ "banner_hide_ms": 0 }"#).unwrap_err();
    assert_eq!(err.to_string(), "banner_hide_ms must be positive");
}

#[test]
fn reduced_motion_policy() {
    let mut config = SiteConfig::default();
    assert!(config.motion_allowed(false));
    assert!(!config.motion_allowed(true));
    config.respect_reduced_motion = false;
    assert!(config.motion_allowed(true));
}
