#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_site_constants() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.rotation_interval_ms, 5000);
    assert_eq!(cfg.header_fallback_px, 80.0);
    assert_eq!(cfg.nav_root_margin, "-10% 0px -80% 0px");
    assert_eq!(cfg.nav_threshold, 0.1);
    assert_eq!(cfg.fade_threshold, 0.1);
    assert_eq!(cfg.hash_scroll_delay_ms, 100);
    assert_eq!(cfg.message_fade_delay_ms, 5000);
    assert_eq!(cfg.message_poll_interval_ms, 1000);
    assert_eq!(cfg.message_poll_attempts, 10);
    assert_eq!(cfg.theme_storage_key, "theme");
    assert_eq!(cfg.default_theme, Theme::Dark);
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let cfg = SiteConfig::from_json(r#"{"rotation_interval_ms": 7000, "default_theme": "light"}"#).unwrap();
    assert_eq!(cfg.rotation_interval_ms, 7000);
    assert_eq!(cfg.default_theme, Theme::Light);
    assert_eq!(cfg.header_fallback_px, 80.0);
}

#[test]
fn unknown_fields_are_ignored() {
    let cfg = SiteConfig::from_json(r#"{"marquee_speed": 3}"#).unwrap();
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn zero_interval_is_rejected() {
    let err = SiteConfig::from_json(r#"{"rotation_interval_ms": 0}"#).unwrap_err();
    assert!(matches!(err, SiteError::InvalidConfig(_)));
}

#[test]
fn threshold_outside_unit_range_is_rejected() {
    assert!(SiteConfig::from_json(r#"{"nav_threshold": 1.5}"#).is_err());
    assert!(SiteConfig::from_json(r#"{"fade_threshold": -0.1}"#).is_err());
}

#[test]
fn negative_header_fallback_is_rejected() {
    assert!(SiteConfig::from_json(r#"{"header_fallback_px": -4}"#).is_err());
}

#[test]
fn malformed_json_is_rejected() {
    assert!(SiteConfig::from_json("{rotation").is_err());
}

#[test]
fn or_default_handles_missing_blank_and_bad_blocks() {
    assert_eq!(SiteConfig::from_json_or_default(None), SiteConfig::default());
    assert_eq!(SiteConfig::from_json_or_default(Some("   ")), SiteConfig::default());
    assert_eq!(SiteConfig::from_json_or_default(Some("not json")), SiteConfig::default());
    let cfg = SiteConfig::from_json_or_default(Some(r#"{"hash_scroll_delay_ms": 250}"#));
    assert_eq!(cfg.hash_scroll_delay_ms, 250);
}
