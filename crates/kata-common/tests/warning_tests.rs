//! Tests for warning deduplication.

use kata_common::warning::{set_color_enabled, warn_once, was_warned};

#[test]
fn test_warning_is_recorded() {
    assert!(!was_warned("Test", "recorded once"));
    warn_once("Test", "recorded once");
    assert!(was_warned("Test", "recorded once"));
}

#[test]
fn test_warning_keys_include_component() {
    warn_once("Alpha", "shared message");
    assert!(was_warned("Alpha", "shared message"));
    assert!(!was_warned("Beta", "shared message"));
}

#[test]
fn test_repeated_warning_without_color() {
    set_color_enabled(false);
    warn_once("Plain", "printed once");
    warn_once("Plain", "printed once");
    assert!(was_warned("Plain", "printed once"));
    set_color_enabled(true);
}
