// Integration tests for cli/init.rs — initial display level from the
// environment value.

use argmap::cli::init::{clamp_display_level, init_display_level_from};
use argmap::config::DISPLAY_LEVEL_DEFAULT;

#[test]
fn missing_variable_gives_default() {
    assert_eq!(init_display_level_from(None), DISPLAY_LEVEL_DEFAULT);
}

#[test]
fn valid_levels() {
    for (raw, level) in [("0", 0), ("1", 1), ("4", 4), (" 3", 3), ("+2", 2)] {
        assert_eq!(init_display_level_from(Some(raw)), level, "{raw:?}");
    }
}

#[test]
fn invalid_levels_fall_back() {
    for raw in ["", "quiet", "-", "x1"] {
        assert_eq!(init_display_level_from(Some(raw)), DISPLAY_LEVEL_DEFAULT, "{raw:?}");
    }
}

#[test]
fn clamp_bounds() {
    assert_eq!(clamp_display_level(-5), 0);
    assert_eq!(clamp_display_level(7), 7);
    assert_eq!(clamp_display_level(i64::MAX), u32::MAX);
}
