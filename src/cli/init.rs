//! Startup defaults for the `argmap` binary, read from the environment.
//!
//! The only setting is the initial display level. It is applied before the
//! command line is ingested so that ingestion diagnostics honour it; the
//! `-verbosity=#` option then overrides it.

use crate::cli::arg_utils::read_i64_from_str;
use crate::config::{DISPLAY_LEVEL_DEFAULT, ENV_DISPLAY_LEVEL};
use crate::displaylevel;

/// Read the initial display level from the `ARGMAP_DISPLAY_LEVEL` environment variable.
///
/// Falls back to [`DISPLAY_LEVEL_DEFAULT`] when the variable is unset or not numeric.
pub fn init_display_level() -> u32 {
    init_display_level_from(std::env::var(ENV_DISPLAY_LEVEL).ok().as_deref())
}

/// Testable core of [`init_display_level`]: parse an optional `ARGMAP_DISPLAY_LEVEL` value.
///
/// Pass `Some(s)` with the raw string, or `None` to simulate the variable being
/// unset. Negative values clamp to 0.
pub fn init_display_level_from(env_val: Option<&str>) -> u32 {
    if let Some(env) = env_val {
        if let Some((val, _rest)) = read_i64_from_str(env) {
            return clamp_display_level(val);
        }
        // Non-numeric value — warn and fall through to default.
        displaylevel!(
            2,
            "Ignore environment variable setting {}={}: not a valid integer value \n",
            ENV_DISPLAY_LEVEL,
            env
        );
    }
    DISPLAY_LEVEL_DEFAULT
}

/// Fit a lenient integer into the display-level range.
pub fn clamp_display_level(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}
