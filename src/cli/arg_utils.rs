// arg_utils.rs — Low-level helpers shared by the tokenizer, the option store
// and the accessors: key normalization, boolean interpretation and lenient
// integer parsing.

use crate::config::{FALSE_VALUE, OPTION_PREFIX};

/// Returns the last path component of `path`, handling both `/` and `\` separators.
///
/// Used to derive the program name shown in usage text from `argv[0]`.
pub fn last_name_from_path(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match after_slash.rfind('\\') {
        Some(pos) => &after_slash[pos + 1..],
        None => after_slash,
    }
}

/// Collapses any run of leading dashes to a single `-`. Input without a
/// leading dash is returned unchanged.
///
/// `--x` and `---x` both become `-x`; dashes after the first non-dash
/// character are kept.
pub fn collapse_leading_dashes(arg: &str) -> &str {
    if !arg.starts_with(OPTION_PREFIX) {
        return arg;
    }
    let rest = arg.trim_start_matches(OPTION_PREFIX);
    &arg[arg.len() - rest.len() - OPTION_PREFIX.len_utf8()..]
}

/// Turns a caller-supplied query key into the canonical stored form.
///
/// `hyi`, `-hyi`, `--hyi` and `---hyi` all map to `-hyi`, so accessors can be
/// called with or without the leading dash.
pub fn normalize_key(key: &str) -> String {
    if key.starts_with(OPTION_PREFIX) {
        collapse_leading_dashes(key).to_owned()
    } else {
        format!("{OPTION_PREFIX}{key}")
    }
}

/// Maps a resolved string to a boolean: `false` only for the literal `"0"`.
///
/// The empty string (an option given without `=`) is `true`, as is every
/// other value including `"false"`, `"no"` and `"00"`.
#[inline]
pub fn interpret_bool(value: &str) -> bool {
    value != FALSE_VALUE
}

/// Parses a signed 64-bit integer from the start of `s`. Returns `None` if no
/// digits are present, or `Some((value, remainder))` where `remainder` is the
/// slice of `s` that was not consumed.
///
/// Leading ASCII whitespace is skipped and a single `+` or `-` is accepted.
/// The scan stops at the first non-digit. Values beyond the `i64` range
/// saturate at `i64::MIN` / `i64::MAX`; the remaining digits are still consumed.
pub fn read_i64_from_str(s: &str) -> Option<(i64, &str)> {
    let bytes = s.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }

    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    // Require at least one digit.
    if i >= bytes.len() || !bytes[i].is_ascii_digit() {
        return None;
    }

    // Accumulate towards the sign so that i64::MIN is reachable.
    let mut result: i64 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        let digit = (bytes[i] - b'0') as i64;
        result = result.saturating_mul(10);
        result = if negative {
            result.saturating_sub(digit)
        } else {
            result.saturating_add(digit)
        };
        i += 1;
    }

    Some((result, &s[i..]))
}

/// Lenient integer conversion: the numeric prefix of `s`, or `0` when there is none.
///
/// Never fails. `"11"` → 11, `"12abc"` → 12, `"-7"` → -7, `"NaN"` → 0, `""` → 0.
pub fn parse_int_lenient(s: &str) -> i64 {
    read_i64_from_str(s).map_or(0, |(value, _rest)| value)
}
