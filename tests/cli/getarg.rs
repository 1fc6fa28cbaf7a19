// Integration tests: ingestion plus typed accessors, driven the way a program
// uses them — one whitespace-separated command line per scenario.
//
// Covers:
//   - bare, valued and negated boolean flags
//   - string values (absent, empty, literal)
//   - lenient integer values
//   - `--` treated the same as `-`
//   - `-noX` never overriding an explicit `-X`

use argmap::ArgStore;

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Build a fresh store from a space-separated command line (no program name).
fn reset_args(command_line: &str) -> ArgStore {
    ArgStore::from_args(command_line.split_whitespace())
}

// ─────────────────────────────────────────────────────────────────────────────
// Boolean options
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn boolarg_bare_flag() {
    let a = reset_args("-hyi");
    assert!(a.get_bool_arg("-hyi", false));
    assert!(a.get_bool_arg("-hyi", true));

    assert!(!a.get_bool_arg("-fo", false));
    assert!(a.get_bool_arg("-fo", true));

    // A key that merely shares a prefix is a different option.
    assert!(!a.get_bool_arg("-hyio", false));
    assert!(a.get_bool_arg("-hyio", true));
}

#[test]
fn boolarg_explicit_values() {
    let a = reset_args("-hyi=0");
    assert!(!a.get_bool_arg("-hyi", false));
    assert!(!a.get_bool_arg("-hyi", true));

    let a = reset_args("-hyi=1");
    assert!(a.get_bool_arg("-hyi", false));
    assert!(a.get_bool_arg("-hyi", true));
}

#[test]
fn boolarg_negated() {
    for line in ["-nohyi", "-nohyi=1"] {
        let a = reset_args(line);
        assert!(!a.get_bool_arg("-hyi", false), "{line}");
        assert!(!a.get_bool_arg("-hyi", true), "{line}");
    }
}

#[test]
fn boolarg_direct_flag_wins() {
    for line in ["-hyi -nohyi", "-hyi=1 -nohyi=1"] {
        let a = reset_args(line);
        assert!(a.get_bool_arg("-hyi", false), "{line}");
        assert!(a.get_bool_arg("-hyi", true), "{line}");
    }

    let a = reset_args("-hyi=0 -nohyi=0");
    assert!(!a.get_bool_arg("-hyi", false));
    assert!(!a.get_bool_arg("-hyi", true));
}

#[test]
fn boolarg_double_dash() {
    let a = reset_args("--hyi=1");
    assert!(a.get_bool_arg("-hyi", false));
    assert!(a.get_bool_arg("-hyi", true));

    let a = reset_args("--nohyi=1");
    assert!(!a.get_bool_arg("-hyi", false));
    assert!(!a.get_bool_arg("-hyi", true));
}

// ─────────────────────────────────────────────────────────────────────────────
// String options
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn stringarg_absent() {
    let a = reset_args("");
    assert_eq!(a.get_string_arg("-hyi", ""), "");
    assert_eq!(a.get_string_arg("-hyi", "eleven"), "eleven");
}

#[test]
fn stringarg_bare_and_empty() {
    for line in ["-hyi -bar", "-hyi="] {
        let a = reset_args(line);
        assert_eq!(a.get_string_arg("-hyi", ""), "", "{line}");
        assert_eq!(a.get_string_arg("-hyi", "eleven"), "", "{line}");
    }
}

#[test]
fn stringarg_values() {
    let a = reset_args("-hyi=11");
    assert_eq!(a.get_string_arg("-hyi", ""), "11");
    assert_eq!(a.get_string_arg("-hyi", "eleven"), "11");

    let a = reset_args("-hyi=eleven");
    assert_eq!(a.get_string_arg("-hyi", ""), "eleven");
    assert_eq!(a.get_string_arg("-hyi", "eleven"), "eleven");
}

// ─────────────────────────────────────────────────────────────────────────────
// Integer options
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn intarg_absent() {
    let a = reset_args("");
    assert_eq!(a.get_int_arg("-hyi", 11), 11);
    assert_eq!(a.get_int_arg("-hyi", 0), 0);
}

#[test]
fn intarg_bare_flags_read_zero() {
    let a = reset_args("-hyi -bar");
    assert_eq!(a.get_int_arg("-hyi", 11), 0);
    assert_eq!(a.get_int_arg("-bar", 11), 0);
}

#[test]
fn intarg_values() {
    let a = reset_args("-hyi=11 -bar=12");
    assert_eq!(a.get_int_arg("-hyi", 0), 11);
    assert_eq!(a.get_int_arg("-bar", 11), 12);
}

#[test]
fn intarg_not_a_number() {
    let a = reset_args("-hyi=NaN -bar=NotANumber");
    assert_eq!(a.get_int_arg("-hyi", 1), 0);
    assert_eq!(a.get_int_arg("-bar", 11), 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Double dash
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn doubledash() {
    let a = reset_args("--hyi");
    assert!(a.get_bool_arg("-hyi", false));

    let a = reset_args("--hyi=verbose --bar=1");
    assert_eq!(a.get_string_arg("-hyi", ""), "verbose");
    assert_eq!(a.get_int_arg("-bar", 0), 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Negation, both orders
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn boolargno_values() {
    let a = reset_args("-nohyi");
    assert!(!a.get_bool_arg("-hyi", true));
    assert!(!a.get_bool_arg("-hyi", false));

    let a = reset_args("-nohyi=1");
    assert!(!a.get_bool_arg("-hyi", true));
    assert!(!a.get_bool_arg("-hyi", false));

    let a = reset_args("-nohyi=0");
    assert!(a.get_bool_arg("-hyi", true));
    assert!(a.get_bool_arg("-hyi", false));
}

#[test]
fn boolargno_order_independent() {
    let a = reset_args("-hyi --nohyi");
    assert!(a.get_bool_arg("-hyi", false));

    // hyi always wins:
    let a = reset_args("-nohyi -hyi");
    assert!(a.get_bool_arg("-hyi", false));
}

// ─────────────────────────────────────────────────────────────────────────────
// Keys without the leading dash
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn undashed_query_keys() {
    let a = reset_args("-hyi");
    assert!(a.get_bool_arg("hyi", false));

    let a = reset_args("-hyi=11 -bar=12");
    assert_eq!(a.get_int_arg("hyi", 0), 11);
    assert_eq!(a.get_int_arg("bar", 11), 12);

    let a = reset_args("--hyi=verbose --bar=1");
    assert_eq!(a.get_string_arg("hyi", ""), "verbose");
    assert_eq!(a.get_int_arg("bar", 0), 1);
}
