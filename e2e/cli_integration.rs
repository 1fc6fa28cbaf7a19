// e2e/cli_integration.rs — CLI integration tests
//
// Tests the `argmap` binary as a black-box CLI tool using std::process::Command.
// Covers the resolved-option dump, single queries, help/version and exit codes.

use std::path::PathBuf;
use std::process::{Command, Output};

/// Locate the `argmap` binary produced by Cargo.
fn argmap_bin() -> PathBuf {
    // CARGO_BIN_EXE_argmap is set by Cargo when running integration tests.
    // Fall back to walking up from the test binary location.
    if let Some(p) = option_env!("CARGO_BIN_EXE_argmap") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("argmap");
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(argmap_bin())
        .args(args)
        .env_remove("ARGMAP_DISPLAY_LEVEL")
        .output()
        .expect("failed to run argmap")
}

fn stdout_of(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "argmap {:?} should exit 0; status: {}, stderr: {}",
        args,
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ── 1. Dump ───────────────────────────────────────────────────────────────────

#[test]
fn test_cli_dump_no_args_is_empty() {
    assert_eq!(stdout_of(&[]), "");
}

#[test]
fn test_cli_dump_resolved_options() {
    let out = stdout_of(&["--hyi=verbose", "file.txt", "-nobar", "-baz", "-a=1=2"]);
    assert_eq!(out, "-a=1=2\n-bar=0\n-baz=\n-hyi=verbose\n");
}

#[test]
fn test_cli_dump_multi() {
    let out = stdout_of(&["-multi", "-peer=a", "--peer=b"]);
    assert_eq!(out, "-multi=\n-peer=b\n-peer[0]=a\n-peer[1]=b\n");
}

// ── 2. Queries ────────────────────────────────────────────────────────────────

#[test]
fn test_cli_getbool_direct_beats_negation() {
    assert_eq!(stdout_of(&["-hyi", "-nohyi", "-getbool=hyi"]), "true\n");
    assert_eq!(stdout_of(&["-nohyi", "-hyi", "-getbool=hyi"]), "true\n");
    assert_eq!(stdout_of(&["-nohyi", "-getbool=hyi"]), "false\n");
}

#[test]
fn test_cli_getint_lenient() {
    assert_eq!(stdout_of(&["-hyi=11", "-getint=hyi"]), "11\n");
    assert_eq!(stdout_of(&["-hyi=NaN", "-getint=hyi", "-default=1"]), "0\n");
    assert_eq!(stdout_of(&["-getint=bar", "-default=12"]), "12\n");
}

#[test]
fn test_cli_get_string() {
    assert_eq!(stdout_of(&["--hyi=verbose", "--get=hyi"]), "verbose\n");
    assert_eq!(stdout_of(&["-hyi", "-get=hyi", "-default=eleven"]), "\n");
    assert_eq!(stdout_of(&["-get=hyi", "-default=eleven"]), "eleven\n");
}

#[test]
fn test_cli_query_without_key_fails() {
    let output = run(&["-get"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad usage"), "stderr: {stderr}");
}

#[test]
fn test_cli_two_queries_fail() {
    let output = run(&["-get=a", "-getbool=b"]);
    assert_eq!(output.status.code(), Some(1));
}

// ── 3. Help / version ─────────────────────────────────────────────────────────

#[test]
fn test_cli_help() {
    for flag in ["-h", "--help", "-?"] {
        let output = run(&[flag]);
        assert!(output.status.success(), "{flag} should exit 0");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.to_lowercase().contains("usage"), "{flag}: {stderr}");
    }
}

#[test]
fn test_cli_nohelp_does_not_print_help() {
    let output = run(&["-nohelp"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "-help=0\n");
}

#[test]
fn test_cli_help_flags_read_as_booleans() {
    for flag in ["-?=0", "-h=0", "--help=0"] {
        let output = run(&[flag]);
        assert!(output.status.success(), "{flag} should exit 0");
        assert!(
            !String::from_utf8_lossy(&output.stderr).to_lowercase().contains("usage"),
            "{flag} should not print help"
        );
        assert!(String::from_utf8_lossy(&output.stdout).ends_with("=0\n"));
    }
}

#[test]
fn test_cli_version() {
    let out = stdout_of(&["--version"]);
    assert!(
        out.contains(env!("CARGO_PKG_VERSION")),
        "--version stdout should contain the crate version; got: {out}"
    );
}

// ── 4. Verbosity ──────────────────────────────────────────────────────────────

#[test]
fn test_cli_verbosity_zero_silences_errors() {
    let output = run(&["-get", "-verbosity=0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_cli_env_display_level_verbose() {
    let output = Command::new(argmap_bin())
        .args(["positional", "-x"])
        .env("ARGMAP_DISPLAY_LEVEL", "4")
        .output()
        .expect("failed to run argmap");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("skipping positional argument 'positional'"), "stderr: {stderr}");
}
