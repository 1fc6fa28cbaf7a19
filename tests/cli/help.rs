// Integration tests for cli/help.rs — text content only; printing goes to
// stderr and is covered by the e2e suite.

use argmap::cli::help::{long_help_text, usage_text, version_text};

#[test]
fn usage_uses_given_program_name() {
    let text = usage_text("my-tool");
    assert!(text.contains("my-tool [-option[=value]]"));
}

#[test]
fn long_help_contains_usage() {
    let text = long_help_text("argmap");
    assert!(text.contains(&usage_text("argmap")));
    assert!(text.contains("Option syntax"));
}

#[test]
fn version_banner() {
    let v = version_text();
    assert!(v.starts_with("*** argmap v"));
    assert!(v.contains(env!("CARGO_PKG_VERSION")));
}
