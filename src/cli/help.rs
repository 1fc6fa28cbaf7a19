// cli/help.rs — Usage, long help and version text for the `argmap` binary.
//
// Text is built into a `String` first so tests can inspect it; the `print_*`
// functions only decide where it goes.

use std::fmt::Write as _;

use crate::cli::constants::{display_level, AUTHOR, PROGRAM_NAME};
use crate::display;
use crate::config::{ENV_DISPLAY_LEVEL, NEGATION_PREFIX};

/// Version banner, e.g. `*** argmap v0.6.0 64-bit, by ... ***`.
pub fn version_text() -> String {
    let bits = std::mem::size_of::<*const ()>() * 8;
    format!(
        "*** {} v{} {}-bit, by {} ***",
        PROGRAM_NAME,
        crate::VERSION_STRING,
        bits,
        AUTHOR
    )
}

/// Brief usage.
pub fn usage_text(program: &str) -> String {
    let mut s = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(s, "Usage : ");
    let _ = writeln!(s, "      {} [-option[=value]]... ", program);
    let _ = writeln!(s);
    let _ = writeln!(s, "Prints every resolved option as key=value, sorted by key.");
    let _ = writeln!(s, "Arguments : ");
    let _ = writeln!(s, " -get=KEY      : print the string value of KEY and exit ");
    let _ = writeln!(s, " -getbool=KEY  : print the boolean value of KEY (true/false) and exit ");
    let _ = writeln!(s, " -getint=KEY   : print the integer value of KEY and exit ");
    let _ = writeln!(s, " -default=V    : default used by -get/-getbool/-getint ");
    let _ = writeln!(s, " -multi        : also list every value of repeated options ");
    let _ = writeln!(s, " -verbosity=#  : diagnostic level 0-4 (default: from {}) ", ENV_DISPLAY_LEVEL);
    let _ = writeln!(s, " -version      : display version and exit ");
    let _ = writeln!(s, " -h/-help      : display this help and exit ");
    s
}

/// Usage followed by a description of the option grammar.
pub fn long_help_text(program: &str) -> String {
    let mut s = version_text();
    s.push('\n');
    s.push_str(&usage_text(program));
    let _ = writeln!(s);
    let _ = writeln!(s, "Option syntax : ");
    let _ = writeln!(s, "---------------");
    let _ = writeln!(s, "-key, --key          : flag, reads as true and as the empty string");
    let _ = writeln!(s, "-key=value           : explicit value (only the first '=' splits)");
    let _ = writeln!(s, "{}key[=value]       : negation, sets key to the inverse of value", NEGATION_PREFIX);
    let _ = writeln!(s, "                       unless key is given directly anywhere");
    let _ = writeln!(s, "Only the value 0 is false. Non-numeric integers read as 0.");
    let _ = writeln!(s, "Arguments not starting with '-' are ignored.");
    let _ = writeln!(s);
    let _ = writeln!(s, "Example :");
    let _ = writeln!(s, "---------");
    let _ = writeln!(s, "          {} -getbool=debug -nodebug -debug=1", program);
    let _ = writeln!(s, "    prints true");
    s
}

/// Print brief usage to stderr.
pub fn print_usage(program: &str) {
    display!("{}", usage_text(program));
}

/// Print the full long-form help to stderr.
pub fn print_long_help(program: &str) {
    display!("{}", long_help_text(program));
}

/// Print "Incorrect parameters" and brief usage to stderr, if errors are displayed.
pub fn print_bad_usage(program: &str) {
    if display_level() >= 1 {
        display!("Incorrect parameters\n");
        print_usage(program);
    }
}
