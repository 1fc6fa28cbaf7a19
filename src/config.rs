// config.rs — Compile-time configuration constants.
//
// Everything that shapes the token grammar lives here so the tokenizer, the
// store and the accessors agree on a single definition.

// Prefix every option starts with. A leading double dash is collapsed to
// this single character before anything else looks at the key.
pub const OPTION_PREFIX: char = '-';

// Canonical-key prefix that marks a negated option: `-nofoo` contributes the
// logical inverse of its value to `-foo`.
pub const NEGATION_PREFIX: &str = "-no";

// Separator between key and literal value. Only the first occurrence splits.
pub const VALUE_SEPARATOR: char = '=';

// The only string that reads as boolean false.
pub const FALSE_VALUE: &str = "0";

// What a negated option stores when its inverted value is true.
pub const TRUE_VALUE: &str = "1";

// Default display level for diagnostics written by the `displaylevel!` macro.
// Can be overridden by the ARGMAP_DISPLAY_LEVEL environment variable, or by
// the -verbosity=# option of the `argmap` binary.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

// Environment variable consulted by `cli::init::init_display_level`.
pub const ENV_DISPLAY_LEVEL: &str = "ARGMAP_DISPLAY_LEVEL";
