//! Tokenizer: splits one raw argument into a canonical key and an optional value.
//!
//! | Input            | Key       | Value           |
//! |------------------|-----------|-----------------|
//! | `-hyi`           | `-hyi`    | `None`          |
//! | `--hyi`          | `-hyi`    | `None`          |
//! | `-hyi=`          | `-hyi`    | `Some("")`      |
//! | `--hyi=a=b`      | `-hyi`    | `Some("a=b")`   |
//! | `---hyi=5`       | `-hyi`    | `Some("5")`     |
//! | `-nohyi=0`       | `-nohyi`  | `Some("0")`     |
//! | `hyi`            | skipped   |                 |
//!
//! Negation is not interpreted here; `-nohyi` is an ordinary key until the
//! option store sees it.

use crate::cli::arg_utils::collapse_leading_dashes;
use crate::config::{OPTION_PREFIX, VALUE_SEPARATOR};

/// One dash-prefixed argument, decomposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Canonical key: exactly one leading dash, everything up to the first `=`.
    pub key: String,
    /// Literal value after the first `=`. `None` when the argument has no `=`,
    /// which is distinct from `Some("")` for `-key=`.
    pub value: Option<String>,
}

impl Token {
    /// The value as stored by the option store: the literal, or `""` when absent.
    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// Tokenize a single raw argument.
///
/// Returns `None` for arguments that do not begin with `-`; those are
/// positional and not this parser's concern.
pub fn tokenize(arg: &str) -> Option<Token> {
    if !arg.starts_with(OPTION_PREFIX) {
        return None;
    }
    let arg = collapse_leading_dashes(arg);

    let token = match arg.split_once(VALUE_SEPARATOR) {
        Some((key, value)) => Token {
            key: key.to_owned(),
            value: Some(value.to_owned()),
        },
        None => Token {
            key: arg.to_owned(),
            value: None,
        },
    };
    Some(token)
}
