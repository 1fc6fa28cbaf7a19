//! Typed, read-only queries over an [`ArgStore`].
//!
//! Keys may be passed as `name`, `-name` or `--name`. None of these methods
//! can fail: a missing key yields the caller's default, a malformed number
//! yields `0`.

use crate::cli::arg_utils::{interpret_bool, parse_int_lenient};
use crate::cli::store::ArgStore;

impl ArgStore {
    /// `true` if `key` has a resolved value, whether given directly, through
    /// `-no<key>`, or by a soft set.
    pub fn is_arg_set(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Boolean value of `key`, or `default` if it was never given.
    ///
    /// Only the value `"0"` is false; a bare `-key` is true.
    pub fn get_bool_arg(&self, key: &str, default: bool) -> bool {
        self.lookup(key).map_or(default, interpret_bool)
    }

    /// String value of `key`, or `default` if it was never given.
    ///
    /// A bare `-key` resolves to the empty string, not to `default`.
    pub fn get_string_arg(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or(default).to_owned()
    }

    /// Integer value of `key`, or `default` if it was never given.
    ///
    /// The value is parsed leniently: the numeric prefix is used and anything
    /// without one (including a bare `-key`) reads as `0`.
    pub fn get_int_arg(&self, key: &str, default: i64) -> i64 {
        self.lookup(key).map_or(default, parse_int_lenient)
    }

    /// Every value `key` was given explicitly, in command-line order.
    ///
    /// A bare `-key` appears as `None`, `-key=` as `Some("")`.
    /// `-no<key>` tokens and soft sets do not appear here.
    pub fn get_multi_args(&self, key: &str) -> &[Option<String>] {
        self.history(key)
    }
}
