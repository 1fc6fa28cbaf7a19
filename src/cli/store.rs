//! The option store: resolved key→value state built from one argument list.
//!
//! [`ArgStore`] is an explicit context object. It is created empty, filled by
//! a single [`ArgStore::ingest`] pass and queried through the accessors in
//! [`crate::cli::accessors`]. Calling `ingest` again throws away everything
//! from the previous call; there is no incremental merge.
//!
//! # Negation precedence
//!
//! All handling of `-noX` goes through one private routine, used both by
//! [`ArgStore::ingest`] and by [`ArgStore::soft_set_arg`]:
//!
//! * a positive token `-X[=v]` **always** writes `resolved[-X]`, replacing
//!   whatever is there, including a value contributed by `-noX`;
//! * a negated token `-noX[=v]` writes `resolved[-X] = !interpret_bool(v)`
//!   **only if** `-X` has no resolved value yet, and is otherwise dropped.
//!
//! Overwrite-always against set-if-absent is what makes an explicit `-X` win
//! over `-noX` whichever comes first on the command line.
//!
//! Sharing across threads: build a store, then hand out `Arc<ArgStore>`. To
//! pick up a new argument list, build a new store and swap the `Arc`.

use std::collections::BTreeMap;

use crate::cli::arg_utils::{interpret_bool, normalize_key};
use crate::cli::token::{tokenize, Token};
use crate::config::{FALSE_VALUE, NEGATION_PREFIX, OPTION_PREFIX, TRUE_VALUE};
use crate::displaylevel;

/// Resolved option state for one argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgStore {
    /// Canonical key → single resolved value. Never holds a `-no` key.
    resolved: BTreeMap<String, String>,
    /// Canonical key → every value given by an explicit `-X` token, in order.
    /// `None` records a bare `-X`, `Some("")` records `-X=`.
    multi: BTreeMap<String, Vec<Option<String>>>,
}

impl ArgStore {
    /// An empty store. Every accessor returns its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `args` (program name already stripped).
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        store.ingest(args);
        store
    }

    /// Build a store from the process arguments, skipping `argv[0]`.
    ///
    /// Arguments that are not valid UTF-8 are converted lossily.
    pub fn from_env() -> Self {
        Self::from_args(
            std::env::args_os()
                .skip(1)
                .map(|a| a.to_string_lossy().into_owned()),
        )
    }

    /// Replace the store's contents with the options found in `args`.
    ///
    /// `args` must not include the program name. Arguments that do not start
    /// with `-` are skipped.
    pub fn ingest<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.resolved.clear();
        self.multi.clear();

        for arg in args {
            let arg = arg.as_ref();
            match tokenize(arg) {
                Some(token) => self.apply(token),
                None => displaylevel!(4, "skipping positional argument '{}'\n", arg),
            }
        }
    }

    fn apply(&mut self, token: Token) {
        if token.key.starts_with(NEGATION_PREFIX) {
            self.set_if_absent(&token.key, token.value_or_empty());
            return;
        }

        self.resolved
            .insert(token.key.clone(), token.value_or_empty().to_owned());
        self.multi.entry(token.key).or_default().push(token.value);
    }

    /// Store `value` under canonical `key` unless a value is already resolved.
    ///
    /// A `-noX` key is redirected to `-X` with the inverted boolean value, so
    /// no negated key is ever stored. Returns whether anything was written.
    fn set_if_absent(&mut self, key: &str, value: &str) -> bool {
        let (target, value) = match key.strip_prefix(NEGATION_PREFIX) {
            Some(name) => {
                let negated = !interpret_bool(value);
                let inverted = if negated { TRUE_VALUE } else { FALSE_VALUE };
                (format!("{OPTION_PREFIX}{name}"), inverted)
            }
            None => (key.to_owned(), value),
        };
        if self.resolved.contains_key(&target) {
            displaylevel!(4, "ignoring {} : {} already set\n", key, target);
            return false;
        }
        self.resolved.insert(target, value.to_owned());
        true
    }

    /// Set `key` to `value` unless it already has a resolved value.
    ///
    /// Returns `true` if the value was stored. Lets higher layers apply
    /// derived defaults without overriding what the user passed.
    /// `-noX` keys follow the command-line rule: `-X` receives the inverted
    /// value if it is still unset. The multi-value history is not touched.
    pub fn soft_set_arg(&mut self, key: &str, value: &str) -> bool {
        self.set_if_absent(&normalize_key(key), value)
    }

    /// [`soft_set_arg`](Self::soft_set_arg) with `"1"` / `"0"`.
    pub fn soft_set_bool_arg(&mut self, key: &str, value: bool) -> bool {
        self.soft_set_arg(key, if value { TRUE_VALUE } else { FALSE_VALUE })
    }

    /// Resolved value for `key` (any accepted spelling), if one exists.
    pub(crate) fn lookup(&self, key: &str) -> Option<&str> {
        self.resolved.get(&normalize_key(key)).map(String::as_str)
    }

    /// Full value history for `key`; empty if it was never given explicitly.
    pub(crate) fn history(&self, key: &str) -> &[Option<String>] {
        self.multi
            .get(&normalize_key(key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of keys with a resolved value.
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    /// `true` when no option was resolved.
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    /// Resolved `(key, value)` pairs, sorted by canonical key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.resolved.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
