//! Command-line option parsing.
//!
//! This module organises the full pipeline:
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings, the shared `DISPLAY_LEVEL` atomic and the display macros. |
//! | [`arg_utils`] | Low-level helpers: key normalization, `interpret_bool`, lenient integer parsing, path basename. |
//! | [`token`]     | `Token` and `tokenize` — one raw argument to canonical key plus optional value. |
//! | [`store`]     | `ArgStore` — ingestion and the `-noX` precedence policy. |
//! | [`accessors`] | Typed getters on `ArgStore` with caller defaults. |
//! | [`init`]      | Initial display level from the environment. |
//! | [`help`]      | Usage, long help and version text for the binary. |
//!
//! Typical call sequence: `ArgStore::from_env` (or `ArgStore::from_args`) → `get_*_arg`.

pub mod constants;
pub mod arg_utils;
pub mod token;
pub mod store;
pub mod accessors;
pub mod init;
pub mod help;

pub use store::ArgStore;
pub use token::{tokenize, Token};
