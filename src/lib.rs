//! argmap — command-line option store with `-noX` negation precedence.
//!
//! ```
//! use argmap::ArgStore;
//!
//! let args = ArgStore::from_args(["-nodebug", "--level=3", "input.txt", "-debug"]);
//! assert!(args.get_bool_arg("debug", false));
//! assert_eq!(args.get_int_arg("level", 1), 3);
//! assert_eq!(args.get_string_arg("name", "anon"), "anon");
//! ```

pub mod config;
pub mod cli;

pub use cli::arg_utils::interpret_bool;
pub use cli::{tokenize, ArgStore, Token};

/// Crate version, as shown by `argmap -version`.
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");
