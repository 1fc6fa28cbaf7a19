//! Binary entry point for the `argmap` command-line tool.
//!
//! Ingests its own command line into an [`ArgStore`] and either answers a
//! single query (`-get`, `-getbool`, `-getint`) or dumps every resolved
//! option. Useful for checking how a given command line resolves.
//!
//! # Control flow
//!
//! 1. [`init_display_level`] reads `ARGMAP_DISPLAY_LEVEL`.
//! 2. [`ArgStore::from_env`] ingests `argv[1..]`.
//! 3. `-verbosity`, `-help` and `-version` are handled.
//! 4. [`run`] writes the query answer or the dump to stdout.

use std::io::{self, Write};

use anyhow::{anyhow, Context};

use argmap::cli::arg_utils::{interpret_bool, last_name_from_path, parse_int_lenient};
use argmap::cli::constants::{set_display_level, PROGRAM_NAME};
use argmap::cli::help::{print_bad_usage, print_long_help, version_text};
use argmap::cli::init::{clamp_display_level, init_display_level};
use argmap::ArgStore;

/// How a `-get*` query should render its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueryKind {
    String,
    Bool,
    Int,
}

const QUERY_OPTIONS: [(&str, QueryKind); 3] = [
    ("-get", QueryKind::String),
    ("-getbool", QueryKind::Bool),
    ("-getint", QueryKind::Int),
];

/// Pick the single query requested on the command line, if any.
fn selected_query(store: &ArgStore) -> anyhow::Result<Option<(QueryKind, String)>> {
    let mut found = None;
    for (option, kind) in QUERY_OPTIONS {
        if !store.is_arg_set(option) {
            continue;
        }
        let key = store.get_string_arg(option, "");
        if key.is_empty() {
            return Err(anyhow!("bad usage: {} requires a key ({}=KEY)", option, option));
        }
        if found.is_some() {
            return Err(anyhow!(
                "bad usage: only one of -get, -getbool, -getint may be given"
            ));
        }
        found = Some((kind, key));
    }
    Ok(found)
}

/// Write the query answer, or the full dump, to `out`.
fn run<W: Write>(store: &ArgStore, query: Option<(QueryKind, String)>, out: &mut W) -> io::Result<()> {
    let default = store.get_string_arg("-default", "");

    match query {
        Some((QueryKind::String, key)) => {
            writeln!(out, "{}", store.get_string_arg(&key, &default))?;
        }
        Some((QueryKind::Bool, key)) => {
            let fallback = store.is_arg_set("-default") && interpret_bool(&default);
            writeln!(out, "{}", store.get_bool_arg(&key, fallback))?;
        }
        Some((QueryKind::Int, key)) => {
            writeln!(out, "{}", store.get_int_arg(&key, parse_int_lenient(&default)))?;
        }
        None => {
            let multi = store.get_bool_arg("-multi", false);
            for (key, value) in store.iter() {
                writeln!(out, "{}={}", key, value)?;
                let history = store.get_multi_args(key);
                if multi && history.len() > 1 {
                    for (i, v) in history.iter().enumerate() {
                        match v {
                            Some(v) => writeln!(out, "{}[{}]={}", key, i, v)?,
                            None => writeln!(out, "{}[{}]", key, i)?,
                        }
                    }
                }
            }
        }
    }
    out.flush()
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    set_display_level(init_display_level());

    let argv0 = std::env::args_os()
        .next()
        .map(|a| a.to_string_lossy().into_owned())
        .unwrap_or_else(|| PROGRAM_NAME.to_owned());
    let program = last_name_from_path(&argv0).to_owned();

    let store = ArgStore::from_env();

    if store.is_arg_set("-verbosity") {
        set_display_level(clamp_display_level(store.get_int_arg("-verbosity", 0)));
    }
    argmap::displaylevel!(3, "{}\n", version_text());
    argmap::displaylevel!(4, "{} option(s) resolved\n", store.len());

    let wants_help = ["-h", "-help", "-?"]
        .into_iter()
        .any(|flag| store.get_bool_arg(flag, false));
    if wants_help {
        print_long_help(&program);
        std::process::exit(0);
    }
    if store.get_bool_arg("-version", false) {
        argmap::displayout!("{}\n", version_text());
        std::process::exit(0);
    }

    let query = match selected_query(&store) {
        Ok(q) => q,
        Err(e) => {
            argmap::displaylevel!(1, "{}: {}\n", PROGRAM_NAME, e);
            print_bad_usage(&program);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(&store, query, &mut out).context("cannot write to standard output");
    if let Err(e) = result {
        argmap::displaylevel!(1, "{}: {:#}\n", PROGRAM_NAME, e);
        std::process::exit(1);
    }
}
