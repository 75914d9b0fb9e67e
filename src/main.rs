//! findsrc - transitive discovery of local sources and headers
//!
//! findsrc walks the `#include "..."` graph from a set of starting files and
//! prints the minimal list of locally relevant files for a build:
//! - quoted includes only; angle-bracket system includes are ignored
//! - headers pull in same-named sibling sources (foo.hh -> foo.cc)
//! - a quoted include that resolves to nothing aborts the run

use clap::Parser;

use crate::core::model::WalkError;

mod cli;
mod core;
mod walker;

fn main() {
    let cli = cli::Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if let Err(err) = cli::run(cli) {
        eprintln!("{err:#}");
        let code = err
            .downcast_ref::<WalkError>()
            .map_or(2, WalkError::exit_code);
        std::process::exit(code);
    }
}
