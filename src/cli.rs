//! CLI module - command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::config::WalkConfig;
use crate::core::render::{render, OutputFormat};
use crate::walker::traverse::walk;

/// findsrc - discover the local sources and headers a set of files pulls in.
#[derive(Parser, Debug)]
#[command(name = "findsrc")]
#[command(
    author,
    version,
    about,
    long_about = r#"findsrc follows quoted #include directives ("...") from the starting files
and prints every reachable file whose extension is recognized. Angle-bracket
includes (<...>) are treated as system headers and never followed.

Headers are traversed but, by default, only source files are printed; a header
additionally pulls in same-named sibling sources (foo.hh -> foo.cc) so that
implementation files nothing includes still make the list.

Examples:
    findsrc main.cc
    findsrc main.cc --print-headers --headers hh
    findsrc src/*.cc --basepath src --format lines
"#
)]
pub struct Cli {
    /// Starting files.
    #[arg(value_name = "FILES", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Supported header extensions (omit to accept any non-source extension).
    #[arg(
        long,
        value_name = "EXT",
        num_args = 1..,
        long_help = "Extensions accepted as headers, without the leading dot.\n\n\
If omitted, every file whose extension is not a source extension is treated\n\
as a header. Files matching neither set are dropped from the walk entirely:\n\
they are not printed and their includes are not followed."
    )]
    pub headers: Vec<String>,

    /// Supported source extensions.
    #[arg(
        long,
        value_name = "EXT",
        num_args = 1..,
        default_values_t = vec!["cc".to_string(), "cpp".to_string()],
        long_help = "Extensions recognized as source files, without the leading dot.\n\n\
Source files are always printed, and headers probe for same-named siblings\n\
with each of these extensions."
    )]
    pub sources: Vec<String>,

    /// Files to ignore.
    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 1..,
        long_help = "Files pre-marked as visited: never processed, never printed.\n\n\
Useful to exclude files already known from a previous run."
    )]
    pub ignore: Vec<PathBuf>,

    /// Base directory for files.
    #[arg(
        short,
        long,
        default_value = ".",
        value_name = "DIR",
        long_help = "Directory against which all printed paths are relativized\n\
(defaults to the current directory)."
    )]
    pub basepath: PathBuf,

    /// Also print headers alongside results.
    #[arg(short, long)]
    pub print_headers: bool,

    /// Output format (plain/lines/json).
    #[arg(
        long,
        default_value = "plain",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- plain (default): paths space-joined on one line\n\
- lines: one path per line\n\
- json: a JSON array of {path, kind} objects"
    )]
    pub format: String,

    /// Verbose mode (debug logging on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();

    let config = WalkConfig::new(
        &cli.sources,
        &cli.headers,
        cli.ignore,
        &cli.basepath,
        cli.print_headers,
    )?;

    // All-or-nothing: nothing reaches stdout unless the walk completes.
    let result = walk(&config, &cli.files)?;
    println!("{}", render(&result, format));

    Ok(())
}
