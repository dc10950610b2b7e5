//! Command-line entry point for the Pig interpreter.
//!
//! ```text
//! pig                 # start the REPL on stdin/stdout
//! pig <FILE>           # evaluate a script file and print its final value
//! pig --verbose ...    # raise log verbosity (maps to RUST_LOG=debug)
//! ```
//!
//! A single optional positional argument covers both modes: "run a file"
//! when given, "start the REPL" when omitted.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Pig: a tree-walking interpreter for the Pig programming language.
#[derive(Parser)]
#[command(name = "pig")]
#[command(about = "A tree-walking interpreter for the Pig programming language", long_about = None)]
struct Cli {
    /// Source file to run. Omit to start an interactive REPL.
    file: Option<PathBuf>,

    /// Raise log verbosity to debug (equivalent to RUST_LOG=debug).
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    match cli.file {
        Some(path) => {
            if let Err(e) = pig::run_file(&path) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
            Ok(())
        }
        None => Ok(pig::repl::run_interactive()?),
    }
}
