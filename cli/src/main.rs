#![deny(missing_docs)]

//! # LLM Params CLI
//!
//! Command Line Interface for separating function parameters between an LLM
//! and a human, and merging both argument sets back together.
//!
//! Supported Commands:
//! - `separate`: Splits parameter schemas and writes the function metadata.
//! - `merge`: Rebuilds the argument list from LLM and human arguments.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::CliResult;

mod error;
mod io;
mod merge;
mod separate;

#[derive(Parser, Debug)]
#[clap(author, version, about = "LLM function parameter separation toolchain")]
struct Cli {
    /// Log debug output to stderr (overrides `RUST_LOG`).
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Separate parameter schemas between LLM and human.
    Separate(separate::SeparateArgs),
    /// Merge LLM and human arguments into one argument list.
    Merge(merge::MergeArgs),
}

/// Logs go to stderr so stdout only carries the command output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Separate(args) => separate::execute(args)?,
        Commands::Merge(args) => merge::execute(args)?,
    }

    Ok(())
}
