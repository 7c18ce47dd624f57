#![deny(missing_docs)]

//! # Merge Command
//!
//! Combines LLM-composed and human-supplied arguments into the argument list
//! of a separated function.

use crate::error::CliResult;
use crate::io::{read_document, write_document};
use llm_params_core::{merge_parameters, LlmFunction};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Arguments for the merge command.
#[derive(clap::Args, Debug, Clone)]
pub struct MergeArgs {
    /// Separated function metadata, as written by `separate`.
    #[clap(long)]
    pub function: PathBuf,

    /// Array of arguments composed by the LLM. Empty if omitted.
    #[clap(long)]
    pub llm: Option<PathBuf>,

    /// Array of arguments supplied by a human. Empty if omitted.
    #[clap(long)]
    pub human: Option<PathBuf>,

    /// Output path (.json, .yaml or .yml). Prints JSON to stdout if omitted.
    #[clap(long)]
    pub output: Option<PathBuf>,
}

fn read_arguments(path: Option<&Path>) -> CliResult<Vec<Value>> {
    match path {
        Some(path) => read_document(path),
        None => Ok(Vec::new()),
    }
}

/// Executes the merge.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &MergeArgs) -> CliResult<()> {
    let function: LlmFunction = read_document(&args.function)?;
    let llm = read_arguments(args.llm.as_deref())?;
    let human = read_arguments(args.human.as_deref())?;

    let merged = merge_parameters(&function, &llm, &human)?;

    write_document(&merged, args.output.as_deref())
}
