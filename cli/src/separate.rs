#![deny(missing_docs)]

//! # Separate Command
//!
//! Reads the parameter schemas of one function, separates them between LLM
//! and human, and writes the resulting function metadata.

use crate::error::{CliError, CliResult};
use crate::io::{read_document, write_document};
use llm_params_core::predicates::{
    any_of, binary_format, content_media_type, has_extension, secret_key, string_format,
    Predicate,
};
use llm_params_core::{LlmFunction, Schema};
use std::path::PathBuf;
use tracing::{info, warn};

/// Arguments for the separate command.
#[derive(clap::Args, Debug, Clone)]
pub struct SeparateArgs {
    /// Parameter schemas: a JSON/YAML array, or a single object with `--keyword`.
    #[clap(long)]
    pub input: PathBuf,

    /// Function name recorded in the output.
    #[clap(long, default_value = "function")]
    pub name: String,

    /// Treat the input as one keyword object whose properties are the parameters.
    #[clap(long)]
    pub keyword: bool,

    /// Human supplies strings carrying `x-wrtn-secret-key`.
    #[clap(long, env = "LLM_PARAMS_SECRET")]
    pub secret: bool,

    /// Human supplies strings declaring a `contentMediaType` (file uploads).
    #[clap(long, env = "LLM_PARAMS_MEDIA")]
    pub media: bool,

    /// Human supplies strings with `format: binary`.
    #[clap(long)]
    pub binary: bool,

    /// Human supplies any node carrying this extension key. Repeatable.
    #[clap(long = "extension", env = "LLM_PARAMS_EXTENSIONS", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Human supplies strings with this `format`. Repeatable.
    #[clap(long = "format", env = "LLM_PARAMS_FORMATS", value_delimiter = ',')]
    pub formats: Vec<String>,

    /// Output path (.json, .yaml or .yml). Prints JSON to stdout if omitted.
    #[clap(long)]
    pub output: Option<PathBuf>,
}

impl SeparateArgs {
    /// Combines the selected options into one predicate.
    fn predicates(&self) -> Vec<Predicate> {
        let mut predicates: Vec<Predicate> = Vec::new();
        if self.secret {
            predicates.push(Box::new(secret_key));
        }
        if self.media {
            predicates.push(Box::new(content_media_type));
        }
        if self.binary {
            predicates.push(Box::new(binary_format));
        }
        for key in &self.extensions {
            predicates.push(Box::new(has_extension(key.clone())));
        }
        for format in &self.formats {
            predicates.push(Box::new(string_format(format.clone())));
        }
        predicates
    }
}

/// Executes the separation.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &SeparateArgs) -> CliResult<()> {
    let predicates = args.predicates();
    if predicates.is_empty() {
        warn!("no separation rule selected; every parameter stays with the LLM");
    }
    let predicate = any_of(predicates);

    let function = if args.keyword {
        let keyword: Schema = read_document(&args.input)?;
        let Schema::Object(object) = keyword else {
            return Err(CliError::General(
                "--keyword expects a single object schema".to_string(),
            ));
        };
        LlmFunction::from_keyword(args.name.as_str(), object)
    } else {
        let parameters: Vec<Schema> = read_document(&args.input)?;
        LlmFunction::new(args.name.as_str(), parameters)
    }
    .separate(&predicate);

    if let Some(separated) = &function.separated {
        info!(
            function = %function.name,
            llm = separated.llm.len(),
            human = separated.human.len(),
            "separated parameters"
        );
    }

    write_document(&function, args.output.as_deref())
}
