#![deny(missing_docs)]

//! # Document I/O
//!
//! Reads and writes JSON or YAML documents, picking the format from the file
//! extension (`.yaml` / `.yml` for YAML, JSON otherwise).

use crate::error::{CliError, CliResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serialization format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON (default).
    Json,
    /// YAML.
    Yaml,
}

impl Format {
    /// Picks the format from the extension of `path`.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

/// Reads and decodes the document at `path`.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    if !path.exists() {
        return Err(CliError::General(format!("Input file not found: {:?}", path)));
    }
    let content = fs::read_to_string(path)?;
    let value = match Format::from_path(path) {
        Format::Yaml => serde_yaml::from_str(&content)?,
        Format::Json => serde_json::from_str(&content)?,
    };
    Ok(value)
}

/// Encodes `value` and writes it to `output`, or prints JSON to stdout.
pub fn write_document<T: Serialize>(value: &T, output: Option<&Path>) -> CliResult<()> {
    let Some(out_path) = output else {
        // Stdout defaults to JSON
        println!("{}", serde_json::to_string_pretty(value)?);
        return Ok(());
    };

    let output_str = match Format::from_path(out_path) {
        Format::Yaml => serde_yaml::to_string(value)?,
        Format::Json => serde_json::to_string_pretty(value)?,
    };
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(out_path, output_str)?;
    tracing::info!(path = ?out_path, "wrote output");
    Ok(())
}
