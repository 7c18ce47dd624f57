#![deny(missing_docs)]

//! # LLM Params Core
//!
//! Splits the parameter schemas of an API operation between what an LLM may
//! compose and what a human must supply (secrets, file uploads), then merges
//! both argument sets back into the argument list the operation expects.
//!
//! Every operation is a pure function over its inputs; the separation
//! predicate is always passed in by the caller.

/// Shared error types.
pub mod error;

/// Parameter type schemas.
pub mod schema;

/// Schema and parameter separation.
pub mod separator;

/// Ready-made separation predicates.
pub mod predicates;

/// Argument merging.
pub mod merger;

/// LLM function metadata.
pub mod function;

/// Positional argument routing onto request parts.
pub mod route;

pub use error::{AppError, AppResult};
pub use function::{KeywordSeparated, LlmFunction};
pub use merger::{merge_parameters, merge_value};
pub use route::{RouteArguments, RouteShape};
pub use schema::{visit, AdditionalProperties, ObjectSchema, Schema};
pub use separator::{separate_parameters, separate_schema, Separated, SeparatedParameter};
