//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// String errors default to `General`; the other string-carrying variants
/// must be built explicitly.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Merging was requested for a function whose parameters were never separated.
    #[from(ignore)]
    #[display("Function `{_0}` has no separated parameters to merge")]
    NotSeparated(String),

    /// Neither the LLM nor the human side carries the parameter at this index.
    #[from(ignore)]
    #[display(
        "Failed to gather separated arguments: both LLM and human sides are empty for parameter {_0}"
    )]
    EmptyParameter(usize),

    /// A schema document could not be decoded into a schema tree.
    #[from(ignore)]
    #[display("Schema Error: {_0}")]
    Schema(String),

    /// Wrapper for `serde_json` errors.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_conversion() {
        // String defaults to General, never to the explicit variants
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
    }

    #[test]
    fn test_empty_parameter_display() {
        let app_err = AppError::EmptyParameter(2);
        assert_eq!(
            format!("{}", app_err),
            "Failed to gather separated arguments: both LLM and human sides are empty for parameter 2"
        );
    }

    #[test]
    fn test_not_separated_display() {
        let app_err = AppError::NotSeparated("create_user".into());
        assert!(format!("{}", app_err).contains("`create_user`"));
    }
}
