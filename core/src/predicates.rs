#![deny(missing_docs)]

//! # Separation Predicates
//!
//! Ready-made predicates for [`separate_schema`](crate::separator::separate_schema)
//! and [`separate_parameters`](crate::separator::separate_parameters).
//!
//! Each returns `true` for nodes whose value a human must supply.

use crate::schema::Schema;

/// Extension naming the secret (OAuth token, API key) a string holds.
pub const SECRET_KEY_EXTENSION: &str = "x-wrtn-secret-key";

/// Boxed predicate, for building predicate lists at runtime.
pub type Predicate = Box<dyn Fn(&Schema) -> bool + Send + Sync>;

/// Strings carrying a secret key extension.
pub fn secret_key(schema: &Schema) -> bool {
    schema.is_string() && schema.extension(SECRET_KEY_EXTENSION).is_some()
}

/// Strings declaring a `contentMediaType`, i.e. file uploads.
pub fn content_media_type(schema: &Schema) -> bool {
    schema
        .as_string()
        .is_some_and(|s| s.content_media_type.is_some())
}

/// Strings with `format: binary`.
pub fn binary_format(schema: &Schema) -> bool {
    schema
        .as_string()
        .is_some_and(|s| s.format.as_deref() == Some("binary"))
}

/// Nodes of any kind carrying the given extension key.
pub fn has_extension(key: impl Into<String>) -> impl Fn(&Schema) -> bool + Send + Sync {
    let key = key.into();
    move |schema: &Schema| schema.extension(&key).is_some()
}

/// Strings with the given `format`.
pub fn string_format(format: impl Into<String>) -> impl Fn(&Schema) -> bool + Send + Sync {
    let format = format.into();
    move |schema: &Schema| {
        schema
            .as_string()
            .is_some_and(|s| s.format.as_deref() == Some(format.as_str()))
    }
}

/// Matches when any of `predicates` matches. An empty list matches nothing.
pub fn any_of(predicates: Vec<Predicate>) -> impl Fn(&Schema) -> bool + Send + Sync {
    move |schema: &Schema| predicates.iter().any(|predicate| predicate(schema))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn schema(value: Value) -> Schema {
        Schema::from_value(value).unwrap()
    }

    #[test]
    fn test_secret_key_requires_string() {
        assert!(secret_key(&schema(json!({
            "type": "string",
            "x-wrtn-secret-key": "notion"
        }))));
        assert!(!secret_key(&schema(json!({
            "type": "integer",
            "x-wrtn-secret-key": "notion"
        }))));
        assert!(!secret_key(&schema(json!({ "type": "string" }))));
    }

    #[test]
    fn test_upload_predicates() {
        let upload = schema(json!({ "type": "string", "contentMediaType": "image/*" }));
        let binary = schema(json!({ "type": "string", "format": "binary" }));
        assert!(content_media_type(&upload));
        assert!(!content_media_type(&binary));
        assert!(binary_format(&binary));
        assert!(string_format("binary")(&binary));
        assert!(!string_format("uuid")(&binary));
    }

    #[test]
    fn test_any_of_combines() {
        let predicate = any_of(vec![
            Box::new(secret_key) as Predicate,
            Box::new(has_extension("x-human")),
        ]);
        assert!(predicate(&schema(json!({ "type": "boolean", "x-human": true }))));
        assert!(!predicate(&schema(json!({ "type": "boolean" }))));
        assert!(!any_of(Vec::new())(&schema(json!({ "type": "null" }))));
    }
}
