#![deny(missing_docs)]

//! # Schema Tree
//!
//! The LLM-facing type schema of a single function parameter.
//!
//! - **types**: payload structs of every schema kind.
//! - **checker**: type predicates and the recursive visitor.
//!
//! A schema is a closed sum type over the kinds an OpenAPI 3.0 schema can take
//! once references have been resolved. Decoding goes through
//! [`serde_json::Value`] and dispatches on `oneOf` first, then on `type`; a
//! node carrying neither accepts any value and decodes as [`Schema::Unknown`].

pub mod checker;
pub mod types;

pub use checker::visit;
pub use types::{
    AdditionalProperties, ArraySchema, BooleanSchema, IntegerSchema, NullSchema, NumberSchema,
    ObjectSchema, OneOfSchema, SchemaMeta, StringSchema, UnknownSchema,
};

use crate::error::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// A node of the parameter type tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum Schema {
    /// `type: boolean`
    Boolean(BooleanSchema),
    /// `type: integer`
    Integer(IntegerSchema),
    /// `type: number`
    Number(NumberSchema),
    /// `type: string`
    String(StringSchema),
    /// `type: array`
    Array(ArraySchema),
    /// `type: object`
    Object(ObjectSchema),
    /// `oneOf` union of other schemas.
    OneOf(OneOfSchema),
    /// `type: null`
    Null(NullSchema),
    /// No type constraint.
    Unknown(UnknownSchema),
}

impl Default for Schema {
    fn default() -> Self {
        Schema::Unknown(UnknownSchema::default())
    }
}

impl Schema {
    /// The `type` keyword of this node, `None` for unions and unknown schemas.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Schema::Boolean(_) => Some("boolean"),
            Schema::Integer(_) => Some("integer"),
            Schema::Number(_) => Some("number"),
            Schema::String(_) => Some("string"),
            Schema::Array(_) => Some("array"),
            Schema::Object(_) => Some("object"),
            Schema::Null(_) => Some("null"),
            Schema::OneOf(_) | Schema::Unknown(_) => None,
        }
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Schema::OneOf(_) => "oneOf",
            Schema::Unknown(_) => "unknown",
            other => other.type_name().unwrap_or("unknown"),
        }
    }

    /// Shared attributes of this node.
    pub fn meta(&self) -> &SchemaMeta {
        match self {
            Schema::Boolean(s) => &s.meta,
            Schema::Integer(s) => &s.meta,
            Schema::Number(s) => &s.meta,
            Schema::String(s) => &s.meta,
            Schema::Array(s) => &s.meta,
            Schema::Object(s) => &s.meta,
            Schema::OneOf(s) => &s.meta,
            Schema::Null(s) => &s.meta,
            Schema::Unknown(s) => &s.meta,
        }
    }

    /// Mutable access to the shared attributes of this node.
    pub fn meta_mut(&mut self) -> &mut SchemaMeta {
        match self {
            Schema::Boolean(s) => &mut s.meta,
            Schema::Integer(s) => &mut s.meta,
            Schema::Number(s) => &mut s.meta,
            Schema::String(s) => &mut s.meta,
            Schema::Array(s) => &mut s.meta,
            Schema::Object(s) => &mut s.meta,
            Schema::OneOf(s) => &mut s.meta,
            Schema::Null(s) => &mut s.meta,
            Schema::Unknown(s) => &mut s.meta,
        }
    }

    /// Decodes a schema from a JSON value.
    pub fn from_value(value: Value) -> AppResult<Self> {
        Self::try_from(value)
    }
}

impl TryFrom<Value> for Schema {
    type Error = AppError;

    fn try_from(value: Value) -> AppResult<Self> {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                return Err(AppError::Schema(format!(
                    "expected a schema object, found `{}`",
                    other
                )))
            }
        };

        if map.contains_key("oneOf") {
            return decode(map).map(Schema::OneOf);
        }

        let type_name = match map.remove("type") {
            None => return decode(map).map(Schema::Unknown),
            Some(Value::String(type_name)) => type_name,
            Some(other) => {
                return Err(AppError::Schema(format!(
                    "unsupported `type` value `{}`",
                    other
                )))
            }
        };

        match type_name.as_str() {
            "boolean" => decode(map).map(Schema::Boolean),
            "integer" => decode(map).map(Schema::Integer),
            "number" => decode(map).map(Schema::Number),
            "string" => decode(map).map(Schema::String),
            "array" => decode(map).map(Schema::Array),
            "object" => decode(map).map(Schema::Object),
            "null" => decode(map).map(Schema::Null),
            other => Err(AppError::Schema(format!(
                "unsupported schema type `{}`",
                other
            ))),
        }
    }
}

fn decode<T: DeserializeOwned>(map: Map<String, Value>) -> AppResult<T> {
    serde_json::from_value(Value::Object(map)).map_err(|e| AppError::Schema(e.to_string()))
}

/// Writes `type` ahead of the payload fields.
#[derive(Serialize)]
struct Typed<'a, T> {
    #[serde(rename = "type")]
    type_name: &'static str,
    #[serde(flatten)]
    body: &'a T,
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        fn typed<'a, T>(type_name: &'static str, body: &'a T) -> Typed<'a, T> {
            Typed { type_name, body }
        }

        match self {
            Schema::Boolean(s) => typed("boolean", s).serialize(serializer),
            Schema::Integer(s) => typed("integer", s).serialize(serializer),
            Schema::Number(s) => typed("number", s).serialize(serializer),
            Schema::String(s) => typed("string", s).serialize(serializer),
            Schema::Array(s) => typed("array", s).serialize(serializer),
            Schema::Object(s) => typed("object", s).serialize(serializer),
            Schema::Null(s) => typed("null", s).serialize(serializer),
            Schema::OneOf(s) => s.serialize(serializer),
            Schema::Unknown(s) => s.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Number};

    #[test]
    fn test_decode_dispatches_on_type() {
        let schema = Schema::from_value(json!({
            "type": "object",
            "properties": {
                "id": { "type": "integer", "format": "int64" },
                "tags": { "type": "array", "items": { "type": "string" } }
            },
            "required": ["id"]
        }))
        .unwrap();

        let object = schema.as_object().unwrap();
        assert!(object.properties["id"].is_integer());
        assert!(object.properties["tags"].is_array());
        assert_eq!(object.required, Some(vec!["id".to_string()]));
    }

    #[test]
    fn test_decode_one_of_before_type() {
        let schema = Schema::from_value(json!({
            "oneOf": [{ "type": "string" }, { "type": "null" }]
        }))
        .unwrap();
        assert!(schema.is_one_of());
    }

    #[test]
    fn test_decode_without_type_is_unknown() {
        let schema = Schema::from_value(json!({ "description": "anything" })).unwrap();
        assert!(schema.is_unknown());
        assert_eq!(schema.meta().description.as_deref(), Some("anything"));
    }

    #[test]
    fn test_decode_rejects_unsupported_type() {
        let err = Schema::from_value(json!({ "type": "tuple" })).unwrap_err();
        assert!(matches!(err, AppError::Schema(msg) if msg.contains("tuple")));

        let err = Schema::from_value(json!({ "type": ["string", "null"] })).unwrap_err();
        assert!(matches!(err, AppError::Schema(_)));

        let err = Schema::from_value(json!(true)).unwrap_err();
        assert!(matches!(err, AppError::Schema(_)));
    }

    #[test]
    fn test_extensions_are_preserved() {
        let input = json!({
            "type": "string",
            "x-wrtn-secret-key": "google",
            "x-wrtn-secret-scopes": ["drive"],
            "description": "token"
        });
        let schema = Schema::from_value(input.clone()).unwrap();
        assert_eq!(schema.extension("x-wrtn-secret-key"), Some(&json!("google")));
        assert_eq!(serde_json::to_value(&schema).unwrap(), input);
    }

    #[test]
    fn test_serialize_writes_type_first() {
        let schema = Schema::Object(
            ObjectSchema::default()
                .with_property("name", Schema::String(StringSchema::default()))
                .with_required(["name"]),
        );
        let text = serde_json::to_string(&schema).unwrap();
        assert!(text.starts_with(r#"{"type":"object""#));
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({
                "type": "object",
                "properties": { "name": { "type": "string" } },
                "required": ["name"]
            })
        );
    }

    #[test]
    fn test_decode_nullable_enum() {
        let input = json!({ "type": "string", "nullable": true, "enum": ["a", null] });
        let schema = Schema::from_value(input.clone()).unwrap();
        assert_eq!(
            schema.as_string().unwrap().enum_values,
            Some(vec![Some("a".to_string()), None])
        );
        assert!(schema.is_nullable());
        assert_eq!(serde_json::to_value(&schema).unwrap(), input);
    }

    #[test]
    fn test_decode_fractional_integer_bounds() {
        let input = json!({ "type": "integer", "minimum": 0.5, "maximum": 10, "multipleOf": 2 });
        let schema = Schema::from_value(input.clone()).unwrap();
        match &schema {
            Schema::Integer(integer) => {
                assert_eq!(integer.minimum.as_ref().and_then(Number::as_f64), Some(0.5));
                assert_eq!(integer.maximum.as_ref().and_then(Number::as_i64), Some(10));
            }
            other => panic!("expected an integer schema, found {}", other.kind()),
        }
        assert_eq!(serde_json::to_value(&schema).unwrap(), input);
    }

    #[test]
    fn test_additional_properties_forms() {
        let flag = Schema::from_value(json!({
            "type": "object",
            "properties": {},
            "additionalProperties": false
        }))
        .unwrap();
        assert_eq!(
            flag.as_object().unwrap().additional_properties,
            Some(AdditionalProperties::Flag(false))
        );

        let map = Schema::from_value(json!({
            "type": "object",
            "additionalProperties": { "type": "number" }
        }))
        .unwrap();
        let additional = map.as_object().unwrap().additional_properties.as_ref();
        assert!(additional.and_then(AdditionalProperties::as_schema).is_some());
    }
}
