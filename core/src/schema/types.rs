#![deny(missing_docs)]

//! # Schema Node Types
//!
//! Payload structs for every variant of [`Schema`](super::Schema).
//!
//! The `type` keyword is not stored here: it is implied by the enum variant
//! and written back by the `Schema` serializer.

use super::Schema;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

pub(crate) fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Attributes shared by every schema kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaMeta {
    /// Short title of the schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Detailed description, usually shown to the LLM.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the value is deprecated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Example value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Named example values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Value>,
    /// Vendor extensions (`x-*`) and any other keyword not modelled explicitly.
    ///
    /// Keys keep their document order.
    #[serde(flatten)]
    pub extensions: IndexMap<String, Value>,
}

/// `type: boolean`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanSchema {
    /// Whether `null` is accepted.
    #[serde(default, skip_serializing_if = "is_false")]
    pub nullable: bool,
    /// Default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    /// Allowed values; `null` appears here for nullable enums.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Option<bool>>>,
    /// Shared attributes.
    #[serde(flatten)]
    pub meta: SchemaMeta,
}

/// `type: integer`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegerSchema {
    /// Whether `null` is accepted.
    #[serde(default, skip_serializing_if = "is_false")]
    pub nullable: bool,
    /// Default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<i64>,
    /// Allowed values; `null` appears here for nullable enums.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Option<i64>>>,
    /// Format hint, e.g. `int64`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Lower bound. Kept as a JSON number: bounds need not be integral.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    /// Upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    /// Whether `minimum` itself is excluded (OpenAPI 3.0 boolean form).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<bool>,
    /// Whether `maximum` itself is excluded (OpenAPI 3.0 boolean form).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<bool>,
    /// The value must be a multiple of this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Number>,
    /// Shared attributes.
    #[serde(flatten)]
    pub meta: SchemaMeta,
}

/// `type: number`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberSchema {
    /// Whether `null` is accepted.
    #[serde(default, skip_serializing_if = "is_false")]
    pub nullable: bool,
    /// Default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<f64>,
    /// Allowed values; `null` appears here for nullable enums.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Option<f64>>>,
    /// Format hint, e.g. `double`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Whether `minimum` itself is excluded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<bool>,
    /// Whether `maximum` itself is excluded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<bool>,
    /// The value must be a multiple of this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
    /// Shared attributes.
    #[serde(flatten)]
    pub meta: SchemaMeta,
}

/// `type: string`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringSchema {
    /// Whether `null` is accepted.
    #[serde(default, skip_serializing_if = "is_false")]
    pub nullable: bool,
    /// Default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Allowed values; `null` appears here for nullable enums.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Option<String>>>,
    /// Format, e.g. `uuid`, `date-time`, `binary`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Regular expression the value must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Minimum length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Maximum length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Media type of the content, set for file uploads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_media_type: Option<String>,
    /// Shared attributes.
    #[serde(flatten)]
    pub meta: SchemaMeta,
}

/// `type: array`
///
/// Arrays are homogeneous: one item schema, no tuples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArraySchema {
    /// Whether `null` is accepted.
    #[serde(default, skip_serializing_if = "is_false")]
    pub nullable: bool,
    /// Schema of every element.
    pub items: Box<Schema>,
    /// Minimum number of elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    /// Maximum number of elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    /// Whether elements must be unique.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
    /// Shared attributes.
    #[serde(flatten)]
    pub meta: SchemaMeta,
}

/// `additionalProperties` of an object: either a flag or a value schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `true` allows any extra key, `false` forbids them.
    Flag(bool),
    /// Extra keys are allowed when their value matches this schema.
    Schema(Box<Schema>),
}

impl AdditionalProperties {
    /// Returns the value schema, if this is not a plain flag.
    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            AdditionalProperties::Schema(schema) => Some(schema),
            AdditionalProperties::Flag(_) => None,
        }
    }
}

/// `type: object`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSchema {
    /// Whether `null` is accepted.
    #[serde(default, skip_serializing_if = "is_false")]
    pub nullable: bool,
    /// Named properties, in declaration order.
    #[serde(default)]
    pub properties: IndexMap<String, Schema>,
    /// Keys that must be present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Policy for keys not listed in `properties`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties>,
    /// Shared attributes.
    #[serde(flatten)]
    pub meta: SchemaMeta,
}

impl ObjectSchema {
    /// Adds a property, returning `self` for chaining.
    pub fn with_property(mut self, key: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(key.into(), schema);
        self
    }

    /// Marks the given keys as required, returning `self` for chaining.
    pub fn with_required<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Copy of this object with every property removed.
    pub(crate) fn hollow(&self) -> Self {
        Self {
            nullable: self.nullable,
            properties: IndexMap::new(),
            required: self.required.clone(),
            additional_properties: self.additional_properties.clone(),
            meta: self.meta.clone(),
        }
    }
}

/// `oneOf` union.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneOfSchema {
    /// Candidate schemas.
    pub one_of: Vec<Schema>,
    /// Shared attributes.
    #[serde(flatten)]
    pub meta: SchemaMeta,
}

/// `type: null`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NullSchema {
    /// Shared attributes.
    #[serde(flatten)]
    pub meta: SchemaMeta,
}

/// A schema without `type`: any value is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnknownSchema {
    /// Shared attributes.
    #[serde(flatten)]
    pub meta: SchemaMeta,
}
