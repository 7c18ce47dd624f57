//! # Type Checker
//!
//! Kind predicates over [`Schema`] and a depth-first visitor.

use super::{AdditionalProperties, ArraySchema, ObjectSchema, Schema, StringSchema};
use serde_json::Value;

impl Schema {
    /// Test whether the schema is a boolean type.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Schema::Boolean(_))
    }

    /// Test whether the schema is an integer type.
    pub fn is_integer(&self) -> bool {
        matches!(self, Schema::Integer(_))
    }

    /// Test whether the schema is a number type.
    pub fn is_number(&self) -> bool {
        matches!(self, Schema::Number(_))
    }

    /// Test whether the schema is a string type.
    pub fn is_string(&self) -> bool {
        matches!(self, Schema::String(_))
    }

    /// Test whether the schema is an array type.
    pub fn is_array(&self) -> bool {
        matches!(self, Schema::Array(_))
    }

    /// Test whether the schema is an object type.
    pub fn is_object(&self) -> bool {
        matches!(self, Schema::Object(_))
    }

    /// Test whether the schema is a union type.
    pub fn is_one_of(&self) -> bool {
        matches!(self, Schema::OneOf(_))
    }

    /// Test whether the schema only accepts `null`.
    pub fn is_null_only(&self) -> bool {
        matches!(self, Schema::Null(_))
    }

    /// Test whether the schema carries no type constraint.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Schema::Unknown(_))
    }

    /// Test whether `null` is an acceptable value.
    ///
    /// Unknown schemas are not considered nullable: they carry no explicit
    /// statement about `null`. A union is nullable when any branch is.
    pub fn is_nullable(&self) -> bool {
        match self {
            Schema::Boolean(s) => s.nullable,
            Schema::Integer(s) => s.nullable,
            Schema::Number(s) => s.nullable,
            Schema::String(s) => s.nullable,
            Schema::Array(s) => s.nullable,
            Schema::Object(s) => s.nullable,
            Schema::OneOf(s) => s.one_of.iter().any(Schema::is_nullable),
            Schema::Null(_) => true,
            Schema::Unknown(_) => false,
        }
    }

    /// Returns the string payload, if this is a string schema.
    pub fn as_string(&self) -> Option<&StringSchema> {
        match self {
            Schema::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the array payload, if this is an array schema.
    pub fn as_array(&self) -> Option<&ArraySchema> {
        match self {
            Schema::Array(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the object payload, if this is an object schema.
    pub fn as_object(&self) -> Option<&ObjectSchema> {
        match self {
            Schema::Object(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up a vendor extension (e.g. `x-wrtn-secret-key`) on this node.
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.meta().extensions.get(key)
    }
}

/// Visit every nested schema.
///
/// The callback sees the node itself first, then every union branch, every
/// property followed by the additional-properties schema, or the array item
/// schema, depth first.
pub fn visit<F>(schema: &Schema, callback: &mut F)
where
    F: FnMut(&Schema),
{
    callback(schema);
    match schema {
        Schema::OneOf(union) => {
            for branch in &union.one_of {
                visit(branch, callback);
            }
        }
        Schema::Object(object) => {
            for property in object.properties.values() {
                visit(property, callback);
            }
            if let Some(AdditionalProperties::Schema(additional)) = &object.additional_properties {
                visit(additional, callback);
            }
        }
        Schema::Array(array) => visit(&array.items, callback),
        _ => {}
    }
}
