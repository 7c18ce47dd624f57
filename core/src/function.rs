#![deny(missing_docs)]

//! # LLM Functions
//!
//! Function metadata handed to an LLM for function calling, together with the
//! separation of its parameters between LLM and human.
//!
//! Two parameter styles exist:
//! - **Positional**: an ordered list of parameter schemas.
//! - **Keyword**: a single object whose properties are the parameters. The
//!   properties are also exposed positionally, in declaration order, so that
//!   [`merge_parameters`](crate::merger::merge_parameters) works for both.

use crate::schema::{types::is_false, ObjectSchema, Schema};
use crate::separator::{separate_parameters, separate_schema, Separated, SeparatedParameter};
use serde::{Deserialize, Serialize};

/// Separation of a keyword function's single object parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordSeparated {
    /// Object of the properties composed by the LLM.
    pub llm: Option<Schema>,
    /// Object of the properties supplied by a human.
    pub human: Option<Schema>,
}

/// A callable function as presented to an LLM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmFunction {
    /// Function name, unique within an application.
    pub name: String,
    /// What the function does.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the underlying operation is deprecated.
    #[serde(default, skip_serializing_if = "is_false")]
    pub deprecated: bool,
    /// Grouping tags of the underlying operation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Parameter schemas in call order.
    pub parameters: Vec<Schema>,
    /// Parameters split between LLM and human, if separation was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separated: Option<Separated>,
    /// The keyword object, for keyword functions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<Schema>,
    /// Separation of the keyword object, for separated keyword functions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword_separated: Option<KeywordSeparated>,
}

impl LlmFunction {
    /// Creates a positional function without separation metadata.
    pub fn new(name: impl Into<String>, parameters: Vec<Schema>) -> Self {
        Self {
            name: name.into(),
            description: None,
            deprecated: false,
            tags: Vec::new(),
            parameters,
            separated: None,
            keyword: None,
            keyword_separated: None,
        }
    }

    /// Creates a keyword function whose parameters are the properties of `keyword`.
    pub fn from_keyword(name: impl Into<String>, keyword: ObjectSchema) -> Self {
        let parameters = keyword.properties.values().cloned().collect();
        Self {
            keyword: Some(Schema::Object(keyword)),
            ..Self::new(name, parameters)
        }
    }

    /// Sets the description, returning `self` for chaining.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether this function takes a single keyword object.
    pub fn is_keyword(&self) -> bool {
        self.keyword.is_some()
    }

    /// Separates the parameters with `predicate`, replacing any previous separation.
    ///
    /// Keyword functions separate the keyword object as a whole, then map each
    /// property of either side back to its positional index.
    pub fn separate<P>(mut self, predicate: &P) -> Self
    where
        P: Fn(&Schema) -> bool + ?Sized,
    {
        match self.keyword.as_ref().and_then(Schema::as_object) {
            Some(keyword) => {
                let (llm, human) = separate_schema(predicate, &Schema::Object(keyword.clone()));
                self.separated = Some(Separated {
                    llm: positional_sides(keyword, llm.as_ref()),
                    human: positional_sides(keyword, human.as_ref()),
                });
                self.keyword_separated = Some(KeywordSeparated { llm, human });
            }
            None => {
                self.separated = Some(separate_parameters(&self.parameters, predicate));
            }
        }
        self
    }
}

/// One entry per property of `side`, indexed by the property's position in `keyword`.
fn positional_sides(keyword: &ObjectSchema, side: Option<&Schema>) -> Vec<SeparatedParameter> {
    let Some(side) = side.and_then(Schema::as_object) else {
        return Vec::new();
    };
    side.properties
        .iter()
        .filter_map(|(key, schema)| {
            keyword
                .properties
                .get_index_of(key)
                .map(|index| SeparatedParameter {
                    index,
                    schema: schema.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::secret_key;
    use serde_json::json;

    fn keyword_object() -> ObjectSchema {
        let schema = Schema::from_value(json!({
            "type": "object",
            "properties": {
                "databaseId": { "type": "string" },
                "secretKey": { "type": "string", "x-wrtn-secret-key": "notion" },
                "title": { "type": "string" }
            },
            "required": ["databaseId", "secretKey", "title"]
        }))
        .unwrap();
        match schema {
            Schema::Object(object) => object,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_keyword_properties_become_positional() {
        let function = LlmFunction::from_keyword("create", keyword_object());
        assert!(function.is_keyword());
        assert_eq!(function.parameters.len(), 3);
        assert!(function.separated.is_none());
    }

    #[test]
    fn test_keyword_separation_maps_indexes() {
        let function = LlmFunction::from_keyword("create", keyword_object()).separate(&secret_key);
        let separated = function.separated.as_ref().unwrap();
        let llm: Vec<usize> = separated.llm.iter().map(|p| p.index).collect();
        let human: Vec<usize> = separated.human.iter().map(|p| p.index).collect();
        assert_eq!(llm, vec![0, 2]);
        assert_eq!(human, vec![1]);

        let keyword = function.keyword_separated.unwrap();
        let human_object = keyword.human.unwrap();
        assert_eq!(
            human_object.as_object().unwrap().required,
            Some(vec!["secretKey".to_string()])
        );
    }

    #[test]
    fn test_positional_separation() {
        let parameters = vec![
            Schema::from_value(json!({ "type": "integer" })).unwrap(),
            Schema::from_value(json!({ "type": "string", "x-wrtn-secret-key": "google" })).unwrap(),
        ];
        let function = LlmFunction::new("call", parameters).separate(&secret_key);
        assert!(!function.is_keyword());
        let separated = function.separated.unwrap();
        assert_eq!(separated.llm.len(), 1);
        assert_eq!(separated.human[0].index, 1);
    }

    #[test]
    fn test_serialized_shape() {
        let function = LlmFunction::new("call", Vec::new()).with_description("does a thing");
        assert_eq!(
            serde_json::to_value(&function).unwrap(),
            json!({ "name": "call", "description": "does a thing", "parameters": [] })
        );
    }
}
