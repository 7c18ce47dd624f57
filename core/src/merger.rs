#![deny(missing_docs)]

//! # Argument Merging
//!
//! Rebuilds the positional argument list of a function call from the values
//! an LLM composed and the values a human supplied.
//!
//! `llm` and `human` are ordered like the `llm` and `human` lists of the
//! function's [`Separated`](crate::separator::Separated) metadata, not by
//! parameter index.
//!
//! Where both sides supply a concrete value for the same leaf, the human value
//! wins: it is the final fill-in for what the LLM left open.

use crate::error::{AppError, AppResult};
use crate::function::LlmFunction;
use serde_json::{Map, Value};
use tracing::debug;

/// Merges separated arguments into the argument list `function` expects.
///
/// # Errors
///
/// * [`AppError::NotSeparated`] if `function` carries no separation metadata.
/// * [`AppError::EmptyParameter`] if a parameter index appears on neither side.
pub fn merge_parameters(
    function: &LlmFunction,
    llm: &[Value],
    human: &[Value],
) -> AppResult<Vec<Value>> {
    let separated = function
        .separated
        .as_ref()
        .ok_or_else(|| AppError::NotSeparated(function.name.clone()))?;

    let merged = (0..function.parameters.len())
        .map(|index| {
            let llm_position = separated.llm_position(index);
            let human_position = separated.human_position(index);
            if llm_position.is_none() && human_position.is_none() {
                return Err(AppError::EmptyParameter(index));
            }
            let x = llm_position.and_then(|position| llm.get(position));
            let y = human_position.and_then(|position| human.get(position));
            Ok(merge_value(x, y).unwrap_or(Value::Null))
        })
        .collect::<AppResult<Vec<_>>>()?;

    debug!(
        function = %function.name,
        arguments = merged.len(),
        "merged separated arguments"
    );
    Ok(merged)
}

/// Deep-merges two optional values, `y` taking precedence.
///
/// - Two objects merge key by key, starting from `x`.
/// - Two arrays merge element-wise up to the longer length.
/// - Otherwise `y` wins unless it is absent or `null`, in which case `x` is kept.
///
/// Returns `None` only when neither side materialises a value.
pub fn merge_value(x: Option<&Value>, y: Option<&Value>) -> Option<Value> {
    match (x, y) {
        (Some(Value::Object(x)), Some(Value::Object(y))) => {
            Some(Value::Object(merge_objects(x, y)))
        }
        (Some(Value::Array(x)), Some(Value::Array(y))) => Some(Value::Array(merge_arrays(x, y))),
        (_, Some(y)) if !y.is_null() => Some(y.clone()),
        (x, _) => x.cloned(),
    }
}

fn merge_objects(x: &Map<String, Value>, y: &Map<String, Value>) -> Map<String, Value> {
    let mut output = x.clone();
    for (key, value) in y {
        if let Some(merged) = merge_value(x.get(key), Some(value)) {
            output.insert(key.clone(), merged);
        }
    }
    output
}

fn merge_arrays(x: &[Value], y: &[Value]) -> Vec<Value> {
    (0..x.len().max(y.len()))
        .map(|i| merge_value(x.get(i), y.get(i)).unwrap_or(Value::Null))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use crate::separator::{Separated, SeparatedParameter};
    use serde_json::json;

    fn function_with(count: usize, separated: Option<Separated>) -> LlmFunction {
        LlmFunction {
            separated,
            ..LlmFunction::new("call", vec![Schema::default(); count])
        }
    }

    fn entries(indexes: &[usize]) -> Vec<SeparatedParameter> {
        indexes
            .iter()
            .map(|&index| SeparatedParameter {
                index,
                schema: Schema::default(),
            })
            .collect()
    }

    #[test]
    fn test_human_wins_on_leaf_conflict() {
        let merged = merge_value(Some(&json!({ "a": 1, "b": 2 })), Some(&json!({ "a": 9 })));
        assert_eq!(merged, Some(json!({ "a": 9, "b": 2 })));
    }

    #[test]
    fn test_null_human_value_falls_back() {
        assert_eq!(merge_value(Some(&json!("x")), Some(&Value::Null)), Some(json!("x")));
        assert_eq!(merge_value(None, Some(&Value::Null)), None);
        assert_eq!(merge_value(Some(&Value::Null), None), Some(Value::Null));
        assert_eq!(merge_value(None, None), None);
    }

    #[test]
    fn test_type_mismatch_prefers_human() {
        assert_eq!(
            merge_value(Some(&json!([1])), Some(&json!({ "a": 1 }))),
            Some(json!({ "a": 1 }))
        );
        assert_eq!(merge_value(Some(&json!({ "a": 1 })), Some(&json!(3))), Some(json!(3)));
    }

    #[test]
    fn test_arrays_merge_to_longer_length() {
        let merged = merge_value(
            Some(&json!([{ "b": 1 }, { "b": 2 }, { "b": 3 }])),
            Some(&json!([{ "a": "s1" }])),
        );
        assert_eq!(
            merged,
            Some(json!([{ "a": "s1", "b": 1 }, { "b": 2 }, { "b": 3 }]))
        );
    }

    #[test]
    fn test_nested_null_key_keeps_llm_value() {
        let merged = merge_value(
            Some(&json!({ "a": { "x": 1 } })),
            Some(&json!({ "a": null, "b": null })),
        );
        assert_eq!(merged, Some(json!({ "a": { "x": 1 } })));
    }

    #[test]
    fn test_unseparated_function_fails() {
        let function = function_with(1, None);
        let err = merge_parameters(&function, &[json!(1)], &[]).unwrap_err();
        assert!(matches!(err, AppError::NotSeparated(name) if name == "call"));
    }

    #[test]
    fn test_missing_index_fails() {
        let function = function_with(
            2,
            Some(Separated {
                llm: entries(&[0]),
                human: Vec::new(),
            }),
        );
        let err = merge_parameters(&function, &[json!(1)], &[]).unwrap_err();
        assert!(matches!(err, AppError::EmptyParameter(1)));
    }

    #[test]
    fn test_values_follow_separated_order() {
        let function = function_with(
            3,
            Some(Separated {
                llm: entries(&[0, 2]),
                human: entries(&[1, 2]),
            }),
        );
        let merged = merge_parameters(
            &function,
            &[json!(123), json!({ "title": "t" })],
            &[json!("https://some.url"), json!({ "thumbnail": "f.jpg" })],
        )
        .unwrap();
        assert_eq!(
            merged,
            vec![
                json!(123),
                json!("https://some.url"),
                json!({ "title": "t", "thumbnail": "f.jpg" }),
            ]
        );
    }

    #[test]
    fn test_missing_llm_value_uses_human() {
        let function = function_with(
            1,
            Some(Separated {
                llm: entries(&[0]),
                human: entries(&[0]),
            }),
        );
        let merged = merge_parameters(&function, &[], &[json!({ "a": 1 })]).unwrap();
        assert_eq!(merged, vec![json!({ "a": 1 })]);
    }

    #[test]
    fn test_slot_without_values_becomes_null() {
        let function = function_with(
            1,
            Some(Separated {
                llm: entries(&[0]),
                human: Vec::new(),
            }),
        );
        assert_eq!(merge_parameters(&function, &[], &[]).unwrap(), vec![Value::Null]);
    }
}
