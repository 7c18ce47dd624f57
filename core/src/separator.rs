#![deny(missing_docs)]

//! # Parameter Separation
//!
//! Splits parameter schemas into the part an LLM composes and the part a
//! human must fill in.
//!
//! Logic:
//! - A node claimed by the predicate goes to the human side whole; its
//!   children are never inspected.
//! - Unions and unknown schemas cannot be split and stay with the LLM.
//! - Arrays split through their item schema.
//! - Objects split property by property.
//! - Every other node is a leaf and stays with the LLM.

use crate::schema::{AdditionalProperties, ArraySchema, ObjectSchema, Schema};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// One side of a separated parameter, tagged with its original position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeparatedParameter {
    /// Zero-based position of the parameter in the function's parameter list.
    pub index: usize,
    /// The portion of the parameter schema belonging to this side.
    pub schema: Schema,
}

/// Parameters of a function split between LLM and human.
///
/// Both lists are sorted by `index`. An index may appear in one list or both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Separated {
    /// Parameters (or parts of them) composed by the LLM.
    pub llm: Vec<SeparatedParameter>,
    /// Parameters (or parts of them) supplied by a human.
    pub human: Vec<SeparatedParameter>,
}

impl Separated {
    /// Position within `llm` of the entry for parameter `index`.
    pub fn llm_position(&self, index: usize) -> Option<usize> {
        self.llm.iter().position(|p| p.index == index)
    }

    /// Position within `human` of the entry for parameter `index`.
    pub fn human_position(&self, index: usize) -> Option<usize> {
        self.human.iter().position(|p| p.index == index)
    }
}

/// Separates every parameter of a function.
///
/// # Arguments
///
/// * `parameters` - The function's parameter schemas, in call order.
/// * `predicate` - Returns `true` for nodes a human must supply.
pub fn separate_parameters<P>(parameters: &[Schema], predicate: &P) -> Separated
where
    P: Fn(&Schema) -> bool + ?Sized,
{
    let mut separated = Separated::default();
    for (index, parameter) in parameters.iter().enumerate() {
        let (llm, human) = separate_schema(predicate, parameter);
        if let Some(schema) = llm {
            separated.llm.push(SeparatedParameter { index, schema });
        }
        if let Some(schema) = human {
            separated.human.push(SeparatedParameter { index, schema });
        }
    }
    debug!(
        parameters = parameters.len(),
        llm = separated.llm.len(),
        human = separated.human.len(),
        "separated function parameters"
    );
    separated
}

/// Separates one schema node into its `(llm, human)` parts.
///
/// At least one side is always `Some`.
pub fn separate_schema<P>(predicate: &P, schema: &Schema) -> (Option<Schema>, Option<Schema>)
where
    P: Fn(&Schema) -> bool + ?Sized,
{
    if predicate(schema) {
        trace!(kind = schema.kind(), "claimed by human side");
        return (None, Some(schema.clone()));
    }
    match schema {
        Schema::Unknown(_) | Schema::OneOf(_) => (Some(schema.clone()), None),
        Schema::Array(array) => separate_array(predicate, array),
        Schema::Object(object) => separate_object(predicate, object),
        Schema::Boolean(_)
        | Schema::Integer(_)
        | Schema::Number(_)
        | Schema::String(_)
        | Schema::Null(_) => (Some(schema.clone()), None),
    }
}

fn separate_array<P>(predicate: &P, array: &ArraySchema) -> (Option<Schema>, Option<Schema>)
where
    P: Fn(&Schema) -> bool + ?Sized,
{
    let (llm, human) = separate_schema(predicate, &array.items);
    let rebuild = |items: Schema| {
        Schema::Array(ArraySchema {
            items: Box::new(items),
            ..array.clone()
        })
    };
    (llm.map(rebuild), human.map(rebuild))
}

fn separate_object<P>(predicate: &P, object: &ObjectSchema) -> (Option<Schema>, Option<Schema>)
where
    P: Fn(&Schema) -> bool + ?Sized,
{
    let additional = object
        .additional_properties
        .as_ref()
        .and_then(AdditionalProperties::as_schema);

    // Nothing to split: the empty object is kept whole for the LLM
    if object.properties.is_empty() && additional.is_none() {
        trace!("empty object kept atomic");
        return (Some(Schema::Object(object.clone())), None);
    }

    let mut llm = object.hollow();
    let mut human = object.hollow();
    for (key, value) in &object.properties {
        let (x, y) = separate_schema(predicate, value);
        if let Some(x) = x {
            llm.properties.insert(key.clone(), x);
        }
        if let Some(y) = y {
            human.properties.insert(key.clone(), y);
        }
    }

    // Only a map-only object survives on a side through its value schema alone
    let map_only = object.properties.is_empty();
    let mut llm_keeps_additional = false;
    let mut human_keeps_additional = false;
    if let Some(additional) = additional {
        let (dx, dy) = separate_schema(predicate, additional);
        llm_keeps_additional = map_only && dx.is_some();
        human_keeps_additional = map_only && dy.is_some();
        llm.additional_properties = Some(into_additional(dx));
        human.additional_properties = Some(into_additional(dy));
    }

    (
        finish_side(llm, llm_keeps_additional),
        finish_side(human, human_keeps_additional),
    )
}

/// A side without its own value schema forbids extra keys.
fn into_additional(schema: Option<Schema>) -> AdditionalProperties {
    match schema {
        Some(schema) => AdditionalProperties::Schema(Box::new(schema)),
        None => AdditionalProperties::Flag(false),
    }
}

/// Drops a side that ended up describing nothing and shrinks `required` to
/// the keys this side defines.
fn finish_side(mut side: ObjectSchema, keeps_additional: bool) -> Option<Schema> {
    if side.properties.is_empty() && !keeps_additional {
        return None;
    }
    if let Some(required) = side.required.as_mut() {
        required.retain(|key| side.properties.contains_key(key));
    }
    Some(Schema::Object(side))
}
