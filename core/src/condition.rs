//! Condition model: the typed filter rules the UI layer constructs and the
//! engine evaluates.
//!
//! The wire form mirrors the UI's condition objects
//! (`{ "id", "field", "operator", "fieldType", "value" }`, camelCase), so a
//! condition edited in the browser deserializes directly into
//! [`FilterCondition`]. A payload whose shape does not match its declared
//! field type is rejected at this boundary and never reaches evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Opaque unique token identifying one condition within the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConditionId(Ulid);

impl ConditionId {
    pub fn new() -> Self { Self(Ulid::new()) }
}

impl Default for ConditionId {
    fn default() -> Self { Self::new() }
}

impl fmt::Display for ConditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Closed set of filterable value domains.
///
/// The tag fixes both the payload shape a condition may carry and the
/// operator family that applies to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Amount,
    SingleSelect,
    MultiSelect,
    Boolean,
}

impl FieldType {
    /// Operator a fresh condition starts with.
    pub fn default_operator(self) -> Operator {
        match self {
            FieldType::Text => Operator::Contains,
            FieldType::Number => Operator::Equals,
            FieldType::Date | FieldType::Amount => Operator::Between,
            FieldType::SingleSelect | FieldType::Boolean => Operator::Is,
            FieldType::MultiSelect => Operator::In,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Amount => "amount",
            FieldType::SingleSelect => "singleSelect",
            FieldType::MultiSelect => "multiSelect",
            FieldType::Boolean => "boolean",
        };
        write!(f, "{}", name)
    }
}

/// Every operator any family understands. Which ones are legal for a given
/// field is catalog data; an operator outside its family's set evaluates as
/// a non-match rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    Equals,
    Contains,
    StartsWith,
    EndsWith,
    DoesNotContain,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    Between,
    Is,
    IsNot,
    In,
    NotIn,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operator::Equals => "equals",
            Operator::Contains => "contains",
            Operator::StartsWith => "startsWith",
            Operator::EndsWith => "endsWith",
            Operator::DoesNotContain => "doesNotContain",
            Operator::GreaterThan => "greaterThan",
            Operator::LessThan => "lessThan",
            Operator::GreaterThanOrEqual => "greaterThanOrEqual",
            Operator::LessThanOrEqual => "lessThanOrEqual",
            Operator::Between => "between",
            Operator::Is => "is",
            Operator::IsNot => "isNot",
            Operator::In => "in",
            Operator::NotIn => "notIn",
        };
        write!(f, "{}", name)
    }
}

/// Typed value payload, keyed by the field type tag.
///
/// Adjacently tagged so serialization produces the UI's
/// `"fieldType": ..., "value": { ... }` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "fieldType", content = "value", rename_all = "camelCase")]
pub enum FilterValue {
    Text { value: String },
    Number { value: f64 },
    #[serde(rename_all = "camelCase")]
    Date { start_date: String, end_date: String },
    #[serde(rename_all = "camelCase")]
    Amount { min_amount: f64, max_amount: f64 },
    SingleSelect { value: String },
    MultiSelect { values: Vec<String> },
    Boolean { value: bool },
}

impl FilterValue {
    /// The field-type tag this payload belongs to.
    pub fn field_type(&self) -> FieldType {
        match self {
            FilterValue::Text { .. } => FieldType::Text,
            FilterValue::Number { .. } => FieldType::Number,
            FilterValue::Date { .. } => FieldType::Date,
            FilterValue::Amount { .. } => FieldType::Amount,
            FilterValue::SingleSelect { .. } => FieldType::SingleSelect,
            FilterValue::MultiSelect { .. } => FieldType::MultiSelect,
            FilterValue::Boolean { .. } => FieldType::Boolean,
        }
    }

    /// Payload the UI seeds when a field of the given type is chosen.
    pub fn default_for(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Text => FilterValue::Text { value: String::new() },
            FieldType::Number => FilterValue::Number { value: 0.0 },
            FieldType::Date => FilterValue::Date { start_date: String::new(), end_date: String::new() },
            FieldType::Amount => FilterValue::Amount { min_amount: 0.0, max_amount: 0.0 },
            FieldType::SingleSelect => FilterValue::SingleSelect { value: String::new() },
            FieldType::MultiSelect => FilterValue::MultiSelect { values: Vec::new() },
            FieldType::Boolean => FilterValue::Boolean { value: true },
        }
    }
}

/// A single (field, operator, typed value) filter rule.
///
/// Conditions are immutable inputs per evaluation call; the UI replaces a
/// condition wholesale when the user edits it. `operator` is expected to
/// belong to the catalog's set for the field - the engine does not re-check
/// this and treats a mismatch as a non-match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    pub id: ConditionId,
    pub field: String,
    pub operator: Operator,
    #[serde(flatten)]
    pub value: FilterValue,
}

impl FilterCondition {
    /// Fresh condition for a field, seeded with the type's default operator
    /// and payload.
    pub fn new(field: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: ConditionId::new(),
            field: field.into(),
            operator: field_type.default_operator(),
            value: FilterValue::default_for(field_type),
        }
    }

    pub fn field_type(&self) -> FieldType { self.value.field_type() }
}
