//! Per-field-type predicate families behind one exhaustive dispatch.
//!
//! Every family fails closed: failed coercions and operators outside the
//! family's set evaluate to a non-match. Absent raw values never reach this
//! module - the evaluator resolves them first.

use crate::condition::{FieldType, FilterValue, Operator};
use crate::error::FilterError;
use crate::value::{parse_date, Value};

/// Match decision for one resolved record value against one typed payload.
///
/// The `Err` case is a wiring fault (operator outside the payload's family);
/// the default evaluation path collapses it to `false`.
pub(super) fn matches(raw: &Value, operator: Operator, filter: &FilterValue) -> Result<bool, FilterError> {
    match filter {
        FilterValue::Text { value } => text_matches(raw, operator, value),
        FilterValue::Number { value } => number_matches(raw, operator, *value),
        FilterValue::Date { start_date, end_date } => date_matches(raw, operator, start_date, end_date),
        FilterValue::Amount { min_amount, max_amount } => amount_matches(raw, operator, *min_amount, *max_amount),
        FilterValue::SingleSelect { value } => select_matches(raw, operator, value),
        FilterValue::MultiSelect { values } => multi_select_matches(raw, operator, values),
        FilterValue::Boolean { value } => boolean_matches(raw, operator, *value),
    }
}

/// Case-insensitive substring and affix tests.
fn text_matches(raw: &Value, operator: Operator, value: &str) -> Result<bool, FilterError> {
    let raw = raw.as_text().map(|s| s.to_lowercase());
    let value = value.to_lowercase();
    match operator {
        Operator::Equals => Ok(raw.is_some_and(|r| r == value)),
        Operator::Contains => Ok(raw.is_some_and(|r| r.contains(&value))),
        Operator::StartsWith => Ok(raw.is_some_and(|r| r.starts_with(&value))),
        Operator::EndsWith => Ok(raw.is_some_and(|r| r.ends_with(&value))),
        Operator::DoesNotContain => Ok(raw.is_some_and(|r| !r.contains(&value))),
        other => Err(FilterError::OperatorMismatch { operator: other, family: FieldType::Text }),
    }
}

fn number_matches(raw: &Value, operator: Operator, value: f64) -> Result<bool, FilterError> {
    let raw = raw.as_number();
    match operator {
        Operator::Equals => Ok(raw.is_some_and(|r| r == value)),
        Operator::GreaterThan => Ok(raw.is_some_and(|r| r > value)),
        Operator::LessThan => Ok(raw.is_some_and(|r| r < value)),
        Operator::GreaterThanOrEqual => Ok(raw.is_some_and(|r| r >= value)),
        Operator::LessThanOrEqual => Ok(raw.is_some_and(|r| r <= value)),
        other => Err(FilterError::OperatorMismatch { operator: other, family: FieldType::Number }),
    }
}

fn date_matches(raw: &Value, operator: Operator, start: &str, end: &str) -> Result<bool, FilterError> {
    match operator {
        Operator::Between => Ok(date_between(raw, start, end).unwrap_or(false)),
        other => Err(FilterError::OperatorMismatch { operator: other, family: FieldType::Date }),
    }
}

/// Whole-day inclusive range: the start bound widens to 00:00:00.000 and the
/// end bound to 23:59:59.999 of their calendar days before comparing.
fn date_between(raw: &Value, start: &str, end: &str) -> Option<bool> {
    let value = raw.as_datetime()?;
    let lower = parse_date(start)?.and_hms_opt(0, 0, 0)?;
    let upper = parse_date(end)?.and_hms_milli_opt(23, 59, 59, 999)?;
    Some(lower <= value && value <= upper)
}

fn amount_matches(raw: &Value, operator: Operator, min: f64, max: f64) -> Result<bool, FilterError> {
    match operator {
        // Plain inclusive numeric range - amounts get no day-boundary
        // widening, unlike the date family.
        Operator::Between => Ok(raw.as_number().is_some_and(|n| min <= n && n <= max)),
        other => Err(FilterError::OperatorMismatch { operator: other, family: FieldType::Amount }),
    }
}

/// Exact string equality against a select option.
fn select_matches(raw: &Value, operator: Operator, value: &str) -> Result<bool, FilterError> {
    let raw = raw.as_text();
    match operator {
        Operator::Is => Ok(raw.is_some_and(|r| r == value)),
        Operator::IsNot => Ok(raw.is_some_and(|r| r != value)),
        other => Err(FilterError::OperatorMismatch { operator: other, family: FieldType::SingleSelect }),
    }
}

/// Set-intersection tests between a sequence-valued field and the chosen
/// options. A non-sequence raw value is this family's absence signal; both
/// operators treat it (and an empty option list) as a non-match.
fn multi_select_matches(raw: &Value, operator: Operator, values: &[String]) -> Result<bool, FilterError> {
    match operator {
        Operator::In | Operator::NotIn => {
            let Value::List(items) = raw else { return Ok(false) };
            if values.is_empty() {
                return Ok(false);
            }
            let overlap = items.iter().filter_map(Value::as_text).any(|item| values.iter().any(|v| *v == item));
            Ok(if operator == Operator::In { overlap } else { !overlap })
        }
        other => Err(FilterError::OperatorMismatch { operator: other, family: FieldType::MultiSelect }),
    }
}

fn boolean_matches(raw: &Value, operator: Operator, value: bool) -> Result<bool, FilterError> {
    match operator {
        Operator::Is => Ok(raw.as_truthy() == value),
        other => Err(FilterError::OperatorMismatch { operator: other, family: FieldType::Boolean }),
    }
}
