//! Structural validation of condition payloads, independent of any record.
//!
//! The UI gates filtering behind this check: a condition that fails here is
//! flagged inline and must not be handed to [`filter_records`]. The engine
//! makes no promise about invalid payloads beyond failing closed.
//!
//! [`filter_records`]: crate::filter_records

use crate::condition::{FilterCondition, FilterValue};
use crate::value::parse_date;

/// Whether a condition's value payload is well-formed for its field type.
///
/// Total: malformed inputs yield `false`, never a panic. Payloads whose
/// shape contradicts their declared field type are already unrepresentable -
/// the serde boundary rejects them before a condition exists.
pub fn is_valid_condition(condition: &FilterCondition) -> bool {
    match &condition.value {
        FilterValue::Text { value } => !value.trim().is_empty(),
        FilterValue::Number { value } => !value.is_nan(),
        FilterValue::Date { start_date, end_date } => match (parse_date(start_date), parse_date(end_date)) {
            (Some(start), Some(end)) => start <= end,
            _ => false,
        },
        FilterValue::Amount { min_amount, max_amount } => {
            !min_amount.is_nan() && !max_amount.is_nan() && min_amount <= max_amount
        }
        FilterValue::SingleSelect { value } => !value.is_empty(),
        FilterValue::MultiSelect { values } => !values.is_empty(),
        FilterValue::Boolean { .. } => true,
    }
}
