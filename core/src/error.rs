use crate::condition::{FieldType, Operator};
use thiserror::Error;

/// Faults surfaced by the strict evaluation path.
///
/// Both variants describe wiring mistakes between the UI and the engine, not
/// bad record data. The default entry points collapse them to a non-match -
/// see [`crate::selection::filter`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    #[error("operator {operator} is not valid for {family} fields")]
    OperatorMismatch { operator: Operator, family: FieldType },
    #[error("property not found: {0}")]
    PropertyNotFound(String),
}
