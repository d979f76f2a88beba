pub mod condition;
pub mod error;
pub mod schema;
pub mod selection;
pub mod validation;
pub mod value;

pub use condition::{ConditionId, FieldType, FilterCondition, FilterValue, Operator};
pub use error::FilterError;
pub use schema::{Catalog, FieldPathMap, FieldSpec};
pub use selection::filter::{
    check_condition, evaluate_condition, filter_records, resolve_path, FilterIterator, FilterResult, Filterable,
};
pub use validation::is_valid_condition;
pub use value::Value;
