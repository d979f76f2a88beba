//! Filter records based on a set of typed conditions. This is the scan path
//! under the table UI: every filter application walks the full collection
//! once and keeps the records all active conditions agree on.

use crate::condition::FilterCondition;
use crate::error::FilterError;
use crate::schema::FieldPathMap;
use crate::selection::predicate;
use crate::value::Value;
use tracing::debug;

/// Trait for records that can be filtered by condition evaluation.
///
/// Returns the engine's dynamic values so predicates can apply the
/// type-directed coercions.
pub trait Filterable {
    fn value(&self, property: &str) -> Option<Value>;
}

/// JSON objects are the shape records arrive in from the data source.
/// JSON `null` resolves as absent.
impl Filterable for serde_json::Value {
    fn value(&self, property: &str) -> Option<Value> { self.get(property).and_then(Value::from_json) }
}

/// Resolve a dot-delimited field path against a record.
///
/// The first segment is looked up through [`Filterable::value`]; remaining
/// segments step into nested mappings. Absent at any step resolves to `None`
/// rather than an error.
pub fn resolve_path<R: Filterable + ?Sized>(record: &R, path: &str) -> Option<Value> {
    let mut segments = path.split('.');
    let head = segments.next()?;
    let root = record.value(head)?;
    let rest: Vec<&str> = segments.collect();
    if rest.is_empty() {
        Some(root)
    } else {
        root.extract_at_path(&rest)
    }
}

/// Strict single-condition evaluation: wiring faults (missing property,
/// operator outside the payload's family) surface as errors instead of a
/// silent non-match. Coercion failures still evaluate to `Ok(false)` - they
/// are data-shaped, not wiring-shaped.
///
/// `path` overrides the resolution path; `None` resolves by the condition's
/// field key.
pub fn check_condition<R: Filterable + ?Sized>(
    record: &R,
    condition: &FilterCondition,
    path: Option<&str>,
) -> Result<bool, FilterError> {
    let path = path.unwrap_or(&condition.field);
    let value = resolve_path(record, path).ok_or_else(|| FilterError::PropertyNotFound(path.to_string()))?;
    predicate::matches(&value, condition.operator, &condition.value)
}

/// Lenient single-condition evaluation - the engine's default contract:
/// every fault degrades to a non-match.
pub fn evaluate_condition<R: Filterable + ?Sized>(record: &R, condition: &FilterCondition, path: Option<&str>) -> bool {
    matches!(check_condition(record, condition, path), Ok(true))
}

/// Apply a condition set to a record collection with AND-combination.
///
/// An empty condition set is the identity. Matching records keep their input
/// order; each record is tested against all conditions before the next one
/// is visited.
pub fn filter_records<R, I>(records: I, conditions: &[FilterCondition], paths: &FieldPathMap) -> Vec<R>
where
    R: Filterable,
    I: IntoIterator<Item = R>,
{
    if conditions.is_empty() {
        return records.into_iter().collect();
    }
    let matched: Vec<R> = records
        .into_iter()
        .filter(|record| {
            conditions.iter().all(|condition| {
                let path = paths.get(&condition.field).map(String::as_str);
                evaluate_condition(record, condition, path)
            })
        })
        .collect();
    debug!(conditions = conditions.len(), matched = matched.len(), "filter pass");
    matched
}

/// Per-record outcome of a strict filter pass.
#[derive(Debug, PartialEq)]
pub enum FilterResult<R> {
    Pass(R),
    Skip(R),
    Error(R, FilterError),
}

/// Iterator adapter applying a condition set record by record, reporting
/// wiring faults instead of silently skipping.
pub struct FilterIterator<I> {
    iter: I,
    conditions: Vec<FilterCondition>,
    paths: FieldPathMap,
}

impl<I, R> FilterIterator<I>
where
    I: Iterator<Item = R>,
    R: Filterable,
{
    pub fn new(iter: I, conditions: Vec<FilterCondition>, paths: FieldPathMap) -> Self { Self { iter, conditions, paths } }

    fn check(&self, record: &R) -> Result<bool, FilterError> {
        for condition in &self.conditions {
            let path = self.paths.get(&condition.field).map(String::as_str);
            if !check_condition(record, condition, path)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<I, R> Iterator for FilterIterator<I>
where
    I: Iterator<Item = R>,
    R: Filterable,
{
    type Item = FilterResult<R>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|record| match self.check(&record) {
            Ok(true) => FilterResult::Pass(record),
            Ok(false) => FilterResult::Skip(record),
            Err(e) => FilterResult::Error(record, e),
        })
    }
}
