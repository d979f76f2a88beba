//! Dynamic value model produced by field resolution.
//!
//! Records cross the UI boundary as loosely-typed JSON, so the engine works
//! over a small closed set of runtime value shapes. Absence (a missing field,
//! or JSON `null`) is represented by `Option`, not by a variant - predicates
//! never see a null.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A runtime value resolved from a record field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Numeric form used by the number and amount families.
    ///
    /// Strings must parse fully as a float; NaN never counts as a number, so
    /// comparisons against a failed coercion cannot accidentally match.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => (!n.is_nan()).then_some(*n),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| !n.is_nan()),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::List(_) | Value::Object(_) => None,
        }
    }

    /// Text form used by the text and select families.
    ///
    /// Scalars render the way the display layer prints them; sequences join
    /// on commas; mappings have no text form.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::List(items) => Some(items.iter().filter_map(Value::as_text).collect::<Vec<_>>().join(",")),
            Value::Object(_) => None,
        }
    }

    /// Truthiness used by the boolean family: empty strings and zero are
    /// false, sequences and mappings are always true.
    pub fn as_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::List(_) | Value::Object(_) => true,
        }
    }

    /// Calendar timestamp form used by the date family. Plain dates resolve
    /// to midnight; RFC 3339 timestamps keep their time of day.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Value::String(s) => parse_datetime(s),
            _ => None,
        }
    }

    /// Value at a sub-path within structured data.
    ///
    /// Returns `None` if any step is missing or lands on a non-mapping.
    /// An empty path returns the value unchanged.
    pub fn extract_at_path(&self, path: &[&str]) -> Option<Value> {
        let mut current = self;
        for key in path {
            match current {
                Value::Object(map) => current = map.get(*key)?,
                _ => return None,
            }
        }
        Some(current.clone())
    }

    /// Convert a JSON value into the engine's value model.
    ///
    /// JSON `null` has no engine value - it resolves as absent.
    pub fn from_json(json: &serde_json::Value) -> Option<Value> {
        match json {
            serde_json::Value::Null => None,
            serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
            serde_json::Value::Number(n) => Some(Value::Number(n.as_f64()?)),
            serde_json::Value::String(s) => Some(Value::String(s.clone())),
            serde_json::Value::Array(items) => Some(Value::List(items.iter().filter_map(Value::from_json).collect())),
            serde_json::Value::Object(map) => {
                Some(Value::Object(map.iter().filter_map(|(k, v)| Some((k.clone(), Value::from_json(v)?))).collect()))
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::String(s.to_string()) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::String(s) }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self { Value::Number(n) }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Bool(b) }
}

/// Parse a calendar-date string: `YYYY-MM-DD`, or the date part of a longer
/// timestamp.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    parse_datetime(s).map(|dt| dt.date())
}

pub(crate) fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc())
}
