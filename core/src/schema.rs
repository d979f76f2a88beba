//! Read-only field catalog supplied by the configuration layer.
//!
//! The catalog tells the UI which fields are filterable, which operators
//! each one offers, and where nested fields actually live on the record
//! (`city` -> `address.city`). The engine only consumes the path mapping;
//! operator gating happens before a condition is ever constructed.

use crate::condition::{FieldType, Operator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from condition field key to the dotted path used for resolution.
/// Keys without an entry resolve by the field key itself.
pub type FieldPathMap = BTreeMap<String, String>;

/// One filterable attribute as the configuration layer describes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub key: String,
    pub label: String,
    pub field_type: FieldType,
    pub operators: Vec<Operator>,
    /// Choices for select-typed fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Dotted resolution path when it differs from `key` (nested fields).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// The full set of filterable fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    fields: Vec<FieldSpec>,
}

impl Catalog {
    pub fn new(fields: Vec<FieldSpec>) -> Self { Self { fields } }

    pub fn fields(&self) -> &[FieldSpec] { &self.fields }

    pub fn get(&self, key: &str) -> Option<&FieldSpec> { self.fields.iter().find(|f| f.key == key) }

    /// Operators the UI may offer for a field. Unknown keys have none.
    pub fn allowed_operators(&self, key: &str) -> &[Operator] {
        self.get(key).map(|f| f.operators.as_slice()).unwrap_or(&[])
    }

    /// Resolution path for a field key - the explicit `path` when present,
    /// the key itself otherwise.
    pub fn path_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).and_then(|f| f.path.as_deref()).unwrap_or(key)
    }

    /// Field-to-path mapping in the form the filter executor consumes.
    pub fn field_path_map(&self) -> FieldPathMap {
        self.fields.iter().filter_map(|f| f.path.as_ref().map(|p| (f.key.clone(), p.clone()))).collect()
    }
}
