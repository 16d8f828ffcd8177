//! Resolved header mapping for one sheet.

use std::collections::BTreeMap;

use crate::fields::CanonicalField;

/// Mapping from canonical field to the actual column name in one sheet.
///
/// A field is absent when no synonym matched any column; that is not an
/// error, the transformer simply leaves the field empty.
#[derive(Debug, Clone, Default)]
pub struct HeaderMapping {
    columns: BTreeMap<CanonicalField, String>,
}

impl HeaderMapping {
    /// Record the actual column resolved for a canonical field.
    pub fn insert(&mut self, field: CanonicalField, column: String) {
        self.columns.insert(field, column);
    }

    /// The actual column name for a field, if one was resolved.
    #[must_use]
    pub fn get(&self, field: CanonicalField) -> Option<&str> {
        self.columns.get(&field).map(String::as_str)
    }

    /// True when no field resolved to any column.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of resolved fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }
}
