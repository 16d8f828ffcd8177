//! Synonym-driven resolution of actual columns to canonical fields.

use std::collections::HashMap;

use marcas_model::{FieldCatalog, HeaderMapping};

use crate::normalize::normalize_text;

/// Resolve each canonical field to the best-matching actual column.
///
/// The lookup is keyed by normalized header; when two actual columns
/// normalize identically the later one wins (last-write-wins, not an error).
/// Per field, synonyms are tried in catalog order and the first hit is
/// taken; synonym order is a priority order, not exhaustive. Fields with no
/// matching column are simply absent from the mapping.
#[must_use]
pub fn map_headers(catalog: &FieldCatalog, columns: &[String]) -> HeaderMapping {
    let mut lookup: HashMap<String, &str> = HashMap::with_capacity(columns.len());
    for column in columns {
        lookup.insert(normalize_text(column), column.as_str());
    }

    let mut mapping = HeaderMapping::default();
    for (field, synonyms) in catalog.iter() {
        for synonym in synonyms {
            if let Some(actual) = lookup.get(&normalize_text(synonym)) {
                mapping.insert(field, (*actual).to_string());
                break;
            }
        }
    }
    mapping
}
