//! Header mapping for attendance sheets.
//!
//! Resolves free-form column headers onto the canonical field set using the
//! synonym catalog. Matching is case-, accent-, whitespace- and
//! punctuation-insensitive: both the actual headers and the catalog synonyms
//! go through the same normalization, so "R.U.T. Trabajador" matches the
//! synonym "rut trabajador".

pub mod headers;
pub mod normalize;

pub use headers::map_headers;
pub use normalize::normalize_text;
