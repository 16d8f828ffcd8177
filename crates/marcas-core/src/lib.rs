//! Core consolidation pipeline.
//!
//! Leaf to root: [`rut`] normalizes national identifiers, [`transform`]
//! turns one decoded sheet into normalized records, [`consolidate`] groups
//! records into one row per worker, and [`batch`] sequences the whole run
//! across files and sheets while collecting the diagnostic log.
//!
//! Everything here is pure and I/O-free; decoding and writing spreadsheets
//! live in their own crates.

pub mod batch;
pub mod consolidate;
pub mod rut;
pub mod transform;

pub use batch::{BatchError, BatchOutcome, consolidate_batch};
pub use consolidate::consolidate;
pub use rut::{group_key, normalize_rut, rut_body};
pub use transform::transform_sheet;
