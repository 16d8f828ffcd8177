//! Shared data model: canonical fields, the synonym catalog, decoded
//! tables, and the normalized/consolidated row types.

pub mod fields;
pub mod mapping;
pub mod record;
pub mod table;

pub use fields::{CanonicalField, FieldCatalog};
pub use mapping::HeaderMapping;
pub use record::{NormalizedRecord, OUTPUT_COLUMNS, WorkerRow};
pub use table::{CellValue, SheetTable, SourceFile, SourceSheet};
