//! Spreadsheet decoding boundary.
//!
//! Receives raw file bytes and hands the core already-decoded tabular data.
//! Uploads arrive with unreliable extensions, so the workbook kind is sniffed
//! from the file signature first and the extension is only a fallback.
//! Decode failures never escape as errors: they become per-file or per-sheet
//! failure values the orchestrator turns into log lines.

pub mod sniff;
pub mod workbook;

pub use sniff::{WorkbookKind, sniff_workbook_kind};
pub use workbook::decode_workbook;
