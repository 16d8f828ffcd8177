//! Workbook format detection by file signature.

/// Detected workbook container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookKind {
    /// Office Open XML (zip container).
    Xlsx,
    /// Legacy binary Excel (OLE2 compound file).
    Xls,
    Unknown,
}

/// OLE2 compound file signature.
const OLE2_MAGIC: [u8; 4] = [0xD0, 0xCF, 0x11, 0xE0];

/// Guess the workbook kind from the leading bytes, falling back to the file
/// extension when the signature is inconclusive.
#[must_use]
pub fn sniff_workbook_kind(bytes: &[u8], file_name: &str) -> WorkbookKind {
    if bytes.starts_with(b"PK") {
        return WorkbookKind::Xlsx;
    }
    if bytes.starts_with(&OLE2_MAGIC) {
        return WorkbookKind::Xls;
    }
    match extension(file_name).as_deref() {
        Some("xlsx") => WorkbookKind::Xlsx,
        Some("xls") => WorkbookKind::Xls,
        _ => WorkbookKind::Unknown,
    }
}

fn extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}
