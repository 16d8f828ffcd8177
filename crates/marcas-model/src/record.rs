//! Normalized attendance records and consolidated worker rows.

use serde::Serialize;

/// Column labels of the published schema, in output order.
pub const OUTPUT_COLUMNS: [&str; 7] = [
    "rut",
    "nombre",
    "especialidad",
    "contrato",
    "supervisor",
    "rut_empleador",
    "marcas",
];

/// One normalized row from one sheet; each record counts as one mark.
///
/// Invariant: `rut` and `nombre` are never both absent (such rows are
/// discarded before a record is built), and `group_key` is always derivable
/// from whichever of the two is present.
#[derive(Debug, Clone)]
pub struct NormalizedRecord {
    /// Canonical identifier, `body-check` or body-only.
    pub rut: Option<String>,
    pub nombre: Option<String>,
    pub especialidad: Option<String>,
    pub contrato: Option<String>,
    pub supervisor: Option<String>,
    /// Canonical employer identifier (no separate check column exists).
    pub rut_empleador: Option<String>,
    /// Digit body of the identifier, or the normalized name.
    pub group_key: String,
}

/// One consolidated output row per distinct worker.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkerRow {
    pub rut: Option<String>,
    pub nombre: Option<String>,
    pub especialidad: Option<String>,
    pub contrato: Option<String>,
    pub supervisor: Option<String>,
    pub rut_empleador: Option<String>,
    /// Number of attendance marks merged into this row.
    pub marcas: u32,
}
