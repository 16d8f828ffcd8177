//! Per-sheet transformation of decoded rows into normalized records.

use marcas_model::{CanonicalField, CellValue, HeaderMapping, NormalizedRecord, SheetTable};
use tracing::debug;

use crate::rut::{group_key, normalize_rut};

/// Transform one decoded sheet into normalized records, one per usable row.
///
/// Entirely blank rows are dropped before any mapping is attempted. Rows
/// that carry neither an identifier nor a name cannot be grouped and are
/// discarded. An empty sheet yields an empty record set; the caller decides
/// whether that deserves a log line.
#[must_use]
pub fn transform_sheet(table: &SheetTable, mapping: &HeaderMapping) -> Vec<NormalizedRecord> {
    if table.rows.is_empty() {
        return Vec::new();
    }

    let column = |field| {
        mapping
            .get(field)
            .and_then(|name| table.column_index(name))
    };
    let rut_col = column(CanonicalField::Rut);
    let dv_col = column(CanonicalField::Dv);
    let nombre_col = column(CanonicalField::Nombre);
    let especialidad_col = column(CanonicalField::Especialidad);
    let contrato_col = column(CanonicalField::Contrato);
    let supervisor_col = column(CanonicalField::Supervisor);
    let rut_empleador_col = column(CanonicalField::RutEmpleador);

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in &table.rows {
        if row.iter().all(CellValue::is_blank) {
            continue;
        }

        let raw_rut = cell_text(row, rut_col);
        let raw_dv = cell_text(row, dv_col);
        let rut = normalize_rut(raw_rut.as_deref(), raw_dv.as_deref());
        let nombre = cell_text(row, nombre_col);

        let Some(key) = group_key(rut.as_deref(), nombre.as_deref()) else {
            dropped += 1;
            continue;
        };

        records.push(NormalizedRecord {
            rut,
            nombre,
            especialidad: cell_text(row, especialidad_col),
            contrato: cell_text(row, contrato_col),
            supervisor: cell_text(row, supervisor_col),
            rut_empleador: normalize_rut(cell_text(row, rut_empleador_col).as_deref(), None),
            group_key: key,
        });
    }

    debug!(
        rows = table.rows.len(),
        records = records.len(),
        dropped,
        mapped_fields = mapping.len(),
        "hoja transformada"
    );
    records
}

fn cell_text(row: &[CellValue], index: Option<usize>) -> Option<String> {
    row.get(index?).and_then(CellValue::to_text)
}
