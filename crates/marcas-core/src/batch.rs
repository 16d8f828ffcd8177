//! Batch orchestration across files and sheets.
//!
//! Files and sheets are processed strictly sequentially in input order.
//! Per-file and per-sheet failures become log lines and the batch continues;
//! only a batch that yields zero records overall is fatal. Log lines keep
//! the product's Spanish phrasing because they ship to users in the output
//! workbook's log sheet.

use marcas_map::map_headers;
use marcas_model::{FieldCatalog, NormalizedRecord, SourceFile, WorkerRow};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::consolidate::consolidate;
use crate::transform::transform_sheet;

/// Fatal batch-level conditions.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Every file and sheet in the run yielded zero records.
    #[error("ninguna fila pudo ser consolidada; revise el log")]
    Empty {
        /// The accumulated log, owed to the caller even on failure.
        logs: Vec<String>,
    },
}

/// Result of a successful batch run.
#[derive(Debug)]
pub struct BatchOutcome {
    /// One consolidated row per worker, in final output order.
    pub rows: Vec<WorkerRow>,
    /// Diagnostic log lines accumulated across the whole run.
    pub logs: Vec<String>,
    /// Total attendance marks, i.e. records before grouping.
    pub total_marks: usize,
}

/// Consolidate all decoded files into one worker-per-row table.
pub fn consolidate_batch(
    files: &[SourceFile],
    catalog: &FieldCatalog,
) -> Result<BatchOutcome, BatchError> {
    let mut logs: Vec<String> = Vec::new();
    let mut records: Vec<NormalizedRecord> = Vec::new();

    for file in files {
        logs.extend(file.notes.iter().cloned());
        let sheets = match &file.load {
            Ok(sheets) => sheets,
            Err(reason) => {
                warn!(file = %file.name, %reason, "archivo descartado");
                logs.push(format!("[ERROR] {reason}"));
                continue;
            }
        };

        let mut file_records = 0usize;
        for sheet in sheets {
            let table = match &sheet.table {
                Ok(table) => table,
                Err(reason) => {
                    warn!(file = %file.name, sheet = %sheet.name, %reason, "hoja descartada");
                    logs.push(format!(
                        "[ERROR] Falló al leer hoja '{}' en {}: {}",
                        sheet.name, file.name, reason
                    ));
                    continue;
                }
            };

            let mapping = map_headers(catalog, &table.headers);
            let sheet_records = transform_sheet(table, &mapping);
            debug!(
                file = %file.name,
                sheet = %sheet.name,
                records = sheet_records.len(),
                "hoja procesada"
            );
            if sheet_records.is_empty() {
                info!(file = %file.name, sheet = %sheet.name, "hoja sin filas válidas");
                logs.push(format!(
                    "[AVISO] Hoja sin filas válidas: {} :: {}",
                    file.name, sheet.name
                ));
            } else {
                file_records += sheet_records.len();
                records.extend(sheet_records);
            }
        }

        if file_records == 0 {
            info!(file = %file.name, "sin datos consolidados");
            logs.push(format!("[AVISO] Sin datos consolidados en: {}", file.name));
        }
    }

    if records.is_empty() {
        return Err(BatchError::Empty { logs });
    }

    let total_marks = records.len();
    let rows = consolidate(records);
    info!(
        files = files.len(),
        workers = rows.len(),
        marks = total_marks,
        advisories = logs.len(),
        "lote consolidado"
    );
    Ok(BatchOutcome {
        rows,
        logs,
        total_marks,
    })
}
