//! Output workbook writing.
//!
//! The consolidated table lands in a `Consolidado` sheet with the published
//! schema columns in their exact order; when the run produced log lines they
//! ship alongside the data in a `Log` sheet so users see why a row is
//! missing or a file was skipped.

use std::path::Path;

use marcas_model::{OUTPUT_COLUMNS, WorkerRow};
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use thiserror::Error;
use tracing::info;

/// Errors from writing the output workbook.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no se pudo escribir el consolidado: {0}")]
    Workbook(#[from] XlsxError),
}

/// Build the output workbook in memory.
pub fn build_workbook(rows: &[WorkerRow], logs: &[String]) -> Result<Workbook, ReportError> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Consolidado")?;
    write_consolidated_sheet(sheet, rows)?;

    if !logs.is_empty() {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Log")?;
        sheet.write_string(0, 0, "log")?;
        for (index, line) in logs.iter().enumerate() {
            sheet.write_string(index as u32 + 1, 0, line)?;
        }
    }

    Ok(workbook)
}

/// Write the consolidated table (and log, when present) to an xlsx file.
pub fn write_consolidated_xlsx(
    path: &Path,
    rows: &[WorkerRow],
    logs: &[String],
) -> Result<(), ReportError> {
    let mut workbook = build_workbook(rows, logs)?;
    workbook.save(path)?;
    info!(
        path = %path.display(),
        workers = rows.len(),
        log_lines = logs.len(),
        "consolidado escrito"
    );
    Ok(())
}

fn write_consolidated_sheet(sheet: &mut Worksheet, rows: &[WorkerRow]) -> Result<(), XlsxError> {
    for (column, label) in OUTPUT_COLUMNS.iter().enumerate() {
        sheet.write_string(0, column as u16, *label)?;
    }
    for (index, row) in rows.iter().enumerate() {
        let excel_row = index as u32 + 1;
        let mut column = 0u16;
        for value in [
            row.rut.as_deref(),
            row.nombre.as_deref(),
            row.especialidad.as_deref(),
            row.contrato.as_deref(),
            row.supervisor.as_deref(),
            row.rut_empleador.as_deref(),
        ] {
            if let Some(value) = value {
                sheet.write_string(excel_row, column, value)?;
            }
            column += 1;
        }
        sheet.write_number(excel_row, column, f64::from(row.marcas))?;
    }
    Ok(())
}
