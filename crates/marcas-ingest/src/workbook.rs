//! Workbook decoding into model tables.

use std::fmt::Display;
use std::io::{Cursor, Read, Seek};

use calamine::{Data, Range, Reader, Xls, Xlsx};
use marcas_model::{CellValue, SheetTable, SourceFile, SourceSheet};
use tracing::{debug, info};

/// Decode a workbook's bytes into per-sheet tables.
///
/// The engine follows the sniffed kind; when opening fails the other engine
/// is tried once (files get renamed to the wrong extension in the wild) and
/// an advisory note is recorded. Unknown formats and double open failures
/// become a file-level failure value. Sheet-range failures become per-sheet
/// failure values. The first row of each sheet is taken as the header row.
#[must_use]
pub fn decode_workbook(bytes: &[u8], file_name: &str) -> SourceFile {
    let kind = super::sniff_workbook_kind(bytes, file_name);
    let mut notes = Vec::new();
    let load = open_sheets(bytes, file_name, kind, &mut notes);
    match &load {
        Ok(sheets) => debug!(file = file_name, sheets = sheets.len(), "workbook decoded"),
        Err(reason) => debug!(file = file_name, %reason, "workbook rejected"),
    }
    SourceFile {
        name: file_name.to_string(),
        notes,
        load,
    }
}

fn open_sheets(
    bytes: &[u8],
    file_name: &str,
    kind: super::WorkbookKind,
    notes: &mut Vec<String>,
) -> Result<Vec<SourceSheet>, String> {
    match kind {
        super::WorkbookKind::Xlsx => match Xlsx::new(Cursor::new(bytes)) {
            Ok(mut workbook) => Ok(read_sheets(&mut workbook)),
            Err(_) => match Xls::new(Cursor::new(bytes)) {
                Ok(mut workbook) => {
                    notes.push(misleading_extension_note(file_name, "xls"));
                    Ok(read_sheets(&mut workbook))
                }
                Err(error) => Err(format!("No se pudo abrir {file_name}: {error}")),
            },
        },
        super::WorkbookKind::Xls => match Xls::new(Cursor::new(bytes)) {
            Ok(mut workbook) => Ok(read_sheets(&mut workbook)),
            Err(_) => match Xlsx::new(Cursor::new(bytes)) {
                Ok(mut workbook) => {
                    notes.push(misleading_extension_note(file_name, "xlsx"));
                    Ok(read_sheets(&mut workbook))
                }
                Err(error) => Err(format!("No se pudo abrir {file_name}: {error}")),
            },
        },
        super::WorkbookKind::Unknown => Err(format!("Formato no soportado: {file_name}")),
    }
}

fn misleading_extension_note(file_name: &str, engine: &str) -> String {
    info!(file = file_name, engine, "extensión engañosa");
    format!("[AVISO] {file_name}: se detectó extensión engañosa, se leyó como '{engine}'.")
}

fn read_sheets<RS, R>(workbook: &mut R) -> Vec<SourceSheet>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: Display,
{
    let names = workbook.sheet_names();
    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let table = workbook
            .worksheet_range(&name)
            .map(|range| table_from_range(&range))
            .map_err(|error| error.to_string());
        sheets.push(SourceSheet { name, table });
    }
    sheets
}

fn table_from_range(range: &Range<Data>) -> SheetTable {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return SheetTable::default();
    };
    let headers = header_row.iter().map(header_text).collect();
    let data_rows = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();
    SheetTable {
        headers,
        rows: data_rows,
    }
}

fn header_text(data: &Data) -> String {
    data.to_string().trim().to_string()
}

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Bool(value) => CellValue::Text(value.to_string()),
        Data::DateTime(value) => value
            .as_datetime()
            .map_or(CellValue::Empty, CellValue::DateTime),
        Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::Text(text.clone()),
    }
}
