use calamine::{Data, Reader, Xlsx, open_workbook};
use marcas_model::WorkerRow;
use marcas_report::write_consolidated_xlsx;

fn worker(rut: Option<&str>, nombre: &str, marcas: u32) -> WorkerRow {
    WorkerRow {
        rut: rut.map(str::to_string),
        nombre: Some(nombre.to_string()),
        marcas,
        ..WorkerRow::default()
    }
}

#[test]
fn writes_consolidated_and_log_sheets() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("consolidado.xlsx");
    let rows = vec![
        worker(Some("1-9"), "Ana Rojas", 3),
        worker(None, "Bruno Soto", 1),
    ];
    let logs = vec!["[AVISO] Hoja sin filas válidas: a.xlsx :: Hoja2".to_string()];

    write_consolidated_xlsx(&path, &rows, &logs).expect("write workbook");

    let mut workbook: Xlsx<_> = open_workbook(&path).expect("reopen workbook");
    assert_eq!(workbook.sheet_names(), vec!["Consolidado", "Log"]);

    let range = workbook
        .worksheet_range("Consolidado")
        .expect("read consolidated sheet");
    let rows_read: Vec<_> = range.rows().collect();
    assert_eq!(rows_read.len(), 3);
    assert_eq!(rows_read[0][0], Data::String("rut".to_string()));
    assert_eq!(rows_read[0][6], Data::String("marcas".to_string()));
    assert_eq!(rows_read[1][0], Data::String("1-9".to_string()));
    assert_eq!(rows_read[1][1], Data::String("Ana Rojas".to_string()));
    assert_eq!(rows_read[1][6], Data::Float(3.0));
    // Missing rut leaves the cell empty.
    assert_eq!(rows_read[2][0], Data::Empty);

    let log_range = workbook.worksheet_range("Log").expect("read log sheet");
    let log_rows: Vec<_> = log_range.rows().collect();
    assert_eq!(log_rows[0][0], Data::String("log".to_string()));
    assert!(log_rows[1][0].to_string().contains("Hoja sin filas válidas"));
}

#[test]
fn log_sheet_is_omitted_when_there_are_no_logs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("consolidado.xlsx");

    write_consolidated_xlsx(&path, &[worker(Some("1-9"), "Ana", 1)], &[])
        .expect("write workbook");

    let workbook: Xlsx<_> = open_workbook(&path).expect("reopen workbook");
    assert_eq!(workbook.sheet_names(), vec!["Consolidado"]);
}
