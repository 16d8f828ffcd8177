use marcas_core::{BatchError, consolidate_batch};
use marcas_model::{CellValue, FieldCatalog, SheetTable, SourceFile, SourceSheet};

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn sheet(name: &str, headers: &[&str], rows: Vec<Vec<CellValue>>) -> SourceSheet {
    SourceSheet {
        name: name.to_string(),
        table: Ok(SheetTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows,
        }),
    }
}

fn file(name: &str, sheets: Vec<SourceSheet>) -> SourceFile {
    SourceFile {
        name: name.to_string(),
        notes: Vec::new(),
        load: Ok(sheets),
    }
}

#[test]
fn merges_the_same_worker_across_sheets() {
    // Sheet one knows worker A by rut (and name); sheet two knows the same
    // worker by name only, but carries a supervisor the first sheet lacked.
    let files = vec![
        file(
            "enero.xlsx",
            vec![sheet(
                "Semana 1",
                &["RUT", "Nombre"],
                vec![vec![text("12.345.678-9"), text("José Pérez")]],
            )],
        ),
        file(
            "febrero.xlsx",
            vec![sheet(
                "Asistencia",
                &["Trabajador", "Jefe Directo"],
                vec![vec![text("JOSE PEREZ"), text("M. Silva")]],
            )],
        ),
    ];

    let outcome = consolidate_batch(&files, &FieldCatalog::default()).expect("batch succeeds");
    assert_eq!(outcome.total_marks, 2);
    assert_eq!(outcome.rows.len(), 1);
    let row = &outcome.rows[0];
    assert_eq!(row.marcas, 2);
    assert_eq!(row.rut.as_deref(), Some("12345678-9"));
    assert_eq!(row.supervisor.as_deref(), Some("M. Silva"));
}

#[test]
fn name_spelling_variants_share_one_row() {
    let files = vec![file(
        "planilla.xlsx",
        vec![sheet(
            "Hoja1",
            &["Nombre"],
            vec![vec![text("JOSÉ PÉREZ")], vec![text("jose perez")]],
        )],
    )];

    let outcome = consolidate_batch(&files, &FieldCatalog::default()).expect("batch succeeds");
    assert_eq!(outcome.rows.len(), 1);
    assert_eq!(outcome.rows[0].marcas, 2);
}

#[test]
fn broken_sheet_logs_and_the_batch_continues() {
    let files = vec![file(
        "mixto.xlsx",
        vec![
            SourceSheet {
                name: "Corrupta".to_string(),
                table: Err("rango ilegible".to_string()),
            },
            sheet(
                "Buena",
                &["rut", "nombre"],
                vec![vec![text("1-9"), text("Ana")]],
            ),
        ],
    )];

    let outcome = consolidate_batch(&files, &FieldCatalog::default()).expect("batch succeeds");
    assert_eq!(outcome.rows.len(), 1);
    assert!(
        outcome
            .logs
            .iter()
            .any(|line| line.starts_with("[ERROR]") && line.contains("Corrupta"))
    );
}

#[test]
fn unsupported_file_logs_and_the_batch_continues() {
    let files = vec![
        SourceFile {
            name: "notas.txt".to_string(),
            notes: Vec::new(),
            load: Err("formato no soportado: notas.txt".to_string()),
        },
        file(
            "ok.xlsx",
            vec![sheet(
                "Hoja1",
                &["rut", "nombre"],
                vec![vec![text("1-9"), text("Ana")]],
            )],
        ),
    ];

    let outcome = consolidate_batch(&files, &FieldCatalog::default()).expect("batch succeeds");
    assert_eq!(outcome.rows.len(), 1);
    assert!(
        outcome
            .logs
            .iter()
            .any(|line| line.contains("formato no soportado"))
    );
}

#[test]
fn empty_sheet_is_an_advisory_not_an_error() {
    let files = vec![file(
        "vacio.xlsx",
        vec![
            sheet("Vacía", &["rut", "nombre"], Vec::new()),
            sheet(
                "Datos",
                &["rut", "nombre"],
                vec![vec![text("1-9"), text("Ana")]],
            ),
        ],
    )];

    let outcome = consolidate_batch(&files, &FieldCatalog::default()).expect("batch succeeds");
    assert!(
        outcome
            .logs
            .iter()
            .any(|line| line.contains("[AVISO] Hoja sin filas válidas") && line.contains("Vacía"))
    );
    assert_eq!(outcome.rows.len(), 1);
}

#[test]
fn batch_with_zero_usable_rows_is_fatal_with_logs() {
    let files = vec![file(
        "vacio.xlsx",
        vec![sheet("Hoja1", &["rut", "nombre"], Vec::new())],
    )];

    match consolidate_batch(&files, &FieldCatalog::default()) {
        Err(BatchError::Empty { logs }) => {
            assert!(!logs.is_empty());
        }
        Ok(_) => panic!("expected the batch-empty condition"),
    }
}
