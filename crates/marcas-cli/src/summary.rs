//! Terminal summary of a completed run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::pipeline::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Consolidado: {}", result.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("RUT"),
        header_cell("Nombre"),
        header_cell("Especialidad"),
        header_cell("Contrato"),
        header_cell("Supervisor"),
        header_cell("RUT empleador"),
        header_cell("Marcas"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 6, CellAlignment::Right);
    let mut total_marks = 0u64;
    for row in &result.rows {
        total_marks += u64::from(row.marcas);
        table.add_row(vec![
            field_cell(row.rut.as_deref()),
            field_cell(row.nombre.as_deref()),
            field_cell(row.especialidad.as_deref()),
            field_cell(row.contrato.as_deref()),
            field_cell(row.supervisor.as_deref()),
            field_cell(row.rut_empleador.as_deref()),
            Cell::new(row.marcas),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(worker_count_label(result.rows.len())),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_marks).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    if !result.logs.is_empty() {
        eprintln!("Avisos:");
        for line in &result.logs {
            eprintln!("- {line}");
        }
    }
}

fn worker_count_label(workers: usize) -> String {
    if workers == 1 {
        "1 trabajador".to_string()
    } else {
        format!("{workers} trabajadores")
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn field_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
