//! End-to-end run: read inputs, decode, consolidate, write output.
//!
//! The stages run in order:
//! 1. **Catalog**: built-in header synonyms, or a JSON override
//! 2. **Ingest**: read each input file and decode its sheets
//! 3. **Consolidate**: map headers, normalize, group into workers
//! 4. **Output**: write the consolidated workbook with its log sheet
//!
//! Per-file problems become log lines and the run continues; the run only
//! fails when no input produced a single record or the output cannot be
//! written.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use marcas_core::{BatchError, consolidate_batch};
use marcas_ingest::decode_workbook;
use marcas_model::{FieldCatalog, SourceFile, WorkerRow};
use marcas_report::write_consolidated_xlsx;

use crate::cli::Cli;

/// Result of a completed run, ready for the terminal summary.
#[derive(Debug)]
pub struct RunResult {
    /// Where the consolidated workbook was written.
    pub output: PathBuf,
    /// One row per worker, in output order.
    pub rows: Vec<WorkerRow>,
    /// Diagnostic log lines, as written to the workbook's log sheet.
    pub logs: Vec<String>,
    /// Total attendance marks across all workers.
    pub total_marks: usize,
}

/// Execute a full consolidation run from parsed CLI arguments.
pub fn run(cli: &Cli) -> Result<RunResult> {
    let catalog = load_catalog(cli.synonyms.as_deref())?;

    let mut files = Vec::with_capacity(cli.inputs.len());
    for path in &cli.inputs {
        files.push(ingest_file(path));
    }

    let span = info_span!("consolidar", files = files.len());
    let outcome = match span.in_scope(|| consolidate_batch(&files, &catalog)) {
        Ok(outcome) => outcome,
        Err(BatchError::Empty { logs }) => {
            for line in &logs {
                eprintln!("{line}");
            }
            bail!("ninguna fila pudo ser consolidada; revise el log");
        }
    };

    write_consolidated_xlsx(&cli.output, &outcome.rows, &outcome.logs).with_context(|| {
        format!(
            "no se pudo escribir el consolidado en {}",
            cli.output.display()
        )
    })?;

    Ok(RunResult {
        output: cli.output.clone(),
        rows: outcome.rows,
        logs: outcome.logs,
        total_marks: outcome.total_marks,
    })
}

/// Load the header synonym catalog, built-in or from a JSON override.
fn load_catalog(path: Option<&Path>) -> Result<FieldCatalog> {
    let Some(path) = path else {
        return Ok(FieldCatalog::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("no se pudo leer el catálogo {}", path.display()))?;
    let catalog: FieldCatalog = serde_json::from_str(&text)
        .with_context(|| format!("catálogo de sinónimos inválido: {}", path.display()))?;
    info!(path = %path.display(), "catálogo de sinónimos cargado");
    Ok(catalog)
}

/// Read one input file from disk and decode its workbook.
///
/// An unreadable file is not fatal: it becomes a file-level failure that the
/// batch turns into a log line.
fn ingest_file(path: &Path) -> SourceFile {
    let name = file_name(path);
    match fs::read(path) {
        Ok(bytes) => {
            debug!(file = %name, bytes = bytes.len(), "archivo leído");
            decode_workbook(&bytes, &name)
        }
        Err(error) => SourceFile {
            name: name.clone(),
            notes: Vec::new(),
            load: Err(format!("No se pudo abrir {name}: {error}")),
        },
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| {
            name.to_string_lossy().into_owned()
        })
}
