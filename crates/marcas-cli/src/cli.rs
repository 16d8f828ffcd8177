//! CLI argument definitions for the attendance consolidator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "marcas",
    version,
    about = "Consolida planillas de asistencia en un único archivo xlsx",
    long_about = "Lee planillas de asistencia en formato xlsx o xls, reconoce las\n\
                  columnas por sus sinónimos, normaliza los RUT y agrupa las marcas\n\
                  de cada trabajador en una tabla consolidada."
)]
pub struct Cli {
    /// Input spreadsheets (.xlsx or .xls), processed in the given order.
    #[arg(value_name = "PLANILLA", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Path of the consolidated output workbook.
    #[arg(
        long = "output",
        short = 'o',
        value_name = "PATH",
        default_value = "consolidado_asistencia.xlsx"
    )]
    pub output: PathBuf,

    /// JSON file overriding the built-in header synonym catalog.
    #[arg(long = "synonyms", value_name = "PATH")]
    pub synonyms: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
