//! Tabular export. Views build an [`ExportTable`]; a sink turns it into a
//! file. Sinks never report back into the views beyond the returned
//! `Result`.

mod csv;
mod json;
mod tables;
mod typst;

pub use self::csv::CsvSink;
pub use self::json::JsonSink;
pub use self::tables::{
    balance_sheet_table, cash_flow_table, invoice_table, ledger_table, profit_loss_table,
    record_table, RecordKind,
};
pub use self::typst::PdfSink;

use rust_decimal::Decimal;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{BooksError, Result};
use crate::fmt::money;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Amount(Decimal),
}

impl Cell {
    /// How the cell reads on a printed page
    pub fn display(&self, currency_symbol: &str) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Amount(value) => money(*value, currency_symbol),
        }
    }

    /// How the cell reads in a spreadsheet: amounts stay plain numbers
    pub fn raw(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Amount(value) => value.normalize().to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<Decimal> for Cell {
    fn from(value: Decimal) -> Self {
        Cell::Amount(value)
    }
}

/// A titled, fixed-width table ready to hand to a sink
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportTable {
    pub title: String,
    pub subtitle: Vec<String>,
    pub file_stem: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ExportTable {
    pub fn new(title: &str, file_stem: &str, headers: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            subtitle: Vec::new(),
            file_stem: file_stem.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_subtitle(mut self, line: impl Into<String>) -> Self {
        self.subtitle.push(line.into());
        self
    }

    /// Append a row; it must have exactly one cell per header
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<()> {
        if row.len() != self.headers.len() {
            return Err(BooksError::ColumnMismatch {
                expected: self.headers.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.file_stem, extension)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Pdf,
    Csv,
    Json,
}

/// A document writer that accepts an [`ExportTable`]
pub trait ExportSink {
    fn extension(&self) -> &'static str;
    fn write(&self, table: &ExportTable, path: &Path) -> Result<()>;
}

impl ExportFormat {
    pub fn sink(self, currency_symbol: &str) -> Box<dyn ExportSink> {
        match self {
            ExportFormat::Pdf => Box::new(PdfSink::new(currency_symbol)),
            ExportFormat::Csv => Box::new(CsvSink),
            ExportFormat::Json => Box::new(JsonSink),
        }
    }
}

/// True when `stem` can name a file inside the output directory
pub fn is_safe_file_stem(stem: &str) -> bool {
    let stem = stem.trim();
    !stem.is_empty() && stem != "." && stem != ".." && !stem.contains(&['/', '\\'][..])
}

/// Write `table` into `dir` under its suggested file name
pub fn export_to_dir(table: &ExportTable, sink: &dyn ExportSink, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(table.file_name(sink.extension()));
    sink.write(table, &path)?;
    info!(path = %path.display(), rows = table.rows.len(), "exported table");
    Ok(path)
}
