use csv::WriterBuilder;
use std::path::Path;

use super::{ExportSink, ExportTable};
use crate::error::Result;

/// Spreadsheet export: title and subtitle lines first, then the header
/// row and the data rows with amounts left as plain numbers.
pub struct CsvSink;

impl ExportSink for CsvSink {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn write(&self, table: &ExportTable, path: &Path) -> Result<()> {
        let mut wtr = WriterBuilder::new().flexible(true).from_path(path)?;

        wtr.write_record([table.title.as_str()])?;
        for line in &table.subtitle {
            wtr.write_record([line.as_str()])?;
        }

        wtr.write_record(&table.headers)?;
        for row in &table.rows {
            wtr.write_record(row.iter().map(|cell| cell.raw()))?;
        }

        wtr.flush()?;
        Ok(())
    }
}
