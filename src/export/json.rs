use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use super::{ExportSink, ExportTable};
use crate::error::Result;

/// Rows as objects keyed by column header
pub struct JsonSink;

impl JsonSink {
    pub fn to_value(table: &ExportTable) -> Value {
        let rows: Vec<Value> = table
            .rows
            .iter()
            .map(|row| {
                let object: Map<String, Value> = table
                    .headers
                    .iter()
                    .cloned()
                    .zip(row.iter().map(|cell| Value::String(cell.raw())))
                    .collect();
                Value::Object(object)
            })
            .collect();

        serde_json::json!({
            "title": table.title,
            "subtitle": table.subtitle,
            "columns": table.headers,
            "rows": rows,
        })
    }
}

impl ExportSink for JsonSink {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn write(&self, table: &ExportTable, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(&Self::to_value(table))?;
        fs::write(path, content)?;
        Ok(())
    }
}
