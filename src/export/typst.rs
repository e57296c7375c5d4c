use serde::Serialize;
use std::path::Path;
use std::process::Command;

use super::{ExportSink, ExportTable};
use crate::error::{BooksError, Result};

/// Embedded Typst template for any exported table.
/// Uses a placeholder that gets replaced with the actual JSON file path
const TABLE_TEMPLATE: &str = r##"// Table export template
// Data is loaded from JSON file

#let data = json("DATA_JSON_PATH")

#set page(
  paper: "us-letter",
  margin: (top: 1in, bottom: 1in, left: 0.75in, right: 0.75in),
)

#set text(font: "Helvetica", size: 10pt)

#text(size: 18pt, weight: "bold")[#data.title]
#v(0.3em)
#for line in data.subtitle [
  #text(fill: gray)[#line] \
]

#v(1em)
#line(length: 100%, stroke: 0.5pt + gray)
#v(1em)

#table(
  columns: data.headers.len(),
  align: (x, y) => if data.numeric.at(x) { right } else { left },
  stroke: (x, y) => if y == 0 { (bottom: 1pt + black) } else if y > 0 { (bottom: 0.5pt + gray) },
  inset: 8pt,
  fill: (x, y) => if y == 0 { luma(240) } else { none },

  // Header
  ..data.headers.map(h => [*#h*]),

  // Rows
  ..data.rows.flatten(),
)
"##;

/// What the template sees: every cell already formatted for print
#[derive(Serialize)]
struct PdfData<'a> {
    title: &'a str,
    subtitle: &'a [String],
    headers: &'a [String],
    numeric: Vec<bool>,
    rows: Vec<Vec<String>>,
}

/// PDF export through the Typst CLI
pub struct PdfSink {
    currency_symbol: String,
}

impl PdfSink {
    pub fn new(currency_symbol: &str) -> Self {
        Self {
            currency_symbol: currency_symbol.to_string(),
        }
    }

    fn data<'a>(&self, table: &'a ExportTable) -> PdfData<'a> {
        // a column is right-aligned when any of its cells is an amount
        let numeric = (0..table.headers.len())
            .map(|col| {
                table
                    .rows
                    .iter()
                    .any(|row| matches!(row.get(col), Some(super::Cell::Amount(_))))
            })
            .collect();

        PdfData {
            title: &table.title,
            subtitle: &table.subtitle,
            headers: &table.headers,
            numeric,
            rows: table
                .rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| cell.display(&self.currency_symbol))
                        .collect()
                })
                .collect(),
        }
    }
}

impl ExportSink for PdfSink {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn write(&self, table: &ExportTable, path: &Path) -> Result<()> {
        // Check if typst is available
        if Command::new("typst").arg("--version").output().is_err() {
            return Err(BooksError::TypstNotFound);
        }

        let temp_dir = std::env::temp_dir().join("books-export");
        std::fs::create_dir_all(&temp_dir)?;

        let json_data = serde_json::to_string(&self.data(table))
            .map_err(|e| BooksError::PdfGeneration(e.to_string()))?;
        let json_path = temp_dir.join(format!("{}.json", table.file_stem));
        std::fs::write(&json_path, &json_data)?;

        let template_content =
            TABLE_TEMPLATE.replace("DATA_JSON_PATH", &format!("{}.json", table.file_stem));
        let template_path = temp_dir.join(format!("{}.typ", table.file_stem));
        std::fs::write(&template_path, &template_content)?;

        let output = Command::new("typst")
            .arg("compile")
            .arg("--root")
            .arg(&temp_dir)
            .arg(&template_path)
            .arg(path)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BooksError::PdfGeneration(stderr.to_string()));
        }

        // Clean up temp files
        let _ = std::fs::remove_file(&template_path);
        let _ = std::fs::remove_file(&json_path);

        Ok(())
    }
}
