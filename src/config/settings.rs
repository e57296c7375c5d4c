use serde::{Deserialize, Serialize};

use crate::error::{BooksError, FieldError, Result};
use crate::listing::DEFAULT_PAGE_SIZE;

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub invoice: InvoiceSettings,
    #[serde(default)]
    pub export: ExportSettings,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DisplaySettings {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct InvoiceSettings {
    #[serde(default = "default_number_format")]
    pub number_format: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ExportSettings {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_number_format() -> String {
    "INV-{seq:04}".to_string()
}

fn default_output_dir() -> String {
    "output".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            page_size: default_page_size(),
        }
    }
}

impl Default for InvoiceSettings {
    fn default() -> Self {
        Self {
            number_format: default_number_format(),
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if self.display.page_size == 0 {
            errors.push(FieldError::new("display.page_size", "must be at least 1"));
        }
        if !self.invoice.number_format.contains("{seq") {
            errors.push(FieldError::new(
                "invoice.number_format",
                "must contain a {seq} placeholder",
            ));
        }
        if self.invoice.number_format.contains(&['/', '\\'][..]) {
            errors.push(FieldError::new(
                "invoice.number_format",
                "must not contain path separators",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(BooksError::Validation(errors))
        }
    }
}
