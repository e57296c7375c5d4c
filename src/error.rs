use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single failed field check on a form-like input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug)]
pub enum BooksError {
    #[error("Config directory not found at {0}. Run 'books init' to create it.")]
    ConfigNotFound(PathBuf),

    #[error("Config file not found: {0}")]
    ConfigFileNotFound(PathBuf),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid amount '{value}' for {field}")]
    InvalidAmount { field: String, value: String },

    #[error("Invalid item format '{0}'. Expected 'name:quantity:price[:tax]' (e.g., 'Design:2:100:10')")]
    InvalidItemFormat(String),

    #[error("Invoice '{0}' not found")]
    UnknownInvoice(String),

    #[error("Record #{0} not found")]
    UnknownRecord(u32),

    #[error("Invoice number counter is exhausted; reset last_number in state.toml")]
    InvoiceNumbersExhausted,

    #[error("'{0}' cannot be used as a file name")]
    UnsafeFileName(String),

    #[error("Validation failed: {}", join_fields(.0))]
    Validation(Vec<FieldError>),

    #[error("Row has {found} column(s) but the table declares {expected}")]
    ColumnMismatch { expected: usize, found: usize },

    #[error("Typst not found. Install it from https://typst.app/ or run: cargo install typst-cli")]
    TypstNotFound,

    #[error("Failed to generate PDF: {0}")]
    PdfGeneration(String),

    #[error("Unable to open print target {0}")]
    PrintTargetUnavailable(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BooksError>;
