pub mod config;
pub mod error;
pub mod export;
pub mod fmt;
pub mod invoice;
pub mod listing;
pub mod models;
pub mod records;
pub mod statement;

pub use config::{Config, SeedData, State};
pub use error::{BooksError, FieldError, Result};
pub use listing::{filter_records, paginate, FilterState, ListAction, ListState, Page};
pub use models::{AccountType, Invoice, InvoiceStatus, LedgerEntry, LineItem, Record};
pub use records::{RecordDraft, RecordField};
pub use statement::sum;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the stderr log subscriber. `RUST_LOG` wins over the default
/// level; `verbose` raises the default from warn to debug.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let default = if verbose { "books=debug" } else { "books=warn" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
