mod invoice;
mod ledger;
mod record;

pub use invoice::{Invoice, InvoiceStatus, LineItem};
pub use ledger::{AccountType, LedgerEntry};
pub use record::Record;
