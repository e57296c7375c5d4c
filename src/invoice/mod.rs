mod draft;
mod number;
mod printable;

pub use draft::{DraftAction, DraftField, InvoiceDraft, ItemField};
pub use number::{format_invoice_number, InvoiceNumbers, SequentialNumbers};
pub use printable::{render_printable, write_printable};
