use std::collections::HashSet;

use tracing::debug;

use crate::config::State;
use crate::error::{BooksError, Result};

/// Source of invoice numbers for new invoices
pub trait InvoiceNumbers {
    fn next_number(&mut self) -> Result<String>;
}

/// Expand a number template. Supports `{seq}`, `{seq:03}`, `{seq:04}`
/// and `{seq:05}`.
pub fn format_invoice_number(format: &str, seq: u32) -> String {
    format
        .replace("{seq:03}", &format!("{:03}", seq))
        .replace("{seq:04}", &format!("{:04}", seq))
        .replace("{seq:05}", &format!("{:05}", seq))
        .replace("{seq}", &seq.to_string())
}

/// Counter-backed numbering: INV-0001, INV-0002, ... Numbers already held
/// by existing invoices are passed over.
#[derive(Debug, Clone)]
pub struct SequentialNumbers {
    format: String,
    last: u32,
    taken: HashSet<String>,
}

impl SequentialNumbers {
    pub fn new(format: impl Into<String>, last: u32) -> Self {
        Self {
            format: format.into(),
            last,
            taken: HashSet::new(),
        }
    }

    /// Continue from the counter persisted in `state.toml`
    pub fn from_state(format: impl Into<String>, state: &State) -> Self {
        Self::new(format, state.counter.last_number)
    }

    /// Never hand out any of `numbers` (compared case-insensitively)
    pub fn skipping<I, S>(mut self, numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.taken
            .extend(numbers.into_iter().map(|n| n.as_ref().to_ascii_uppercase()));
        self
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    /// The number `next_number` would hand out, without consuming it
    pub fn peek(&self) -> Result<String> {
        self.clone().next_number()
    }
}

impl InvoiceNumbers for SequentialNumbers {
    fn next_number(&mut self) -> Result<String> {
        loop {
            let seq = self
                .last
                .checked_add(1)
                .ok_or(BooksError::InvoiceNumbersExhausted)?;
            self.last = seq;

            let number = format_invoice_number(&self.format, seq);
            if self.taken.insert(number.to_ascii_uppercase()) {
                return Ok(number);
            }
            debug!(%number, "invoice number already in use");
        }
    }
}
