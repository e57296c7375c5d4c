use rust_decimal::Decimal;

use super::sum;
use crate::models::LedgerEntry;

/// Column totals for a ledger listing, shown side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerTotals {
    pub debit: Decimal,
    pub credit: Decimal,
}

impl LedgerTotals {
    pub fn new(entries: &[&LedgerEntry]) -> Self {
        Self {
            debit: sum(entries, |entry| entry.debit),
            credit: sum(entries, |entry| entry.credit),
        }
    }
}
