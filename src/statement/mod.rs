//! Subtotals and derived totals for the financial statements.

mod balance_sheet;
mod cash_flow;
mod dashboard;
mod ledger;
mod profit_loss;

pub use balance_sheet::{BalanceSheet, BalanceSheetData};
pub use cash_flow::{CashFlow, CashFlowData, CashFlowPeriod, CashFlowRow, CashFlowView, FlowDirection};
pub use dashboard::{Dashboard, KeyMetrics, Transaction, TransactionKind};
pub use ledger::LedgerTotals;
pub use profit_loss::{ProfitLoss, ProfitLossData, PERIODS};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named amount inside a statement group (e.g. "Inventory", 75000)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StatementLine {
    pub name: String,
    pub amount: Decimal,
}

impl StatementLine {
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Largest magnitude accepted for a single stored amount (10^15). Loaded
/// data and drafts are held to it, so sums and line totals cannot overflow
/// `Decimal`.
pub fn max_amount() -> Decimal {
    Decimal::from(1_000_000_000_000_000_i64)
}

pub fn amount_in_range(value: Decimal) -> bool {
    value.abs() <= max_amount()
}

/// Fold `items` into one total. Empty input sums to zero.
pub fn sum<T, F>(items: &[T], amount: F) -> Decimal
where
    F: Fn(&T) -> Decimal,
{
    items.iter().map(amount).sum()
}

pub(crate) fn line_total(lines: &[StatementLine]) -> Decimal {
    sum(lines, |line| line.amount)
}
