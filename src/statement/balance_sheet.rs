use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{line_total, StatementLine};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct BalanceSheetData {
    #[serde(default)]
    pub assets: Vec<StatementLine>,
    #[serde(default)]
    pub liabilities: Vec<StatementLine>,
    #[serde(default)]
    pub equity: Vec<StatementLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceSheet {
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub total_equity: Decimal,
}

impl BalanceSheet {
    pub fn new(data: &BalanceSheetData) -> Self {
        Self {
            total_assets: line_total(&data.assets),
            total_liabilities: line_total(&data.liabilities),
            total_equity: line_total(&data.equity),
        }
    }

    pub fn total_liabilities_and_equity(&self) -> Decimal {
        self.total_liabilities + self.total_equity
    }

    /// Assets = Liabilities + Equity
    pub fn is_balanced(&self) -> bool {
        self.total_assets == self.total_liabilities_and_equity()
    }

    pub fn difference(&self) -> Decimal {
        self.total_assets - self.total_liabilities_and_equity()
    }
}
