use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{line_total, StatementLine};

/// Reporting periods offered on the profit & loss view
pub const PERIODS: [&str; 4] = ["Last Month", "Last Quarter", "Year to Date", "Last Year"];

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProfitLossData {
    #[serde(default)]
    pub revenue: Vec<StatementLine>,
    #[serde(default)]
    pub expenses: Vec<StatementLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfitLoss {
    pub total_revenue: Decimal,
    pub total_expenses: Decimal,
}

impl ProfitLoss {
    pub fn new(data: &ProfitLossData) -> Self {
        Self {
            total_revenue: line_total(&data.revenue),
            total_expenses: line_total(&data.expenses),
        }
    }

    /// Revenue minus expenses; negative is a loss
    pub fn net_profit(&self) -> Decimal {
        self.total_revenue - self.total_expenses
    }

    pub fn is_profit(&self) -> bool {
        !self.net_profit().is_sign_negative()
    }
}
