use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::sum;
use crate::models::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

/// A recent income or expense with its sign applied (expenses negative)
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
}

impl Transaction {
    fn from_record(record: &Record, kind: TransactionKind) -> Self {
        let amount = match kind {
            TransactionKind::Income => record.amount,
            TransactionKind::Expense => -record.amount,
        };
        Self {
            date: record.date,
            description: record
                .notes
                .clone()
                .unwrap_or_else(|| record.category.clone()),
            amount,
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMetrics {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_profit: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub metrics: KeyMetrics,
    pub recent: Vec<Transaction>,
}

impl Dashboard {
    /// Headline totals plus the `recent_limit` newest transactions, newest first
    pub fn new(income: &[Record], expenses: &[Record], recent_limit: usize) -> Self {
        let total_income = sum(income, |r| r.amount);
        let total_expense = sum(expenses, |r| r.amount);

        let mut recent: Vec<Transaction> = income
            .iter()
            .map(|r| Transaction::from_record(r, TransactionKind::Income))
            .chain(
                expenses
                    .iter()
                    .map(|r| Transaction::from_record(r, TransactionKind::Expense)),
            )
            .collect();
        // stable sort keeps income ahead of expenses on the same day
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(recent_limit);

        Self {
            metrics: KeyMetrics {
                total_income,
                total_expense,
                net_profit: total_income - total_expense,
            },
            recent,
        }
    }

    /// Signed sum of the recent transactions shown
    pub fn recent_net(&self) -> Decimal {
        sum(&self.recent, |t| t.amount)
    }
}
