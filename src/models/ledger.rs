use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Asset,
    Liability,
    Income,
    Expense,
}

impl AccountType {
    pub const ALL: [AccountType; 4] = [
        AccountType::Asset,
        AccountType::Liability,
        AccountType::Income,
        AccountType::Expense,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Asset => "Asset",
            AccountType::Liability => "Liability",
            AccountType::Income => "Income",
            AccountType::Expense => "Expense",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single general-ledger line. Debit and credit are kept apart, never netted.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LedgerEntry {
    pub id: u32,
    pub date: NaiveDate,
    pub account: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub description: String,
    #[serde(default)]
    pub debit: Decimal,
    #[serde(default)]
    pub credit: Decimal,
}
