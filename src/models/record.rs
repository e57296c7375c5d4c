use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One income or expense entry
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Record {
    pub id: u32,
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}
