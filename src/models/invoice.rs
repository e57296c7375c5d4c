use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FieldError;
use crate::statement::{amount_in_range, sum};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvoiceStatus {
    Paid,
    #[default]
    Unpaid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Unpaid => "Unpaid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A billable line on an invoice. `tax` is a percentage (0-100).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
    #[serde(default)]
    pub tax: Decimal,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: u32, price: Decimal, tax: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            tax,
        }
    }

    /// quantity x price, before tax
    pub fn net(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price
    }

    pub fn tax_amount(&self) -> Decimal {
        self.net() * self.tax / Decimal::ONE_HUNDRED
    }

    pub fn total(&self) -> Decimal {
        self.net() + self.tax_amount()
    }

    /// Field checks for this line, reported under `prefix` (e.g. "items[1]")
    pub fn validate(&self, prefix: &str) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let field = |name: &str| format!("{prefix}.{name}");

        if self.name.trim().is_empty() {
            errors.push(FieldError::new(field("name"), "is required"));
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            errors.push(FieldError::new(field("price"), "must not be negative"));
        } else if !amount_in_range(self.price) {
            errors.push(FieldError::new(field("price"), "is too large"));
        }
        if self.tax < Decimal::ZERO || self.tax > Decimal::ONE_HUNDRED {
            errors.push(FieldError::new(field("tax"), "must be between 0 and 100"));
        } else if errors.is_empty() && !amount_in_range(self.total()) {
            errors.push(FieldError::new(field("quantity"), "line total is too large"));
        }

        errors
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::new("", 1, Decimal::ZERO, Decimal::ZERO)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Invoice {
    pub id: u32,
    pub invoice_number: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_address: String,
    #[serde(default)]
    pub customer_contact: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[serde(default)]
    pub notes: String,
}

impl Invoice {
    /// Grand total across all line items, tax included
    pub fn total(&self) -> Decimal {
        sum(&self.items, LineItem::total)
    }
}
