use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{BooksError, FieldError, Result};
use crate::models::Record;
use crate::statement::amount_in_range;

/// One editable field of an income or expense entry
#[derive(Debug, Clone, PartialEq)]
pub enum RecordField {
    Date(NaiveDate),
    Amount(Decimal),
    Category(String),
    PaymentMethod(String),
    Notes(String),
}

/// An income or expense entry being added or edited. Amounts are entered
/// as positive numbers; whether it is income or expense comes from the list
/// it belongs to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordDraft {
    pub id: Option<u32>,
    pub date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub category: String,
    pub payment_method: String,
    pub notes: String,
}

impl RecordDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing an existing entry; its id is kept
    pub fn edit(record: &Record) -> Self {
        Self {
            id: Some(record.id),
            date: Some(record.date),
            amount: Some(record.amount),
            category: record.category.clone(),
            payment_method: record.payment_method.clone().unwrap_or_default(),
            notes: record.notes.clone().unwrap_or_default(),
        }
    }

    pub fn apply(mut self, field: RecordField) -> Self {
        match field {
            RecordField::Date(v) => self.date = Some(v),
            RecordField::Amount(v) => self.amount = Some(v),
            RecordField::Category(v) => self.category = v,
            RecordField::PaymentMethod(v) => self.payment_method = v,
            RecordField::Notes(v) => self.notes = v,
        }
        self
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.date.is_none() {
            errors.push(FieldError::new("date", "is required"));
        }
        match self.amount {
            None => errors.push(FieldError::new("amount", "is required")),
            Some(amount) if amount <= Decimal::ZERO => {
                errors.push(FieldError::new("amount", "must be greater than zero"))
            }
            Some(amount) if !amount_in_range(amount) => {
                errors.push(FieldError::new("amount", "is too large"))
            }
            Some(_) => {}
        }
        if self.category.trim().is_empty() {
            errors.push(FieldError::new("category", "is required"));
        }

        errors
    }

    /// Validate and turn the draft into a record. New drafts take `id`;
    /// edited ones keep theirs.
    pub fn finalize(self, id: u32) -> Result<Record> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(BooksError::Validation(errors));
        }
        let (Some(date), Some(amount)) = (self.date, self.amount) else {
            return Err(BooksError::Validation(vec![FieldError::new(
                "date",
                "is required",
            )]));
        };

        Ok(Record {
            id: self.id.unwrap_or(id),
            date,
            category: self.category.trim().to_string(),
            amount,
            payment_method: non_blank(self.payment_method),
            notes: non_blank(self.notes),
        })
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
