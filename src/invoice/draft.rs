use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::number::InvoiceNumbers;
use crate::error::{BooksError, FieldError, Result};
use crate::models::{Invoice, InvoiceStatus, LineItem};
use crate::statement::sum;

/// One editable column of a line item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemField {
    Name(String),
    Quantity(u32),
    Price(Decimal),
    Tax(Decimal),
}

/// Top-level invoice fields
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    CustomerName(String),
    CustomerAddress(String),
    CustomerContact(String),
    Date(NaiveDate),
    Status(InvoiceStatus),
    Notes(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DraftAction {
    Set(DraftField),
    AddItem,
    RemoveItem(usize),
    UpdateItem(usize, ItemField),
}

/// An invoice being created or edited. Nothing is checked until
/// [`InvoiceDraft::validate`] or [`InvoiceDraft::finalize`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvoiceDraft {
    pub id: Option<u32>,
    pub invoice_number: Option<String>,
    pub customer_name: String,
    pub customer_address: String,
    pub customer_contact: String,
    pub date: Option<NaiveDate>,
    pub items: Vec<LineItem>,
    pub status: InvoiceStatus,
    pub notes: String,
}

impl InvoiceDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing an existing invoice; its number is kept
    pub fn edit(invoice: &Invoice) -> Self {
        Self {
            id: Some(invoice.id),
            invoice_number: Some(invoice.invoice_number.clone()),
            customer_name: invoice.customer_name.clone(),
            customer_address: invoice.customer_address.clone(),
            customer_contact: invoice.customer_contact.clone(),
            date: Some(invoice.date),
            items: invoice.items.clone(),
            status: invoice.status,
            notes: invoice.notes.clone(),
        }
    }

    pub fn apply(mut self, action: DraftAction) -> Self {
        match action {
            DraftAction::Set(field) => match field {
                DraftField::CustomerName(v) => self.customer_name = v,
                DraftField::CustomerAddress(v) => self.customer_address = v,
                DraftField::CustomerContact(v) => self.customer_contact = v,
                DraftField::Date(v) => self.date = Some(v),
                DraftField::Status(v) => self.status = v,
                DraftField::Notes(v) => self.notes = v,
            },
            DraftAction::AddItem => self.items.push(LineItem::default()),
            DraftAction::RemoveItem(index) => {
                if index < self.items.len() {
                    self.items.remove(index);
                }
            }
            DraftAction::UpdateItem(index, field) => {
                if let Some(item) = self.items.get_mut(index) {
                    match field {
                        ItemField::Name(v) => item.name = v,
                        ItemField::Quantity(v) => item.quantity = v,
                        ItemField::Price(v) => item.price = v,
                        ItemField::Tax(v) => item.tax = v,
                    }
                } else {
                    debug!(index, "ignoring update for missing line item");
                }
            }
        }
        self
    }

    pub fn total(&self) -> Decimal {
        sum(&self.items, LineItem::total)
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.customer_name.trim().is_empty() {
            errors.push(FieldError::new("customer_name", "is required"));
        }
        if self.date.is_none() {
            errors.push(FieldError::new("date", "is required"));
        }
        if self.items.is_empty() {
            errors.push(FieldError::new("items", "at least one line item is required"));
        }

        for (i, item) in self.items.iter().enumerate() {
            errors.extend(item.validate(&format!("items[{}]", i + 1)));
        }

        errors
    }

    /// Validate and turn the draft into an invoice. New drafts draw a number
    /// from `numbers`; edited ones keep theirs.
    pub fn finalize(self, id: u32, numbers: &mut dyn InvoiceNumbers) -> Result<Invoice> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(BooksError::Validation(errors));
        }
        let date = self
            .date
            .ok_or_else(|| BooksError::Validation(vec![FieldError::new("date", "is required")]))?;

        let invoice_number = match self.invoice_number {
            Some(number) => number,
            None => numbers.next_number()?,
        };

        Ok(Invoice {
            id: self.id.unwrap_or(id),
            invoice_number,
            customer_name: self.customer_name,
            customer_address: self.customer_address,
            customer_contact: self.customer_contact,
            date,
            items: self.items,
            status: self.status,
            notes: self.notes,
        })
    }
}
