use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Invoice, LedgerEntry, Record};

/// Selector value meaning "no constraint"
pub const ALL: &str = "All";

/// One side of a date range as typed by the user.
///
/// A bound that does not parse is kept rather than dropped: it matches no
/// record, so a typo empties the list instead of silently widening it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateBound {
    On(NaiveDate),
    Malformed(String),
}

impl DateBound {
    /// Blank input means "no bound"
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            Ok(date) => Some(DateBound::On(date)),
            Err(_) => Some(DateBound::Malformed(input.to_string())),
        }
    }
}

impl From<NaiveDate> for DateBound {
    fn from(date: NaiveDate) -> Self {
        DateBound::On(date)
    }
}

/// The user-chosen predicate for a list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub start_date: Option<DateBound>,
    pub end_date: Option<DateBound>,
    pub category: String,
    pub payment_method: String,
    pub search_term: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            category: ALL.to_string(),
            payment_method: ALL.to_string(),
            search_term: String::new(),
        }
    }
}

impl FilterState {
    pub fn matches<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        let date = item.date();
        let in_range = after_start(self.start_date.as_ref(), date)
            && before_end(self.end_date.as_ref(), date);

        let category = self.category == ALL || item.category() == self.category;

        let payment_method = self.payment_method == ALL
            || item.payment_method() == Some(self.payment_method.as_str());

        let needle = self.search_term.to_lowercase();
        let search = item
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));

        in_range && category && payment_method && search
    }
}

fn after_start(bound: Option<&DateBound>, date: NaiveDate) -> bool {
    match bound {
        None => true,
        Some(DateBound::On(start)) => date >= *start,
        Some(DateBound::Malformed(_)) => false,
    }
}

fn before_end(bound: Option<&DateBound>, date: NaiveDate) -> bool {
    match bound {
        None => true,
        Some(DateBound::On(end)) => date <= *end,
        Some(DateBound::Malformed(_)) => false,
    }
}

/// Anything a list view can filter.
///
/// `category` is whatever the view's main selector compares against
/// (category, invoice status, account type). `search_fields` are the two
/// columns the free-text box looks in.
pub trait Filterable {
    fn date(&self) -> NaiveDate;
    fn category(&self) -> &str;
    fn payment_method(&self) -> Option<&str> {
        None
    }
    fn search_fields(&self) -> [&str; 2];
}

impl Filterable for Record {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn payment_method(&self) -> Option<&str> {
        self.payment_method.as_deref()
    }

    fn search_fields(&self) -> [&str; 2] {
        [&self.category, self.payment_method.as_deref().unwrap_or("")]
    }
}

impl Filterable for Invoice {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn category(&self) -> &str {
        self.status.as_str()
    }

    fn search_fields(&self) -> [&str; 2] {
        [&self.customer_name, &self.invoice_number]
    }
}

impl Filterable for LedgerEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn category(&self) -> &str {
        self.account_type.as_str()
    }

    fn search_fields(&self) -> [&str; 2] {
        [&self.account, &self.description]
    }
}

/// Keep the items matching `filter`, in input order
pub fn filter_records<'a, T: Filterable>(records: &'a [T], filter: &FilterState) -> Vec<&'a T> {
    let kept: Vec<&T> = records.iter().filter(|r| filter.matches(*r)).collect();
    debug!(total = records.len(), kept = kept.len(), "filtered records");
    kept
}
