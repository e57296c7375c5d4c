use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BooksError, FieldError, Result};
use crate::export::is_safe_file_stem;
use crate::models::{Invoice, LedgerEntry, Record};
use crate::statement::{
    amount_in_range, BalanceSheetData, CashFlowData, CashFlowPeriod, ProfitLossData,
    StatementLine,
};

/// The in-memory data every view works from
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct SeedData {
    #[serde(default)]
    pub income: Vec<Record>,
    #[serde(default)]
    pub expenses: Vec<Record>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub ledger: Vec<LedgerEntry>,
    #[serde(default)]
    pub balance_sheet: BalanceSheetData,
    #[serde(default)]
    pub profit_loss: ProfitLossData,
    #[serde(default)]
    pub cash_flow: CashFlowData,
}

impl SeedData {
    /// Parse and validate seed data
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        let seed: SeedData = toml::from_str(content).map_err(|e| BooksError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        seed.validate()?;
        Ok(seed)
    }

    /// Every amount within `max_amount()`, invoice lines well formed and
    /// invoice numbers usable as file names.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        check_records(&mut errors, "income", &self.income);
        check_records(&mut errors, "expenses", &self.expenses);

        for (i, invoice) in self.invoices.iter().enumerate() {
            let prefix = format!("invoices[{}]", i + 1);
            if !is_safe_file_stem(&invoice.invoice_number) {
                errors.push(FieldError::new(
                    format!("{prefix}.invoice_number"),
                    "must not be blank or contain path separators",
                ));
            }
            for (j, item) in invoice.items.iter().enumerate() {
                errors.extend(item.validate(&format!("{prefix}.items[{}]", j + 1)));
            }
        }

        for (i, entry) in self.ledger.iter().enumerate() {
            check_amount(&mut errors, format!("ledger[{}].debit", i + 1), entry.debit);
            check_amount(&mut errors, format!("ledger[{}].credit", i + 1), entry.credit);
        }

        check_lines(&mut errors, "balance_sheet.assets", &self.balance_sheet.assets);
        check_lines(&mut errors, "balance_sheet.liabilities", &self.balance_sheet.liabilities);
        check_lines(&mut errors, "balance_sheet.equity", &self.balance_sheet.equity);
        check_lines(&mut errors, "profit_loss.revenue", &self.profit_loss.revenue);
        check_lines(&mut errors, "profit_loss.expenses", &self.profit_loss.expenses);
        check_periods(&mut errors, "cash_flow.monthly", &self.cash_flow.monthly);
        check_periods(&mut errors, "cash_flow.quarterly", &self.cash_flow.quarterly);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(BooksError::Validation(errors))
        }
    }

    pub fn find_record(records: &[Record], id: u32) -> Result<&Record> {
        records
            .iter()
            .find(|r| r.id == id)
            .ok_or(BooksError::UnknownRecord(id))
    }

    pub fn find_invoice(&self, number: &str) -> Result<&Invoice> {
        self.invoices
            .iter()
            .find(|i| i.invoice_number.eq_ignore_ascii_case(number))
            .ok_or_else(|| BooksError::UnknownInvoice(number.to_string()))
    }

    pub fn next_record_id(records: &[Record]) -> u32 {
        records.iter().map(|r| r.id).max().unwrap_or(0).saturating_add(1)
    }

    pub fn next_invoice_id(&self) -> u32 {
        self.invoices.iter().map(|i| i.id).max().unwrap_or(0) + 1
    }

    /// Distinct category values in first-seen order, behind "All"
    pub fn categories(records: &[Record]) -> Vec<String> {
        let mut out = vec![crate::listing::ALL.to_string()];
        for record in records {
            if !out.contains(&record.category) {
                out.push(record.category.clone());
            }
        }
        out
    }
}

fn check_amount(errors: &mut Vec<FieldError>, field: String, value: Decimal) {
    if !amount_in_range(value) {
        errors.push(FieldError::new(field, "is too large"));
    }
}

fn check_records(errors: &mut Vec<FieldError>, name: &str, records: &[Record]) {
    for (i, record) in records.iter().enumerate() {
        check_amount(errors, format!("{name}[{}].amount", i + 1), record.amount);
    }
}

fn check_lines(errors: &mut Vec<FieldError>, name: &str, lines: &[StatementLine]) {
    for (i, line) in lines.iter().enumerate() {
        check_amount(errors, format!("{name}[{}].amount", i + 1), line.amount);
    }
}

fn check_periods(errors: &mut Vec<FieldError>, name: &str, periods: &[CashFlowPeriod]) {
    for (i, period) in periods.iter().enumerate() {
        check_amount(errors, format!("{name}[{}].inflows", i + 1), period.inflows);
        check_amount(errors, format!("{name}[{}].outflows", i + 1), period.outflows);
    }
}
