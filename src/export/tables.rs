use chrono::NaiveDate;

use super::{Cell, ExportTable};
use crate::error::Result;
use crate::fmt::{generated_on, period_label, short_date};
use crate::models::{Invoice, LedgerEntry, Record};
use crate::statement::{
    BalanceSheet, BalanceSheetData, CashFlow, CashFlowView, LedgerTotals, ProfitLoss,
    ProfitLossData, StatementLine,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Income => "Income",
            RecordKind::Expense => "Expense",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RecordKind::Income => "Income List",
            RecordKind::Expense => "Expense List",
        }
    }

    pub fn file_stem(&self) -> &'static str {
        match self {
            RecordKind::Income => "income",
            RecordKind::Expense => "expenses",
        }
    }
}

fn generated_line(today: NaiveDate) -> String {
    format!("Generated on {}", generated_on(today))
}

pub fn record_table(records: &[&Record], kind: RecordKind, today: NaiveDate) -> Result<ExportTable> {
    let mut table = ExportTable::new(
        kind.title(),
        kind.file_stem(),
        &["Date", "Category", "Amount", "Payment Method", "Notes"],
    )
    .with_subtitle(generated_line(today));

    for record in records {
        table.push_row(vec![
            short_date(record.date).into(),
            record.category.as_str().into(),
            record.amount.into(),
            record.payment_method.clone().unwrap_or_default().into(),
            record.notes.clone().unwrap_or_default().into(),
        ])?;
    }
    Ok(table)
}

pub fn invoice_table(invoices: &[&Invoice], today: NaiveDate) -> Result<ExportTable> {
    let mut table = ExportTable::new(
        "Invoice List",
        "invoices",
        &["Invoice Number", "Customer Name", "Date", "Total", "Status"],
    )
    .with_subtitle(generated_line(today));

    for invoice in invoices {
        table.push_row(vec![
            invoice.invoice_number.as_str().into(),
            invoice.customer_name.as_str().into(),
            short_date(invoice.date).into(),
            invoice.total().into(),
            invoice.status.as_str().into(),
        ])?;
    }
    Ok(table)
}

pub fn ledger_table(entries: &[&LedgerEntry], today: NaiveDate) -> Result<ExportTable> {
    let mut table = ExportTable::new(
        "Ledger",
        "ledger",
        &["Date", "Account", "Type", "Description", "Debit", "Credit"],
    )
    .with_subtitle(generated_line(today));

    for entry in entries {
        table.push_row(vec![
            short_date(entry.date).into(),
            entry.account.as_str().into(),
            entry.account_type.as_str().into(),
            entry.description.as_str().into(),
            entry.debit.into(),
            entry.credit.into(),
        ])?;
    }

    let totals = LedgerTotals::new(entries);
    table.push_row(vec![
        "".into(),
        "".into(),
        "".into(),
        "Total".into(),
        totals.debit.into(),
        totals.credit.into(),
    ])?;
    Ok(table)
}

fn push_group(table: &mut ExportTable, group: &str, lines: &[StatementLine]) -> Result<()> {
    for line in lines {
        table.push_row(vec![group.into(), line.name.as_str().into(), line.amount.into()])?;
    }
    Ok(())
}

pub fn balance_sheet_table(data: &BalanceSheetData, today: NaiveDate) -> Result<ExportTable> {
    let sheet = BalanceSheet::new(data);
    let mut table = ExportTable::new("Balance Sheet", "balance_sheet", &["Category", "Item", "Amount"])
        .with_subtitle(format!("As of {}", generated_on(today)));

    push_group(&mut table, "Assets", &data.assets)?;
    table.push_row(vec!["Assets".into(), "Total Assets".into(), sheet.total_assets.into()])?;
    push_group(&mut table, "Liabilities", &data.liabilities)?;
    table.push_row(vec![
        "Liabilities".into(),
        "Total Liabilities".into(),
        sheet.total_liabilities.into(),
    ])?;
    push_group(&mut table, "Equity", &data.equity)?;
    table.push_row(vec!["Equity".into(), "Total Equity".into(), sheet.total_equity.into()])?;
    table.push_row(vec![
        "".into(),
        "Total Liabilities and Equity".into(),
        sheet.total_liabilities_and_equity().into(),
    ])?;
    Ok(table)
}

pub fn profit_loss_table(data: &ProfitLossData, period: &str, today: NaiveDate) -> Result<ExportTable> {
    let pnl = ProfitLoss::new(data);
    let mut table = ExportTable::new(
        "Profit & Loss Statement",
        "profit_and_loss",
        &["Section", "Category", "Amount"],
    )
    .with_subtitle(format!("Period: {period}"))
    .with_subtitle(generated_line(today));

    push_group(&mut table, "Revenue", &data.revenue)?;
    table.push_row(vec!["Revenue".into(), "Total Revenue".into(), pnl.total_revenue.into()])?;
    push_group(&mut table, "Expenses", &data.expenses)?;
    table.push_row(vec![
        "Expenses".into(),
        "Total Expenses".into(),
        pnl.total_expenses.into(),
    ])?;
    table.push_row(vec!["".into(), "Net Profit/Loss".into(), pnl.net_profit().into()])?;
    Ok(table)
}

pub fn cash_flow_table(cash_flow: &CashFlow, today: NaiveDate) -> Result<ExportTable> {
    let mut table = ExportTable::new(
        "Cash Flow Statement",
        "cash_flow",
        &["Period", "Inflows", "Outflows", "Net Cash Flow"],
    )
    .with_subtitle(format!("View: {}", cash_flow.view.label()))
    .with_subtitle(generated_line(today));

    for row in &cash_flow.rows {
        let period = match cash_flow.view {
            CashFlowView::Monthly => period_label(&row.period),
            CashFlowView::Quarterly => row.period.clone(),
        };
        table.push_row(vec![
            Cell::Text(period),
            row.inflows.into(),
            row.outflows.into(),
            row.net.into(),
        ])?;
    }
    Ok(table)
}
