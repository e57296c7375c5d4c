use books::config::SEED_TEMPLATE;
use books::export::{
    balance_sheet_table, cash_flow_table, export_to_dir, invoice_table, is_safe_file_stem,
    ledger_table,
    profit_loss_table, record_table, Cell, CsvSink, ExportFormat, ExportSink, ExportTable,
    JsonSink, RecordKind,
};
use books::statement::{CashFlow, CashFlowView};
use books::{BooksError, SeedData};
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 5).unwrap()
}

fn seed() -> SeedData {
    SeedData::from_toml(SEED_TEMPLATE, Path::new("seed.toml")).unwrap()
}

#[test]
fn test_push_row_checks_column_count() {
    let mut table = ExportTable::new("Ledger", "ledger", &["Date", "Account", "Debit"]);
    table
        .push_row(vec!["Jun 01, 2023".into(), "Cash".into(), dec!(10).into()])
        .unwrap();

    let err = table.push_row(vec!["Cash".into()]).unwrap_err();
    assert!(matches!(
        err,
        BooksError::ColumnMismatch {
            expected: 3,
            found: 1
        }
    ));
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn test_cell_display_and_raw() {
    let amount = Cell::from(dec!(-1500.5));
    assert_eq!(amount.display("$"), "-$1,500.50");
    assert_eq!(amount.raw(), "-1500.5");

    let text = Cell::from("Cash");
    assert_eq!(text.display("$"), "Cash");
    assert_eq!(text.raw(), "Cash");
}

#[test]
fn test_record_table_layout() {
    let seed = seed();
    let income: Vec<_> = seed.income.iter().take(2).collect();
    let table = record_table(&income, RecordKind::Income, today()).unwrap();

    assert_eq!(table.title, "Income List");
    assert_eq!(table.subtitle, vec!["Generated on October 5, 2026"]);
    assert_eq!(table.file_name("csv"), "income.csv");
    assert_eq!(
        table.headers,
        vec!["Date", "Category", "Amount", "Payment Method", "Notes"]
    );
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0][0], Cell::Text("May 01, 2023".to_string()));
    assert_eq!(table.rows[0][2], Cell::Amount(dec!(5000)));

    let expenses: Vec<_> = seed.expenses.iter().collect();
    let table = record_table(&expenses, RecordKind::Expense, today()).unwrap();
    assert_eq!(table.title, "Expense List");
    assert_eq!(table.file_name("pdf"), "expenses.pdf");
    assert_eq!(table.rows[0][4], Cell::Text(String::new()));
}

#[test]
fn test_invoice_table_uses_totals() {
    let seed = seed();
    let invoices: Vec<_> = seed.invoices.iter().collect();
    let table = invoice_table(&invoices, today()).unwrap();

    assert_eq!(table.file_stem, "invoices");
    assert_eq!(table.rows.len(), 10);
    let last = table.rows.last().unwrap();
    assert_eq!(last[0], Cell::Text("INV-0010".to_string()));
    assert_eq!(last[3], Cell::Amount(dec!(1920)));
    assert_eq!(last[4], Cell::Text("Unpaid".to_string()));
}

#[test]
fn test_ledger_table_ends_with_totals() {
    let seed = seed();
    let entries: Vec<_> = seed.ledger.iter().collect();
    let table = ledger_table(&entries, today()).unwrap();

    assert_eq!(table.rows.len(), 11);
    let total = table.rows.last().unwrap();
    assert_eq!(total[3], Cell::Text("Total".to_string()));
    assert_eq!(total[4], Cell::Amount(dec!(29200)));
    assert_eq!(total[5], Cell::Amount(dec!(14000)));
}

#[test]
fn test_balance_sheet_table() {
    let table = balance_sheet_table(&seed().balance_sheet, today()).unwrap();

    assert_eq!(table.title, "Balance Sheet");
    assert_eq!(table.subtitle, vec!["As of October 5, 2026"]);
    assert_eq!(table.file_name("json"), "balance_sheet.json");

    let last = table.rows.last().unwrap();
    assert_eq!(last[1], Cell::Text("Total Liabilities and Equity".to_string()));
    assert_eq!(last[2], Cell::Amount(dec!(435000)));

    let total_assets = table
        .rows
        .iter()
        .find(|row| row[1] == Cell::Text("Total Assets".to_string()))
        .unwrap();
    assert_eq!(total_assets[2], Cell::Amount(dec!(435000)));
}

#[test]
fn test_profit_loss_table() {
    let table = profit_loss_table(&seed().profit_loss, "Last Quarter", today()).unwrap();

    assert_eq!(table.file_stem, "profit_and_loss");
    assert_eq!(table.subtitle[0], "Period: Last Quarter");
    let last = table.rows.last().unwrap();
    assert_eq!(last[1], Cell::Text("Net Profit/Loss".to_string()));
    assert_eq!(last[2], Cell::Amount(dec!(30000)));
}

#[test]
fn test_cash_flow_table_keeps_signed_net() {
    let cash_flow = CashFlow::new(&seed().cash_flow, CashFlowView::Monthly);
    let table = cash_flow_table(&cash_flow, today()).unwrap();

    assert_eq!(table.subtitle[0], "View: Monthly");
    assert_eq!(table.rows[0][0], Cell::Text("January 2023".to_string()));
    assert_eq!(table.rows[0][3], Cell::Amount(dec!(10000)));
    assert_eq!(table.rows[5][3], Cell::Amount(dec!(-3000)));
}

#[test]
fn test_csv_sink_writes_title_then_rows() {
    let temp_dir = TempDir::new().unwrap();
    let mut table = ExportTable::new("Ledger", "ledger", &["Account", "Debit"])
        .with_subtitle("Generated on October 5, 2026");
    table.push_row(vec!["Cash".into(), dec!(1234.50).into()]).unwrap();
    table
        .push_row(vec!["Accounts, Receivable".into(), dec!(10).into()])
        .unwrap();

    let path = export_to_dir(&table, &CsvSink, temp_dir.path()).unwrap();
    assert_eq!(path, temp_dir.path().join("ledger.csv"));

    let content = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Ledger",
            "\"Generated on October 5, 2026\"",
            "Account,Debit",
            "Cash,1234.5",
            "\"Accounts, Receivable\",10",
        ]
    );
}

#[test]
fn test_json_sink_keys_rows_by_header() {
    let mut table = ExportTable::new("Invoice List", "invoices", &["Invoice Number", "Total"]);
    table
        .push_row(vec!["INV-0001".into(), dec!(220.00).into()])
        .unwrap();

    let value = JsonSink::to_value(&table);
    assert_eq!(value["title"], "Invoice List");
    assert_eq!(value["columns"][1], "Total");
    assert_eq!(value["rows"][0]["Invoice Number"], "INV-0001");
    assert_eq!(value["rows"][0]["Total"], "220");
}

#[test]
fn test_export_to_dir_creates_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("nested").join("output");
    let table = ExportTable::new("Empty", "empty", &["A"]);

    let sink = ExportFormat::Json.sink("$");
    let path = export_to_dir(&table, sink.as_ref(), &dir).unwrap();
    assert!(path.ends_with("nested/output/empty.json"));

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(value["rows"].as_array().unwrap().len(), 0);
}

#[test]
fn test_format_extensions() {
    assert_eq!(ExportFormat::Pdf.sink("$").extension(), "pdf");
    assert_eq!(ExportFormat::Csv.sink("$").extension(), "csv");
    assert_eq!(ExportFormat::Json.sink("$").extension(), "json");
}

#[test]
fn test_safe_file_stems() {
    for stem in ["INV-0001", "invoices", " INV-0002 ", "a.b"] {
        assert!(is_safe_file_stem(stem), "{stem}");
    }
    for stem in ["", "  ", ".", "..", "../x", "a/b", "..\\x", "/etc/passwd"] {
        assert!(!is_safe_file_stem(stem), "{stem}");
    }
}
