use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{BooksError, Result};
use crate::export::is_safe_file_stem;
use crate::fmt::{long_date, money};
use crate::models::Invoice;

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
    .invoice-container { max-width: 800px; margin: 0 auto; padding: 20px; border: 1px solid #ddd; }
    .invoice-header { display: flex; justify-content: space-between; margin-bottom: 20px; }
    .invoice-title { font-size: 24px; font-weight: bold; }
    .invoice-details { margin-bottom: 20px; }
    table { width: 100%; border-collapse: collapse; margin-bottom: 20px; }
    th, td { border: 1px solid #ddd; padding: 10px; text-align: left; }
    th { background-color: #f2f2f2; }
    .total { font-weight: bold; font-size: 18px; text-align: right; }
"#;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Self-contained HTML for the browser print dialog
pub fn render_printable(invoice: &Invoice, currency_symbol: &str) -> String {
    let number = escape(&invoice.invoice_number);

    let rows: String = invoice
        .items
        .iter()
        .map(|item| {
            format!(
                "        <tr>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}%</td>\n          <td>{}</td>\n        </tr>\n",
                escape(&item.name),
                item.quantity,
                money(item.price, currency_symbol),
                item.tax.normalize(),
                money(item.total(), currency_symbol),
            )
        })
        .collect();

    let notes = if invoice.notes.trim().is_empty() {
        String::new()
    } else {
        format!(
            "    <div>\n      <strong>Notes:</strong>\n      <p>{}</p>\n    </div>\n",
            escape(&invoice.notes)
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Invoice {number}</title>
  <style>{STYLE}</style>
</head>
<body>
  <div class="invoice-container">
    <div class="invoice-header">
      <div class="invoice-title">INVOICE</div>
      <div>
        <div>Invoice Number: {number}</div>
        <div>Date: {date}</div>
        <div>Status: {status}</div>
      </div>
    </div>
    <div class="invoice-details">
      <div><strong>Bill To:</strong></div>
      <div>{name}</div>
      <div>{address}</div>
      <div>{contact}</div>
    </div>
    <table>
      <thead>
        <tr>
          <th>Item</th>
          <th>Quantity</th>
          <th>Price</th>
          <th>Tax (%)</th>
          <th>Line Total</th>
        </tr>
      </thead>
      <tbody>
{rows}      </tbody>
    </table>
    <div class="total">Total: {total}</div>
{notes}  </div>
</body>
</html>
"#,
        date = long_date(invoice.date),
        status = invoice.status,
        name = escape(&invoice.customer_name),
        address = escape(&invoice.customer_address),
        contact = escape(&invoice.customer_contact),
        total = money(invoice.total(), currency_symbol),
    )
}

/// Write the printable document to `dir/<number>.html`.
///
/// A target that cannot be created comes back as
/// [`BooksError::PrintTargetUnavailable`]; the caller decides what to do.
/// Numbers that would leave `dir` are refused with
/// [`BooksError::UnsafeFileName`].
pub fn write_printable(invoice: &Invoice, currency_symbol: &str, dir: &Path) -> Result<PathBuf> {
    if !is_safe_file_stem(&invoice.invoice_number) {
        return Err(BooksError::UnsafeFileName(invoice.invoice_number.clone()));
    }
    let path = dir.join(format!("{}.html", invoice.invoice_number.trim()));
    let document = render_printable(invoice, currency_symbol);

    if let Err(e) = fs::create_dir_all(dir).and_then(|_| fs::write(&path, document)) {
        warn!(path = %path.display(), error = %e, "unable to open print target");
        return Err(BooksError::PrintTargetUnavailable(path));
    }

    info!(path = %path.display(), "wrote printable invoice");
    Ok(path)
}
