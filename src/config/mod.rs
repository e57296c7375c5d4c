mod seed;
mod settings;
mod state;

pub use seed::SeedData;
pub use settings::{Config, DisplaySettings, ExportSettings, InvoiceSettings};
pub use state::{Counter, State};

use crate::error::{BooksError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Get the config directory path (XDG config dir, else ~/.books/)
pub fn config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "books") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    let home = dirs_home().ok_or_else(|| {
        BooksError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".books"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Expand ~ in paths
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_home() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Where exports and printable invoices go. Relative paths hang off the
/// config directory.
pub fn resolve_output_dir(output_dir: &str, config_dir: &Path) -> PathBuf {
    let expanded = expand_path(output_dir);
    if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(expanded)
    }
}

fn read_required(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(BooksError::ConfigFileNotFound(path.to_path_buf()));
    }
    debug!(path = %path.display(), "reading config file");
    Ok(fs::read_to_string(path)?)
}

/// Load and validate config.toml
pub fn load_config(config_dir: &Path) -> Result<Config> {
    let path = config_dir.join("config.toml");
    let content = read_required(&path)?;
    let config: Config =
        toml::from_str(&content).map_err(|e| BooksError::ConfigParse { path, source: e })?;
    config.validate()?;
    Ok(config)
}

/// Load seed.toml
pub fn load_seed(config_dir: &Path) -> Result<SeedData> {
    let path = config_dir.join("seed.toml");
    let content = read_required(&path)?;
    SeedData::from_toml(&content, &path)
}

/// Load state.toml (default if missing)
pub fn load_state(config_dir: &Path) -> Result<State> {
    let path = config_dir.join("state.toml");
    if !path.exists() {
        return Ok(State::default());
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| BooksError::ConfigParse { path, source: e })
}

/// Save state.toml
pub fn save_state(config_dir: &Path, state: &State) -> Result<()> {
    let path = config_dir.join("state.toml");
    let content = toml::to_string_pretty(state).map_err(|e| {
        BooksError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })?;
    fs::write(path, content)?;
    Ok(())
}

/// Create the config directory with template files
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    if config_dir.exists() {
        return Err(BooksError::AlreadyInitialized(config_dir.to_path_buf()));
    }

    fs::create_dir_all(config_dir)?;
    fs::create_dir_all(config_dir.join("output"))?;
    fs::write(config_dir.join("config.toml"), CONFIG_TEMPLATE)?;
    fs::write(config_dir.join("seed.toml"), SEED_TEMPLATE)?;
    Ok(())
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[display]
currency_symbol = "$"
page_size = 5              # rows per page in list views

[invoice]
number_format = "INV-{seq:04}"  # e.g., INV-0001

[export]
output_dir = "output"      # relative to this directory, or absolute / ~/...
"#;

/// Template content for seed.toml
pub const SEED_TEMPLATE: &str = r#"# Sample books. Every view reads from this file; edit freely.
# Dates are quoted YYYY-MM-DD strings. Amounts may be numbers or
# quoted decimals ("1234.50").

income = [
  { id = 1, date = "2023-05-01", category = "Salary", amount = 5000, payment_method = "Bank Transfer", notes = "Monthly salary" },
  { id = 2, date = "2023-05-05", category = "Freelance", amount = 1000, payment_method = "PayPal", notes = "Web design project" },
  { id = 3, date = "2023-05-10", category = "Investment", amount = 500, payment_method = "Bank Transfer", notes = "Dividend payment" },
  { id = 4, date = "2023-05-15", category = "Salary", amount = 5000, payment_method = "Bank Transfer", notes = "Monthly salary" },
  { id = 5, date = "2023-05-20", category = "Freelance", amount = 1500, payment_method = "PayPal", notes = "Mobile app development" },
  { id = 6, date = "2023-05-25", category = "Investment", amount = 750, payment_method = "Bank Transfer", notes = "Stock sale" },
  { id = 7, date = "2023-05-28", category = "Salary", amount = 5000, payment_method = "Bank Transfer", notes = "Monthly salary" },
  { id = 8, date = "2023-06-01", category = "Freelance", amount = 2000, payment_method = "PayPal", notes = "Consulting work" },
  { id = 9, date = "2023-06-05", category = "Investment", amount = 1000, payment_method = "Bank Transfer", notes = "Rental income" },
  { id = 10, date = "2023-06-10", category = "Salary", amount = 5000, payment_method = "Bank Transfer", notes = "Monthly salary" },
  { id = 11, date = "2023-06-15", category = "Freelance", amount = 1800, payment_method = "PayPal", notes = "UI/UX design project" },
  { id = 12, date = "2023-06-20", category = "Investment", amount = 600, payment_method = "Bank Transfer", notes = "Dividend payment" },
]

expenses = [
  { id = 1, date = "2023-05-01", category = "Groceries", amount = 150, payment_method = "Credit Card" },
  { id = 2, date = "2023-05-03", category = "Utilities", amount = 200, payment_method = "Bank Transfer" },
  { id = 3, date = "2023-05-05", category = "Entertainment", amount = 50, payment_method = "Cash" },
  { id = 4, date = "2023-05-10", category = "Rent", amount = 1000, payment_method = "Bank Transfer" },
  { id = 5, date = "2023-05-15", category = "Groceries", amount = 100, payment_method = "Credit Card" },
  { id = 6, date = "2023-05-20", category = "Transportation", amount = 30, payment_method = "Cash" },
  { id = 7, date = "2023-05-25", category = "Utilities", amount = 150, payment_method = "Bank Transfer" },
  { id = 8, date = "2023-05-28", category = "Entertainment", amount = 80, payment_method = "Credit Card" },
  { id = 9, date = "2023-06-01", category = "Groceries", amount = 120, payment_method = "Credit Card" },
  { id = 10, date = "2023-06-05", category = "Transportation", amount = 25, payment_method = "Cash" },
]

ledger = [
  { id = 1, date = "2023-06-01", account = "Cash", type = "Asset", description = "Initial balance", debit = 10000, credit = 0 },
  { id = 2, date = "2023-06-02", account = "Accounts Receivable", type = "Asset", description = "Invoice #1001", debit = 5000, credit = 0 },
  { id = 3, date = "2023-06-03", account = "Sales Revenue", type = "Income", description = "Service rendered", debit = 0, credit = 5000 },
  { id = 4, date = "2023-06-04", account = "Office Supplies", type = "Expense", description = "Stationery purchase", debit = 200, credit = 0 },
  { id = 5, date = "2023-06-05", account = "Accounts Payable", type = "Liability", description = "Supplier invoice", debit = 0, credit = 1000 },
  { id = 6, date = "2023-06-06", account = "Cash", type = "Asset", description = "Client payment", debit = 3000, credit = 0 },
  { id = 7, date = "2023-06-07", account = "Accounts Receivable", type = "Asset", description = "Invoice #1002", debit = 4000, credit = 0 },
  { id = 8, date = "2023-06-08", account = "Salaries", type = "Expense", description = "Monthly payroll", debit = 7000, credit = 0 },
  { id = 9, date = "2023-06-09", account = "Cash", type = "Asset", description = "Loan repayment", debit = 0, credit = 2000 },
  { id = 10, date = "2023-06-10", account = "Sales Revenue", type = "Income", description = "Product sales", debit = 0, credit = 6000 },
]

[[invoices]]
id = 1
invoice_number = "INV-0001"
customer_name = "John Doe"
date = "2023-05-01"
status = "Paid"
items = [{ name = "Consulting", quantity = 10, price = 150, tax = 0 }]

[[invoices]]
id = 2
invoice_number = "INV-0002"
customer_name = "Jane Smith"
date = "2023-05-03"
status = "Unpaid"
items = [{ name = "Website build", quantity = 1, price = 2000, tax = 0 }]

[[invoices]]
id = 3
invoice_number = "INV-0003"
customer_name = "Bob Johnson"
date = "2023-05-05"
status = "Paid"
items = [{ name = "Logo design", quantity = 2, price = 500, tax = 0 }]

[[invoices]]
id = 4
invoice_number = "INV-0004"
customer_name = "Alice Brown"
date = "2023-05-10"
status = "Unpaid"
items = [{ name = "Mobile app", quantity = 1, price = 3000, tax = 0 }]

[[invoices]]
id = 5
invoice_number = "INV-0005"
customer_name = "Charlie Davis"
date = "2023-05-15"
status = "Paid"
items = [{ name = "SEO audit", quantity = 3, price = 600, tax = 0 }]

[[invoices]]
id = 6
invoice_number = "INV-0006"
customer_name = "Eva Wilson"
date = "2023-05-20"
status = "Unpaid"
items = [{ name = "Hosting", quantity = 12, price = 150, tax = 0 }, { name = "Setup", quantity = 1, price = 400, tax = 0 }]

[[invoices]]
id = 7
invoice_number = "INV-0007"
customer_name = "Frank Miller"
date = "2023-05-25"
status = "Paid"
items = [{ name = "Copywriting", quantity = 13, price = 100, tax = 0 }]

[[invoices]]
id = 8
invoice_number = "INV-0008"
customer_name = "Grace Taylor"
date = "2023-05-28"
status = "Unpaid"
items = [{ name = "Training", quantity = 5, price = 500, tax = 0 }]

[[invoices]]
id = 9
invoice_number = "INV-0009"
customer_name = "Henry Clark"
date = "2023-06-01"
status = "Paid"
items = [{ name = "Maintenance", quantity = 17, price = 100, tax = 0 }]

[[invoices]]
id = 10
invoice_number = "INV-0010"
customer_name = "Ivy Martin"
customer_address = "12 Harbour Road"
customer_contact = "ivy@example.com"
date = "2023-06-05"
status = "Unpaid"
notes = "Payment due within 30 days"
items = [{ name = "Design", quantity = 2, price = 100, tax = 10 }, { name = "Development", quantity = 17, price = 100, tax = 0 }]

[balance_sheet]
assets = [
  { name = "Cash and Cash Equivalents", amount = 100000 },
  { name = "Accounts Receivable", amount = 50000 },
  { name = "Inventory", amount = 75000 },
  { name = "Prepaid Expenses", amount = 10000 },
  { name = "Property, Plant, and Equipment", amount = 200000 },
]
liabilities = [
  { name = "Accounts Payable", amount = 30000 },
  { name = "Short-term Debt", amount = 50000 },
  { name = "Accrued Expenses", amount = 15000 },
  { name = "Long-term Debt", amount = 100000 },
]
equity = [
  { name = "Common Stock", amount = 150000 },
  { name = "Retained Earnings", amount = 90000 },
]

[profit_loss]
revenue = [
  { name = "Sales", amount = 100000 },
  { name = "Service Income", amount = 50000 },
  { name = "Other Income", amount = 5000 },
]
expenses = [
  { name = "Cost of Goods Sold", amount = 60000 },
  { name = "Salaries", amount = 40000 },
  { name = "Rent", amount = 10000 },
  { name = "Utilities", amount = 5000 },
  { name = "Marketing", amount = 7000 },
  { name = "Other Expenses", amount = 3000 },
]

[cash_flow]
monthly = [
  { period = "2023-01", inflows = 50000, outflows = 40000 },
  { period = "2023-02", inflows = 55000, outflows = 42000 },
  { period = "2023-03", inflows = 60000, outflows = 45000 },
  { period = "2023-04", inflows = 58000, outflows = 44000 },
  { period = "2023-05", inflows = 62000, outflows = 47000 },
  { period = "2023-06", inflows = 65000, outflows = 68000 },
]
quarterly = [
  { period = "Q1 2023", inflows = 165000, outflows = 127000 },
  { period = "Q2 2023", inflows = 185000, outflows = 159000 },
]
"#;
