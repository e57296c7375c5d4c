use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use tabled::{settings::Style, Table, Tabled};
use tracing::{info, warn};

use books::config::{
    config_dir, init_config_dir, load_config, load_seed, load_state, resolve_output_dir,
    save_state,
};
use books::error::{BooksError, Result};
use books::export::{
    balance_sheet_table, cash_flow_table, export_to_dir, invoice_table, ledger_table,
    profit_loss_table, record_table, ExportFormat, ExportTable, RecordKind,
};
use books::fmt::{long_date, money, period_label, short_date};
use books::invoice::{
    write_printable, DraftAction, DraftField, InvoiceDraft, ItemField, SequentialNumbers,
};
use books::listing::{filter_records, Filterable, ListAction, ListState, Page, ALL};
use books::statement::{
    BalanceSheet, CashFlow, CashFlowRow, CashFlowView, Dashboard, FlowDirection, LedgerTotals,
    ProfitLoss, StatementLine, PERIODS,
};
use books::{
    sum, AccountType, Config, FieldError, InvoiceStatus, Record, RecordDraft, RecordField, SeedData,
};

#[derive(Parser)]
#[command(name = "books")]
#[command(version, about = "Bookkeeping dashboard for the terminal", long_about = None)]
struct Cli {
    /// Path to config directory (default: XDG config dir or ~/.books)
    #[arg(short = 'C', long, global = true, env = "BOOKS_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ListArgs {
    /// Only entries on or after this date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<String>,

    /// Only entries on or before this date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<String>,

    /// Case-insensitive text search
    #[arg(short, long, default_value = "")]
    search: String,

    /// Page to show (1-based)
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Write every filtered entry to a file in the output directory
    #[arg(long, value_enum)]
    export: Option<ExportFormat>,
}

#[derive(Args)]
#[command(args_conflicts_with_subcommands = true)]
struct RecordArgs {
    #[command(subcommand)]
    action: Option<RecordCommand>,

    #[command(flatten)]
    list: ListArgs,

    /// Category to show ("All" for every category)
    #[arg(short, long, default_value = "All")]
    category: String,

    /// Payment method to show ("All" for every method)
    #[arg(short, long, default_value = "All")]
    method: String,

    /// Show the details of one entry by id
    #[arg(long)]
    show: Option<u32>,
}

#[derive(Subcommand)]
enum RecordCommand {
    /// Check a new entry and show it (nothing is saved)
    Add(RecordInput),

    /// Check changes to an existing entry and show the result (nothing is saved)
    Edit {
        /// Entry id
        id: u32,

        #[command(flatten)]
        input: RecordInput,
    },
}

#[derive(Args)]
struct RecordInput {
    /// Entry date (YYYY-MM-DD, default for new entries: today)
    #[arg(long)]
    date: Option<String>,

    /// Amount as a positive number (e.g., 1250.50)
    #[arg(long)]
    amount: Option<String>,

    #[arg(short, long)]
    category: Option<String>,

    #[arg(short, long)]
    method: Option<String>,

    #[arg(long)]
    notes: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    Monthly,
    Quarterly,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with template files
    Init,

    /// Key metrics and recent transactions
    Dashboard {
        /// Number of recent transactions to show
        #[arg(long, default_value_t = 5)]
        recent: usize,
    },

    /// List, add or edit income entries
    Income(RecordArgs),

    /// List, add or edit expense entries
    Expenses(RecordArgs),

    /// List invoices
    Invoices {
        #[command(flatten)]
        list: ListArgs,

        /// Invoice status to show (All, Paid, Unpaid)
        #[arg(long, default_value = "All")]
        status: String,

        /// Send reminders for the unpaid invoices in the list
        #[arg(long)]
        reminders: bool,
    },

    /// Create or print a single invoice
    Invoice {
        #[command(subcommand)]
        action: InvoiceCommand,
    },

    /// General ledger with debit and credit totals
    Ledger {
        #[command(flatten)]
        list: ListArgs,

        /// Account type to show (All, Asset, Liability, Income, Expense)
        #[arg(short = 't', long = "type", default_value = "All")]
        account_type: String,
    },

    /// Assets, liabilities and equity
    BalanceSheet {
        #[arg(long, value_enum)]
        export: Option<ExportFormat>,
    },

    /// Revenue, expenses and net profit
    ProfitLoss {
        /// Reporting period label
        #[arg(long, default_value = "Last Month")]
        period: String,

        #[arg(long, value_enum)]
        export: Option<ExportFormat>,
    },

    /// Inflows, outflows and net cash flow per period
    CashFlow {
        #[arg(long, value_enum, default_value = "monthly")]
        view: ViewArg,

        #[arg(long, value_enum)]
        export: Option<ExportFormat>,
    },
}

#[derive(Subcommand)]
enum InvoiceCommand {
    /// Create a new invoice with the next number
    New {
        #[arg(long)]
        customer: String,

        #[arg(long, default_value = "")]
        address: String,

        #[arg(long, default_value = "")]
        contact: String,

        /// Invoice date (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Line items in format "name:quantity:price[:tax%]" (can be repeated)
        #[arg(short, long, value_name = "NAME:QTY:PRICE[:TAX]")]
        item: Vec<String>,

        #[arg(long, default_value = "Unpaid")]
        status: String,

        #[arg(long, default_value = "")]
        notes: String,

        /// Also write the printable document
        #[arg(long)]
        print: bool,
    },

    /// Write the printable document for an existing invoice
    Print {
        /// Invoice number (e.g., INV-0001)
        invoice: String,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    books::init_tracing(cli.verbose);

    // Determine config directory
    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::Dashboard { recent } => cmd_dashboard(&cfg_dir, recent),
        Commands::Income(args) => cmd_records(&cfg_dir, RecordKind::Income, args),
        Commands::Expenses(args) => cmd_records(&cfg_dir, RecordKind::Expense, args),
        Commands::Invoices {
            list,
            status,
            reminders,
        } => cmd_invoices(&cfg_dir, list, status, reminders),
        Commands::Invoice { action } => match action {
            InvoiceCommand::New {
                customer,
                address,
                contact,
                date,
                item,
                status,
                notes,
                print,
            } => cmd_invoice_new(
                &cfg_dir,
                NewInvoice {
                    customer,
                    address,
                    contact,
                    date,
                    items: item,
                    status,
                    notes,
                },
                print,
            ),
            InvoiceCommand::Print { invoice } => cmd_invoice_print(&cfg_dir, &invoice),
        },
        Commands::Ledger { list, account_type } => cmd_ledger(&cfg_dir, list, account_type),
        Commands::BalanceSheet { export } => cmd_balance_sheet(&cfg_dir, export),
        Commands::ProfitLoss { period, export } => cmd_profit_loss(&cfg_dir, &period, export),
        Commands::CashFlow { view, export } => {
            let view = match view {
                ViewArg::Monthly => CashFlowView::Monthly,
                ViewArg::Quarterly => CashFlowView::Quarterly,
            };
            cmd_cash_flow(&cfg_dir, view, export)
        }
    }
}

/// Config and seed data for one command
struct Books {
    cfg_dir: PathBuf,
    config: Config,
    seed: SeedData,
}

impl Books {
    fn load(cfg_dir: &Path) -> Result<Self> {
        if !cfg_dir.exists() {
            return Err(BooksError::ConfigNotFound(cfg_dir.to_path_buf()));
        }
        Ok(Self {
            cfg_dir: cfg_dir.to_path_buf(),
            config: load_config(cfg_dir)?,
            seed: load_seed(cfg_dir)?,
        })
    }

    fn symbol(&self) -> &str {
        &self.config.display.currency_symbol
    }

    fn money(&self, value: Decimal) -> String {
        money(value, self.symbol())
    }

    fn output_dir(&self) -> PathBuf {
        resolve_output_dir(&self.config.export.output_dir, &self.cfg_dir)
    }

    fn export(&self, table: ExportTable, format: ExportFormat) -> Result<()> {
        let sink = format.sink(self.symbol());
        let path = export_to_dir(&table, sink.as_ref(), &self.output_dir())?;
        println!("Exported {} rows to {}", table.rows.len(), path.display());
        Ok(())
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Initialize config directory with template files
fn cmd_init(cfg_dir: &Path) -> Result<()> {
    init_config_dir(cfg_dir)?;

    println!("Initialized books config at: {}", cfg_dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Adjust display settings:  $EDITOR {}/config.toml",
        cfg_dir.display()
    );
    println!(
        "  2. Replace the sample data:  $EDITOR {}/seed.toml",
        cfg_dir.display()
    );
    println!();
    println!("Then open the dashboard:");
    println!("  books dashboard");

    Ok(())
}

// Table row structs for tabled
#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "S.NO")]
    index: usize,
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "CATEGORY")]
    category: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
    #[tabled(rename = "PAYMENT METHOD")]
    payment_method: String,
}

#[derive(Tabled)]
struct InvoiceRow {
    #[tabled(rename = "S.NO")]
    index: usize,
    #[tabled(rename = "NUMBER")]
    number: String,
    #[tabled(rename = "CUSTOMER")]
    customer: String,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "TOTAL")]
    total: String,
    #[tabled(rename = "STATUS")]
    status: String,
}

#[derive(Tabled)]
struct LedgerRow {
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "ACCOUNT")]
    account: String,
    #[tabled(rename = "TYPE")]
    account_type: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "DEBIT")]
    debit: String,
    #[tabled(rename = "CREDIT")]
    credit: String,
}

#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "ITEM")]
    name: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
}

#[derive(Tabled)]
struct CashFlowTableRow {
    #[tabled(rename = "PERIOD")]
    period: String,
    #[tabled(rename = "INFLOWS")]
    inflows: String,
    #[tabled(rename = "OUTFLOWS")]
    outflows: String,
    #[tabled(rename = "NET CASH FLOW")]
    net: String,
}

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
    #[tabled(rename = "TYPE")]
    kind: String,
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "ITEM")]
    name: String,
    #[tabled(rename = "QTY")]
    quantity: u32,
    #[tabled(rename = "PRICE")]
    price: String,
    #[tabled(rename = "TAX")]
    tax: String,
    #[tabled(rename = "LINE TOTAL")]
    total: String,
}

fn print_table<T: Tabled>(rows: Vec<T>) {
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
}

/// Build the list state the way a user would: set each filter, then page
fn list_state<T: Filterable>(
    records: &[T],
    page_size: usize,
    list: &ListArgs,
    category: &str,
    method: &str,
) -> ListState {
    let actions = [
        ListAction::SetStartDate(list.from.clone().unwrap_or_default()),
        ListAction::SetEndDate(list.to.clone().unwrap_or_default()),
        ListAction::SetCategory(category.to_string()),
        ListAction::SetPaymentMethod(method.to_string()),
        ListAction::SetSearch(list.search.clone()),
        ListAction::GoToPage(list.page),
    ];

    actions
        .into_iter()
        .fold(ListState::with_page_size(page_size), |state, action| {
            state.apply_to(records, action)
        })
}

fn print_footer<T>(page: &Page<'_, T>) {
    let (first, last) = page.showing();
    println!(
        "Showing {} to {} of {} entries (page {} of {})",
        first,
        last,
        page.total_items,
        page.page_index,
        page.total_pages.max(1)
    );
}

/// Net amount with its direction: "+ $10.00" / "- $3.00", coloured on a tty
fn styled_net(row: &CashFlowRow, symbol: &str) -> String {
    let text = format!(
        "{} {}",
        row.direction.marker(),
        money(row.display_net(), symbol)
    );
    if !std::io::stdout().is_terminal() {
        return text;
    }
    match row.direction {
        FlowDirection::Inflow => format!("\x1b[32m{text}\x1b[0m"),
        FlowDirection::Outflow => format!("\x1b[31m{text}\x1b[0m"),
    }
}

/// Key metrics and recent transactions
fn cmd_dashboard(cfg_dir: &Path, recent: usize) -> Result<()> {
    let books = Books::load(cfg_dir)?;
    let dashboard = Dashboard::new(&books.seed.income, &books.seed.expenses, recent);

    println!("Dashboard");
    println!("{}", "-".repeat(50));
    println!("Total Income:   {}", books.money(dashboard.metrics.total_income));
    println!("Total Expense:  {}", books.money(dashboard.metrics.total_expense));
    println!("Net Profit:     {}", books.money(dashboard.metrics.net_profit));

    if dashboard.recent.is_empty() {
        return Ok(());
    }

    println!();
    println!("Recent transactions:");
    let rows: Vec<TransactionRow> = dashboard
        .recent
        .iter()
        .map(|t| TransactionRow {
            date: short_date(t.date),
            description: t.description.clone(),
            amount: books.money(t.amount),
            kind: t.kind.as_str().to_string(),
        })
        .collect();
    print_table(rows);
    println!("Net of recent: {}", books.money(dashboard.recent_net()));

    Ok(())
}

fn print_record_details(books: &Books, record: &Record) {
    println!("Date:            {}", long_date(record.date));
    println!("Category:        {}", record.category);
    println!("Amount:          {}", books.money(record.amount));
    println!(
        "Payment Method:  {}",
        record.payment_method.as_deref().unwrap_or("-")
    );
    println!("Notes:           {}", record.notes.as_deref().unwrap_or("-"));
}

/// List income or expense entries
fn cmd_records(cfg_dir: &Path, kind: RecordKind, args: RecordArgs) -> Result<()> {
    let books = Books::load(cfg_dir)?;
    let records = match kind {
        RecordKind::Income => &books.seed.income,
        RecordKind::Expense => &books.seed.expenses,
    };

    if let Some(action) = args.action {
        return cmd_record_form(&books, kind, records, action);
    }

    if let Some(id) = args.show {
        let record = SeedData::find_record(records, id)?;
        print_record_details(&books, record);
        return Ok(());
    }

    let state = list_state(
        records,
        books.config.display.page_size,
        &args.list,
        &args.category,
        &args.method,
    );
    let filtered = filter_records(records, &state.filter);

    if let Some(format) = args.list.export {
        return books.export(record_table(&filtered, kind, today())?, format);
    }

    let page = state.view(&filtered);
    let label = match kind {
        RecordKind::Income => "Total Income",
        RecordKind::Expense => "Total Expenses",
    };

    println!("{}", kind.title());
    println!("{}: {}", label, books.money(sum(&filtered, |r| r.amount)));
    println!(
        "Categories: {}",
        SeedData::categories(records).join(", ")
    );

    if page.items.is_empty() {
        println!("No entries match the current filters.");
        return Ok(());
    }

    let offset = (page.page_index - 1) * page.page_size;
    let rows: Vec<RecordRow> = page
        .items
        .iter()
        .enumerate()
        .map(|(i, r)| RecordRow {
            index: offset + i + 1,
            id: r.id,
            date: short_date(r.date),
            category: r.category.clone(),
            amount: books.money(r.amount),
            payment_method: r.payment_method.clone().unwrap_or_default(),
        })
        .collect();
    print_table(rows);
    print_footer(&page);

    Ok(())
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| BooksError::InvalidDate(value.to_string()))
}

/// Turn form input into draft edits; unset options leave the field alone
fn record_fields(input: RecordInput) -> Result<Vec<RecordField>> {
    let mut fields = Vec::new();
    if let Some(date) = input.date {
        fields.push(RecordField::Date(parse_date(&date)?));
    }
    if let Some(amount) = input.amount {
        fields.push(RecordField::Amount(parse_decimal("amount", &amount)?));
    }
    if let Some(category) = input.category {
        fields.push(RecordField::Category(category));
    }
    if let Some(method) = input.method {
        fields.push(RecordField::PaymentMethod(method));
    }
    if let Some(notes) = input.notes {
        fields.push(RecordField::Notes(notes));
    }
    Ok(fields)
}

/// Add or edit an income/expense entry without saving it
fn cmd_record_form(
    books: &Books,
    kind: RecordKind,
    records: &[Record],
    action: RecordCommand,
) -> Result<()> {
    let (draft, input, verb) = match action {
        RecordCommand::Add(input) => (
            RecordDraft::new().apply(RecordField::Date(today())),
            input,
            "New",
        ),
        RecordCommand::Edit { id, input } => (
            RecordDraft::edit(SeedData::find_record(records, id)?),
            input,
            "Edited",
        ),
    };

    let record = record_fields(input)?
        .into_iter()
        .fold(draft, RecordDraft::apply)
        .finalize(SeedData::next_record_id(records))?;
    info!(id = record.id, kind = kind.label(), "record form accepted");

    println!("{} {} entry #{} (not saved)", verb, kind.label().to_lowercase(), record.id);
    print_record_details(books, &record);
    Ok(())
}

/// List invoices
fn cmd_invoices(cfg_dir: &Path, list: ListArgs, status: String, reminders: bool) -> Result<()> {
    let books = Books::load(cfg_dir)?;
    let invoices = &books.seed.invoices;

    let state = list_state(
        invoices,
        books.config.display.page_size,
        &list,
        &status,
        ALL,
    );
    let filtered = filter_records(invoices, &state.filter);

    if reminders {
        let unpaid: Vec<_> = filtered
            .iter()
            .filter(|i| i.status == InvoiceStatus::Unpaid)
            .collect();
        println!("Sending reminders for {} unpaid invoice(s):", unpaid.len());
        for invoice in unpaid {
            info!(invoice = %invoice.invoice_number, "payment reminder queued");
            println!(
                "  {} - {} - {}",
                invoice.invoice_number,
                invoice.customer_name,
                books.money(invoice.total())
            );
        }
        return Ok(());
    }

    if let Some(format) = list.export {
        return books.export(invoice_table(&filtered, today())?, format);
    }

    println!("Invoice List");
    println!(
        "Total Amount: {}",
        books.money(sum(&filtered, |i| i.total()))
    );

    let page = state.view(&filtered);
    if page.items.is_empty() {
        println!("No invoices match the current filters.");
        return Ok(());
    }

    let offset = (page.page_index - 1) * page.page_size;
    let rows: Vec<InvoiceRow> = page
        .items
        .iter()
        .enumerate()
        .map(|(i, inv)| InvoiceRow {
            index: offset + i + 1,
            number: inv.invoice_number.clone(),
            customer: inv.customer_name.clone(),
            date: short_date(inv.date),
            total: books.money(inv.total()),
            status: inv.status.to_string(),
        })
        .collect();
    print_table(rows);
    print_footer(&page);

    Ok(())
}

struct NewInvoice {
    customer: String,
    address: String,
    contact: String,
    date: Option<String>,
    items: Vec<String>,
    status: String,
    notes: String,
}

fn parse_decimal(field: &str, value: &str) -> Result<Decimal> {
    value
        .trim()
        .parse::<Decimal>()
        .map_err(|_| BooksError::InvalidAmount {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Parse item input like "Design:2:100:10" into (name, quantity, price, tax)
fn parse_item_input(input: &str) -> Result<(String, u32, Decimal, Decimal)> {
    let parts: Vec<&str> = input.split(':').collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(BooksError::InvalidItemFormat(input.to_string()));
    }

    let quantity: u32 = parts[1].trim().parse().map_err(|_| BooksError::InvalidAmount {
        field: "quantity".to_string(),
        value: parts[1].to_string(),
    })?;
    let price = parse_decimal("price", parts[2])?;
    let tax = match parts.get(3) {
        Some(tax) => parse_decimal("tax", tax)?,
        None => Decimal::ZERO,
    };

    Ok((parts[0].trim().to_string(), quantity, price, tax))
}

fn parse_status(value: &str) -> Result<InvoiceStatus> {
    match value.to_ascii_lowercase().as_str() {
        "paid" => Ok(InvoiceStatus::Paid),
        "unpaid" => Ok(InvoiceStatus::Unpaid),
        _ => Err(BooksError::Validation(vec![FieldError::new(
            "status",
            format!("'{value}' is not Paid or Unpaid"),
        )])),
    }
}

/// Create a new invoice
fn cmd_invoice_new(cfg_dir: &Path, input: NewInvoice, print: bool) -> Result<()> {
    let books = Books::load(cfg_dir)?;
    let mut state = load_state(cfg_dir)?;

    let date = match input.date {
        Some(s) => parse_date(&s)?,
        None => today(),
    };

    let mut actions = vec![
        DraftAction::Set(DraftField::CustomerName(input.customer)),
        DraftAction::Set(DraftField::CustomerAddress(input.address)),
        DraftAction::Set(DraftField::CustomerContact(input.contact)),
        DraftAction::Set(DraftField::Date(date)),
        DraftAction::Set(DraftField::Status(parse_status(&input.status)?)),
        DraftAction::Set(DraftField::Notes(input.notes)),
    ];
    for (index, raw) in input.items.iter().enumerate() {
        let (name, quantity, price, tax) = parse_item_input(raw)?;
        actions.push(DraftAction::AddItem);
        actions.push(DraftAction::UpdateItem(index, ItemField::Name(name)));
        actions.push(DraftAction::UpdateItem(index, ItemField::Quantity(quantity)));
        actions.push(DraftAction::UpdateItem(index, ItemField::Price(price)));
        actions.push(DraftAction::UpdateItem(index, ItemField::Tax(tax)));
    }

    let draft = actions
        .into_iter()
        .fold(InvoiceDraft::new(), InvoiceDraft::apply);

    let mut numbers =
        SequentialNumbers::from_state(books.config.invoice.number_format.as_str(), &state)
            .skipping(books.seed.invoices.iter().map(|i| i.invoice_number.as_str()));
    let invoice = draft.finalize(books.seed.next_invoice_id(), &mut numbers)?;

    state.counter.last_number = numbers.last();
    save_state(cfg_dir, &state)?;

    println!("Created {}", invoice.invoice_number);
    println!("  Customer: {}", invoice.customer_name);
    println!("  Date:     {}", long_date(invoice.date));
    let rows: Vec<ItemRow> = invoice
        .items
        .iter()
        .map(|item| ItemRow {
            name: item.name.clone(),
            quantity: item.quantity,
            price: books.money(item.price),
            tax: format!("{}%", item.tax.normalize()),
            total: books.money(item.total()),
        })
        .collect();
    print_table(rows);
    println!("  Total:    {}", books.money(invoice.total()));

    if print {
        match write_printable(&invoice, books.symbol(), &books.output_dir()) {
            Ok(path) => println!("  Printable: {}", path.display()),
            Err(e @ BooksError::PrintTargetUnavailable(_)) => {
                warn!(error = %e, "printable invoice skipped");
                eprintln!("Warning: {e}");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Write the printable document for an existing invoice
fn cmd_invoice_print(cfg_dir: &Path, number: &str) -> Result<()> {
    let books = Books::load(cfg_dir)?;
    let invoice = books.seed.find_invoice(number)?;
    let path = write_printable(invoice, books.symbol(), &books.output_dir())?;

    println!("Printable {} ({})", invoice.invoice_number, books.money(invoice.total()));
    println!("  Saved: {}", path.display());
    Ok(())
}

/// General ledger
fn cmd_ledger(cfg_dir: &Path, list: ListArgs, account_type: String) -> Result<()> {
    let books = Books::load(cfg_dir)?;
    let entries = &books.seed.ledger;

    if account_type != ALL && !AccountType::ALL.iter().any(|t| t.as_str() == account_type) {
        warn!(%account_type, "unknown account type, nothing will match");
    }

    let state = list_state(
        entries,
        books.config.display.page_size,
        &list,
        &account_type,
        ALL,
    );
    let filtered = filter_records(entries, &state.filter);

    if let Some(format) = list.export {
        return books.export(ledger_table(&filtered, today())?, format);
    }

    println!("Ledger");
    let page = state.view(&filtered);
    if page.items.is_empty() {
        println!("No ledger entries match the current filters.");
        return Ok(());
    }

    let rows: Vec<LedgerRow> = page
        .items
        .iter()
        .map(|e| LedgerRow {
            date: short_date(e.date),
            account: e.account.clone(),
            account_type: e.account_type.to_string(),
            description: e.description.clone(),
            debit: books.money(e.debit),
            credit: books.money(e.credit),
        })
        .collect();
    print_table(rows);
    print_footer(&page);

    let totals = LedgerTotals::new(&filtered);
    println!(
        "Total Debit: {}   Total Credit: {}",
        books.money(totals.debit),
        books.money(totals.credit)
    );

    Ok(())
}

fn print_group(books: &Books, title: &str, lines: &[StatementLine], total_label: &str, total: Decimal) {
    println!("{title}");
    let mut rows: Vec<LineRow> = lines
        .iter()
        .map(|l| LineRow {
            name: l.name.clone(),
            amount: books.money(l.amount),
        })
        .collect();
    rows.push(LineRow {
        name: total_label.to_string(),
        amount: books.money(total),
    });
    print_table(rows);
}

/// Balance sheet
fn cmd_balance_sheet(cfg_dir: &Path, export: Option<ExportFormat>) -> Result<()> {
    let books = Books::load(cfg_dir)?;
    let data = &books.seed.balance_sheet;

    if let Some(format) = export {
        return books.export(balance_sheet_table(data, today())?, format);
    }

    let sheet = BalanceSheet::new(data);
    println!("Balance Sheet");
    println!("As of {}", long_date(today()));
    print_group(&books, "Assets", &data.assets, "Total Assets", sheet.total_assets);
    print_group(
        &books,
        "Liabilities",
        &data.liabilities,
        "Total Liabilities",
        sheet.total_liabilities,
    );
    print_group(&books, "Equity", &data.equity, "Total Equity", sheet.total_equity);
    println!(
        "Total Liabilities and Equity: {}",
        books.money(sheet.total_liabilities_and_equity())
    );

    if sheet.is_balanced() {
        println!("Balanced: assets equal liabilities plus equity");
    } else {
        println!(
            "Out of balance by {}",
            books.money(sheet.difference().abs())
        );
    }

    Ok(())
}

/// Profit & loss statement
fn cmd_profit_loss(cfg_dir: &Path, period: &str, export: Option<ExportFormat>) -> Result<()> {
    let books = Books::load(cfg_dir)?;
    let data = &books.seed.profit_loss;

    if !PERIODS.contains(&period) {
        warn!(period, "period is not one of the standard reporting periods");
    }

    if let Some(format) = export {
        return books.export(profit_loss_table(data, period, today())?, format);
    }

    let pnl = ProfitLoss::new(data);
    println!("Profit & Loss Statement");
    println!("Period: {period}");
    print_group(&books, "Revenue", &data.revenue, "Total Revenue", pnl.total_revenue);
    print_group(
        &books,
        "Expenses",
        &data.expenses,
        "Total Expenses",
        pnl.total_expenses,
    );

    let label = if pnl.is_profit() { "Net Profit" } else { "Net Loss" };
    println!("{}: {}", label, books.money(pnl.net_profit()));

    Ok(())
}

/// Cash flow statement
fn cmd_cash_flow(cfg_dir: &Path, view: CashFlowView, export: Option<ExportFormat>) -> Result<()> {
    let books = Books::load(cfg_dir)?;
    let cash_flow = CashFlow::new(&books.seed.cash_flow, view);

    if let Some(format) = export {
        return books.export(cash_flow_table(&cash_flow, today())?, format);
    }

    println!("Cash Flow Statement");
    println!("View: {}", view.label());

    let rows: Vec<CashFlowTableRow> = cash_flow
        .rows
        .iter()
        .map(|row| CashFlowTableRow {
            period: match view {
                CashFlowView::Monthly => period_label(&row.period),
                CashFlowView::Quarterly => row.period.clone(),
            },
            inflows: books.money(row.inflows),
            outflows: books.money(row.outflows),
            net: styled_net(row, books.symbol()),
        })
        .collect();
    print_table(rows);
    println!(
        "Net Cash Flow: {}",
        books.money(cash_flow.net_cash_flow())
    );

    Ok(())
}
