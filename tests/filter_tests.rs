use books::listing::{
    filter_records, paginate, total_pages, DateBound, FilterState, ListAction, ListState, ALL,
};
use books::models::{AccountType, Invoice, InvoiceStatus, LedgerEntry, LineItem, Record};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn record(id: u32, day: &str, category: &str, amount: Decimal, method: Option<&str>) -> Record {
    Record {
        id,
        date: date(day),
        category: category.to_string(),
        amount,
        payment_method: method.map(String::from),
        notes: None,
    }
}

fn sample_records() -> Vec<Record> {
    vec![
        record(1, "2023-05-01", "Salary", dec!(5000), Some("Bank Transfer")),
        record(2, "2023-05-05", "Freelance", dec!(1000), Some("PayPal")),
        record(3, "2023-05-10", "Investment", dec!(500), Some("Bank Transfer")),
        record(4, "2023-05-15", "Salary", dec!(5000), Some("Bank Transfer")),
        record(5, "2023-05-20", "Freelance", dec!(1500), Some("PayPal")),
        record(6, "2023-05-25", "Investment", dec!(750), None),
        record(7, "2023-06-01", "Freelance", dec!(2000), Some("PayPal")),
    ]
}

fn ids(records: &[&Record]) -> Vec<u32> {
    records.iter().map(|r| r.id).collect()
}

fn filter(start: &str, end: &str, category: &str, method: &str, search: &str) -> FilterState {
    FilterState {
        start_date: DateBound::parse(start),
        end_date: DateBound::parse(end),
        category: category.to_string(),
        payment_method: method.to_string(),
        search_term: search.to_string(),
    }
}

#[test]
fn test_default_filter_keeps_everything_in_order() {
    let records = sample_records();
    let kept = filter_records(&records, &FilterState::default());
    assert_eq!(ids(&kept), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_date_range_is_inclusive() {
    let records = sample_records();
    let kept = filter_records(&records, &filter("2023-05-05", "2023-05-15", ALL, ALL, ""));
    assert_eq!(ids(&kept), vec![2, 3, 4]);
}

#[test]
fn test_single_bound_only_constrains_one_side() {
    let records = sample_records();

    let from = filter_records(&records, &filter("2023-05-20", "", ALL, ALL, ""));
    assert_eq!(ids(&from), vec![5, 6, 7]);

    let to = filter_records(&records, &filter("", "2023-05-05", ALL, ALL, ""));
    assert_eq!(ids(&to), vec![1, 2]);
}

#[test]
fn test_malformed_bound_matches_nothing() {
    let records = sample_records();
    assert!(filter_records(&records, &filter("2023-13-45", "", ALL, ALL, "")).is_empty());
    assert!(filter_records(&records, &filter("", "yesterday", ALL, ALL, "")).is_empty());
}

#[test]
fn test_blank_bound_parses_to_none() {
    assert_eq!(DateBound::parse(""), None);
    assert_eq!(DateBound::parse("   "), None);
    assert_eq!(
        DateBound::parse("2023-05-01"),
        Some(DateBound::On(date("2023-05-01")))
    );
    assert_eq!(
        DateBound::parse("05/01/2023"),
        Some(DateBound::Malformed("05/01/2023".to_string()))
    );
}

#[test]
fn test_category_and_method_filters() {
    let records = sample_records();

    let salary = filter_records(&records, &filter("", "", "Salary", ALL, ""));
    assert_eq!(ids(&salary), vec![1, 4]);

    let paypal = filter_records(&records, &filter("", "", ALL, "PayPal", ""));
    assert_eq!(ids(&paypal), vec![2, 5, 7]);

    let both = filter_records(&records, &filter("", "", "Investment", "Bank Transfer", ""));
    assert_eq!(ids(&both), vec![3]);
}

#[test]
fn test_specific_method_excludes_records_without_one() {
    let records = sample_records();
    let kept = filter_records(&records, &filter("", "", "Investment", "Cash", ""));
    assert!(kept.is_empty());
}

#[test]
fn test_search_is_case_insensitive_over_category_and_method() {
    let records = sample_records();

    let by_method = filter_records(&records, &filter("", "", ALL, ALL, "paypal"));
    assert_eq!(ids(&by_method), vec![2, 5, 7]);

    let by_category = filter_records(&records, &filter("", "", ALL, ALL, "INVEST"));
    assert_eq!(ids(&by_category), vec![3, 6]);

    let by_partial = filter_records(&records, &filter("", "", ALL, ALL, "transf"));
    assert_eq!(ids(&by_partial), vec![1, 3, 4]);
}

#[test]
fn test_date_clause_does_not_change_other_clauses() {
    let records = sample_records();
    let cases = [
        (ALL, ALL, ""),
        ("Salary", ALL, ""),
        (ALL, "PayPal", ""),
        (ALL, ALL, "invest"),
        ("Freelance", "PayPal", "pay"),
    ];

    for (category, method, search) in cases {
        let undated = filter_records(&records, &filter("", "", category, method, search));
        let expected: Vec<u32> = records
            .iter()
            .filter(|r| category == ALL || r.category == category)
            .filter(|r| method == ALL || r.payment_method.as_deref() == Some(method))
            .filter(|r| {
                let needle = search.to_lowercase();
                r.category.to_lowercase().contains(&needle)
                    || r.payment_method
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(&needle)
            })
            .map(|r| r.id)
            .collect();
        assert_eq!(ids(&undated), expected, "category={category} method={method}");
    }
}

#[test]
fn test_filter_leaves_source_untouched() {
    let records = sample_records();
    let before = records.clone();
    let _ = filter_records(&records, &filter("2023-05-10", "", "Salary", ALL, "bank"));
    assert_eq!(records, before);
}

#[test]
fn test_invoices_filter_by_status_and_search_number() {
    let invoice = |id: u32, number: &str, customer: &str, status: InvoiceStatus| Invoice {
        id,
        invoice_number: number.to_string(),
        customer_name: customer.to_string(),
        customer_address: String::new(),
        customer_contact: String::new(),
        date: date("2023-05-01"),
        items: vec![LineItem::new("Work", 1, dec!(100), dec!(0))],
        status,
        notes: String::new(),
    };
    let invoices = vec![
        invoice(1, "INV-0001", "John Doe", InvoiceStatus::Paid),
        invoice(2, "INV-0002", "Jane Smith", InvoiceStatus::Unpaid),
        invoice(3, "INV-0003", "Bob Johnson", InvoiceStatus::Unpaid),
    ];

    let unpaid = filter_records(&invoices, &filter("", "", "Unpaid", ALL, ""));
    assert_eq!(unpaid.len(), 2);

    let by_number = filter_records(&invoices, &filter("", "", ALL, ALL, "inv-0003"));
    assert_eq!(by_number.len(), 1);
    assert_eq!(by_number[0].customer_name, "Bob Johnson");

    let by_customer = filter_records(&invoices, &filter("", "", ALL, ALL, "jane"));
    assert_eq!(by_customer[0].invoice_number, "INV-0002");
}

#[test]
fn test_ledger_filter_by_type_and_description() {
    let entry = |id: u32, account: &str, account_type: AccountType, description: &str| LedgerEntry {
        id,
        date: date("2023-06-01"),
        account: account.to_string(),
        account_type,
        description: description.to_string(),
        debit: dec!(100),
        credit: dec!(0),
    };
    let entries = vec![
        entry(1, "Cash", AccountType::Asset, "Initial balance"),
        entry(2, "Sales Revenue", AccountType::Income, "Service rendered"),
        entry(3, "Salaries", AccountType::Expense, "Monthly payroll"),
    ];

    let assets = filter_records(&entries, &filter("", "", "Asset", ALL, ""));
    assert_eq!(assets.len(), 1);

    let payroll = filter_records(&entries, &filter("", "", ALL, ALL, "PAYROLL"));
    assert_eq!(payroll[0].id, 3);
}

#[test]
fn test_total_pages() {
    assert_eq!(total_pages(0, 5), 0);
    assert_eq!(total_pages(1, 5), 1);
    assert_eq!(total_pages(5, 5), 1);
    assert_eq!(total_pages(6, 5), 2);
    assert_eq!(total_pages(12, 5), 3);
}

#[test]
fn test_pages_concatenate_to_filtered_set() {
    let items: Vec<u32> = (1..=12).collect();
    for page_size in 1..=13 {
        let pages = total_pages(items.len(), page_size);
        let mut rebuilt = Vec::new();
        for index in 1..=pages {
            let page = paginate(&items, index, page_size);
            assert!(page.items.len() <= page_size);
            rebuilt.extend_from_slice(page.items);
        }
        assert_eq!(rebuilt, items, "page_size={page_size}");
    }
}

#[test]
fn test_page_index_is_clamped() {
    let items: Vec<u32> = (1..=12).collect();

    let past_end = paginate(&items, 99, 5);
    assert_eq!(past_end.page_index, 3);
    assert_eq!(past_end.items, &[11, 12]);
    assert_eq!(past_end.showing(), (11, 12));

    let before_start = paginate(&items, 0, 5);
    assert_eq!(before_start.page_index, 1);
    assert_eq!(before_start.items, &[1, 2, 3, 4, 5]);
}

#[test]
fn test_empty_list_has_one_empty_page() {
    let items: Vec<u32> = Vec::new();
    let page = paginate(&items, 4, 5);
    assert_eq!(page.page_index, 1);
    assert_eq!(page.total_pages, 0);
    assert!(page.items.is_empty());
    assert_eq!(page.showing(), (0, 0));
    assert!(!page.has_next());
    assert!(!page.has_previous());
}

#[test]
fn test_every_filter_change_resets_page() {
    let records = sample_records();
    let on_page_two = || {
        ListState::with_page_size(2)
            .apply_to(&records, ListAction::NextPage)
    };
    assert_eq!(on_page_two().page_index, 2);

    let changes = [
        ListAction::SetStartDate("2023-05-01".to_string()),
        ListAction::SetEndDate("2023-06-30".to_string()),
        ListAction::SetCategory("Freelance".to_string()),
        ListAction::SetPaymentMethod("PayPal".to_string()),
        ListAction::SetSearch("pay".to_string()),
        ListAction::SetSearch(String::new()),
    ];
    for action in changes {
        let state = on_page_two().apply_to(&records, action.clone());
        assert_eq!(state.page_index, 1, "{action:?}");
    }
}

#[test]
fn test_page_navigation_stays_in_range() {
    let records = sample_records();
    let mut state = ListState::with_page_size(3);

    state = state.apply_to(&records, ListAction::PreviousPage);
    assert_eq!(state.page_index, 1);

    for _ in 0..5 {
        state = state.apply_to(&records, ListAction::NextPage);
    }
    assert_eq!(state.page_index, 3);

    state = state.apply_to(&records, ListAction::GoToPage(10));
    assert_eq!(state.page_index, 3);

    state = state.apply_to(&records, ListAction::GoToPage(0));
    assert_eq!(state.page_index, 1);
}

#[test]
fn test_next_page_on_empty_result_stays_on_first() {
    let records = sample_records();
    let state = ListState::with_page_size(3)
        .apply_to(&records, ListAction::SetCategory("Gifts".to_string()))
        .apply_to(&records, ListAction::NextPage);
    assert_eq!(state.page_index, 1);

    let filtered = filter_records(&records, &state.filter);
    let page = state.view(&filtered);
    assert!(page.items.is_empty());
}

#[test]
fn test_view_shows_current_page_of_filtered_records() {
    let records = sample_records();
    let state = ListState::with_page_size(2)
        .apply_to(&records, ListAction::SetPaymentMethod("Bank Transfer".to_string()))
        .apply_to(&records, ListAction::NextPage);

    let filtered = filter_records(&records, &state.filter);
    let page = state.view(&filtered);
    assert_eq!(page.page_index, 2);
    assert_eq!(page.total_items, 3);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, 4);
}
