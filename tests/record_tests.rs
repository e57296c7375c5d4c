use books::models::Record;
use books::{BooksError, RecordDraft, RecordField};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn filled_draft() -> RecordDraft {
    [
        RecordField::Date(date("2023-07-01")),
        RecordField::Amount(dec!(250)),
        RecordField::Category("Freelance".to_string()),
        RecordField::PaymentMethod("PayPal".to_string()),
        RecordField::Notes("Logo design".to_string()),
    ]
    .into_iter()
    .fold(RecordDraft::new(), RecordDraft::apply)
}

fn stored() -> Record {
    Record {
        id: 5,
        date: date("2023-05-20"),
        category: "Freelance".to_string(),
        amount: dec!(1500),
        payment_method: Some("PayPal".to_string()),
        notes: Some("Mobile app development".to_string()),
    }
}

fn messages(draft: &RecordDraft) -> Vec<String> {
    draft.validate().iter().map(ToString::to_string).collect()
}

#[test]
fn test_empty_draft_reports_every_missing_field() {
    assert_eq!(
        messages(&RecordDraft::new()),
        vec!["date: is required", "amount: is required", "category: is required"]
    );
}

#[test]
fn test_amount_must_be_positive() {
    for amount in [dec!(0), dec!(-5)] {
        let draft = filled_draft().apply(RecordField::Amount(amount));
        assert_eq!(messages(&draft), vec!["amount: must be greater than zero"], "{amount}");
    }
}

#[test]
fn test_amount_is_bounded() {
    let draft = filled_draft().apply(RecordField::Amount(dec!(1000000000000000.01)));
    assert_eq!(messages(&draft), vec!["amount: is too large"]);

    let draft = filled_draft().apply(RecordField::Amount(dec!(1000000000000000)));
    assert!(draft.validate().is_empty());
}

#[test]
fn test_blank_category_is_missing() {
    let draft = filled_draft().apply(RecordField::Category("   ".to_string()));
    assert_eq!(messages(&draft), vec!["category: is required"]);
}

#[test]
fn test_finalize_new_entry() {
    let record = filled_draft().finalize(13).unwrap();

    assert_eq!(record.id, 13);
    assert_eq!(record.date, date("2023-07-01"));
    assert_eq!(record.amount, dec!(250));
    assert_eq!(record.category, "Freelance");
    assert_eq!(record.payment_method.as_deref(), Some("PayPal"));
    assert_eq!(record.notes.as_deref(), Some("Logo design"));
}

#[test]
fn test_finalize_trims_and_drops_blank_optionals() {
    let record = filled_draft()
        .apply(RecordField::Category("  Salary ".to_string()))
        .apply(RecordField::PaymentMethod(String::new()))
        .apply(RecordField::Notes("  ".to_string()))
        .finalize(1)
        .unwrap();

    assert_eq!(record.category, "Salary");
    assert!(record.payment_method.is_none());
    assert!(record.notes.is_none());
}

#[test]
fn test_invalid_draft_is_not_finalized() {
    match RecordDraft::new().apply(RecordField::Amount(dec!(10))).finalize(1) {
        Err(BooksError::Validation(errors)) => {
            let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, vec!["date", "category"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_edit_starts_from_stored_entry() {
    let record = stored();
    let draft = RecordDraft::edit(&record);

    assert_eq!(draft.id, Some(5));
    assert_eq!(draft.payment_method, "PayPal");
    assert_eq!(draft.finalize(99).unwrap(), record);
}

#[test]
fn test_edit_keeps_id_and_untouched_fields() {
    let edited = RecordDraft::edit(&stored())
        .apply(RecordField::Amount(dec!(1750)))
        .finalize(99)
        .unwrap();

    assert_eq!(edited.id, 5);
    assert_eq!(edited.amount, dec!(1750));
    assert_eq!(edited.date, date("2023-05-20"));
    assert_eq!(edited.notes.as_deref(), Some("Mobile app development"));
}
