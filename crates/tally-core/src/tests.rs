use tally_domain::{CategoryFilter, Ledger, TransactionKind};

use crate::{
    export_snapshot, import_snapshot, ledger_warnings, CoreError, SummaryService,
    TransactionDraft, TransactionService,
};

fn draft(
    date: &str,
    description: &str,
    amount: f64,
    kind: TransactionKind,
    category: &str,
) -> TransactionDraft {
    TransactionDraft {
        date: date.into(),
        description: description.into(),
        amount,
        kind,
        category: category.into(),
    }
}

fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    TransactionService::add(
        &mut ledger,
        draft("2024-01-01", "Salary", 1000.0, TransactionKind::Income, "Job"),
    )
    .expect("add salary");
    TransactionService::add(
        &mut ledger,
        draft(
            "2024-01-02",
            "Groceries",
            150.0,
            TransactionKind::Expense,
            "Food",
        ),
    )
    .expect("add groceries");
    ledger
}

#[test]
fn totals_match_the_salary_groceries_scenario() {
    let ledger = sample_ledger();

    let totals = SummaryService::totals(&ledger);
    assert_eq!(totals.income, 1000.0);
    assert_eq!(totals.expense, 150.0);
    assert_eq!(totals.balance, 850.0);

    let breakdown = SummaryService::expense_by_category(&ledger);
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown.get("Food"), Some(&150.0));
}

#[test]
fn balance_equals_income_minus_expense() {
    let mut ledger = sample_ledger();
    TransactionService::add(
        &mut ledger,
        draft("2024-01-03", "Rent", 500.0, TransactionKind::Expense, "Rent"),
    )
    .expect("add rent");

    let totals = SummaryService::totals(&ledger);
    assert_eq!(totals.balance, totals.income - totals.expense);
}

#[test]
fn expense_breakdown_sums_per_category() {
    let mut ledger = Ledger::new();
    for (desc, amount, category) in [
        ("Lunch", 50.0, "Food"),
        ("Dinner", 70.0, "Food"),
        ("Rent", 500.0, "Rent"),
    ] {
        TransactionService::add(
            &mut ledger,
            draft("2024-02-01", desc, amount, TransactionKind::Expense, category),
        )
        .expect("add expense");
    }

    let breakdown = SummaryService::expense_by_category(&ledger);
    assert_eq!(breakdown.get("Food"), Some(&120.0));
    assert_eq!(breakdown.get("Rent"), Some(&500.0));
    assert_eq!(breakdown.len(), 2);
}

#[test]
fn add_assigns_strictly_increasing_ids() {
    let mut ledger = Ledger::new();
    let first = TransactionService::add(
        &mut ledger,
        draft("2024-01-01", "A", 1.0, TransactionKind::Income, "Job"),
    )
    .expect("add first");
    let second = TransactionService::add(
        &mut ledger,
        draft("2024-01-01", "B", 2.0, TransactionKind::Income, "Job"),
    )
    .expect("add second");

    assert!(second > first);
    assert!(ledger_warnings(&ledger).is_empty());
}

#[test]
fn add_then_remove_restores_the_prior_collection() {
    let mut ledger = sample_ledger();
    let before = ledger.clone();

    let id = TransactionService::add(
        &mut ledger,
        draft("2024-01-05", "Cinema", 20.0, TransactionKind::Expense, "Fun"),
    )
    .expect("add cinema");
    assert!(TransactionService::remove(&mut ledger, id));

    assert_eq!(ledger, before);
}

#[test]
fn remove_of_unknown_id_is_a_no_op() {
    let mut ledger = sample_ledger();
    let before = ledger.clone();

    assert!(!TransactionService::remove(&mut ledger, 42));
    assert_eq!(ledger, before);
}

#[test]
fn rejected_drafts_leave_totals_unchanged() {
    let mut ledger = sample_ledger();
    let before = SummaryService::totals(&ledger);

    let rejected = [
        draft("2024-01-04", "Zero", 0.0, TransactionKind::Expense, "Food"),
        draft("2024-01-04", "", 10.0, TransactionKind::Expense, "Food"),
        draft("", "NoDate", 10.0, TransactionKind::Expense, "Food"),
        draft(
            "2024-01-04",
            "NaN",
            f64::NAN,
            TransactionKind::Expense,
            "Food",
        ),
        draft(
            "2024-01-04",
            "Negative",
            -5.0,
            TransactionKind::Expense,
            "Food",
        ),
    ];
    for bad in rejected {
        let err = TransactionService::add(&mut ledger, bad).expect_err("draft must be rejected");
        assert!(matches!(err, CoreError::Validation(_)));
    }

    assert_eq!(SummaryService::totals(&ledger), before);
    assert_eq!(ledger.len(), 2);
}

#[test]
fn filtered_view_all_returns_the_full_collection_in_order() {
    let ledger = sample_ledger();

    let view = SummaryService::filtered_view(&ledger, &CategoryFilter::All);
    assert_eq!(view.len(), ledger.len());
    for (seen, stored) in view.iter().zip(ledger.iter()) {
        assert_eq!(seen.id, stored.id);
    }
}

#[test]
fn filtered_view_restricts_to_one_category() {
    let ledger = sample_ledger();

    let view = SummaryService::filtered_view(&ledger, &CategoryFilter::parse("Food"));
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].description, "Groceries");

    let empty = SummaryService::filtered_view(&ledger, &CategoryFilter::parse("Travel"));
    assert!(empty.is_empty());
}

#[test]
fn begin_edit_leaves_the_ledger_untouched() {
    let ledger = sample_ledger();
    let id = ledger.transactions[1].id;
    let before = ledger.clone();

    let prefill = TransactionService::begin_edit(&ledger, id).expect("draft for known id");
    assert_eq!(prefill.description, "Groceries");
    assert_eq!(ledger, before);

    assert!(TransactionService::begin_edit(&ledger, 42).is_none());
}

#[test]
fn commit_edit_replaces_in_place_keeping_id_and_position() {
    let mut ledger = sample_ledger();
    let id = ledger.transactions[1].id;

    let mut update = TransactionService::begin_edit(&ledger, id).expect("draft");
    update.amount = 175.0;
    update.category = "Household".into();
    assert!(TransactionService::commit_edit(&mut ledger, id, update).expect("commit"));

    let stored = ledger.transaction(id).expect("still present");
    assert_eq!(stored.amount, 175.0);
    assert_eq!(stored.category, "Household");
    assert_eq!(ledger.transactions[1].id, id);
    assert_eq!(ledger.len(), 2);
}

#[test]
fn commit_edit_still_validates_the_draft() {
    let mut ledger = sample_ledger();
    let id = ledger.transactions[0].id;
    let before = ledger.clone();

    let mut update = TransactionService::begin_edit(&ledger, id).expect("draft");
    update.amount = 0.0;
    let err =
        TransactionService::commit_edit(&mut ledger, id, update).expect_err("must be rejected");
    assert!(matches!(err, CoreError::Validation(_)));
    assert_eq!(ledger, before);
}

#[test]
fn export_then_import_round_trips_the_collection() {
    let ledger = sample_ledger();
    let snapshot = export_snapshot(&ledger).expect("export");

    let mut restored = Ledger::new();
    let outcome = import_snapshot(&mut restored, &snapshot).expect("import");
    assert_eq!(outcome.imported, 2);
    assert!(outcome.skipped.is_empty());
    assert_eq!(restored, ledger);
}

#[test]
fn import_rejects_non_json_and_non_array_payloads() {
    let mut ledger = sample_ledger();
    let before = ledger.clone();

    for raw in ["not json", "{\"a\":1}", "42"] {
        let err = import_snapshot(&mut ledger, raw).expect_err("payload must be rejected");
        assert!(matches!(err, CoreError::ImportFormat(_)));
        assert_eq!(ledger, before);
    }
    assert_eq!(SummaryService::totals(&ledger), SummaryService::totals(&before));
}

#[test]
fn import_skips_malformed_elements_and_keeps_the_rest() {
    let mut ledger = sample_ledger();
    let raw = r#"[
        {"id": 1, "date": "2024-03-01", "desc": "Salary", "amount": 900.0, "type": "income", "category": "Job"},
        {"id": 2, "desc": "missing fields"},
        {"id": 3, "date": "2024-03-02", "desc": "Zero", "amount": 0.0, "type": "expense", "category": "Food"}
    ]"#;

    let outcome = import_snapshot(&mut ledger, raw).expect("import with skips");
    assert_eq!(outcome.imported, 1);
    assert_eq!(outcome.skipped.len(), 2);
    assert_eq!(outcome.skipped[0].index, 1);
    assert_eq!(outcome.skipped[1].index, 2);

    // Wholesale replacement: the prior contents are gone.
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.transactions[0].description, "Salary");
}

#[test]
fn import_of_all_garbage_leaves_the_ledger_untouched() {
    let mut ledger = sample_ledger();
    let before = ledger.clone();

    let err = import_snapshot(&mut ledger, r#"[{"a":1},{"b":2}]"#)
        .expect_err("all-garbage array must be rejected");
    assert!(matches!(err, CoreError::ImportFormat(_)));
    assert_eq!(ledger, before);
}

#[test]
fn import_of_an_empty_array_clears_the_ledger() {
    let mut ledger = sample_ledger();

    let outcome = import_snapshot(&mut ledger, "[]").expect("empty import");
    assert_eq!(outcome.imported, 0);
    assert!(ledger.is_empty());
}

#[test]
fn ledger_warnings_flag_duplicates_and_bad_amounts() {
    let mut ledger = Ledger::new();
    let raw = r#"[
        {"id": 7, "date": "2024-01-01", "desc": "A", "amount": 10.0, "type": "income", "category": "Job"},
        {"id": 7, "date": "2024-01-02", "desc": "B", "amount": 5.0, "type": "expense", "category": "Food"}
    ]"#;
    import_snapshot(&mut ledger, raw).expect("import");

    let warnings = ledger_warnings(&ledger);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("duplicate transaction id 7"));
}
