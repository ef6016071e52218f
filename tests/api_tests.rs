// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use ledgerclip::api::{self, NewTransaction, TxPatch};
use ledgerclip::core::aggregate;
use ledgerclip::error::LedgerError;
use ledgerclip::models::{BudgetRule, Category, TxFilter, TxKind};
use ledgerclip::store::Store;
use rust_decimal::Decimal;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn new_tx(amount: &str, kind: TxKind, category: Category, day: &str) -> NewTransaction {
    NewTransaction {
        amount: dec(amount),
        kind,
        category,
        date: date(day),
        notes: None,
        recurrence: None,
    }
}

#[test]
fn end_to_end_dashboard_scenario() {
    let store = Store::open_in_memory().unwrap();
    api::create_transaction(&store, new_tx("45.99", TxKind::Expense, Category::Food, "2024-06-01"))
        .unwrap();
    api::create_transaction(
        &store,
        new_tx("2500.00", TxKind::Income, Category::Salary, "2024-06-01"),
    )
    .unwrap();

    let as_of = date("2024-06-15");
    let listed = api::list_transactions(&store, &TxFilter::default(), as_of).unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.windows(2).all(|p| p[0].date >= p[1].date));

    let spend = aggregate::expense_by_category(&listed, "2024-06");
    assert_eq!(spend.get(&Category::Food), Some(&dec("45.99")));
    assert_eq!(spend.len(), 1);

    let t = aggregate::totals(&listed, as_of);
    assert_eq!(t.balance, dec("2454.01"));
}

#[test]
fn create_rejects_non_positive_amounts_without_writing() {
    let store = Store::open_in_memory().unwrap();
    for bad in ["0", "-5"] {
        let err = api::create_transaction(
            &store,
            new_tx(bad, TxKind::Expense, Category::Food, "2024-06-01"),
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }
    let listed = api::list_transactions(&store, &TxFilter::default(), date("2024-06-15")).unwrap();
    assert!(listed.is_empty());
}

#[test]
fn create_rejects_category_kind_mismatch() {
    let store = Store::open_in_memory().unwrap();
    let err = api::create_transaction(
        &store,
        new_tx("100", TxKind::Income, Category::Food, "2024-06-01"),
    )
    .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
}

#[test]
fn update_merges_patch_and_revalidates() {
    let store = Store::open_in_memory().unwrap();
    let tx = api::create_transaction(
        &store,
        new_tx("20", TxKind::Expense, Category::Food, "2024-06-01"),
    )
    .unwrap();

    let updated = api::update_transaction(
        &store,
        &tx.id,
        TxPatch {
            amount: Some(dec("25.50")),
            notes: Some("lunch".into()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(updated.amount, dec("25.50"));
    assert_eq!(updated.notes.as_deref(), Some("lunch"));
    assert_eq!(updated.date, date("2024-06-01"));

    // non-positive amount in a patch is rejected and nothing is written
    let err = api::update_transaction(
        &store,
        &tx.id,
        TxPatch {
            amount: Some(Decimal::ZERO),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
    let listed = api::list_transactions(&store, &TxFilter::default(), date("2024-06-15")).unwrap();
    assert_eq!(listed[0].amount, dec("25.50"));
}

#[test]
fn update_unknown_id_is_not_found() {
    let store = Store::open_in_memory().unwrap();
    let err = api::update_transaction(&store, "nope", TxPatch::default()).unwrap_err();
    assert!(matches!(err, LedgerError::NotFound(_)));
}

#[test]
fn delete_is_noop_for_absent_id() {
    let store = Store::open_in_memory().unwrap();
    let tx = api::create_transaction(
        &store,
        new_tx("20", TxKind::Expense, Category::Food, "2024-06-01"),
    )
    .unwrap();
    api::delete_transaction(&store, "absent").unwrap();
    api::delete_transaction(&store, &tx.id).unwrap();
    api::delete_transaction(&store, &tx.id).unwrap();
    let listed = api::list_transactions(&store, &TxFilter::default(), date("2024-06-15")).unwrap();
    assert!(listed.is_empty());
}

#[test]
fn budgets_replace_wholesale_and_validate() {
    let store = Store::open_in_memory().unwrap();
    let rules = vec![BudgetRule {
        id: "b1".into(),
        category: Category::Food,
        monthly_limit: dec("300"),
    }];
    api::save_budgets(&store, &rules).unwrap();
    assert_eq!(api::list_budgets(&store).unwrap(), rules);

    // income category is not budgetable
    let bad = vec![BudgetRule {
        id: "b2".into(),
        category: Category::Salary,
        monthly_limit: dec("10"),
    }];
    let err = api::save_budgets(&store, &bad).unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
    assert_eq!(api::list_budgets(&store).unwrap(), rules);

    // negative limit rejected; zero allowed
    let neg = vec![BudgetRule {
        id: "b3".into(),
        category: Category::Food,
        monthly_limit: dec("-1"),
    }];
    assert!(api::save_budgets(&store, &neg).is_err());
    let zero = vec![BudgetRule {
        id: "b4".into(),
        category: Category::Food,
        monthly_limit: Decimal::ZERO,
    }];
    api::save_budgets(&store, &zero).unwrap();
    assert_eq!(api::list_budgets(&store).unwrap(), zero);
}

#[test]
fn budget_statuses_use_expanded_current_month_spend() {
    let store = Store::open_in_memory().unwrap();
    let as_of = date("2024-06-15");
    api::create_transaction(
        &store,
        new_tx("120", TxKind::Expense, Category::Food, "2024-06-02"),
    )
    .unwrap();
    // last month's spend must not count
    api::create_transaction(
        &store,
        new_tx("999", TxKind::Expense, Category::Food, "2024-05-02"),
    )
    .unwrap();
    api::save_budgets(
        &store,
        &[BudgetRule {
            id: "b1".into(),
            category: Category::Food,
            monthly_limit: dec("100"),
        }],
    )
    .unwrap();

    let statuses = api::budget_statuses(&store, as_of).unwrap();
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].spent, dec("120"));
    assert!(statuses[0].over);
}

#[test]
fn list_expands_recurring_templates() {
    let store = Store::open_in_memory().unwrap();
    let mut new = new_tx("9.99", TxKind::Expense, Category::Entertainment, "2024-06-01");
    new.notes = Some("streaming".into());
    new.recurrence = Some(ledgerclip::models::Recurrence {
        pattern: ledgerclip::models::RecurPattern::Monthly,
        start_date: date("2024-06-01"),
        end_date: None,
    });
    api::create_transaction(&store, new).unwrap();

    let listed = api::list_transactions(&store, &TxFilter::default(), date("2024-06-15")).unwrap();
    // stored row plus July and August occurrences within the horizon
    assert_eq!(listed.len(), 3);
    let dates: Vec<String> = listed.iter().map(|t| t.date.to_string()).collect();
    assert_eq!(dates, vec!["2024-08-01", "2024-07-01", "2024-06-01"]);
}
