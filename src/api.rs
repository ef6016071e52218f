// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Data-access contract between the presentation layer (CLI commands here)
//! and the core. Every read re-expands recurring templates; derived
//! occurrences are never written back to the store.

use crate::core::{aggregate, budget, query, recurrence};
use crate::error::{LedgerError, Result};
use crate::models::{BudgetRule, Category, Recurrence, Transaction, TxFilter, TxKind};
use crate::store::{BUDGET_KEY, Store, TX_KEY};
use crate::utils::{month_key, uid};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Creation payload: a transaction minus its id.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: Decimal,
    pub kind: TxKind,
    pub category: Category,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub recurrence: Option<Recurrence>,
}

/// Partial update merged onto an existing record. Absent fields keep the
/// stored value.
#[derive(Debug, Clone, Default)]
pub struct TxPatch {
    pub amount: Option<Decimal>,
    pub kind: Option<TxKind>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub recurrence: Option<Option<Recurrence>>,
}

pub fn list_transactions(
    store: &Store,
    filter: &TxFilter,
    as_of: NaiveDate,
) -> Result<Vec<Transaction>> {
    let stored: Vec<Transaction> = store.get_collection(TX_KEY)?;
    let expanded = recurrence::expand(&stored, as_of);
    Ok(query::query(&expanded, filter))
}

pub fn create_transaction(store: &Store, new: NewTransaction) -> Result<Transaction> {
    validate_amount(new.amount)?;
    validate_category(new.category, new.kind)?;
    let mut list: Vec<Transaction> = store.get_collection(TX_KEY)?;
    let tx = Transaction {
        id: uid(),
        amount: new.amount,
        kind: new.kind,
        category: new.category,
        date: new.date,
        notes: new.notes,
        recurrence: new.recurrence,
    };
    list.push(tx.clone());
    store.put_collection(TX_KEY, &list)?;
    Ok(tx)
}

pub fn update_transaction(store: &Store, id: &str, patch: TxPatch) -> Result<Transaction> {
    let mut list: Vec<Transaction> = store.get_collection(TX_KEY)?;
    let idx = list
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| LedgerError::NotFound(format!("transaction '{}'", id)))?;

    let mut updated = list[idx].clone();
    if let Some(amount) = patch.amount {
        updated.amount = amount;
    }
    if let Some(kind) = patch.kind {
        updated.kind = kind;
    }
    if let Some(category) = patch.category {
        updated.category = category;
    }
    if let Some(date) = patch.date {
        updated.date = date;
    }
    if let Some(notes) = patch.notes {
        updated.notes = if notes.is_empty() { None } else { Some(notes) };
    }
    if let Some(recurrence) = patch.recurrence {
        updated.recurrence = recurrence;
    }
    validate_amount(updated.amount)?;
    validate_category(updated.category, updated.kind)?;

    list[idx] = updated.clone();
    store.put_collection(TX_KEY, &list)?;
    Ok(updated)
}

/// Removes by id. Absent id is a no-op, not an error.
pub fn delete_transaction(store: &Store, id: &str) -> Result<()> {
    let list: Vec<Transaction> = store.get_collection(TX_KEY)?;
    let next: Vec<Transaction> = list.into_iter().filter(|t| t.id != id).collect();
    store.put_collection(TX_KEY, &next)
}

pub fn clear_transactions(store: &Store) -> Result<()> {
    store.put_collection::<Transaction>(TX_KEY, &[])
}

pub fn list_budgets(store: &Store) -> Result<Vec<BudgetRule>> {
    store.get_collection(BUDGET_KEY)
}

/// Replaces the whole budget collection. Budgets apply to expense
/// categories only, and limits may not be negative.
pub fn save_budgets(store: &Store, rules: &[BudgetRule]) -> Result<()> {
    for rule in rules {
        if rule.monthly_limit < Decimal::ZERO {
            return Err(LedgerError::Validation(format!(
                "budget limit for {} must not be negative",
                rule.category
            )));
        }
        if !rule.category.valid_for(TxKind::Expense) {
            return Err(LedgerError::Validation(format!(
                "'{}' is not an expense category",
                rule.category
            )));
        }
    }
    store.put_collection(BUDGET_KEY, rules)
}

/// Budget rules joined with expanded current-month spend, through the
/// evaluator.
pub fn budget_statuses(store: &Store, as_of: NaiveDate) -> Result<Vec<budget::BudgetStatus>> {
    let rules = list_budgets(store)?;
    let stored: Vec<Transaction> = store.get_collection(TX_KEY)?;
    let expanded = recurrence::expand(&stored, as_of);
    let spend = aggregate::expense_by_category(&expanded, &month_key(as_of));
    Ok(budget::evaluate(&rules, &spend))
}

fn validate_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::Validation(
            "amount must be positive".to_string(),
        ));
    }
    Ok(())
}

fn validate_category(category: Category, kind: TxKind) -> Result<()> {
    if !category.valid_for(kind) {
        return Err(LedgerError::Validation(format!(
            "category '{}' is not valid for {} transactions",
            category, kind
        )));
    }
    Ok(())
}
