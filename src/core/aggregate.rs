// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, Transaction, TxKind};
use crate::utils::{month_key, previous_month_start};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Expense totals per category for one YYYY-MM month. Feeds budget tracking.
pub fn expense_by_category(txs: &[Transaction], month: &str) -> BTreeMap<Category, Decimal> {
    let mut map: BTreeMap<Category, Decimal> = BTreeMap::new();
    for tx in txs {
        if tx.kind != TxKind::Expense || month_key(tx.date) != month {
            continue;
        }
        *map.entry(tx.category).or_insert(Decimal::ZERO) += tx.amount;
    }
    map
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthRow {
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Income/expense sums per month across the whole collection, ascending by
/// month for charting.
pub fn monthly_series(txs: &[Transaction]) -> Vec<MonthRow> {
    let mut map: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for tx in txs {
        let entry = map
            .entry(month_key(tx.date))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match tx.kind {
            TxKind::Income => entry.0 += tx.amount,
            TxKind::Expense => entry.1 += tx.amount,
        }
    }
    map.into_iter()
        .map(|(month, (income, expense))| MonthRow {
            month,
            income,
            expense,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    pub month_income: Decimal,
    pub month_expense: Decimal,
    pub last_income: Decimal,
    pub last_expense: Decimal,
}

/// Collection-wide income/expense/balance, plus the same sums restricted to
/// the month of `as_of` and to the month before it.
pub fn totals(txs: &[Transaction], as_of: NaiveDate) -> Totals {
    let ym = month_key(as_of);
    let last = month_key(previous_month_start(as_of));
    let mut t = Totals {
        income: Decimal::ZERO,
        expense: Decimal::ZERO,
        balance: Decimal::ZERO,
        month_income: Decimal::ZERO,
        month_expense: Decimal::ZERO,
        last_income: Decimal::ZERO,
        last_expense: Decimal::ZERO,
    };
    for tx in txs {
        match tx.kind {
            TxKind::Income => t.income += tx.amount,
            TxKind::Expense => t.expense += tx.amount,
        }
        let ym_tx = month_key(tx.date);
        if ym_tx == ym {
            match tx.kind {
                TxKind::Income => t.month_income += tx.amount,
                TxKind::Expense => t.month_expense += tx.amount,
            }
        }
        if ym_tx == last {
            match tx.kind {
                TxKind::Income => t.last_income += tx.amount,
                TxKind::Expense => t.last_expense += tx.amount,
            }
        }
    }
    t.balance = t.income - t.expense;
    t
}

/// Month-over-month percent change, rounded to a whole percent. Saturating
/// convention rather than true percentage math: a zero baseline yields 100
/// when there is any current value and 0 otherwise, so the division by zero
/// never happens.
pub fn delta(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        if current > Decimal::ZERO {
            Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    } else {
        ((current - previous) / previous * Decimal::ONE_HUNDRED).round()
    }
}

/// Collection-wide expense sum per category (not month-restricted), for the
/// category breakdown chart. Order is not meaningful.
pub fn category_breakdown(txs: &[Transaction]) -> Vec<(Category, Decimal)> {
    let mut map: BTreeMap<Category, Decimal> = BTreeMap::new();
    for tx in txs {
        if tx.kind != TxKind::Expense {
            continue;
        }
        *map.entry(tx.category).or_insert(Decimal::ZERO) += tx.amount;
    }
    map.into_iter().collect()
}
