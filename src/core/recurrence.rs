// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{RecurPattern, Transaction};
use crate::utils::add_months;
use chrono::{Days, NaiveDate};

/// How far past `as_of` unbounded recurrences are generated. A display
/// horizon, not a stored fact: re-running with a later `as_of` reveals later
/// occurrences without any state change.
const HORIZON_MONTHS: u32 = 2;

/// Expands recurring templates into concrete dated occurrences.
///
/// Base rows are passed through unchanged and come first; each template then
/// contributes occurrences in chronological step order, from the rule's
/// start date up to its end date (or `as_of` plus the horizon), inclusive.
/// An occurrence whose `(date, notes, amount, kind, category)` tuple already
/// exists in the accumulated result is skipped, so the template's own stored
/// row is never double-counted when the generation loop lands on its date.
pub fn expand(base: &[Transaction], as_of: NaiveDate) -> Vec<Transaction> {
    let mut expanded: Vec<Transaction> = base.to_vec();
    for tx in base {
        let Some(rec) = &tx.recurrence else { continue };
        let end = rec.end_date.unwrap_or_else(|| add_months(as_of, HORIZON_MONTHS));
        let mut current = rec.start_date;
        while current <= end {
            if !occurrence_exists(&expanded, tx, current) {
                expanded.push(derive(tx, current));
            }
            let next = match rec.pattern {
                RecurPattern::Daily => step_days(current, 1),
                RecurPattern::Weekly => step_days(current, 7),
                RecurPattern::Monthly => add_months(current, 1),
            };
            // a saturated step at the calendar's edge must not spin
            if next <= current {
                break;
            }
            current = next;
        }
    }
    expanded
}

fn step_days(date: NaiveDate, n: u64) -> NaiveDate {
    date.checked_add_days(Days::new(n)).unwrap_or(date)
}

fn occurrence_exists(acc: &[Transaction], tx: &Transaction, date: NaiveDate) -> bool {
    acc.iter().any(|e| {
        e.date == date
            && e.notes == tx.notes
            && e.amount == tx.amount
            && e.kind == tx.kind
            && e.category == tx.category
    })
}

/// A derived occurrence carries the template's fields with its own date and
/// a synthetic `templateId:date` id. It is never persisted.
fn derive(tx: &Transaction, date: NaiveDate) -> Transaction {
    Transaction {
        id: format!("{}:{}", tx.id, date),
        date,
        recurrence: None,
        ..tx.clone()
    }
}
