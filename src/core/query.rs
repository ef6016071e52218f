// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TxFilter};

/// Filters an (already expanded) collection and sorts the result descending
/// by date. Filter fields combine conjunctively; an empty filter returns the
/// whole collection, still sorted. The sort is stable, so records sharing a
/// date keep their input order.
pub fn query(all: &[Transaction], filter: &TxFilter) -> Vec<Transaction> {
    let mut out: Vec<Transaction> = all
        .iter()
        .filter(|tx| matches(tx, filter))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

fn matches(tx: &Transaction, filter: &TxFilter) -> bool {
    if let Some(kind) = filter.kind {
        if tx.kind != kind {
            return false;
        }
    }
    if let Some(category) = filter.category {
        if tx.category != category {
            return false;
        }
    }
    if let Some(from) = filter.from {
        if tx.date < from {
            return false;
        }
    }
    if let Some(to) = filter.to {
        if tx.date > to {
            return false;
        }
    }
    if let Some(text) = &filter.text {
        // absent notes never match a non-empty text filter
        if !text.is_empty() {
            let needle = text.to_lowercase();
            let hit = tx
                .notes
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
    }
    true
}
