// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::{self, NewTransaction};
use crate::models::{Category, TxKind};
use crate::store::Store;
use crate::utils::{parse_date, parse_decimal};
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use rust_decimal::Decimal;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(store, sub),
        _ => Ok(()),
    }
}

/// Best-effort CSV import: rows with a non-positive or non-numeric amount,
/// or an unknown type/category/date, are dropped rather than failing the
/// batch. The id column is discarded; fresh ids come from the create path.
fn import_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut imported = 0usize;
    let mut skipped = 0usize;
    for result in rdr.records() {
        let rec = result?;
        match row_to_tx(&rec) {
            Some(new) => match api::create_transaction(store, new) {
                Ok(_) => imported += 1,
                Err(_) => skipped += 1,
            },
            None => skipped += 1,
        }
    }
    println!("Imported {} transactions from {} ({} skipped)", imported, path, skipped);
    Ok(())
}

// Fixed column order: id, amount, type, category, date, notes.
fn row_to_tx(rec: &csv::StringRecord) -> Option<NewTransaction> {
    let amount: Decimal = parse_decimal(rec.get(1)?).ok()?;
    if amount <= Decimal::ZERO {
        return None;
    }
    let kind: TxKind = rec.get(2)?.parse().ok()?;
    let category: Category = rec.get(3)?.parse().ok()?;
    let date = parse_date(rec.get(4)?).ok()?;
    let notes = rec
        .get(5)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());
    Some(NewTransaction {
        amount,
        kind,
        category,
        date,
        notes,
        recurrence: None,
    })
}
