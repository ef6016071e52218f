// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use crate::store::{Store, TX_KEY};
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

/// Writes the stored transaction collection (templates as-is, no derived
/// occurrences) in the fixed interchange column order.
fn export_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub.get_one::<String>("out").unwrap().trim();
    let txs: Vec<Transaction> = store.get_collection(TX_KEY)?;

    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record(["id", "amount", "type", "category", "date", "notes"])?;
    for t in &txs {
        wtr.write_record([
            t.id.as_str(),
            &t.amount.to_string(),
            &t.kind.to_string(),
            t.category.name(),
            &t.date.to_string(),
            t.notes.as_deref().unwrap_or(""),
        ])?;
    }
    wtr.flush()?;
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}
