// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::{self, NewTransaction, TxPatch};
use crate::models::{Category, RecurPattern, Recurrence, Transaction, TxFilter, TxKind};
use crate::store::Store;
use crate::utils::{maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        Some(("clear", _)) => clear(store)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let kind: TxKind = sub.get_one::<String>("type").unwrap().parse()?;
    let category: Category = sub.get_one::<String>("category").unwrap().parse()?;
    let notes = sub
        .get_one::<String>("notes")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());

    let recurrence = match sub.get_one::<String>("recur") {
        Some(pattern) => {
            let pattern: RecurPattern = pattern.parse()?;
            let start_date = match sub.get_one::<String>("start") {
                Some(s) => parse_date(s)?,
                None => date,
            };
            let end_date = sub
                .get_one::<String>("until")
                .map(|s| parse_date(s))
                .transpose()?;
            Some(Recurrence {
                pattern,
                start_date,
                end_date,
            })
        }
        None => None,
    };

    let tx = api::create_transaction(
        store,
        NewTransaction {
            amount,
            kind,
            category,
            date,
            notes,
            recurrence,
        },
    )?;
    println!(
        "Recorded {} {} of {} in {} on {} (id: {})",
        if tx.is_template() { "recurring" } else { "one-off" },
        tx.kind,
        tx.amount,
        tx.category,
        tx.date,
        tx.id
    );
    Ok(())
}

pub fn filter_from_args(sub: &clap::ArgMatches) -> Result<TxFilter> {
    let mut filter = TxFilter::default();
    if let Some(kind) = sub.get_one::<String>("type") {
        filter.kind = Some(kind.parse::<TxKind>()?);
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        filter.category = Some(cat.parse::<Category>()?);
    }
    if let Some(from) = sub.get_one::<String>("from") {
        filter.from = Some(parse_date(from)?);
    }
    if let Some(to) = sub.get_one::<String>("to") {
        filter.to = Some(parse_date(to)?);
    }
    if let Some(text) = sub.get_one::<String>("search") {
        filter.text = Some(text.to_string());
    }
    Ok(filter)
}

pub fn list_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let filter = filter_from_args(sub)?;
    let today = chrono::Utc::now().date_naive();
    let mut rows = api::list_transactions(store, &filter, today)?;
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = list_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.clone(),
                    t.date.to_string(),
                    t.kind.to_string(),
                    t.category.to_string(),
                    t.amount.to_string(),
                    t.notes.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Type", "Category", "Amount", "Notes"], rows)
        );
    }
    Ok(())
}

fn edit(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    let mut patch = TxPatch::default();
    if let Some(amount) = sub.get_one::<String>("amount") {
        patch.amount = Some(parse_decimal(amount)?);
    }
    if let Some(kind) = sub.get_one::<String>("type") {
        patch.kind = Some(kind.parse::<TxKind>()?);
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        patch.category = Some(cat.parse::<Category>()?);
    }
    if let Some(date) = sub.get_one::<String>("date") {
        patch.date = Some(parse_date(date)?);
    }
    if let Some(notes) = sub.get_one::<String>("notes") {
        patch.notes = Some(notes.to_string());
    }
    let tx = api::update_transaction(store, id, patch)?;
    println!("Updated {}: {} {} on {}", tx.id, tx.kind, tx.amount, tx.date);
    Ok(())
}

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    api::delete_transaction(store, id)?;
    println!("Removed {}", id);
    Ok(())
}

fn clear(store: &Store) -> Result<()> {
    api::clear_transactions(store)?;
    println!("All transactions cleared");
    Ok(())
}
