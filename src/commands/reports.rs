// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api;
use crate::core::aggregate;
use crate::models::{Transaction, TxFilter};
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("monthly", sub)) => monthly(store, sub)?,
        Some(("categories", sub)) => categories(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn expanded(store: &Store) -> Result<Vec<Transaction>> {
    let today = chrono::Utc::now().date_naive();
    Ok(api::list_transactions(store, &TxFilter::default(), today)?)
}

fn summary(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = chrono::Utc::now().date_naive();
    let txs = expanded(store)?;
    let t = aggregate::totals(&txs, today);
    if !maybe_print_json(json_flag, jsonl_flag, &t)? {
        let rows = vec![
            vec![
                "Income".to_string(),
                format!("{:.2}", t.income),
                format!(
                    "MoM {}%",
                    aggregate::delta(t.month_income, t.last_income)
                ),
            ],
            vec![
                "Expense".to_string(),
                format!("{:.2}", t.expense),
                format!(
                    "MoM {}%",
                    aggregate::delta(t.month_expense, t.last_expense)
                ),
            ],
            vec![
                "Balance".to_string(),
                format!("{:.2}", t.balance),
                String::new(),
            ],
        ];
        println!("{}", pretty_table(&["", "Total", ""], rows));
    }
    Ok(())
}

fn monthly(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let txs = expanded(store)?;
    let series = aggregate::monthly_series(&txs);
    if !maybe_print_json(json_flag, jsonl_flag, &series)? {
        let rows: Vec<Vec<String>> = series
            .iter()
            .map(|r| {
                vec![
                    r.month.clone(),
                    format!("{:.2}", r.income),
                    format!("{:.2}", r.expense),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Income", "Expense"], rows));
    }
    Ok(())
}

fn categories(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let txs = expanded(store)?;
    let mut items = aggregate::category_breakdown(&txs);
    items.sort_by(|a, b| b.1.cmp(&a.1));
    if !maybe_print_json(json_flag, jsonl_flag, &items)? {
        let rows: Vec<Vec<String>> = items
            .iter()
            .map(|(cat, total)| vec![cat.to_string(), format!("{:.2}", total)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}
