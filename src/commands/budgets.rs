// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api;
use crate::models::{BudgetRule, Category};
use crate::store::Store;
use crate::utils::{maybe_print_json, parse_decimal, pretty_table, uid};
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub)?,
        Some(("list", _)) => list(store)?,
        Some(("rm", sub)) => rm(store, sub)?,
        Some(("status", sub)) => status(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let category: Category = sub.get_one::<String>("category").unwrap().parse()?;
    let limit = parse_decimal(sub.get_one::<String>("limit").unwrap())?;

    // one rule per category: replace in place, append otherwise
    let mut rules = api::list_budgets(store)?;
    if let Some(existing) = rules.iter_mut().find(|r| r.category == category) {
        existing.monthly_limit = limit;
    } else {
        rules.push(BudgetRule {
            id: uid(),
            category,
            monthly_limit: limit,
        });
    }
    api::save_budgets(store, &rules)?;
    println!("Budget set: {} = {} per month", category, limit);
    Ok(())
}

fn list(store: &Store) -> Result<()> {
    let rules = api::list_budgets(store)?;
    let rows: Vec<Vec<String>> = rules
        .iter()
        .map(|r| vec![r.category.to_string(), r.monthly_limit.to_string()])
        .collect();
    println!("{}", pretty_table(&["Category", "Monthly limit"], rows));
    Ok(())
}

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let category: Category = sub.get_one::<String>("category").unwrap().parse()?;
    let rules: Vec<BudgetRule> = api::list_budgets(store)?
        .into_iter()
        .filter(|r| r.category != category)
        .collect();
    api::save_budgets(store, &rules)?;
    println!("Budget removed for {}", category);
    Ok(())
}

fn status(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = chrono::Utc::now().date_naive();
    let statuses = api::budget_statuses(store, today)?;
    if !maybe_print_json(json_flag, jsonl_flag, &statuses)? {
        let rows: Vec<Vec<String>> = statuses
            .iter()
            .map(|s| {
                vec![
                    s.category.to_string(),
                    format!("{:.2}", s.monthly_limit),
                    format!("{:.2}", s.spent),
                    format!("{:.2}", s.remaining),
                    format!("{:.0}%", s.percent_spent),
                    if s.over { "OVER".to_string() } else { String::new() },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Category", "Limit", "Spent", "Remaining", "Used", ""],
                rows
            )
        );
    }
    Ok(())
}
