// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("ledgerclip")
        .about("Local-first personal finance tracker")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Create the database if missing"))
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("date").long("date").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("income|expense"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("notes").long("notes"))
                        .arg(
                            Arg::new("recur")
                                .long("recur")
                                .help("Make this a recurring template: daily|weekly|monthly"),
                        )
                        .arg(
                            Arg::new("start")
                                .long("start")
                                .requires("recur")
                                .help("Recurrence start date (defaults to --date)"),
                        )
                        .arg(
                            Arg::new("until")
                                .long("until")
                                .requires("recur")
                                .help("Recurrence end date (defaults to open-ended)"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions (recurring templates expanded)")
                        .arg(Arg::new("type").long("type"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("from").long("from"))
                        .arg(Arg::new("to").long("to"))
                        .arg(Arg::new("search").long("search").help("Substring of notes"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Update fields of a transaction")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("type").long("type"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").long("id").required(true)),
                )
                .subcommand(Command::new("clear").about("Delete all transactions")),
        )
        .subcommand(
            Command::new("budget")
                .about("Manage monthly budgets")
                .subcommand(
                    Command::new("set")
                        .about("Set the monthly limit for an expense category")
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("limit").long("limit").required(true)),
                )
                .subcommand(Command::new("list").about("List budget rules"))
                .subcommand(
                    Command::new("rm")
                        .about("Remove the budget for a category")
                        .arg(Arg::new("category").long("category").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("status").about("Current-month spend against budgets"),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated views")
                .subcommand(json_flags(
                    Command::new("summary").about("Totals and month-over-month change"),
                ))
                .subcommand(json_flags(
                    Command::new("monthly").about("Income/expense per month"),
                ))
                .subcommand(json_flags(
                    Command::new("categories").about("Expense breakdown by category"),
                )),
        )
        .subcommand(
            Command::new("import").about("Import data").subcommand(
                Command::new("transactions")
                    .about("Import transactions from CSV")
                    .arg(Arg::new("path").long("path").required(true)),
            ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .about("Export transactions to CSV")
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(
            Command::new("config").about("Preferences").subcommand(
                Command::new("theme")
                    .about("Show or set the UI theme")
                    .arg(Arg::new("set").long("set").help("light|dark")),
            ),
        )
}
