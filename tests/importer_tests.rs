// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerclip::models::{Category, Transaction, TxKind};
use ledgerclip::store::{Store, TX_KEY};
use ledgerclip::{cli, commands::importer};
use std::io::Write;
use tempfile::NamedTempFile;

fn run_import(store: &Store, path: &str) {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["ledgerclip", "import", "transactions", "--path", path]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(store, import_m).unwrap();
    } else {
        panic!("no import subcommand");
    }
}

fn stored(store: &Store) -> Vec<Transaction> {
    store.get_collection(TX_KEY).unwrap()
}

#[test]
fn importer_drops_invalid_amount_rows_and_keeps_the_rest() {
    let store = Store::open_in_memory().unwrap();
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "id,amount,type,category,date,notes\n\
         old1,45.99,expense,Food,2024-06-01,groceries\n\
         old2,-5,expense,Food,2024-06-02,bad negative\n\
         old3,abc,expense,Food,2024-06-03,bad number\n\
         old4,0,expense,Food,2024-06-04,bad zero\n\
         old5,2500,income,Salary,2024-06-05,\n"
    )
    .unwrap();
    file.flush().unwrap();

    run_import(&store, file.path().to_str().unwrap());

    let txs = stored(&store);
    assert_eq!(txs.len(), 2);
    assert_eq!(txs[0].category, Category::Food);
    assert_eq!(txs[0].notes.as_deref(), Some("groceries"));
    assert_eq!(txs[1].kind, TxKind::Income);
    assert_eq!(txs[1].notes, None);
}

#[test]
fn importer_discards_ids_and_assigns_fresh_ones() {
    let store = Store::open_in_memory().unwrap();
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "id,amount,type,category,date,notes\n\
         reused,10,expense,Food,2024-06-01,a\n\
         reused,20,expense,Rent,2024-06-02,b\n"
    )
    .unwrap();
    file.flush().unwrap();

    run_import(&store, file.path().to_str().unwrap());

    let txs = stored(&store);
    assert_eq!(txs.len(), 2);
    assert_ne!(txs[0].id, txs[1].id);
    assert!(txs.iter().all(|t| t.id != "reused"));
}

#[test]
fn importer_parses_quoted_fields() {
    let store = Store::open_in_memory().unwrap();
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "id,amount,type,category,date,notes\n\
         x,12.30,expense,Shopping,2024-06-07,\"socks, 3 pairs of \"\"wool\"\"\"\n"
    )
    .unwrap();
    file.flush().unwrap();

    run_import(&store, file.path().to_str().unwrap());

    let txs = stored(&store);
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].notes.as_deref(), Some("socks, 3 pairs of \"wool\""));
}

#[test]
fn importer_drops_rows_failing_create_validation() {
    let store = Store::open_in_memory().unwrap();
    let mut file = NamedTempFile::new().unwrap();
    // Salary is not an expense category; create path rejects the pairing
    write!(
        file,
        "id,amount,type,category,date,notes\n\
         a,10,expense,Salary,2024-06-01,\n\
         b,10,expense,Food,2024-06-02,ok\n"
    )
    .unwrap();
    file.flush().unwrap();

    run_import(&store, file.path().to_str().unwrap());

    let txs = stored(&store);
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].notes.as_deref(), Some("ok"));
}
