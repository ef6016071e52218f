// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::{Store, THEME_KEY};
use anyhow::{Result, anyhow};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("theme", sub)) => theme(store, sub),
        _ => Ok(()),
    }
}

fn theme(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    if let Some(value) = sub.get_one::<String>("set") {
        let value = value.trim().to_lowercase();
        if value != "light" && value != "dark" {
            return Err(anyhow!("Unknown theme '{}', expected light|dark", value));
        }
        store.set_pref(THEME_KEY, &value)?;
        println!("Theme set to {}", value);
    } else {
        let current = store.get_pref(THEME_KEY)?.unwrap_or_else(|| "light".into());
        println!("{}", current);
    }
    Ok(())
}
