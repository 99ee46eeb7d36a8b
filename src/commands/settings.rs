// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::store::Storage;
use crate::utils::{pretty_table, required};
use anyhow::Result;

pub fn handle(storage: &dyn Storage, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let key = required(sub, "key")?;
            let value = required(sub, "value")?;
            let mut settings = Settings::load(storage)?;
            settings.set(key, value)?;
            settings.save(storage)?;
            println!("Set {} = {}", key, value.trim());
        }
        Some(("reset", _)) => {
            Settings::reset(storage)?;
            println!("Settings restored to defaults");
        }
        Some(("list", _)) => {
            let settings = Settings::load(storage)?;
            let rows = settings
                .entries()
                .into_iter()
                .map(|(k, v)| vec![k.to_string(), v])
                .collect();
            println!("{}", pretty_table(&["Key", "Value"], rows));
        }
        _ => {}
    }
    Ok(())
}
