// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::utils::required;
use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::info;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(ledger, sub),
        _ => Ok(()),
    }
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    date: String,
    description: &'a str,
    amount: String,
    category: &'static str,
    tags: String,
    recurring: bool,
}

impl<'a> From<&'a Transaction> for ExportRow<'a> {
    fn from(t: &'a Transaction) -> Self {
        ExportRow {
            id: &t.id,
            kind: t.kind.as_str(),
            date: t.date.to_string(),
            description: &t.description,
            amount: t.amount.to_string(),
            category: t.category.as_str(),
            tags: t.tags.as_deref().unwrap_or_default().join(" "),
            recurring: t.is_recurring.unwrap_or(false),
        }
    }
}

fn export_transactions(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = required(sub, "format")?.to_lowercase();
    let out = required(sub, "out")?;

    let rows: Vec<ExportRow> = ledger
        .incomes()
        .iter()
        .chain(ledger.expenses())
        .map(ExportRow::from)
        .collect();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Failed to create {}", out))?;
            for row in &rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)
                .with_context(|| format!("Failed to write {}", out))?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    info!(count = rows.len(), path = %out, "transactions exported");
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}
