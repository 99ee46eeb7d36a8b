// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::ledger::Ledger;
use crate::models::{InvestmentKind, NewInvestment};
use crate::stats::{invested_by_kind, total_invested};
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table, required};
use anyhow::Result;

pub fn handle(ledger: &mut Ledger, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let investment = NewInvestment {
                kind: required(sub, "type")?.parse::<InvestmentKind>()?,
                name: required(sub, "name")?.to_string(),
                current_value: parse_decimal(required(sub, "value")?)?,
            };
            let created = ledger.add_investment(investment)?;
            println!(
                "Added {} investment '{}' worth {} (id: {})",
                created.kind.label(),
                created.name,
                fmt_money(&created.current_value, &settings.currency),
                created.id
            );
        }
        Some(("list", sub)) => list(ledger, settings, sub)?,
        Some(("rm", sub)) => {
            let id = required(sub, "id")?;
            if ledger.delete_investment(id)? {
                println!("Removed investment {}", id);
            } else {
                println!("No investment with id {}", id);
            }
        }
        _ => {}
    }
    Ok(())
}

fn list(ledger: &Ledger, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let investments = ledger.investments();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &investments)? {
        return Ok(());
    }
    let rows = investments
        .iter()
        .map(|i| {
            vec![
                i.id.clone(),
                i.kind.label().to_string(),
                i.name.clone(),
                format!("{:.2}", i.current_value),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["ID", "Type", "Name", "Value"], rows));

    let by_kind = invested_by_kind(investments)
        .into_iter()
        .map(|(kind, value)| vec![kind.label().to_string(), format!("{:.2}", value)])
        .collect();
    println!("{}", pretty_table(&["Type", "Invested"], by_kind));
    println!(
        "Total invested: {}",
        fmt_money(&total_invested(investments), &settings.currency)
    );
    Ok(())
}
