// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::ledger::Ledger;
use crate::models::NewDebt;
use crate::stats::{saturating_sum, total_debt};
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table, required};
use anyhow::{Context, Result};

pub fn handle(ledger: &mut Ledger, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let debt = NewDebt {
                name: required(sub, "name")?.to_string(),
                total_amount: parse_decimal(required(sub, "total")?)?,
                remaining_installments: *sub
                    .get_one::<u32>("installments")
                    .context("Missing required argument 'installments'")?,
                installment_value: parse_decimal(required(sub, "installment_value")?)?,
            };
            let created = ledger.add_debt(debt)?;
            println!(
                "Added debt '{}': {} x {} (id: {})",
                created.name,
                created.remaining_installments,
                fmt_money(&created.installment_value, &settings.currency),
                created.id
            );
        }
        Some(("list", sub)) => {
            let debts = ledger.debts();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &debts)? {
                let rows = debts
                    .iter()
                    .map(|d| {
                        vec![
                            d.id.clone(),
                            d.name.clone(),
                            format!("{:.2}", d.total_amount),
                            d.remaining_installments.to_string(),
                            format!("{:.2}", d.installment_value),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(
                        &["ID", "Name", "Total", "Installments left", "Installment"],
                        rows,
                    )
                );
                let monthly = saturating_sum(debts.iter().map(|d| d.installment_value));
                println!(
                    "Total debt: {} | Monthly installments: {}",
                    fmt_money(&total_debt(debts), &settings.currency),
                    fmt_money(&monthly, &settings.currency)
                );
            }
        }
        Some(("rm", sub)) => {
            let id = required(sub, "id")?;
            if ledger.delete_debt(id)? {
                println!("Removed debt {}", id);
            } else {
                println!("No debt with id {}", id);
            }
        }
        _ => {}
    }
    Ok(())
}
