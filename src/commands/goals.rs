// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::ledger::Ledger;
use crate::models::NewGoal;
use crate::stats::goal_monthly_contribution;
use crate::utils::{
    fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table, required, today,
};
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(ledger: &mut Ledger, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, settings, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("deposit", sub)) => deposit(ledger, settings, sub)?,
        Some(("rm", sub)) => {
            let id = required(sub, "id")?;
            if ledger.delete_goal(id)? {
                println!("Removed goal {}", id);
            } else {
                println!("No goal with id {}", id);
            }
        }
        _ => {}
    }
    Ok(())
}

fn add(ledger: &mut Ledger, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let goal = NewGoal {
        name: required(sub, "name")?.to_string(),
        target_amount: parse_decimal(required(sub, "target")?)?,
        target_date: parse_date(required(sub, "date")?)?,
    };
    let created = ledger.add_goal(goal)?;
    println!(
        "Created goal '{}' of {} by {} (id: {})",
        created.name,
        fmt_money(&created.target_amount, &settings.currency),
        created.target_date,
        created.id
    );
    Ok(())
}

fn deposit(ledger: &mut Ledger, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    let amount = parse_decimal(required(sub, "amount")?)?;
    if ledger.add_to_goal(id, amount)? {
        println!(
            "Added {} to goal {}",
            fmt_money(&amount, &settings.currency),
            id
        );
    } else {
        println!("No goal with id {}", id);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRow {
    pub id: String,
    pub name: String,
    pub target_date: String,
    pub current_amount: Decimal,
    pub target_amount: Decimal,
    pub progress: Decimal,
    pub monthly: Decimal,
    pub completed: bool,
}

pub fn goal_rows(ledger: &Ledger, today: NaiveDate) -> Vec<GoalRow> {
    ledger
        .goals()
        .iter()
        .map(|g| GoalRow {
            id: g.id.clone(),
            name: g.name.clone(),
            target_date: g.target_date.to_string(),
            current_amount: g.current_amount,
            target_amount: g.target_amount,
            progress: g.progress().round_dp(0),
            monthly: goal_monthly_contribution(g, today).round_dp(2),
            completed: g.is_completed(),
        })
        .collect()
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let data = goal_rows(ledger, today());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .into_iter()
            .map(|r| {
                vec![
                    r.id,
                    r.name,
                    r.target_date,
                    format!("{:.2}", r.current_amount),
                    format!("{:.2}", r.target_amount),
                    format!("{}%", r.progress),
                    if r.completed {
                        "reached".to_string()
                    } else {
                        format!("{:.2}", r.monthly)
                    },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Name", "Target date", "Saved", "Target", "Progress", "Per month"],
                rows,
            )
        );
    }
    Ok(())
}
