// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::ledger::Ledger;
use crate::models::{Category, NewTransaction, TransactionKind, normalize_tags};
use crate::stats::{in_month, saturating_sum};
use crate::utils::{
    fmt_money, maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table, required,
    today,
};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(
    ledger: &mut Ledger,
    kind: TransactionKind,
    settings: &Settings,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, kind, settings, sub)?,
        Some(("list", sub)) => list(ledger, kind, settings, sub)?,
        Some(("rm", sub)) => rm(ledger, kind, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(
    ledger: &mut Ledger,
    kind: TransactionKind,
    settings: &Settings,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let description = required(sub, "description")?;
    let amount = parse_decimal(required(sub, "amount")?)?;
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today(),
    };
    let category = match sub.get_one::<String>("category") {
        Some(c) => c.parse::<Category>()?,
        None => Category::default(),
    };
    let tags = sub.get_one::<String>("tags").and_then(|t| normalize_tags(t));

    let mut tx = NewTransaction::new(description.as_str(), amount, date)
        .with_category(category)
        .with_tags(tags);
    if sub.get_flag("recurring") {
        tx.is_recurring = Some(true);
    }

    let created = ledger.add_transaction(kind, tx)?;
    println!(
        "Recorded {} {} on {} '{}' (id: {})",
        kind.as_str(),
        fmt_money(&created.amount, &settings.currency),
        created.date,
        created.description,
        created.id
    );
    Ok(())
}

fn list(
    ledger: &Ledger,
    kind: TransactionKind,
    settings: &Settings,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, kind, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let total = saturating_sum(data.iter().map(|r| r.amount));
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.description.clone(),
                    format!("{:.2}", r.amount),
                    r.category.label().to_string(),
                    r.tags.clone(),
                    if r.recurring { "yes".into() } else { String::new() },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Description", "Amount", "Category", "Tags", "Recurring"],
                rows,
            )
        );
        println!("Total: {}", fmt_money(&total, &settings.currency));
    }
    Ok(())
}

fn rm(ledger: &mut Ledger, kind: TransactionKind, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    if ledger.delete_transaction(kind, id)? {
        println!("Removed {} {}", kind.as_str(), id);
    } else {
        println!("No {} with id {}", kind.as_str(), id);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
    pub tags: String,
    pub recurring: bool,
}

/// Rows of one collection in insertion order, narrowed by the optional
/// `--month` and `--category` filters.
pub fn query_rows(
    ledger: &Ledger,
    kind: TransactionKind,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let month = sub
        .get_one::<String>("month")
        .map(|m| parse_month(m))
        .transpose()?;
    let category = sub
        .get_one::<String>("category")
        .map(|c| c.parse::<Category>())
        .transpose()?;

    let data = ledger
        .transactions(kind)
        .iter()
        .filter(|t| month.is_none_or(|m| in_month(t.date, m)))
        .filter(|t| category.is_none_or(|c| t.category == c))
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.date.to_string(),
            description: t.description.clone(),
            amount: t.amount,
            category: t.category,
            tags: t.tags.as_deref().unwrap_or_default().join(" "),
            recurring: t.is_recurring.unwrap_or(false),
        })
        .collect();
    Ok(data)
}
