// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::goals::{GoalRow, goal_rows};
use crate::config::Settings;
use crate::ledger::Ledger;
use crate::stats::{Alert, AlertLevel, MonthlyStats, dashboard_alerts, fixed_expense_share};
use crate::utils::{fmt_money, parse_date, pretty_table, today};
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub date: NaiveDate,
    pub currency: String,
    pub stats: MonthlyStats,
    pub fixed_expense_share: Decimal,
    pub alerts: Vec<Alert>,
    pub goals: Vec<GoalRow>,
}

pub fn build_report(ledger: &Ledger, settings: &Settings, date: NaiveDate) -> DashboardReport {
    DashboardReport {
        date,
        currency: settings.currency.clone(),
        stats: ledger.monthly_stats(date),
        fixed_expense_share: fixed_expense_share(date, ledger.incomes(), ledger.expenses())
            .round_dp(2),
        alerts: dashboard_alerts(
            date,
            ledger.incomes(),
            ledger.expenses(),
            ledger.goals(),
            settings.fixed_expense_alert_pct,
        ),
        goals: goal_rows(ledger, date),
    }
}

pub fn handle(ledger: &Ledger, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    let date = match m.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today(),
    };
    let report = build_report(ledger, settings, date);

    if m.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    print!("{}", render_text(&report, &settings.name, ledger.is_empty()));
    Ok(())
}

/// Plain-text dashboard. The stats table is always present; `empty` only
/// adds a getting-started hint below it.
pub fn render_text(report: &DashboardReport, name: &str, empty: bool) -> String {
    let mut out = format!("Hi, {}!\n", name);

    for alert in &report.alerts {
        let tag = match alert.level {
            AlertLevel::Warning => "!",
            AlertLevel::Success => "*",
        };
        out.push_str(&format!("{} {}\n", tag, alert.message));
    }

    let ccy = &report.currency;
    let s = &report.stats;
    let rows = vec![
        vec!["Available balance".to_string(), fmt_money(&s.available_balance, ccy)],
        vec!["Income this month".to_string(), fmt_money(&s.total_income, ccy)],
        vec!["Expenses this month".to_string(), fmt_money(&s.total_expense, ccy)],
        vec!["Spent today".to_string(), fmt_money(&s.today_expense, ccy)],
        vec!["Debt installments".to_string(), fmt_money(&s.monthly_debts, ccy)],
        vec!["Goal contributions".to_string(), fmt_money(&s.monthly_goals, ccy)],
        vec!["Projected end of month".to_string(), fmt_money(&s.projected_end_balance, ccy)],
        vec![
            "Fixed expenses / income".to_string(),
            format!("{:.0}%", report.fixed_expense_share),
        ],
    ];
    let title = report.date.format("%B %Y").to_string();
    out.push_str(&format!("{}\n", pretty_table(&[title.as_str(), "Value"], rows)));

    if !report.goals.is_empty() {
        let rows = report
            .goals
            .iter()
            .map(|g| {
                vec![
                    g.name.clone(),
                    format!("{}%", g.progress),
                    format!("{:.2} / {:.2}", g.current_amount, g.target_amount),
                    g.target_date.clone(),
                ]
            })
            .collect();
        out.push_str(&format!(
            "{}\n",
            pretty_table(&["Goal", "Progress", "Saved / Target", "Target date"], rows)
        ));
    }

    if empty {
        out.push_str(
            "Nothing recorded yet. Start with `poupa income add`, `poupa expense add` or `poupa goal add`.\n",
        );
    }
    out
}
