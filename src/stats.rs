// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived figures for the dashboard. Everything here is pure: callers hand
//! in the reference date and the collections, nothing touches storage.

use crate::models::{
    Category, Debt, Expense, Goal, Income, Investment, InvestmentKind, Transaction,
};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub today_expense: Decimal,
    pub monthly_debts: Decimal,
    pub monthly_goals: Decimal,
    pub available_balance: Decimal,
    pub projected_end_balance: Decimal,
}

/// True when `date` lies in the same calendar month and year as `today`.
pub fn in_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

/// Whole months between `today` and `target`, never less than one.
pub fn months_remaining(target: NaiveDate, today: NaiveDate) -> i64 {
    let delta = i64::from(target.year() - today.year()) * 12 + i64::from(target.month())
        - i64::from(today.month());
    delta.max(1)
}

/// Amount that has to go into `goal` this month to reach the target on time.
/// Overfunded goals yield a negative contribution.
pub fn goal_monthly_contribution(goal: &Goal, today: NaiveDate) -> Decimal {
    goal.remaining() / Decimal::from(months_remaining(goal.target_date, today))
}

/// Sums `values`, clamping at the bounds of `Decimal` instead of panicking.
pub fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
}

fn month_total(items: &[Transaction], today: NaiveDate) -> Decimal {
    saturating_sum(
        items
            .iter()
            .filter(|t| in_month(t.date, today))
            .map(|t| t.amount),
    )
}

pub fn monthly_stats(
    today: NaiveDate,
    incomes: &[Income],
    expenses: &[Expense],
    goals: &[Goal],
    debts: &[Debt],
) -> MonthlyStats {
    let total_income = month_total(incomes, today);
    let total_expense = month_total(expenses, today);
    let today_expense = saturating_sum(
        expenses
            .iter()
            .filter(|e| e.date == today)
            .map(|e| e.amount),
    );
    let monthly_debts = saturating_sum(debts.iter().map(|d| d.installment_value));
    let monthly_goals = saturating_sum(goals.iter().map(|g| goal_monthly_contribution(g, today)));

    let available_balance = total_income
        .saturating_sub(total_expense)
        .saturating_sub(monthly_debts);
    let projected_end_balance = available_balance.saturating_sub(monthly_goals);

    MonthlyStats {
        total_income,
        total_expense,
        today_expense,
        monthly_debts,
        monthly_goals,
        available_balance,
        projected_end_balance,
    }
}

/// This month's fixed expenses as a percentage of this month's income, or
/// zero without income.
pub fn fixed_expense_share(
    today: NaiveDate,
    incomes: &[Income],
    expenses: &[Expense],
) -> Decimal {
    let income = month_total(incomes, today);
    if income.is_zero() {
        return Decimal::ZERO;
    }
    let fixed = saturating_sum(
        expenses
            .iter()
            .filter(|e| e.category == Category::Fixed && in_month(e.date, today))
            .map(|e| e.amount),
    );
    percent_of(fixed, income)
}

/// `part / whole * 100`, saturating when the quotient does not fit.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    match part.checked_div(whole) {
        Some(ratio) => ratio.saturating_mul(Decimal::ONE_HUNDRED),
        None if part.is_sign_negative() != whole.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Warning,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
}

pub fn dashboard_alerts(
    today: NaiveDate,
    incomes: &[Income],
    expenses: &[Expense],
    goals: &[Goal],
    threshold_pct: Decimal,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    let share = fixed_expense_share(today, incomes, expenses);
    if share > threshold_pct {
        alerts.push(Alert {
            level: AlertLevel::Warning,
            message: format!(
                "Fixed expenses are above {}% of this month's income ({:.0}%)",
                threshold_pct.normalize(),
                share
            ),
        });
    }

    for goal in goals.iter().filter(|g| g.is_completed()) {
        alerts.push(Alert {
            level: AlertLevel::Success,
            message: format!("Goal '{}' reached!", goal.name),
        });
    }
    alerts
}

pub fn total_invested(investments: &[Investment]) -> Decimal {
    saturating_sum(investments.iter().map(|i| i.current_value))
}

pub fn invested_by_kind(investments: &[Investment]) -> BTreeMap<InvestmentKind, Decimal> {
    let mut by_kind = BTreeMap::new();
    for inv in investments {
        let total = by_kind.entry(inv.kind).or_insert(Decimal::ZERO);
        *total = total.saturating_add(inv.current_value);
    }
    by_kind
}

pub fn total_debt(debts: &[Debt]) -> Decimal {
    saturating_sum(debts.iter().map(|d| d.total_amount))
}
