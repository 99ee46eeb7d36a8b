// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use poupa::models::{
    Category, Debt, Goal, Investment, InvestmentKind, Transaction, TransactionKind,
};
use poupa::stats::{
    AlertLevel, dashboard_alerts, fixed_expense_share, goal_monthly_contribution,
    invested_by_kind, monthly_stats, months_remaining, total_debt, total_invested,
};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tx(kind: TransactionKind, amount: &str, date: NaiveDate, category: Category) -> Transaction {
    Transaction {
        id: format!("{}-{}-{}", kind.as_str(), amount, date),
        kind,
        description: "entry".into(),
        amount: dec(amount),
        date,
        category,
        tags: None,
        is_recurring: None,
    }
}

fn income(amount: &str, date: NaiveDate) -> Transaction {
    tx(TransactionKind::Income, amount, date, Category::Variable)
}

fn expense(amount: &str, date: NaiveDate, category: Category) -> Transaction {
    tx(TransactionKind::Expense, amount, date, category)
}

fn goal(id: &str, target: &str, current: &str, target_date: NaiveDate) -> Goal {
    Goal {
        id: id.into(),
        name: id.into(),
        target_amount: dec(target),
        current_amount: dec(current),
        target_date,
    }
}

fn debt(installment: &str) -> Debt {
    Debt {
        id: format!("debt-{}", installment),
        name: "Car".into(),
        total_amount: dec("12000"),
        remaining_installments: 24,
        installment_value: dec(installment),
    }
}

#[test]
fn end_to_end_month_projection() {
    let today = day(2025, 8, 15);
    let incomes = vec![income("5000", day(2025, 8, 5))];
    let expenses = vec![expense("2000", day(2025, 8, 10), Category::Fixed)];
    let debts = vec![debt("500")];
    let goals = vec![goal("g1", "2500", "0", day(2026, 1, 20))];

    let s = monthly_stats(today, &incomes, &expenses, &goals, &debts);
    assert_eq!(s.total_income, dec("5000"));
    assert_eq!(s.total_expense, dec("2000"));
    assert_eq!(s.monthly_debts, dec("500"));
    assert_eq!(s.available_balance, dec("2500"));
    assert_eq!(s.monthly_goals, dec("500"));
    assert_eq!(s.projected_end_balance, dec("2000"));
}

#[test]
fn month_totals_exclude_other_months_and_years() {
    let today = day(2025, 8, 15);
    let incomes = vec![
        income("100", day(2025, 8, 1)),
        income("9999", day(2025, 7, 31)),
        income("8888", day(2024, 8, 15)),
        income("50", day(2025, 8, 31)),
    ];
    let expenses = vec![
        expense("30", day(2025, 8, 2), Category::Daily),
        expense("7777", day(2025, 9, 1), Category::Daily),
    ];

    let s = monthly_stats(today, &incomes, &expenses, &[], &[]);
    assert_eq!(s.total_income, dec("150"));
    assert_eq!(s.total_expense, dec("30"));
}

#[test]
fn today_expense_requires_exact_date() {
    let today = day(2025, 8, 15);
    let expenses = vec![
        expense("12.50", today, Category::Daily),
        expense("7.50", today, Category::Variable),
        expense("40", day(2025, 8, 14), Category::Daily),
        expense("60", day(2024, 8, 15), Category::Daily),
    ];

    let s = monthly_stats(today, &[], &expenses, &[], &[]);
    assert_eq!(s.today_expense, dec("20"));
    assert_eq!(s.total_expense, dec("60"));
}

#[test]
fn debts_count_every_month_regardless_of_date() {
    let s = monthly_stats(
        day(2030, 1, 1),
        &[],
        &[],
        &[],
        &[debt("120.10"), debt("79.90")],
    );
    assert_eq!(s.monthly_debts, dec("200"));
    assert_eq!(s.available_balance, dec("-200"));
}

#[test]
fn months_remaining_floors_at_one() {
    let today = day(2025, 8, 15);
    assert_eq!(months_remaining(day(2025, 8, 31), today), 1);
    assert_eq!(months_remaining(day(2025, 3, 1), today), 1);
    assert_eq!(months_remaining(day(2020, 12, 1), today), 1);
    assert_eq!(months_remaining(day(2025, 9, 1), today), 1);
    assert_eq!(months_remaining(day(2025, 10, 1), today), 2);
    assert_eq!(months_remaining(day(2026, 2, 1), today), 6);
}

#[test]
fn goal_contribution_spreads_shortfall() {
    let today = day(2025, 8, 15);

    let current_month = goal("a", "1000", "400", day(2025, 8, 30));
    assert_eq!(goal_monthly_contribution(&current_month, today), dec("600"));

    let overdue = goal("b", "1000", "100", day(2024, 1, 1));
    assert_eq!(goal_monthly_contribution(&overdue, today), dec("900"));

    let four_months = goal("c", "1200", "0", day(2025, 12, 1));
    assert_eq!(goal_monthly_contribution(&four_months, today), dec("300"));
}

#[test]
fn overfunded_goal_reduces_monthly_goals() {
    let today = day(2025, 8, 15);
    let goals = vec![
        goal("a", "1000", "1300", day(2025, 8, 20)),
        goal("b", "200", "0", day(2025, 10, 1)),
    ];
    let s = monthly_stats(today, &[], &[], &goals, &[]);
    assert_eq!(s.monthly_goals, dec("-200"));
    assert_eq!(s.projected_end_balance, dec("200"));
}

#[test]
fn fixed_share_is_zero_without_income() {
    let today = day(2025, 8, 15);
    let expenses = vec![expense("900", today, Category::Fixed)];
    assert_eq!(fixed_expense_share(today, &[], &expenses), Decimal::ZERO);
}

#[test]
fn alerts_for_fixed_share_and_completed_goals() {
    let today = day(2025, 8, 15);
    let incomes = vec![income("1000", day(2025, 8, 1))];
    let expenses = vec![
        expense("600", day(2025, 8, 3), Category::Fixed),
        expense("300", day(2025, 8, 4), Category::Variable),
        expense("500", day(2025, 7, 4), Category::Fixed),
    ];
    let goals = vec![
        goal("trip", "500", "500", day(2026, 1, 1)),
        goal("car", "5000", "10", day(2026, 1, 1)),
    ];

    assert_eq!(fixed_expense_share(today, &incomes, &expenses), dec("60"));

    let alerts = dashboard_alerts(today, &incomes, &expenses, &goals, dec("50"));
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].level, AlertLevel::Warning);
    assert!(alerts[0].message.contains("60%"));
    assert_eq!(alerts[1].level, AlertLevel::Success);
    assert!(alerts[1].message.contains("'trip'"));

    let relaxed = dashboard_alerts(today, &incomes, &expenses, &goals, dec("60"));
    assert_eq!(relaxed.len(), 1);
    assert_eq!(relaxed[0].level, AlertLevel::Success);
}

#[test]
fn goal_progress_and_completion() {
    let g = goal("g", "400", "100", day(2026, 1, 1));
    assert_eq!(g.progress(), dec("25"));
    assert!(!g.is_completed());

    let over = goal("g", "400", "500", day(2026, 1, 1));
    assert_eq!(over.progress(), dec("125"));
    assert!(over.is_completed());
}

#[test]
fn collection_totals() {
    let investments = vec![
        Investment {
            id: "1".into(),
            kind: InvestmentKind::Stocks,
            name: "ACME".into(),
            current_value: dec("1000"),
        },
        Investment {
            id: "2".into(),
            kind: InvestmentKind::Crypto,
            name: "BTC".into(),
            current_value: dec("250.5"),
        },
        Investment {
            id: "3".into(),
            kind: InvestmentKind::Stocks,
            name: "Initech".into(),
            current_value: dec("500"),
        },
    ];
    assert_eq!(total_invested(&investments), dec("1750.5"));
    let by_kind = invested_by_kind(&investments);
    assert_eq!(by_kind.get(&InvestmentKind::Stocks), Some(&dec("1500")));
    assert_eq!(by_kind.get(&InvestmentKind::Crypto), Some(&dec("250.5")));
    assert!(!by_kind.contains_key(&InvestmentKind::FixedIncome));

    assert_eq!(total_debt(&[debt("100"), debt("200")]), dec("24000"));
}

#[test]
fn huge_amounts_saturate_instead_of_panicking() {
    let today = day(2025, 8, 15);
    let mut incomes = vec![income("1", today), income("1", today)];
    for i in incomes.iter_mut() {
        i.amount = Decimal::MAX;
    }
    let mut rent = expense("1", today, Category::Fixed);
    rent.amount = Decimal::MAX;
    let expenses = vec![rent.clone(), rent];
    let mut big = debt("1");
    big.installment_value = Decimal::MAX;

    let s = monthly_stats(today, &incomes, &expenses, &[], &[big.clone(), big]);
    assert_eq!(s.total_income, Decimal::MAX);
    assert_eq!(s.total_expense, Decimal::MAX);
    assert_eq!(s.today_expense, Decimal::MAX);
    assert_eq!(s.monthly_debts, Decimal::MAX);
    assert_eq!(s.available_balance, Decimal::MIN);
    assert_eq!(fixed_expense_share(today, &incomes, &expenses), dec("100"));

    let mut rich = goal("rich", "0.0001", "0", day(2026, 1, 1));
    rich.current_amount = dec("1000000000000000000000000000");
    assert_eq!(rich.progress(), Decimal::MAX);
    assert!(rich.is_completed());
}
