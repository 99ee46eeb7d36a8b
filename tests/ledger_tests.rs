// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use poupa::error::Error;
use poupa::ledger::{GOALS_KEY, INCOMES_KEY, Ledger};
use poupa::models::{
    Category, InvestmentKind, NewDebt, NewGoal, NewInvestment, NewTransaction, normalize_tags,
};
use poupa::store::{MemoryStorage, Storage};
use rust_decimal::Decimal;
use std::rc::Rc;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn setup() -> (Rc<MemoryStorage>, Ledger) {
    let storage = Rc::new(MemoryStorage::new());
    let ledger = Ledger::load(storage.clone()).unwrap();
    (storage, ledger)
}

fn new_goal(name: &str, target: &str) -> NewGoal {
    NewGoal {
        name: name.into(),
        target_amount: dec(target),
        target_date: day(2026, 6, 30),
    }
}

#[test]
fn add_assigns_unique_ids_and_appends() {
    let (_, mut ledger) = setup();
    let a = ledger
        .add_income(NewTransaction::new("Salary", dec("5000"), day(2025, 8, 5)))
        .unwrap();
    let b = ledger
        .add_income(NewTransaction::new("Freelance", dec("800"), day(2025, 8, 9)))
        .unwrap();

    assert_ne!(a.id, b.id);
    let names: Vec<&str> = ledger
        .incomes()
        .iter()
        .map(|t| t.description.as_str())
        .collect();
    assert_eq!(names, ["Salary", "Freelance"]);
    assert!(ledger.expenses().is_empty());
}

#[test]
fn delete_unknown_id_changes_nothing() {
    let (storage, mut ledger) = setup();
    ledger
        .add_expense(NewTransaction::new("Rent", dec("1500"), day(2025, 8, 1)))
        .unwrap();
    ledger.add_goal(new_goal("Trip", "3000")).unwrap();
    let before_expenses = ledger.expenses().to_vec();
    let before_goals = ledger.goals().to_vec();
    let stored_before = storage.read("expenses").unwrap();

    assert!(!ledger.delete_expense("missing").unwrap());
    assert!(!ledger.delete_income("missing").unwrap());
    assert!(!ledger.delete_goal("missing").unwrap());
    assert!(!ledger.delete_investment("missing").unwrap());
    assert!(!ledger.delete_debt("missing").unwrap());

    assert_eq!(ledger.expenses(), before_expenses.as_slice());
    assert_eq!(ledger.goals(), before_goals.as_slice());
    assert_eq!(storage.read("expenses").unwrap(), stored_before);
}

#[test]
fn delete_keeps_survivor_order() {
    let (_, mut ledger) = setup();
    let ids: Vec<String> = ["a", "b", "c"]
        .iter()
        .map(|d| {
            ledger
                .add_expense(NewTransaction::new(*d, dec("1"), day(2025, 8, 1)))
                .unwrap()
                .id
        })
        .collect();

    assert!(ledger.delete_expense(&ids[1]).unwrap());
    let left: Vec<&str> = ledger
        .expenses()
        .iter()
        .map(|t| t.description.as_str())
        .collect();
    assert_eq!(left, ["a", "c"]);
}

#[test]
fn deposit_touches_only_target_goal() {
    let (_, mut ledger) = setup();
    let trip = ledger.add_goal(new_goal("Trip", "3000")).unwrap();
    let car = ledger.add_goal(new_goal("Car", "20000")).unwrap();
    assert_eq!(trip.current_amount, Decimal::ZERO);

    assert!(ledger.add_to_goal(&trip.id, dec("250.75")).unwrap());
    assert!(ledger.add_to_goal(&trip.id, dec("3000")).unwrap());

    let goals = ledger.goals();
    assert_eq!(goals[0].id, trip.id);
    assert_eq!(goals[0].current_amount, dec("3250.75"));
    assert_eq!(goals[1], car);
}

#[test]
fn deposit_rejects_non_positive_amounts() {
    let (_, mut ledger) = setup();
    let trip = ledger.add_goal(new_goal("Trip", "3000")).unwrap();

    assert!(matches!(
        ledger.add_to_goal(&trip.id, Decimal::ZERO),
        Err(Error::InvalidAmount(_))
    ));
    assert!(matches!(
        ledger.add_to_goal(&trip.id, dec("-10")),
        Err(Error::InvalidAmount(_))
    ));
    assert_eq!(ledger.goals()[0].current_amount, Decimal::ZERO);
}

#[test]
fn deposit_past_decimal_range_is_refused() {
    let (storage, mut ledger) = setup();
    let vault = ledger.add_goal(new_goal("Vault", "1000")).unwrap();
    assert!(ledger.add_to_goal(&vault.id, Decimal::MAX).unwrap());
    let stored = storage.read(GOALS_KEY).unwrap();

    assert!(matches!(
        ledger.add_to_goal(&vault.id, Decimal::MAX),
        Err(Error::AmountOverflow(_))
    ));
    assert_eq!(ledger.goals()[0].current_amount, Decimal::MAX);
    assert_eq!(storage.read(GOALS_KEY).unwrap(), stored);
    assert!(ledger.goals()[0].is_completed());
}

#[test]
fn ledger_with_only_debts_or_investments_is_not_empty() {
    let (_, mut ledger) = setup();
    assert!(ledger.is_empty());
    let debt = ledger
        .add_debt(NewDebt {
            name: "Phone".into(),
            total_amount: dec("1200"),
            remaining_installments: 6,
            installment_value: dec("200"),
        })
        .unwrap();
    assert!(!ledger.is_empty());

    ledger.delete_debt(&debt.id).unwrap();
    ledger
        .add_investment(NewInvestment {
            kind: InvestmentKind::Crypto,
            name: "BTC".into(),
            current_value: dec("300"),
        })
        .unwrap();
    assert!(!ledger.is_empty());
}

#[test]
fn deposit_into_unknown_goal_is_noop() {
    let (_, mut ledger) = setup();
    let trip = ledger.add_goal(new_goal("Trip", "3000")).unwrap();
    assert!(!ledger.add_to_goal("missing", dec("10")).unwrap());
    assert_eq!(ledger.goals(), [trip].as_slice());
}

#[test]
fn blank_fields_are_rejected_without_state_change() {
    let (storage, mut ledger) = setup();

    let err = ledger
        .add_income(NewTransaction::new("   ", dec("10"), day(2025, 8, 1)))
        .unwrap_err();
    assert!(matches!(err, Error::MissingField("description")));

    let err = ledger.add_goal(new_goal("", "100")).unwrap_err();
    assert!(matches!(err, Error::MissingField("name")));

    let err = ledger.add_goal(new_goal("Zero", "0")).unwrap_err();
    assert!(matches!(err, Error::InvalidAmount(_)));

    let err = ledger
        .add_debt(NewDebt {
            name: " ".into(),
            total_amount: dec("100"),
            remaining_installments: 2,
            installment_value: dec("50"),
        })
        .unwrap_err();
    assert!(matches!(err, Error::MissingField("name")));

    assert!(ledger.incomes().is_empty());
    assert!(ledger.goals().is_empty());
    assert!(ledger.debts().is_empty());
    assert_eq!(storage.read(INCOMES_KEY).unwrap(), None);
    assert_eq!(storage.read(GOALS_KEY).unwrap(), None);
}

#[test]
fn reload_sees_same_collections_in_order() {
    let (storage, mut ledger) = setup();
    ledger
        .add_expense(
            NewTransaction::new("Groceries", dec("230.40"), day(2025, 8, 2))
                .with_category(Category::Daily)
                .with_tags(normalize_tags("food, #home")),
        )
        .unwrap();
    ledger
        .add_expense(NewTransaction::new("Gym", dec("99"), day(2025, 8, 3)))
        .unwrap();
    ledger
        .add_investment(NewInvestment {
            kind: InvestmentKind::RealEstateFunds,
            name: "HGLG11".into(),
            current_value: dec("4200"),
        })
        .unwrap();
    ledger
        .add_debt(NewDebt {
            name: "Phone".into(),
            total_amount: dec("2400"),
            remaining_installments: 10,
            installment_value: dec("240"),
        })
        .unwrap();
    let goal = ledger.add_goal(new_goal("Trip", "3000")).unwrap();
    ledger.add_to_goal(&goal.id, dec("100")).unwrap();

    let reloaded = Ledger::load(storage).unwrap();
    assert_eq!(reloaded.expenses(), ledger.expenses());
    assert_eq!(reloaded.investments(), ledger.investments());
    assert_eq!(reloaded.debts(), ledger.debts());
    assert_eq!(reloaded.goals()[0].current_amount, dec("100"));
    assert_eq!(
        reloaded.expenses()[0].tags,
        Some(vec!["#food".to_string(), "#home".to_string()])
    );
    assert_eq!(reloaded.expenses()[0].category, Category::Daily);
}

#[test]
fn corrupt_collection_is_reported_with_key() {
    let storage = Rc::new(MemoryStorage::new());
    storage.write("goals", "{not json").unwrap();

    match Ledger::load(storage) {
        Err(Error::Corrupt { key, .. }) => assert_eq!(key, "goals"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("corrupt data loaded"),
    }
}

#[test]
fn loads_numbers_written_as_json_numbers() {
    let storage = Rc::new(MemoryStorage::new());
    storage
        .write(
            "incomes",
            r#"[{"id":"1717000000000","type":"income","description":"Salary","amount":5000.5,"date":"2025-08-05","category":"fixed"}]"#,
        )
        .unwrap();
    storage
        .write(
            "debts",
            r#"[{"id":"1","name":"Car","totalAmount":12000,"remainingInstallments":24,"installmentValue":"500"}]"#,
        )
        .unwrap();

    let ledger = Ledger::load(storage).unwrap();
    assert_eq!(ledger.incomes()[0].amount, dec("5000.5"));
    assert_eq!(ledger.incomes()[0].category, Category::Fixed);
    assert_eq!(ledger.incomes()[0].tags, None);
    assert_eq!(ledger.debts()[0].installment_value, dec("500"));
}

#[test]
fn end_to_end_through_ledger() {
    let (_, mut ledger) = setup();
    let today = day(2025, 8, 15);
    ledger
        .add_income(NewTransaction::new("Salary", dec("5000"), day(2025, 8, 5)))
        .unwrap();
    ledger
        .add_expense(
            NewTransaction::new("Rent", dec("2000"), day(2025, 8, 1))
                .with_category(Category::Fixed),
        )
        .unwrap();
    ledger
        .add_debt(NewDebt {
            name: "Car".into(),
            total_amount: dec("6000"),
            remaining_installments: 12,
            installment_value: dec("500"),
        })
        .unwrap();
    ledger
        .add_goal(NewGoal {
            name: "Emergency fund".into(),
            target_amount: dec("2500"),
            target_date: day(2026, 1, 10),
        })
        .unwrap();

    let s = ledger.monthly_stats(today);
    assert_eq!(s.available_balance, dec("2500"));
    assert_eq!(s.monthly_goals, dec("500"));
    assert_eq!(s.projected_end_balance, dec("2000"));
}

#[test]
fn tags_are_normalized() {
    assert_eq!(
        normalize_tags(" food , #work,, "),
        Some(vec!["#food".to_string(), "#work".to_string()])
    );
    assert_eq!(normalize_tags(" , "), None);
    assert_eq!(normalize_tags(""), None);
}
