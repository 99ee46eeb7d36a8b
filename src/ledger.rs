// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, Result};
use crate::models::{
    Debt, Expense, Goal, Income, Investment, NewDebt, NewGoal, NewInvestment, NewTransaction,
    Transaction, TransactionKind,
};
use crate::repo::Repository;
use crate::stats::{self, MonthlyStats};
use crate::store::Storage;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::rc::Rc;
use tracing::info;

pub const INCOMES_KEY: &str = "incomes";
pub const EXPENSES_KEY: &str = "expenses";
pub const GOALS_KEY: &str = "goals";
pub const INVESTMENTS_KEY: &str = "investments";
pub const DEBTS_KEY: &str = "debts";

/// The five collections of one user, each owned by its own repository.
pub struct Ledger {
    incomes: Repository<Income>,
    expenses: Repository<Expense>,
    goals: Repository<Goal>,
    investments: Repository<Investment>,
    debts: Repository<Debt>,
}

impl Ledger {
    pub fn load(storage: Rc<dyn Storage>) -> Result<Self> {
        Ok(Self {
            incomes: Repository::load(INCOMES_KEY, Rc::clone(&storage))?,
            expenses: Repository::load(EXPENSES_KEY, Rc::clone(&storage))?,
            goals: Repository::load(GOALS_KEY, Rc::clone(&storage))?,
            investments: Repository::load(INVESTMENTS_KEY, Rc::clone(&storage))?,
            debts: Repository::load(DEBTS_KEY, storage)?,
        })
    }

    pub fn incomes(&self) -> &[Income] {
        self.incomes.items()
    }

    pub fn expenses(&self) -> &[Expense] {
        self.expenses.items()
    }

    pub fn goals(&self) -> &[Goal] {
        self.goals.items()
    }

    pub fn investments(&self) -> &[Investment] {
        self.investments.items()
    }

    pub fn debts(&self) -> &[Debt] {
        self.debts.items()
    }

    pub fn transactions(&self, kind: TransactionKind) -> &[Transaction] {
        match kind {
            TransactionKind::Income => self.incomes(),
            TransactionKind::Expense => self.expenses(),
        }
    }

    pub fn add_income(&mut self, income: NewTransaction) -> Result<Income> {
        self.add_transaction(TransactionKind::Income, income)
    }

    pub fn add_expense(&mut self, expense: NewTransaction) -> Result<Expense> {
        self.add_transaction(TransactionKind::Expense, expense)
    }

    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        tx: NewTransaction,
    ) -> Result<Transaction> {
        tx.validate()?;
        let repo = match kind {
            TransactionKind::Income => &mut self.incomes,
            TransactionKind::Expense => &mut self.expenses,
        };
        let created = repo.insert(|id| tx.into_transaction(id, kind))?;
        info!(
            kind = kind.as_str(),
            id = %created.id,
            amount = %created.amount,
            "transaction added"
        );
        Ok(created)
    }

    pub fn add_goal(&mut self, goal: NewGoal) -> Result<Goal> {
        goal.validate()?;
        let created = self.goals.insert(|id| goal.into_goal(id))?;
        info!(id = %created.id, target = %created.target_amount, "goal added");
        Ok(created)
    }

    /// Deposits `amount` into the goal with `goal_id`. Returns `false` when no
    /// such goal exists. A deposit that would push the saved amount past the
    /// range of `Decimal` is refused.
    pub fn add_to_goal(&mut self, goal_id: &str, amount: Decimal) -> Result<bool> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(amount));
        }
        let Some(goal) = self.goals.get(goal_id) else {
            return Ok(false);
        };
        let balance = goal
            .current_amount
            .checked_add(amount)
            .ok_or(Error::AmountOverflow(amount))?;
        let found = self
            .goals
            .update(goal_id, |goal| goal.current_amount = balance)?;
        if found {
            info!(id = goal_id, %amount, %balance, "goal deposit");
        }
        Ok(found)
    }

    pub fn add_investment(&mut self, investment: NewInvestment) -> Result<Investment> {
        investment.validate()?;
        let created = self
            .investments
            .insert(|id| investment.into_investment(id))?;
        info!(id = %created.id, kind = created.kind.as_str(), "investment added");
        Ok(created)
    }

    pub fn add_debt(&mut self, debt: NewDebt) -> Result<Debt> {
        debt.validate()?;
        let created = self.debts.insert(|id| debt.into_debt(id))?;
        info!(id = %created.id, installments = created.remaining_installments, "debt added");
        Ok(created)
    }

    pub fn delete_income(&mut self, id: &str) -> Result<bool> {
        self.incomes.delete(id)
    }

    pub fn delete_expense(&mut self, id: &str) -> Result<bool> {
        self.expenses.delete(id)
    }

    pub fn delete_transaction(&mut self, kind: TransactionKind, id: &str) -> Result<bool> {
        match kind {
            TransactionKind::Income => self.delete_income(id),
            TransactionKind::Expense => self.delete_expense(id),
        }
    }

    pub fn delete_goal(&mut self, id: &str) -> Result<bool> {
        self.goals.delete(id)
    }

    pub fn delete_investment(&mut self, id: &str) -> Result<bool> {
        self.investments.delete(id)
    }

    pub fn delete_debt(&mut self, id: &str) -> Result<bool> {
        self.debts.delete(id)
    }

    pub fn monthly_stats(&self, today: NaiveDate) -> MonthlyStats {
        stats::monthly_stats(
            today,
            self.incomes(),
            self.expenses(),
            self.goals(),
            self.debts(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty()
            && self.expenses.is_empty()
            && self.goals.is_empty()
            && self.investments.is_empty()
            && self.debts.is_empty()
    }
}
