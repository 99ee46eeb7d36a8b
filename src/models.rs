// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, Result};
use crate::repo::Record;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Fixed,
    #[default]
    Variable,
    Daily,
    Extraordinary,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Fixed,
        Category::Variable,
        Category::Daily,
        Category::Extraordinary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fixed => "fixed",
            Category::Variable => "variable",
            Category::Daily => "daily",
            Category::Extraordinary => "extraordinary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Fixed => "Fixed",
            Category::Variable => "Variable",
            Category::Daily => "Daily",
            Category::Extraordinary => "Extraordinary",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(Error::UnknownCategory(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

/// Shared record shape of incomes and expenses. The amount is stored as a
/// magnitude; `kind` decides which side of the ledger it lands on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_recurring: Option<bool>,
}

pub type Income = Transaction;
pub type Expense = Transaction;

#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: Category,
    pub tags: Option<Vec<String>>,
    pub is_recurring: Option<bool>,
}

impl NewTransaction {
    pub fn new(description: impl Into<String>, amount: Decimal, date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
            category: Category::default(),
            tags: None,
            is_recurring: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_tags(mut self, tags: Option<Vec<String>>) -> Self {
        self.tags = tags;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require("description", &self.description)
    }

    pub(crate) fn into_transaction(self, id: String, kind: TransactionKind) -> Transaction {
        Transaction {
            id,
            kind,
            description: self.description.trim().to_string(),
            amount: self.amount,
            date: self.date,
            category: self.category,
            tags: self.tags,
            is_recurring: self.is_recurring,
        }
    }
}

/// Savings goal ("vault"). `current_amount` only grows through deposits and
/// may overshoot the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
}

impl Goal {
    /// Funded share of the target in percent.
    pub fn progress(&self) -> Decimal {
        crate::stats::percent_of(self.current_amount, self.target_amount)
    }

    pub fn is_completed(&self) -> bool {
        self.progress() >= Decimal::ONE_HUNDRED
    }

    pub fn remaining(&self) -> Decimal {
        self.target_amount.saturating_sub(self.current_amount)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub target_date: NaiveDate,
}

impl NewGoal {
    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        if self.target_amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(self.target_amount));
        }
        Ok(())
    }

    pub(crate) fn into_goal(self, id: String) -> Goal {
        Goal {
            id,
            name: self.name.trim().to_string(),
            target_amount: self.target_amount,
            current_amount: Decimal::ZERO,
            target_date: self.target_date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvestmentKind {
    FixedIncome,
    Stocks,
    RealEstateFunds,
    Crypto,
}

impl InvestmentKind {
    pub const ALL: [InvestmentKind; 4] = [
        InvestmentKind::FixedIncome,
        InvestmentKind::Stocks,
        InvestmentKind::RealEstateFunds,
        InvestmentKind::Crypto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentKind::FixedIncome => "fixed-income",
            InvestmentKind::Stocks => "stocks",
            InvestmentKind::RealEstateFunds => "real-estate-funds",
            InvestmentKind::Crypto => "crypto",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvestmentKind::FixedIncome => "Fixed income",
            InvestmentKind::Stocks => "Stocks",
            InvestmentKind::RealEstateFunds => "Real-estate funds",
            InvestmentKind::Crypto => "Crypto",
        }
    }
}

impl FromStr for InvestmentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_lowercase();
        InvestmentKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or(Error::UnknownInvestmentKind(s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InvestmentKind,
    pub name: String,
    pub current_value: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewInvestment {
    pub kind: InvestmentKind,
    pub name: String,
    pub current_value: Decimal,
}

impl NewInvestment {
    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)
    }

    pub(crate) fn into_investment(self, id: String) -> Investment {
        Investment {
            id,
            kind: self.kind,
            name: self.name.trim().to_string(),
            current_value: self.current_value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub name: String,
    pub total_amount: Decimal,
    pub remaining_installments: u32,
    pub installment_value: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDebt {
    pub name: String,
    pub total_amount: Decimal,
    pub remaining_installments: u32,
    pub installment_value: Decimal,
}

impl NewDebt {
    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)
    }

    pub(crate) fn into_debt(self, id: String) -> Debt {
        Debt {
            id,
            name: self.name.trim().to_string(),
            total_amount: self.total_amount,
            remaining_installments: self.remaining_installments,
            installment_value: self.installment_value,
        }
    }
}

impl Record for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Goal {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Investment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Debt {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Splits a comma separated tag list, trimming each tag and prefixing `#`
/// where missing. Returns `None` when no tag survives.
pub fn normalize_tags(raw: &str) -> Option<Vec<String>> {
    let tags: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            if t.starts_with('#') {
                t.to_string()
            } else {
                format!("#{}", t)
            }
        })
        .collect();
    if tags.is_empty() { None } else { Some(tags) }
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingField(field));
    }
    Ok(())
}
