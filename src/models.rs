// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Income => write!(f, "income"),
            TxKind::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TxKind {
    type Err = LedgerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            other => Err(LedgerError::Validation(format!(
                "unknown transaction type '{}', expected income|expense",
                other
            ))),
        }
    }
}

/// Fixed category set. The valid subset depends on the transaction kind;
/// income and expense lists are disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Rent,
    Utilities,
    Transport,
    Shopping,
    Entertainment,
    Health,
    Other,
    Salary,
    Investment,
    #[serde(rename = "Other Income")]
    OtherIncome,
}

pub const EXPENSE_CATEGORIES: [Category; 8] = [
    Category::Food,
    Category::Rent,
    Category::Utilities,
    Category::Transport,
    Category::Shopping,
    Category::Entertainment,
    Category::Health,
    Category::Other,
];

pub const INCOME_CATEGORIES: [Category; 3] =
    [Category::Salary, Category::Investment, Category::OtherIncome];

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Rent => "Rent",
            Category::Utilities => "Utilities",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Other => "Other",
            Category::Salary => "Salary",
            Category::Investment => "Investment",
            Category::OtherIncome => "Other Income",
        }
    }

    /// The allowed-category table for a kind, checked at the validation
    /// boundary rather than inferred ad hoc.
    pub fn allowed_for(kind: TxKind) -> &'static [Category] {
        match kind {
            TxKind::Income => &INCOME_CATEGORIES,
            TxKind::Expense => &EXPENSE_CATEGORIES,
        }
    }

    pub fn valid_for(&self, kind: TxKind) -> bool {
        Self::allowed_for(kind).contains(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = LedgerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let all = EXPENSE_CATEGORIES.iter().chain(INCOME_CATEGORIES.iter());
        for c in all {
            if c.name().eq_ignore_ascii_case(s.trim()) {
                return Ok(*c);
            }
        }
        Err(LedgerError::Validation(format!(
            "unknown category '{}'",
            s.trim()
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurPattern {
    Daily,
    Weekly,
    Monthly,
}

impl FromStr for RecurPattern {
    type Err = LedgerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(RecurPattern::Daily),
            "weekly" => Ok(RecurPattern::Weekly),
            "monthly" => Ok(RecurPattern::Monthly),
            other => Err(LedgerError::Validation(format!(
                "unknown recurrence pattern '{}', expected daily|weekly|monthly",
                other
            ))),
        }
    }
}

/// A recurrence rule attached to a stored transaction. The stored row is a
/// template; occurrences for other dates are derived at read time and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    pub pattern: RecurPattern,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal, // invariant: > 0, enforced on create/update
    pub kind: TxKind,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
}

impl Transaction {
    pub fn is_template(&self) -> bool {
        self.recurrence.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRule {
    pub id: String,
    pub category: Category,
    pub monthly_limit: Decimal, // >= 0; 0 means any spend is over budget
}

/// Filter spec for listing transactions. Absent fields impose no constraint;
/// present fields combine with AND semantics.
#[derive(Debug, Clone, Default)]
pub struct TxFilter {
    pub kind: Option<TxKind>,
    pub category: Option<Category>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub text: Option<String>,
}

impl TxFilter {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.category.is_none()
            && self.from.is_none()
            && self.to.is_none()
            && self.text.is_none()
    }
}
