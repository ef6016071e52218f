// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{BudgetRule, Category};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Computed projection of one budget rule against current-month spend.
/// Never persisted; recomputed whenever rules or transactions change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub category: Category,
    pub monthly_limit: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub over: bool,
    pub percent_spent: Decimal,
}

/// Evaluates budget rules against a map of current-month expense totals.
///
/// A category missing from the spend map counts as zero spent. A zero limit
/// is valid and means any spend is over budget; its percent-spent is 100 as
/// soon as anything is spent, 0 otherwise. When several rules name the same
/// category the last one wins and earlier ones are dropped.
pub fn evaluate(
    rules: &[BudgetRule],
    spend_by_category: &BTreeMap<Category, Decimal>,
) -> Vec<BudgetStatus> {
    let mut out: Vec<BudgetStatus> = Vec::with_capacity(rules.len());
    for rule in rules {
        let status = status_for(rule, spend_by_category);
        if let Some(prev) = out.iter_mut().find(|s| s.category == rule.category) {
            *prev = status;
        } else {
            out.push(status);
        }
    }
    out
}

fn status_for(rule: &BudgetRule, spend: &BTreeMap<Category, Decimal>) -> BudgetStatus {
    let spent = spend.get(&rule.category).copied().unwrap_or(Decimal::ZERO);
    let limit = rule.monthly_limit.max(Decimal::ZERO);
    let remaining = (limit - spent).max(Decimal::ZERO);
    let over = spent > limit;
    let percent_spent = if limit > Decimal::ZERO {
        (spent / limit * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED)
    } else if spent > Decimal::ZERO {
        Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    BudgetStatus {
        category: rule.category,
        monthly_limit: limit,
        spent,
        remaining,
        over,
        percent_spent,
    }
}
