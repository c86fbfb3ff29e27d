use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{PlannerError, Result};
use crate::types::GoalId;

/// open-ended category name to amount mapping (salary, rent, checking, ...)
pub type CategoryAmounts = BTreeMap<String, Money>;

/// total across every category
pub fn sum_categories(amounts: &CategoryAmounts) -> Money {
    amounts.values().sum()
}

pub fn net_income(income: &CategoryAmounts, expenses: &CategoryAmounts) -> Money {
    sum_categories(income) - sum_categories(expenses)
}

pub fn net_worth(assets: &CategoryAmounts, liabilities: &CategoryAmounts) -> Money {
    sum_categories(assets) - sum_categories(liabilities)
}

/// a client savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(default = "Uuid::new_v4")]
    pub id: GoalId,
    pub name: String,
    pub target: Money,
    pub current: Money,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}

impl Goal {
    pub fn new(name: impl Into<String>, target: Money, current: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target,
            current,
            target_date: None,
        }
    }

    pub fn with_target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }

    pub fn remaining(&self) -> Money {
        (self.target - self.current).non_negative()
    }
}

/// progress towards a goal in percent; not capped at 100
pub fn goal_progress_percent(goal: &Goal) -> Result<Decimal> {
    if goal.target.is_zero() {
        return Err(PlannerError::GoalTargetZero {
            name: goal.name.clone(),
        });
    }
    Ok(goal.current.as_decimal() * Decimal::ONE_HUNDRED / goal.target.as_decimal())
}

/// a client's monthly income and expenses plus balance sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialInfo {
    #[serde(default)]
    pub income: CategoryAmounts,
    #[serde(default)]
    pub expenses: CategoryAmounts,
    #[serde(default)]
    pub assets: CategoryAmounts,
    #[serde(default)]
    pub liabilities: CategoryAmounts,
}

impl FinancialInfo {
    pub fn total_income(&self) -> Money {
        sum_categories(&self.income)
    }

    pub fn total_expenses(&self) -> Money {
        sum_categories(&self.expenses)
    }

    pub fn total_assets(&self) -> Money {
        sum_categories(&self.assets)
    }

    pub fn total_liabilities(&self) -> Money {
        sum_categories(&self.liabilities)
    }

    pub fn net_income(&self) -> Money {
        net_income(&self.income, &self.expenses)
    }

    pub fn net_worth(&self) -> Money {
        net_worth(&self.assets, &self.liabilities)
    }
}

/// headline figures for one client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub total_assets: Money,
    pub total_liabilities: Money,
    pub net_income: Money,
    pub net_worth: Money,
    /// mean progress over goals with a non-zero target
    pub average_goal_progress: Option<Decimal>,
}

impl FinancialSummary {
    pub fn from_client(info: &FinancialInfo, goals: &[Goal]) -> Self {
        let progress: Vec<Decimal> = goals
            .iter()
            .filter_map(|g| goal_progress_percent(g).ok())
            .collect();

        let average_goal_progress = if progress.is_empty() {
            None
        } else {
            Some(progress.iter().sum::<Decimal>() / Decimal::from(progress.len()))
        };

        Self {
            total_income: info.total_income(),
            total_expenses: info.total_expenses(),
            total_assets: info.total_assets(),
            total_liabilities: info.total_liabilities(),
            net_income: info.net_income(),
            net_worth: info.net_worth(),
            average_goal_progress,
        }
    }
}

/// advisor-wide totals across a book of clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub client_count: usize,
    pub total_net_worth: Money,
    pub average_net_worth: Money,
}

impl PortfolioSummary {
    pub fn from_clients<'a>(clients: impl IntoIterator<Item = &'a FinancialInfo>) -> Self {
        let (client_count, total_net_worth) = clients
            .into_iter()
            .fold((0usize, Money::ZERO), |(count, total), info| (count + 1, total + info.net_worth()));

        let average_net_worth = if client_count == 0 {
            Money::ZERO
        } else {
            total_net_worth / Decimal::from(client_count)
        };

        Self {
            client_count,
            total_net_worth,
            average_net_worth,
        }
    }
}
