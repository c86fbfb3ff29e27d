use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::decimal::Money;
use crate::errors::{PlannerError, Result};
use crate::events::EventStore;
use crate::types::{PayoffStrategy, ShortfallPolicy};

use super::{Debt, PayoffSimulator, SimulationResult};

/// validated set of debts plus simulation settings, as entered for one client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffPlan {
    pub debts: Vec<Debt>,
    pub config: SimulationConfig,
}

impl PayoffPlan {
    pub fn builder() -> PayoffPlanBuilder {
        PayoffPlanBuilder::new()
    }

    /// parse and validate a plan from json
    pub fn from_json(json: &str) -> Result<Self> {
        let plan: PayoffPlan = serde_json::from_str(json)?;
        plan.validate()?;
        Ok(plan)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// reject values a form should never have let through
    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;

        let mut seen = HashSet::new();
        for debt in &self.debts {
            if !seen.insert(debt.id) {
                return Err(PlannerError::DuplicateDebt { id: debt.id });
            }
            if debt.balance.is_negative() {
                return Err(PlannerError::InvalidBalance {
                    name: debt.name.clone(),
                    balance: debt.balance,
                });
            }
            if debt.interest_rate.is_negative() {
                return Err(PlannerError::InvalidInterestRate {
                    name: debt.name.clone(),
                    rate: debt.interest_rate,
                });
            }
            if debt.minimum_payment.is_negative() {
                return Err(PlannerError::InvalidMinimumPayment {
                    name: debt.name.clone(),
                    amount: debt.minimum_payment,
                });
            }
        }

        Ok(())
    }

    /// debts that will take part in the simulation
    pub fn payable_debts(&self) -> impl Iterator<Item = &Debt> {
        self.debts.iter().filter(|d| d.is_payable())
    }

    pub fn total_balance(&self) -> Money {
        self.payable_debts().map(|d| d.balance).sum()
    }

    pub fn total_minimum_payment(&self) -> Money {
        self.payable_debts().map(|d| d.minimum_payment).sum()
    }

    pub fn simulate(&self) -> SimulationResult {
        PayoffSimulator::new(self.config.clone()).run(&self.debts)
    }

    pub fn simulate_with_events(&self, events: &mut EventStore) -> SimulationResult {
        PayoffSimulator::new(self.config.clone()).run_with_events(&self.debts, events)
    }
}

/// builder for payoff plans
#[derive(Debug, Default)]
pub struct PayoffPlanBuilder {
    debts: Vec<Debt>,
    config: SimulationConfig,
}

impl PayoffPlanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn debt(mut self, debt: Debt) -> Self {
        self.debts.push(debt);
        self
    }

    pub fn debts(mut self, debts: impl IntoIterator<Item = Debt>) -> Self {
        self.debts.extend(debts);
        self
    }

    pub fn extra_payment(mut self, amount: Money) -> Self {
        self.config.extra_payment = amount;
        self
    }

    pub fn strategy(mut self, strategy: PayoffStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn max_months(mut self, months: u32) -> Self {
        self.config.max_months = months;
        self
    }

    pub fn shortfall(mut self, policy: ShortfallPolicy) -> Self {
        self.config.shortfall = policy;
        self
    }

    pub fn build(self) -> Result<PayoffPlan> {
        let plan = PayoffPlan {
            debts: self.debts,
            config: self.config,
        };
        plan.validate()?;
        Ok(plan)
    }
}
