pub mod comparison;
pub mod ordering;
pub mod plan;
pub mod simulator;

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SimulationConfig;
use crate::decimal::{Money, Rate};
use crate::events::EventStore;
use crate::types::{DebtId, PayoffStrategy};

pub use comparison::{compare_strategies, estimated_monthly_interest, StrategyComparison};
pub use ordering::prioritize;
pub use plan::{PayoffPlan, PayoffPlanBuilder};
pub use simulator::PayoffSimulator;

/// one liability being paid down
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    #[serde(default = "Uuid::new_v4")]
    pub id: DebtId,
    pub name: String,
    pub balance: Money,
    /// annual percentage rate
    pub interest_rate: Rate,
    pub minimum_payment: Money,
}

impl Debt {
    pub fn new(
        name: impl Into<String>,
        balance: Money,
        interest_rate: Rate,
        minimum_payment: Money,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance,
            interest_rate,
            minimum_payment,
        }
    }

    pub fn with_id(mut self, id: DebtId) -> Self {
        self.id = id;
        self
    }

    /// debts with no balance or no minimum payment take no part in a simulation
    pub fn is_payable(&self) -> bool {
        self.balance.is_positive() && self.minimum_payment.is_positive()
    }
}

/// a debt retired during the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffEntry {
    pub debt_id: DebtId,
    pub debt_name: String,
    pub month_paid_off: u32,
    pub original_balance: Money,
}

/// totals for one simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    pub month: u32,
    pub interest_charged: Money,
    /// net principal reduction, extra payment included; negative when balances grew
    pub principal_paid: Money,
    pub extra_applied: Money,
    pub remaining_balance: Money,
    pub debts_outstanding: usize,
}

/// outcome of a payoff simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub strategy: PayoffStrategy,
    pub total_months: u32,
    pub total_interest_paid: Money,
    pub payoff_order: Vec<PayoffEntry>,
    pub schedule: Vec<MonthlySnapshot>,
    /// false when the month ceiling stopped the simulation
    pub converged: bool,
    pub remaining_balance: Money,
}

impl SimulationResult {
    pub(crate) fn empty(strategy: PayoffStrategy) -> Self {
        Self {
            strategy,
            total_months: 0,
            total_interest_paid: Money::ZERO,
            payoff_order: Vec::new(),
            schedule: Vec::new(),
            converged: true,
            remaining_balance: Money::ZERO,
        }
    }

    /// whole years and leftover months until debt-free
    pub fn years_and_months(&self) -> (u32, u32) {
        (self.total_months / 12, self.total_months % 12)
    }

    /// calendar date the last debt is retired, counting from `start`
    pub fn debt_free_date(&self, start: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if !self.converged {
            return None;
        }
        start.checked_add_months(Months::new(self.total_months))
    }

    pub fn entry_for(&self, debt_id: DebtId) -> Option<&PayoffEntry> {
        self.payoff_order.iter().find(|e| e.debt_id == debt_id)
    }
}

/// simulate paying off `debts` under `config`
pub fn simulate(debts: &[Debt], config: &SimulationConfig) -> SimulationResult {
    PayoffSimulator::new(config.clone()).run(debts)
}

/// simulate and record events into `events`
pub fn simulate_with_events(
    debts: &[Debt],
    config: &SimulationConfig,
    events: &mut EventStore,
) -> SimulationResult {
    PayoffSimulator::new(config.clone()).run_with_events(debts, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payable_filter() {
        let rate = Rate::from_percentage(dec!(10));
        assert!(Debt::new("card", Money::from_major(100), rate, Money::from_major(10)).is_payable());
        assert!(!Debt::new("settled", Money::ZERO, rate, Money::from_major(10)).is_payable());
        assert!(!Debt::new("no minimum", Money::from_major(100), rate, Money::ZERO).is_payable());
        assert!(!Debt::new("credit", Money::from_major(-5), rate, Money::from_major(10)).is_payable());
    }

    #[test]
    fn test_debt_json_uses_percentages() {
        let json = r#"{"name": "Visa", "balance": "2500", "interest_rate": "18.99", "minimum_payment": 75}"#;
        let debt: Debt = serde_json::from_str(json).unwrap();
        assert_eq!(debt.interest_rate, Rate::from_percentage(dec!(18.99)));
        assert_eq!(debt.balance, Money::from_major(2_500));
        assert_eq!(debt.minimum_payment, Money::from_major(75));
    }

    #[test]
    fn test_debt_free_date() {
        let mut result = SimulationResult::empty(PayoffStrategy::Avalanche);
        result.total_months = 14;
        let start = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();

        let date = result.debt_free_date(start).unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2025, 3, 31, 0, 0, 0).unwrap());
        assert_eq!(result.years_and_months(), (1, 2));

        result.converged = false;
        assert!(result.debt_free_date(start).is_none());
    }
}
