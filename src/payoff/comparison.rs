use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::decimal::{Money, Rate};
use crate::types::PayoffStrategy;

use super::{simulate, Debt, SimulationResult};

/// avalanche and snowball run side by side on the same debts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub avalanche: SimulationResult,
    pub snowball: SimulationResult,
    /// snowball interest minus avalanche interest
    pub interest_saved: Money,
    /// snowball months minus avalanche months
    pub months_saved: i64,
}

impl StrategyComparison {
    /// lower interest wins, then fewer months; avalanche on a full tie
    pub fn recommended(&self) -> PayoffStrategy {
        if self.interest_saved.is_negative() {
            return PayoffStrategy::Snowball;
        }
        if self.interest_saved.is_zero() && self.months_saved < 0 {
            return PayoffStrategy::Snowball;
        }
        PayoffStrategy::Avalanche
    }

    pub fn result_for(&self, strategy: PayoffStrategy) -> &SimulationResult {
        match strategy {
            PayoffStrategy::Avalanche => &self.avalanche,
            PayoffStrategy::Snowball => &self.snowball,
        }
    }
}

/// run both strategies with the same extra payment and default limits
pub fn compare_strategies(debts: &[Debt], extra_payment: Money) -> StrategyComparison {
    let avalanche = simulate(debts, &SimulationConfig::avalanche(extra_payment));
    let snowball = simulate(debts, &SimulationConfig::snowball(extra_payment));

    StrategyComparison {
        interest_saved: snowball.total_interest_paid - avalanche.total_interest_paid,
        months_saved: i64::from(snowball.total_months) - i64::from(avalanche.total_months),
        avalanche,
        snowball,
    }
}

/// rough monthly interest: total balance at the average rate of all supplied debts
///
/// Every debt counts, payable or not, and rates are not balance-weighted.
pub fn estimated_monthly_interest(debts: &[Debt]) -> Money {
    if debts.is_empty() {
        return Money::ZERO;
    }

    let total_balance: Money = debts.iter().map(|d| d.balance).sum();
    let rate_sum: Decimal = debts.iter().map(|d| d.interest_rate.as_decimal()).sum();
    let average_rate = Rate::from_decimal(rate_sum / Decimal::from(debts.len()));

    total_balance.monthly_interest(average_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn debt(name: &str, balance: i64, rate: Decimal, minimum: i64) -> Debt {
        Debt::new(
            name,
            Money::from_major(balance),
            Rate::from_percentage(rate),
            Money::from_major(minimum),
        )
    }

    #[test]
    fn test_avalanche_saves_interest_when_rankings_disagree() {
        let debts = vec![
            debt("store card", 800, dec!(9), 40),
            debt("credit card", 6_000, dec!(24), 150),
            debt("car loan", 12_000, dec!(6), 300),
        ];

        let comparison = compare_strategies(&debts, Money::from_major(250));

        assert!(comparison.avalanche.converged);
        assert!(comparison.snowball.converged);
        assert!(comparison.interest_saved.is_positive());
        assert_eq!(comparison.recommended(), PayoffStrategy::Avalanche);
        assert_eq!(comparison.result_for(PayoffStrategy::Snowball).strategy, PayoffStrategy::Snowball);
        assert_eq!(comparison.snowball.payoff_order[0].debt_name, "store card");
    }

    #[test]
    fn test_identical_rankings_tie() {
        let debts = vec![debt("small", 500, dec!(20), 50), debt("big", 2_000, dec!(5), 100)];
        let comparison = compare_strategies(&debts, Money::from_major(100));

        assert_eq!(comparison.interest_saved, Money::ZERO);
        assert_eq!(comparison.months_saved, 0);
        assert_eq!(comparison.recommended(), PayoffStrategy::Avalanche);
    }

    #[test]
    fn test_estimated_monthly_interest() {
        let debts = vec![debt("a", 1_000, dec!(12), 50), debt("b", 2_000, dec!(24), 50)];
        // 3000 at an 18% average: 45 a month
        assert_eq!(estimated_monthly_interest(&debts), Money::from_major(45));
        assert_eq!(estimated_monthly_interest(&[]), Money::ZERO);
    }
}
