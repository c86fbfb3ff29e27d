use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{PlannerError, Result};
use crate::types::{PayoffStrategy, ShortfallPolicy};

/// default ceiling on simulated months (50 years)
pub const DEFAULT_MAX_MONTHS: u32 = 600;

/// payoff simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// monthly amount available beyond minimum payments
    pub extra_payment: Money,
    pub strategy: PayoffStrategy,
    #[serde(default = "default_max_months")]
    pub max_months: u32,
    #[serde(default)]
    pub shortfall: ShortfallPolicy,
}

fn default_max_months() -> u32 {
    DEFAULT_MAX_MONTHS
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            extra_payment: Money::ZERO,
            strategy: PayoffStrategy::Avalanche,
            max_months: DEFAULT_MAX_MONTHS,
            shortfall: ShortfallPolicy::Accrue,
        }
    }
}

impl SimulationConfig {
    /// create configuration for a given strategy and extra payment
    pub fn new(strategy: PayoffStrategy, extra_payment: Money) -> Self {
        Self {
            extra_payment,
            strategy,
            ..Self::default()
        }
    }

    /// highest interest rate first
    pub fn avalanche(extra_payment: Money) -> Self {
        Self::new(PayoffStrategy::Avalanche, extra_payment)
    }

    /// lowest balance first
    pub fn snowball(extra_payment: Money) -> Self {
        Self::new(PayoffStrategy::Snowball, extra_payment)
    }

    pub fn with_max_months(mut self, max_months: u32) -> Self {
        self.max_months = max_months;
        self
    }

    pub fn with_shortfall(mut self, shortfall: ShortfallPolicy) -> Self {
        self.shortfall = shortfall;
        self
    }

    /// extra payment as the simulator sees it (negative budgets count as zero)
    pub fn effective_extra_payment(&self) -> Money {
        self.extra_payment.non_negative()
    }

    /// strict validation for callers that want to reject bad input up front
    pub fn validate(&self) -> Result<()> {
        if self.extra_payment.is_negative() {
            return Err(PlannerError::InvalidAmount {
                field: "extra_payment".to_string(),
                amount: self.extra_payment,
            });
        }

        if self.max_months == 0 {
            return Err(PlannerError::InvalidConfiguration {
                message: "max_months must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let config = SimulationConfig::snowball(Money::from_major(150));
        assert_eq!(config.strategy, PayoffStrategy::Snowball);
        assert_eq!(config.extra_payment, Money::from_major(150));
        assert_eq!(config.max_months, DEFAULT_MAX_MONTHS);
        assert_eq!(config.shortfall, ShortfallPolicy::Accrue);

        let config = SimulationConfig::avalanche(Money::ZERO)
            .with_max_months(120)
            .with_shortfall(ShortfallPolicy::Clamp);
        assert_eq!(config.max_months, 120);
        assert_eq!(config.shortfall, ShortfallPolicy::Clamp);
    }

    #[test]
    fn test_validation() {
        assert!(SimulationConfig::default().validate().is_ok());

        let negative = SimulationConfig::avalanche(Money::from_major(-10));
        assert!(matches!(negative.validate(), Err(PlannerError::InvalidAmount { .. })));
        assert_eq!(negative.effective_extra_payment(), Money::ZERO);

        let no_months = SimulationConfig::default().with_max_months(0);
        assert!(matches!(no_months.validate(), Err(PlannerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{"extra_payment": 100, "strategy": "snowball"}"#).unwrap();
        assert_eq!(config.extra_payment, Money::from_major(100));
        assert_eq!(config.max_months, DEFAULT_MAX_MONTHS);
        assert_eq!(config.shortfall, ShortfallPolicy::Accrue);
    }
}
