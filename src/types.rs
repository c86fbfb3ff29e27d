use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::PlannerError;

/// unique identifier for a debt within a plan
pub type DebtId = Uuid;

/// unique identifier for a client goal
pub type GoalId = Uuid;

/// debt prioritization strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PayoffStrategy {
    /// highest interest rate first
    #[default]
    Avalanche,
    /// lowest balance first
    Snowball,
}

impl PayoffStrategy {
    pub const ALL: [PayoffStrategy; 2] = [PayoffStrategy::Avalanche, PayoffStrategy::Snowball];

    pub fn as_str(&self) -> &'static str {
        match self {
            PayoffStrategy::Avalanche => "avalanche",
            PayoffStrategy::Snowball => "snowball",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PayoffStrategy::Avalanche => "Debt Avalanche (Highest Interest First)",
            PayoffStrategy::Snowball => "Debt Snowball (Lowest Balance First)",
        }
    }
}

impl fmt::Display for PayoffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoffStrategy {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avalanche" => Ok(PayoffStrategy::Avalanche),
            "snowball" => Ok(PayoffStrategy::Snowball),
            _ => Err(PlannerError::UnknownStrategy {
                value: s.to_string(),
            }),
        }
    }
}

/// what to do when a minimum payment does not cover the month's interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShortfallPolicy {
    /// the uncovered interest is added to the balance
    #[default]
    Accrue,
    /// principal payment is floored at zero, balance never grows
    Clamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("avalanche".parse::<PayoffStrategy>().unwrap(), PayoffStrategy::Avalanche);
        assert_eq!(" Snowball ".parse::<PayoffStrategy>().unwrap(), PayoffStrategy::Snowball);

        let err = "hybrid".parse::<PayoffStrategy>().unwrap_err();
        assert!(matches!(err, PlannerError::UnknownStrategy { ref value } if value == "hybrid"));
    }

    #[test]
    fn test_strategy_serde_names() {
        assert_eq!(serde_json::to_string(&PayoffStrategy::Snowball).unwrap(), "\"snowball\"");
        let policy: ShortfallPolicy = serde_json::from_str("\"clamp\"").unwrap();
        assert_eq!(policy, ShortfallPolicy::Clamp);
        assert_eq!(PayoffStrategy::default(), PayoffStrategy::Avalanche);
    }
}
