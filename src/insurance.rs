use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// default number of years of income to replace
pub const DEFAULT_YEARS_TO_REPLACE: u32 = 10;

/// rough monthly premium per unit of coverage
const PREMIUM_FACTOR: Decimal = dec!(0.001);

/// life insurance needs inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsuranceNeedsInput {
    pub annual_income: Money,
    pub years_to_replace: u32,
    pub current_savings: Money,
    pub existing_coverage: Money,
    pub final_expenses: Money,
    pub outstanding_debts: Money,
    /// informational, does not change the calculation
    pub dependents: u32,
    pub spouse_income: Money,
}

impl Default for InsuranceNeedsInput {
    fn default() -> Self {
        Self {
            annual_income: Money::ZERO,
            years_to_replace: DEFAULT_YEARS_TO_REPLACE,
            current_savings: Money::ZERO,
            existing_coverage: Money::ZERO,
            final_expenses: Money::from_major(15_000),
            outstanding_debts: Money::ZERO,
            dependents: 0,
            spouse_income: Money::ZERO,
        }
    }
}

/// life insurance needs breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceNeeds {
    pub income_replacement: Money,
    pub total_needs: Money,
    pub available_resources: Money,
    /// never negative
    pub required_coverage: Money,
    pub monthly_premium_estimate: Money,
}

impl InsuranceNeeds {
    pub fn is_adequately_covered(&self) -> bool {
        self.required_coverage.is_zero()
    }
}

/// additional coverage needed to replace income and settle final costs
pub fn calculate_coverage(input: &InsuranceNeedsInput) -> InsuranceNeeds {
    let income_replacement =
        (input.annual_income - input.spouse_income) * Decimal::from(input.years_to_replace);
    let total_needs = income_replacement + input.final_expenses + input.outstanding_debts;
    let available_resources = input.current_savings + input.existing_coverage;
    let required_coverage = (total_needs - available_resources).non_negative();

    InsuranceNeeds {
        income_replacement,
        total_needs,
        available_resources,
        required_coverage,
        monthly_premium_estimate: required_coverage * PREMIUM_FACTOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let input = InsuranceNeedsInput::default();
        assert_eq!(input.years_to_replace, 10);
        assert_eq!(input.final_expenses, Money::from_major(15_000));

        // nothing but final expenses to cover
        let needs = calculate_coverage(&input);
        assert_eq!(needs.required_coverage, Money::from_major(15_000));
        assert_eq!(needs.monthly_premium_estimate, Money::from_major(15));
    }

    #[test]
    fn test_coverage_breakdown() {
        let input = InsuranceNeedsInput {
            annual_income: Money::from_major(90_000),
            spouse_income: Money::from_major(30_000),
            current_savings: Money::from_major(40_000),
            existing_coverage: Money::from_major(250_000),
            outstanding_debts: Money::from_major(120_000),
            dependents: 2,
            ..InsuranceNeedsInput::default()
        };

        let needs = calculate_coverage(&input);
        assert_eq!(needs.income_replacement, Money::from_major(600_000));
        assert_eq!(needs.total_needs, Money::from_major(735_000));
        assert_eq!(needs.available_resources, Money::from_major(290_000));
        assert_eq!(needs.required_coverage, Money::from_major(445_000));
        assert_eq!(needs.monthly_premium_estimate, Money::from_major(445));
        assert!(!needs.is_adequately_covered());
    }

    #[test]
    fn test_surplus_resources_need_no_coverage() {
        let input = InsuranceNeedsInput {
            annual_income: Money::from_major(50_000),
            years_to_replace: 2,
            existing_coverage: Money::from_major(1_000_000),
            ..InsuranceNeedsInput::default()
        };

        let needs = calculate_coverage(&input);
        assert_eq!(needs.required_coverage, Money::ZERO);
        assert_eq!(needs.monthly_premium_estimate, Money::ZERO);
        assert!(needs.is_adequately_covered());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let input: InsuranceNeedsInput = serde_json::from_str(r#"{"annual_income": 80000}"#).unwrap();
        assert_eq!(input.years_to_replace, DEFAULT_YEARS_TO_REPLACE);
        assert_eq!(input.final_expenses, Money::from_major(15_000));
    }
}
