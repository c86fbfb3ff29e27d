//! serializable report views, rounded for presentation

use chrono::{DateTime, Months, Utc};
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::metrics::{goal_progress_percent, FinancialSummary, Goal};
use crate::payoff::SimulationResult;
use crate::types::{DebtId, GoalId, PayoffStrategy};

/// payoff simulation report
#[derive(Debug, Serialize, Deserialize)]
pub struct PayoffReport {
    pub generated_at: DateTime<Utc>,
    pub strategy: PayoffStrategy,
    pub strategy_description: String,
    pub total_months: u32,
    pub years: u32,
    pub months: u32,
    pub total_interest_paid: Money,
    pub converged: bool,
    pub remaining_balance: Money,
    pub debt_free_date: Option<DateTime<Utc>>,
    pub payoff_order: Vec<PayoffLine>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PayoffLine {
    pub debt_id: DebtId,
    pub debt_name: String,
    pub month_paid_off: u32,
    pub original_balance: Money,
    pub projected_date: Option<DateTime<Utc>>,
}

impl PayoffReport {
    pub fn from_result(result: &SimulationResult, time_provider: &SafeTimeProvider) -> Self {
        let generated_at = time_provider.now();
        let (years, months) = result.years_and_months();

        PayoffReport {
            generated_at,
            strategy: result.strategy,
            strategy_description: result.strategy.description().to_string(),
            total_months: result.total_months,
            years,
            months,
            total_interest_paid: result.total_interest_paid.to_display(),
            converged: result.converged,
            remaining_balance: result.remaining_balance.to_display(),
            debt_free_date: result.debt_free_date(generated_at),
            payoff_order: result
                .payoff_order
                .iter()
                .map(|entry| PayoffLine {
                    debt_id: entry.debt_id,
                    debt_name: entry.debt_name.clone(),
                    month_paid_off: entry.month_paid_off,
                    original_balance: entry.original_balance.to_display(),
                    projected_date: generated_at.checked_add_months(Months::new(entry.month_paid_off)),
                })
                .collect(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// client financial overview report
#[derive(Debug, Serialize, Deserialize)]
pub struct ClientReport {
    pub generated_at: DateTime<Utc>,
    pub client_name: String,
    pub total_income: Money,
    pub total_expenses: Money,
    pub net_income: Money,
    pub total_assets: Money,
    pub total_liabilities: Money,
    pub net_worth: Money,
    /// whole percent
    pub average_goal_progress: Option<Decimal>,
    pub goals: Vec<GoalLine>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GoalLine {
    pub goal_id: GoalId,
    pub name: String,
    pub target: Money,
    pub current: Money,
    /// whole percent, absent when the goal has no target
    pub progress_percent: Option<Decimal>,
}

impl ClientReport {
    pub fn from_summary(
        client_name: impl Into<String>,
        summary: &FinancialSummary,
        goals: &[Goal],
        time_provider: &SafeTimeProvider,
    ) -> Self {
        ClientReport {
            generated_at: time_provider.now(),
            client_name: client_name.into(),
            total_income: summary.total_income.to_display(),
            total_expenses: summary.total_expenses.to_display(),
            net_income: summary.net_income.to_display(),
            total_assets: summary.total_assets.to_display(),
            total_liabilities: summary.total_liabilities.to_display(),
            net_worth: summary.net_worth.to_display(),
            average_goal_progress: summary.average_goal_progress.map(|p| p.round()),
            goals: goals
                .iter()
                .map(|goal| GoalLine {
                    goal_id: goal.id,
                    name: goal.name.clone(),
                    target: goal.target.to_display(),
                    current: goal.current.to_display(),
                    progress_percent: goal_progress_percent(goal).ok().map(|p| p.round()),
                })
                .collect(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::decimal::Rate;
    use crate::metrics::FinancialInfo;
    use crate::payoff::{simulate, Debt};
    use chrono::TimeZone;
    use hourglass_rs::TimeSource;
    use rust_decimal_macros::dec;

    fn test_time() -> SafeTimeProvider {
        SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
        ))
    }

    #[test]
    fn test_payoff_report() {
        let debts = vec![Debt::new(
            "card",
            Money::from_major(1_200),
            Rate::from_percentage(dec!(12)),
            Money::from_major(200),
        )];
        let result = simulate(&debts, &SimulationConfig::default());
        let report = PayoffReport::from_result(&result, &test_time());

        assert_eq!(report.total_months, 7);
        assert_eq!((report.years, report.months), (0, 7));
        assert_eq!(report.total_interest_paid, result.total_interest_paid.round_dp(2));
        assert_eq!(
            report.debt_free_date,
            Some(Utc.with_ymd_and_hms(2024, 8, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(report.payoff_order[0].projected_date, report.debt_free_date);

        let json = report.to_json_pretty().unwrap();
        assert!(json.contains("\"strategy\": \"avalanche\""));
        assert!(json.contains("Highest Interest First"));
    }

    #[test]
    fn test_unconverged_report_has_no_date() {
        let debts = vec![Debt::new(
            "underwater",
            Money::from_major(10_000),
            Rate::from_percentage(dec!(24)),
            Money::from_major(50),
        )];
        let result = simulate(&debts, &SimulationConfig::default().with_max_months(24));
        let report = PayoffReport::from_result(&result, &test_time());

        assert!(!report.converged);
        assert!(report.debt_free_date.is_none());
        assert!(report.payoff_order.is_empty());
        assert!(report.remaining_balance > Money::from_major(10_000));
    }

    #[test]
    fn test_client_report_rounds_progress() {
        let info = FinancialInfo::default();
        let goals = vec![
            Goal::new("car", Money::from_major(3), Money::from_major(2)),
            Goal::new("someday", Money::ZERO, Money::ZERO),
        ];
        let summary = FinancialSummary::from_client(&info, &goals);
        let report = ClientReport::from_summary("Jordan Lee", &summary, &goals, &test_time());

        assert_eq!(report.goals[0].progress_percent, Some(dec!(67)));
        assert_eq!(report.goals[1].progress_percent, None);
        assert_eq!(report.average_goal_progress, Some(dec!(67)));
        assert_eq!(report.net_worth, Money::ZERO);
        assert!(report.to_json_pretty().unwrap().contains("Jordan Lee"));
    }
}
