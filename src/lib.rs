pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod insurance;
pub mod metrics;
pub mod payoff;
pub mod serialization;
pub mod types;

// re-export key types
pub use config::{SimulationConfig, DEFAULT_MAX_MONTHS};
pub use decimal::{Money, Rate};
pub use errors::{PlannerError, Result};
pub use events::{EventStore, SimulationEvent};
pub use insurance::{calculate_coverage, InsuranceNeeds, InsuranceNeedsInput};
pub use metrics::{
    goal_progress_percent, net_income, net_worth, CategoryAmounts, FinancialInfo,
    FinancialSummary, Goal, PortfolioSummary,
};
pub use payoff::{
    compare_strategies, estimated_monthly_interest, simulate, simulate_with_events, Debt,
    MonthlySnapshot, PayoffEntry, PayoffPlan, PayoffSimulator, SimulationResult,
    StrategyComparison,
};
pub use serialization::{ClientReport, PayoffReport};
pub use types::{DebtId, GoalId, PayoffStrategy, ShortfallPolicy};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
