use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::types::DebtId;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("invalid balance for debt {name}: {balance}")]
    InvalidBalance {
        name: String,
        balance: Money,
    },

    #[error("invalid interest rate for debt {name}: {rate}")]
    InvalidInterestRate {
        name: String,
        rate: Rate,
    },

    #[error("invalid minimum payment for debt {name}: {amount}")]
    InvalidMinimumPayment {
        name: String,
        amount: Money,
    },

    #[error("duplicate debt id: {id}")]
    DuplicateDebt {
        id: DebtId,
    },

    #[error("invalid amount for {field}: {amount}")]
    InvalidAmount {
        field: String,
        amount: Money,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("unknown payoff strategy: {value}")]
    UnknownStrategy {
        value: String,
    },

    #[error("goal {name} has a zero target")]
    GoalTargetZero {
        name: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
