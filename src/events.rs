use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{DebtId, PayoffStrategy};

/// events recorded while simulating a payoff plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimulationEvent {
    SimulationStarted {
        strategy: PayoffStrategy,
        debt_count: usize,
        skipped_count: usize,
        total_balance: Money,
        extra_payment: Money,
    },
    ExtraPaymentApplied {
        debt_id: DebtId,
        month: u32,
        amount: Money,
    },
    /// first month a minimum payment failed to cover the interest charge
    NegativeAmortization {
        debt_id: DebtId,
        month: u32,
        interest: Money,
        minimum_payment: Money,
    },
    DebtPaidOff {
        debt_id: DebtId,
        debt_name: String,
        month: u32,
        original_balance: Money,
        rollover: Money,
    },
    MonthCeilingReached {
        month: u32,
        remaining_balance: Money,
        debts_outstanding: usize,
    },
    /// a balance grew past what a decimal can hold, the month was discarded
    BalanceOverflow {
        month: u32,
        debts_outstanding: usize,
    },
    SimulationCompleted {
        total_months: u32,
        total_interest_paid: Money,
    },
}

/// event store for collecting events during a simulation
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<SimulationEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: SimulationEvent) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<SimulationEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[SimulationEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Extend<SimulationEvent> for EventStore {
    fn extend<I: IntoIterator<Item = SimulationEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}
