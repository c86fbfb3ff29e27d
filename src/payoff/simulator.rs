use tracing::{debug, warn};

use crate::config::SimulationConfig;
use crate::decimal::{Money, Rate};
use crate::events::{EventStore, SimulationEvent};
use crate::types::{DebtId, ShortfallPolicy};

use super::{ordering, Debt, MonthlySnapshot, PayoffEntry, SimulationResult};

/// working copy of a debt while it is still outstanding
#[derive(Debug, Clone)]
struct ActiveDebt {
    id: DebtId,
    name: String,
    balance: Money,
    interest_rate: Rate,
    minimum_payment: Money,
    original_balance: Money,
    shortfall_reported: bool,
}

impl From<Debt> for ActiveDebt {
    fn from(debt: Debt) -> Self {
        Self {
            id: debt.id,
            name: debt.name,
            balance: debt.balance,
            interest_rate: debt.interest_rate,
            minimum_payment: debt.minimum_payment,
            original_balance: debt.balance,
            shortfall_reported: false,
        }
    }
}

/// totals for one simulated month, before retirement
#[derive(Debug)]
struct MonthOutcome {
    interest_charged: Money,
    interest_to_date: Money,
    principal_paid: Money,
    extra_applied: Money,
    remaining_balance: Money,
}

fn outstanding_balance(active: &[ActiveDebt]) -> Option<Money> {
    active
        .iter()
        .try_fold(Money::ZERO, |acc, d| acc.checked_add(d.balance))
}

/// month-by-month debt payoff simulator
#[derive(Debug, Clone, Default)]
pub struct PayoffSimulator {
    config: SimulationConfig,
}

impl PayoffSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// run the simulation, discarding events
    pub fn run(&self, debts: &[Debt]) -> SimulationResult {
        let mut events = EventStore::new();
        self.run_with_events(debts, &mut events)
    }

    /// run the simulation, recording events into `events`
    ///
    /// Never panics: a month whose balances would overflow is discarded and the
    /// result stops at the last complete month, unconverged.
    pub fn run_with_events(&self, debts: &[Debt], events: &mut EventStore) -> SimulationResult {
        let strategy = self.config.strategy;
        let extra_payment = self.config.effective_extra_payment();
        let max_months = self.config.max_months.max(1);

        let prioritized = ordering::prioritize(debts, strategy);
        let skipped_count = debts.len() - prioritized.len();

        if prioritized.is_empty() {
            debug!(skipped_count, "no payable debts, nothing to simulate");
            return SimulationResult::empty(strategy);
        }

        let mut active: Vec<ActiveDebt> = prioritized.into_iter().map(ActiveDebt::from).collect();
        let mut remaining_balance = active
            .iter()
            .fold(Money::ZERO, |acc, d| acc.saturating_add(d.balance));

        events.emit(SimulationEvent::SimulationStarted {
            strategy,
            debt_count: active.len(),
            skipped_count,
            total_balance: remaining_balance,
            extra_payment,
        });

        let mut month = 0u32;
        let mut rollover = Money::ZERO;
        let mut total_interest_paid = Money::ZERO;
        let mut payoff_order = Vec::new();
        let mut schedule = Vec::new();
        let mut overflowed = false;

        while !active.is_empty() && month < max_months {
            let mut next = active.clone();
            let mut month_events = EventStore::new();
            let pool = extra_payment.checked_add(rollover);

            let Some(outcome) = pool.and_then(|pool| {
                self.advance_month(&mut next, month + 1, pool, total_interest_paid, &mut month_events)
            }) else {
                warn!(
                    month = month + 1,
                    debts_outstanding = active.len(),
                    "balance overflowed, stopping the payoff simulation"
                );
                events.emit(SimulationEvent::BalanceOverflow {
                    month: month + 1,
                    debts_outstanding: active.len(),
                });
                overflowed = true;
                break;
            };

            month += 1;
            events.extend(month_events.take_events());
            total_interest_paid = outcome.interest_to_date;
            remaining_balance = outcome.remaining_balance;

            // retire everything now at zero, in priority order
            let (paid_off, outstanding): (Vec<ActiveDebt>, Vec<ActiveDebt>) =
                next.into_iter().partition(|d| !d.balance.is_positive());
            active = outstanding;

            for debt in paid_off {
                rollover = rollover.saturating_add(debt.minimum_payment);
                debug!(
                    debt = %debt.name,
                    month,
                    rollover = %rollover,
                    "debt paid off"
                );
                events.emit(SimulationEvent::DebtPaidOff {
                    debt_id: debt.id,
                    debt_name: debt.name.clone(),
                    month,
                    original_balance: debt.original_balance,
                    rollover,
                });
                payoff_order.push(PayoffEntry {
                    debt_id: debt.id,
                    debt_name: debt.name,
                    month_paid_off: month,
                    original_balance: debt.original_balance,
                });
            }

            schedule.push(MonthlySnapshot {
                month,
                interest_charged: outcome.interest_charged,
                principal_paid: outcome.principal_paid,
                extra_applied: outcome.extra_applied,
                remaining_balance,
                debts_outstanding: active.len(),
            });
        }

        let converged = active.is_empty();

        if !converged && !overflowed {
            warn!(
                month,
                remaining_balance = %remaining_balance,
                debts_outstanding = active.len(),
                "payoff simulation hit the month ceiling"
            );
            events.emit(SimulationEvent::MonthCeilingReached {
                month,
                remaining_balance,
                debts_outstanding: active.len(),
            });
        }

        events.emit(SimulationEvent::SimulationCompleted {
            total_months: month,
            total_interest_paid,
        });

        SimulationResult {
            strategy,
            total_months: month,
            total_interest_paid,
            payoff_order,
            schedule,
            converged,
            remaining_balance,
        }
    }

    /// one month of interest, minimums and extra on a working copy
    ///
    /// `None` if any amount overflows. The caller drops the copy in that case.
    fn advance_month(
        &self,
        active: &mut [ActiveDebt],
        month: u32,
        pool: Money,
        interest_to_date: Money,
        events: &mut EventStore,
    ) -> Option<MonthOutcome> {
        let (interest_charged, minimum_principal) = self.apply_minimum_payments(active, month, events)?;
        let extra_applied = Self::apply_extra_payment(active, pool, month, events);

        Some(MonthOutcome {
            interest_charged,
            interest_to_date: interest_to_date.checked_add(interest_charged)?,
            principal_paid: minimum_principal.checked_add(extra_applied)?,
            extra_applied,
            remaining_balance: outstanding_balance(active)?,
        })
    }

    /// charge a month of interest and apply every minimum payment
    ///
    /// Returns the interest charged and the net principal paid.
    fn apply_minimum_payments(
        &self,
        active: &mut [ActiveDebt],
        month: u32,
        events: &mut EventStore,
    ) -> Option<(Money, Money)> {
        let mut interest_charged = Money::ZERO;
        let mut principal_paid = Money::ZERO;

        for debt in active.iter_mut() {
            let interest = debt.balance.checked_monthly_interest(debt.interest_rate)?;
            let mut principal = debt.minimum_payment.checked_sub(interest)?.min(debt.balance);

            if principal.is_negative() {
                if !debt.shortfall_reported {
                    debt.shortfall_reported = true;
                    events.emit(SimulationEvent::NegativeAmortization {
                        debt_id: debt.id,
                        month,
                        interest,
                        minimum_payment: debt.minimum_payment,
                    });
                }
                if self.config.shortfall == ShortfallPolicy::Clamp {
                    principal = Money::ZERO;
                }
            }

            debt.balance = debt.balance.checked_sub(principal)?.non_negative();
            interest_charged = interest_charged.checked_add(interest)?;
            principal_paid = principal_paid.checked_add(principal)?;
        }

        Some((interest_charged, principal_paid))
    }

    /// put the extra pool on the first debt still carrying a balance
    ///
    /// A debt its own minimum cleared this month is skipped, so the pool lands on
    /// the next one in priority order. Whatever the target does not absorb is not
    /// carried to later debts.
    fn apply_extra_payment(
        active: &mut [ActiveDebt],
        pool: Money,
        month: u32,
        events: &mut EventStore,
    ) -> Money {
        if !pool.is_positive() {
            return Money::ZERO;
        }

        let Some(target) = active.iter_mut().find(|d| d.balance.is_positive()) else {
            return Money::ZERO;
        };

        let amount = pool.min(target.balance);
        target.balance -= amount;
        events.emit(SimulationEvent::ExtraPaymentApplied {
            debt_id: target.id,
            month,
            amount,
        });

        amount
    }
}
