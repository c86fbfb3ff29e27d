use crate::types::PayoffStrategy;

use super::Debt;

/// payable debts in the order the strategy pays them down
///
/// The sort is stable, so debts that tie keep the order they were supplied in.
pub fn prioritize(debts: &[Debt], strategy: PayoffStrategy) -> Vec<Debt> {
    let mut payable: Vec<Debt> = debts.iter().filter(|d| d.is_payable()).cloned().collect();

    match strategy {
        PayoffStrategy::Avalanche => {
            payable.sort_by(|a, b| b.interest_rate.cmp(&a.interest_rate));
        }
        PayoffStrategy::Snowball => {
            payable.sort_by(|a, b| a.balance.cmp(&b.balance));
        }
    }

    payable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use rust_decimal::Decimal;

    fn debt(name: &str, balance: i64, rate: u32) -> Debt {
        Debt::new(
            name,
            Money::from_major(balance),
            Rate::from_percentage(Decimal::from(rate)),
            Money::from_major(50),
        )
    }

    fn names(debts: &[Debt]) -> Vec<&str> {
        debts.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_avalanche_orders_by_rate_descending() {
        let debts = vec![debt("car", 9_000, 6), debt("card", 3_000, 22), debt("store", 800, 15)];
        let ordered = prioritize(&debts, PayoffStrategy::Avalanche);
        assert_eq!(names(&ordered), vec!["card", "store", "car"]);
    }

    #[test]
    fn test_snowball_orders_by_balance_ascending() {
        let debts = vec![debt("car", 9_000, 6), debt("card", 3_000, 22), debt("store", 800, 15)];
        let ordered = prioritize(&debts, PayoffStrategy::Snowball);
        assert_eq!(names(&ordered), vec!["store", "card", "car"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let debts = vec![debt("first", 1_000, 10), debt("second", 500, 10), debt("third", 1_000, 3)];
        assert_eq!(
            names(&prioritize(&debts, PayoffStrategy::Avalanche)),
            vec!["first", "second", "third"]
        );
        assert_eq!(
            names(&prioritize(&debts, PayoffStrategy::Snowball)),
            vec!["second", "first", "third"]
        );
    }

    #[test]
    fn test_unpayable_debts_are_dropped() {
        let mut no_minimum = debt("no minimum", 400, 30);
        no_minimum.minimum_payment = Money::ZERO;
        let debts = vec![debt("paid", 0, 25), no_minimum, debt("loan", 2_000, 4)];

        let ordered = prioritize(&debts, PayoffStrategy::Avalanche);
        assert_eq!(names(&ordered), vec!["loan"]);
    }
}
