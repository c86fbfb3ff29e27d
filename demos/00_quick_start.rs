/// quick start - simulate a debt payoff plan
use advisor_tools_rs::{simulate, Debt, Decimal, Money, Rate, SimulationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let debts = vec![
        Debt::new("Visa", Money::from_major(4_200), Rate::from_percentage(Decimal::new(2199, 2)), Money::from_major(120)),
        Debt::new("Car loan", Money::from_major(11_500), Rate::from_percentage(Decimal::from(6)), Money::from_major(310)),
    ];

    // $200 a month on top of the minimums, highest rate first
    let result = simulate(&debts, &SimulationConfig::avalanche(Money::from_major(200)));

    let (years, months) = result.years_and_months();
    println!("debt-free in {} months ({years}y {months}m)", result.total_months);
    println!("interest paid: {}", result.total_interest_paid.to_display());
    for entry in &result.payoff_order {
        println!("  month {:>3}: {} ({})", entry.month_paid_off, entry.debt_name, entry.original_balance.to_display());
    }

    Ok(())
}
