/// strategy comparison - avalanche vs snowball with tracing output
use advisor_tools_rs::{compare_strategies, estimated_monthly_interest, Debt, Decimal, Money, Rate};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("advisor_tools_rs=debug".parse()?))
        .init();

    let debts = vec![
        Debt::new("Store card", Money::from_major(900), Rate::from_percentage(Decimal::from(9)), Money::from_major(35)),
        Debt::new("Credit card", Money::from_major(7_000), Rate::from_percentage(Decimal::from(24)), Money::from_major(175)),
        Debt::new("Student loan", Money::from_major(18_000), Rate::from_percentage(Decimal::new(55, 1)), Money::from_major(200)),
    ];

    println!("estimated monthly interest today: {}", estimated_monthly_interest(&debts).to_display());

    let comparison = compare_strategies(&debts, Money::from_major(300));
    for (label, result) in [("avalanche", &comparison.avalanche), ("snowball", &comparison.snowball)] {
        println!(
            "{label:>9}: {} months, {} interest",
            result.total_months,
            result.total_interest_paid.to_display()
        );
    }
    println!("interest saved by avalanche: {}", comparison.interest_saved.to_display());
    println!("recommended: {}", comparison.recommended().description());

    Ok(())
}
