/// client summary - metrics, goals and insurance needs for one client
use advisor_tools_rs::{
    calculate_coverage, ClientReport, FinancialInfo, FinancialSummary, Goal, InsuranceNeedsInput,
    Money, PortfolioSummary, SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let info: FinancialInfo = serde_json::from_str(
        r#"{
            "income": {"salary": 7200, "bonus": 400},
            "expenses": {"housing": 2300, "transportation": 450, "food": 700},
            "assets": {"checking": 6000, "retirement": 145000, "realEstate": 410000},
            "liabilities": {"mortgage": 285000, "carLoans": 14000}
        }"#,
    )?;
    let goals = vec![
        Goal::new("Emergency fund", Money::from_major(25_000), Money::from_major(6_000)),
        Goal::new("College", Money::from_major(80_000), Money::from_major(22_500)),
    ];

    let summary = FinancialSummary::from_client(&info, &goals);
    let time = SafeTimeProvider::new(TimeSource::System);
    println!("{}", ClientReport::from_summary("Sam Rivera", &summary, &goals, &time).to_json_pretty()?);

    let portfolio = PortfolioSummary::from_clients([&info]);
    println!("book net worth: {}", portfolio.total_net_worth.to_display());

    let needs = calculate_coverage(&InsuranceNeedsInput {
        annual_income: Money::from_major(91_200),
        spouse_income: Money::from_major(35_000),
        current_savings: Money::from_major(6_000),
        existing_coverage: Money::from_major(250_000),
        outstanding_debts: Money::from_major(299_000),
        dependents: 2,
        ..InsuranceNeedsInput::default()
    });
    println!(
        "additional life cover needed: {} (about {} a month)",
        needs.required_coverage.to_display(),
        needs.monthly_premium_estimate.to_display()
    );

    Ok(())
}
