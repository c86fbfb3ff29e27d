/// json plan - parse form input, simulate and print a report
use advisor_tools_rs::{PayoffPlan, PayoffReport, SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = r#"{
        "debts": [
            {"name": "Mastercard", "balance": "3150.75", "interest_rate": "19.99", "minimum_payment": 95},
            {"name": "Personal loan", "balance": 6000, "interest_rate": 11, "minimum_payment": 180},
            {"name": "Old store card", "balance": 0, "interest_rate": 25, "minimum_payment": 25}
        ],
        "config": {"extra_payment": 150, "strategy": "snowball"}
    }"#;

    let plan = PayoffPlan::from_json(input)?;
    println!("{} payable debts, {} total", plan.payable_debts().count(), plan.total_balance());

    let result = plan.simulate();
    let time = SafeTimeProvider::new(TimeSource::System);
    let report = PayoffReport::from_result(&result, &time);

    println!("{}", report.to_json_pretty()?);

    Ok(())
}
