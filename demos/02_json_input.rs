/// build a record from json and print the result snapshot
use loyalty_accrual_rs::{AccrualEngine, InputRecord};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // omitted fields take their documented defaults
    let record = InputRecord::from_json(
        r#"{
            "target_lsp": 2000,
            "domestic_flights": 12,
            "card_spend_yen": 2400000,
            "premium_banking": 1,
            "yen_balance_man_yen": 500
        }"#,
    )?;

    let result = AccrualEngine::default().calculate(&record);
    println!("{}", result.json());

    Ok(())
}
