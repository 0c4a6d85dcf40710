/// quick start - minimal example to get started
use loyalty_accrual_rs::{report, AccrualEngine, InputRecord};

fn main() {
    // a member with a moderate year of activity
    let record = InputRecord {
        domestic_flights: 6,
        card_spend_yen: 1_200_000,
        yen_balance_man_yen: 300,
        donation_yen: 50_000,
        ..InputRecord::default()
    };

    let engine = AccrualEngine::default();
    let result = engine.calculate(&record);

    print!("{}", report::render(&result));
}
