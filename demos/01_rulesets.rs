/// run the same activity through both rule revisions
use loyalty_accrual_rs::{AccrualEngine, InputRecord, RulesetConfig};

fn main() {
    let record = InputRecord {
        domestic_flights: 10,
        domestic_flight_cost_yen: 15_000,
        card_spend_yen: 800_000,
        yen_balance_man_yen: 500,
        ..InputRecord::default()
    };

    for config in [RulesetConfig::current(), RulesetConfig::legacy()] {
        let version = config.version;
        let result = AccrualEngine::new(config).calculate(&record);
        println!(
            "{:?}: qualifying spend {} yen, total {} LSP",
            version, result.qualifying_card_spend, result.total
        );
    }
}
