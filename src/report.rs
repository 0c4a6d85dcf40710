use std::fmt::Write;

use crate::projection::TargetProjection;
use crate::types::AccrualResult;

/// render an accrual result as the member-facing plain-text report
///
/// purely a function of the result: rendering the same result twice yields
/// identical text.
pub fn render(result: &AccrualResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "--- Annual LSP Accrual Simulation ---");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Annual qualifying card spend: {} yen",
        result.qualifying_card_spend
    );
    let _ = writeln!(out, "Annual LSP earned: {} LSP", result.total);

    let _ = writeln!(out);
    let _ = writeln!(out, "[Breakdown]");
    if result.breakdown.is_empty() {
        let _ = writeln!(out, "No point-earning activity recorded.");
    } else {
        for (category, points) in result.breakdown.iter() {
            let _ = writeln!(out, "- {}: {} LSP", category.label(), points);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "--- Time to reach target ---");
    match TargetProjection::for_result(result) {
        TargetProjection::Reachable { years } => {
            let _ = writeln!(out, "Reaching the target of {} LSP will take...", result.target);
            let _ = writeln!(out, "about {:.1} years", years);
        }
        TargetProjection::Unreachable => {
            let _ = writeln!(out, "The target cannot be reached at this pace.");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulesetConfig;
    use crate::engine::AccrualEngine;
    use crate::input::InputRecord;

    #[test]
    fn test_render_is_pure() {
        let engine = AccrualEngine::default();
        let record = InputRecord {
            domestic_flights: 10,
            card_spend_yen: 2_000_000,
            yen_balance_man_yen: 500,
            ..InputRecord::default()
        };
        let result = engine.calculate(&record);

        assert_eq!(render(&result), render(&result));
    }

    #[test]
    fn test_render_active_member() {
        let engine = AccrualEngine::new(RulesetConfig::legacy());
        let record = InputRecord {
            domestic_flights: 10,
            domestic_flight_cost_yen: 15_000,
            ..InputRecord::default()
        };
        let report = render(&engine.calculate(&record));

        assert!(report.contains("Annual qualifying card spend: 150,000 yen"));
        assert!(report.contains("Annual LSP earned: 50 LSP"));
        assert!(report.contains("- Flights: 50 LSP"));
        assert!(report.contains("Reaching the target of 1500 LSP"));
        assert!(report.contains("about 30.0 years"));
    }

    #[test]
    fn test_render_no_activity() {
        let engine = AccrualEngine::default();
        let report = render(&engine.calculate(&InputRecord::default()));

        assert!(report.contains("No point-earning activity recorded."));
        assert!(report.contains("The target cannot be reached at this pace."));
        assert!(!report.contains("about"));
    }

    #[test]
    fn test_breakdown_lines_are_label_sorted() {
        let engine = AccrualEngine::default();
        let record = InputRecord {
            domestic_flights: 1,
            wallet_miles: 500,
            yen_balance_man_yen: 100,
            ..InputRecord::default()
        };
        let report = render(&engine.calculate(&record));

        let banking = report.find("- Banking tiers:").unwrap();
        let flights = report.find("- Flights:").unwrap();
        let wallet = report.find("- Wallet payments:").unwrap();
        assert!(banking < flights && flights < wallet);
    }
}
