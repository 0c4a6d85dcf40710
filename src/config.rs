use serde::{Deserialize, Serialize};

/// identifies one of the program's published rule revisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RulesetVersion {
    /// earlier rules: 200 yen per card mile, flight fares folded into card
    /// spend, no banking-tier category
    Legacy,
    /// current rules: 100 yen per card mile, card spend declared separately,
    /// banking-tier category active
    Current,
}

/// rule parameters for the accrual engine
///
/// the two coexisting rule revisions differ only in these values, so the
/// engine is configured rather than forked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesetConfig {
    pub version: RulesetVersion,
    /// yen of card spend that earn one mile
    pub yen_per_card_mile: u64,
    /// whether domestic flight fares count toward qualifying card spend
    pub card_spend_includes_flight_cost: bool,
    /// whether the banking-tier category is active
    pub banking_enabled: bool,
    /// how many times per year banking points are credited, assuming the
    /// balance is held for the full year
    pub accrual_periods_per_year: u64,
}

impl RulesetConfig {
    /// current program rules
    pub fn current() -> Self {
        Self {
            version: RulesetVersion::Current,
            yen_per_card_mile: 100,
            card_spend_includes_flight_cost: false,
            banking_enabled: true,
            accrual_periods_per_year: 2,
        }
    }

    /// earlier program rules, kept selectable for comparison runs
    pub fn legacy() -> Self {
        Self {
            version: RulesetVersion::Legacy,
            yen_per_card_mile: 200,
            card_spend_includes_flight_cost: true,
            banking_enabled: false,
            accrual_periods_per_year: 2,
        }
    }

    pub fn for_version(version: RulesetVersion) -> Self {
        match version {
            RulesetVersion::Legacy => Self::legacy(),
            RulesetVersion::Current => Self::current(),
        }
    }
}

impl Default for RulesetConfig {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_diverge_where_documented() {
        let current = RulesetConfig::current();
        let legacy = RulesetConfig::legacy();

        assert_eq!(current.yen_per_card_mile, 100);
        assert_eq!(legacy.yen_per_card_mile, 200);
        assert!(!current.card_spend_includes_flight_cost);
        assert!(legacy.card_spend_includes_flight_cost);
        assert!(current.banking_enabled);
        assert!(!legacy.banking_enabled);

        // semiannual crediting holds across revisions
        assert_eq!(current.accrual_periods_per_year, 2);
        assert_eq!(legacy.accrual_periods_per_year, 2);
    }

    #[test]
    fn test_default_is_current() {
        assert_eq!(RulesetConfig::default(), RulesetConfig::current());
        assert_eq!(
            RulesetConfig::for_version(RulesetVersion::Legacy),
            RulesetConfig::legacy()
        );
    }
}
