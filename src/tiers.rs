use crate::points::Yen;

/// step-function lookup table mapping a deposit balance to a monthly
/// mile-earning rate
///
/// bands are ordered descending by threshold; the first band the balance
/// meets or exceeds wins, and a balance below every band earns nothing.
#[derive(Debug, Clone, Copy)]
pub struct TierTable {
    bands: &'static [(u64, u64)],
}

impl TierTable {
    /// resolve the earning rate for a balance
    pub fn lookup(&self, balance: Yen) -> u64 {
        for &(threshold, rate) in self.bands {
            if balance.raw() >= threshold {
                return rate;
            }
        }
        0
    }

    /// whether this balance earns at all
    pub fn is_eligible(&self, balance: Yen) -> bool {
        self.lookup(balance) > 0
    }
}

/// yen ordinary-deposit tiers
pub const DOMESTIC_DEPOSIT: TierTable = TierTable {
    bands: &[
        (10_000_000, 160),
        (5_000_000, 80),
        (3_000_000, 50),
        (1_000_000, 20),
    ],
};

/// foreign-currency deposit tiers (balance is the yen-converted figure)
pub const FOREIGN_DEPOSIT: TierTable = TierTable {
    bands: &[
        (100_000_000, 20_000),
        (90_000_000, 10_000),
        (80_000_000, 9_000),
        (70_000_000, 8_000),
        (60_000_000, 7_000),
        (50_000_000, 6_000),
        (40_000_000, 5_000),
        (30_000_000, 4_000),
        (20_000_000, 3_000),
        (10_000_000, 2_000),
        (9_000_000, 1_000),
        (8_000_000, 900),
        (7_000_000, 800),
        (6_000_000, 700),
        (5_000_000, 600),
        (1_000_000, 200),
        (500_000, 100),
        (250_000, 50),
        (100_000, 20),
        (10_000, 5),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domestic_band_boundaries() {
        // thresholds are inclusive lower bounds
        assert_eq!(DOMESTIC_DEPOSIT.lookup(Yen::new(10_000_000)), 160);
        assert_eq!(DOMESTIC_DEPOSIT.lookup(Yen::new(9_999_999)), 80);
        assert_eq!(DOMESTIC_DEPOSIT.lookup(Yen::new(5_000_000)), 80);
        assert_eq!(DOMESTIC_DEPOSIT.lookup(Yen::new(4_999_999)), 50);
        assert_eq!(DOMESTIC_DEPOSIT.lookup(Yen::new(3_000_000)), 50);
        assert_eq!(DOMESTIC_DEPOSIT.lookup(Yen::new(1_000_000)), 20);
        assert_eq!(DOMESTIC_DEPOSIT.lookup(Yen::new(999_999)), 0);
        assert_eq!(DOMESTIC_DEPOSIT.lookup(Yen::ZERO), 0);
    }

    #[test]
    fn test_foreign_band_boundaries() {
        assert_eq!(FOREIGN_DEPOSIT.lookup(Yen::new(100_000_000)), 20_000);
        assert_eq!(FOREIGN_DEPOSIT.lookup(Yen::new(99_999_999)), 10_000);
        assert_eq!(FOREIGN_DEPOSIT.lookup(Yen::new(5_000_000)), 600);
        assert_eq!(FOREIGN_DEPOSIT.lookup(Yen::new(4_999_999)), 200);
        assert_eq!(FOREIGN_DEPOSIT.lookup(Yen::new(10_000)), 5);
        assert_eq!(FOREIGN_DEPOSIT.lookup(Yen::new(9_999)), 0);
    }

    #[test]
    fn test_lookup_is_monotonic() {
        for table in [DOMESTIC_DEPOSIT, FOREIGN_DEPOSIT] {
            let mut previous = 0;
            // walk balances upward across every band edge
            let mut probes: Vec<u64> = table
                .bands
                .iter()
                .flat_map(|&(t, _)| [t.saturating_sub(1), t, t + 1])
                .collect();
            probes.sort_unstable();
            for balance in probes {
                let rate = table.lookup(Yen::new(balance));
                assert!(
                    rate >= previous,
                    "rate dropped from {previous} to {rate} at balance {balance}"
                );
                previous = rate;
            }
        }
    }

    #[test]
    fn test_eligibility_tracks_rate() {
        assert!(DOMESTIC_DEPOSIT.is_eligible(Yen::new(1_000_000)));
        assert!(!DOMESTIC_DEPOSIT.is_eligible(Yen::new(999_999)));
        assert!(FOREIGN_DEPOSIT.is_eligible(Yen::new(10_000)));
        assert!(!FOREIGN_DEPOSIT.is_eligible(Yen::ZERO));
    }
}
