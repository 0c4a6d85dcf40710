use crate::config::RulesetConfig;
use crate::input::InputRecord;
use crate::points::{Points, Yen};
use crate::tiers::{DOMESTIC_DEPOSIT, FOREIGN_DEPOSIT};
use crate::types::{AccrualResult, Category, CategoryBreakdown};

/// points per one-way domestic flight segment
const POINTS_PER_DOMESTIC_FLIGHT: u64 = 5;
/// international miles that earn one flight point block
const INTERNATIONAL_MILES_PER_BLOCK: u64 = 1000;
/// points per international mile block
const POINTS_PER_INTERNATIONAL_BLOCK: u64 = 5;
/// card miles that earn one card point block
const CARD_MILES_PER_BLOCK: u64 = 2000;
/// points per card mile block
const POINTS_PER_CARD_BLOCK: u64 = 5;
/// wallet miles per point
const WALLET_MILES_PER_POINT: u64 = 500;
/// marketplace miles per point
const MARKETPLACE_MILES_PER_POINT: u64 = 100;
/// points per domestic package tour
const POINTS_PER_DOMESTIC_TOUR: u64 = 3;
/// points per overseas package tour
const POINTS_PER_OVERSEAS_TOUR: u64 = 10;
/// donation yen per point
const DONATION_YEN_PER_POINT: u64 = 10_000;

/// banking per-period awards
const BANKING_DOMESTIC_BASE: u64 = 1;
const BANKING_DOMESTIC_PREMIUM: u64 = 3;
const BANKING_FOREIGN_BASE: u64 = 2;
const BANKING_FOREIGN_PREMIUM: u64 = 6;
const BANKING_PREMIUM_BONUS: u64 = 1;

/// engine for accruing annual loyalty status points
///
/// a pure computation over a validated input record; the same record and
/// ruleset always produce the same result.
pub struct AccrualEngine {
    pub config: RulesetConfig,
}

impl AccrualEngine {
    pub fn new(config: RulesetConfig) -> Self {
        Self { config }
    }

    /// compute the per-category breakdown and grand total for one year of
    /// activity
    pub fn calculate(&self, record: &InputRecord) -> AccrualResult {
        let qualifying_card_spend = self.qualifying_card_spend(record);

        let mut breakdown = CategoryBreakdown::new();
        let mut total = Points::ZERO;

        let categories = [
            (Category::Flight, self.flight_points(record)),
            (Category::CardSpend, self.card_points(qualifying_card_spend)),
            (Category::Wallet, self.wallet_points(record)),
            (Category::Marketplace, self.marketplace_points(record)),
            (Category::Banking, self.banking_points(record)),
            (Category::PackageTour, self.tour_points(record)),
            (Category::Subscription, self.subscription_points(record)),
            (Category::Donation, self.donation_points(record)),
        ];

        for (category, points) in categories {
            breakdown.record(category, points);
            total += points;
        }

        AccrualResult {
            total,
            breakdown,
            qualifying_card_spend,
            target: Points::new(record.target_lsp),
        }
    }

    /// total spend counted toward card miles
    fn qualifying_card_spend(&self, record: &InputRecord) -> Yen {
        let declared = Yen::new(record.card_spend_yen);
        if self.config.card_spend_includes_flight_cost {
            declared + Yen::new(record.domestic_flights * record.domestic_flight_cost_yen)
        } else {
            declared
        }
    }

    fn flight_points(&self, record: &InputRecord) -> Points {
        let domestic = record.domestic_flights * POINTS_PER_DOMESTIC_FLIGHT;
        let international = (record.international_segment_miles / INTERNATIONAL_MILES_PER_BLOCK)
            * POINTS_PER_INTERNATIONAL_BLOCK;
        Points::new(domestic + international)
    }

    fn card_points(&self, qualifying_spend: Yen) -> Points {
        let miles = qualifying_spend.to_miles(self.config.yen_per_card_mile);
        Points::new((miles.raw() / CARD_MILES_PER_BLOCK) * POINTS_PER_CARD_BLOCK)
    }

    fn wallet_points(&self, record: &InputRecord) -> Points {
        Points::new(record.wallet_miles / WALLET_MILES_PER_POINT)
    }

    fn marketplace_points(&self, record: &InputRecord) -> Points {
        Points::new(record.marketplace_miles / MARKETPLACE_MILES_PER_POINT)
    }

    /// banking-tier points, credited once per accrual period while the
    /// balances stay tier-eligible
    fn banking_points(&self, record: &InputRecord) -> Points {
        if !self.config.banking_enabled {
            return Points::ZERO;
        }

        let premium = record.premium_banking;
        let earns_from_yen = DOMESTIC_DEPOSIT.is_eligible(Yen::from_man(record.yen_balance_man_yen));
        let earns_from_fx = FOREIGN_DEPOSIT.is_eligible(Yen::from_man(record.fx_balance_man_yen));

        let mut per_period = 0;
        if earns_from_yen {
            per_period += if premium {
                BANKING_DOMESTIC_PREMIUM
            } else {
                BANKING_DOMESTIC_BASE
            };
        }
        if earns_from_fx {
            per_period += if premium {
                BANKING_FOREIGN_PREMIUM
            } else {
                BANKING_FOREIGN_BASE
            };
        }
        if premium && (earns_from_yen || earns_from_fx) {
            per_period += BANKING_PREMIUM_BONUS;
        }

        Points::new(per_period * self.config.accrual_periods_per_year)
    }

    fn tour_points(&self, record: &InputRecord) -> Points {
        Points::new(
            record.domestic_tours * POINTS_PER_DOMESTIC_TOUR
                + record.overseas_tours * POINTS_PER_OVERSEAS_TOUR,
        )
    }

    fn subscription_points(&self, record: &InputRecord) -> Points {
        Points::new(
            record.wellness_months
                + record.energy_months
                + record.broadband_months
                + record.mobile_months,
        )
    }

    fn donation_points(&self, record: &InputRecord) -> Points {
        Points::new(record.donation_yen / DONATION_YEN_PER_POINT)
    }
}

impl Default for AccrualEngine {
    fn default() -> Self {
        Self::new(RulesetConfig::default())
    }
}
