use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{AccrualError, Result};

/// default point target when the member does not set one
pub const DEFAULT_TARGET_LSP: u64 = 1500;

/// one year of member activity, validated before it reaches the engine
///
/// all quantities are annual figures. balances are given in man-yen
/// (units of 10,000 yen); monthly-usage fields are expected in 0..=12 but
/// the engine does not enforce that range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputRecord {
    /// point target the member is working toward
    pub target_lsp: u64,

    /// one-way domestic flight segments flown
    pub domestic_flights: u64,
    /// total international segment miles flown
    pub international_segment_miles: u64,

    /// declared card spend in yen
    pub card_spend_yen: u64,
    /// fare of one domestic flight in yen, counted toward card spend only
    /// under rulesets that fold flight cost in
    pub domestic_flight_cost_yen: u64,

    /// miles earned through the payment wallet
    pub wallet_miles: u64,
    /// miles earned through the online marketplace
    pub marketplace_miles: u64,

    /// premium banking membership flag (0 or 1 on the wire)
    #[serde(
        serialize_with = "flag_to_int",
        deserialize_with = "flag_from_int"
    )]
    pub premium_banking: bool,
    /// average yen ordinary-deposit balance, in man-yen
    pub yen_balance_man_yen: u64,
    /// average foreign-currency deposit balance, yen-converted, in man-yen
    pub fx_balance_man_yen: u64,

    /// domestic package tours taken
    pub domestic_tours: u64,
    /// overseas package tours taken
    pub overseas_tours: u64,

    /// months of wellness subscription usage
    pub wellness_months: u64,
    /// months of electricity plan usage
    pub energy_months: u64,
    /// months of broadband plan usage
    pub broadband_months: u64,
    /// months of mobile plan usage
    pub mobile_months: u64,

    /// hometown tax donation total in yen
    pub donation_yen: u64,
}

impl Default for InputRecord {
    fn default() -> Self {
        Self {
            target_lsp: DEFAULT_TARGET_LSP,
            domestic_flights: 0,
            international_segment_miles: 0,
            card_spend_yen: 0,
            domestic_flight_cost_yen: 0,
            wallet_miles: 0,
            marketplace_miles: 0,
            premium_banking: false,
            yen_balance_man_yen: 0,
            fx_balance_man_yen: 0,
            domestic_tours: 0,
            overseas_tours: 0,
            wellness_months: 0,
            energy_months: 0,
            broadband_months: 0,
            mobile_months: 0,
            donation_yen: 0,
        }
    }
}

impl InputRecord {
    /// build a record from a json document, applying documented defaults
    /// for omitted fields
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn flag_to_int<S: Serializer>(flag: &bool, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*flag))
}

fn flag_from_int<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    match u64::deserialize(deserializer)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "premium banking flag must be 0 or 1, got {other}"
        ))),
    }
}

/// parse one non-negative integer field from terminal input
pub fn parse_count(field: &'static str, input: &str) -> Result<u64> {
    let trimmed = input.trim();
    if let Ok(value) = trimmed.parse::<u64>() {
        return Ok(value);
    }
    // distinguish a negative entry from garbage for the re-prompt message
    if let Ok(value) = trimmed.parse::<i64>() {
        return Err(AccrualError::NegativeValue { field, value });
    }
    Err(AccrualError::NonNumericValue {
        field,
        input: trimmed.to_string(),
    })
}

/// parse the premium banking flag from terminal input, restricted to {0, 1}
pub fn parse_flag(field: &'static str, input: &str) -> Result<bool> {
    match parse_count(field, input)? {
        0 => Ok(false),
        1 => Ok(true),
        value => Err(AccrualError::InvalidPremiumFlag { value }),
    }
}
