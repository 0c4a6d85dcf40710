use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::points::{Points, Yen};

/// point-earning categories
///
/// variants are declared in the lexicographic order of their display labels
/// so the derived ordering sorts a breakdown the way the report presents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Banking,
    CardSpend,
    Donation,
    Flight,
    Marketplace,
    PackageTour,
    Subscription,
    Wallet,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Banking,
        Category::CardSpend,
        Category::Donation,
        Category::Flight,
        Category::Marketplace,
        Category::PackageTour,
        Category::Subscription,
        Category::Wallet,
    ];

    /// display label, resolved only at the report boundary
    pub fn label(&self) -> &'static str {
        match self {
            Category::Banking => "Banking tiers",
            Category::CardSpend => "Card spending",
            Category::Donation => "Donations",
            Category::Flight => "Flights",
            Category::Marketplace => "Marketplace",
            Category::PackageTour => "Package tours",
            Category::Subscription => "Subscriptions",
            Category::Wallet => "Wallet payments",
        }
    }
}

/// per-category point contributions, holding only strictly positive entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CategoryBreakdown(BTreeMap<Category, Points>);

impl CategoryBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// record a category's contribution; zero contributions are dropped
    pub fn record(&mut self, category: Category, points: Points) {
        if !points.is_zero() {
            self.0.insert(category, points);
        }
    }

    pub fn get(&self, category: Category) -> Option<Points> {
        self.0.get(&category).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// entries in label order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Points)> + '_ {
        self.0.iter().map(|(&category, &points)| (category, points))
    }
}

/// outcome of one accrual run, derived and never stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualResult {
    /// grand total across all categories
    pub total: Points,
    /// per-category contributions
    pub breakdown: CategoryBreakdown,
    /// spend that counted toward card miles
    pub qualifying_card_spend: Yen,
    /// the member's point target, carried through for the report
    pub target: Points,
}

impl AccrualResult {
    /// pretty-printed json snapshot of the result
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }
}
