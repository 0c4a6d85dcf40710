use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::points::Points;
use crate::types::AccrualResult;

/// projected time to reach the member's point target at the current
/// annual pace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetProjection {
    /// the target will be reached in this many years, rounded to one
    /// decimal place
    Reachable { years: Decimal },
    /// nothing is being earned, so the target can never be reached
    Unreachable,
}

impl TargetProjection {
    /// project from an annual total and a target; a zero total is
    /// unreachable and never divided
    pub fn from_totals(total: Points, target: Points) -> Self {
        if total.is_zero() {
            return TargetProjection::Unreachable;
        }
        let years = (Decimal::from(target.raw()) / Decimal::from(total.raw())).round_dp(1);
        TargetProjection::Reachable { years }
    }

    pub fn for_result(result: &AccrualResult) -> Self {
        Self::from_totals(result.total, result.target)
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, TargetProjection::Reachable { .. })
    }
}
