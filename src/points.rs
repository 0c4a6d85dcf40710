use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// one "man-yen" unit (10,000 yen), the denomination used for balance inputs
pub const MAN_YEN: u64 = 10_000;

/// loyalty status points, the unit accrued by member activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Points(u64);

impl Points {
    pub const ZERO: Points = Points(0);

    /// create from a raw point count
    pub fn new(points: u64) -> Self {
        Points(points)
    }

    /// get the raw point count
    pub fn raw(&self) -> u64 {
        self.0
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Points {
    fn from(points: u64) -> Self {
        Points(points)
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, other: Points) -> Points {
        Points(self.0 + other.0)
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, other: Points) {
        self.0 += other.0;
    }
}

impl Mul<u64> for Points {
    type Output = Points;

    fn mul(self, factor: u64) -> Points {
        Points(self.0 * factor)
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Points {
        iter.fold(Points::ZERO, Add::add)
    }
}

/// yen amount, exact integer arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Yen(u64);

impl Yen {
    pub const ZERO: Yen = Yen(0);

    /// create from a yen amount
    pub fn new(yen: u64) -> Self {
        Yen(yen)
    }

    /// create from a man-yen (10,000 yen unit) figure
    pub fn from_man(man_yen: u64) -> Self {
        Yen(man_yen * MAN_YEN)
    }

    /// get the raw yen amount
    pub fn raw(&self) -> u64 {
        self.0
    }

    /// convert spend to miles at the given yen-per-mile rate
    pub fn to_miles(&self, yen_per_mile: u64) -> Miles {
        Miles(self.0 / yen_per_mile)
    }
}

impl fmt::Display for Yen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", group_thousands(self.0))
    }
}

impl Add for Yen {
    type Output = Yen;

    fn add(self, other: Yen) -> Yen {
        Yen(self.0 + other.0)
    }
}

/// mileage balance earned through a partner service
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Miles(u64);

impl Miles {
    pub const ZERO: Miles = Miles(0);

    /// create from a raw mile count
    pub fn new(miles: u64) -> Self {
        Miles(miles)
    }

    /// get the raw mile count
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Miles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", group_thousands(self.0))
    }
}

/// format an integer with comma grouping (e.g. 1500000 -> "1,500,000")
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
