use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Distance between two locations of the park, in meters.
///
/// Edge weights are accepted as `i32` and must be non-negative, so a path of at most |V|-1
/// edges always fits in the `u64` representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u64::MAX);

    pub const fn from_meters(meters: u64) -> Self {
        Self(meters)
    }

    pub const fn meters(&self) -> u64 {
        self.0
    }

    /// Converts an edge weight into a distance, None if the weight is negative.
    pub fn from_weight(weight: i32) -> Option<Self> {
        u64::try_from(weight).ok().map(Self)
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, d| acc + d)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
