//! Delivery day-range encoding.
//!
//! The `days` attribute of a delivery option is either a single day count
//! (`"2"`) or a span (`"2-5"`). Out-of-range and inverted input is normalized
//! instead of rejected.

use std::fmt;
use std::str::FromStr;

/// Largest day count the schema accepts.
pub const MAX_DAYS: i64 = 255;

/// A normalized delivery day range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayRange {
    pub from: u8,
    pub to: u8,
}

impl DayRange {
    /// Build a normalized range: both ends clamped to `0..=255`, and `to`
    /// raised to `from` when inverted.
    pub fn new(days_from: i64, days_to: i64) -> Self {
        let from = clamp_days(days_from);
        let to = clamp_days(days_to).max(from);
        Self { from, to }
    }

    /// True when the range is written as a single day count.
    ///
    /// A zero upper bound means "no upper bound given".
    pub fn is_single(&self) -> bool {
        self.from == self.to || self.to == 0
    }

    /// Parse the schema encoding (`"3"` or `"2-5"`).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.split_once('-') {
            Some((from, to)) => {
                let from: u8 = from.trim().parse().ok()?;
                let to: u8 = to.trim().parse().ok()?;
                (from <= to).then_some(Self { from, to })
            }
            None => {
                let days: u8 = s.parse().ok()?;
                Some(Self { from: days, to: days })
            }
        }
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{}-{}", self.from, self.to)
        }
    }
}

impl FromStr for DayRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid day range: {s:?}"))
    }
}

fn clamp_days(days: i64) -> u8 {
    // Lossless after the clamp.
    days.clamp(0, MAX_DAYS) as u8
}

/// Encode a delivery lead time for the `days` attribute.
pub fn encode_days(days_from: i64, days_to: i64) -> String {
    DayRange::new(days_from, days_to).to_string()
}
