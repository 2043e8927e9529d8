//! Self-assessed familiarity score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Familiarity rating, always within `[Rating::MIN, Rating::MAX]`.
///
/// Serializes as a bare integer. A rating of [`Rating::DEFAULT`] means the
/// entry has not been rated yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(1);
    pub const MAX: Rating = Rating(5);
    pub const DEFAULT: Rating = Rating::MIN;

    /// Returns `None` when `value` is outside the valid range.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&value)
            .then_some(Rating(value))
    }

    /// Clamps any integer to the nearest valid rating.
    pub fn clamped(value: i64) -> Self {
        let bounded = value.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));
        Rating(bounded as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }

    /// Every valid rating in ascending order.
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN.0..=Self::MAX.0).map(Rating)
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value).ok_or_else(|| format!("rating {value} is outside 1..=5"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_nearest_bound() {
        assert_eq!(Rating::clamped(-3).value(), 1);
        assert_eq!(Rating::clamped(0).value(), 1);
        assert_eq!(Rating::clamped(4).value(), 4);
        assert_eq!(Rating::clamped(7).value(), 5);
        assert_eq!(Rating::clamped(i64::MAX).value(), 5);
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(6).is_none());
        assert_eq!(Rating::new(5), Some(Rating::MAX));
    }

    #[test]
    fn all_lists_five_ratings() {
        let values: Vec<u8> = Rating::all().map(Rating::value).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Rating>("9").is_err());
        assert_eq!(serde_json::from_str::<Rating>("2").unwrap().value(), 2);
    }
}
