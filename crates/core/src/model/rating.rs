use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RatingParseError;

//
// ─── RATING ───────────────────────────────────────────────────────────────────
//

/// Mastery category assigned to a question.
///
/// The set is closed and carries no ranking; `Ord` is derived only so ratings
/// can be kept in ordered sets and maps.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Never rated. Every question starts here.
    #[default]
    #[serde(rename = "notyet")]
    Unrated,
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Rating {
    /// All ratings in display order.
    pub const ALL: [Rating; 5] = [
        Rating::Unrated,
        Rating::Excellent,
        Rating::Good,
        Rating::Fair,
        Rating::Poor,
    ];

    /// Name used in the persisted progress payload.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Rating::Unrated => "notyet",
            Rating::Excellent => "excellent",
            Rating::Good => "good",
            Rating::Fair => "fair",
            Rating::Poor => "poor",
        }
    }

    /// Position in [`Rating::ALL`].
    #[must_use]
    pub fn ordinal(self) -> usize {
        match self {
            Rating::Unrated => 0,
            Rating::Excellent => 1,
            Rating::Good => 2,
            Rating::Fair => 3,
            Rating::Poor => 4,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = RatingParseError;

    /// Accepts the persisted names plus `unrated` as an alias, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "notyet" | "unrated" => Ok(Rating::Unrated),
            "excellent" => Ok(Rating::Excellent),
            "good" => Ok(Rating::Good),
            "fair" => Ok(Rating::Fair),
            "poor" => Ok(Rating::Poor),
            _ => Err(RatingParseError(s.to_string())),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for rating in Rating::ALL {
            assert_eq!(rating.as_str().parse::<Rating>().unwrap(), rating);
        }
    }

    #[test]
    fn unrated_alias_and_case_are_accepted() {
        assert_eq!("Unrated".parse::<Rating>().unwrap(), Rating::Unrated);
        assert_eq!(" GOOD ".parse::<Rating>().unwrap(), Rating::Good);
        let err = "great".parse::<Rating>().unwrap_err();
        assert_eq!(err, RatingParseError("great".into()));
    }

    #[test]
    fn serde_uses_persisted_names() {
        let json = serde_json::to_string(&Rating::Unrated).unwrap();
        assert_eq!(json, "\"notyet\"");
        let parsed: Rating = serde_json::from_str("\"fair\"").unwrap();
        assert_eq!(parsed, Rating::Fair);
    }

    #[test]
    fn ordinal_matches_display_order() {
        for (i, rating) in Rating::ALL.iter().enumerate() {
            assert_eq!(rating.ordinal(), i);
        }
    }
}
