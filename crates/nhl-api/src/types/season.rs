//! NHL season representation and packed-integer codec.

use std::fmt;

use chrono::{Datelike, Local};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An NHL season spanning two calendar years (e.g. 2024-2025).
///
/// The canonical wire form is the single integer `startYear * 10000 +
/// endYear` (`20242025`). Decoding performs no validation of the pair —
/// the wire value is the source of truth, and a nonsensical packed integer
/// round-trips unchanged rather than being silently corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Season {
    /// The year the season starts (2024 for the 2024-2025 season).
    pub start_year: i32,
    /// The year the season ends (2025 for the 2024-2025 season).
    pub end_year: i32,
}

impl Season {
    /// Creates a season from both years.
    #[must_use]
    pub const fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year,
            end_year,
        }
    }

    /// Creates a season from its start year (end year is the next one).
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn from_start_year(start_year: i32) -> Self {
        Self {
            start_year,
            end_year: start_year + 1,
        }
    }

    /// Parses `"20242025"` or `"2024-2025"`; any other shape is `None`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let cleaned = s.replace('-', "");
        if cleaned.len() != 8 || !cleaned.is_ascii() {
            return None;
        }
        let start_year = cleaned.get(..4)?.parse::<i32>().ok()?;
        let end_year = cleaned.get(4..)?.parse::<i32>().ok()?;
        Some(Self::new(start_year, end_year))
    }

    /// Unpacks the canonical 8-digit integer form.
    #[must_use]
    #[allow(
        clippy::arithmetic_side_effects,
        clippy::as_conversions,
        clippy::cast_possible_truncation
    )]
    pub const fn from_packed(value: i64) -> Self {
        Self {
            start_year: (value / 10_000) as i32,
            end_year: (value % 10_000) as i32,
        }
    }

    /// Packs into the canonical 8-digit integer form.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::as_conversions)]
    pub const fn packed(self) -> i64 {
        self.start_year as i64 * 10_000 + self.end_year as i64
    }

    /// Formats as `"20242025"` for API request paths.
    #[must_use]
    pub fn api_format(self) -> String {
        format!("{}{}", self.start_year, self.end_year)
    }

    /// The season in progress today.
    ///
    /// The season calendar turns over in October: before October the start
    /// year is last calendar year, from October on it is the current one.
    #[must_use]
    pub fn current() -> Self {
        let now = Local::now().date_naive();
        Self::for_date(now.year(), now.month())
    }

    /// Season start-year rule for an arbitrary (year, month) pair.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn for_date(year: i32, month: u32) -> Self {
        const SEASON_START_MONTH: u32 = 10;
        if month < SEASON_START_MONTH {
            Self::from_start_year(year - 1)
        } else {
            Self::from_start_year(year)
        }
    }
}

impl fmt::Display for Season {
    /// Renders as `"2024-2025"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_year, self.end_year)
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.packed())
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Ok(Self::from_packed(value))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_from_start_year() {
        // Arrange & Act
        let season = Season::from_start_year(2024);

        // Assert
        assert_eq!(season.start_year, 2024);
        assert_eq!(season.end_year, 2025);
    }

    #[test]
    fn test_parse_eight_digit() {
        // Arrange & Act
        let season = Season::parse("20242025").unwrap();

        // Assert
        assert_eq!(season, Season::new(2024, 2025));
    }

    #[test]
    fn test_parse_hyphenated() {
        // Arrange & Act & Assert
        assert_eq!(Season::parse("2024-2025"), Season::parse("20242025"));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        // Arrange & Act & Assert
        assert!(Season::parse("invalid").is_none());
        assert!(Season::parse("2024").is_none());
        assert!(Season::parse("202420256").is_none());
        assert!(Season::parse("2024202a").is_none());
    }

    #[test]
    fn test_parse_rejects_multibyte_input() {
        // Arrange & Act & Assert: 8 bytes but not 8 digits; a multibyte
        // character straddling the split point must not panic
        assert!(Season::parse("202\u{e9}025").is_none());
        assert!(Season::parse("2024\u{e9}025").is_none());
        assert!(Season::parse("\u{e9}\u{e9}\u{e9}\u{e9}").is_none());
    }

    #[test]
    fn test_packed_round_trip() {
        // Arrange & Act & Assert: lossless for any 8-digit input,
        // including pairs that are not a plausible season
        for value in [10_000_000_i64, 20_242_025, 20_231_999, 99_999_999] {
            assert_eq!(Season::from_packed(value).packed(), value);
        }
    }

    #[test]
    fn test_api_format() {
        // Arrange & Act & Assert
        assert_eq!(Season::from_start_year(2024).api_format(), "20242025");
    }

    #[test]
    fn test_display_format() {
        // Arrange & Act & Assert
        assert_eq!(Season::from_start_year(2024).to_string(), "2024-2025");
    }

    #[test]
    fn test_season_turns_over_in_october() {
        // Arrange & Act & Assert
        assert_eq!(Season::for_date(2025, 9), Season::from_start_year(2024));
        assert_eq!(Season::for_date(2025, 10), Season::from_start_year(2025));
        assert_eq!(Season::for_date(2025, 1), Season::from_start_year(2024));
        assert_eq!(Season::for_date(2025, 12), Season::from_start_year(2025));
    }

    #[test]
    fn test_serde_uses_packed_integer() {
        // Arrange
        let season = Season::from_start_year(2024);

        // Act
        let json = serde_json::to_string(&season).unwrap();
        let back: Season = serde_json::from_str(&json).unwrap();

        // Assert
        assert_eq!(json, "20242025");
        assert_eq!(back, season);
    }

    #[test]
    fn test_ordering_follows_start_year() {
        // Arrange & Act & Assert
        assert!(Season::from_start_year(2023) < Season::from_start_year(2024));
    }
}
