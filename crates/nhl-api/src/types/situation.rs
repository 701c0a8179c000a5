//! On-ice strength parsing from situation codes.

use std::fmt;

/// On-ice strength at a moment in a game, parsed from a 4-character
/// situation code shaped `[awayGoalie][awaySkaters][homeSkaters][homeGoalie]`.
///
/// Derived on demand from play-by-play data, never stored on the wire
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSituation {
    /// Away skater count.
    pub away_skaters: u8,
    /// Whether the away goalie is in the net (`'1'` in the code).
    pub away_goalie_in: bool,
    /// Home skater count.
    pub home_skaters: u8,
    /// Whether the home goalie is in the net (`'1'` in the code).
    pub home_goalie_in: bool,
}

impl GameSituation {
    /// Parses a situation code such as `"1551"`.
    ///
    /// Returns `None` unless the code is exactly 4 characters with decimal
    /// digits in positions 1 and 2. Goalie flags treat anything other than
    /// `'1'` as a pulled goalie.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let (Some(away_flag), Some(away), Some(home), Some(home_flag), None) = (
            chars.next(),
            chars.next(),
            chars.next(),
            chars.next(),
            chars.next(),
        ) else {
            return None;
        };

        let away_skaters = u8::try_from(away.to_digit(10)?).ok()?;
        let home_skaters = u8::try_from(home.to_digit(10)?).ok()?;

        Some(Self {
            away_skaters,
            away_goalie_in: away_flag == '1',
            home_skaters,
            home_goalie_in: home_flag == '1',
        })
    }

    /// Whether both sides have the same number of skaters.
    #[must_use]
    pub const fn is_even_strength(self) -> bool {
        self.away_skaters == self.home_skaters
    }

    /// Whether the away side has a skater advantage.
    #[must_use]
    pub const fn is_away_power_play(self) -> bool {
        self.away_skaters > self.home_skaters
    }

    /// Whether the home side has a skater advantage.
    #[must_use]
    pub const fn is_home_power_play(self) -> bool {
        self.home_skaters > self.away_skaters
    }

    /// Whether either net is empty.
    #[must_use]
    pub const fn is_empty_net(self) -> bool {
        !self.away_goalie_in || !self.home_goalie_in
    }

    /// Human-readable strength label: `"5v5"`, `"5v4 PP"`, `"6v5 EN"`.
    ///
    /// An empty net wins over a power play when both apply.
    #[must_use]
    pub fn strength(self) -> String {
        let base = format!("{}v{}", self.away_skaters, self.home_skaters);
        if self.is_empty_net() {
            return format!("{base} EN");
        }
        if self.away_skaters != self.home_skaters {
            return format!("{base} PP");
        }
        base
    }
}

impl fmt::Display for GameSituation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.strength())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_parse_valid_code() {
        // Arrange & Act
        let situation = GameSituation::parse("1551").unwrap();

        // Assert
        assert!(situation.away_goalie_in);
        assert_eq!(situation.away_skaters, 5);
        assert_eq!(situation.home_skaters, 5);
        assert!(situation.home_goalie_in);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        // Arrange & Act & Assert
        assert!(GameSituation::parse("123").is_none());
        assert!(GameSituation::parse("12345").is_none());
        assert!(GameSituation::parse("abcd").is_none());
        assert!(GameSituation::parse("1a51").is_none());
        assert!(GameSituation::parse("15b1").is_none());
        assert!(GameSituation::parse("").is_none());
    }

    #[test]
    fn test_even_strength() {
        // Arrange & Act & Assert
        assert!(GameSituation::parse("1551").unwrap().is_even_strength());
        assert!(GameSituation::parse("1441").unwrap().is_even_strength());
        assert!(!GameSituation::parse("1541").unwrap().is_even_strength());
    }

    #[test]
    fn test_power_play_direction() {
        // Arrange
        let away_pp = GameSituation::parse("1541").unwrap();
        let home_pp = GameSituation::parse("1451").unwrap();

        // Act & Assert
        assert!(away_pp.is_away_power_play());
        assert!(!away_pp.is_home_power_play());
        assert!(home_pp.is_home_power_play());
        assert!(!home_pp.is_away_power_play());
    }

    #[test]
    fn test_empty_net() {
        // Arrange & Act & Assert
        assert!(GameSituation::parse("0551").unwrap().is_empty_net());
        assert!(GameSituation::parse("1550").unwrap().is_empty_net());
        assert!(!GameSituation::parse("1551").unwrap().is_empty_net());
    }

    #[test]
    fn test_strength_labels() {
        // Arrange & Act & Assert
        assert_eq!(GameSituation::parse("1551").unwrap().strength(), "5v5");
        assert_eq!(GameSituation::parse("1541").unwrap().strength(), "5v4 PP");
        // EN wins over PP when both apply
        assert_eq!(GameSituation::parse("0651").unwrap().strength(), "6v5 EN");
    }

    #[test]
    fn test_goalie_flag_treats_non_one_as_pulled() {
        // Arrange & Act
        let situation = GameSituation::parse("2552").unwrap();

        // Assert
        assert!(!situation.away_goalie_in);
        assert!(!situation.home_goalie_in);
    }
}
