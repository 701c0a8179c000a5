//! Closed string/integer-coded enums used across responses.
//!
//! These are deliberately closed: an unknown wire value is a decode failure,
//! not a silently-accepted catch-all, so API contract changes surface
//! immediately.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Player position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Center (`"C"`).
    #[serde(rename = "C")]
    Center,
    /// Left wing (`"L"`).
    #[serde(rename = "L")]
    LeftWing,
    /// Right wing (`"R"`).
    #[serde(rename = "R")]
    RightWing,
    /// Defenseman (`"D"`).
    #[serde(rename = "D")]
    Defenseman,
    /// Goalie (`"G"`).
    #[serde(rename = "G")]
    Goalie,
}

impl Position {
    /// Whether this position is a forward.
    #[must_use]
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Center | Self::LeftWing | Self::RightWing)
    }

    /// Whether this position is a skater (not a goalie).
    #[must_use]
    pub const fn is_skater(self) -> bool {
        !matches!(self, Self::Goalie)
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Center => "Center",
            Self::LeftWing => "Left Wing",
            Self::RightWing => "Right Wing",
            Self::Defenseman => "Defenseman",
            Self::Goalie => "Goalie",
        }
    }
}

/// Player handedness (shoots for skaters, catches for goalies).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    /// Left (`"L"`).
    #[serde(rename = "L")]
    Left,
    /// Right (`"R"`).
    #[serde(rename = "R")]
    Right,
}

/// Decision credited to a goalie for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalieDecision {
    /// Win (`"W"`).
    #[serde(rename = "W")]
    Win,
    /// Loss (`"L"`).
    #[serde(rename = "L")]
    Loss,
    /// Overtime loss (`"O"`).
    #[serde(rename = "O")]
    OvertimeLoss,
}

/// Type of period (regulation, overtime, shootout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodType {
    /// Regulation (`"REG"`).
    #[serde(rename = "REG")]
    Regulation,
    /// Overtime (`"OT"`).
    #[serde(rename = "OT")]
    Overtime,
    /// Shootout (`"SO"`).
    #[serde(rename = "SO")]
    Shootout,
}

/// Whether a team played at home or on the road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HomeRoad {
    /// Home (`"H"`).
    #[serde(rename = "H")]
    Home,
    /// Road (`"R"`).
    #[serde(rename = "R")]
    Road,
}

/// Zone on the ice where a play occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneCode {
    /// Offensive zone (`"O"`).
    #[serde(rename = "O")]
    Offensive,
    /// Defensive zone (`"D"`).
    #[serde(rename = "D")]
    Defensive,
    /// Neutral zone (`"N"`).
    #[serde(rename = "N")]
    Neutral,
}

/// Which side of the ice a team is defending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefendingSide {
    /// Left side.
    Left,
    /// Right side.
    Right,
}

/// Schedule state for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameScheduleState {
    /// Scheduled normally (`"OK"`).
    #[serde(rename = "OK")]
    Ok,
    /// Postponed (`"PPD"`).
    #[serde(rename = "PPD")]
    Postponed,
    /// Suspended (`"SUSP"`).
    #[serde(rename = "SUSP")]
    Suspended,
    /// Cancelled (`"CNCL"`).
    #[serde(rename = "CNCL")]
    Cancelled,
}

/// Current state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Scheduled for the future (`"FUT"`).
    #[serde(rename = "FUT")]
    Future,
    /// Pre-game warmups (`"PRE"`).
    #[serde(rename = "PRE")]
    PreGame,
    /// Currently in progress (`"LIVE"`).
    #[serde(rename = "LIVE")]
    Live,
    /// Ended, in regulation, overtime, or shootout (`"FINAL"`).
    #[serde(rename = "FINAL")]
    Final,
    /// Not currently active (`"OFF"`).
    #[serde(rename = "OFF")]
    Off,
    /// Postponed (`"PPD"`).
    #[serde(rename = "PPD")]
    Postponed,
    /// Suspended (`"SUSP"`).
    #[serde(rename = "SUSP")]
    Suspended,
    /// Critical state: overtime or late in a close game (`"CRIT"`).
    #[serde(rename = "CRIT")]
    Critical,
}

impl GameState {
    /// Whether the game has started (pre-game or later).
    #[must_use]
    pub const fn has_started(self) -> bool {
        !matches!(self, Self::Future | Self::Off | Self::Postponed)
    }

    /// Whether the game is currently being played.
    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::Live | Self::Critical)
    }

    /// Whether the game has finished.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Final)
    }

    /// Whether the game can still be played.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        matches!(
            self,
            Self::Future | Self::PreGame | Self::Live | Self::Final | Self::Critical
        )
    }
}

/// Type of play event in play-by-play data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayEventType {
    /// Game start.
    GameStart,
    /// Period start.
    PeriodStart,
    /// Period end.
    PeriodEnd,
    /// Game end.
    GameEnd,
    /// Play stoppage.
    Stoppage,
    /// Goal scored.
    Goal,
    /// Shot on goal.
    ShotOnGoal,
    /// Missed shot.
    MissedShot,
    /// Blocked shot.
    BlockedShot,
    /// Penalty assessed.
    Penalty,
    /// Face-off.
    Faceoff,
    /// Hit.
    Hit,
    /// Giveaway.
    Giveaway,
    /// Takeaway.
    Takeaway,
    /// Shootout completed.
    ShootoutComplete,
    /// Delayed penalty signalled.
    DelayedPenalty,
    /// Failed shot attempt (shootout/penalty shot).
    FailedShotAttempt,
}

impl PlayEventType {
    /// Whether this event type is a shot-or-goal scoring event.
    #[must_use]
    pub const fn is_scoring_event(self) -> bool {
        matches!(
            self,
            Self::Goal | Self::ShotOnGoal | Self::MissedShot | Self::BlockedShot
        )
    }

    /// Whether this event type marks a period or game boundary.
    #[must_use]
    pub const fn is_period_boundary(self) -> bool {
        matches!(
            self,
            Self::PeriodStart | Self::PeriodEnd | Self::GameStart | Self::GameEnd
        )
    }
}

/// Type of NHL game, integer-coded on the wire (1 = preseason, 2 = regular
/// season, 3 = playoffs, 4 = all-star).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameType {
    /// Preseason (1).
    Preseason,
    /// Regular season (2).
    RegularSeason,
    /// Playoffs (3).
    Playoffs,
    /// All-star (4).
    AllStar,
}

impl GameType {
    /// The wire integer code.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Preseason => 1,
            Self::RegularSeason => 2,
            Self::Playoffs => 3,
            Self::AllStar => 4,
        }
    }

    /// Decodes a wire integer code.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Preseason),
            2 => Some(Self::RegularSeason),
            3 => Some(Self::Playoffs),
            4 => Some(Self::AllStar),
            _ => None,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Preseason => "Preseason",
            Self::RegularSeason => "Regular Season",
            Self::Playoffs => "Playoffs",
            Self::AllStar => "All-Star",
        }
    }

    /// Two-digit code used inside game ids (`"02"` for regular season).
    #[must_use]
    pub fn game_id_code(self) -> String {
        format!("{:02}", self.code())
    }
}

impl Serialize for GameType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for GameType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i64::deserialize(deserializer)?;
        Self::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown game type code: {code}")))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_position_classification() {
        // Arrange & Act & Assert
        assert!(Position::Center.is_forward());
        assert!(Position::LeftWing.is_forward());
        assert!(Position::RightWing.is_forward());
        assert!(!Position::Defenseman.is_forward());
        assert!(!Position::Goalie.is_forward());
        assert!(Position::Defenseman.is_skater());
        assert!(!Position::Goalie.is_skater());
    }

    #[test]
    fn test_position_wire_codes() {
        // Arrange & Act & Assert
        assert_eq!(serde_json::to_string(&Position::Center).unwrap(), "\"C\"");
        assert_eq!(
            serde_json::from_str::<Position>("\"D\"").unwrap(),
            Position::Defenseman
        );
        assert!(serde_json::from_str::<Position>("\"X\"").is_err());
    }

    #[test]
    fn test_game_state_wire_codes() {
        // Arrange & Act & Assert
        for (json, state) in [
            ("\"FUT\"", GameState::Future),
            ("\"PRE\"", GameState::PreGame),
            ("\"LIVE\"", GameState::Live),
            ("\"FINAL\"", GameState::Final),
            ("\"OFF\"", GameState::Off),
            ("\"PPD\"", GameState::Postponed),
            ("\"SUSP\"", GameState::Suspended),
            ("\"CRIT\"", GameState::Critical),
        ] {
            assert_eq!(serde_json::from_str::<GameState>(json).unwrap(), state);
        }
    }

    #[test]
    fn test_game_state_queries() {
        // Arrange & Act & Assert
        assert!(!GameState::Future.has_started());
        assert!(!GameState::Off.has_started());
        assert!(!GameState::Postponed.has_started());
        assert!(GameState::PreGame.has_started());
        assert!(GameState::Critical.has_started());

        assert!(GameState::Live.is_live());
        assert!(GameState::Critical.is_live());
        assert!(!GameState::Final.is_live());

        assert!(GameState::Final.is_final());
        assert!(!GameState::Live.is_final());

        assert!(GameState::Future.is_playable());
        assert!(!GameState::Suspended.is_playable());
    }

    #[test]
    fn test_play_event_type_wire_codes() {
        // Arrange & Act & Assert
        assert_eq!(
            serde_json::from_str::<PlayEventType>("\"shot-on-goal\"").unwrap(),
            PlayEventType::ShotOnGoal
        );
        assert_eq!(
            serde_json::from_str::<PlayEventType>("\"period-start\"").unwrap(),
            PlayEventType::PeriodStart
        );
    }

    #[test]
    fn test_play_event_type_queries() {
        // Arrange & Act & Assert
        assert!(PlayEventType::Goal.is_scoring_event());
        assert!(PlayEventType::BlockedShot.is_scoring_event());
        assert!(!PlayEventType::Hit.is_scoring_event());
        assert!(!PlayEventType::Penalty.is_scoring_event());

        assert!(PlayEventType::GameStart.is_period_boundary());
        assert!(PlayEventType::PeriodEnd.is_period_boundary());
        assert!(!PlayEventType::Goal.is_period_boundary());
    }

    #[test]
    fn test_game_type_codes() {
        // Arrange & Act & Assert
        assert_eq!(GameType::Preseason.code(), 1);
        assert_eq!(GameType::RegularSeason.code(), 2);
        assert_eq!(GameType::Playoffs.code(), 3);
        assert_eq!(GameType::AllStar.code(), 4);
        assert_eq!(GameType::from_code(2), Some(GameType::RegularSeason));
        assert_eq!(GameType::from_code(9), None);
    }

    #[test]
    fn test_game_type_serde_is_integer() {
        // Arrange & Act & Assert
        assert_eq!(serde_json::to_string(&GameType::Playoffs).unwrap(), "3");
        assert_eq!(
            serde_json::from_str::<GameType>("2").unwrap(),
            GameType::RegularSeason
        );
        assert!(serde_json::from_str::<GameType>("7").is_err());
    }

    #[test]
    fn test_game_id_code_is_zero_padded() {
        // Arrange & Act & Assert
        assert_eq!(GameType::Preseason.game_id_code(), "01");
        assert_eq!(GameType::RegularSeason.game_id_code(), "02");
    }
}
