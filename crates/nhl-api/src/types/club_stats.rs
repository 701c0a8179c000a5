//! Team season statistics records.

use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize, Serializer};

use crate::types::enums::{GameType, Position};
use crate::types::ids::PlayerId;
use crate::types::localized::LocalizedText;
use crate::types::season::Season;

/// Season statistics for one of a team's skaters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubSkaterStats {
    /// Player identifier.
    pub player_id: PlayerId,
    /// Headshot image URL.
    pub headshot: String,
    /// First name.
    pub first_name: LocalizedText,
    /// Last name.
    pub last_name: LocalizedText,
    /// Position.
    pub position_code: Position,
    /// Games played.
    pub games_played: i64,
    /// Goals.
    pub goals: i64,
    /// Assists.
    pub assists: i64,
    /// Points.
    pub points: i64,
    /// Plus/minus.
    pub plus_minus: i64,
    /// Penalty minutes.
    pub penalty_minutes: i64,
    /// Power-play goals.
    pub power_play_goals: i64,
    /// Shorthanded goals.
    pub shorthanded_goals: i64,
    /// Game-winning goals.
    pub game_winning_goals: i64,
    /// Overtime goals.
    pub overtime_goals: i64,
    /// Shots on goal.
    pub shots: i64,
    /// Shooting percentage (0.0 to 1.0).
    pub shooting_pctg: f64,
    /// Average time on ice per game, in seconds.
    pub avg_time_on_ice_per_game: f64,
    /// Average shifts per game.
    pub avg_shifts_per_game: f64,
    /// Face-off winning percentage (0.0 to 1.0).
    pub faceoff_win_pctg: f64,
}

impl ClubSkaterStats {
    /// Full name (first + last, default language).
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.default, self.last_name.default)
    }
}

/// Season statistics for one of a team's goalies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubGoalieStats {
    /// Player identifier.
    pub player_id: PlayerId,
    /// Headshot image URL.
    pub headshot: String,
    /// First name.
    pub first_name: LocalizedText,
    /// Last name.
    pub last_name: LocalizedText,
    /// Games played.
    pub games_played: i64,
    /// Games started.
    pub games_started: i64,
    /// Wins.
    pub wins: i64,
    /// Losses.
    pub losses: i64,
    /// Overtime losses.
    pub overtime_losses: i64,
    /// Goals-against average.
    pub goals_against_average: f64,
    /// Save percentage (0.0 to 1.0).
    pub save_percentage: f64,
    /// Shots against.
    pub shots_against: i64,
    /// Saves.
    pub saves: i64,
    /// Goals against.
    pub goals_against: i64,
    /// Shutouts.
    pub shutouts: i64,
    /// Goals.
    pub goals: i64,
    /// Assists.
    pub assists: i64,
    /// Points.
    pub points: i64,
    /// Penalty minutes.
    pub penalty_minutes: i64,
    /// Total time on ice, in seconds.
    pub time_on_ice: i64,
}

impl ClubGoalieStats {
    /// Full name (first + last, default language).
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.default, self.last_name.default)
    }

    /// Record string, e.g. `"20-10-3"`.
    #[must_use]
    pub fn record(&self) -> String {
        format!("{}-{}-{}", self.wins, self.losses, self.overtime_losses)
    }
}

/// Team statistics for one season and game type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubStats {
    /// Season, as the API's 8-digit string.
    pub season: String,
    /// Game type the stats cover.
    pub game_type: GameType,
    /// Skater lines.
    pub skaters: Vec<ClubSkaterStats>,
    /// Goalie lines.
    pub goalies: Vec<ClubGoalieStats>,
}

/// Which game types have statistics for a team in one season.
///
/// Unknown game-type codes in the wire list are dropped rather than
/// failing the whole manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeasonGameTypes {
    /// The season.
    pub season: Season,
    /// Game types with available statistics.
    pub game_types: Vec<GameType>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSeasonGameTypes {
    season: i64,
    game_types: Vec<i64>,
}

impl<'de> Deserialize<'de> for SeasonGameTypes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireSeasonGameTypes::deserialize(deserializer)?;
        if wire.season < 0 {
            return Err(D::Error::custom(format!(
                "negative season id: {}",
                wire.season
            )));
        }
        Ok(Self {
            season: Season::from_packed(wire.season),
            game_types: wire
                .game_types
                .into_iter()
                .filter_map(GameType::from_code)
                .collect(),
        })
    }
}

impl Serialize for SeasonGameTypes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire<'a> {
            season: i64,
            game_types: &'a [GameType],
        }

        Wire {
            season: self.season.packed(),
            game_types: &self.game_types,
        }
        .serialize(serializer)
    }
}
