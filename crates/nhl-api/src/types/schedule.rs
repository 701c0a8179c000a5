//! Schedule and scores records.

use serde::{Deserialize, Serialize};

use crate::types::enums::{GameState, GameType};
use crate::types::ids::{GameId, TeamId};
use crate::types::localized::LocalizedText;

/// A game entry in a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGame {
    /// Game identifier.
    #[serde(rename = "id")]
    pub game_id: GameId,
    /// Game type.
    pub game_type: GameType,
    /// Game date (`"YYYY-MM-DD"`), absent on some resources.
    pub game_date: Option<String>,
    /// Start time in UTC.
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: String,
    /// Away team.
    pub away_team: ScheduleTeam,
    /// Home team.
    pub home_team: ScheduleTeam,
    /// Current game state.
    pub game_state: GameState,
}

/// Team details within a schedule entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTeam {
    /// Team identifier.
    pub id: TeamId,
    /// Team abbreviation.
    pub abbrev: String,
    /// Place portion of the name.
    pub place_name: Option<LocalizedText>,
    /// Logo URL.
    pub logo: String,
    /// Score, once the game has started.
    pub score: Option<i64>,
}

/// All games on a single day, extracted from the weekly schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySchedule {
    /// First date of the next schedule window.
    pub next_start_date: Option<String>,
    /// First date of the previous schedule window.
    pub previous_start_date: Option<String>,
    /// The day this schedule covers (`"YYYY-MM-DD"`).
    pub date: String,
    /// Games on this day.
    pub games: Vec<ScheduleGame>,
    /// Number of games on this day.
    pub number_of_games: usize,
}

/// A week of scheduled games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    /// First date of the next schedule window.
    pub next_start_date: String,
    /// First date of the previous schedule window.
    pub previous_start_date: String,
    /// One entry per day of the week.
    pub game_week: Vec<GameDay>,
}

/// One day's slice of a weekly schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDay {
    /// The date (`"YYYY-MM-DD"`).
    pub date: String,
    /// Games on this date.
    pub games: Vec<ScheduleGame>,
}

/// A team's schedule for a week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSchedule {
    /// Games in the window.
    pub games: Vec<ScheduleGame>,
}

/// Scores for all games on a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyScores {
    /// Previous date with games.
    pub prev_date: String,
    /// The date these scores cover.
    pub current_date: String,
    /// Next date with games.
    pub next_date: String,
    /// Per-game scores.
    pub games: Vec<GameScore>,
}

/// Score entry for a single game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScore {
    /// Game identifier.
    #[serde(rename = "id")]
    pub game_id: GameId,
    /// Game type.
    pub game_type: GameType,
    /// Current game state.
    pub game_state: GameState,
    /// Away team with score.
    pub away_team: ScheduleTeam,
    /// Home team with score.
    pub home_team: ScheduleTeam,
}
