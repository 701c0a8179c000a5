//! Boxscore records and team-level aggregation.

use serde::{Deserialize, Serialize};

use crate::types::enums::{
    GameScheduleState, GameState, GameType, GoalieDecision, PeriodType, Position,
};
use crate::types::ids::{GameId, PlayerId, TeamId};
use crate::types::localized::LocalizedText;
use crate::types::season::Season;

/// Boxscore with detailed game and player statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boxscore {
    /// Game identifier.
    pub id: GameId,
    /// Season the game belongs to.
    pub season: Season,
    /// Game type.
    pub game_type: GameType,
    /// Whether scoring detail is limited for this game.
    pub limited_scoring: bool,
    /// Game date (`"YYYY-MM-DD"`).
    pub game_date: String,
    /// Venue name.
    pub venue: LocalizedText,
    /// Venue location.
    pub venue_location: LocalizedText,
    /// Start time in UTC.
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: String,
    /// Eastern-time UTC offset.
    #[serde(rename = "easternUTCOffset")]
    pub eastern_utc_offset: String,
    /// Venue UTC offset.
    #[serde(rename = "venueUTCOffset")]
    pub venue_utc_offset: String,
    /// TV broadcasts carrying the game.
    pub tv_broadcasts: Vec<TvBroadcast>,
    /// Current game state.
    pub game_state: GameState,
    /// Schedule state.
    pub game_schedule_state: GameScheduleState,
    /// Current period descriptor.
    pub period_descriptor: PeriodDescriptor,
    /// Special event the game is part of, if any.
    pub special_event: Option<SpecialEvent>,
    /// Away team.
    pub away_team: BoxscoreTeam,
    /// Home team.
    pub home_team: BoxscoreTeam,
    /// Game clock.
    pub clock: GameClock,
    /// Per-player statistics for both teams.
    pub player_by_game_stats: PlayerByGameStats,
}

/// TV broadcast information.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TvBroadcast {
    /// Broadcast identifier.
    pub id: i64,
    /// Market (`"A"` away, `"H"` home, `"N"` national).
    pub market: String,
    /// Country code.
    pub country_code: String,
    /// Network name.
    pub network: String,
    /// Ordering hint.
    pub sequence_number: i64,
}

/// Special event information (outdoor games, tournaments).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialEvent {
    /// Parent event identifier.
    pub parent_id: i64,
    /// Event name.
    pub name: LocalizedText,
    /// Event logo URL.
    pub light_logo_url: LocalizedText,
}

/// Period number and type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDescriptor {
    /// Period number (1-based; 4+ is overtime).
    pub number: i64,
    /// Period type.
    pub period_type: PeriodType,
    /// Number of regulation periods for this game.
    pub max_regulation_periods: i64,
}

/// Team details within a boxscore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxscoreTeam {
    /// Team identifier.
    pub id: TeamId,
    /// Common (nickname) portion of the name.
    pub common_name: LocalizedText,
    /// Team abbreviation.
    pub abbrev: String,
    /// Current score.
    pub score: i64,
    /// Shots on goal.
    pub sog: i64,
    /// Light logo URL.
    pub logo: String,
    /// Dark logo URL.
    pub dark_logo: String,
    /// Place portion of the name.
    pub place_name: LocalizedText,
    /// Place name with preposition (for prose).
    pub place_name_with_preposition: LocalizedText,
}

/// Game clock state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameClock {
    /// Time remaining in the period (`"MM:SS"`).
    pub time_remaining: String,
    /// Seconds remaining in the period.
    pub seconds_remaining: i64,
    /// Whether the clock is running.
    pub running: bool,
    /// Whether the game is in intermission.
    pub in_intermission: bool,
}

/// Player statistics for both teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerByGameStats {
    /// Away team's players.
    pub away_team: TeamPlayerStats,
    /// Home team's players.
    pub home_team: TeamPlayerStats,
}

/// One team's player statistics grouped by position.
///
/// Position groups the API omits (it drops empty ones) decode as empty
/// lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPlayerStats {
    /// Forwards.
    #[serde(default)]
    pub forwards: Vec<SkaterStats>,
    /// Defensemen.
    #[serde(default)]
    pub defense: Vec<SkaterStats>,
    /// Goalies.
    #[serde(default)]
    pub goalies: Vec<GoalieStats>,
}

/// Single-game statistics for a skater.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkaterStats {
    /// Player identifier.
    pub player_id: PlayerId,
    /// Sweater number.
    pub sweater_number: i64,
    /// Abbreviated name (e.g. `"C. McDavid"`).
    pub name: LocalizedText,
    /// Position.
    pub position: Position,
    /// Goals.
    pub goals: i64,
    /// Assists.
    pub assists: i64,
    /// Points.
    pub points: i64,
    /// Plus/minus.
    pub plus_minus: i64,
    /// Penalty minutes.
    pub pim: i64,
    /// Hits.
    pub hits: i64,
    /// Power-play goals.
    pub power_play_goals: i64,
    /// Shots on goal.
    pub sog: i64,
    /// Face-off winning percentage (0.0 to 1.0).
    pub faceoff_winning_pctg: f64,
    /// Time on ice (`"MM:SS"`).
    pub toi: String,
    /// Blocked shots.
    pub blocked_shots: i64,
    /// Shift count.
    pub shifts: i64,
    /// Giveaways.
    pub giveaways: i64,
    /// Takeaways.
    pub takeaways: i64,
}

/// Single-game statistics for a goalie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalieStats {
    /// Player identifier.
    pub player_id: PlayerId,
    /// Sweater number.
    pub sweater_number: i64,
    /// Abbreviated name.
    pub name: LocalizedText,
    /// Position (always goalie).
    pub position: Position,
    /// Even-strength saves/shots (`"saves/shots"`).
    pub even_strength_shots_against: String,
    /// Power-play saves/shots.
    pub power_play_shots_against: String,
    /// Shorthanded saves/shots.
    pub shorthanded_shots_against: String,
    /// Overall saves/shots.
    pub save_shots_against: String,
    /// Save percentage, absent before any shot faced.
    pub save_pctg: Option<f64>,
    /// Even-strength goals against.
    pub even_strength_goals_against: i64,
    /// Power-play goals against.
    pub power_play_goals_against: i64,
    /// Shorthanded goals against.
    pub shorthanded_goals_against: i64,
    /// Penalty minutes.
    pub pim: Option<i64>,
    /// Goals against.
    pub goals_against: i64,
    /// Time on ice (`"MM:SS"`).
    pub toi: String,
    /// Whether this goalie started the game.
    pub starter: Option<bool>,
    /// Win/loss decision, once the game is final.
    pub decision: Option<GoalieDecision>,
    /// Shots against.
    pub shots_against: i64,
    /// Saves.
    pub saves: i64,
}

/// Team statistics aggregated from individual player lines.
///
/// The API does not expose team face-off totals on this resource, so
/// `faceoff_total` uses each center's shift count as a stand-in whenever
/// that center's face-off winning percentage is nonzero. Treat the face-off
/// numbers as an estimate, not an exact statistic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TeamGameStats {
    /// Shots on goal.
    pub shots_on_goal: i64,
    /// Estimated face-off wins.
    pub faceoff_wins: i64,
    /// Estimated face-offs taken.
    pub faceoff_total: i64,
    /// Power-play goals.
    pub power_play_goals: i64,
    /// Power-play opportunities (opponent goalie's PP goals against).
    pub power_play_opportunities: i64,
    /// Penalty minutes.
    pub penalty_minutes: i64,
    /// Hits.
    pub hits: i64,
    /// Blocked shots.
    pub blocked_shots: i64,
    /// Giveaways.
    pub giveaways: i64,
    /// Takeaways.
    pub takeaways: i64,
}

impl TeamGameStats {
    /// Aggregates one team's player lines.
    #[must_use]
    #[allow(
        clippy::arithmetic_side_effects,
        clippy::as_conversions,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation
    )]
    pub fn from_player_stats(stats: &TeamPlayerStats) -> Self {
        let mut totals = Self::default();

        for skater in stats.forwards.iter().chain(&stats.defense) {
            totals.shots_on_goal += skater.sog;
            totals.power_play_goals += skater.power_play_goals;
            totals.penalty_minutes += skater.pim;
            totals.hits += skater.hits;
            totals.blocked_shots += skater.blocked_shots;
            totals.giveaways += skater.giveaways;
            totals.takeaways += skater.takeaways;

            // Shift count stands in for face-offs taken; see type docs.
            if skater.position == Position::Center && skater.faceoff_winning_pctg > 0.0 {
                let estimated_faceoffs = skater.shifts;
                totals.faceoff_total += estimated_faceoffs;
                totals.faceoff_wins +=
                    (estimated_faceoffs as f64 * skater.faceoff_winning_pctg).round() as i64;
            }
        }

        for goalie in &stats.goalies {
            if let Some(pim) = goalie.pim {
                totals.penalty_minutes += pim;
            }
            totals.power_play_opportunities += goalie.power_play_goals_against;
        }

        totals
    }

    /// Estimated face-off percentage (0 to 100).
    #[must_use]
    #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
    pub fn faceoff_percentage(&self) -> f64 {
        if self.faceoff_total == 0 {
            return 0.0;
        }
        self.faceoff_wins as f64 / self.faceoff_total as f64 * 100.0
    }

    /// Power-play conversion percentage (0 to 100).
    #[must_use]
    #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
    pub fn power_play_percentage(&self) -> f64 {
        if self.power_play_opportunities == 0 {
            return 0.0;
        }
        self.power_play_goals as f64 / self.power_play_opportunities as f64 * 100.0
    }
}
