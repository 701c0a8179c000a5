//! Player profile, game-log, and search records.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::types::enums::{GameType, Handedness, HomeRoad, Position};
use crate::types::ids::{GameId, PlayerId, TeamId};
use crate::types::localized::LocalizedText;
use crate::types::season::Season;

/// Comprehensive player profile from the player landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLanding {
    /// Player identifier.
    pub player_id: PlayerId,
    /// Whether the player is currently active.
    pub is_active: bool,
    /// Current team, if signed.
    pub current_team_id: Option<TeamId>,
    /// Current team's abbreviation.
    pub current_team_abbrev: Option<String>,
    /// First name.
    pub first_name: LocalizedText,
    /// Last name.
    pub last_name: LocalizedText,
    /// Sweater number, when assigned.
    pub sweater_number: Option<i64>,
    /// Position.
    pub position: Position,
    /// Headshot image URL.
    pub headshot: String,
    /// Hero image URL.
    pub hero_image: Option<String>,
    /// Height in inches.
    pub height_in_inches: i64,
    /// Weight in pounds.
    pub weight_in_pounds: i64,
    /// Birth date (`"YYYY-MM-DD"`).
    pub birth_date: String,
    /// Birth city.
    pub birth_city: Option<LocalizedText>,
    /// Birth state or province.
    pub birth_state_province: Option<LocalizedText>,
    /// Birth country code.
    pub birth_country: Option<String>,
    /// Shoots (skaters) or catches (goalies).
    pub shoots_catches: Handedness,
    /// Draft details, absent for undrafted players.
    pub draft_details: Option<DraftDetails>,
    /// URL-friendly player slug.
    pub player_slug: Option<String>,
    /// Featured current-season stats.
    pub featured_stats: Option<FeaturedStats>,
    /// Career totals.
    pub career_totals: Option<CareerTotals>,
    /// Season-by-season totals.
    pub season_totals: Option<Vec<SeasonTotal>>,
    /// Awards won.
    pub awards: Option<Vec<Award>>,
    /// The last five game-log entries.
    pub last_five_games: Option<Vec<GameLog>>,
}

impl PlayerLanding {
    /// Full name (first + last, default language).
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.default, self.last_name.default)
    }

    /// Age in whole years, when the birth date parses.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub fn age(&self) -> Option<i32> {
        let birth = dates::parse_api_date(&self.birth_date)?;
        let today = dates::today();
        let mut years = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }
        Some(years)
    }

    /// Height formatted as feet and inches, e.g. `6'1"`.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub fn height_formatted(&self) -> String {
        let feet = self.height_in_inches / 12;
        let inches = self.height_in_inches % 12;
        format!("{feet}'{inches}\"")
    }

    /// Height converted to centimeters.
    #[must_use]
    #[allow(
        clippy::as_conversions,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation
    )]
    pub fn height_in_centimeters(&self) -> i64 {
        (self.height_in_inches as f64 * 2.54).round() as i64
    }

    /// Weight converted to kilograms.
    #[must_use]
    #[allow(
        clippy::as_conversions,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation
    )]
    pub fn weight_in_kilograms(&self) -> i64 {
        (self.weight_in_pounds as f64 * 0.453_592).round() as i64
    }
}

/// Draft details for a player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftDetails {
    /// Draft year.
    pub year: i64,
    /// Drafting team's abbreviation.
    pub team_abbrev: String,
    /// Draft round.
    pub round: i64,
    /// Pick within the round.
    pub pick_in_round: i64,
    /// Overall pick number.
    pub overall_pick: i64,
}

/// Stats shown prominently on the player page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedStats {
    /// Season the stats cover.
    pub season: Season,
    /// Regular-season line.
    pub regular_season: PlayerStats,
    /// Playoff line, when the player appeared in the playoffs.
    pub playoffs: Option<PlayerStats>,
}

/// Career totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerTotals {
    /// Regular-season totals.
    pub regular_season: PlayerStats,
    /// Playoff totals.
    pub playoffs: Option<PlayerStats>,
}

/// A statistics line; skater and goalie fields are both optional because
/// the API serves one shape for both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    /// Games played.
    pub games_played: Option<i64>,
    /// Goals (skaters).
    pub goals: Option<i64>,
    /// Assists (skaters).
    pub assists: Option<i64>,
    /// Points (skaters).
    pub points: Option<i64>,
    /// Plus/minus (skaters).
    pub plus_minus: Option<i64>,
    /// Penalty minutes.
    pub pim: Option<i64>,
    /// Power-play goals (skaters).
    pub power_play_goals: Option<i64>,
    /// Power-play points (skaters).
    pub power_play_points: Option<i64>,
    /// Shorthanded goals (skaters).
    pub short_handed_goals: Option<i64>,
    /// Shorthanded points (skaters).
    pub short_handed_points: Option<i64>,
    /// Shots on goal (skaters).
    pub shots: Option<i64>,
    /// Shooting percentage (skaters).
    pub shooting_pctg: Option<f64>,
    /// Face-off winning percentage (skaters).
    pub faceoff_win_pctg: Option<f64>,
    /// Average time on ice (`"MM:SS"`).
    pub avg_toi: Option<String>,
    /// Wins (goalies).
    pub wins: Option<i64>,
    /// Losses (goalies).
    pub losses: Option<i64>,
    /// Overtime losses (goalies).
    pub ot_losses: Option<i64>,
    /// Shutouts (goalies).
    pub shutouts: Option<i64>,
    /// Goals-against average (goalies).
    pub goals_against_avg: Option<f64>,
    /// Save percentage (goalies).
    pub save_pctg: Option<f64>,
}

/// A single season's line in the season-by-season table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonTotal {
    /// Season the line covers.
    pub season: Season,
    /// Game type.
    #[serde(rename = "gameTypeId")]
    pub game_type: GameType,
    /// League abbreviation (NHL, AHL, ...).
    pub league_abbrev: String,
    /// Team name.
    pub team_name: LocalizedText,
    /// Common (nickname) portion of the team name.
    pub team_common_name: Option<LocalizedText>,
    /// Ordering hint for same-season lines.
    pub sequence: Option<i64>,
    /// Games played.
    pub games_played: i64,
    /// Goals.
    pub goals: Option<i64>,
    /// Assists.
    pub assists: Option<i64>,
    /// Points.
    pub points: Option<i64>,
    /// Plus/minus.
    pub plus_minus: Option<i64>,
    /// Penalty minutes.
    pub pim: Option<i64>,
}

/// An award won by a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    /// Trophy name.
    pub trophy: LocalizedText,
    /// Seasons the award was won in.
    pub seasons: Vec<AwardSeason>,
}

/// A season in which an award was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardSeason {
    /// Season the award was won in.
    pub season_id: Season,
}

/// One game in a player's game log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLog {
    /// Game identifier.
    pub game_id: GameId,
    /// Game date (`"YYYY-MM-DD"`).
    pub game_date: String,
    /// Player's team abbreviation.
    pub team_abbrev: String,
    /// Home or road.
    pub home_road_flag: HomeRoad,
    /// Opponent's abbreviation.
    pub opponent_abbrev: String,
    /// Goals.
    pub goals: i64,
    /// Assists.
    pub assists: i64,
    /// Points.
    pub points: i64,
    /// Plus/minus.
    pub plus_minus: i64,
    /// Power-play goals.
    pub power_play_goals: i64,
    /// Power-play points.
    pub power_play_points: i64,
    /// Shots on goal.
    pub shots: i64,
    /// Shift count.
    pub shifts: i64,
    /// Time on ice (`"MM:SS"`).
    pub toi: String,
    /// Game-winning goals.
    pub game_winning_goals: Option<i64>,
    /// Overtime goals.
    pub ot_goals: Option<i64>,
    /// Penalty minutes.
    pub pim: Option<i64>,
}

/// A player's game log for one season and game type.
///
/// The API response does not echo the player id, so the client fills
/// `player_id` in after decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerGameLog {
    /// Player the log belongs to.
    #[serde(skip)]
    pub player_id: PlayerId,
    /// Season the log covers.
    #[serde(rename = "seasonId")]
    pub season: Season,
    /// Game type.
    #[serde(rename = "gameTypeId")]
    pub game_type: GameType,
    /// One entry per game.
    pub game_log: Vec<GameLog>,
}

/// One result from the player search endpoint.
///
/// The search API is a different backend from the rest of the NHL surface
/// and returns its identifiers as strings; they are kept as strings here
/// rather than reinterpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSearchResult {
    /// Player identifier as returned by the search backend.
    pub player_id: String,
    /// Full name.
    pub name: String,
    /// Position.
    #[serde(rename = "positionCode")]
    pub position: Position,
    /// Current team identifier, if signed.
    pub team_id: Option<String>,
    /// Current team's abbreviation.
    pub team_abbrev: Option<String>,
    /// Sweater number, when assigned.
    pub sweater_number: Option<i64>,
    /// Whether the player is currently active.
    pub active: bool,
    /// Height as prose (e.g. `6'1"`).
    pub height: Option<String>,
    /// Birth city.
    pub birth_city: Option<String>,
    /// Birth state or province.
    pub birth_state_province: Option<String>,
    /// Birth country code.
    pub birth_country: Option<String>,
}
