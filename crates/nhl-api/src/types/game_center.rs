//! Game-center records: play-by-play, matchup, summary, shift charts,
//! season series, and game stories.

use serde::{Deserialize, Serialize};

use crate::types::boxscore::{BoxscoreTeam, GameClock, PeriodDescriptor, SpecialEvent, TvBroadcast};
use crate::types::enums::{
    DefendingSide, GameScheduleState, GameState, GameType, PeriodType, PlayEventType, Position,
    ZoneCode,
};
use crate::types::ids::{EventId, GameId, PlayerId, TeamId};
use crate::types::localized::{LocalizedText, string_or_localized};
use crate::types::season::Season;
use crate::types::situation::GameSituation;

/// Full play-by-play for a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayByPlay {
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
    /// Whether a shootout can decide this game.
    pub shootout_in_use: bool,
    /// Whether overtime is in use.
    pub ot_in_use: bool,
    /// Game clock.
    pub clock: GameClock,
    /// Period currently displayed.
    pub display_period: i64,
    /// Maximum number of periods.
    pub max_periods: i64,
    /// Final outcome, once decided.
    pub game_outcome: Option<GameOutcome>,
    /// Events in chronological order.
    pub plays: Vec<PlayEvent>,
    /// Players dressed for the game.
    pub roster_spots: Vec<RosterSpot>,
    /// Number of regulation periods.
    pub reg_periods: Option<i64>,
    /// Scoring/penalty summary, when present.
    pub summary: Option<GameSummary>,
}

impl PlayByPlay {
    /// All goal events.
    #[must_use]
    pub fn goals(&self) -> Vec<&PlayEvent> {
        self.plays
            .iter()
            .filter(|p| p.type_desc_key == PlayEventType::Goal)
            .collect()
    }

    /// All penalty events.
    #[must_use]
    pub fn penalties(&self) -> Vec<&PlayEvent> {
        self.plays
            .iter()
            .filter(|p| p.type_desc_key == PlayEventType::Penalty)
            .collect()
    }

    /// All shot-or-goal events.
    #[must_use]
    pub fn shots(&self) -> Vec<&PlayEvent> {
        self.plays
            .iter()
            .filter(|p| p.type_desc_key.is_scoring_event())
            .collect()
    }

    /// The most recent `count` events, newest first.
    #[must_use]
    pub fn recent_plays(&self, count: usize) -> Vec<&PlayEvent> {
        let start = self.plays.len().saturating_sub(count);
        self.plays.get(start..).map_or_else(Vec::new, |tail| {
            tail.iter().rev().collect()
        })
    }

    /// Events in a given period.
    #[must_use]
    pub fn plays_in_period(&self, period: i64) -> Vec<&PlayEvent> {
        self.plays
            .iter()
            .filter(|p| p.period_descriptor.number == period)
            .collect()
    }

    /// Looks up a dressed player by id.
    #[must_use]
    pub fn player(&self, player_id: PlayerId) -> Option<&RosterSpot> {
        self.roster_spots.iter().find(|s| s.player_id == player_id)
    }

    /// All dressed players for one team.
    #[must_use]
    pub fn roster_for_team(&self, team_id: TeamId) -> Vec<&RosterSpot> {
        self.roster_spots
            .iter()
            .filter(|s| s.team_id == team_id)
            .collect()
    }

    /// On-ice strength at the latest event, if parseable.
    #[must_use]
    pub fn current_situation(&self) -> Option<GameSituation> {
        self.plays.last().and_then(PlayEvent::situation)
    }

    /// Goal events owned by one team.
    #[must_use]
    pub fn goals_by_team(&self, team_id: TeamId) -> Vec<&PlayEvent> {
        self.goals()
            .into_iter()
            .filter(|p| p.owner_team() == Some(team_id))
            .collect()
    }

    /// Penalty events owned by one team.
    #[must_use]
    pub fn penalties_by_team(&self, team_id: TeamId) -> Vec<&PlayEvent> {
        self.penalties()
            .into_iter()
            .filter(|p| p.owner_team() == Some(team_id))
            .collect()
    }

    /// All events owned by one team.
    #[must_use]
    pub fn plays_by_team(&self, team_id: TeamId) -> Vec<&PlayEvent> {
        self.plays
            .iter()
            .filter(|p| p.owner_team() == Some(team_id))
            .collect()
    }
}

/// Final outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOutcome {
    /// Type of the period the game ended in.
    pub last_period_type: PeriodType,
}

/// A single event in the play-by-play feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayEvent {
    /// Event identifier, unique within the game.
    pub event_id: EventId,
    /// Period the event happened in.
    pub period_descriptor: PeriodDescriptor,
    /// Elapsed time in the period (`"MM:SS"`).
    pub time_in_period: String,
    /// Time remaining in the period (`"MM:SS"`).
    pub time_remaining: String,
    /// Raw 4-character situation code.
    pub situation_code: String,
    /// Side the home team is defending.
    pub home_team_defending_side: DefendingSide,
    /// Numeric event type code.
    pub type_code: i64,
    /// Event type.
    pub type_desc_key: PlayEventType,
    /// Stable ordering key.
    pub sort_order: i64,
    /// Event-specific details.
    pub details: Option<PlayEventDetails>,
    /// Replay URL, when available.
    pub ppt_replay_url: Option<String>,
}

impl PlayEvent {
    /// Parses the situation code on demand.
    #[must_use]
    pub fn situation(&self) -> Option<GameSituation> {
        GameSituation::parse(&self.situation_code)
    }

    /// The team that owns this event, when details carry one.
    #[must_use]
    pub fn owner_team(&self) -> Option<TeamId> {
        self.details.as_ref().and_then(|d| d.event_owner_team_id)
    }
}

/// Event-specific details; which fields are present depends on the event
/// type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayEventDetails {
    /// X coordinate on the rink.
    pub x_coord: Option<i64>,
    /// Y coordinate on the rink.
    pub y_coord: Option<i64>,
    /// Zone the event happened in.
    pub zone_code: Option<ZoneCode>,
    /// Team that owns the event.
    pub event_owner_team_id: Option<TeamId>,
    /// Shot type (e.g. `"wrist"`).
    pub shot_type: Option<String>,
    /// Shooting player.
    pub shooting_player_id: Option<PlayerId>,
    /// Goalie in net.
    pub goalie_in_net_id: Option<PlayerId>,
    /// Blocking player (blocked shots).
    pub blocking_player_id: Option<PlayerId>,
    /// Scoring player (goals).
    pub scoring_player_id: Option<PlayerId>,
    /// Scorer's season total after this goal.
    pub scoring_player_total: Option<i64>,
    /// Primary assist player.
    pub assist1_player_id: Option<PlayerId>,
    /// Primary assister's season total.
    pub assist1_player_total: Option<i64>,
    /// Secondary assist player.
    pub assist2_player_id: Option<PlayerId>,
    /// Secondary assister's season total.
    pub assist2_player_total: Option<i64>,
    /// Away score after the event.
    pub away_score: Option<i64>,
    /// Home score after the event.
    pub home_score: Option<i64>,
    /// Highlight clip identifier.
    pub highlight_clip: Option<i64>,
    /// Shareable highlight URL.
    pub highlight_clip_sharing_url: Option<String>,
    /// Discrete clip identifier.
    pub discrete_clip: Option<i64>,
    /// Penalty type code (penalties).
    pub type_code: Option<String>,
    /// Penalty description key.
    pub desc_key: Option<String>,
    /// Penalty duration in minutes.
    pub duration: Option<i64>,
    /// Player who committed the penalty.
    pub committed_by_player_id: Option<PlayerId>,
    /// Player who drew the penalty.
    pub drawn_by_player_id: Option<PlayerId>,
    /// Hitting player (hits).
    pub hitting_player_id: Option<PlayerId>,
    /// Player who was hit.
    pub hittee_player_id: Option<PlayerId>,
    /// Face-off winner.
    pub winning_player_id: Option<PlayerId>,
    /// Face-off loser.
    pub losing_player_id: Option<PlayerId>,
    /// Generic player reference (giveaways, takeaways).
    pub player_id: Option<PlayerId>,
    /// Stoppage reason.
    pub reason: Option<String>,
    /// Away shots on goal after the event.
    #[serde(rename = "awaySOG")]
    pub away_sog: Option<i64>,
    /// Home shots on goal after the event.
    #[serde(rename = "homeSOG")]
    pub home_sog: Option<i64>,
}

/// A dressed player in the play-by-play roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSpot {
    /// Team the player dressed for.
    pub team_id: TeamId,
    /// Player identifier.
    pub player_id: PlayerId,
    /// First name.
    pub first_name: LocalizedText,
    /// Last name.
    pub last_name: LocalizedText,
    /// Sweater number.
    pub sweater_number: i64,
    /// Position.
    pub position_code: Position,
    /// Headshot image URL.
    pub headshot: String,
}

impl RosterSpot {
    /// Full name (first + last, default language).
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.default, self.last_name.default)
    }
}

/// Game landing/matchup data (lighter than play-by-play).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMatchup {
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
    /// Venue timezone name.
    pub venue_timezone: String,
    /// Current period descriptor.
    pub period_descriptor: PeriodDescriptor,
    /// TV broadcasts carrying the game.
    pub tv_broadcasts: Vec<TvBroadcast>,
    /// Current game state.
    pub game_state: GameState,
    /// Schedule state.
    pub game_schedule_state: GameScheduleState,
    /// Special event the game is part of, if any.
    pub special_event: Option<SpecialEvent>,
    /// Away team.
    pub away_team: MatchupTeam,
    /// Home team.
    pub home_team: MatchupTeam,
    /// Whether a shootout can decide this game.
    pub shootout_in_use: bool,
    /// Maximum number of periods.
    pub max_periods: i64,
    /// Number of regulation periods.
    pub reg_periods: i64,
    /// Whether overtime is in use.
    pub ot_in_use: bool,
    /// Whether ties are possible.
    pub ties_in_use: bool,
    /// Scoring/penalty summary, when present.
    pub summary: Option<GameSummary>,
    /// Game clock, once the game has started.
    pub clock: Option<GameClock>,
}

/// Team details within a matchup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupTeam {
    /// Team identifier.
    pub id: TeamId,
    /// Common (nickname) portion of the name.
    pub common_name: LocalizedText,
    /// Team abbreviation.
    pub abbrev: String,
    /// Place portion of the name.
    pub place_name: LocalizedText,
    /// Place name with preposition (for prose).
    pub place_name_with_preposition: LocalizedText,
    /// Current score.
    pub score: i64,
    /// Shots on goal.
    pub sog: i64,
    /// Light logo URL.
    pub logo: String,
    /// Dark logo URL.
    pub dark_logo: String,
}

/// Scoring, shootout, three-stars, and penalty summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    /// Goals by period.
    pub scoring: Option<Vec<PeriodScoring>>,
    /// Shootout attempts, when the game had one.
    pub shootout: Option<Vec<ShootoutAttempt>>,
    /// Three-stars selections, once awarded.
    pub three_stars: Option<Vec<ThreeStar>>,
    /// Penalties by period.
    pub penalties: Option<Vec<PeriodPenalties>>,
}

/// Goals scored in one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodScoring {
    /// The period.
    pub period_descriptor: PeriodDescriptor,
    /// Goals in that period.
    pub goals: Vec<GoalSummary>,
}

/// One goal in the scoring summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSummary {
    /// Raw 4-character situation code at the time of the goal.
    pub situation_code: String,
    /// Event identifier.
    pub event_id: EventId,
    /// Strength label reported by the API (e.g. `"pp"`, `"ev"`).
    pub strength: String,
    /// Scoring player.
    pub player_id: PlayerId,
    /// Scorer's first name.
    pub first_name: LocalizedText,
    /// Scorer's last name.
    pub last_name: LocalizedText,
    /// Scorer's abbreviated name.
    pub name: LocalizedText,
    /// Scoring team's abbreviation.
    pub team_abbrev: LocalizedText,
    /// Scorer's headshot URL.
    pub headshot: String,
    /// Shareable highlight URL.
    pub highlight_clip_sharing_url: Option<String>,
    /// Highlight clip identifier.
    pub highlight_clip: Option<i64>,
    /// Discrete clip identifier.
    pub discrete_clip: Option<i64>,
    /// Scorer's season goal total after this goal.
    pub goals_to_date: Option<i64>,
    /// Away score after the goal.
    pub away_score: i64,
    /// Home score after the goal.
    pub home_score: i64,
    /// Abbreviation of the team leading after the goal.
    pub leading_team_abbrev: Option<LocalizedText>,
    /// Elapsed time in the period.
    pub time_in_period: String,
    /// Shot type.
    pub shot_type: String,
    /// Goal modifier (e.g. empty-net).
    pub goal_modifier: String,
    /// Assists on the goal.
    pub assists: Vec<AssistSummary>,
    /// Side the home team was defending.
    pub home_team_defending_side: DefendingSide,
    /// Whether the home team scored.
    pub is_home: bool,
}

/// One assist in a goal summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistSummary {
    /// Assisting player.
    pub player_id: PlayerId,
    /// First name.
    pub first_name: LocalizedText,
    /// Last name.
    pub last_name: LocalizedText,
    /// Abbreviated name.
    pub name: LocalizedText,
    /// Season assist total after this assist.
    pub assists_to_date: i64,
    /// Sweater number.
    pub sweater_number: i64,
}

/// One shootout attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShootoutAttempt {
    /// Attempt order.
    pub sequence: i64,
    /// Shooting player.
    pub player_id: PlayerId,
    /// Shooter's team abbreviation.
    pub team_abbrev: LocalizedText,
    /// First name.
    pub first_name: LocalizedText,
    /// Last name.
    pub last_name: LocalizedText,
    /// Shot type.
    pub shot_type: String,
    /// Result (`"goal"` or `"save"`).
    pub result: String,
    /// Headshot image URL.
    pub headshot: String,
    /// Whether this attempt won the game.
    pub game_winner: bool,
}

/// One of the game's three stars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeStar {
    /// Star number (1 to 3).
    pub star: i64,
    /// Player identifier.
    pub player_id: PlayerId,
    /// Team abbreviation.
    pub team_abbrev: String,
    /// Headshot image URL.
    pub headshot: String,
    /// Player name; arrives as a plain string or a localized object
    /// depending on the game, so both decode to the default value.
    #[serde(deserialize_with = "string_or_localized")]
    pub name: String,
    /// Sweater number.
    pub sweater_no: i64,
    /// Position.
    pub position: Position,
    /// Goals in the game (skaters).
    pub goals: Option<i64>,
    /// Assists in the game (skaters).
    pub assists: Option<i64>,
    /// Points in the game (skaters).
    pub points: Option<i64>,
    /// Goals-against average (goalies).
    pub goals_against_average: Option<f64>,
    /// Save percentage (goalies).
    pub save_pctg: Option<f64>,
}

/// Penalties assessed in one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodPenalties {
    /// The period.
    pub period_descriptor: PeriodDescriptor,
    /// Penalties in that period.
    pub penalties: Vec<PenaltySummary>,
}

/// One penalty in the penalty summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltySummary {
    /// Elapsed time in the period.
    pub time_in_period: String,
    /// Penalty class (minor, major, ...).
    #[serde(rename = "type")]
    pub penalty_type: String,
    /// Duration in minutes.
    pub duration: i64,
    /// Player who committed the penalty, absent for bench penalties.
    pub committed_by_player: Option<PenaltyPlayer>,
    /// Penalized team's abbreviation.
    pub team_abbrev: LocalizedText,
    /// Player who drew the penalty.
    pub drawn_by: Option<PenaltyPlayer>,
    /// Infraction description key.
    pub desc_key: String,
    /// Player serving a bench penalty.
    pub served_by: Option<LocalizedText>,
    /// Event identifier, when linked to the play-by-play feed.
    pub event_id: Option<EventId>,
}

/// A player referenced in a penalty summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyPlayer {
    /// First name.
    pub first_name: LocalizedText,
    /// Last name.
    pub last_name: LocalizedText,
    /// Sweater number.
    pub sweater_number: i64,
}

/// Shift chart for a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftChart {
    /// All shift entries.
    pub data: Vec<ShiftEntry>,
}

/// One player shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftEntry {
    /// Shift record identifier.
    pub id: i64,
    /// Detail code.
    pub detail_code: i64,
    /// Shift duration (`"MM:SS"`), absent for event rows.
    pub duration: Option<String>,
    /// Shift end time in the period.
    pub end_time: String,
    /// Event description, for event rows.
    pub event_description: Option<String>,
    /// Event number.
    pub event_number: i64,
    /// Player first name.
    pub first_name: String,
    /// Game identifier.
    pub game_id: GameId,
    /// Team color hex value.
    pub hex_value: String,
    /// Player last name.
    pub last_name: String,
    /// Period number.
    pub period: i64,
    /// Player identifier.
    pub player_id: PlayerId,
    /// Shift number for this player.
    pub shift_number: i64,
    /// Shift start time in the period.
    pub start_time: String,
    /// Team abbreviation.
    pub team_abbrev: String,
    /// Team identifier.
    pub team_id: TeamId,
    /// Team name.
    pub team_name: String,
    /// Row type code (517 is a regular shift).
    pub type_code: i64,
}

/// Head-to-head season series for a game's two teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSeriesMatchup {
    /// Games in the series.
    pub season_series: Vec<SeriesGame>,
    /// Win counts so far.
    pub season_series_wins: SeriesWins,
    /// Officials and scratches for the current game.
    pub game_info: SeriesGameInfo,
}

/// One game of a season series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesGame {
    /// Game identifier.
    pub id: GameId,
    /// Season the game belongs to.
    pub season: Season,
    /// Game type.
    pub game_type: GameType,
    /// Game date (`"YYYY-MM-DD"`).
    pub game_date: String,
    /// Start time in UTC.
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: String,
    /// Eastern-time UTC offset.
    #[serde(rename = "easternUTCOffset")]
    pub eastern_utc_offset: String,
    /// Venue UTC offset.
    #[serde(rename = "venueUTCOffset")]
    pub venue_utc_offset: String,
    /// Current game state.
    pub game_state: GameState,
    /// Schedule state.
    pub game_schedule_state: GameScheduleState,
    /// Away team.
    pub away_team: SeriesTeam,
    /// Home team.
    pub home_team: SeriesTeam,
    /// Current period descriptor.
    pub period_descriptor: PeriodDescriptor,
    /// Relative game-center link.
    pub game_center_link: String,
    /// Final outcome.
    pub game_outcome: GameOutcome,
}

/// Team details within a season series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesTeam {
    /// Team identifier.
    pub id: TeamId,
    /// Team abbreviation.
    pub abbrev: String,
    /// Logo URL.
    pub logo: String,
    /// Score in that game.
    pub score: i64,
}

/// Series win counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesWins {
    /// Away team's wins in the series.
    pub away_team_wins: i64,
    /// Home team's wins in the series.
    pub home_team_wins: i64,
}

/// Officials and scratches for a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesGameInfo {
    /// Referees.
    pub referees: Vec<LocalizedText>,
    /// Linesmen.
    pub linesmen: Vec<LocalizedText>,
    /// Away team's coach and scratches.
    pub away_team: TeamGameInfo,
    /// Home team's coach and scratches.
    pub home_team: TeamGameInfo,
}

/// Coach and scratches for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamGameInfo {
    /// Head coach.
    pub head_coach: LocalizedText,
    /// Scratched players.
    pub scratches: Vec<ScratchedPlayer>,
}

/// A scratched player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScratchedPlayer {
    /// Player identifier.
    pub id: PlayerId,
    /// First name.
    pub first_name: LocalizedText,
    /// Last name.
    pub last_name: LocalizedText,
}

/// Game story (narrative recap) data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStory {
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
    /// Venue timezone name.
    pub venue_timezone: String,
    /// TV broadcasts carrying the game.
    pub tv_broadcasts: Vec<TvBroadcast>,
    /// Current game state.
    pub game_state: GameState,
    /// Schedule state.
    pub game_schedule_state: GameScheduleState,
    /// Away team.
    pub away_team: StoryTeam,
    /// Home team.
    pub home_team: StoryTeam,
    /// Whether a shootout can decide this game.
    pub shootout_in_use: bool,
    /// Maximum number of periods.
    pub max_periods: i64,
    /// Number of regulation periods.
    pub reg_periods: i64,
    /// Whether overtime is in use.
    pub ot_in_use: bool,
    /// Whether ties are possible.
    pub ties_in_use: bool,
    /// Scoring/penalty summary, when present.
    pub summary: Option<GameSummary>,
}

/// Team details within a game story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryTeam {
    /// Team identifier.
    pub id: TeamId,
    /// Full team name.
    pub name: LocalizedText,
    /// Team abbreviation.
    pub abbrev: String,
    /// Place portion of the name.
    pub place_name: LocalizedText,
    /// Current score.
    pub score: i64,
    /// Shots on goal.
    pub sog: i64,
    /// Logo URL.
    pub logo: String,
}
