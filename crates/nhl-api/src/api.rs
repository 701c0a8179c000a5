//! `NhlApi` trait definition.
#![allow(clippy::future_not_send)]

use chrono::NaiveDate;

use crate::error::Result;
use crate::types::{
    Boxscore, ClubStats, DailySchedule, DailyScores, Franchise, GameId, GameMatchup, GameStory,
    GameType, PlayByPlay, PlayerGameLog, PlayerId, PlayerLanding, PlayerSearchResult, Roster,
    Season, SeasonGameTypes, SeasonInfo, SeasonSeriesMatchup, ShiftChart, Standing, TeamSchedule,
    WeeklySchedule,
};

/// NHL API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(NhlApi: Send)]
pub trait LocalNhlApi {
    /// Gets league standings for a date, or today when `date` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// non-2xx status, or the response does not decode.
    async fn standings(&self, date: Option<NaiveDate>) -> Result<Vec<Standing>>;

    /// Gets final league standings for a season, resolving the season's
    /// end date through the season manifest first.
    ///
    /// # Errors
    ///
    /// Returns an error if either request fails or the season does not
    /// appear in the manifest.
    async fn standings_for_season(&self, season: Season) -> Result<Vec<Standing>>;

    /// Gets the manifest of all seasons standings exist for.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn season_manifest(&self) -> Result<Vec<SeasonInfo>>;

    /// Gets the boxscore for a game.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn boxscore(&self, game_id: GameId) -> Result<Boxscore>;

    /// Gets play-by-play data for a game.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn play_by_play(&self, game_id: GameId) -> Result<PlayByPlay>;

    /// Gets game landing/matchup data (lighter than play-by-play).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn landing(&self, game_id: GameId) -> Result<GameMatchup>;

    /// Gets season-series data for a game's two teams, including
    /// head-to-head records, officials, and scratches.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn season_series(&self, game_id: GameId) -> Result<SeasonSeriesMatchup>;

    /// Gets game story narrative content.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn game_story(&self, game_id: GameId) -> Result<GameStory>;

    /// Gets shift chart data for a game.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn shift_chart(&self, game_id: GameId) -> Result<ShiftChart>;

    /// Gets the schedule for one day, or today when `date` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn daily_schedule(&self, date: Option<NaiveDate>) -> Result<DailySchedule>;

    /// Gets the weekly schedule starting from a date, or today when
    /// `date` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn weekly_schedule(&self, date: Option<NaiveDate>) -> Result<WeeklySchedule>;

    /// Gets game scores for a day, or today when `date` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn daily_scores(&self, date: Option<NaiveDate>) -> Result<DailyScores>;

    /// Gets a team's schedule for the week containing a date, or today
    /// when `date` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn team_weekly_schedule(
        &self,
        team_abbrev: &str,
        date: Option<NaiveDate>,
    ) -> Result<TeamSchedule>;

    /// Gets a player's full profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn player(&self, player_id: PlayerId) -> Result<PlayerLanding>;

    /// Gets a player's game-by-game log for one season and game type.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn player_game_log(
        &self,
        player_id: PlayerId,
        season: Season,
        game_type: GameType,
    ) -> Result<PlayerGameLog>;

    /// Searches for players by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn search_players(&self, query: &str, limit: usize) -> Result<Vec<PlayerSearchResult>>;

    /// Gets a team's current roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn roster(&self, team_abbrev: &str) -> Result<Roster>;

    /// Gets a team's roster for a specific season.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn roster_for_season(&self, team_abbrev: &str, season: Season) -> Result<Roster>;

    /// Gets per-player statistics for a team in one season and game
    /// type.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn club_stats(
        &self,
        team_abbrev: &str,
        season: Season,
        game_type: GameType,
    ) -> Result<ClubStats>;

    /// Gets the seasons and game types a team has statistics for.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn club_stats_seasons(&self, team_abbrev: &str) -> Result<Vec<SeasonGameTypes>>;

    /// Gets all NHL franchises, past and current.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or decoding fails.
    async fn franchises(&self) -> Result<Vec<Franchise>>;
}
