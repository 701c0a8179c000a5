//! Typed async client for the NHL web APIs.
//!
//! Wraps the four public NHL endpoint groups (web, core, stats, search)
//! behind one [`NhlClient`] with strongly-typed responses: standings,
//! schedules, boxscores, play-by-play, players, rosters, and franchises.
//!
//! # Example
//!
//! ```no_run
//! use nhl_api::{LocalNhlApi, NhlClient};
//!
//! # async fn run() -> nhl_api::Result<()> {
//! let client = NhlClient::new()?;
//! let standings = client.standings(None).await?;
//! for entry in standings {
//!     println!("{}: {} pts", entry.team_abbrev.default, entry.points);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod config;
mod dates;
mod endpoint;
mod error;
mod http;
mod types;

pub use api::{LocalNhlApi, NhlApi};
pub use client::{NhlClient, NhlClientBuilder};
pub use config::ClientConfig;
pub use dates::{format_api_date, parse_api_date, today};
pub use endpoint::Endpoint;
pub use error::{NhlApiError, Result};
pub use types::{
    AssistSummary, Award, AwardSeason, Boxscore, BoxscoreTeam, CareerTotals, ClubGoalieStats,
    ClubSkaterStats, ClubStats, Conference, DailySchedule, DailyScores, DefendingSide, Division,
    DraftDetails, EventId, FeaturedStats, Franchise, FranchiseId, GameClock, GameDay, GameId,
    GameLog, GameMatchup, GameOutcome, GameScheduleState, GameScore, GameSituation, GameState,
    GameStory, GameSummary, GameType, GoalSummary, GoalieDecision, GoalieStats, Handedness,
    HomeRoad, LANGUAGE_CODES, LocalizedText, MatchupTeam, PenaltyPlayer, PenaltySummary,
    PeriodDescriptor, PeriodPenalties, PeriodScoring, PeriodType, PlayByPlay, PlayEvent,
    PlayEventDetails, PlayEventType, PlayerByGameStats, PlayerGameLog, PlayerId, PlayerLanding,
    PlayerSearchResult, PlayerStats, Position, Roster, RosterPlayer, RosterSpot, ScheduleGame,
    ScheduleTeam, ScratchedPlayer, Season, SeasonGameTypes, SeasonInfo, SeasonSeriesMatchup,
    SeasonTotal, SeriesGame, SeriesGameInfo, SeriesTeam, SeriesWins, ShiftChart, ShiftEntry,
    ShootoutAttempt, SkaterStats, SpecialEvent, Standing, StoryTeam, Team, TeamGameInfo,
    TeamGameStats, TeamId, TeamPlayerStats, TeamSchedule, ThreeStar, TvBroadcast, WeeklySchedule,
    ZoneCode,
};
