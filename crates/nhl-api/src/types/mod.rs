//! Typed records for every API response, plus the value types they are
//! built from (identifiers, localized text, seasons, situation codes).

mod boxscore;
mod club_stats;
mod common;
mod enums;
mod game_center;
mod ids;
mod localized;
mod player;
mod schedule;
mod season;
mod situation;
mod standings;

pub use boxscore::{
    Boxscore, BoxscoreTeam, GameClock, GoalieStats, PeriodDescriptor, PlayerByGameStats,
    SkaterStats, SpecialEvent, TeamGameStats, TeamPlayerStats, TvBroadcast,
};
pub use club_stats::{ClubGoalieStats, ClubSkaterStats, ClubStats, SeasonGameTypes};
pub use common::{Conference, Division, Franchise, Roster, RosterPlayer, Team};
pub use enums::{
    DefendingSide, GameScheduleState, GameState, GameType, GoalieDecision, Handedness, HomeRoad,
    PeriodType, PlayEventType, Position, ZoneCode,
};
pub use game_center::{
    AssistSummary, GameMatchup, GameOutcome, GameStory, GameSummary, GoalSummary, MatchupTeam,
    PenaltyPlayer, PenaltySummary, PeriodPenalties, PeriodScoring, PlayByPlay, PlayEvent,
    PlayEventDetails, RosterSpot, ScratchedPlayer, SeasonSeriesMatchup, SeriesGame, SeriesGameInfo,
    SeriesTeam, SeriesWins, ShiftChart, ShiftEntry, ShootoutAttempt, StoryTeam, TeamGameInfo,
    ThreeStar,
};
pub use ids::{EventId, FranchiseId, GameId, PlayerId, TeamId};
pub use localized::{LANGUAGE_CODES, LocalizedText};
pub use player::{
    Award, AwardSeason, CareerTotals, DraftDetails, FeaturedStats, GameLog, PlayerGameLog,
    PlayerLanding, PlayerSearchResult, PlayerStats, SeasonTotal,
};
pub use schedule::{
    DailySchedule, DailyScores, GameDay, GameScore, ScheduleGame, ScheduleTeam, TeamSchedule,
    WeeklySchedule,
};
pub use season::Season;
pub use situation::GameSituation;
pub use standings::{SeasonInfo, Standing};

pub(crate) use standings::{SeasonsResponse, StandingsResponse};
