//! League standings records.

use serde::{Deserialize, Serialize};

use crate::types::localized::LocalizedText;

/// A single team's standings entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    /// Conference abbreviation, absent for pre-conference seasons.
    pub conference_abbrev: Option<String>,
    /// Conference name, absent for pre-conference seasons.
    pub conference_name: Option<String>,
    /// Division abbreviation.
    pub division_abbrev: String,
    /// Division name.
    pub division_name: String,
    /// Full team name.
    pub team_name: LocalizedText,
    /// Common (nickname) portion of the name.
    pub team_common_name: LocalizedText,
    /// Team abbreviation.
    pub team_abbrev: LocalizedText,
    /// Team logo URL.
    pub team_logo: String,
    /// Wins.
    pub wins: i64,
    /// Regulation/overtime losses counted as losses.
    pub losses: i64,
    /// Overtime and shootout losses.
    pub ot_losses: i64,
    /// Standings points.
    pub points: i64,
}

impl Standing {
    /// Total games played.
    #[must_use]
    pub const fn games_played(&self) -> i64 {
        self.wins + self.losses + self.ot_losses
    }

    /// Record string, e.g. `"15-10-2"`.
    #[must_use]
    pub fn record(&self) -> String {
        format!("{}-{}-{}", self.wins, self.losses, self.ot_losses)
    }

    /// Wins over games played; zero when no games have been played.
    #[must_use]
    #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
    pub fn win_percentage(&self) -> f64 {
        let games = self.games_played();
        if games == 0 {
            return 0.0;
        }
        self.wins as f64 / games as f64
    }

    /// Points over possible points; zero when no games have been played.
    #[must_use]
    #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
    pub fn points_percentage(&self) -> f64 {
        let games = self.games_played();
        if games == 0 {
            return 0.0;
        }
        self.points as f64 / (games * 2) as f64
    }
}

/// Wire wrapper for the standings list.
#[derive(Debug, Deserialize)]
pub(crate) struct StandingsResponse {
    pub(crate) standings: Vec<Standing>,
}

/// One season's entry in the standings-season manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonInfo {
    /// Packed season identifier, e.g. `20242025`.
    pub id: i64,
    /// First date standings exist for (`"YYYY-MM-DD"`).
    pub standings_start: String,
    /// Last date standings exist for (`"YYYY-MM-DD"`).
    pub standings_end: String,
}

/// Wire wrapper for the season manifest.
#[derive(Debug, Deserialize)]
pub(crate) struct SeasonsResponse {
    pub(crate) seasons: Vec<SeasonInfo>,
}
