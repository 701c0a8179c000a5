//! Team, conference, division, franchise, and roster records.

use serde::{Deserialize, Serialize};

use crate::types::enums::{Handedness, Position};
use crate::types::ids::{FranchiseId, PlayerId, TeamId};
use crate::types::localized::LocalizedText;

/// Basic team information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Team identifier.
    pub id: TeamId,
    /// Team abbreviation (e.g. `"MTL"`).
    pub abbrev: String,
    /// Full team name.
    #[serde(rename = "fullName")]
    pub name: Option<LocalizedText>,
    /// Common (nickname) portion of the name.
    pub common_name: Option<LocalizedText>,
    /// Place portion of the name.
    pub place_name: Option<LocalizedText>,
    /// Light logo URL.
    pub logo: Option<String>,
    /// Dark logo URL.
    pub dark_logo: Option<String>,
}

/// NHL conference information.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    /// Conference identifier.
    pub id: i64,
    /// Conference name.
    pub name: String,
    /// Conference abbreviation.
    pub abbrev: String,
}

/// NHL division information.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    /// Division identifier.
    pub id: i64,
    /// Division name.
    pub name: String,
    /// Division abbreviation.
    pub abbrev: String,
}

/// NHL franchise information (historical team lineage).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Franchise {
    /// Franchise identifier.
    pub id: FranchiseId,
    /// Full franchise name.
    #[serde(rename = "fullName")]
    pub name: String,
    /// URL-friendly short name.
    #[serde(rename = "teamCommonName")]
    pub slug: Option<String>,
}

/// A team roster grouped by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    /// Forwards on the roster.
    pub forwards: Vec<RosterPlayer>,
    /// Defensemen on the roster.
    pub defensemen: Vec<RosterPlayer>,
    /// Goalies on the roster.
    pub goalies: Vec<RosterPlayer>,
}

impl Roster {
    /// Iterates over every player on the roster.
    pub fn all_players(&self) -> impl Iterator<Item = &RosterPlayer> {
        self.forwards
            .iter()
            .chain(&self.defensemen)
            .chain(&self.goalies)
    }

    /// Finds a player by sweater number.
    #[must_use]
    pub fn player_by_number(&self, number: i64) -> Option<&RosterPlayer> {
        self.all_players()
            .find(|p| p.sweater_number == Some(number))
    }

    /// Finds a player by first and last name (case-insensitive).
    #[must_use]
    pub fn player_by_name(&self, first_name: &str, last_name: &str) -> Option<&RosterPlayer> {
        self.all_players().find(|p| {
            p.first_name.default.eq_ignore_ascii_case(first_name)
                && p.last_name.default.eq_ignore_ascii_case(last_name)
        })
    }

    /// Finds all players sharing a last name (case-insensitive).
    #[must_use]
    pub fn players_by_last_name(&self, last_name: &str) -> Vec<&RosterPlayer> {
        self.all_players()
            .filter(|p| p.last_name.default.eq_ignore_ascii_case(last_name))
            .collect()
    }
}

/// A player entry on a team roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPlayer {
    /// Player identifier.
    pub id: PlayerId,
    /// Headshot image URL.
    pub headshot: String,
    /// First name.
    pub first_name: LocalizedText,
    /// Last name.
    pub last_name: LocalizedText,
    /// Sweater number, when assigned.
    pub sweater_number: Option<i64>,
    /// Position.
    pub position_code: Position,
    /// Shoots (skaters) or catches (goalies).
    pub shoots_catches: Handedness,
    /// Height in inches.
    pub height_in_inches: Option<i64>,
    /// Weight in pounds.
    pub weight_in_pounds: Option<i64>,
    /// Height in centimeters.
    pub height_in_centimeters: Option<i64>,
    /// Weight in kilograms.
    pub weight_in_kilograms: Option<i64>,
    /// Birth date (`"YYYY-MM-DD"`).
    pub birth_date: Option<String>,
    /// Birth city.
    pub birth_city: Option<LocalizedText>,
    /// Birth country code.
    pub birth_country: Option<String>,
}

impl RosterPlayer {
    /// Full name (first + last, default language).
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.default, self.last_name.default)
    }
}
