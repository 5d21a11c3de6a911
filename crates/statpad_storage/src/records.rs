//! Lookup results.
//!
//! These are denormalized views over the catalog: ids are replaced with
//! names and abbreviations so a record can be rendered on its own.

use chrono::NaiveDate;
use statpad_foundation::Season;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::schema::{GameId, GameType, StatLine};

/// A player's season line with names filled in.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StatsRecord {
    /// Player display name
    pub player: String,
    /// Listed position
    pub position: Option<String>,
    /// Team abbreviation for the season
    pub team: Option<String>,
    /// Team full name for the season
    pub team_name: Option<String>,
    /// Season
    pub season: Season,
    /// The numbers
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub line: StatLine,
}

/// Two players' lines for the same season. Either side may be missing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PlayerPair {
    /// Season compared
    pub season: Season,
    /// First player's line
    pub a: Option<StatsRecord>,
    /// Second player's line
    pub b: Option<StatsRecord>,
}

impl PlayerPair {
    /// Returns true if both lines were found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.a.is_some() && self.b.is_some()
    }
}

/// Two players' career lines, oldest season first.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CareerPair {
    /// First player's seasons
    pub a: Vec<StatsRecord>,
    /// Second player's seasons
    pub b: Vec<StatsRecord>,
}

/// A player's numbers in one game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GameLine {
    /// Points
    pub points: u16,
    /// Total rebounds
    pub rebounds: u16,
    /// Assists
    pub assists: u16,
}

/// A game two players both appeared in, on opposing teams.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GameEntry {
    /// Game identifier
    pub game: GameId,
    /// Date played
    pub date: NaiveDate,
    /// Season
    pub season: Season,
    /// Home team abbreviation
    pub home: String,
    /// Away team abbreviation
    pub away: String,
    /// Home final score
    pub home_score: u16,
    /// Away final score
    pub away_score: u16,
    /// Whether the home team won
    pub home_win: bool,
    /// Kind of game
    pub game_type: GameType,
    /// First player's line
    pub a: GameLine,
    /// Second player's line
    pub b: GameLine,
}

/// A game between two teams.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TeamGameEntry {
    /// Game identifier
    pub game: GameId,
    /// Date played
    pub date: NaiveDate,
    /// Season
    pub season: Season,
    /// Home team abbreviation
    pub home: String,
    /// Away team abbreviation
    pub away: String,
    /// Home final score
    pub home_score: u16,
    /// Away final score
    pub away_score: u16,
    /// Whether the home team won
    pub home_win: bool,
}

/// One side of a team comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TeamSummary {
    /// Abbreviation
    pub abbreviation: String,
    /// Full name
    pub name: String,
    /// Wins over the compared period, all opponents
    pub wins: u32,
    /// Losses over the compared period, all opponents
    pub losses: u32,
    /// Wins against the other team
    pub head_to_head_wins: u32,
}

/// Two teams compared over a season, or over all seasons.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ComparisonRecord {
    /// Season compared; `None` for all seasons
    pub season: Option<Season>,
    /// First team
    pub team_a: TeamSummary,
    /// Second team
    pub team_b: TeamSummary,
    /// Games between the teams, most recent first (empty unless requested)
    pub game_logs: Vec<TeamGameEntry>,
}
