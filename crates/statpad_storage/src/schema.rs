//! Catalog record types.
//!
//! Identifiers are assigned by the [`Catalog`](crate::Catalog) on insertion;
//! records refer to each other only through them.

use std::fmt;

use chrono::NaiveDate;
use statpad_foundation::Season;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

define_id!(
    /// Identifies a team.
    TeamId,
    "team"
);
define_id!(
    /// Identifies a player.
    PlayerId,
    "player"
);
define_id!(
    /// Identifies a game.
    GameId,
    "game"
);

/// A franchise.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Team {
    /// Catalog identifier
    pub id: TeamId,
    /// Unique uppercase abbreviation, e.g. `GSW`
    pub abbreviation: String,
    /// Full name, e.g. `Golden State Warriors`
    pub name: String,
    /// Home city or region, e.g. `Golden State`
    pub city: String,
    /// `East` or `West`
    pub conference: Option<String>,
    /// Division within the conference
    pub division: Option<String>,
    /// Extra lowercase nicknames, e.g. `sixers`
    pub aliases: Vec<String>,
}

impl Team {
    /// The nickname: the last word of the full name.
    #[must_use]
    pub fn nickname(&self) -> &str {
        self.name.split_whitespace().next_back().unwrap_or(&self.name)
    }
}

/// Fields needed to add a team; the catalog assigns the id.
#[derive(Clone, Debug, Default)]
pub struct NewTeam<'a> {
    /// Unique abbreviation (stored uppercase)
    pub abbreviation: &'a str,
    /// Full name
    pub name: &'a str,
    /// Home city or region
    pub city: &'a str,
    /// Conference
    pub conference: Option<&'a str>,
    /// Division
    pub division: Option<&'a str>,
    /// Extra nicknames
    pub aliases: &'a [&'a str],
}

/// A player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Player {
    /// Catalog identifier
    pub id: PlayerId,
    /// Display name, unique ignoring case
    pub name: String,
    /// Listed position, e.g. `G`
    pub position: Option<String>,
    /// Current team
    pub team: Option<TeamId>,
}

/// A season known to the catalog.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeasonInfo {
    /// The season
    pub season: Season,
    /// Whether this is the season in progress
    pub is_current: bool,
}

impl SeasonInfo {
    /// Year the season starts in.
    #[must_use]
    pub const fn start_year(&self) -> u16 {
        self.season.start_year()
    }

    /// Year the season ends in.
    #[must_use]
    pub const fn end_year(&self) -> u32 {
        self.season.end_year()
    }
}

/// Per-game averages and totals for one player over one season.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatLine {
    /// Games played
    pub games_played: u16,
    /// Team wins in those games
    pub wins: u16,
    /// Team losses in those games
    pub losses: u16,
    /// Minutes per game
    pub minutes: f64,
    /// Points per game
    pub points: f64,
    /// Rebounds per game
    pub rebounds: f64,
    /// Offensive rebounds per game
    pub offensive_rebounds: f64,
    /// Defensive rebounds per game
    pub defensive_rebounds: f64,
    /// Assists per game
    pub assists: f64,
    /// Steals per game
    pub steals: f64,
    /// Blocks per game
    pub blocks: f64,
    /// Turnovers per game
    pub turnovers: f64,
    /// Field goal percentage, 0.0 to 1.0
    pub field_goal_pct: f64,
    /// Three-point percentage, 0.0 to 1.0
    pub three_point_pct: f64,
    /// Free throw percentage, 0.0 to 1.0
    pub free_throw_pct: f64,
    /// Plus-minus per game
    pub plus_minus: f64,
}

/// A player's season line.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeasonAverages {
    /// Player
    pub player: PlayerId,
    /// Season
    pub season: Season,
    /// Team played for, if a single one
    pub team: Option<TeamId>,
    /// The numbers
    pub line: StatLine,
}

/// Kind of game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameType {
    /// Preseason exhibition
    Preseason,
    /// Regular season
    #[default]
    RegularSeason,
    /// Play-in tournament
    PlayIn,
    /// Playoffs
    Playoffs,
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Preseason => "preseason",
            Self::RegularSeason => "regular season",
            Self::PlayIn => "play-in",
            Self::Playoffs => "playoffs",
        })
    }
}

/// A game between two teams.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    /// Catalog identifier
    pub id: GameId,
    /// Season the game belongs to
    pub season: Season,
    /// Date played
    pub date: NaiveDate,
    /// Home team
    pub home: TeamId,
    /// Away team
    pub away: TeamId,
    /// Home final score
    pub home_score: u16,
    /// Away final score
    pub away_score: u16,
    /// Kind of game
    pub game_type: GameType,
}

impl Game {
    /// Returns true if the home team won.
    #[must_use]
    pub const fn home_win(&self) -> bool {
        self.home_score > self.away_score
    }

    /// The winning team.
    #[must_use]
    pub const fn winner(&self) -> TeamId {
        if self.home_win() { self.home } else { self.away }
    }

    /// Returns true if `team` played in this game.
    #[must_use]
    pub fn involves(&self, team: TeamId) -> bool {
        self.home == team || self.away == team
    }

    /// Returns true if the game was between `a` and `b`, at either venue.
    #[must_use]
    pub fn is_between(&self, a: TeamId, b: TeamId) -> bool {
        (self.home == a && self.away == b) || (self.home == b && self.away == a)
    }
}

/// Fields needed to add a game; the catalog assigns the id.
#[derive(Clone, Debug)]
pub struct NewGame {
    /// Season
    pub season: Season,
    /// Date played
    pub date: NaiveDate,
    /// Home team
    pub home: TeamId,
    /// Away team
    pub away: TeamId,
    /// Home final score
    pub home_score: u16,
    /// Away final score
    pub away_score: u16,
    /// Kind of game
    pub game_type: GameType,
}

/// One player's line in one game.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxLine {
    /// Game
    pub game: GameId,
    /// Player
    pub player: PlayerId,
    /// Team the player played for
    pub team: TeamId,
    /// Minutes played
    pub minutes: f64,
    /// Points
    pub points: u16,
    /// Total rebounds
    pub rebounds: u16,
    /// Assists
    pub assists: u16,
}
