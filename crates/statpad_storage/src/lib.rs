//! In-memory basketball statistics catalog for StatPad.
//!
//! This crate provides:
//! - [`Catalog`] - Teams, seasons, players, season lines, games and box
//!   lines in persistent collections, with the lookup operations queries
//!   are answered from
//! - [`resolve`] - Tiered team-name resolution
//! - [`records`] - Denormalized lookup results
//! - [`seed`] - The 30 NBA franchises, recent seasons and sample data

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod records;
pub mod resolve;
pub mod schema;
pub mod seed;

pub use catalog::Catalog;
pub use records::{
    CareerPair, ComparisonRecord, GameEntry, GameLine, PlayerPair, StatsRecord, TeamGameEntry,
    TeamSummary,
};
pub use schema::{
    BoxLine, Game, GameId, GameType, NewGame, NewTeam, Player, PlayerId, SeasonAverages,
    SeasonInfo, StatLine, Team, TeamId,
};
