//! Query responses.

use serde::Serialize;
use statpad_foundation::{Error, Season};
use statpad_storage::{CareerPair, ComparisonRecord, GameEntry, PlayerPair, StatsRecord};

/// The answer to one query.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueryResponse {
    /// Intent kind, e.g. `player_stats`, or `error`
    #[serde(rename = "type")]
    pub kind: String,
    /// Kind-specific payload
    pub data: ResponseData,
    /// The query as typed
    pub original_query: String,
}

impl QueryResponse {
    /// Creates a response.
    #[must_use]
    pub fn new(kind: &str, data: ResponseData, original_query: &str) -> Self {
        Self {
            kind: kind.to_string(),
            data,
            original_query: original_query.to_string(),
        }
    }

    /// An `error` response carrying the error's message.
    #[must_use]
    pub fn error(original_query: &str, error: &Error) -> Self {
        Self::new(
            "error",
            ResponseData::Error {
                message: error.to_string(),
            },
            original_query,
        )
    }

    /// Returns true for `error` responses.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.data, ResponseData::Error { .. })
    }
}

/// Payload of a [`QueryResponse`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    /// One player's season line.
    Stats {
        /// The line
        stats: StatsRecord,
    },
    /// Two players side by side for one season.
    Comparison(PlayerPair),
    /// Two players' careers side by side.
    Career {
        /// First player as asked
        player_a: String,
        /// Second player as asked
        player_b: String,
        /// Their lines, oldest season first
        careers: CareerPair,
    },
    /// Games two players met in.
    GameLogs {
        /// First player as asked
        player_a: String,
        /// Second player as asked
        player_b: String,
        /// Season filter, if any
        season: Option<Season>,
        /// Requested number of games
        last_n: u32,
        /// Games, most recent first
        game_logs: Vec<GameEntry>,
    },
    /// Two teams compared.
    Teams(ComparisonRecord),
    /// Something went wrong.
    Error {
        /// Human-readable message
        message: String,
    },
}
