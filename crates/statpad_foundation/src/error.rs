//! Error types for the StatPad system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for StatPad operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid season error.
    #[must_use]
    pub fn invalid_season(raw: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSeason(raw.into()))
    }

    /// Creates a season not found error.
    #[must_use]
    pub fn season_not_found(season: impl Into<String>) -> Self {
        Self::new(ErrorKind::SeasonNotFound(season.into()))
    }

    /// Creates a player not found error.
    #[must_use]
    pub fn player_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::PlayerNotFound(name.into()))
    }

    /// Creates a team not found error.
    #[must_use]
    pub fn team_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::TeamNotFound(name.into()))
    }

    /// Creates an ambiguous team error.
    #[must_use]
    pub fn ambiguous_team(query: impl Into<String>, candidates: Vec<String>) -> Self {
        Self::new(ErrorKind::AmbiguousTeam {
            query: query.into(),
            candidates,
        })
    }

    /// Creates a stats not found error.
    #[must_use]
    pub fn stats_not_found(player: impl Into<String>, season: impl Into<String>) -> Self {
        Self::new(ErrorKind::StatsNotFound {
            player: player.into(),
            season: season.into(),
        })
    }

    /// Creates an invalid record error.
    #[must_use]
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRecord(message.into()))
    }

    /// Creates an unrecognized query error.
    #[must_use]
    pub fn unrecognized(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unrecognized(reason.into()))
    }

    /// Returns true if this error means "the thing asked about does not exist".
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::SeasonNotFound(_)
                | ErrorKind::PlayerNotFound(_)
                | ErrorKind::TeamNotFound(_)
                | ErrorKind::StatsNotFound { .. }
                | ErrorKind::GameNotFound(_)
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Text that is not a season token in any accepted spelling.
    #[error("invalid season: {0:?} (expected YYYY-YY)")]
    InvalidSeason(String),

    /// Season is not in the catalog.
    #[error("season not found: {0}")]
    SeasonNotFound(String),

    /// Player is not in the catalog.
    #[error("player not found: {0}")]
    PlayerNotFound(String),

    /// No team matched the search term.
    #[error("team not found: {0}")]
    TeamNotFound(String),

    /// Several teams matched the search term equally well.
    #[error("team {query:?} is ambiguous: {}", .candidates.join(", "))]
    AmbiguousTeam {
        /// The search term.
        query: String,
        /// Names of the equally ranked matches.
        candidates: Vec<String>,
    },

    /// Player exists but has no line for the season.
    #[error("stats not found for {player} in season {season}")]
    StatsNotFound {
        /// The player name as asked.
        player: String,
        /// The canonical season.
        season: String,
    },

    /// Game is not in the catalog.
    #[error("game not found: {0}")]
    GameNotFound(u32),

    /// A team with this abbreviation already exists.
    #[error("duplicate team abbreviation: {0}")]
    DuplicateTeam(String),

    /// A record violates a catalog invariant.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// The query could not be classified.
    #[error("{0}")]
    Unrecognized(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The query text being answered, if any.
    pub query: Option<String>,
    /// File involved, if any.
    pub path: Option<String>,
    /// Operations that were in progress, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the query text.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the file path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Adds an operation frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(query) = &self.query {
            write!(f, "while answering {query:?}")?;
        }
        if let Some(path) = &self.path {
            write!(f, " ({path})")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
