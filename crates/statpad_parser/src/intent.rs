//! Classified query intents.

use std::fmt;

use statpad_foundation::{GameLimit, Season};

/// Reason carried by [`QueryIntent::Unrecognized`].
pub const UNRECOGNIZED_REASON: &str = "could not parse query; rephrase";

/// The structured purpose of a query.
///
/// Exactly one intent is produced per input. Subject names are free text and
/// are resolved later by the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum QueryIntent {
    /// One player's averages for one season
    PlayerStats {
        /// Player name
        subject: String,
        /// Season asked about
        season: Season,
    },
    /// Two players' averages side by side; no season means all seasons
    PlayerComparison {
        /// First player
        subject_a: String,
        /// Second player
        subject_b: String,
        /// Season, if stated
        season: Option<Season>,
    },
    /// Games in which the two players met, most recent first
    PlayerComparisonGameLogs {
        /// First player
        subject_a: String,
        /// Second player
        subject_b: String,
        /// Season, if stated
        season: Option<Season>,
        /// Number of most recent games
        limit: GameLimit,
    },
    /// Two teams compared, with their meetings
    TeamComparison {
        /// First team
        subject_a: String,
        /// Second team
        subject_b: String,
        /// Season, if stated
        season: Option<Season>,
        /// Whether to list the games between the teams
        include_game_logs: bool,
    },
    /// The most recent games between two teams
    TeamComparisonGameLogs {
        /// First team
        subject_a: String,
        /// Second team
        subject_b: String,
        /// Season, if stated
        season: Option<Season>,
        /// Number of most recent games
        limit: GameLimit,
    },
    /// Nothing matched
    Unrecognized {
        /// Human-readable reason
        reason: String,
    },
}

impl QueryIntent {
    /// The standard "please rephrase" intent.
    #[must_use]
    pub fn unrecognized() -> Self {
        Self::Unrecognized {
            reason: UNRECOGNIZED_REASON.to_string(),
        }
    }

    /// Stable snake_case name of the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PlayerStats { .. } => "player_stats",
            Self::PlayerComparison { .. } => "player_comparison",
            Self::PlayerComparisonGameLogs { .. } => "player_comparison_game_logs",
            Self::TeamComparison { .. } => "team_comparison",
            Self::TeamComparisonGameLogs { .. } => "team_comparison_game_logs",
            Self::Unrecognized { .. } => "error",
        }
    }

    /// Returns true for every variant except [`QueryIntent::Unrecognized`].
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized { .. })
    }

    /// The season attached to the intent, if any.
    #[must_use]
    pub const fn season(&self) -> Option<Season> {
        match self {
            Self::PlayerStats { season, .. } => Some(*season),
            Self::PlayerComparison { season, .. }
            | Self::PlayerComparisonGameLogs { season, .. }
            | Self::TeamComparison { season, .. }
            | Self::TeamComparisonGameLogs { season, .. } => *season,
            Self::Unrecognized { .. } => None,
        }
    }

    /// The game limit attached to the intent, if any.
    #[must_use]
    pub const fn limit(&self) -> Option<GameLimit> {
        match self {
            Self::PlayerComparisonGameLogs { limit, .. }
            | Self::TeamComparisonGameLogs { limit, .. } => Some(*limit),
            _ => None,
        }
    }
}

impl fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let season = |s: &Option<Season>| match s {
            Some(s) => s.to_string(),
            None => "all seasons".to_string(),
        };
        match self {
            Self::PlayerStats { subject, season } => {
                write!(f, "player_stats {subject} ({season})")
            }
            Self::PlayerComparison {
                subject_a,
                subject_b,
                season: s,
            } => write!(f, "player_comparison {subject_a} / {subject_b} ({})", season(s)),
            Self::PlayerComparisonGameLogs {
                subject_a,
                subject_b,
                season: s,
                limit,
            } => write!(
                f,
                "player_comparison_game_logs {subject_a} / {subject_b} ({}, last {limit})",
                season(s)
            ),
            Self::TeamComparison {
                subject_a,
                subject_b,
                season: s,
                include_game_logs,
            } => write!(
                f,
                "team_comparison {subject_a} / {subject_b} ({}{})",
                season(s),
                if *include_game_logs { ", with games" } else { "" }
            ),
            Self::TeamComparisonGameLogs {
                subject_a,
                subject_b,
                season: s,
                limit,
            } => write!(
                f,
                "team_comparison_game_logs {subject_a} / {subject_b} ({}, last {limit})",
                season(s)
            ),
            Self::Unrecognized { reason } => write!(f, "error: {reason}"),
        }
    }
}
