//! Dispatches classified intents to catalog lookups.

use statpad_foundation::{Error, ErrorContext, Result};
use statpad_parser::{QueryIntent, QueryInterpreter};
use statpad_storage::Catalog;
use tracing::debug;

use crate::response::{QueryResponse, ResponseData};

/// Turns queries into responses.
#[derive(Clone, Debug, Default)]
pub struct Router {
    interpreter: QueryInterpreter,
}

impl Router {
    /// Creates a router with the standard interpreter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a router with a custom interpreter.
    #[must_use]
    pub fn with_interpreter(interpreter: QueryInterpreter) -> Self {
        Self { interpreter }
    }

    /// Gets the interpreter.
    #[must_use]
    pub fn interpreter(&self) -> &QueryInterpreter {
        &self.interpreter
    }

    /// Classifies a query without answering it.
    #[must_use]
    pub fn classify(&self, query: &str) -> QueryIntent {
        self.interpreter.classify(query)
    }

    /// Classifies and answers a query.
    ///
    /// # Errors
    ///
    /// See [`Router::dispatch`].
    pub fn answer(&self, catalog: &Catalog, query: &str) -> Result<QueryResponse> {
        let intent = self.classify(query);
        self.dispatch(catalog, &intent, query)
            .map_err(|e| e.with_context(ErrorContext::new().with_query(query)))
    }

    /// Answers an already classified query.
    ///
    /// # Errors
    ///
    /// Returns `Unrecognized` for an unrecognized intent, `StatsNotFound`
    /// when a single player's season line is missing, and the catalog's
    /// errors for team comparisons.
    pub fn dispatch(
        &self,
        catalog: &Catalog,
        intent: &QueryIntent,
        query: &str,
    ) -> Result<QueryResponse> {
        debug!(kind = intent.kind(), "dispatching");
        let data = match intent {
            QueryIntent::PlayerStats { subject, season } => {
                let stats = catalog
                    .lookup_player_season_stats(subject, *season)
                    .ok_or_else(|| Error::stats_not_found(subject.as_str(), season.to_string()))?;
                ResponseData::Stats { stats }
            }
            QueryIntent::PlayerComparison {
                subject_a,
                subject_b,
                season: Some(season),
            } => ResponseData::Comparison(
                catalog.lookup_two_players_season_stats(subject_a, subject_b, *season),
            ),
            QueryIntent::PlayerComparison {
                subject_a,
                subject_b,
                season: None,
            } => ResponseData::Career {
                player_a: subject_a.clone(),
                player_b: subject_b.clone(),
                careers: catalog.lookup_two_players_career_stats(subject_a, subject_b),
            },
            QueryIntent::PlayerComparisonGameLogs {
                subject_a,
                subject_b,
                season,
                limit,
            } => ResponseData::GameLogs {
                player_a: subject_a.clone(),
                player_b: subject_b.clone(),
                season: *season,
                last_n: limit.get(),
                game_logs: catalog.lookup_head_to_head_games(
                    subject_a,
                    subject_b,
                    *season,
                    Some(*limit),
                ),
            },
            QueryIntent::TeamComparison {
                subject_a,
                subject_b,
                season,
                include_game_logs,
            } => ResponseData::Teams(catalog.lookup_team_comparison(
                subject_a,
                subject_b,
                *season,
                *include_game_logs,
                None,
            )?),
            QueryIntent::TeamComparisonGameLogs {
                subject_a,
                subject_b,
                season,
                limit,
            } => ResponseData::Teams(catalog.lookup_team_comparison(
                subject_a,
                subject_b,
                *season,
                true,
                Some(*limit),
            )?),
            QueryIntent::Unrecognized { reason } => return Err(Error::unrecognized(reason.as_str())),
        };
        Ok(QueryResponse::new(intent.kind(), data, query))
    }
}
