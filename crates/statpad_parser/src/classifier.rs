//! The intent classifier cascade.
//!
//! Orchestrates the full flow from raw query to [`QueryIntent`]:
//!
//! 1. Tokenize and run the extractors once (season, limit, team mentions).
//! 2. Walk the categories in order. A category whose trigger fires tries its
//!    phrase patterns in order; the first pattern that binds every required
//!    slot produces the intent.
//! 3. A category that fires but cannot bind falls through to the next one.
//! 4. If nothing binds, the result is [`QueryIntent::Unrecognized`].

use statpad_foundation::{GameLimit, Season};
use tracing::{debug, trace};

use crate::extract::{self, TeamMentions};
use crate::intent::QueryIntent;
use crate::stdlib;
use crate::syntax::{PhraseMatch, PhraseMatcher, PhrasePattern};
use crate::tokenizer::{InputToken, InputTokenizer};
use crate::vocabulary::VocabularyRegistry;

/// Everything the categories may look at, harvested once per query.
#[derive(Clone, Debug)]
pub struct QueryContext {
    /// Tokenized query
    pub tokens: Vec<InputToken>,
    /// First season in the text, normalized
    pub season: Option<Season>,
    /// "last N games" limit
    pub limit: Option<GameLimit>,
    /// Team keywords mentioned
    pub teams: TeamMentions,
}

/// Decides whether a category applies to a query.
pub type Trigger = fn(&QueryContext, &VocabularyRegistry) -> bool;

/// Turns a phrase match into an intent, or rejects it.
pub type Binder = fn(&QueryContext, &VocabularyRegistry, PhraseMatch) -> Option<QueryIntent>;

/// One step of the cascade: a trigger, an ordered pattern list, and a binder.
#[derive(Clone, Copy, Debug)]
pub struct Category {
    /// Category name, for logs
    pub name: &'static str,
    /// When the category applies
    pub trigger: Trigger,
    /// Patterns tried in order
    pub patterns: &'static [PhrasePattern],
    /// How a match becomes an intent
    pub bind: Binder,
}

impl Category {
    /// Runs the category: `None` if the trigger does not fire or no pattern binds.
    fn apply(&self, ctx: &QueryContext, vocab: &VocabularyRegistry) -> Option<QueryIntent> {
        if !(self.trigger)(ctx, vocab) {
            trace!(category = self.name, "trigger did not fire");
            return None;
        }

        for pattern in self.patterns {
            let Some(found) = PhraseMatcher::find(&ctx.tokens, pattern, vocab) else {
                continue;
            };
            if let Some(intent) = (self.bind)(ctx, vocab, found) {
                debug!(
                    category = self.name,
                    pattern = pattern.name,
                    intent = intent.kind(),
                    "query classified"
                );
                return Some(intent);
            }
            trace!(category = self.name, pattern = pattern.name, "match rejected");
        }

        trace!(category = self.name, "no pattern bound");
        None
    }
}

/// The query interpreter.
#[derive(Clone, Debug)]
pub struct QueryInterpreter {
    vocabulary: VocabularyRegistry,
    categories: Vec<Category>,
}

impl QueryInterpreter {
    /// Creates an interpreter with the given vocabulary and no categories.
    #[must_use]
    pub fn new(vocabulary: VocabularyRegistry) -> Self {
        Self {
            vocabulary,
            categories: Vec::new(),
        }
    }

    /// Creates an interpreter with the standard vocabulary and cascade.
    #[must_use]
    pub fn standard() -> Self {
        let mut interpreter = Self::new(VocabularyRegistry::standard());
        for category in standard_categories() {
            interpreter.add_category(category);
        }
        interpreter
    }

    /// Appends a category; categories run in the order they were added.
    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Returns the categories in cascade order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Gets a reference to the vocabulary registry.
    #[must_use]
    pub fn vocabulary(&self) -> &VocabularyRegistry {
        &self.vocabulary
    }

    /// Tokenizes the query and runs the extractors.
    #[must_use]
    pub fn analyze(&self, text: &str) -> QueryContext {
        let tokens = InputTokenizer::tokenize(text.trim());
        let teams = extract::detect_teams(&tokens, &self.vocabulary);
        QueryContext {
            season: extract::extract_normalized_season(text),
            limit: extract::extract_limit(text),
            teams,
            tokens,
        }
    }

    /// Classifies a query. Never fails: unmatched input is
    /// [`QueryIntent::Unrecognized`].
    #[must_use]
    pub fn classify(&self, text: &str) -> QueryIntent {
        let ctx = self.analyze(text);
        self.categories
            .iter()
            .find_map(|category| category.apply(&ctx, &self.vocabulary))
            .unwrap_or_else(|| {
                debug!(query = text, "query not recognized");
                QueryIntent::unrecognized()
            })
    }
}

impl Default for QueryInterpreter {
    fn default() -> Self {
        Self::standard()
    }
}

/// The standard cascade: comparison, stats lookup, team comparison.
#[must_use]
pub fn standard_categories() -> Vec<Category> {
    vec![
        Category {
            name: "comparison",
            trigger: comparison_trigger,
            patterns: stdlib::COMPARISON_PATTERNS,
            bind: bind_player_comparison,
        },
        Category {
            name: "stats",
            trigger: stats_trigger,
            patterns: stdlib::STATS_PATTERNS,
            bind: bind_player_stats,
        },
        Category {
            name: "team",
            trigger: team_trigger,
            patterns: stdlib::TEAM_PATTERNS,
            bind: bind_team_comparison,
        },
    ]
}

fn comparison_trigger(ctx: &QueryContext, vocab: &VocabularyRegistry) -> bool {
    ctx.tokens.iter().filter_map(InputToken::lower).any(|w| {
        vocab.is_comparison_trigger(w) || vocab.is_conjunction(w)
    })
}

fn stats_trigger(ctx: &QueryContext, vocab: &VocabularyRegistry) -> bool {
    if ctx.season.is_some() {
        return true;
    }
    let words: Vec<&str> = ctx.tokens.iter().filter_map(InputToken::lower).collect();
    if words.iter().any(|w| vocab.is_stats_trigger(w)) {
        return true;
    }
    vocab.stats_phrases().iter().any(|phrase| {
        words
            .windows(phrase.len())
            .any(|window| window.iter().zip(phrase).all(|(w, p)| *w == p.as_str()))
    })
}

fn team_trigger(ctx: &QueryContext, _vocab: &VocabularyRegistry) -> bool {
    ctx.teams.count() >= 2
}

/// Both subjects, if both are bound and non-empty.
fn subject_pair(found: PhraseMatch) -> Option<(String, String, Option<Season>)> {
    let a = found.subject_a.filter(|s| !s.is_empty())?;
    let b = found.subject_b.filter(|s| !s.is_empty())?;
    Some((a, b, found.season))
}

fn bind_player_comparison(
    ctx: &QueryContext,
    vocab: &VocabularyRegistry,
    found: PhraseMatch,
) -> Option<QueryIntent> {
    let (subject_a, subject_b, phrase_season) = subject_pair(found)?;

    // Two team names are a team comparison, handled further down the cascade.
    if extract::is_team_subject(&subject_a, vocab) && extract::is_team_subject(&subject_b, vocab) {
        return None;
    }

    let season = ctx.season.or(phrase_season);
    Some(match ctx.limit {
        Some(limit) => QueryIntent::PlayerComparisonGameLogs {
            subject_a,
            subject_b,
            season,
            limit,
        },
        None => QueryIntent::PlayerComparison {
            subject_a,
            subject_b,
            season,
        },
    })
}

fn bind_player_stats(
    ctx: &QueryContext,
    _vocab: &VocabularyRegistry,
    found: PhraseMatch,
) -> Option<QueryIntent> {
    let subject = found.subject_a.filter(|s| !s.is_empty())?;
    let season = ctx.season.or(found.season)?;
    Some(QueryIntent::PlayerStats { subject, season })
}

fn bind_team_comparison(
    ctx: &QueryContext,
    _vocab: &VocabularyRegistry,
    found: PhraseMatch,
) -> Option<QueryIntent> {
    let (subject_a, subject_b, phrase_season) = subject_pair(found)?;
    let season = ctx.season.or(phrase_season);
    Some(match ctx.limit {
        Some(limit) => QueryIntent::TeamComparisonGameLogs {
            subject_a,
            subject_b,
            season,
            limit,
        },
        None => QueryIntent::TeamComparison {
            subject_a,
            subject_b,
            season,
            include_game_logs: true,
        },
    })
}
