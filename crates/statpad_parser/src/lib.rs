//! Natural-language query interpreter for basketball statistics.
//!
//! This crate turns free-form questions like "Compare Stephen Curry and
//! LeBron James in 2023-24" into a typed [`QueryIntent`] that the catalog can
//! answer.
//!
//! # Architecture
//!
//! ```text
//! "Lakers vs Warriors last 10 games"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [Lakers, vs, Warriors, last, 10, games, End]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ EXTRACTORS      │  → season: None, limit: 10, teams: [lakers, warriors]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CATEGORY        │  comparison → stats → team → unrecognized
//! │ CASCADE         │  (first category whose trigger fires and binds wins)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PHRASE          │  → team-versus: A = "Lakers", B = "Warriors"
//! │ MATCHING        │
//! └─────────────────┘
//!          │
//!          ▼
//!   TeamComparisonGameLogs { Lakers, Warriors, season: None, limit: 10 }
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to a token stream
//! - [`vocabulary`] - Trigger words, stop words and team keywords
//! - [`extract`] - Season, limit and team-mention extractors
//! - [`syntax`] - Phrase pattern matching
//! - [`intent`] - The classified intent type
//! - [`classifier`] - The category cascade
//! - [`stdlib`] - Standard basketball vocabulary and patterns

pub mod classifier;
pub mod extract;
pub mod intent;
pub mod stdlib;
pub mod syntax;
pub mod tokenizer;
pub mod vocabulary;

use std::sync::LazyLock;

// Re-export main types for convenience
pub use classifier::{Category, QueryContext, QueryInterpreter};
pub use extract::{TeamMentions, extract_limit, extract_normalized_season, extract_season};
pub use intent::{QueryIntent, UNRECOGNIZED_REASON};
pub use syntax::{PhraseMatch, PhraseMatcher, PhrasePattern};
pub use tokenizer::{InputToken, InputTokenizer};
pub use vocabulary::VocabularyRegistry;

static STANDARD: LazyLock<QueryInterpreter> = LazyLock::new(QueryInterpreter::standard);

/// Classifies a query with the standard vocabulary.
///
/// Total and deterministic: every input yields exactly one intent, and the
/// same input always yields the same one.
#[must_use]
pub fn classify(text: &str) -> QueryIntent {
    STANDARD.classify(text)
}
