//! Entity extractors.
//!
//! Independent recognizers run once per query, before classification:
//! season tokens, "last N games" limits, and team keyword mentions. Each is a
//! pure function of its input.

use std::sync::LazyLock;

use regex::Regex;
use statpad_foundation::{GameLimit, Season};

use crate::tokenizer::{InputToken, InputTokenizer};
use crate::vocabulary::VocabularyRegistry;

static SEASON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]{4}[-/](?:[0-9]{4}|[0-9]{2})\b").expect("season pattern compiles")
});

static LIMIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\blast\s+([0-9]+)\s+games?\b").expect("limit pattern compiles")
});

/// Returns the first season token in `text`, exactly as written.
///
/// No calendar plausibility check is made: `9999-00` is returned.
#[must_use]
pub fn extract_season(text: &str) -> Option<&str> {
    SEASON_RE.find(text).map(|m| m.as_str())
}

/// Returns the first season token in `text`, normalized.
#[must_use]
pub fn extract_normalized_season(text: &str) -> Option<Season> {
    extract_season(text).and_then(|raw| Season::parse(raw).ok())
}

/// Returns N from the first "last N game(s)" phrase, case-insensitively.
///
/// Zero, and numbers too large to count games, are not limits.
#[must_use]
pub fn extract_limit(text: &str) -> Option<GameLimit> {
    let caps = LIMIT_RE.captures(text)?;
    let count: u32 = caps.get(1)?.as_str().parse().ok()?;
    GameLimit::new(count)
}

/// Team keywords found in a query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamMentions {
    /// Distinct canonical nicknames, in order of first appearance
    pub names: Vec<String>,
}

impl TeamMentions {
    /// Number of distinct teams mentioned.
    #[must_use]
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the canonical nickname was mentioned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

/// Finds team keywords among the words of a tokenized query.
///
/// Matching is per word, so `nets` is not found inside `hornets`. Words of
/// quoted strings count too.
#[must_use]
pub fn detect_teams(tokens: &[InputToken], vocab: &VocabularyRegistry) -> TeamMentions {
    let mut mentions = TeamMentions::default();
    let mut note = |lower: &str| {
        if let Some(name) = vocab.lookup_team(lower) {
            if !mentions.contains(name) {
                mentions.names.push(name.to_string());
            }
        }
    };

    for token in tokens {
        match token {
            InputToken::Word(w) => note(&w.lower),
            InputToken::QuotedString(s) => {
                for part in s.split_whitespace() {
                    note(&part.to_lowercase());
                }
            }
            InputToken::Season(_) | InputToken::End => {}
        }
    }
    mentions
}

/// Finds team keywords in raw text.
#[must_use]
pub fn detect_teams_in(text: &str, vocab: &VocabularyRegistry) -> TeamMentions {
    detect_teams(&InputTokenizer::tokenize(text), vocab)
}

/// Returns true if a subject span names a known team.
///
/// The last word decides, so `Los Angeles Lakers` counts as a team.
#[must_use]
pub fn is_team_subject(subject: &str, vocab: &VocabularyRegistry) -> bool {
    subject
        .split_whitespace()
        .next_back()
        .is_some_and(|last| vocab.lookup_team(&last.to_lowercase()).is_some())
}
