//! Vocabulary registry for the query interpreter.
//!
//! Stores the closed word lists the classifier consults: category trigger
//! words, stop words that end a subject name, and team keywords.

use std::collections::{HashMap, HashSet};

use crate::stdlib;
use crate::tokenizer::InputToken;

/// A team keyword with its accepted spellings.
#[derive(Clone, Debug)]
pub struct TeamKeyword {
    /// Canonical nickname (lowercase), e.g. `lakers`
    pub name: String,
    /// Other lowercase spellings that mean the same team, e.g. `sixers`
    pub aliases: Vec<String>,
}

/// Runtime storage for the interpreter's word lists.
#[derive(Clone, Debug, Default)]
pub struct VocabularyRegistry {
    /// Words that trigger the comparison category
    comparison_triggers: HashSet<String>,
    /// Conjunctions that also trigger the comparison category
    conjunctions: HashSet<String>,
    /// Single words that trigger the stats-lookup category
    stats_triggers: HashSet<String>,
    /// Multi-word phrases that trigger the stats-lookup category
    stats_phrases: Vec<Vec<String>>,
    /// Words that can never be part of a subject name
    stop_words: HashSet<String>,
    /// Team keywords by canonical nickname
    teams: HashMap<String, TeamKeyword>,
    /// Alias -> canonical nickname mapping
    team_aliases: HashMap<String, String>,
}

impl VocabularyRegistry {
    /// Creates a new empty vocabulary registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry loaded with the standard basketball vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for word in stdlib::COMPARISON_TRIGGERS {
            registry.register_comparison_trigger(word);
        }
        for word in stdlib::COMPARISON_CONJUNCTIONS {
            registry.register_conjunction(word);
        }
        for word in stdlib::STATS_TRIGGERS {
            registry.register_stats_trigger(word);
        }
        for phrase in stdlib::STATS_PHRASES {
            registry.register_stats_phrase(phrase);
        }
        for word in stdlib::STOP_WORDS {
            registry.register_stop_word(word);
        }
        for (name, aliases) in stdlib::TEAM_KEYWORDS {
            registry.register_team(TeamKeyword {
                name: (*name).to_string(),
                aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
            });
        }
        registry
    }

    /// Registers a comparison trigger word.
    ///
    /// Trigger words are also stop words: they never join a subject name.
    pub fn register_comparison_trigger(&mut self, word: &str) {
        let word = word.to_lowercase();
        self.stop_words.insert(word.clone());
        self.comparison_triggers.insert(word);
    }

    /// Registers a conjunction that joins two compared subjects.
    pub fn register_conjunction(&mut self, word: &str) {
        let word = word.to_lowercase();
        self.stop_words.insert(word.clone());
        self.conjunctions.insert(word);
    }

    /// Registers a stats trigger word.
    pub fn register_stats_trigger(&mut self, word: &str) {
        let word = word.to_lowercase();
        self.stop_words.insert(word.clone());
        self.stats_triggers.insert(word);
    }

    /// Registers a multi-word stats trigger phrase.
    pub fn register_stats_phrase(&mut self, phrase: &[&str]) {
        let phrase: Vec<String> = phrase.iter().map(|w| w.to_lowercase()).collect();
        for word in &phrase {
            self.stop_words.insert(word.clone());
        }
        if !phrase.is_empty() {
            self.stats_phrases.push(phrase);
        }
    }

    /// Registers a stop word.
    pub fn register_stop_word(&mut self, word: &str) {
        self.stop_words.insert(word.to_lowercase());
    }

    /// Registers a team keyword with its aliases.
    pub fn register_team(&mut self, team: TeamKeyword) {
        for alias in &team.aliases {
            self.team_aliases.insert(alias.clone(), team.name.clone());
        }
        self.team_aliases.insert(team.name.clone(), team.name.clone());
        self.teams.insert(team.name.clone(), team);
    }

    /// Returns true if `lower` triggers the comparison category.
    #[must_use]
    pub fn is_comparison_trigger(&self, lower: &str) -> bool {
        self.comparison_triggers.contains(lower)
    }

    /// Returns true if `lower` is a comparison conjunction.
    #[must_use]
    pub fn is_conjunction(&self, lower: &str) -> bool {
        self.conjunctions.contains(lower)
    }

    /// Returns true if `lower` triggers the stats-lookup category.
    #[must_use]
    pub fn is_stats_trigger(&self, lower: &str) -> bool {
        self.stats_triggers.contains(lower)
    }

    /// Returns the registered multi-word stats phrases.
    #[must_use]
    pub fn stats_phrases(&self) -> &[Vec<String>] {
        &self.stats_phrases
    }

    /// Returns true if `lower` can never be part of a subject name.
    #[must_use]
    pub fn is_stop_word(&self, lower: &str) -> bool {
        self.stop_words.contains(lower)
    }

    /// Looks up a team keyword by any spelling, returning the canonical nickname.
    #[must_use]
    pub fn lookup_team(&self, lower: &str) -> Option<&str> {
        self.team_aliases.get(lower).map(String::as_str)
    }

    /// Returns the number of registered teams.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Returns every team spelling the registry knows, sorted.
    #[must_use]
    pub fn team_spellings(&self) -> Vec<&str> {
        let mut spellings: Vec<&str> = self.team_aliases.keys().map(String::as_str).collect();
        spellings.sort_unstable();
        spellings
    }

    /// Returns true if the token can be part of a subject name.
    ///
    /// Quoted strings always can. Words can if they are not stop words and
    /// are either capitalized or a team keyword (`76ers`, `lakers`).
    #[must_use]
    pub fn is_name_token(&self, token: &InputToken) -> bool {
        match token {
            InputToken::QuotedString(_) => true,
            InputToken::Word(w) => {
                !self.is_stop_word(&w.lower)
                    && (w.is_capitalized() || self.lookup_team(&w.lower).is_some())
            }
            InputToken::Season(_) | InputToken::End => false,
        }
    }
}
