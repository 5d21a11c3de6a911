//! Standard vocabulary and phrase patterns for basketball queries.
//!
//! Pattern tables are ordered: within a category the first pattern that binds
//! wins, so more constrained phrasings come before looser ones.

use crate::syntax::{PhraseElement as E, PhrasePattern, Slot};

/// Words that mark a sentence as a comparison.
pub const COMPARISON_TRIGGERS: &[&str] = &["compare", "vs", "versus", "against"];

/// Conjunctions that join two compared subjects ("Curry and James").
pub const COMPARISON_CONJUNCTIONS: &[&str] = &["and"];

/// Words that mark a sentence as a single-player stats lookup.
pub const STATS_TRIGGERS: &[&str] = &[
    "what", "points", "rebounds", "assists", "stat", "stats", "average",
];

/// Multi-word stats triggers.
pub const STATS_PHRASES: &[&[&str]] = &[&["how", "many"]];

/// Words that end a subject name even when capitalized.
pub const STOP_WORDS: &[&str] = &[
    // Question words and auxiliaries
    "what", "were", "are", "how", "many", "much", "who", "which", "did", "does", "do", "is",
    "was", "can", "could", "please", "show", "tell", "give", "me", "i",
    // Prepositions, articles, conjunctions
    "in", "for", "of", "on", "at", "to", "with", "between", "during", "the", "a", "an", "or",
    "and", "this", "that", "his", "her", "their",
    // Time frames
    "last", "game", "games", "season", "seasons", "per",
    // Statistics
    "score", "scored", "average", "averaged", "averages", "had", "has", "have", "get", "got",
    "stat", "stats", "points", "rebounds", "assists", "steals", "blocks",
];

/// Team nicknames (canonical, lowercase) and their accepted short forms.
pub const TEAM_KEYWORDS: &[(&str, &[&str])] = &[
    ("lakers", &[]),
    ("warriors", &[]),
    ("celtics", &[]),
    ("heat", &[]),
    ("bulls", &[]),
    ("knicks", &[]),
    ("nets", &[]),
    ("clippers", &[]),
    ("mavericks", &["mavs"]),
    ("suns", &[]),
    ("nuggets", &[]),
    ("bucks", &[]),
    ("76ers", &["sixers"]),
    ("raptors", &[]),
    ("rockets", &[]),
    ("spurs", &[]),
    ("thunder", &[]),
    ("jazz", &[]),
    ("blazers", &["trailblazers"]),
    ("pelicans", &[]),
    ("kings", &[]),
    ("timberwolves", &["wolves"]),
    ("pistons", &[]),
    ("hornets", &[]),
    ("magic", &[]),
    ("pacers", &[]),
    ("wizards", &[]),
    ("hawks", &[]),
    ("cavaliers", &["cavs"]),
    ("grizzlies", &[]),
];

const IN_FOR: &[&str] = &["in", "for"];
const VERSUS: &[&str] = &["vs", "versus", "against"];
const STAT_WORDS: &[&str] = &["stat", "stats"];

/// Comparison category patterns.
pub const COMPARISON_PATTERNS: &[PhrasePattern] = &[
    PhrasePattern {
        name: "compare-and",
        elements: &[
            E::Literal(&["compare"]),
            E::Subject(Slot::A),
            E::Literal(&["and"]),
            E::Subject(Slot::B),
            E::OptionalSeason(IN_FOR),
        ],
    },
    PhrasePattern {
        name: "versus",
        elements: &[
            E::Subject(Slot::A),
            E::Literal(VERSUS),
            E::Subject(Slot::B),
            E::OptionalSeason(IN_FOR),
        ],
    },
    PhrasePattern {
        name: "and",
        elements: &[
            E::Subject(Slot::A),
            E::Literal(&["and"]),
            E::Subject(Slot::B),
            E::OptionalSeason(IN_FOR),
        ],
    },
];

/// Stats-lookup category patterns, most constrained first.
pub const STATS_PATTERNS: &[PhrasePattern] = &[
    PhrasePattern {
        name: "what-are-stats-in",
        elements: &[
            E::Literal(&["what"]),
            E::Literal(&["are", "were"]),
            E::Subject(Slot::A),
            E::Literal(STAT_WORDS),
            E::Literal(IN_FOR),
            E::Season,
        ],
    },
    PhrasePattern {
        name: "stats-in",
        elements: &[
            E::Subject(Slot::A),
            E::Literal(STAT_WORDS),
            E::Literal(IN_FOR),
            E::Season,
        ],
    },
    PhrasePattern {
        name: "how-many-points",
        elements: &[
            E::Literal(&["how"]),
            E::Literal(&["many"]),
            E::Literal(&["points"]),
            E::Literal(&["did"]),
            E::Subject(Slot::A),
            E::Literal(&["average", "score"]),
            E::Literal(IN_FOR),
            E::Season,
        ],
    },
    PhrasePattern {
        name: "did-verb",
        elements: &[
            E::Literal(&["did", "does", "is", "was"]),
            E::Subject(Slot::A),
            E::Literal(&["score", "average", "get", "have"]),
            E::OptionalSeason(IN_FOR),
        ],
    },
    PhrasePattern {
        name: "leading-in",
        elements: &[
            E::Start,
            E::Subject(Slot::A),
            E::Literal(IN_FOR),
            E::Season,
        ],
    },
    PhrasePattern {
        name: "bare",
        elements: &[E::Start, E::Subject(Slot::A), E::Season, E::End],
    },
    PhrasePattern {
        name: "subject-verb",
        elements: &[
            E::Subject(Slot::A),
            E::Literal(&["score", "average", "had", "has"]),
            E::OptionalSeason(IN_FOR),
        ],
    },
];

/// Team category patterns.
pub const TEAM_PATTERNS: &[PhrasePattern] = &[
    PhrasePattern {
        name: "team-compare-and",
        elements: &[
            E::Literal(&["compare"]),
            E::Subject(Slot::A),
            E::Literal(&["and"]),
            E::Subject(Slot::B),
            E::OptionalSeason(IN_FOR),
        ],
    },
    PhrasePattern {
        name: "team-versus",
        elements: &[
            E::Subject(Slot::A),
            E::Literal(VERSUS),
            E::Subject(Slot::B),
            E::OptionalSeason(IN_FOR),
        ],
    },
    PhrasePattern {
        name: "team-and",
        elements: &[
            E::Subject(Slot::A),
            E::Literal(&["and"]),
            E::Subject(Slot::B),
            E::OptionalSeason(IN_FOR),
        ],
    },
];
