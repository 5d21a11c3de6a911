//! Phrase matching tests.

use statpad_parser::syntax::{PhraseElement as E, PhraseMatcher, PhrasePattern, Slot};
use statpad_parser::{InputTokenizer, PhraseMatch, VocabularyRegistry, stdlib};

fn find(input: &str, pattern: &PhrasePattern) -> Option<PhraseMatch> {
    let vocab = VocabularyRegistry::standard();
    PhraseMatcher::find(&InputTokenizer::tokenize(input), pattern, &vocab)
}

fn pattern(table: &[PhrasePattern], name: &str) -> PhrasePattern {
    *table.iter().find(|p| p.name == name).unwrap()
}

#[test]
fn subjects_stop_at_stop_words() {
    let versus = pattern(stdlib::COMPARISON_PATTERNS, "versus");
    let found = find("Stephen Curry vs LeBron James last 5 games", &versus).unwrap();
    assert_eq!(found.subject_a.as_deref(), Some("Stephen Curry"));
    assert_eq!(found.subject_b.as_deref(), Some("LeBron James"));
}

#[test]
fn lowercase_words_are_not_names() {
    let versus = pattern(stdlib::COMPARISON_PATTERNS, "versus");
    assert!(find("curry vs james", &versus).is_none());
}

#[test]
fn team_keywords_are_names_in_any_case() {
    let versus = pattern(stdlib::TEAM_PATTERNS, "team-versus");
    let found = find("lakers vs warriors", &versus).unwrap();
    assert_eq!(found.subject_a.as_deref(), Some("lakers"));
    assert_eq!(found.subject_b.as_deref(), Some("warriors"));
}

#[test]
fn leftmost_match_wins() {
    let versus = pattern(stdlib::COMPARISON_PATTERNS, "versus");
    let found = find("Curry vs James and Durant vs Booker", &versus).unwrap();
    assert_eq!(found.subject_a.as_deref(), Some("Curry"));
    assert_eq!(found.subject_b.as_deref(), Some("James"));
}

#[test]
fn anchored_patterns() {
    const ANCHORED: PhrasePattern = PhrasePattern {
        name: "anchored",
        elements: &[E::Start, E::Subject(Slot::A), E::Season, E::End],
    };
    assert!(find("Stephen Curry 2023-24", &ANCHORED).is_some());
    assert!(find("show Stephen Curry 2023-24", &ANCHORED).is_none());
    assert!(find("Stephen Curry 2023-24 please", &ANCHORED).is_none());
}

#[test]
fn optional_season_needs_preposition() {
    let versus = pattern(stdlib::COMPARISON_PATTERNS, "versus");
    let found = find("Curry vs James 2023-24", &versus).unwrap();
    assert!(found.season.is_none());
    let found = find("Curry vs James in 2023-24", &versus).unwrap();
    assert_eq!(found.season.map(|s| s.to_string()).as_deref(), Some("2023-24"));
}
