//! Intent classification tests.
//!
//! End-to-end tests from raw query text to [`QueryIntent`].

use statpad_foundation::{GameLimit, Season};
use statpad_parser::syntax::{PhraseElement, PhrasePattern};
use statpad_parser::{Category, QueryIntent, QueryInterpreter, UNRECOGNIZED_REASON, classify};

fn season(s: &str) -> Season {
    Season::parse(s).unwrap()
}

fn limit(n: u32) -> GameLimit {
    GameLimit::new(n).unwrap()
}

// =============================================================================
// Documented examples
// =============================================================================

#[test]
fn compare_players_in_season() {
    assert_eq!(
        classify("Compare Stephen Curry and LeBron James in 2023-24"),
        QueryIntent::PlayerComparison {
            subject_a: "Stephen Curry".into(),
            subject_b: "LeBron James".into(),
            season: Some(season("2023-24")),
        }
    );
}

#[test]
fn teams_last_n_games() {
    assert_eq!(
        classify("Lakers vs Warriors last 10 games"),
        QueryIntent::TeamComparisonGameLogs {
            subject_a: "Lakers".into(),
            subject_b: "Warriors".into(),
            season: None,
            limit: limit(10),
        }
    );
}

#[test]
fn player_stats_in_season() {
    assert_eq!(
        classify("What are Stephen Curry stats in 2023-24"),
        QueryIntent::PlayerStats {
            subject: "Stephen Curry".into(),
            season: season("2023-24"),
        }
    );
}

#[test]
fn gibberish_is_unrecognized() {
    assert_eq!(
        classify("asdkjhaskjdh"),
        QueryIntent::Unrecognized {
            reason: UNRECOGNIZED_REASON.into()
        }
    );
}

#[test]
fn conjunction_with_limit_is_game_logs() {
    assert_eq!(
        classify("Stephen Curry and LeBron James last 5 games"),
        QueryIntent::PlayerComparisonGameLogs {
            subject_a: "Stephen Curry".into(),
            subject_b: "LeBron James".into(),
            season: None,
            limit: limit(5),
        }
    );
}

// =============================================================================
// Player stats phrasings
// =============================================================================

#[test]
fn how_many_points() {
    assert_eq!(
        classify("How many points did Stephen Curry average in 2023-24"),
        QueryIntent::PlayerStats {
            subject: "Stephen Curry".into(),
            season: season("2023-24"),
        }
    );
}

#[test]
fn possessive_and_long_season() {
    assert_eq!(
        classify("Curry's stats for 2023/2024"),
        QueryIntent::PlayerStats {
            subject: "Curry".into(),
            season: season("2023-24"),
        }
    );
}

#[test]
fn bare_name_and_season() {
    assert_eq!(
        classify("Stephen Curry 2023-24"),
        QueryIntent::PlayerStats {
            subject: "Stephen Curry".into(),
            season: season("2023-24"),
        }
    );
}

#[test]
fn stats_need_a_season() {
    assert!(!classify("What are Stephen Curry stats").is_recognized());
}

// =============================================================================
// Comparisons
// =============================================================================

#[test]
fn versus_without_season() {
    assert_eq!(
        classify("Stephen Curry vs LeBron James"),
        QueryIntent::PlayerComparison {
            subject_a: "Stephen Curry".into(),
            subject_b: "LeBron James".into(),
            season: None,
        }
    );
}

#[test]
fn versus_with_phrase_season() {
    assert_eq!(
        classify("Stephen Curry versus LeBron James for 2022-23").season(),
        Some(season("2022-23"))
    );
}

#[test]
fn quoted_subjects() {
    assert_eq!(
        classify("Compare \"Giannis Antetokounmpo\" and \"Nikola Jokic\" in 2023-24"),
        QueryIntent::PlayerComparison {
            subject_a: "Giannis Antetokounmpo".into(),
            subject_b: "Nikola Jokic".into(),
            season: Some(season("2023-24")),
        }
    );
}

#[test]
fn comparison_takes_precedence_over_stats() {
    assert_eq!(
        classify("What are Stephen Curry and LeBron James stats in 2023-24"),
        QueryIntent::PlayerComparison {
            subject_a: "Stephen Curry".into(),
            subject_b: "LeBron James".into(),
            season: Some(season("2023-24")),
        }
    );
}

// =============================================================================
// Team comparisons
// =============================================================================

#[test]
fn teams_in_season_include_game_logs() {
    assert_eq!(
        classify("Celtics vs Lakers in 2023-24"),
        QueryIntent::TeamComparison {
            subject_a: "Celtics".into(),
            subject_b: "Lakers".into(),
            season: Some(season("2023-24")),
            include_game_logs: true,
        }
    );
}

#[test]
fn compare_teams_with_and() {
    assert_eq!(classify("Compare Lakers and Celtics").kind(), "team_comparison");
}

#[test]
fn full_team_names() {
    assert_eq!(
        classify("Los Angeles Lakers vs Golden State Warriors last 3 games"),
        QueryIntent::TeamComparisonGameLogs {
            subject_a: "Los Angeles Lakers".into(),
            subject_b: "Golden State Warriors".into(),
            season: None,
            limit: limit(3),
        }
    );
}

// =============================================================================
// Unrecognized input
// =============================================================================

#[test]
fn unrecognized_inputs() {
    for input in ["", "   ", "who is better", "?!?", "Lakers", "last 5 games"] {
        assert_eq!(classify(input), QueryIntent::unrecognized(), "{input:?}");
    }
}

// =============================================================================
// Custom cascades
// =============================================================================

const SEASON_ONLY: &[PhrasePattern] = &[PhrasePattern {
    name: "season-only",
    elements: &[PhraseElement::Season],
}];

#[test]
fn custom_category_runs_after_standard_ones() {
    let mut interpreter = QueryInterpreter::standard();
    interpreter.add_category(Category {
        name: "season-only",
        trigger: |ctx, _| ctx.season.is_some(),
        patterns: SEASON_ONLY,
        bind: |_, _, found| {
            Some(QueryIntent::Unrecognized {
                reason: format!("which player in {}?", found.season?),
            })
        },
    });

    assert_eq!(interpreter.categories().len(), 4);
    assert_eq!(
        interpreter.classify("anything for 2023-24"),
        QueryIntent::Unrecognized {
            reason: "which player in 2023-24?".into()
        }
    );
    assert_eq!(
        interpreter.classify("What are Stephen Curry stats in 2023-24").kind(),
        "player_stats"
    );
}
