//! Tokenizer tests.
//!
//! Tests for converting raw queries to token streams.

use statpad_parser::tokenizer::{InputToken, InputTokenizer};

fn words(input: &str) -> Vec<String> {
    InputTokenizer::tokenize(input)
        .iter()
        .filter_map(|t| match t {
            InputToken::Word(w) => Some(w.text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn tokenize_keeps_case_and_lowercases_alongside() {
    let tokens = InputTokenizer::tokenize("LeBron James");

    assert_eq!(tokens.len(), 3);
    assert!(matches!(&tokens[0], InputToken::Word(w) if w.text == "LeBron" && w.lower == "lebron"));
    assert!(matches!(&tokens[2], InputToken::End));
}

#[test]
fn tokenize_strips_punctuation() {
    assert_eq!(
        words("What are Stephen Curry's stats, in 2023-24?"),
        vec!["What", "are", "Stephen", "Curry", "stats", "in"]
    );
}

#[test]
fn tokenize_recognizes_season_spellings() {
    for input in ["2023-24", "2023/24", "2023-2024"] {
        let tokens = InputTokenizer::tokenize(input);
        assert!(
            matches!(&tokens[0], InputToken::Season(s) if s.to_string() == "2023-24"),
            "{input}"
        );
    }
}

#[test]
fn tokenize_keeps_hyphenated_names() {
    assert_eq!(
        words("Shai Gilgeous-Alexander vs Karl-Anthony Towns"),
        vec!["Shai", "Gilgeous-Alexander", "vs", "Karl-Anthony", "Towns"]
    );
}

#[test]
fn tokenize_quoted_string() {
    let tokens = InputTokenizer::tokenize("compare \"Nikola  Jokic\" and Joel Embiid");

    assert!(matches!(&tokens[1], InputToken::QuotedString(s) if s == "Nikola Jokic"));
}

#[test]
fn tokenize_empty() {
    let tokens = InputTokenizer::tokenize("   ");
    assert_eq!(tokens, vec![InputToken::End]);
}
