//! Phrase pattern matching.
//!
//! Matches token streams against phrase patterns such as
//! `compare <A> and <B> [in|for <season>]`.
//!
//! Subjects are greedy: a subject slot takes the whole run of name tokens at
//! its position and never gives any back. Patterns are only tried at
//! positions where their first element can match (a literal, or the start of
//! a name run), so each token is examined a bounded number of times per
//! pattern and matching stays linear in the input length.

use statpad_foundation::Season;

use crate::tokenizer::InputToken;
use crate::vocabulary::VocabularyRegistry;

/// Which subject a slot binds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// The first (or only) subject
    A,
    /// The second subject of a comparison
    B,
}

/// A phrase pattern element.
#[derive(Clone, Copy, Debug)]
pub enum PhraseElement {
    /// The pattern must begin at the first token
    Start,
    /// The pattern must end at the end of input
    End,
    /// One word, any of the given lowercase spellings
    Literal(&'static [&'static str]),
    /// A subject name: a run of one or more name tokens
    Subject(Slot),
    /// A season token
    Season,
    /// An optional `<preposition> <season>` clause
    OptionalSeason(&'static [&'static str]),
}

/// A named, ordered phrase pattern.
#[derive(Clone, Copy, Debug)]
pub struct PhrasePattern {
    /// Pattern name, for logs
    pub name: &'static str,
    /// Pattern elements, matched left to right
    pub elements: &'static [PhraseElement],
}

impl PhrasePattern {
    /// Counts the slots this pattern can bind.
    #[must_use]
    pub fn subject_slots(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, PhraseElement::Subject(_)))
            .count()
    }
}

/// A successful phrase match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseMatch {
    /// Name of the pattern that matched
    pub pattern: &'static str,
    /// First subject, if the pattern has slot A
    pub subject_a: Option<String>,
    /// Second subject, if the pattern has slot B
    pub subject_b: Option<String>,
    /// Season bound inside the phrase, if any
    pub season: Option<Season>,
}

/// Matches token streams against phrase patterns.
pub struct PhraseMatcher;

impl PhraseMatcher {
    /// Finds the leftmost match of `pattern` in `tokens`.
    #[must_use]
    pub fn find(
        tokens: &[InputToken],
        pattern: &PhrasePattern,
        vocab: &VocabularyRegistry,
    ) -> Option<PhraseMatch> {
        Self::candidate_starts(tokens, pattern, vocab)
            .into_iter()
            .find_map(|start| Self::try_match(tokens, start, pattern, vocab))
    }

    /// Positions where the pattern's first element can match.
    fn candidate_starts(
        tokens: &[InputToken],
        pattern: &PhrasePattern,
        vocab: &VocabularyRegistry,
    ) -> Vec<usize> {
        let Some(first) = pattern.elements.first() else {
            return Vec::new();
        };

        match first {
            PhraseElement::Start => vec![0],
            PhraseElement::Literal(words) => tokens
                .iter()
                .enumerate()
                .filter(|(_, t)| t.lower().is_some_and(|w| words.contains(&w)))
                .map(|(i, _)| i)
                .collect(),
            PhraseElement::Subject(_) => (0..tokens.len())
                .filter(|&i| {
                    vocab.is_name_token(&tokens[i])
                        && (i == 0 || !vocab.is_name_token(&tokens[i - 1]))
                })
                .collect(),
            PhraseElement::Season => tokens
                .iter()
                .enumerate()
                .filter(|(_, t)| matches!(t, InputToken::Season(_)))
                .map(|(i, _)| i)
                .collect(),
            PhraseElement::End | PhraseElement::OptionalSeason(_) => (0..tokens.len()).collect(),
        }
    }

    /// Tries to match the pattern starting exactly at `start`.
    fn try_match(
        tokens: &[InputToken],
        start: usize,
        pattern: &PhrasePattern,
        vocab: &VocabularyRegistry,
    ) -> Option<PhraseMatch> {
        let mut idx = start;
        let mut found = PhraseMatch {
            pattern: pattern.name,
            subject_a: None,
            subject_b: None,
            season: None,
        };

        for element in pattern.elements {
            match element {
                PhraseElement::Start => {
                    if idx != 0 {
                        return None;
                    }
                }
                PhraseElement::End => {
                    if !matches!(tokens.get(idx), Some(InputToken::End)) {
                        return None;
                    }
                }
                PhraseElement::Literal(words) => match tokens.get(idx).and_then(InputToken::lower) {
                    Some(w) if words.contains(&w) => idx += 1,
                    _ => return None,
                },
                PhraseElement::Subject(slot) => {
                    let (name, consumed) = Self::collect_subject(tokens, idx, vocab)?;
                    match slot {
                        Slot::A => found.subject_a = Some(name),
                        Slot::B => found.subject_b = Some(name),
                    }
                    idx += consumed;
                }
                PhraseElement::Season => match tokens.get(idx) {
                    Some(InputToken::Season(season)) => {
                        found.season = Some(*season);
                        idx += 1;
                    }
                    _ => return None,
                },
                PhraseElement::OptionalSeason(prepositions) => {
                    let preposition = tokens.get(idx).and_then(InputToken::lower);
                    if let (Some(p), Some(InputToken::Season(season))) =
                        (preposition, tokens.get(idx + 1))
                    {
                        if prepositions.contains(&p) {
                            found.season = Some(*season);
                            idx += 2;
                        }
                    }
                }
            }
        }

        Some(found)
    }

    /// Collects the run of name tokens at `start`.
    ///
    /// Returns the joined name and the number of tokens consumed, or `None` if
    /// the token at `start` cannot begin a name.
    fn collect_subject(
        tokens: &[InputToken],
        start: usize,
        vocab: &VocabularyRegistry,
    ) -> Option<(String, usize)> {
        let parts: Vec<&str> = tokens[start.min(tokens.len())..]
            .iter()
            .take_while(|t| vocab.is_name_token(t))
            .filter_map(|t| match t {
                InputToken::Word(w) => Some(w.text.as_str()),
                InputToken::QuotedString(s) => Some(s.as_str()),
                InputToken::Season(_) | InputToken::End => None,
            })
            .collect();

        if parts.is_empty() {
            return None;
        }
        Some((parts.join(" "), parts.len()))
    }
}
