//! Input tokenization.
//!
//! Converts a raw query into a stream of tokens. Words keep their original
//! spelling (capitalization is how subject names are recognized) alongside a
//! lowercase form used for vocabulary lookups.

use statpad_foundation::Season;

/// A word from the query, with its original and lowercase spelling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    /// The word as typed, punctuation removed
    pub text: String,
    /// Lowercase form for vocabulary lookups
    pub lower: String,
}

impl Word {
    /// Creates a word from its typed spelling.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lower = text.to_lowercase();
        Self { text, lower }
    }

    /// Returns true if the word starts with an uppercase letter.
    #[must_use]
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }
}

/// A token from a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputToken {
    /// A plain word
    Word(Word),
    /// A season token, already in canonical form
    Season(Season),
    /// A quoted string (preserved as-is, always usable as a name)
    QuotedString(String),
    /// End of input
    End,
}

impl InputToken {
    /// Returns the lowercase word, if this is a word.
    #[must_use]
    pub fn lower(&self) -> Option<&str> {
        match self {
            Self::Word(w) => Some(&w.lower),
            _ => None,
        }
    }
}

/// Tokenizes queries.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw query string.
    ///
    /// - Splits on whitespace
    /// - Strips punctuation, keeping `-` and `/` (seasons, hyphenated names)
    ///   and inner apostrophes (`O'Neal`)
    /// - Drops a trailing possessive `'s` (`Curry's` becomes `Curry`)
    /// - Recognizes season tokens in any accepted spelling
    /// - Preserves quoted strings as atomic units
    ///
    /// The output always ends with [`InputToken::End`].
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<InputToken> {
        let mut tokens = Vec::new();
        let mut chars = input.chars();
        let mut current_word = String::new();

        while let Some(ch) = chars.next() {
            match ch {
                '"' | '\u{201c}' | '\u{201d}' => {
                    Self::flush(&mut current_word, &mut tokens);
                    let quoted: String = chars
                        .by_ref()
                        .take_while(|&c| !matches!(c, '"' | '\u{201c}' | '\u{201d}'))
                        .collect();
                    let quoted = quoted.split_whitespace().collect::<Vec<_>>().join(" ");
                    if !quoted.is_empty() {
                        tokens.push(InputToken::QuotedString(quoted));
                    }
                }
                c if c.is_whitespace() => Self::flush(&mut current_word, &mut tokens),
                '.' | ',' | '!' | '?' | ';' | ':' | '(' | ')' | '[' | ']' | '{' | '}' => {}
                _ => current_word.push(ch),
            }
        }

        Self::flush(&mut current_word, &mut tokens);
        tokens.push(InputToken::End);
        tokens
    }

    fn flush(current_word: &mut String, tokens: &mut Vec<InputToken>) {
        if current_word.is_empty() {
            return;
        }
        let raw = std::mem::take(current_word);
        let word = Self::clean_word(&raw);
        if word.is_empty() {
            return;
        }
        match Season::parse(word) {
            Ok(season) => tokens.push(InputToken::Season(season)),
            Err(_) => tokens.push(InputToken::Word(Word::new(word))),
        }
    }

    fn clean_word(raw: &str) -> &str {
        let is_apostrophe = |c: char| matches!(c, '\'' | '\u{2019}');
        let mut word = raw.trim_matches(is_apostrophe);
        for suffix in ["'s", "'S", "\u{2019}s", "\u{2019}S"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                word = stem;
                break;
            }
        }
        word.trim_matches(is_apostrophe)
    }
}
