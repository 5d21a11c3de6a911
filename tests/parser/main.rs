//! Integration tests for the statpad_parser crate.
//!
//! Tests for the query interpretation pipeline:
//! - Tokenization
//! - Entity extraction
//! - Phrase matching
//! - Intent classification and its properties

mod classification_tests;
mod syntax_matching_tests;
mod tokenizer_tests;
