//! StatPad - natural-language basketball statistics queries
//!
//! This crate re-exports all layers of the StatPad system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: statpad_runtime    - Router, rendering, snapshots, REPL, CLI
//! Layer 2: statpad_storage    - Catalog, lookups, team resolution, seed data
//! Layer 1: statpad_parser     - Tokenizer, extractors, intent classifier
//! Layer 0: statpad_foundation - Core types (Season, GameLimit, Error)
//! ```

pub use statpad_foundation as foundation;
pub use statpad_parser as parser;
pub use statpad_runtime as runtime;
pub use statpad_storage as storage;
