//! Core types, season identifiers, and errors for StatPad.
//!
//! This crate provides:
//! - [`Season`] - Canonical `YYYY-YY` season identifiers and normalization
//! - [`GameLimit`] - Positive "last N games" bounds
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod limit;
pub mod season;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use limit::GameLimit;
pub use season::{Season, normalize_season};
