//! Query routing, rendering, snapshots, REPL, and CLI for StatPad.
//!
//! This crate provides:
//! - [`Router`] - Classifies queries and answers them from a catalog
//! - [`QueryResponse`] and [`format`] - Responses as text or JSON
//! - [`Session`] and [`Repl`] - Interactive read-eval-print loop
//! - Catalog snapshots in `MessagePack`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod format;
pub mod repl;
pub mod response;
pub mod router;
pub mod serialize;
pub mod session;

pub use config::{OutputFormat, RuntimeConfig};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Outcome, Repl};
pub use response::{QueryResponse, ResponseData};
pub use router::Router;
pub use serialize::{from_bytes, load_from_file, save_to_file, to_bytes};
pub use session::Session;
