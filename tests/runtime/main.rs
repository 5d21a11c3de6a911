//! Integration tests for Layer 3: Runtime
//!
//! Tests for routing queries to lookups, rendering responses, catalog
//! snapshots, and REPL sessions.

mod responses;
mod routing;
mod snapshots;
