//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use statpad_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_team_not_found() {
    let err = Error::team_not_found("Sonics");
    assert!(matches!(err.kind, ErrorKind::TeamNotFound(_)));
    assert!(err.to_string().contains("Sonics"));
    assert!(err.is_not_found());
}

#[test]
fn error_ambiguous_team_lists_candidates() {
    let err = Error::ambiguous_team(
        "Los Angeles",
        vec!["Los Angeles Clippers".to_string(), "Los Angeles Lakers".to_string()],
    );
    let msg = err.to_string();
    assert!(msg.contains("Los Angeles Clippers, Los Angeles Lakers"));
    assert!(!err.is_not_found());
}

#[test]
fn error_stats_not_found() {
    let err = Error::stats_not_found("Stephen Curry", "2016-17");
    assert!(matches!(err.kind, ErrorKind::StatsNotFound { .. }));
    let msg = err.to_string();
    assert!(msg.contains("Stephen Curry"));
    assert!(msg.contains("2016-17"));
}

#[test]
fn error_unrecognized_displays_reason_only() {
    let err = Error::unrecognized("could not parse query; rephrase");
    assert_eq!(err.to_string(), "could not parse query; rephrase");
}

#[test]
fn error_invalid_season() {
    let err = Error::invalid_season("23-24");
    assert!(err.to_string().contains("23-24"));
    assert!(err.to_string().contains("YYYY-YY"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_with_query_context() {
    let err = Error::season_not_found("1990-91").with_context(
        ErrorContext::new()
            .with_query("Lakers vs Warriors in 1990-91")
            .with_frame("lookup_team_comparison"),
    );
    let context = err.context.unwrap();
    assert_eq!(context.query.as_deref(), Some("Lakers vs Warriors in 1990-91"));
    assert_eq!(context.stack.len(), 1);
}

#[test]
fn error_with_path_context() {
    let err = Error::new(ErrorKind::IoError("denied".into()))
        .with_context(ErrorContext::new().with_path("league.msgpack"));
    assert_eq!(
        err.context.and_then(|c| c.path).as_deref(),
        Some("league.msgpack")
    );
}
