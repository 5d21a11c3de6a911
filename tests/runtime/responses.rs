//! Response rendering and session tests

use statpad_runtime::format::{render_json, render_text};
use statpad_runtime::{OutputFormat, QueryResponse, Router, Session};
use statpad_storage::Catalog;

fn respond(query: &str) -> QueryResponse {
    Router::new().answer(&Catalog::sample().unwrap(), query).unwrap()
}

fn json(query: &str) -> serde_json::Value {
    serde_json::from_str(&render_json(&respond(query)).unwrap()).unwrap()
}

#[test]
fn stats_json_flattens_the_line() {
    let value = json("What are Stephen Curry stats in 2023-24");
    assert_eq!(value["type"], "player_stats");
    assert_eq!(value["data"]["stats"]["player"], "Stephen Curry");
    assert_eq!(value["data"]["stats"]["season"], "2023-24");
    assert_eq!(value["data"]["stats"]["points"], 26.4);
}

#[test]
fn game_logs_json() {
    let value = json("Stephen Curry and LeBron James last 5 games");
    assert_eq!(value["type"], "player_comparison_game_logs");
    assert_eq!(value["data"]["last_n"], 5);
    assert_eq!(value["data"]["season"], serde_json::Value::Null);
    let logs = value["data"]["game_logs"].as_array().unwrap();
    assert_eq!(logs.len(), 3);
    assert_eq!(logs[0]["date"], "2024-03-16");
    assert_eq!(logs[0]["game_type"], "regular_season");
}

#[test]
fn comparison_text_marks_missing_lines() {
    let text = render_text(&respond("Compare Stephen Curry and Jayson Tatum in 2022-23"));
    assert!(text.starts_with("Season 2022-23"));
    assert!(text.contains("(no line for this season)"));
}

#[test]
fn session_json_mode_renders_errors() {
    let mut session = Session::with_catalog(Catalog::sample().unwrap());
    session.set_format(OutputFormat::Json);
    let value: serde_json::Value =
        serde_json::from_str(&session.respond("Lakers vs Warriors in 1990-91").unwrap()).unwrap();
    assert_eq!(value["type"], "error");
    assert_eq!(value["original_query"], "Lakers vs Warriors in 1990-91");
    assert_eq!(value["data"]["message"], "season not found: 1990-91");
}

#[test]
fn session_text_mode_returns_errors() {
    let session = Session::with_catalog(Catalog::sample().unwrap());
    assert!(session.respond("Lakers vs Warriors in 1990-91").is_err());
    assert!(session.respond("Lakers vs Celtics").unwrap().starts_with("LAL vs BOS"));
}

#[test]
fn one_team_keyword_is_a_player_comparison() {
    let session = Session::with_catalog(Catalog::sample().unwrap());
    assert_eq!(session.answer("Lakers vs Sonics").unwrap().kind, "player_comparison");
    let text = session.respond("Lakers vs Sonics").unwrap();
    assert!(text.contains("Lakers: no seasons on record"));
    assert!(text.contains("Sonics: no seasons on record"));
}
