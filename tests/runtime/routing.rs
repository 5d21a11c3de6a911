//! Router dispatch tests
//!
//! One query per intent variant, answered from the sample catalog.

use statpad_foundation::ErrorKind;
use statpad_parser::QueryIntent;
use statpad_runtime::{QueryResponse, ResponseData, Router};
use statpad_storage::Catalog;

fn answer(query: &str) -> statpad_foundation::Result<QueryResponse> {
    Router::new().answer(&Catalog::sample().unwrap(), query)
}

#[test]
fn player_stats() {
    let response = answer("What are LeBron James stats in 2023-24").unwrap();
    assert_eq!(response.kind, "player_stats");
    assert_eq!(response.original_query, "What are LeBron James stats in 2023-24");
    let ResponseData::Stats { stats } = response.data else {
        panic!("expected stats");
    };
    assert_eq!(stats.team.as_deref(), Some("LAL"));
    assert_eq!(stats.line.games_played, 71);
}

#[test]
fn player_stats_missing_season_line() {
    let err = answer("What are Jayson Tatum stats in 2022-23").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::StatsNotFound { ref player, ref season } if player == "Jayson Tatum" && season == "2022-23"
    ));
}

#[test]
fn player_comparison_in_season() {
    let response = answer("Compare Stephen Curry and Jayson Tatum in 2023-24").unwrap();
    let ResponseData::Comparison(pair) = response.data else {
        panic!("expected a season comparison");
    };
    assert!(pair.is_complete());
    assert_eq!(pair.b.unwrap().team.as_deref(), Some("BOS"));
}

#[test]
fn player_comparison_partial() {
    let response = answer("Compare Stephen Curry and Jayson Tatum in 2022-23").unwrap();
    let ResponseData::Comparison(pair) = response.data else {
        panic!("expected a season comparison");
    };
    assert!(pair.a.is_some());
    assert!(pair.b.is_none());
}

#[test]
fn player_comparison_careers() {
    let response = answer("Stephen Curry versus Jayson Tatum").unwrap();
    let ResponseData::Career { player_a, careers, .. } = response.data else {
        panic!("expected careers");
    };
    assert_eq!(player_a, "Stephen Curry");
    assert_eq!(careers.a.len(), 2);
    assert_eq!(careers.b.len(), 1);
}

#[test]
fn player_game_logs_in_season() {
    let response = answer("Stephen Curry vs LeBron James in 2022-23 last 5 games").unwrap();
    assert_eq!(response.kind, "player_comparison_game_logs");
    let ResponseData::GameLogs { game_logs, last_n, season, .. } = response.data else {
        panic!("expected game logs");
    };
    assert_eq!(last_n, 5);
    assert_eq!(season.map(|s| s.to_string()).as_deref(), Some("2022-23"));
    assert_eq!(game_logs.len(), 1);
}

#[test]
fn team_comparison() {
    let response = answer("Celtics vs Lakers").unwrap();
    assert_eq!(response.kind, "team_comparison");
    let ResponseData::Teams(record) = response.data else {
        panic!("expected team comparison");
    };
    assert_eq!(record.team_a.abbreviation, "BOS");
    assert_eq!((record.team_a.wins, record.team_a.losses), (0, 1));
    assert_eq!(record.game_logs.len(), 1);
}

#[test]
fn team_game_logs() {
    let response = answer("Lakers vs Warriors last 2 games").unwrap();
    let ResponseData::Teams(record) = response.data else {
        panic!("expected team comparison");
    };
    assert_eq!(record.game_logs.len(), 2);
    assert_eq!(record.game_logs[0].date.to_string(), "2024-03-16");
}

#[test]
fn unknown_team_season() {
    let err = answer("Lakers vs Warriors in 1990-91").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SeasonNotFound(_)));
    assert!(err.is_not_found());
}

#[test]
fn dispatch_without_classifying() {
    let catalog = Catalog::sample().unwrap();
    let intent = QueryIntent::TeamComparison {
        subject_a: "Boston".into(),
        subject_b: "LAL".into(),
        season: None,
        include_game_logs: false,
    };
    let response = Router::new().dispatch(&catalog, &intent, "typed by hand").unwrap();
    let ResponseData::Teams(record) = response.data else {
        panic!("expected team comparison");
    };
    assert!(record.game_logs.is_empty());
    assert_eq!(response.original_query, "typed by hand");
}

#[test]
fn dispatch_unknown_team() {
    let catalog = Catalog::sample().unwrap();
    let intent = QueryIntent::TeamComparison {
        subject_a: "Lakers".into(),
        subject_b: "Sonics".into(),
        season: None,
        include_game_logs: true,
    };
    let err = Router::new().dispatch(&catalog, &intent, "Lakers vs Sonics").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TeamNotFound(ref t) if t == "Sonics"));
    assert_eq!(err.to_string(), "team not found: Sonics");
}

#[test]
fn unrecognized_queries_are_errors() {
    let err = answer("who is better").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Unrecognized(_)));
    assert_eq!(
        err.context.and_then(|c| c.query).as_deref(),
        Some("who is better")
    );
}
