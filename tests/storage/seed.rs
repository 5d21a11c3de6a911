//! Seed data tests

use statpad_foundation::{GameLimit, Season};
use statpad_storage::Catalog;
use statpad_storage::seed::{CURRENT_SEASON, FIRST_SEASON, NBA_TEAMS, load_sample};

#[test]
fn seeded_franchises_and_seasons() {
    let catalog = Catalog::seeded().unwrap();
    assert_eq!(catalog.team_count(), NBA_TEAMS.len());
    assert_eq!(
        catalog.seasons().count(),
        usize::from(CURRENT_SEASON - FIRST_SEASON + 1)
    );
    assert_eq!(catalog.current_season(), Some(Season::starting(CURRENT_SEASON).unwrap()));
    assert_eq!(catalog.player_count(), 0);
}

#[test]
fn conferences_split_evenly() {
    let catalog = Catalog::seeded().unwrap();
    let east = catalog
        .teams()
        .filter(|t| t.conference.as_deref() == Some("East"))
        .count();
    assert_eq!(east, 15);
}

#[test]
fn sample_answers_every_query_kind() {
    let catalog = Catalog::sample().unwrap();
    let current = Season::parse("2023-24").unwrap();

    assert!(catalog.lookup_player_season_stats("Stephen Curry", current).is_some());
    assert!(
        catalog
            .lookup_two_players_season_stats("Stephen Curry", "LeBron James", current)
            .is_complete()
    );
    assert_eq!(
        catalog
            .lookup_head_to_head_games("Stephen Curry", "LeBron James", None, GameLimit::new(2))
            .len(),
        2
    );
    let record = catalog
        .lookup_team_comparison("Lakers", "Warriors", Some(current), true, None)
        .unwrap();
    assert_eq!(record.game_logs.len(), 2);
}

#[test]
fn sample_needs_franchises() {
    let mut catalog = Catalog::new();
    assert!(load_sample(&mut catalog).is_err());
}
