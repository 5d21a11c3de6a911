//! Catalog snapshot tests
//!
//! Saving and loading preserves the catalog and every lookup over it.

use proptest::prelude::*;
use statpad_foundation::{ErrorKind, Season};
use statpad_runtime::{from_bytes, load_from_file, save_to_file, to_bytes};
use statpad_storage::{Catalog, SeasonAverages, StatLine};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("statpad-{}-{name}.msgpack", std::process::id()))
}

#[test]
fn empty_catalog_round_trip() {
    let catalog = Catalog::new();
    assert_eq!(from_bytes(&to_bytes(&catalog).unwrap()).unwrap(), catalog);
}

#[test]
fn sample_file_round_trip() {
    let catalog = Catalog::sample().unwrap();
    let path = temp_path("sample");
    save_to_file(&catalog, &path).unwrap();
    let restored = load_from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(restored, catalog);
    assert_eq!(
        restored.lookup_head_to_head_games("Stephen Curry", "LeBron James", None, None),
        catalog.lookup_head_to_head_games("Stephen Curry", "LeBron James", None, None)
    );
    assert_eq!(restored.current_season(), catalog.current_season());
}

#[test]
fn restored_catalog_keeps_counting_ids() {
    let catalog = Catalog::sample().unwrap();
    let mut restored = from_bytes(&to_bytes(&catalog).unwrap()).unwrap();
    let id = restored.insert_player("Nikola Jokic", Some("C"), None).unwrap();
    assert!(catalog.player(id).is_none());
    assert_eq!(restored.player_count(), catalog.player_count() + 1);
}

#[test]
fn truncated_snapshot_is_rejected() {
    let bytes = to_bytes(&Catalog::sample().unwrap()).unwrap();
    let err = from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SerializationError(_)));
}

#[test]
fn missing_file_has_path_context() {
    let err = load_from_file("/nonexistent/dir/statpad.msgpack").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
    assert_eq!(
        err.context.and_then(|c| c.path).as_deref(),
        Some("/nonexistent/dir/statpad.msgpack")
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn season_lines_survive_round_trip(points in 0.0f64..60.0, games in 0u16..82, start in 2015u16..2025) {
        let mut catalog = Catalog::seeded().unwrap();
        let team = catalog.team_by_abbreviation("DEN").unwrap().id;
        let player = catalog.insert_player("Nikola Jokic", Some("C"), Some(team)).unwrap();
        let season = Season::starting(start).unwrap();
        catalog.record_season_averages(SeasonAverages {
            player,
            season,
            team: Some(team),
            line: StatLine { games_played: games, points, ..StatLine::default() },
        }).unwrap();

        let restored = from_bytes(&to_bytes(&catalog).unwrap()).unwrap();
        let stats = restored.lookup_player_season_stats("Nikola Jokic", season).unwrap();
        prop_assert_eq!(stats.line.games_played, games);
        prop_assert_eq!(stats.line.points.to_bits(), points.to_bits());
        prop_assert_eq!(restored, catalog);
    }
}
