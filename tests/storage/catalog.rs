//! Catalog maintenance tests
//!
//! Tests that inserts enforce the catalog's referential invariants.

use chrono::NaiveDate;
use statpad_foundation::{ErrorKind, Season};
use statpad_storage::{
    BoxLine, Catalog, GameId, GameType, NewGame, NewTeam, PlayerId, SeasonAverages, StatLine,
    TeamId,
};

fn season(start: u16) -> Season {
    Season::starting(start).unwrap()
}

fn new_team<'a>(abbreviation: &'a str, name: &'a str, city: &'a str) -> NewTeam<'a> {
    NewTeam {
        abbreviation,
        name,
        city,
        ..NewTeam::default()
    }
}

fn two_teams() -> (Catalog, TeamId, TeamId) {
    let mut catalog = Catalog::new();
    let bos = catalog.insert_team(new_team("BOS", "Boston Celtics", "Boston")).unwrap();
    let mia = catalog.insert_team(new_team("MIA", "Miami Heat", "Miami")).unwrap();
    catalog.insert_season(season(2023), true).unwrap();
    (catalog, bos, mia)
}

fn new_game(home: TeamId, away: TeamId) -> NewGame {
    NewGame {
        season: season(2023),
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        home,
        away,
        home_score: 110,
        away_score: 101,
        game_type: GameType::RegularSeason,
    }
}

// =============================================================================
// Teams
// =============================================================================

#[test]
fn team_abbreviations_are_unique_ignoring_case() {
    let (mut catalog, _, _) = two_teams();
    let err = catalog
        .insert_team(new_team("bos", "Boston Redux", "Boston"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateTeam(ref a) if a == "BOS"));
}

#[test]
fn team_lookup_by_abbreviation() {
    let (catalog, bos, _) = two_teams();
    assert_eq!(catalog.team_by_abbreviation("bos").map(|t| t.id), Some(bos));
    assert!(catalog.team_by_abbreviation("XXX").is_none());
}

#[test]
fn blank_team_is_rejected() {
    let mut catalog = Catalog::new();
    let err = catalog.insert_team(new_team(" ", "Nobody", "Nowhere")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidRecord(_)));
}

// =============================================================================
// Seasons
// =============================================================================

#[test]
fn seasons_must_be_consecutive() {
    let mut catalog = Catalog::new();
    let err = catalog
        .insert_season(Season::parse("2023-27").unwrap(), false)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidSeason(_)));
}

#[test]
fn only_one_current_season() {
    let mut catalog = Catalog::new();
    catalog.insert_season(season(2022), true).unwrap();
    catalog.insert_season(season(2023), true).unwrap();
    assert_eq!(catalog.current_season(), Some(season(2023)));
    assert!(!catalog.season_info(season(2022)).unwrap().is_current);
}

// =============================================================================
// Players and season lines
// =============================================================================

#[test]
fn player_names_are_unique_ignoring_case() {
    let (mut catalog, bos, _) = two_teams();
    catalog.insert_player("Jayson Tatum", Some("F"), Some(bos)).unwrap();
    assert!(catalog.insert_player("jayson  tatum", None, None).is_err());
    assert_eq!(catalog.find_player("JAYSON TATUM").unwrap().name, "Jayson Tatum");
}

#[test]
fn player_team_must_exist() {
    let mut catalog = Catalog::new();
    let err = catalog.insert_player("Nobody", None, Some(TeamId(99))).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TeamNotFound(_)));
}

#[test]
fn season_averages_need_player_and_season() {
    let (mut catalog, bos, _) = two_teams();
    let tatum = catalog.insert_player("Jayson Tatum", None, Some(bos)).unwrap();

    let line = |player: PlayerId, season: Season, points: f64| SeasonAverages {
        player,
        season,
        team: Some(bos),
        line: StatLine {
            points,
            ..StatLine::default()
        },
    };

    let err = catalog
        .record_season_averages(line(PlayerId(42), season(2023), 20.0))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::PlayerNotFound(_)));

    let err = catalog
        .record_season_averages(line(tatum, season(2019), 20.0))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SeasonNotFound(_)));

    catalog.record_season_averages(line(tatum, season(2023), 20.0)).unwrap();
    catalog.record_season_averages(line(tatum, season(2023), 26.9)).unwrap();
    let stats = catalog
        .lookup_player_season_stats("Jayson Tatum", season(2023))
        .unwrap();
    assert!((stats.line.points - 26.9).abs() < f64::EPSILON);
    assert_eq!(catalog.lookup_player_career_stats("Jayson Tatum").len(), 1);
}

// =============================================================================
// Games and box lines
// =============================================================================

#[test]
fn games_need_known_distinct_teams_and_season() {
    let (mut catalog, bos, mia) = two_teams();

    let err = catalog.insert_game(new_game(bos, bos)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidRecord(_)));

    let err = catalog.insert_game(new_game(bos, TeamId(77))).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TeamNotFound(_)));

    let mut game = new_game(bos, mia);
    game.season = season(2010);
    let err = catalog.insert_game(game).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SeasonNotFound(_)));

    let id = catalog.insert_game(new_game(bos, mia)).unwrap();
    let game = catalog.game(id).unwrap();
    assert!(game.home_win());
    assert_eq!(game.winner(), bos);
}

#[test]
fn box_lines_must_match_the_game() {
    let (mut catalog, bos, mia) = two_teams();
    let nyk = catalog.insert_team(new_team("NYK", "New York Knicks", "New York")).unwrap();
    let tatum = catalog.insert_player("Jayson Tatum", None, Some(bos)).unwrap();
    let game = catalog.insert_game(new_game(bos, mia)).unwrap();

    let line = |game: GameId, team: TeamId| BoxLine {
        game,
        player: tatum,
        team,
        minutes: 38.0,
        points: 30,
        rebounds: 8,
        assists: 5,
    };

    let err = catalog.record_box_line(line(GameId(500), bos)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::GameNotFound(500)));

    let err = catalog.record_box_line(line(game, nyk)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidRecord(_)));

    catalog.record_box_line(line(game, bos)).unwrap();
    assert_eq!(catalog.box_line(game, tatum).unwrap().points, 30);
}

#[test]
fn clones_are_independent() {
    let (catalog, bos, mia) = two_teams();
    let mut edited = catalog.clone();
    edited.insert_game(new_game(bos, mia)).unwrap();
    assert_eq!(catalog.game_count(), 0);
    assert_eq!(edited.game_count(), 1);
    assert_ne!(catalog, edited);
}
