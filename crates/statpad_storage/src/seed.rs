//! Seed data: the 30 NBA franchises and recent seasons.

use statpad_foundation::{Error, Result, Season};
use tracing::info;

use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::schema::{BoxLine, GameType, NewGame, NewTeam, SeasonAverages, StatLine, TeamId};

/// First seeded season (`2015-16`).
pub const FIRST_SEASON: u16 = 2015;

/// Season in progress (`2024-25`).
pub const CURRENT_SEASON: u16 = 2024;

/// (abbreviation, full name, city, conference, division, aliases)
type TeamRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
);

/// The 30 NBA franchises.
pub const NBA_TEAMS: &[TeamRow] = &[
    ("ATL", "Atlanta Hawks", "Atlanta", "East", "Southeast", &[]),
    ("BOS", "Boston Celtics", "Boston", "East", "Atlantic", &[]),
    ("BKN", "Brooklyn Nets", "Brooklyn", "East", "Atlantic", &[]),
    ("CHA", "Charlotte Hornets", "Charlotte", "East", "Southeast", &[]),
    ("CHI", "Chicago Bulls", "Chicago", "East", "Central", &[]),
    ("CLE", "Cleveland Cavaliers", "Cleveland", "East", "Central", &["cavs"]),
    ("DAL", "Dallas Mavericks", "Dallas", "West", "Southwest", &["mavs"]),
    ("DEN", "Denver Nuggets", "Denver", "West", "Northwest", &[]),
    ("DET", "Detroit Pistons", "Detroit", "East", "Central", &[]),
    ("GSW", "Golden State Warriors", "Golden State", "West", "Pacific", &[]),
    ("HOU", "Houston Rockets", "Houston", "West", "Southwest", &[]),
    ("IND", "Indiana Pacers", "Indiana", "East", "Central", &[]),
    ("LAC", "Los Angeles Clippers", "Los Angeles", "West", "Pacific", &[]),
    ("LAL", "Los Angeles Lakers", "Los Angeles", "West", "Pacific", &[]),
    ("MEM", "Memphis Grizzlies", "Memphis", "West", "Southwest", &[]),
    ("MIA", "Miami Heat", "Miami", "East", "Southeast", &[]),
    ("MIL", "Milwaukee Bucks", "Milwaukee", "East", "Central", &[]),
    ("MIN", "Minnesota Timberwolves", "Minnesota", "West", "Northwest", &["wolves"]),
    ("NOP", "New Orleans Pelicans", "New Orleans", "West", "Southwest", &[]),
    ("NYK", "New York Knicks", "New York", "East", "Atlantic", &[]),
    ("OKC", "Oklahoma City Thunder", "Oklahoma City", "West", "Northwest", &[]),
    ("ORL", "Orlando Magic", "Orlando", "East", "Southeast", &[]),
    ("PHI", "Philadelphia 76ers", "Philadelphia", "East", "Atlantic", &["sixers"]),
    ("PHX", "Phoenix Suns", "Phoenix", "West", "Pacific", &[]),
    ("POR", "Portland Trail Blazers", "Portland", "West", "Northwest", &["trailblazers"]),
    ("SAC", "Sacramento Kings", "Sacramento", "West", "Pacific", &[]),
    ("SAS", "San Antonio Spurs", "San Antonio", "West", "Southwest", &[]),
    ("TOR", "Toronto Raptors", "Toronto", "East", "Atlantic", &[]),
    ("UTA", "Utah Jazz", "Utah", "West", "Northwest", &[]),
    ("WAS", "Washington Wizards", "Washington", "East", "Southeast", &[]),
];

/// Loads the NBA franchises into `catalog`.
///
/// # Errors
///
/// Returns `DuplicateTeam` if one of the abbreviations is already present.
pub fn load_teams(catalog: &mut Catalog) -> Result<()> {
    for &(abbreviation, name, city, conference, division, aliases) in NBA_TEAMS {
        catalog.insert_team(NewTeam {
            abbreviation,
            name,
            city,
            conference: Some(conference),
            division: Some(division),
            aliases,
        })?;
    }
    Ok(())
}

/// Loads seasons `first-(first+1)` through `current-(current+1)`, marking
/// the last one current.
///
/// # Errors
///
/// Returns `InvalidSeason` if a year does not have four digits.
pub fn load_seasons(catalog: &mut Catalog, first: u16, current: u16) -> Result<()> {
    for year in first..=current {
        catalog.insert_season(Season::starting(year)?, year == current)?;
    }
    Ok(())
}

/// (name, position, team, [(season start, games, points, rebounds, assists)])
type SamplePlayer = (
    &'static str,
    &'static str,
    &'static str,
    &'static [(u16, u16, f64, f64, f64)],
);

const SAMPLE_PLAYERS: &[SamplePlayer] = &[
    ("Stephen Curry", "G", "GSW", &[(2022, 56, 29.4, 6.1, 6.3), (2023, 74, 26.4, 4.5, 5.1)]),
    ("LeBron James", "F", "LAL", &[(2022, 55, 28.9, 8.3, 6.8), (2023, 71, 25.7, 7.3, 8.3)]),
    ("Jayson Tatum", "F", "BOS", &[(2023, 74, 26.9, 8.1, 4.9)]),
];

/// (season start, date, home, away, home score, away score, [(player, points, rebounds, assists)])
type SampleGame = (
    u16,
    (i32, u32, u32),
    &'static str,
    &'static str,
    u16,
    u16,
    &'static [(&'static str, u16, u16, u16)],
);

const SAMPLE_GAMES: &[SampleGame] = &[
    (2022, (2023, 3, 5), "LAL", "GSW", 113, 105, &[("Stephen Curry", 27, 5, 7), ("LeBron James", 28, 9, 6)]),
    (2023, (2024, 1, 27), "GSW", "LAL", 145, 144, &[("Stephen Curry", 46, 4, 3), ("LeBron James", 36, 20, 12)]),
    (2023, (2024, 3, 16), "LAL", "GSW", 128, 121, &[("Stephen Curry", 31, 3, 3), ("LeBron James", 40, 8, 9)]),
    (2023, (2024, 2, 1), "BOS", "LAL", 105, 114, &[("Jayson Tatum", 19, 10, 4), ("LeBron James", 25, 7, 10)]),
];

/// Loads a handful of players, season lines and games with illustrative
/// numbers, enough to exercise every query kind. Requires the franchises and
/// seasons to be loaded first.
///
/// # Errors
///
/// Returns the first catalog error, e.g. `TeamNotFound` on an empty catalog.
pub fn load_sample(catalog: &mut Catalog) -> Result<()> {
    for &(name, position, team, seasons) in SAMPLE_PLAYERS {
        let team = team_id(catalog, team)?;
        let player = catalog.insert_player(name, Some(position), Some(team))?;
        for &(start, games_played, points, rebounds, assists) in seasons {
            catalog.record_season_averages(SeasonAverages {
                player,
                season: Season::starting(start)?,
                team: Some(team),
                line: StatLine {
                    games_played,
                    points,
                    rebounds,
                    assists,
                    ..StatLine::default()
                },
            })?;
        }
    }

    for &(start, (y, m, d), home, away, home_score, away_score, lines) in SAMPLE_GAMES {
        let date = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| Error::invalid_record(format!("bad date {y}-{m}-{d}")))?;
        let (home, away) = (team_id(catalog, home)?, team_id(catalog, away)?);
        let game = catalog.insert_game(NewGame {
            season: Season::starting(start)?,
            date,
            home,
            away,
            home_score,
            away_score,
            game_type: GameType::RegularSeason,
        })?;
        for &(name, points, rebounds, assists) in lines {
            let Some(player) = catalog.find_player(name) else {
                continue;
            };
            let (player, team) = (player.id, player.team.unwrap_or(home));
            catalog.record_box_line(BoxLine {
                game,
                player,
                team,
                minutes: 36.0,
                points,
                rebounds,
                assists,
            })?;
        }
    }
    Ok(())
}

fn team_id(catalog: &Catalog, abbreviation: &str) -> Result<TeamId> {
    catalog
        .team_by_abbreviation(abbreviation)
        .map(|t| t.id)
        .ok_or_else(|| Error::team_not_found(abbreviation))
}

impl Catalog {
    /// A catalog with the 30 NBA franchises and the seasons `2015-16`
    /// through `2024-25`, the last one current. No players or games.
    ///
    /// # Errors
    ///
    /// Fails only if the catalog invariants reject the built-in data.
    pub fn seeded() -> Result<Self> {
        let mut catalog = Self::new();
        load_teams(&mut catalog)?;
        load_seasons(&mut catalog, FIRST_SEASON, CURRENT_SEASON)?;
        info!(
            teams = catalog.team_count(),
            seasons = catalog.seasons().count(),
            "catalog seeded"
        );
        Ok(catalog)
    }

    /// [`Catalog::seeded`] plus the illustrative players and games of
    /// [`load_sample`].
    ///
    /// # Errors
    ///
    /// Fails only if the catalog invariants reject the built-in data.
    pub fn sample() -> Result<Self> {
        let mut catalog = Self::seeded()?;
        load_sample(&mut catalog)?;
        Ok(catalog)
    }
}
