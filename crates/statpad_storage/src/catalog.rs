//! The statistics catalog.
//!
//! The `Catalog` stores teams, seasons, players, season averages, games and
//! per-game box lines in persistent collections, so cloning one is O(1) and
//! shares structure with its source.

use im::{HashMap, OrdMap, OrdSet};
use statpad_foundation::{Error, ErrorKind, GameLimit, Result, Season};
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::records::{
    CareerPair, ComparisonRecord, GameEntry, GameLine, PlayerPair, StatsRecord, TeamGameEntry,
    TeamSummary,
};
use crate::resolve;
use crate::schema::{
    BoxLine, Game, GameId, NewGame, NewTeam, Player, PlayerId, SeasonAverages, SeasonInfo, Team,
    TeamId,
};

/// In-memory statistics catalog.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Catalog {
    teams: OrdMap<TeamId, Team>,
    /// Uppercase abbreviation -> team
    abbreviations: HashMap<String, TeamId>,
    seasons: OrdMap<Season, SeasonInfo>,
    players: OrdMap<PlayerId, Player>,
    /// Lowercase name -> player
    player_names: HashMap<String, PlayerId>,
    averages: OrdMap<PlayerId, OrdMap<Season, SeasonAverages>>,
    games: OrdMap<GameId, Game>,
    box_lines: OrdMap<GameId, OrdMap<PlayerId, BoxLine>>,
    /// Player -> games with a box line
    player_games: HashMap<PlayerId, OrdSet<GameId>>,
    next_team: u32,
    next_player: u32,
    next_game: u32,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Teams ---

    /// Adds a team.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateTeam` if the abbreviation is taken, and
    /// `InvalidRecord` if the abbreviation or name is blank.
    pub fn insert_team(&mut self, team: NewTeam<'_>) -> Result<TeamId> {
        let abbreviation = team.abbreviation.trim().to_uppercase();
        let name = team.name.trim();
        if abbreviation.is_empty() || name.is_empty() {
            return Err(Error::invalid_record("team needs an abbreviation and a name"));
        }
        if self.abbreviations.contains_key(&abbreviation) {
            return Err(Error::new(ErrorKind::DuplicateTeam(abbreviation)));
        }

        self.next_team += 1;
        let id = TeamId(self.next_team);
        trace!(%id, %abbreviation, "team inserted");
        self.abbreviations.insert(abbreviation.clone(), id);
        self.teams.insert(
            id,
            Team {
                id,
                abbreviation,
                name: name.to_string(),
                city: team.city.trim().to_string(),
                conference: team.conference.map(str::to_string),
                division: team.division.map(str::to_string),
                aliases: team.aliases.iter().map(|a| a.to_lowercase()).collect(),
            },
        );
        Ok(id)
    }

    /// Gets a team by id.
    #[must_use]
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(&id)
    }

    /// Gets a team by abbreviation, ignoring case.
    #[must_use]
    pub fn team_by_abbreviation(&self, abbreviation: &str) -> Option<&Team> {
        self.abbreviations
            .get(&abbreviation.trim().to_uppercase())
            .and_then(|id| self.teams.get(id))
    }

    /// Iterates over teams in id order.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    /// Number of teams.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Resolves a free-text team subject.
    ///
    /// See [`resolve::resolve_team`] for the tie-break rules.
    ///
    /// # Errors
    ///
    /// Returns `TeamNotFound` or `AmbiguousTeam`.
    pub fn resolve_team(&self, query: &str) -> Result<&Team> {
        let teams: Vec<&Team> = self.teams.values().collect();
        resolve::resolve_team(&teams, query)
    }

    // --- Seasons ---

    /// Adds (or replaces) a season. Marking a season current clears the flag
    /// on every other season.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeason` if the end year does not follow the start year.
    pub fn insert_season(&mut self, season: Season, is_current: bool) -> Result<()> {
        if !season.is_consecutive() {
            return Err(Error::invalid_season(season.to_string()));
        }
        if is_current {
            let previous: Vec<Season> = self
                .seasons
                .values()
                .filter(|info| info.is_current)
                .map(|info| info.season)
                .collect();
            for other in previous {
                if let Some(info) = self.seasons.get_mut(&other) {
                    info.is_current = false;
                }
            }
        }
        trace!(%season, is_current, "season inserted");
        self.seasons.insert(season, SeasonInfo { season, is_current });
        Ok(())
    }

    /// Returns true if the season is known.
    #[must_use]
    pub fn has_season(&self, season: Season) -> bool {
        self.seasons.contains_key(&season)
    }

    /// Gets a season's details.
    #[must_use]
    pub fn season_info(&self, season: Season) -> Option<&SeasonInfo> {
        self.seasons.get(&season)
    }

    /// Iterates over seasons, oldest first.
    pub fn seasons(&self) -> impl Iterator<Item = &SeasonInfo> {
        self.seasons.values()
    }

    /// The season marked current, if any.
    #[must_use]
    pub fn current_season(&self) -> Option<Season> {
        self.seasons
            .values()
            .find(|info| info.is_current)
            .map(|info| info.season)
    }

    // --- Players ---

    /// Adds a player.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecord` for a blank or duplicate name, and
    /// `TeamNotFound` for an unknown team.
    pub fn insert_player(
        &mut self,
        name: &str,
        position: Option<&str>,
        team: Option<TeamId>,
    ) -> Result<PlayerId> {
        let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
        if name.is_empty() {
            return Err(Error::invalid_record("player needs a name"));
        }
        let key = name.to_lowercase();
        if self.player_names.contains_key(&key) {
            return Err(Error::invalid_record(format!("duplicate player: {name}")));
        }
        if let Some(team) = team {
            self.require_team(team)?;
        }

        self.next_player += 1;
        let id = PlayerId(self.next_player);
        trace!(%id, %name, "player inserted");
        self.player_names.insert(key, id);
        self.players.insert(
            id,
            Player {
                id,
                name,
                position: position.map(str::to_string),
                team,
            },
        );
        Ok(id)
    }

    /// Gets a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    /// Finds a player by exact name, ignoring case and extra whitespace.
    #[must_use]
    pub fn find_player(&self, name: &str) -> Option<&Player> {
        let key = name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        self.player_names.get(&key).and_then(|id| self.players.get(id))
    }

    /// Iterates over players in id order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Records a player's season line, replacing any earlier line for the
    /// same player and season.
    ///
    /// # Errors
    ///
    /// Returns `PlayerNotFound`, `SeasonNotFound` or `TeamNotFound` when a
    /// referenced record is missing.
    pub fn record_season_averages(&mut self, averages: SeasonAverages) -> Result<()> {
        if !self.players.contains_key(&averages.player) {
            return Err(Error::player_not_found(averages.player.to_string()));
        }
        self.require_season(averages.season)?;
        if let Some(team) = averages.team {
            self.require_team(team)?;
        }
        trace!(player = %averages.player, season = %averages.season, "season averages recorded");
        let player = averages.player;
        let seasons = self
            .averages
            .get(&player)
            .cloned()
            .unwrap_or_default()
            .update(averages.season, averages);
        self.averages.insert(player, seasons);
        Ok(())
    }

    // --- Games ---

    /// Adds a game.
    ///
    /// # Errors
    ///
    /// Returns `SeasonNotFound` or `TeamNotFound` when a referenced record is
    /// missing, and `InvalidRecord` if a team plays itself.
    pub fn insert_game(&mut self, game: NewGame) -> Result<GameId> {
        self.require_season(game.season)?;
        self.require_team(game.home)?;
        self.require_team(game.away)?;
        if game.home == game.away {
            return Err(Error::invalid_record("a team cannot play itself"));
        }

        self.next_game += 1;
        let id = GameId(self.next_game);
        trace!(%id, date = %game.date, "game inserted");
        self.games.insert(
            id,
            Game {
                id,
                season: game.season,
                date: game.date,
                home: game.home,
                away: game.away,
                home_score: game.home_score,
                away_score: game.away_score,
                game_type: game.game_type,
            },
        );
        Ok(id)
    }

    /// Gets a game by id.
    #[must_use]
    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.get(&id)
    }

    /// Iterates over games in id order.
    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.games.values()
    }

    /// Number of games.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Records a player's line in a game, replacing any earlier line.
    ///
    /// # Errors
    ///
    /// Returns `GameNotFound`, `PlayerNotFound` or `TeamNotFound` when a
    /// referenced record is missing, and `InvalidRecord` if the team did not
    /// play in the game.
    pub fn record_box_line(&mut self, line: BoxLine) -> Result<()> {
        let game = self
            .games
            .get(&line.game)
            .ok_or_else(|| Error::new(ErrorKind::GameNotFound(line.game.0)))?;
        if !self.players.contains_key(&line.player) {
            return Err(Error::player_not_found(line.player.to_string()));
        }
        self.require_team(line.team)?;
        if !game.involves(line.team) {
            return Err(Error::invalid_record(format!(
                "{} did not play in {}",
                line.team, line.game
            )));
        }

        let games = self
            .player_games
            .get(&line.player)
            .cloned()
            .unwrap_or_default()
            .update(line.game);
        self.player_games.insert(line.player, games);
        let (game, player) = (line.game, line.player);
        let lines = self
            .box_lines
            .get(&game)
            .cloned()
            .unwrap_or_default()
            .update(player, line);
        self.box_lines.insert(game, lines);
        Ok(())
    }

    /// Gets a player's line in a game.
    #[must_use]
    pub fn box_line(&self, game: GameId, player: PlayerId) -> Option<&BoxLine> {
        self.box_lines.get(&game).and_then(|lines| lines.get(&player))
    }

    // --- Lookups ---

    /// A player's line for one season. The name match is exact, ignoring case.
    #[must_use]
    pub fn lookup_player_season_stats(&self, name: &str, season: Season) -> Option<StatsRecord> {
        let player = self.find_player(name)?;
        let record = self
            .averages
            .get(&player.id)
            .and_then(|seasons| seasons.get(&season))
            .map(|averages| self.stats_record(player, averages));
        if record.is_none() {
            debug!(player = %player.name, %season, "no season line");
        }
        record
    }

    /// Both players' lines for one season.
    #[must_use]
    pub fn lookup_two_players_season_stats(&self, a: &str, b: &str, season: Season) -> PlayerPair {
        PlayerPair {
            season,
            a: self.lookup_player_season_stats(a, season),
            b: self.lookup_player_season_stats(b, season),
        }
    }

    /// A player's lines for every recorded season, oldest first.
    #[must_use]
    pub fn lookup_player_career_stats(&self, name: &str) -> Vec<StatsRecord> {
        let Some(player) = self.find_player(name) else {
            return Vec::new();
        };
        self.averages
            .get(&player.id)
            .map(|seasons| {
                seasons
                    .values()
                    .map(|averages| self.stats_record(player, averages))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Both players' career lines.
    #[must_use]
    pub fn lookup_two_players_career_stats(&self, a: &str, b: &str) -> CareerPair {
        CareerPair {
            a: self.lookup_player_career_stats(a),
            b: self.lookup_player_career_stats(b),
        }
    }

    /// Games in which both players appeared for opposing teams, most recent
    /// first (date, then game id, descending), optionally limited to one
    /// season and truncated to `limit`. An unknown player yields no games.
    #[must_use]
    pub fn lookup_head_to_head_games(
        &self,
        a: &str,
        b: &str,
        season: Option<Season>,
        limit: Option<GameLimit>,
    ) -> Vec<GameEntry> {
        let (Some(pa), Some(pb)) = (self.find_player(a), self.find_player(b)) else {
            debug!(a, b, "head-to-head with unknown player");
            return Vec::new();
        };
        let (Some(games_a), Some(games_b)) =
            (self.player_games.get(&pa.id), self.player_games.get(&pb.id))
        else {
            return Vec::new();
        };

        let mut entries: Vec<GameEntry> = games_a
            .iter()
            .filter(|id| games_b.contains(*id))
            .filter_map(|id| {
                let game = self.games.get(id)?;
                if season.is_some_and(|s| s != game.season) {
                    return None;
                }
                let line_a = self.box_line(*id, pa.id)?;
                let line_b = self.box_line(*id, pb.id)?;
                if line_a.team == line_b.team {
                    return None;
                }
                Some(GameEntry {
                    game: game.id,
                    date: game.date,
                    season: game.season,
                    home: self.abbreviation(game.home),
                    away: self.abbreviation(game.away),
                    home_score: game.home_score,
                    away_score: game.away_score,
                    home_win: game.home_win(),
                    game_type: game.game_type,
                    a: game_line(line_a),
                    b: game_line(line_b),
                })
            })
            .collect();

        entries.sort_by(|x, y| y.date.cmp(&x.date).then(y.game.cmp(&x.game)));
        if let Some(limit) = limit {
            entries.truncate(limit.as_len());
        }
        entries
    }

    /// Compares two teams over a season, or over all seasons when `season`
    /// is `None`. Game logs between the teams are listed most recent first
    /// when requested, truncated to `limit`.
    ///
    /// # Errors
    ///
    /// Returns `TeamNotFound`/`AmbiguousTeam` for a team that does not
    /// resolve, and `SeasonNotFound` for an unknown season.
    pub fn lookup_team_comparison(
        &self,
        a: &str,
        b: &str,
        season: Option<Season>,
        include_game_logs: bool,
        limit: Option<GameLimit>,
    ) -> Result<ComparisonRecord> {
        let team_a = self.resolve_team(a)?;
        let team_b = self.resolve_team(b)?;
        if let Some(season) = season {
            self.require_season(season)?;
        }

        let in_scope = |game: &&Game| season.is_none_or(|s| s == game.season);
        let mut meetings: Vec<&Game> = self
            .games
            .values()
            .filter(in_scope)
            .filter(|g| g.is_between(team_a.id, team_b.id))
            .collect();
        meetings.sort_by(|x, y| y.date.cmp(&x.date).then(y.id.cmp(&x.id)));

        let summary = |team: &Team| {
            let (mut wins, mut losses) = (0, 0);
            for game in self.games.values().filter(in_scope).filter(|g| g.involves(team.id)) {
                if game.winner() == team.id {
                    wins += 1;
                } else {
                    losses += 1;
                }
            }
            let head_to_head_wins = meetings.iter().filter(|g| g.winner() == team.id).count();
            TeamSummary {
                abbreviation: team.abbreviation.clone(),
                name: team.name.clone(),
                wins,
                losses,
                head_to_head_wins: u32::try_from(head_to_head_wins).unwrap_or(u32::MAX),
            }
        };

        let mut game_logs = Vec::new();
        if include_game_logs {
            let take = limit.map_or(meetings.len(), GameLimit::as_len);
            game_logs = meetings
                .iter()
                .take(take)
                .map(|game| TeamGameEntry {
                    game: game.id,
                    date: game.date,
                    season: game.season,
                    home: self.abbreviation(game.home),
                    away: self.abbreviation(game.away),
                    home_score: game.home_score,
                    away_score: game.away_score,
                    home_win: game.home_win(),
                })
                .collect();
        }

        debug!(
            a = %team_a.abbreviation,
            b = %team_b.abbreviation,
            meetings = meetings.len(),
            "team comparison"
        );
        Ok(ComparisonRecord {
            season,
            team_a: summary(team_a),
            team_b: summary(team_b),
            game_logs,
        })
    }

    // --- Helpers ---

    fn require_team(&self, id: TeamId) -> Result<()> {
        if self.teams.contains_key(&id) {
            Ok(())
        } else {
            Err(Error::team_not_found(id.to_string()))
        }
    }

    fn require_season(&self, season: Season) -> Result<()> {
        if self.seasons.contains_key(&season) {
            Ok(())
        } else {
            Err(Error::season_not_found(season.to_string()))
        }
    }

    fn abbreviation(&self, id: TeamId) -> String {
        self.teams
            .get(&id)
            .map_or_else(|| id.to_string(), |t| t.abbreviation.clone())
    }

    fn stats_record(&self, player: &Player, averages: &SeasonAverages) -> StatsRecord {
        let team = averages.team.and_then(|id| self.teams.get(&id));
        StatsRecord {
            player: player.name.clone(),
            position: player.position.clone(),
            team: team.map(|t| t.abbreviation.clone()),
            team_name: team.map(|t| t.name.clone()),
            season: averages.season,
            line: averages.line.clone(),
        }
    }
}

fn game_line(line: &BoxLine) -> GameLine {
    GameLine {
        points: line.points,
        rebounds: line.rebounds,
        assists: line.assists,
    }
}
