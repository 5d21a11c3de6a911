//! Response rendering.

use std::fmt::Write;

use statpad_foundation::{Error, ErrorKind, Result};
use statpad_storage::{ComparisonRecord, GameEntry, StatsRecord, TeamSummary};

use crate::config::OutputFormat;
use crate::response::{QueryResponse, ResponseData};

/// Renders a response in the given format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(response: &QueryResponse, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(response)),
        OutputFormat::Json => render_json(response),
    }
}

/// Renders a response as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(response: &QueryResponse) -> Result<String> {
    serde_json::to_string_pretty(response)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Renders a response as human-readable text.
#[must_use]
pub fn render_text(response: &QueryResponse) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_data(&mut out, &response.data);
    out.truncate(out.trim_end().len());
    out
}

fn write_data(out: &mut String, data: &ResponseData) -> std::fmt::Result {
    match data {
        ResponseData::Stats { stats } => write_stats(out, stats),
        ResponseData::Comparison(pair) => {
            writeln!(out, "Season {}", pair.season)?;
            write_side(out, pair.a.as_ref())?;
            write_side(out, pair.b.as_ref())
        }
        ResponseData::Career {
            player_a,
            player_b,
            careers,
        } => {
            for (name, seasons) in [(player_a, &careers.a), (player_b, &careers.b)] {
                if seasons.is_empty() {
                    writeln!(out, "{name}: no seasons on record")?;
                    continue;
                }
                writeln!(out, "{name}")?;
                for stats in seasons {
                    writeln!(out, "  {}", stat_summary(stats))?;
                }
            }
            Ok(())
        }
        ResponseData::GameLogs {
            player_a,
            player_b,
            season,
            game_logs,
            ..
        } => {
            let scope = season.map_or_else(|| "all seasons".to_string(), |s| s.to_string());
            writeln!(out, "{player_a} vs {player_b} ({scope})")?;
            if game_logs.is_empty() {
                writeln!(out, "  no games found")?;
            }
            for game in game_logs {
                write_game(out, game)?;
            }
            Ok(())
        }
        ResponseData::Teams(record) => write_teams(out, record),
        ResponseData::Error { message } => writeln!(out, "error: {message}"),
    }
}

fn stat_summary(stats: &StatsRecord) -> String {
    let line = &stats.line;
    format!(
        "{} {}: {:.1} pts, {:.1} reb, {:.1} ast in {} games",
        stats.season,
        stats.team.as_deref().unwrap_or("---"),
        line.points,
        line.rebounds,
        line.assists,
        line.games_played
    )
}

fn write_stats(out: &mut String, stats: &StatsRecord) -> std::fmt::Result {
    writeln!(out, "{}", stats.player)?;
    writeln!(out, "  {}", stat_summary(stats))
}

fn write_side(out: &mut String, stats: Option<&StatsRecord>) -> std::fmt::Result {
    match stats {
        Some(stats) => write_stats(out, stats),
        None => writeln!(out, "  (no line for this season)"),
    }
}

fn write_game(out: &mut String, game: &GameEntry) -> std::fmt::Result {
    writeln!(
        out,
        "  {} {} {}-{} {}  |  {}/{}/{} vs {}/{}/{}",
        game.date,
        game.away,
        game.away_score,
        game.home_score,
        game.home,
        game.a.points,
        game.a.rebounds,
        game.a.assists,
        game.b.points,
        game.b.rebounds,
        game.b.assists
    )
}

fn write_team(out: &mut String, team: &TeamSummary) -> std::fmt::Result {
    writeln!(
        out,
        "  {} ({}): {}-{}, {} head-to-head",
        team.name, team.abbreviation, team.wins, team.losses, team.head_to_head_wins
    )
}

fn write_teams(out: &mut String, record: &ComparisonRecord) -> std::fmt::Result {
    let scope = record
        .season
        .map_or_else(|| "all seasons".to_string(), |s| s.to_string());
    writeln!(
        out,
        "{} vs {} ({scope})",
        record.team_a.abbreviation, record.team_b.abbreviation
    )?;
    write_team(out, &record.team_a)?;
    write_team(out, &record.team_b)?;
    for game in &record.game_logs {
        writeln!(
            out,
            "  {} {} {}-{} {}",
            game.date, game.away, game.away_score, game.home_score, game.home
        )?;
    }
    Ok(())
}
