//! Team name resolution.
//!
//! A free-text team subject ("Lakers", "GSW", "Golden State", "sixers") is
//! resolved against the catalog's teams in four tiers:
//!
//! 1. exact abbreviation or exact full name
//! 2. exact nickname, alias or city
//! 3. substring of the full name
//! 4. substring of the abbreviation
//!
//! All comparisons ignore case. The first tier with any hit decides: one hit
//! resolves, several hits are ambiguous. Later tiers are not consulted.

use statpad_foundation::{Error, Result};
use tracing::trace;

use crate::schema::Team;

type Tier = fn(&Team, &str) -> bool;

const TIERS: [(&str, Tier); 4] = [
    ("exact", |team, q| {
        team.abbreviation.to_lowercase() == q || team.name.to_lowercase() == q
    }),
    ("nickname", |team, q| {
        team.nickname().to_lowercase() == q
            || team.city.to_lowercase() == q
            || team.aliases.iter().any(|a| a == q)
    }),
    ("name-substring", |team, q| team.name.to_lowercase().contains(q)),
    ("abbreviation-substring", |team, q| {
        team.abbreviation.to_lowercase().contains(q)
    }),
];

/// Resolves a team subject among `teams`.
///
/// # Errors
///
/// Returns `TeamNotFound` if no tier matches (or the query is blank), and
/// `AmbiguousTeam` with the candidates' full names, sorted, if the deciding
/// tier matches more than one team.
pub fn resolve_team<'a>(teams: &[&'a Team], query: &str) -> Result<&'a Team> {
    let needle = query.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    if needle.is_empty() {
        return Err(Error::team_not_found(query));
    }

    for (tier, matches) in TIERS {
        let hits: Vec<&Team> = teams.iter().copied().filter(|t| matches(t, &needle)).collect();
        match hits.as_slice() {
            [] => continue,
            [team] => {
                trace!(query, tier, team = %team.abbreviation, "team resolved");
                return Ok(*team);
            }
            _ => {
                let mut candidates: Vec<String> = hits.iter().map(|t| t.name.clone()).collect();
                candidates.sort();
                return Err(Error::ambiguous_team(query, candidates));
            }
        }
    }

    Err(Error::team_not_found(query))
}
