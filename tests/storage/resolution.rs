//! Team resolution tests
//!
//! The tie-break over the seeded franchises: exact abbreviation or name,
//! then nickname, alias or city, then substrings of the name, then of the
//! abbreviation.

use statpad_foundation::ErrorKind;
use statpad_storage::Catalog;

fn resolve(query: &str) -> Result<String, ErrorKind> {
    let catalog = Catalog::seeded().unwrap();
    catalog
        .resolve_team(query)
        .map(|t| t.abbreviation.clone())
        .map_err(|e| e.kind)
}

#[test]
fn exact_abbreviation_or_name() {
    assert_eq!(resolve("gsw").unwrap(), "GSW");
    assert_eq!(resolve("Los Angeles Lakers").unwrap(), "LAL");
    assert_eq!(resolve("IND").unwrap(), "IND");
}

#[test]
fn nickname_city_and_alias() {
    assert_eq!(resolve("Warriors").unwrap(), "GSW");
    assert_eq!(resolve("Golden State").unwrap(), "GSW");
    assert_eq!(resolve("wolves").unwrap(), "MIN");
    assert_eq!(resolve("76ers").unwrap(), "PHI");
}

#[test]
fn whitespace_and_case_are_ignored() {
    assert_eq!(resolve("  golden   STATE ").unwrap(), "GSW");
}

#[test]
fn nickname_beats_substring() {
    // "nets" is also inside "Charlotte Hornets"
    assert_eq!(resolve("Nets").unwrap(), "BKN");
}

#[test]
fn name_substring() {
    assert_eq!(resolve("trail blazers").unwrap(), "POR");
    assert_eq!(resolve("state").unwrap(), "GSW");
}

#[test]
fn abbreviation_substring_is_last() {
    assert_eq!(resolve("ny").unwrap(), "NYK");
}

#[test]
fn shared_city_is_ambiguous() {
    match resolve("Los Angeles") {
        Err(ErrorKind::AmbiguousTeam { query, candidates }) => {
            assert_eq!(query, "Los Angeles");
            assert_eq!(candidates, vec!["Los Angeles Clippers", "Los Angeles Lakers"]);
        }
        other => panic!("expected ambiguity, got {other:?}"),
    }
}

#[test]
fn shared_substring_is_ambiguous() {
    assert!(matches!(
        resolve("Sa"),
        Err(ErrorKind::AmbiguousTeam { ref candidates, .. }) if candidates.len() == 2
    ));
}

#[test]
fn unknown_and_blank() {
    assert!(matches!(resolve("Sonics"), Err(ErrorKind::TeamNotFound(_))));
    assert!(matches!(resolve("   "), Err(ErrorKind::TeamNotFound(_))));
}
