//! Season identifiers.
//!
//! Seasons are written in many ways (`2023-24`, `2023-2024`, `2023/24`); the
//! canonical form is `YYYY-YY`. Every season that leaves the parser or enters
//! the catalog is a [`Season`], which can only hold the canonical form.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A season identifier in canonical `YYYY-YY` form.
///
/// Parsing checks syntax only. A value such as `2023-27` is a well-formed
/// season token; whether the two years are consecutive is answered by
/// [`Season::is_consecutive`] and enforced where seasons are stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Season {
    start_year: u16,
    end_digits: u8,
}

impl Season {
    /// Creates the season that starts in `start_year` and ends the year after.
    ///
    /// # Errors
    ///
    /// Returns an error if `start_year` does not have four digits.
    pub fn starting(start_year: u16) -> Result<Self> {
        if !(1000..=9999).contains(&start_year) {
            return Err(Error::invalid_season(start_year.to_string()));
        }
        let end_digits = u8::try_from((start_year + 1) % 100)
            .map_err(|_| Error::invalid_season(start_year.to_string()))?;
        Ok(Self {
            start_year,
            end_digits,
        })
    }

    /// Parses any accepted season spelling into canonical form.
    ///
    /// Accepted: `YYYY-YY`, `YYYY-YYYY`, `YYYY/YY`, `YYYY/YYYY`. A four-digit
    /// end year is truncated to its last two digits.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not one of the accepted spellings.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let bytes = trimmed.as_bytes();

        let well_formed = matches!(bytes.len(), 7 | 9)
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && matches!(bytes[4], b'-' | b'/')
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(Error::invalid_season(raw));
        }

        let start_year: u16 = trimmed[..4]
            .parse()
            .map_err(|_| Error::invalid_season(raw))?;
        let end_digits: u8 = trimmed[trimmed.len() - 2..]
            .parse()
            .map_err(|_| Error::invalid_season(raw))?;

        Ok(Self {
            start_year,
            end_digits,
        })
    }

    /// Returns true if `raw` is a season token in any accepted spelling.
    #[must_use]
    pub fn looks_like(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    /// The four-digit year the season starts in.
    #[must_use]
    pub const fn start_year(self) -> u16 {
        self.start_year
    }

    /// The full year the season ends in, inferred from the two end digits.
    ///
    /// `1999-00` ends in 2000.
    #[must_use]
    pub const fn end_year(self) -> u32 {
        let century = (self.start_year as u32 / 100) * 100;
        let end = century + self.end_digits as u32;
        if end < self.start_year as u32 {
            end + 100
        } else {
            end
        }
    }

    /// Returns true if the end year directly follows the start year.
    #[must_use]
    pub const fn is_consecutive(self) -> bool {
        (self.start_year + 1) % 100 == self.end_digits as u16
    }

    /// Returns the season that follows this one.
    ///
    /// # Errors
    ///
    /// Returns an error past year 9998.
    pub fn next(self) -> Result<Self> {
        Self::starting(self.start_year + 1)
    }
}

/// Normalizes a season token to canonical `YYYY-YY` form.
///
/// Idempotent: normalizing an already canonical token returns it unchanged.
///
/// # Errors
///
/// Returns an error if `raw` is not a season token.
pub fn normalize_season(raw: &str) -> Result<String> {
    Season::parse(raw).map(|s| s.to_string())
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.start_year, self.end_digits)
    }
}

impl FromStr for Season {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Season {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Season> for String {
    fn from(season: Season) -> Self {
        season.to_string()
    }
}
