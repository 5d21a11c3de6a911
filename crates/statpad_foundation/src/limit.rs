//! Game-count limits ("last 10 games").

use std::fmt;
use std::num::NonZeroU32;

/// A positive bound on the number of most-recent games to consider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GameLimit(NonZeroU32);

impl GameLimit {
    /// Creates a limit, or `None` for zero.
    #[must_use]
    pub const fn new(count: u32) -> Option<Self> {
        match NonZeroU32::new(count) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// The number of games.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// The number of games as a collection length.
    #[must_use]
    pub fn as_len(self) -> usize {
        usize::try_from(self.0.get()).unwrap_or(usize::MAX)
    }
}

impl fmt::Display for GameLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
