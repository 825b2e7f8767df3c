use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of presenting one address to the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessOutcome {
    Hit,
    Miss,
}

impl AccessOutcome {
    #[inline]
    pub fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Miss => "miss",
        }
    }
}

impl fmt::Display for AccessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => f.write_str("Hit"),
            Self::Miss => f.write_str("Miss"),
        }
    }
}
