use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionStrategy {
    Lru,
    FallbackEvictFirst,
}

impl EvictionStrategy {
    /// Maps a configured policy name to a strategy.
    ///
    /// Only the exact name `"LRU"` selects LRU; every other string, including
    /// `"FIFO"`, `"random"` or `"lru"`, selects the evict-first fallback.
    pub fn from_name(name: &str) -> Self {
        if name == "LRU" {
            Self::Lru
        } else {
            Self::FallbackEvictFirst
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::FallbackEvictFirst)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lru => "lru",
            Self::FallbackEvictFirst => "evict-first",
        }
    }
}

impl fmt::Display for EvictionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
