use super::evict_first::EvictFirstPolicy;
use super::lru::LruPolicy;
use super::policy::EvictionPolicy;
use super::strategy::EvictionStrategy;
use crate::cache::line::CacheLine;

/// Eviction policy chosen once per cache, dispatched through a match rather
/// than a vtable.
pub enum ActiveEvictionPolicy {
    Lru(LruPolicy),
    EvictFirst(EvictFirstPolicy),
}

impl ActiveEvictionPolicy {
    pub fn from_strategy(strategy: EvictionStrategy) -> Self {
        match strategy {
            EvictionStrategy::Lru => Self::Lru(LruPolicy),
            EvictionStrategy::FallbackEvictFirst => Self::EvictFirst(EvictFirstPolicy),
        }
    }

    #[inline(always)]
    pub fn select_victim(&self, lines: &[CacheLine]) -> usize {
        match self {
            Self::Lru(p) => p.select_victim(lines),
            Self::EvictFirst(p) => p.select_victim(lines),
        }
    }

    pub fn strategy(&self) -> EvictionStrategy {
        match self {
            Self::Lru(_) => EvictionStrategy::Lru,
            Self::EvictFirst(_) => EvictionStrategy::FallbackEvictFirst,
        }
    }
}
