/// Replacement counters for one cache instance.
///
/// Hits and misses are tallied by the simulation itself; these only split the
/// misses by what happened to the victim way.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheMetrics {
    pub evictions: u64,
    pub cold_fills: u64,
}
