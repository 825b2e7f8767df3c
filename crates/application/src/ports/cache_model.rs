use cachesim_domain::{AccessOutcome, CacheGeometry};

/// A simulated cache that classifies each address as hit or miss.
///
/// Implementations own their recency clock; accesses must be applied one at a
/// time, in trace order.
pub trait CacheModel: Send {
    fn access(&mut self, address: u64) -> AccessOutcome;

    fn geometry(&self) -> CacheGeometry;

    /// Misses that displaced a resident line.
    fn evictions(&self) -> u64;

    /// Misses that landed in a never-used way.
    fn cold_fills(&self) -> u64;
}

/// Builds fresh, empty caches; used when one run needs several independent
/// instances.
pub trait CacheFactory: Send + Sync {
    fn build(&self, geometry: CacheGeometry, replacement_policy: &str) -> Box<dyn CacheModel>;
}
