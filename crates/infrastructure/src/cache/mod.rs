pub mod clock;
pub mod eviction;
pub mod factory;
pub mod line;
pub mod metrics;
pub mod set;
pub mod storage;

pub use clock::RecencyClock;
pub use eviction::{ActiveEvictionPolicy, EvictionStrategy};
pub use factory::SetAssociativeCacheFactory;
pub use line::CacheLine;
pub use metrics::CacheMetrics;
pub use set::CacheSet;
pub use storage::SetAssociativeCache;
