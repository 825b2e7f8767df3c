pub mod active;
pub mod evict_first;
pub mod lru;
pub mod policy;
pub mod strategy;

pub use active::ActiveEvictionPolicy;
pub use evict_first::EvictFirstPolicy;
pub use lru::LruPolicy;
pub use policy::EvictionPolicy;
pub use strategy::EvictionStrategy;
