use super::eviction::EvictionStrategy;
use super::storage::SetAssociativeCache;
use cachesim_application::ports::{CacheFactory, CacheModel};
use cachesim_domain::CacheGeometry;

pub struct SetAssociativeCacheFactory;

impl CacheFactory for SetAssociativeCacheFactory {
    fn build(&self, geometry: CacheGeometry, replacement_policy: &str) -> Box<dyn CacheModel> {
        Box::new(SetAssociativeCache::new(
            geometry,
            EvictionStrategy::from_name(replacement_policy),
        ))
    }
}
