use super::clock::RecencyClock;
use super::eviction::{ActiveEvictionPolicy, EvictionStrategy};
use super::metrics::CacheMetrics;
use super::set::CacheSet;
use cachesim_application::ports::CacheModel;
use cachesim_domain::{AccessOutcome, AddressDecoder, CacheGeometry};
use tracing::{debug, info, trace};

/// Set-associative cache: `num_sets` sets of `associativity` ways each, one
/// recency clock for the whole cache.
pub struct SetAssociativeCache {
    geometry: CacheGeometry,
    decoder: AddressDecoder,
    sets: Vec<CacheSet>,
    clock: RecencyClock,
    eviction_policy: ActiveEvictionPolicy,
    metrics: CacheMetrics,
}

impl SetAssociativeCache {
    pub fn new(geometry: CacheGeometry, strategy: EvictionStrategy) -> Self {
        let eviction_policy = ActiveEvictionPolicy::from_strategy(strategy);

        info!(
            cache_size = geometry.cache_size(),
            block_size = geometry.block_size(),
            associativity = geometry.associativity(),
            num_sets = geometry.num_sets(),
            eviction_strategy = eviction_policy.strategy().as_str(),
            "Initializing cache"
        );

        let sets = (0..geometry.num_sets())
            .map(|_| CacheSet::new(geometry.associativity() as usize))
            .collect();

        Self {
            geometry,
            decoder: geometry.decoder(),
            sets,
            clock: RecencyClock::new(),
            eviction_policy,
            metrics: CacheMetrics::default(),
        }
    }

    pub fn sets(&self) -> &[CacheSet] {
        &self.sets
    }

    pub fn clock(&self) -> RecencyClock {
        self.clock
    }

    pub fn metrics(&self) -> CacheMetrics {
        self.metrics
    }

    pub fn strategy(&self) -> EvictionStrategy {
        self.eviction_policy.strategy()
    }
}

impl CacheModel for SetAssociativeCache {
    fn access(&mut self, address: u64) -> AccessOutcome {
        let decoded = self.decoder.decode(address);
        let access = self.sets[decoded.set_index].access(
            decoded.tag,
            &mut self.clock,
            &self.eviction_policy,
        );

        match (access.outcome, access.evicted) {
            (AccessOutcome::Hit, _) => {}
            (AccessOutcome::Miss, Some(evicted_tag)) => {
                self.metrics.evictions += 1;
                debug!(
                    address,
                    set = decoded.set_index,
                    way = access.way,
                    evicted_tag,
                    tag = decoded.tag,
                    "Evicted line"
                );
            }
            (AccessOutcome::Miss, None) => self.metrics.cold_fills += 1,
        }

        trace!(
            address,
            set = decoded.set_index,
            tag = decoded.tag,
            outcome = access.outcome.as_str(),
            "Cache access"
        );

        access.outcome
    }

    fn geometry(&self) -> CacheGeometry {
        self.geometry
    }

    fn evictions(&self) -> u64 {
        self.metrics.evictions
    }

    fn cold_fills(&self) -> u64 {
        self.metrics.cold_fills
    }
}
