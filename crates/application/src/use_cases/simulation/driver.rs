use crate::ports::CacheModel;
use cachesim_domain::{DomainError, SimulationStats};

/// Feeds every address, in order, through `cache` and tallies the outcomes.
///
/// Stops at the first error produced by the address stream.
pub fn simulate<I>(addresses: I, cache: &mut dyn CacheModel) -> Result<SimulationStats, DomainError>
where
    I: IntoIterator<Item = Result<u64, DomainError>>,
{
    addresses
        .into_iter()
        .try_fold(SimulationStats::new(), |mut stats, address| {
            stats.record(cache.access(address?));
            Ok(stats)
        })
}
