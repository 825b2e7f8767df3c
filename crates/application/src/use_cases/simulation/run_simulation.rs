use super::driver::simulate;
use crate::ports::{AddressSource, CacheModel, ReportWriter};
use cachesim_domain::{DomainError, SimulationReport};
use std::sync::Arc;
use tracing::{error, info};

pub struct RunSimulationUseCase {
    source: Arc<dyn AddressSource>,
    writer: Arc<dyn ReportWriter>,
}

impl RunSimulationUseCase {
    pub fn new(source: Arc<dyn AddressSource>, writer: Arc<dyn ReportWriter>) -> Self {
        Self { source, writer }
    }

    /// Replays the whole trace through `cache` and persists the report.
    ///
    /// `cache` should be freshly built; its state carries over otherwise.
    pub fn execute(&self, cache: &mut dyn CacheModel) -> Result<SimulationReport, DomainError> {
        let geometry = cache.geometry();
        info!(
            source = %self.source.describe(),
            cache_size = geometry.cache_size(),
            block_size = geometry.block_size(),
            associativity = geometry.associativity(),
            num_sets = geometry.num_sets(),
            "Starting simulation"
        );

        let addresses = self.source.addresses()?;
        let stats = simulate(addresses, cache).inspect_err(|e| {
            error!(error = %e, "Simulation aborted");
        })?;

        info!(
            accesses = stats.accesses(),
            hits = stats.hits(),
            misses = stats.misses(),
            evictions = cache.evictions(),
            cold_fills = cache.cold_fills(),
            "Simulation complete"
        );

        let report = stats.report();
        self.writer.write_report(&report)?;
        Ok(report)
    }
}
