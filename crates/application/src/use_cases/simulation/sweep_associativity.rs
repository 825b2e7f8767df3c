use super::driver::simulate;
use crate::ports::{AddressSource, CacheFactory, ReportWriter};
use cachesim_domain::{CacheGeometry, DomainError, SweepPoint};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

/// Replays one trace against several associativities of the same capacity.
///
/// Every point gets its own cache (and therefore its own recency clock) and
/// its own pass over the address source; points run on the rayon pool and
/// come back in the order requested.
pub struct SweepAssociativityUseCase {
    source: Arc<dyn AddressSource>,
    factory: Arc<dyn CacheFactory>,
    writer: Arc<dyn ReportWriter>,
}

impl SweepAssociativityUseCase {
    pub fn new(
        source: Arc<dyn AddressSource>,
        factory: Arc<dyn CacheFactory>,
        writer: Arc<dyn ReportWriter>,
    ) -> Self {
        Self {
            source,
            factory,
            writer,
        }
    }

    pub fn execute(
        &self,
        base: CacheGeometry,
        replacement_policy: &str,
        associativities: &[u64],
    ) -> Result<Vec<SweepPoint>, DomainError> {
        // Reject the whole sweep before any replay if one shape is invalid.
        let geometries = associativities
            .iter()
            .map(|&ways| base.with_associativity(ways))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            source = %self.source.describe(),
            points = geometries.len(),
            "Starting associativity sweep"
        );

        let points = geometries
            .par_iter()
            .map(|&geometry| self.run_point(geometry, replacement_policy))
            .collect::<Result<Vec<_>, _>>()?;

        self.writer.write_sweep(&points)?;
        Ok(points)
    }

    fn run_point(
        &self,
        geometry: CacheGeometry,
        replacement_policy: &str,
    ) -> Result<SweepPoint, DomainError> {
        let mut cache = self.factory.build(geometry, replacement_policy);
        let stats = simulate(self.source.addresses()?, cache.as_mut())?;

        debug!(
            associativity = geometry.associativity(),
            num_sets = geometry.num_sets(),
            hits = stats.hits(),
            misses = stats.misses(),
            "Sweep point finished"
        );

        Ok(SweepPoint {
            associativity: geometry.associativity(),
            num_sets: geometry.num_sets(),
            report: stats.report(),
        })
    }
}
