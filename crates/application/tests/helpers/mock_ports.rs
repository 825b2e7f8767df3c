#![allow(dead_code)]

use cachesim_application::ports::{
    AddressSource, AddressStream, CacheFactory, CacheModel, ReportWriter,
};
use cachesim_domain::{
    AccessOutcome, CacheGeometry, DomainError, SimulationReport, SweepPoint,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub struct MockAddressSource {
    addresses: Vec<u64>,
    fail_after: Option<usize>,
    open_count: AtomicUsize,
}

impl MockAddressSource {
    pub fn new(addresses: Vec<u64>) -> Self {
        Self {
            addresses,
            fail_after: None,
            open_count: AtomicUsize::new(0),
        }
    }

    pub fn failing_after(addresses: Vec<u64>, fail_after: usize) -> Self {
        Self {
            addresses,
            fail_after: Some(fail_after),
            open_count: AtomicUsize::new(0),
        }
    }

    pub fn open_count(&self) -> usize {
        self.open_count.load(Ordering::SeqCst)
    }
}

impl AddressSource for MockAddressSource {
    fn addresses(&self) -> Result<AddressStream<'_>, DomainError> {
        self.open_count.fetch_add(1, Ordering::SeqCst);

        let fail_after = self.fail_after;
        let items = self
            .addresses
            .iter()
            .copied()
            .enumerate()
            .map(move |(i, address)| match fail_after {
                Some(limit) if i >= limit => Err(DomainError::TraceUnreadable {
                    path: "mock".to_string(),
                    reason: "simulated read failure".to_string(),
                }),
                _ => Ok(address),
            });
        Ok(Box::new(items))
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

#[derive(Default)]
pub struct MockReportWriter {
    reports: Mutex<Vec<SimulationReport>>,
    sweeps: Mutex<Vec<Vec<SweepPoint>>>,
    should_fail: bool,
}

impl MockReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn reports(&self) -> Vec<SimulationReport> {
        self.reports.lock().unwrap().clone()
    }

    pub fn sweeps(&self) -> Vec<Vec<SweepPoint>> {
        self.sweeps.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.should_fail {
            return Err(DomainError::ReportUnwritable {
                path: "mock".to_string(),
                reason: "simulated write failure".to_string(),
            });
        }
        Ok(())
    }
}

impl ReportWriter for MockReportWriter {
    fn write_report(&self, report: &SimulationReport) -> Result<(), DomainError> {
        self.check()?;
        self.reports.lock().unwrap().push(report.clone());
        Ok(())
    }

    fn write_sweep(&self, points: &[SweepPoint]) -> Result<(), DomainError> {
        self.check()?;
        self.sweeps.lock().unwrap().push(points.to_vec());
        Ok(())
    }
}

/// Unbounded cache: every block misses once, then always hits.
pub struct MemoizingCache {
    geometry: CacheGeometry,
    seen: HashSet<(usize, u64)>,
    accesses: Vec<u64>,
}

impl MemoizingCache {
    pub fn new(geometry: CacheGeometry) -> Self {
        Self {
            geometry,
            seen: HashSet::new(),
            accesses: Vec::new(),
        }
    }

    pub fn accesses(&self) -> &[u64] {
        &self.accesses
    }
}

impl CacheModel for MemoizingCache {
    fn access(&mut self, address: u64) -> AccessOutcome {
        self.accesses.push(address);
        let decoded = self.geometry.decoder().decode(address);
        if self.seen.insert((decoded.set_index, decoded.tag)) {
            AccessOutcome::Miss
        } else {
            AccessOutcome::Hit
        }
    }

    fn geometry(&self) -> CacheGeometry {
        self.geometry
    }

    fn evictions(&self) -> u64 {
        0
    }

    fn cold_fills(&self) -> u64 {
        self.seen.len() as u64
    }
}

#[derive(Default)]
pub struct MockCacheFactory {
    built: Mutex<Vec<(CacheGeometry, String)>>,
}

impl MockCacheFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn built(&self) -> Vec<(CacheGeometry, String)> {
        self.built.lock().unwrap().clone()
    }
}

impl CacheFactory for MockCacheFactory {
    fn build(&self, geometry: CacheGeometry, replacement_policy: &str) -> Box<dyn CacheModel> {
        self.built
            .lock()
            .unwrap()
            .push((geometry, replacement_policy.to_string()));
        Box::new(MemoizingCache::new(geometry))
    }
}
