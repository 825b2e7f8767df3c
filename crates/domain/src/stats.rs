use crate::access::AccessOutcome;
use serde::{Deserialize, Serialize};

/// Cycles charged for every access.
pub const HIT_TIME_CYCLES: f64 = 1.0;
/// Extra cycles charged for every miss.
pub const MISS_PENALTY_CYCLES: f64 = 10.0;

/// Running counters for one simulation run.
///
/// Derived metrics are computed on demand from the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    accesses: u64,
    hits: u64,
    misses: u64,
}

impl SimulationStats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&mut self, outcome: AccessOutcome) {
        self.accesses += 1;
        match outcome {
            AccessOutcome::Hit => self.hits += 1,
            AccessOutcome::Miss => self.misses += 1,
        }
    }

    pub fn accesses(&self) -> u64 {
        self.accesses
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn hit_rate(&self) -> f64 {
        if self.accesses > 0 {
            self.hits as f64 / self.accesses as f64
        } else {
            0.0
        }
    }

    pub fn miss_rate(&self) -> f64 {
        if self.accesses > 0 {
            self.misses as f64 / self.accesses as f64
        } else {
            0.0
        }
    }

    /// `hit_time + miss_rate * miss_penalty`; zero when nothing was accessed.
    pub fn amat(&self) -> f64 {
        if self.accesses > 0 {
            HIT_TIME_CYCLES + self.miss_rate() * MISS_PENALTY_CYCLES
        } else {
            0.0
        }
    }

    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            total_accesses: self.accesses,
            hits: self.hits,
            misses: self.misses,
            hit_rate: self.hit_rate(),
            miss_rate: self.miss_rate(),
            amat: self.amat(),
        }
    }
}

/// Final document handed to the report writers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub total_accesses: u64,
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
    pub miss_rate: f64,
    pub amat: f64,
}

/// One row of an associativity sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub associativity: u64,
    pub num_sets: u64,
    pub report: SimulationReport,
}
