//! Cache simulator domain layer
pub mod access;
pub mod address;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod stats;

pub use access::AccessOutcome;
pub use address::{AddressDecoder, DecodedAddress};
pub use config::{CliOverrides, Config, ConfigError, LogFormat, LoggingConfig};
pub use errors::DomainError;
pub use geometry::{CacheGeometry, MAX_CACHE_LINES};
pub use stats::{SimulationReport, SimulationStats, SweepPoint, HIT_TIME_CYCLES, MISS_PENALTY_CYCLES};
