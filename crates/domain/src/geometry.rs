use crate::address::AddressDecoder;
use crate::config::ConfigError;
use serde::Serialize;

/// Upper bound on `num_sets * associativity`. Every line is materialised up
/// front, so anything larger cannot be simulated in memory.
pub const MAX_CACHE_LINES: u64 = 1 << 26;

/// Validated cache shape.
///
/// Invariant: `num_sets * associativity * block_size == cache_size`, with
/// `block_size` and `num_sets` both powers of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheGeometry {
    cache_size: u64,
    block_size: u64,
    associativity: u64,
    num_sets: u64,
}

impl CacheGeometry {
    pub fn new(cache_size: u64, block_size: u64, associativity: u64) -> Result<Self, ConfigError> {
        if cache_size == 0 {
            return Err(ConfigError::Geometry("cache_size must be positive".to_string()));
        }
        if block_size == 0 {
            return Err(ConfigError::Geometry("block_size must be positive".to_string()));
        }
        if associativity == 0 {
            return Err(ConfigError::Geometry(
                "associativity must be at least 1".to_string(),
            ));
        }
        if !block_size.is_power_of_two() {
            return Err(ConfigError::Geometry(format!(
                "block_size {} is not a power of two",
                block_size
            )));
        }

        let bytes_per_set = block_size.checked_mul(associativity).ok_or_else(|| {
            ConfigError::Geometry(format!(
                "block_size {} x associativity {} overflows",
                block_size, associativity
            ))
        })?;

        if bytes_per_set > cache_size || cache_size % bytes_per_set != 0 {
            return Err(ConfigError::Geometry(format!(
                "cache_size {} is not a positive multiple of block_size x associativity ({})",
                cache_size, bytes_per_set
            )));
        }

        let num_sets = cache_size / bytes_per_set;
        if !num_sets.is_power_of_two() {
            return Err(ConfigError::Geometry(format!(
                "num_sets {} is not a power of two",
                num_sets
            )));
        }

        // bytes_per_set <= cache_size, so num_sets * associativity <= cache_size
        // and the product cannot overflow.
        let lines = num_sets * associativity;
        if lines > MAX_CACHE_LINES {
            return Err(ConfigError::Geometry(format!(
                "{} lines exceed the supported maximum of {}",
                lines, MAX_CACHE_LINES
            )));
        }

        Ok(Self {
            cache_size,
            block_size,
            associativity,
            num_sets,
        })
    }

    /// Same capacity and line size, different number of ways.
    pub fn with_associativity(&self, associativity: u64) -> Result<Self, ConfigError> {
        Self::new(self.cache_size, self.block_size, associativity)
    }

    pub fn decoder(&self) -> AddressDecoder {
        AddressDecoder::new(self.block_size, self.num_sets)
    }

    pub fn cache_size(&self) -> u64 {
        self.cache_size
    }

    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    pub fn associativity(&self) -> u64 {
        self.associativity
    }

    pub fn num_sets(&self) -> u64 {
        self.num_sets
    }
}
