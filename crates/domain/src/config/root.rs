use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use crate::geometry::CacheGeometry;

const LOCAL_TOML_PATH: &str = "cachesim.toml";
const LOCAL_JSON_PATH: &str = "config.json";

/// Main configuration structure for a simulation run.
///
/// The document is flat: cache geometry, policy name and the two file paths
/// sit at the top level, logging lives in its own table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Total cache capacity in bytes
    #[serde(default = "default_cache_size")]
    pub cache_size: u64,

    /// Line size in bytes (power of two)
    #[serde(default = "default_block_size")]
    pub block_size: u64,

    /// Ways per set
    #[serde(default = "default_associativity")]
    pub associativity: u64,

    /// `"LRU"`; any other name selects the evict-first fallback
    #[serde(default = "default_replacement_policy")]
    pub replacement_policy: String,

    #[serde(default = "default_trace_file")]
    pub trace_file: String,

    #[serde(default = "default_output_file")]
    pub output_file: String,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_size: default_cache_size(),
            block_size: default_block_size(),
            associativity: default_associativity(),
            replacement_policy: default_replacement_policy(),
            trace_file: default_trace_file(),
            output_file: default_output_file(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. cachesim.toml in current directory
    /// 3. config.json in current directory
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file; `.json` files are parsed as
    /// JSON, everything else as TOML.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        if is_json_path(path) {
            serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        }
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(size) = overrides.cache_size {
            self.cache_size = size;
        }
        if let Some(size) = overrides.block_size {
            self.block_size = size;
        }
        if let Some(ways) = overrides.associativity {
            self.associativity = ways;
        }
        if let Some(policy) = overrides.replacement_policy {
            self.replacement_policy = policy;
        }
        if let Some(trace) = overrides.trace_file {
            self.trace_file = trace;
        }
        if let Some(output) = overrides.output_file {
            self.output_file = output;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trace_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "trace_file cannot be empty".to_string(),
            ));
        }

        if self.output_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output_file cannot be empty".to_string(),
            ));
        }

        self.geometry().map(|_| ())
    }

    /// Validated cache geometry for this configuration.
    pub fn geometry(&self) -> Result<CacheGeometry, ConfigError> {
        CacheGeometry::new(self.cache_size, self.block_size, self.associativity)
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let serialized = if is_json_path(path) {
            serde_json::to_string_pretty(self)
                .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?
        } else {
            toml::to_string_pretty(self)
                .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?
        };
        std::fs::write(path, serialized).map_err(|e| ConfigError::FileWrite {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if Path::new(LOCAL_TOML_PATH).exists() {
            Some(LOCAL_TOML_PATH.to_string())
        } else if Path::new(LOCAL_JSON_PATH).exists() {
            Some(LOCAL_JSON_PATH.to_string())
        } else {
            None
        }
    }
}

fn is_json_path(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn default_cache_size() -> u64 {
    1024
}

fn default_block_size() -> u64 {
    64
}

fn default_associativity() -> u64 {
    2
}

fn default_replacement_policy() -> String {
    "LRU".to_string()
}

fn default_trace_file() -> String {
    "trace.txt".to_string()
}

fn default_output_file() -> String {
    "results.json".to_string()
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub cache_size: Option<u64>,
    pub block_size: Option<u64>,
    pub associativity: Option<u64>,
    pub replacement_policy: Option<String>,
    pub trace_file: Option<String>,
    pub output_file: Option<String>,
    pub log_level: Option<String>,
}
