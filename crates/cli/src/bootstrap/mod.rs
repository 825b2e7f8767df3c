mod logging;

pub use logging::init_logging;

use cachesim_domain::{CliOverrides, Config};

/// Loads and validates the configuration. Runs before logging is set up, so
/// failures are only reported through the returned error.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
