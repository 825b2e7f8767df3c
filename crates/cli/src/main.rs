use cachesim_domain::CliOverrides;
use cachesim_infrastructure::cache::EvictionStrategy;
use cachesim_infrastructure::report::{render_summary, render_sweep};
use clap::Parser;
use tracing::{info, warn};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "cachesim")]
#[command(version)]
#[command(about = "Set-associative cache simulator driven by pipeline traces")]
struct Cli {
    /// Configuration file path (TOML, or JSON with a .json extension)
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Cache size in bytes
    #[arg(long)]
    cache_size: Option<u64>,

    /// Block size in bytes
    #[arg(long)]
    block_size: Option<u64>,

    /// Ways per set
    #[arg(long)]
    associativity: Option<u64>,

    /// Replacement policy name ("LRU"; anything else evicts way 0)
    #[arg(long)]
    policy: Option<String>,

    /// Trace file path
    #[arg(short = 't', long, value_name = "FILE")]
    trace: Option<String>,

    /// Report output path
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Replay the trace once per associativity, e.g. 1,2,4,8
    #[arg(long, value_delimiter = ',', value_name = "LIST")]
    sweep_associativity: Vec<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        cache_size: cli.cache_size,
        block_size: cli.block_size,
        associativity: cli.associativity,
        replacement_policy: cli.policy.clone(),
        trace_file: cli.trace.clone(),
        output_file: cli.output.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting cachesim v{}", env!("CARGO_PKG_VERSION"));

    let geometry = config.geometry()?;

    if EvictionStrategy::from_name(&config.replacement_policy).is_fallback() {
        warn!(
            configured = %config.replacement_policy,
            "Replacement policy not recognized, falling back to evicting way 0"
        );
    }

    let services = di::SimulationServices::new(&config);

    if cli.sweep_associativity.is_empty() {
        let mut cache = services.factory.build(geometry, &config.replacement_policy);
        let report = services.run_simulation.execute(cache.as_mut())?;

        info!(path = %config.output_file, "Report saved");
        print!("{}", render_summary(&report));
    } else {
        let points = services.sweep_associativity.execute(
            geometry,
            &config.replacement_policy,
            &cli.sweep_associativity,
        )?;

        info!(path = %config.output_file, points = points.len(), "Sweep complete");
        print!("{}", render_sweep(&points));
    }

    Ok(())
}
