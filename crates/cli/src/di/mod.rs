use cachesim_application::ports::{AddressSource, CacheFactory, ReportWriter};
use cachesim_application::use_cases::{RunSimulationUseCase, SweepAssociativityUseCase};
use cachesim_domain::Config;
use cachesim_infrastructure::cache::SetAssociativeCacheFactory;
use cachesim_infrastructure::report::JsonReportWriter;
use cachesim_infrastructure::trace::TraceFileSource;
use std::sync::Arc;

pub struct SimulationServices {
    pub factory: Arc<dyn CacheFactory>,
    pub run_simulation: RunSimulationUseCase,
    pub sweep_associativity: SweepAssociativityUseCase,
}

impl SimulationServices {
    pub fn new(config: &Config) -> Self {
        let source: Arc<dyn AddressSource> =
            Arc::new(TraceFileSource::new(config.trace_file.as_str()));
        let writer: Arc<dyn ReportWriter> =
            Arc::new(JsonReportWriter::new(config.output_file.as_str()));
        let factory: Arc<dyn CacheFactory> = Arc::new(SetAssociativeCacheFactory);

        Self {
            run_simulation: RunSimulationUseCase::new(source.clone(), writer.clone()),
            sweep_associativity: SweepAssociativityUseCase::new(source, factory.clone(), writer),
            factory,
        }
    }
}
