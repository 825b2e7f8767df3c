use cachesim_domain::{DomainError, SimulationReport, SweepPoint};

pub trait ReportWriter: Send + Sync {
    fn write_report(&self, report: &SimulationReport) -> Result<(), DomainError>;

    fn write_sweep(&self, points: &[SweepPoint]) -> Result<(), DomainError>;
}
