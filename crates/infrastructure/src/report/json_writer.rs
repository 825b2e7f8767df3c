use cachesim_application::ports::ReportWriter;
use cachesim_domain::{DomainError, SimulationReport, SweepPoint};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes reports as pretty-printed JSON, replacing the file on each write.
pub struct JsonReportWriter {
    path: PathBuf,
}

impl JsonReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| DomainError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.unwritable(e))?;
        }
        std::fs::write(&self.path, json).map_err(|e| self.unwritable(e))?;

        info!(path = %self.path.display(), "Report written");
        Ok(())
    }

    fn unwritable(&self, err: std::io::Error) -> DomainError {
        DomainError::ReportUnwritable {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

impl ReportWriter for JsonReportWriter {
    fn write_report(&self, report: &SimulationReport) -> Result<(), DomainError> {
        self.write_json(report)
    }

    fn write_sweep(&self, points: &[SweepPoint]) -> Result<(), DomainError> {
        self.write_json(points)
    }
}
