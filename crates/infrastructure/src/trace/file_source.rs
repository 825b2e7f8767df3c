use super::parser::parse_trace_line;
use cachesim_application::ports::{AddressSource, AddressStream};
use cachesim_domain::DomainError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Pipeline trace on disk, reopened on every pass.
pub struct TraceFileSource {
    path: PathBuf,
}

impl TraceFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unreadable(&self, err: std::io::Error) -> DomainError {
        DomainError::TraceUnreadable {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

impl AddressSource for TraceFileSource {
    fn addresses(&self) -> Result<AddressStream<'_>, DomainError> {
        let file = File::open(&self.path).map_err(|e| self.unreadable(e))?;

        let stream = BufReader::new(file)
            .lines()
            .enumerate()
            .filter_map(move |(index, line)| match line {
                Ok(line) => match parse_trace_line(&line) {
                    Some(reference) => Some(Ok(reference.address)),
                    None => {
                        trace!(line_number = index + 1, "Skipping trace line");
                        None
                    }
                },
                Err(e) => Some(Err(self.unreadable(e))),
            });

        Ok(Box::new(stream))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
