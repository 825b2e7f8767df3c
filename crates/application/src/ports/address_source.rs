use cachesim_domain::DomainError;

/// Lazy sequence of byte addresses; an `Err` item ends the run.
pub type AddressStream<'a> = Box<dyn Iterator<Item = Result<u64, DomainError>> + Send + 'a>;

/// Producer of memory-reference addresses.
///
/// Restartable: every call to [`addresses`](AddressSource::addresses) starts
/// from the beginning of the underlying trace, so several replays can read the
/// same source independently.
pub trait AddressSource: Send + Sync {
    fn addresses(&self) -> Result<AddressStream<'_>, DomainError>;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
}
