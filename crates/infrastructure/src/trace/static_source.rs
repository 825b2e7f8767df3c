use cachesim_application::ports::{AddressSource, AddressStream};
use cachesim_domain::DomainError;

/// Address sequence held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticAddressSource {
    addresses: Vec<u64>,
}

impl StaticAddressSource {
    pub fn new(addresses: Vec<u64>) -> Self {
        Self { addresses }
    }
}

impl AddressSource for StaticAddressSource {
    fn addresses(&self) -> Result<AddressStream<'_>, DomainError> {
        Ok(Box::new(
            self.addresses.iter().copied().map(Ok::<u64, DomainError>),
        ))
    }

    fn describe(&self) -> String {
        format!("{} in-memory addresses", self.addresses.len())
    }
}
