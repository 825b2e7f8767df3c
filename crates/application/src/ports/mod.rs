mod address_source;
mod cache_model;
mod report_writer;

pub use address_source::{AddressSource, AddressStream};
pub use cache_model::{CacheFactory, CacheModel};
pub use report_writer::ReportWriter;
