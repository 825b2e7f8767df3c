pub mod file_source;
pub mod parser;
pub mod static_source;

pub use file_source::TraceFileSource;
pub use parser::{parse_trace_line, AccessKind, MemoryReference};
pub use static_source::StaticAddressSource;
