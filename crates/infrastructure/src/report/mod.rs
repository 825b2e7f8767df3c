pub mod console;
pub mod json_writer;

pub use console::{render_summary, render_sweep};
pub use json_writer::JsonReportWriter;
