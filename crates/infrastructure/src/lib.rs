//! Cache simulator infrastructure: cache model, trace input, report output
pub mod cache;
pub mod report;
pub mod trace;
