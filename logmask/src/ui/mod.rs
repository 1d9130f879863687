// logmask/src/ui/mod.rs
//! Console output helpers: coloured status messages and the run summary.

pub mod output_format;
pub mod summary;
