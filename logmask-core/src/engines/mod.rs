// logmask-core/src/engines/mod.rs
//! Concrete `MaskingEngine` implementations.
//!
//! Each engine lives in its own file and is declared here.

pub mod regex_engine;
