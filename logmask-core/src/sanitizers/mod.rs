//! Rule compilation for logmask.
//!
//! Turns validated declarative rules (see `config`) into compiled regular
//! expressions ready for the masking engines. Validation itself lives in
//! `validators`; compilation assumes it has already passed.

pub mod compiler;
