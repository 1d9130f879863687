// logmask-core/src/engine.rs
//! Defines the core `MaskingEngine` trait and the per-text-unit result type.
//!
//! The trait decouples the file pipeline from the concrete matching
//! implementation. The file processor only ever talks to a
//! `&dyn MaskingEngine`.
//!
//! License: MIT OR APACHE 2.0

use std::collections::BTreeMap;

use crate::sanitizers::compiler::CompiledRules;

/// Outcome of masking one unit of text (one line in the file pipeline).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MaskResult {
    /// The masked text, or the untouched input on a dry run.
    pub output_text: String,
    /// Matches per rule id. Rules with zero matches have no entry.
    pub counts_per_rule: BTreeMap<String, u64>,
    /// Sum of all per-rule counts.
    pub total_count: u64,
}

/// A pluggable masking engine.
pub trait MaskingEngine {
    /// Applies the engine's rules, in order, to `text`.
    ///
    /// # Dry-run contract
    ///
    /// The counts returned for `dry_run = true` are identical to the counts
    /// for `dry_run = false` on the same input. Implementations must perform
    /// the real substitution chain internally even on a dry run, because
    /// each rule sees the output of the rules before it. Only the returned
    /// `output_text` differs: on a dry run it is the original `text`.
    fn mask(&self, text: &str, dry_run: bool) -> MaskResult;

    /// The compiled rules this engine applies.
    fn compiled_rules(&self) -> &CompiledRules;
}
