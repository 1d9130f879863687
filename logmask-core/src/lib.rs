// logmask-core/src/lib.rs
//! # Logmask Core Library
//!
//! `logmask-core` applies an ordered list of regular-expression substitution
//! rules to text, replacing sensitive substrings (emails, tokens, passwords)
//! with placeholders while counting every match per rule and in total. It
//! also drives those rules over a file or a whole directory tree, writing
//! masked copies that mirror the input structure.
//!
//! ## Modules
//!
//! * `config`: Declarative rules (`MaskRuleConfig`, `MaskRulesConfig`) and their JSON form.
//! * `validators`: Collects every defect of a rule set instead of failing fast.
//! * `sanitizers`: Compiles validated rules into regexes (`compile_rules`).
//! * `engine`: The `MaskingEngine` trait and the per-line `MaskResult`.
//! * `engines`: Concrete engines, currently `RegexEngine`.
//! * `paths`: Output path derivation with suffix injection.
//! * `collector`: Deterministic enumeration of input files.
//! * `processor`: The file pipeline (`FileProcessor`).
//! * `report`: Per-file and per-run reports, and the JSON `ReportWriter`.
//! * `headless`: `RunPlan` and the one-shot `run_plan` entry point.
//! * `debug_log`: PII-safe debug logging of matched text.
//! * `errors`: The `MaskError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use logmask_core::{MaskRuleConfig, MaskRulesConfig, MaskingEngine, RegexEngine};
//!
//! fn main() -> Result<(), logmask_core::MaskError> {
//!     let config = MaskRulesConfig::new([MaskRuleConfig::new(
//!         "email",
//!         "Email address",
//!         r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
//!         "[MASKED_EMAIL]",
//!     )]);
//!
//!     let engine = RegexEngine::from_config(&config)?;
//!
//!     let result = engine.mask("mail=a@example.com", false);
//!     assert_eq!(result.output_text, "mail=[MASKED_EMAIL]");
//!     assert_eq!(result.total_count, 1);
//!
//!     // A dry run reports the same counts but leaves the text alone.
//!     let dry = engine.mask("mail=a@example.com", true);
//!     assert_eq!(dry.output_text, "mail=a@example.com");
//!     assert_eq!(dry.counts_per_rule, result.counts_per_rule);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`MaskError`]. Rule problems surface as a single
//! `MaskError::Validation` listing every defect; a bad input path is
//! `MaskError::InvalidInput`; file failures are `MaskError::Io` with the path.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod collector;
pub mod config;
pub mod debug_log;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod paths;
pub mod processor;
pub mod report;
pub mod sanitizers;
pub mod validators;

/// Re-exports the declarative rule model.
pub use config::{MaskRuleConfig, MaskRulesConfig, RuleFlag, SUPPORTED_VERSION};

/// Re-exports the custom error type.
pub use errors::MaskError;

/// Re-exports the engine trait, its result type and the regex engine.
pub use engine::{MaskResult, MaskingEngine};
pub use engines::regex_engine::{mask_text, RegexEngine};

/// Re-exports rule validation and compilation.
pub use sanitizers::compiler::{compile_rules, CompiledRule, CompiledRules};
pub use validators::{validate, validate_or_fail};

/// Re-exports the file pipeline building blocks.
pub use collector::{collect, InputRef};
pub use paths::{map_output_path, suffixed_name};
pub use processor::FileProcessor;
pub use report::{FileReport, ReportWriter, RunReport};

/// Re-exports types and functions for one-shot, non-interactive runs.
pub use headless::{run_plan, run_plan_with_options, RulesSource, RunOptions, RunOutcome, RunPlan};
