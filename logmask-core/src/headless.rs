// File: logmask-core/src/headless.rs

//! `headless.rs`
//! One-shot, non-interactive masking runs.
//!
//! A [`RunPlan`] gathers everything a front end collects from its user, and
//! [`run_plan`] executes it: load rules, validate, compile, process the
//! input tree and write the JSON run report.

use std::path::PathBuf;
use std::time::Instant;

use log::info;

use crate::config::MaskRulesConfig;
use crate::engines::regex_engine::RegexEngine;
use crate::errors::MaskError;
use crate::processor::FileProcessor;
use crate::report::{ReportWriter, RunReport};

/// Where a run's rules come from: a rule file or an in-memory rule set,
/// never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesSource {
    /// A JSON rule file, loaded when the plan runs.
    Path(PathBuf),
    /// Rules built in memory (defaults, or assembled by a front end).
    Inline(MaskRulesConfig),
}

impl RulesSource {
    /// Resolves the rule set, reading the file for [`RulesSource::Path`].
    pub fn load(&self) -> Result<MaskRulesConfig, MaskError> {
        match self {
            RulesSource::Path(path) => MaskRulesConfig::load_from_file(path),
            RulesSource::Inline(config) => Ok(config.clone()),
        }
    }
}

/// Everything needed for one masking run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    /// A single file or a directory.
    pub input_path: PathBuf,
    /// Root under which masked files and the run report are written.
    pub output_root: PathBuf,
    pub rules: RulesSource,
    /// Injected before each output file's extension. Empty means none.
    pub suffix: String,
    /// Count only; write no masked files.
    pub dry_run: bool,
}

impl RunPlan {
    pub fn from_rules_path(
        input_path: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        rules_path: impl Into<PathBuf>,
        suffix: impl Into<String>,
        dry_run: bool,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            output_root: output_root.into(),
            rules: RulesSource::Path(rules_path.into()),
            suffix: suffix.into(),
            dry_run,
        }
    }

    pub fn from_config(
        input_path: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        config: MaskRulesConfig,
        suffix: impl Into<String>,
        dry_run: bool,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            output_root: output_root.into(),
            rules: RulesSource::Inline(config),
            suffix: suffix.into(),
            dry_run,
        }
    }
}

/// What a completed run hands back to its caller.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: RunReport,
    /// The JSON report file, when one was written.
    pub report_path: Option<PathBuf>,
    /// The validated rule set the run used.
    pub config: MaskRulesConfig,
}

/// Options that shape a run without being part of the plan itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Write `report-*.json` into the output root.
    pub write_report: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { write_report: true }
    }
}

/// Executes `plan` with default options (report written).
pub fn run_plan(plan: &RunPlan) -> Result<RunOutcome, MaskError> {
    run_plan_with_options(plan, RunOptions::default())
}

/// Loads, validates and compiles the plan's rules, processes the input and,
/// if requested, writes the JSON run report.
///
/// Validation happens before any file is read, and reports every rule
/// defect at once via [`MaskError::Validation`].
pub fn run_plan_with_options(plan: &RunPlan, options: RunOptions) -> Result<RunOutcome, MaskError> {
    let started = Instant::now();

    let config = plan.rules.load()?;
    let engine = RegexEngine::from_config(&config)?;

    let report = FileProcessor::new().process(
        &plan.input_path,
        &plan.output_root,
        &engine,
        &plan.suffix,
        plan.dry_run,
    )?;

    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let report_path = if options.write_report {
        Some(ReportWriter::new().write(plan, &config, &report, duration_ms)?)
    } else {
        None
    };

    info!(
        "Masked {} file(s), {} replacement(s), in {} ms.",
        report.files.len(),
        report.total_count,
        duration_ms
    );

    Ok(RunOutcome {
        report,
        report_path,
        config,
    })
}
