// logmask/src/commands/mask.rs
//! The `mask` command: masks a file or directory tree and reports the counts.
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result, anyhow};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io;

use logmask_core::{MaskRulesConfig, RunOptions, RunPlan, run_plan_with_options};

use crate::cli::MaskCommand;
use crate::commands::print_validation_errors;
use crate::ui::output_format::{info_msg, warn_msg};
use crate::ui::summary;

/// Turns the parsed arguments into a core [`RunPlan`].
pub fn build_plan(cmd: &MaskCommand) -> Result<RunPlan> {
    let plan = match &cmd.rules.rules {
        Some(path) => {
            debug!("Using rule file {}", path.display());
            RunPlan::from_rules_path(&cmd.input, &cmd.output, path, cmd.suffix.as_str(), cmd.dry_run)
        }
        None => {
            debug!("Using the built-in rule set.");
            let config = MaskRulesConfig::load_default_rules().context("Failed to load built-in rules")?;
            RunPlan::from_config(&cmd.input, &cmd.output, config, cmd.suffix.as_str(), cmd.dry_run)
        }
    };
    Ok(plan)
}

/// Runs the `mask` command.
pub fn run_mask(cmd: &MaskCommand, quiet: bool) -> Result<()> {
    info!("Starting mask operation.");
    let plan = build_plan(cmd)?;
    let options = RunOptions {
        write_report: !cmd.no_report,
    };

    let outcome = match run_plan_with_options(&plan, options) {
        Ok(outcome) => outcome,
        Err(e) => {
            if print_validation_errors(&e) {
                return Err(anyhow!("Rule configuration is invalid; nothing was masked."));
            }
            return Err(e).with_context(|| format!("Masking {} failed", plan.input_path.display()));
        }
    };

    if !quiet && !cmd.no_summary {
        let use_color = io::stderr().is_terminal();
        summary::print_summary(&mut io::stderr(), &outcome.report, &outcome.config, plan.dry_run, use_color)
            .context("Failed to print summary")?;
    }

    if !quiet {
        if outcome.report.files.is_empty() {
            warn_msg(format!("No files found under {}.", plan.input_path.display()));
        } else if plan.dry_run {
            info_msg(format!(
                "Dry run: {} file(s) scanned, nothing written.",
                outcome.report.files.len()
            ));
        } else {
            info_msg(format!(
                "Masked {} file(s) into {}.",
                outcome.report.files.len(),
                plan.output_root.display()
            ));
        }
    }

    // The report path is the command's only stdout output, for scripting.
    if let Some(path) = &outcome.report_path {
        println!("{}", path.display());
    }

    info!("Mask operation completed.");
    Ok(())
}
