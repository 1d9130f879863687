// logmask/src/commands/validate.rs
//! The `validate` command: checks a rule file without touching any input.
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result, bail};
use log::info;
use std::path::Path;

use logmask_core::{MaskRulesConfig, validate};

use crate::ui::output_format::{error_msg, info_msg};

/// Loads and validates the rule file at `path`, printing every problem.
/// Fails when the file cannot be read or parsed, or has any problem.
pub fn run_validate(path: &Path, quiet: bool) -> Result<()> {
    info!("Validating rule file {}", path.display());
    let config = MaskRulesConfig::load_from_file(path)
        .with_context(|| format!("Cannot read rule file {}", path.display()))?;

    let errors = validate(&config);
    if !errors.is_empty() {
        for message in &errors {
            error_msg(message);
        }
        bail!("{} has {} problem(s)", path.display(), errors.len());
    }

    if !quiet {
        let enabled = config.iter_rules().filter(|r| r.is_enabled_effective()).count();
        info_msg(format!(
            "{} is valid: {} rule(s), {} enabled.",
            path.display(),
            config.rules.len(),
            enabled
        ));
    }
    Ok(())
}
