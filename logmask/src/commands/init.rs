// logmask/src/commands/init.rs
//! The `init-rules` command: writes the built-in rule set to disk so it can
//! be edited.

use anyhow::{Context, Result, bail};
use log::debug;
use std::path::Path;

use logmask_core::MaskRulesConfig;

use crate::ui::output_format::info_msg;

pub fn run_init_rules(path: &Path, force: bool, quiet: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let config = MaskRulesConfig::load_default_rules().context("Failed to load built-in rules")?;
    config
        .save_to_file(path)
        .with_context(|| format!("Failed to write rule file {}", path.display()))?;
    debug!("Wrote {} default rules to {}", config.rules.len(), path.display());

    if !quiet {
        info_msg(format!("Wrote {} rule(s) to {}.", config.rules.len(), path.display()));
    }
    Ok(())
}
