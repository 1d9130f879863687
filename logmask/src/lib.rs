// logmask/src/lib.rs
//! # Logmask CLI Application
//!
//! This crate provides the command-line front end for `logmask-core`: masking
//! files and directory trees, validating rule files and writing a starter
//! rule set.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

use anyhow::Result;
use log::info;

use crate::cli::{Cli, Commands};

/// Dispatches a parsed command line to its command.
pub fn run(cli: Cli) -> Result<()> {
    info!("logmask started. Version: {}", env!("CARGO_PKG_VERSION"));
    match &cli.command {
        Commands::Mask(cmd) => commands::mask::run_mask(cmd, cli.quiet),
        Commands::Validate(cmd) => commands::validate::run_validate(&cmd.rules, cli.quiet),
        Commands::InitRules(cmd) => commands::init::run_init_rules(&cmd.path, cmd.force, cli.quiet),
    }
}
