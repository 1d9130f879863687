// logmask/src/main.rs
//! logmask entry point.
//!
//! Parses the command line, sets up logging and runs the chosen command.
//! Any error is printed to stderr and turns into exit code 1.

use clap::Parser;
use logmask::cli::Cli;
use logmask::logger;
use logmask::ui::output_format::error_msg;

fn main() {
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));

    if let Err(e) = logmask::run(cli) {
        error_msg(format!("{:#}", e));
        std::process::exit(1);
    }
}
