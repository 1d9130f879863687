// logmask/src/ui/output_format.rs
//! Prefixed status messages for stderr, coloured only when the stream is a
//! terminal.
//! License: MIT OR Apache-2.0

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    fn prefix(self) -> &'static str {
        match self {
            Level::Info => "info:",
            Level::Warn => "warning:",
            Level::Error => "error:",
        }
    }
}

fn print_message<W: Write>(writer: &mut W, level: Level, msg: &str, use_color: bool) -> io::Result<()> {
    let prefix = level.prefix();
    if !use_color {
        return writeln!(writer, "{} {}", prefix, msg);
    }
    match level {
        Level::Info => writeln!(writer, "{} {}", prefix.cyan().bold(), msg),
        Level::Warn => writeln!(writer, "{} {}", prefix.yellow().bold(), msg),
        Level::Error => writeln!(writer, "{} {}", prefix.red().bold(), msg),
    }
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, use_color: bool) -> io::Result<()> {
    print_message(writer, Level::Info, msg, use_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, use_color: bool) -> io::Result<()> {
    print_message(writer, Level::Warn, msg, use_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, use_color: bool) -> io::Result<()> {
    print_message(writer, Level::Error, msg, use_color)
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let use_color = io::stderr().is_terminal();
    let _ = print_info_message(&mut io::stderr(), msg.as_ref(), use_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let use_color = io::stderr().is_terminal();
    let _ = print_warn_message(&mut io::stderr(), msg.as_ref(), use_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let use_color = io::stderr().is_terminal();
    let _ = print_error_message(&mut io::stderr(), msg.as_ref(), use_color);
}
