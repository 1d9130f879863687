// logmask/src/commands/mod.rs
//! Command implementations, one module per subcommand.

pub mod init;
pub mod mask;
pub mod validate;

use logmask_core::MaskError;

use crate::ui::output_format::error_msg;

/// Prints every validation message of `err`, one per line. Returns whether
/// anything was printed.
pub(crate) fn print_validation_errors(err: &MaskError) -> bool {
    let messages = err.validation_errors();
    for message in messages {
        error_msg(message);
    }
    !messages.is_empty()
}
