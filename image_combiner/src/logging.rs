//! Logger setup shared by both binaries.

use flexi_logger::{DeferredNow, FlexiLoggerError, Logger, LoggerHandle};
use log::Record;
use std::io::Write;

/// Level used when a binary does not ask for anything else.
pub const DEFAULT_LEVEL: &str = "info";

/// Progress lines are meant for people watching a terminal, so only the
/// message is printed. Errors carry their own wording ("Error opening output
/// file ...") and are printed bare too. Warnings keep their level as a prefix.
fn terminal_format(
    w: &mut dyn Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> std::io::Result<()> {
    match record.level() {
        log::Level::Warn => write!(w, "WARN: {}", record.args()),
        _ => write!(w, "{}", record.args()),
    }
}

/// Starts logging to stdout. Keep the handle alive until the program ends.
pub fn init(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_str(level)?
        .log_to_stdout()
        .format(terminal_format)
        .start()
}
