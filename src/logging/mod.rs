//! Log routing subsystem for syslock.
//!
//! A message (argument list or the full stdin stream) is routed to exactly
//! one destination:
//! - a plain file, appended verbatim, optionally mirrored to stderr
//! - the system logger, with a resolved tag and `facility.priority`,
//!   optionally echoed to stderr by the logger itself
//!
//! The destination is fully resolved before dispatch; the message source is
//! chosen once per call and never mixed. The system logger is reached
//! through the [`SyslogSink`] seam so tests can substitute a recording fake
//! for a live syslogd.

mod facility;
mod file;
mod syslog;


pub use facility::{Facility, Priority};
pub use syslog::{LoggerCommand, SyslogSink};

#[cfg(test)]
pub(crate) use syslog::RecordingSink;

use crate::error::Result;
use std::path::PathBuf;

/// Resolved parameters for a system-logger submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyslogParams {
    /// Tag identifying the producing program.
    pub tag: String,

    /// Subsystem category.
    pub facility: Facility,

    /// Severity level.
    pub priority: Priority,

    /// Whether the logger should also echo the message to stderr.
    pub echo_stderr: bool,
}

/// Where a log message goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Append to a file, optionally mirroring the same bytes to stderr.
    File { path: PathBuf, echo_stderr: bool },

    /// Submit to the system logger.
    Syslog(SyslogParams),
}

/// What a log message is.
///
/// Chosen once per call: an explicit line built from call arguments, or the
/// caller's stdin consumed as an opaque stream and forwarded unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogMessage {
    /// Argument-sourced message, already joined into a single line.
    Line(String),

    /// Stream the caller's stdin through to the destination.
    Stdin,
}

impl LogMessage {
    /// Build a message from command arguments: empty means stdin.
    pub fn from_args(args: &[String]) -> Self {
        if args.is_empty() {
            Self::Stdin
        } else {
            Self::Line(args.join(" "))
        }
    }
}

/// Route a message to its destination using the production syslog sink.
pub fn route(dest: &LogDestination, message: &LogMessage) -> Result<()> {
    route_with(dest, message, &LoggerCommand::default())
}

/// Route a message to its destination through an explicit syslog sink.
pub fn route_with(
    dest: &LogDestination,
    message: &LogMessage,
    sink: &dyn SyslogSink,
) -> Result<()> {
    match dest {
        LogDestination::File { path, echo_stderr } => {
            file::append(path, message, *echo_stderr)
        }
        LogDestination::Syslog(params) => sink.submit(params, message),
    }
}
