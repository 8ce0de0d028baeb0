//! System-logger destination for the log router.
//!
//! The system logging facility is a black-box collaborator: it accepts a
//! tag, a `facility.priority` pair, an optional stderr echo, and a message.
//! Production submissions go through `logger(1)`; the [`SyslogSink`] trait
//! is the seam that lets tests record submissions instead of talking to a
//! live syslogd.

use crate::error::{Result, SyslockError};
use crate::logging::{LogMessage, SyslogParams};
use std::process::{Command, Stdio};

/// A consumer of resolved syslog submissions.
pub trait SyslogSink {
    /// Submit one message with fully resolved parameters. No retry.
    fn submit(&self, params: &SyslogParams, message: &LogMessage) -> Result<()>;
}

/// Production sink: one `logger(1)` invocation per submission.
///
/// Argument-sourced messages are passed as a trailing operand; stdin-sourced
/// messages let the child inherit the caller's stdin so the stream is
/// forwarded unmodified.
#[derive(Debug, Clone)]
pub struct LoggerCommand {
    program: String,
}

impl Default for LoggerCommand {
    fn default() -> Self {
        Self {
            program: "logger".to_string(),
        }
    }
}

impl SyslogSink for LoggerCommand {
    fn submit(&self, params: &SyslogParams, message: &LogMessage) -> Result<()> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-t")
            .arg(&params.tag)
            .arg("-p")
            .arg(format!("{}.{}", params.facility, params.priority));
        if params.echo_stderr {
            cmd.arg("-s");
        }

        match message {
            LogMessage::Line(text) => {
                cmd.stdin(Stdio::null());
                cmd.arg("--").arg(text);
            }
            LogMessage::Stdin => {
                cmd.stdin(Stdio::inherit());
            }
        }

        let status = cmd.status().map_err(|e| {
            SyslockError::Logger(format!("failed to launch '{}': {}", self.program, e))
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(SyslockError::Logger(format!(
                "'{}' exited with {}",
                self.program, status
            )))
        }
    }
}

/// Recording sink for tests: captures every submission instead of logging.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    submissions: std::sync::Mutex<Vec<(SyslogParams, LogMessage)>>,
}

#[cfg(test)]
impl RecordingSink {
    pub(crate) fn submissions(&self) -> Vec<(SyslogParams, LogMessage)> {
        self.submissions.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl SyslogSink for RecordingSink {
    fn submit(&self, params: &SyslogParams, message: &LogMessage) -> Result<()> {
        self.submissions
            .lock()
            .unwrap()
            .push((params.clone(), message.clone()));
        Ok(())
    }
}
