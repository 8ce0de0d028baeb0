//! File destination for the log router.
//!
//! Messages are appended verbatim: argument-sourced messages get no
//! timestamp prepended, stdin-sourced messages are copied through
//! unmodified. When stderr mirroring is on, bytes reach stderr as they are
//! written to the file (streamed, not buffered-then-copied), so a consumer
//! tailing stderr sees large stdin-sourced output incrementally.
//!
//! Concurrent writers to the same log file rely on append-mode open
//! semantics; no application-level mutual exclusion is applied.

use crate::error::{Result, SyslockError};
use crate::logging::LogMessage;
use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Append a message to the file at `path`, mirroring to stderr when asked.
pub(crate) fn append(path: &Path, message: &LogMessage, echo_stderr: bool) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| SyslockError::io(format!("opening log file '{}'", path.display()), e))?;

    if echo_stderr {
        let stderr = io::stderr();
        append_message(message, &mut file, Some(&mut stderr.lock()))
    } else {
        append_message(message, &mut file, None)
    }
}

/// Write a message to `out`, mirroring each write to `echo` when present.
fn append_message(
    message: &LogMessage,
    out: &mut dyn Write,
    echo: Option<&mut dyn Write>,
) -> Result<()> {
    match message {
        LogMessage::Line(text) => write_line(text, out, echo),
        LogMessage::Stdin => {
            let stdin = io::stdin();
            copy_stream(&mut stdin.lock(), out, echo)
        }
    }
}

/// Append a single line, terminated with a newline.
fn write_line(text: &str, out: &mut dyn Write, echo: Option<&mut dyn Write>) -> Result<()> {
    let mut bytes = Vec::with_capacity(text.len() + 1);
    bytes.extend_from_slice(text.as_bytes());
    bytes.push(b'\n');

    out.write_all(&bytes)
        .map_err(|e| SyslockError::io("appending to log file", e))?;
    if let Some(echo) = echo {
        echo.write_all(&bytes)
            .map_err(|e| SyslockError::io("writing to stderr", e))?;
    }
    Ok(())
}

/// Copy a stream through line by line so the mirror stays incremental.
fn copy_stream(
    reader: &mut dyn BufRead,
    out: &mut dyn Write,
    mut echo: Option<&mut dyn Write>,
) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| SyslockError::io("reading message from stdin", e))?;
        if read == 0 {
            return Ok(());
        }

        out.write_all(&buf)
            .map_err(|e| SyslockError::io("appending to log file", e))?;
        if let Some(echo) = echo.as_deref_mut() {
            echo.write_all(&buf)
                .map_err(|e| SyslockError::io("writing to stderr", e))?;
            echo.flush()
                .map_err(|e| SyslockError::io("flushing stderr", e))?;
        }
    }
}
