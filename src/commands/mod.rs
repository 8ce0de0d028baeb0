//! Command implementations for syslock.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each handler returns the process exit status on
//! success; `error` is the only command whose success status is not 0.

use crate::cli::{Command, ErrorArgs, LockArgs, LogArgs, UnlockArgs};
use crate::config::Settings;
use crate::error::{Result, SyslockError};
use crate::exit_codes;
use crate::locks::{self, FsBackend};
use crate::logging::{
    self, LogDestination, LogMessage, LoggerCommand, Priority, SyslogParams, SyslogSink,
};
use clap::Parser;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. The environment is
/// snapshotted once and the production syslog sink is used.
pub fn dispatch(command: Command) -> Result<u8> {
    let settings = Settings::from_env();
    dispatch_with(command, &settings, &LoggerCommand::default())
}

/// Dispatch with explicit settings and syslog sink, for tests.
fn dispatch_with(command: Command, settings: &Settings, sink: &dyn SyslogSink) -> Result<u8> {
    match command {
        Command::Lock(args) => cmd_lock(args, settings),
        Command::Unlock(args) => cmd_unlock(args, settings),
        Command::Log(args) => run_log(&args, settings, sink, false, None),
        Command::Error(args) => cmd_error(args, settings, sink),
        Command::Stdlog(args) => run_log(&args, settings, sink, true, None),
        Command::Verbose(args) => run_log(&args, settings, sink, settings.verbose, None),
        Command::Debug(args) => cmd_debug(args, settings, sink),
    }
}

const SUCCESS: u8 = exit_codes::SUCCESS as u8;

// ============================================================================
// Lock Manager
// ============================================================================

fn cmd_lock(args: LockArgs, settings: &Settings) -> Result<u8> {
    let path = locks::resolve_path(args.path, args.lockfile, settings);
    locks::acquire(&FsBackend, &path, args.timeout)?;
    Ok(SUCCESS)
}

fn cmd_unlock(args: UnlockArgs, settings: &Settings) -> Result<u8> {
    let path = locks::resolve_path(args.path, args.lockfile, settings);
    // Best-effort: a failed delete is reported but never fails the command.
    if let Err(err) = locks::release(&FsBackend, &path) {
        eprintln!("Warning: failed to release lock '{}': {}", path.display(), err);
    }
    Ok(SUCCESS)
}

// ============================================================================
// Log Router
// ============================================================================

/// Shared body of `log` and its wrappers.
///
/// `force_stderr` and `force_priority` are how the wrappers impose their
/// own dimension on top of the caller's flags.
fn run_log(
    args: &LogArgs,
    settings: &Settings,
    sink: &dyn SyslogSink,
    force_stderr: bool,
    force_priority: Option<Priority>,
) -> Result<u8> {
    let dest = destination(args, settings, force_stderr, force_priority)?;
    let message = LogMessage::from_args(&args.message);
    logging::route_with(&dest, &message, sink)?;
    Ok(SUCCESS)
}

fn cmd_debug(args: LogArgs, settings: &Settings, sink: &dyn SyslogSink) -> Result<u8> {
    // With DEBUG unset this is a successful no-op: no write at all.
    if !settings.debug {
        return Ok(SUCCESS);
    }
    run_log(&args, settings, sink, false, Some(Priority::Debug))
}

fn cmd_error(args: ErrorArgs, settings: &Settings, sink: &dyn SyslogSink) -> Result<u8> {
    let (status, rest) = split_status(&args.args);
    let log_args = parse_log_args(rest)?;
    run_log(&log_args, settings, sink, true, Some(Priority::Err))?;
    Ok(status.unwrap_or(1))
}

/// Split a leading `-<digits>` exit-status token off the argument list.
///
/// Deliberately permissive: anything that is not exactly a dash followed by
/// digits fitting in a `u8` stays in the message and the status defaults.
fn split_status(args: &[String]) -> (Option<u8>, &[String]) {
    if let Some(first) = args.first()
        && let Some(digits) = first.strip_prefix('-')
        && !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit())
        && let Ok(status) = digits.parse::<u8>()
    {
        return (Some(status), &args[1..]);
    }
    (None, args)
}

/// Re-parse leftover `error` tokens with the shared `log` flag grammar.
fn parse_log_args(rest: &[String]) -> Result<LogArgs> {
    LogArgs::try_parse_from(std::iter::once("error".to_string()).chain(rest.iter().cloned()))
        .map_err(|e| {
            SyslockError::Usage(
                e.to_string()
                    .lines()
                    .next()
                    .unwrap_or("invalid arguments")
                    .to_string(),
            )
        })
}

/// Resolve where a message goes: a file when `-o` is given, otherwise the
/// system logger with tag/facility/priority defaulted from the environment.
fn destination(
    args: &LogArgs,
    settings: &Settings,
    force_stderr: bool,
    force_priority: Option<Priority>,
) -> Result<LogDestination> {
    let echo_stderr = args.stderr || force_stderr;

    if let Some(path) = &args.output {
        return Ok(LogDestination::File {
            path: path.clone(),
            echo_stderr,
        });
    }

    let priority = match force_priority {
        Some(priority) => priority,
        None => settings.resolve_priority(args.priority.as_deref())?,
    };

    Ok(LogDestination::Syslog(SyslogParams {
        tag: settings.resolve_tag(args.tag.as_deref()),
        facility: settings.resolve_facility(args.facility.as_deref())?,
        priority,
        echo_stderr,
    }))
}
