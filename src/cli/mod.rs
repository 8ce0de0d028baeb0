//! CLI argument parsing for syslock.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Syslock: advisory file locks and syslog/file log routing for shell scripts.
///
/// Two independent facilities:
/// - `lock`/`unlock` manage a named advisory lock backed by a filesystem path
/// - `log` and its wrappers format and route a message to a file or the
///   system logger, with optional duplication to stderr
#[derive(Parser, Debug)]
#[command(name = "syslock")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for syslock.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Acquire an advisory lock.
    ///
    /// Creates the lock file exclusively; fails immediately if it already
    /// exists unless a retry timeout is given.
    Lock(LockArgs),

    /// Release an advisory lock.
    ///
    /// Best-effort delete of the lock file; an already-absent lock is
    /// treated as success. No ownership check is performed.
    Unlock(UnlockArgs),

    /// Route a message to the system logger or a file.
    ///
    /// Reads the message from stdin when no message arguments are given.
    Log(LogArgs),

    /// Log at error priority and exit with a script-friendly status.
    ///
    /// A leading `-NN` argument is consumed as the exit status (default 1).
    /// The message is always duplicated to stderr.
    Error(ErrorArgs),

    /// Log with duplication to stderr forced on.
    Stdlog(LogArgs),

    /// Log, duplicating to stderr only when the `verbose` flag is set.
    Verbose(LogArgs),

    /// Log at debug priority, only when the `DEBUG` flag is set.
    ///
    /// A no-op (successful) when `DEBUG` is unset or empty.
    Debug(LogArgs),
}

/// Arguments for the `lock` command.
#[derive(Parser, Debug)]
pub struct LockArgs {
    /// Lock file path. Overridden by the positional path if both are given.
    #[arg(short = 'l', long = "lockfile")]
    pub lockfile: Option<PathBuf>,

    /// Seconds to keep retrying (once per second) before giving up.
    /// 0 or omitted means a single attempt.
    #[arg(short = 't', long = "timeout")]
    pub timeout: Option<u64>,

    /// Lock file path (takes precedence over -l).
    pub path: Option<PathBuf>,
}

/// Arguments for the `unlock` command.
#[derive(Parser, Debug)]
pub struct UnlockArgs {
    /// Lock file path. Overridden by the positional path if both are given.
    #[arg(short = 'l', long = "lockfile")]
    pub lockfile: Option<PathBuf>,

    /// Lock file path (takes precedence over -l).
    pub path: Option<PathBuf>,
}

/// Arguments for the `log` command, shared by its wrapper commands.
#[derive(Parser, Debug, Default)]
pub struct LogArgs {
    /// Duplicate the message to stderr.
    #[arg(short = 's', long = "stderr")]
    pub stderr: bool,

    /// Append to this file instead of the system logger.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Syslog tag (default: $TAG, then the program name).
    #[arg(short = 't', long = "tag")]
    pub tag: Option<String>,

    /// Syslog facility (default: $FACILITY, then "user").
    #[arg(short = 'f', long = "facility")]
    pub facility: Option<String>,

    /// Syslog priority (default: $PRIORITY, then "notice").
    #[arg(short = 'p', long = "priority")]
    pub priority: Option<String>,

    /// Message tokens, joined with spaces. Reads stdin when omitted.
    pub message: Vec<String>,
}

/// Arguments for the `error` command.
///
/// The raw argument list is kept intact so the leading `-NN` status token
/// can be split off before the remaining tokens are parsed with the `log`
/// flag grammar.
#[derive(Parser, Debug)]
pub struct ErrorArgs {
    /// Optional leading `-NN` status, then log flags and message tokens.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_lock_defaults() {
        let cli = Cli::try_parse_from(["syslock", "lock"]).unwrap();
        if let Command::Lock(args) = cli.command {
            assert!(args.lockfile.is_none());
            assert!(args.timeout.is_none());
            assert!(args.path.is_none());
        } else {
            panic!("Expected Lock command");
        }
    }

    #[test]
    fn parse_lock_full() {
        let cli = Cli::try_parse_from([
            "syslock",
            "lock",
            "-l",
            "/tmp/a.lock",
            "-t",
            "30",
            "/tmp/b.lock",
        ])
        .unwrap();
        if let Command::Lock(args) = cli.command {
            assert_eq!(args.lockfile, Some(PathBuf::from("/tmp/a.lock")));
            assert_eq!(args.timeout, Some(30));
            assert_eq!(args.path, Some(PathBuf::from("/tmp/b.lock")));
        } else {
            panic!("Expected Lock command");
        }
    }

    #[test]
    fn parse_unlock() {
        let cli = Cli::try_parse_from(["syslock", "unlock", "-l", "/tmp/a.lock"]).unwrap();
        if let Command::Unlock(args) = cli.command {
            assert_eq!(args.lockfile, Some(PathBuf::from("/tmp/a.lock")));
        } else {
            panic!("Expected Unlock command");
        }
    }

    #[test]
    fn parse_log_message() {
        let cli = Cli::try_parse_from(["syslock", "log", "hello", "world"]).unwrap();
        if let Command::Log(args) = cli.command {
            assert_eq!(args.message, vec!["hello", "world"]);
            assert!(!args.stderr);
            assert!(args.output.is_none());
        } else {
            panic!("Expected Log command");
        }
    }

    #[test]
    fn parse_log_flags() {
        let cli = Cli::try_parse_from([
            "syslock", "log", "-s", "-o", "/var/log/app.log", "-t", "mytag", "-f", "daemon", "-p",
            "warning", "hello",
        ])
        .unwrap();
        if let Command::Log(args) = cli.command {
            assert!(args.stderr);
            assert_eq!(args.output, Some(PathBuf::from("/var/log/app.log")));
            assert_eq!(args.tag.as_deref(), Some("mytag"));
            assert_eq!(args.facility.as_deref(), Some("daemon"));
            assert_eq!(args.priority.as_deref(), Some("warning"));
            assert_eq!(args.message, vec!["hello"]);
        } else {
            panic!("Expected Log command");
        }
    }

    #[test]
    fn parse_log_empty_message_means_stdin() {
        let cli = Cli::try_parse_from(["syslock", "log"]).unwrap();
        if let Command::Log(args) = cli.command {
            assert!(args.message.is_empty());
        } else {
            panic!("Expected Log command");
        }
    }

    #[test]
    fn parse_error_keeps_hyphen_tokens() {
        let cli = Cli::try_parse_from(["syslock", "error", "-42", "disk", "full"]).unwrap();
        if let Command::Error(args) = cli.command {
            assert_eq!(args.args, vec!["-42", "disk", "full"]);
        } else {
            panic!("Expected Error command");
        }
    }

    #[test]
    fn parse_stdlog_verbose_debug() {
        let cli = Cli::try_parse_from(["syslock", "stdlog", "msg"]).unwrap();
        assert!(matches!(cli.command, Command::Stdlog(_)));

        let cli = Cli::try_parse_from(["syslock", "verbose", "msg"]).unwrap();
        assert!(matches!(cli.command, Command::Verbose(_)));

        let cli = Cli::try_parse_from(["syslock", "debug", "msg"]).unwrap();
        assert!(matches!(cli.command, Command::Debug(_)));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let result = Cli::try_parse_from(["syslock", "log", "--bogus"]);
        assert!(result.is_err());
    }
}
