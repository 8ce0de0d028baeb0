//! Configuration for syslock.
//!
//! The original environment-variable conventions (`TAG`, `FACILITY`,
//! `PRIORITY` for log defaults, `verbose` and `DEBUG` as feature flags) are
//! snapshotted once into an explicit [`Settings`] struct instead of being
//! read ambiently at each call site. Resolution order for every defaulted
//! value is: explicit argument > environment > hardcoded default.

use crate::error::{Result, SyslockError};
use crate::logging::{Facility, Priority};
use std::path::PathBuf;

/// Environment snapshot consumed by the command handlers.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Syslog tag override from `$TAG`.
    pub tag: Option<String>,

    /// Syslog facility override from `$FACILITY`.
    pub facility: Option<String>,

    /// Syslog priority override from `$PRIORITY`.
    pub priority: Option<String>,

    /// Whether the `verbose` flag is set (unset, empty, and "0" are falsy).
    pub verbose: bool,

    /// Whether the `DEBUG` flag is set (unset and empty are falsy).
    pub debug: bool,

    /// Program name derived from the invocation path.
    /// Used as the default syslog tag and default lock-file stem.
    pub program: String,

    /// Directory for default lock files.
    pub lock_dir: PathBuf,
}

impl Settings {
    /// Snapshot the process environment.
    pub fn from_env() -> Self {
        Self {
            tag: non_empty_var("TAG"),
            facility: non_empty_var("FACILITY"),
            priority: non_empty_var("PRIORITY"),
            verbose: non_empty_var("verbose").is_some_and(|v| v != "0"),
            debug: non_empty_var("DEBUG").is_some(),
            program: program_name(),
            lock_dir: std::env::temp_dir(),
        }
    }

    /// Resolve the syslog tag: explicit > `$TAG` > program name.
    pub fn resolve_tag(&self, explicit: Option<&str>) -> String {
        explicit
            .map(str::to_string)
            .or_else(|| self.tag.clone())
            .unwrap_or_else(|| self.program.clone())
    }

    /// Resolve the syslog facility: explicit > `$FACILITY` > `user`.
    ///
    /// An unrecognized facility name anywhere in the chain is a usage error.
    pub fn resolve_facility(&self, explicit: Option<&str>) -> Result<Facility> {
        match explicit.or(self.facility.as_deref()) {
            Some(name) => Facility::from_str(name)
                .ok_or_else(|| SyslockError::Usage(format!("unknown facility '{}'", name))),
            None => Ok(Facility::User),
        }
    }

    /// Resolve the syslog priority: explicit > `$PRIORITY` > `notice`.
    ///
    /// An unrecognized priority name anywhere in the chain is a usage error.
    pub fn resolve_priority(&self, explicit: Option<&str>) -> Result<Priority> {
        match explicit.or(self.priority.as_deref()) {
            Some(name) => Priority::from_str(name)
                .ok_or_else(|| SyslockError::Usage(format!("unknown priority '{}'", name))),
            None => Ok(Priority::Notice),
        }
    }

    /// Default lock file path: `<lock-dir>/<program-name>.lock`.
    pub fn default_lock_path(&self) -> PathBuf {
        self.lock_dir.join(format!("{}.lock", self.program))
    }
}

/// Read an environment variable, treating unset and empty as absent.
fn non_empty_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// Derive the program name from the invocation path.
fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(PathBuf::from)
        .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "syslock".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clean_settings() -> Settings {
        Settings {
            tag: None,
            facility: None,
            priority: None,
            verbose: false,
            debug: false,
            program: "myscript".to_string(),
            lock_dir: PathBuf::from("/tmp"),
        }
    }

    #[test]
    fn tag_resolution_order() {
        let mut settings = clean_settings();
        assert_eq!(settings.resolve_tag(None), "myscript");

        settings.tag = Some("envtag".to_string());
        assert_eq!(settings.resolve_tag(None), "envtag");
        assert_eq!(settings.resolve_tag(Some("cli")), "cli");
    }

    #[test]
    fn facility_resolution_order() {
        let mut settings = clean_settings();
        assert_eq!(settings.resolve_facility(None).unwrap(), Facility::User);

        settings.facility = Some("daemon".to_string());
        assert_eq!(settings.resolve_facility(None).unwrap(), Facility::Daemon);
        assert_eq!(
            settings.resolve_facility(Some("local3")).unwrap(),
            Facility::Local3
        );
    }

    #[test]
    fn priority_resolution_order() {
        let mut settings = clean_settings();
        assert_eq!(settings.resolve_priority(None).unwrap(), Priority::Notice);

        settings.priority = Some("warning".to_string());
        assert_eq!(settings.resolve_priority(None).unwrap(), Priority::Warning);
        assert_eq!(
            settings.resolve_priority(Some("err")).unwrap(),
            Priority::Err
        );
    }

    #[test]
    fn unknown_facility_is_usage_error() {
        let settings = clean_settings();
        let err = settings.resolve_facility(Some("nonsense")).unwrap_err();
        assert!(matches!(err, SyslockError::Usage(_)));
    }

    #[test]
    fn default_lock_path_uses_program_stem() {
        let settings = clean_settings();
        assert_eq!(
            settings.default_lock_path(),
            PathBuf::from("/tmp/myscript.lock")
        );
    }

    #[test]
    #[serial]
    fn from_env_reads_overrides() {
        unsafe {
            std::env::set_var("TAG", "envtag");
            std::env::set_var("FACILITY", "cron");
            std::env::set_var("PRIORITY", "info");
        }
        let settings = Settings::from_env();
        assert_eq!(settings.tag.as_deref(), Some("envtag"));
        assert_eq!(settings.facility.as_deref(), Some("cron"));
        assert_eq!(settings.priority.as_deref(), Some("info"));
        unsafe {
            std::env::remove_var("TAG");
            std::env::remove_var("FACILITY");
            std::env::remove_var("PRIORITY");
        }
    }

    #[test]
    #[serial]
    fn verbose_flag_truthiness() {
        unsafe { std::env::remove_var("verbose") };
        assert!(!Settings::from_env().verbose);

        unsafe { std::env::set_var("verbose", "0") };
        assert!(!Settings::from_env().verbose);

        unsafe { std::env::set_var("verbose", "") };
        assert!(!Settings::from_env().verbose);

        unsafe { std::env::set_var("verbose", "1") };
        assert!(Settings::from_env().verbose);

        unsafe { std::env::set_var("verbose", "yes") };
        assert!(Settings::from_env().verbose);

        unsafe { std::env::remove_var("verbose") };
    }

    #[test]
    #[serial]
    fn debug_flag_truthiness() {
        unsafe { std::env::remove_var("DEBUG") };
        assert!(!Settings::from_env().debug);

        unsafe { std::env::set_var("DEBUG", "") };
        assert!(!Settings::from_env().debug);

        unsafe { std::env::set_var("DEBUG", "1") };
        assert!(Settings::from_env().debug);

        // Any non-empty value counts, including "0"
        unsafe { std::env::set_var("DEBUG", "0") };
        assert!(Settings::from_env().debug);

        unsafe { std::env::remove_var("DEBUG") };
    }
}
