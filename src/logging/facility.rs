//! Syslog facility and priority classifications.
//!
//! These mirror the standard syslog dimensions: the facility names the
//! subsystem category, the priority names the severity level. Both are
//! resolved to a concrete value before any dispatch; the wire form handed
//! to the system logger is `facility.priority` (e.g. `user.notice`).

/// Syslog facility: the subsystem category of a log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facility {
    Auth,
    AuthPriv,
    Cron,
    Daemon,
    Ftp,
    Kern,
    Lpr,
    Mail,
    News,
    Syslog,
    User,
    Uucp,
    Local0,
    Local1,
    Local2,
    Local3,
    Local4,
    Local5,
    Local6,
    Local7,
}

impl Facility {
    /// Parse a facility from its conventional lowercase name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "auth" => Some(Self::Auth),
            "authpriv" => Some(Self::AuthPriv),
            "cron" => Some(Self::Cron),
            "daemon" => Some(Self::Daemon),
            "ftp" => Some(Self::Ftp),
            "kern" => Some(Self::Kern),
            "lpr" => Some(Self::Lpr),
            "mail" => Some(Self::Mail),
            "news" => Some(Self::News),
            "syslog" => Some(Self::Syslog),
            "user" => Some(Self::User),
            "uucp" => Some(Self::Uucp),
            "local0" => Some(Self::Local0),
            "local1" => Some(Self::Local1),
            "local2" => Some(Self::Local2),
            "local3" => Some(Self::Local3),
            "local4" => Some(Self::Local4),
            "local5" => Some(Self::Local5),
            "local6" => Some(Self::Local6),
            "local7" => Some(Self::Local7),
            _ => None,
        }
    }

    /// The conventional lowercase name for this facility.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::AuthPriv => "authpriv",
            Self::Cron => "cron",
            Self::Daemon => "daemon",
            Self::Ftp => "ftp",
            Self::Kern => "kern",
            Self::Lpr => "lpr",
            Self::Mail => "mail",
            Self::News => "news",
            Self::Syslog => "syslog",
            Self::User => "user",
            Self::Uucp => "uucp",
            Self::Local0 => "local0",
            Self::Local1 => "local1",
            Self::Local2 => "local2",
            Self::Local3 => "local3",
            Self::Local4 => "local4",
            Self::Local5 => "local5",
            Self::Local6 => "local6",
            Self::Local7 => "local7",
        }
    }
}

impl std::fmt::Display for Facility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syslog priority: the severity level of a log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Emerg,
    Alert,
    Crit,
    Err,
    Warning,
    Notice,
    Info,
    Debug,
}

impl Priority {
    /// Parse a priority from its conventional lowercase name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "emerg" | "panic" => Some(Self::Emerg),
            "alert" => Some(Self::Alert),
            "crit" => Some(Self::Crit),
            "err" | "error" => Some(Self::Err),
            "warning" | "warn" => Some(Self::Warning),
            "notice" => Some(Self::Notice),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }

    /// The conventional lowercase name for this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emerg => "emerg",
            Self::Alert => "alert",
            Self::Crit => "crit",
            Self::Err => "err",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
