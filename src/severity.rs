use std::fmt;
use std::str::FromStr;

use crate::{Color, LoggingError};

/// Ordered log severities, `Debug < Info < Warning < Error < Critical`.
///
/// The discriminants follow the conventional numeric levels (10 to 50).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    Debug = 10,
    #[default]
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Color of the level tag in formatted records.
    pub const fn color(self) -> Color {
        match self {
            Severity::Debug => Color::Green,
            Severity::Info => Color::Blue,
            Severity::Warning => Color::Red,
            Severity::Error | Severity::Critical => Color::RedBright,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the five level names plus the `WARN` and `FATAL` aliases, ignoring ASCII case.
impl FromStr for Severity {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "CRITICAL" | "FATAL" => Ok(Severity::Critical),
            _ => Err(LoggingError::InvalidLevelName(s.to_string())),
        }
    }
}
