//! Line layout for log records.
//!
//! ```text
//! [2024-05-01T09:30:00.250-03:00] [WARNING] [svc] disk almost full
//! ```
//!
//! The timestamp is grey, the level tag takes its [`Severity::color`], the logger name
//! is yellow and the message is left as is.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

use crate::config::{LoggerConfig, TimestampPrecision};
use crate::{Color, Severity};

/// A single log event, before formatting.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub name: &'a str,
    pub level: Severity,
    pub message: &'a str,
    pub created: DateTime<Utc>,
}

impl<'a> Record<'a> {
    /// A record stamped with the current time.
    pub fn now(name: &'a str, level: Severity, message: &'a str) -> Self {
        Self {
            name,
            level,
            message,
            created: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFormatter {
    timezone: FixedOffset,
    precision: TimestampPrecision,
    time_format: Option<String>,
    colored: bool,
}

impl RecordFormatter {
    /// Builds a formatter from `config`.
    ///
    /// A `time_format` chrono cannot parse is reported once here and dropped, so records
    /// fall back to ISO-8601.
    pub fn new(config: &LoggerConfig) -> Self {
        let time_format = config.time_format.as_deref().and_then(|pattern| {
            if is_valid_pattern(pattern) {
                Some(pattern.to_string())
            } else {
                tracing::warn!(pattern = %pattern, "invalid time format, using ISO-8601");
                None
            }
        });

        Self {
            timezone: config.timezone,
            precision: config.precision,
            time_format,
            colored: config.colored,
        }
    }

    pub fn format(&self, record: &Record<'_>) -> String {
        format!(
            "{}{}{}{}",
            self.paint(Color::Grey, format_args!("[{}] ", self.format_time(record.created))),
            self.paint(record.level.color(), format_args!("[{}] ", record.level)),
            self.paint(Color::Yellow, format_args!("[{}] ", record.name)),
            record.message,
        )
    }

    /// Renders `created` in the configured offset.
    ///
    /// Uses the custom time format when one was accepted, ISO-8601 otherwise.
    pub fn format_time(&self, created: DateTime<Utc>) -> String {
        let local = created.with_timezone(&self.timezone);

        if let Some(pattern) = &self.time_format {
            let mut rendered = String::new();
            if write!(rendered, "{}", local.format(pattern)).is_ok() {
                return rendered;
            }
        }

        let digits = match self.precision {
            TimestampPrecision::Millis => SecondsFormat::Millis,
            TimestampPrecision::Seconds => SecondsFormat::Secs,
        };
        local.to_rfc3339_opts(digits, false)
    }

    fn paint(&self, color: Color, text: std::fmt::Arguments<'_>) -> String {
        if self.colored {
            color.paint(text)
        } else {
            text.to_string()
        }
    }
}

fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

impl Default for RecordFormatter {
    fn default() -> Self {
        Self::new(&LoggerConfig::default())
    }
}
