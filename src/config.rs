//! Logger factory configuration.
//!
//! Defaults render records at `INFO` with colors, in the fixed UTC-03:00 offset used by
//! America/Argentina/Buenos_Aires, at millisecond precision. [`LoggerConfig::from_env`]
//! lets the environment override the default level and disable colors.

use chrono::{FixedOffset, Offset, Utc};

use crate::Severity;

/// Environment variable naming the factory's default level.
pub const LEVEL_ENV: &str = "SLEPY_LOG_LEVEL";

/// Environment variable that disables colors when set to a non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

const BUENOS_AIRES_OFFSET_SECS: i32 = 3 * 3600;

/// Fractional digits kept in ISO-8601 timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampPrecision {
    #[default]
    Millis,
    Seconds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Level for loggers requested without one, or with an invalid level name.
    pub default_level: Severity,
    pub timezone: FixedOffset,
    pub precision: TimestampPrecision,
    /// strftime pattern replacing the ISO-8601 rendering when set.
    pub time_format: Option<String>,
    pub colored: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            default_level: Severity::default(),
            timezone: buenos_aires(),
            precision: TimestampPrecision::default(),
            time_format: None,
            colored: true,
        }
    }
}

/// Fixed UTC-03:00 offset of America/Argentina/Buenos_Aires.
///
/// Matches the zone for dates since 2009. Earlier timestamps that fell in the zone's
/// DST periods render one hour off.
pub fn buenos_aires() -> FixedOffset {
    FixedOffset::west_opt(BUENOS_AIRES_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

impl LoggerConfig {
    /// Defaults overridden by [`LEVEL_ENV`] and [`NO_COLOR_ENV`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reading variables through `lookup`.
    ///
    /// An unparsable level is reported as a warning and the default level is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(name) = lookup(LEVEL_ENV) {
            match name.parse::<Severity>() {
                Ok(level) => config.default_level = level,
                Err(err) => tracing::warn!(variable = LEVEL_ENV, "{err}"),
            }
        }

        if lookup(NO_COLOR_ENV).is_some_and(|value| !value.is_empty()) {
            config.colored = false;
        }

        config
    }

    pub fn with_default_level(mut self, level: Severity) -> Self {
        self.default_level = level;
        self
    }

    pub fn with_timezone(mut self, timezone: FixedOffset) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_precision(mut self, precision: TimestampPrecision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = Some(format.into());
        self
    }

    pub fn with_colors(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.default_level, Severity::Info);
        assert_eq!(config.timezone.local_minus_utc(), -3 * 3600);
        assert_eq!(config.precision, TimestampPrecision::Millis);
        assert!(config.colored);
        assert!(config.time_format.is_none());
    }

    #[test]
    fn test_buenos_aires_has_no_summer_shift() {
        use chrono::TimeZone;

        let zone = buenos_aires();
        let summer = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let winter = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();

        assert_eq!(summer.with_timezone(&zone).to_rfc3339(), "2024-01-15T09:00:00-03:00");
        assert_eq!(winter.with_timezone(&zone).to_rfc3339(), "2024-07-15T09:00:00-03:00");
    }

    #[test]
    fn test_lookup_overrides() {
        let config = LoggerConfig::from_lookup(lookup_from(&[
            (LEVEL_ENV, "debug"),
            (NO_COLOR_ENV, "1"),
        ]));
        assert_eq!(config.default_level, Severity::Debug);
        assert!(!config.colored);
    }

    #[test]
    fn test_invalid_level_keeps_default() {
        let config = LoggerConfig::from_lookup(lookup_from(&[(LEVEL_ENV, "NOPE")]));
        assert_eq!(config.default_level, Severity::Info);
    }

    #[test]
    fn test_empty_no_color_keeps_colors() {
        let config = LoggerConfig::from_lookup(lookup_from(&[(NO_COLOR_ENV, "")]));
        assert!(config.colored);
    }

    #[test]
    fn test_builders() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let config = LoggerConfig::default()
            .with_default_level(Severity::Error)
            .with_timezone(utc)
            .with_precision(TimestampPrecision::Seconds)
            .with_time_format("%H:%M:%S")
            .with_colors(false);

        assert_eq!(config.default_level, Severity::Error);
        assert_eq!(config.timezone, utc);
        assert_eq!(config.precision, TimestampPrecision::Seconds);
        assert_eq!(config.time_format.as_deref(), Some("%H:%M:%S"));
        assert!(!config.colored);
    }
}
