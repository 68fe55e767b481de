use thiserror::Error;

/// Logging misconfigurations.
///
/// None of these are returned to callers. They are rendered into `tracing` warnings and
/// the operation carries on with a fallback, so logging never breaks the program flow.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum LoggingError {
    #[error("invalid logging level {0:?}, using default level")]
    InvalidLevelName(String),

    #[error("no logger found in the current context, printing plainly")]
    MissingLoggerContext,

    #[error("a logger was found but it is not set, printing plainly")]
    NullLogger,
}
