//! Debug printing with an explicitly injected logger.
//!
//! Code that may or may not have a logger at hand calls [`debug_print`] (with an optional
//! logger) or [`debug_print_in`] (with an optional context object exposing one). With a
//! logger the message goes out at `DEBUG`; without one a warning is emitted through
//! `tracing` and the message is written plainly through the progress-safe writer.

use std::fmt;

use crate::writer::{LineWriter, ProgressWriter};
use crate::{LazyLogger, Logger, LoggingError};

/// A value that may carry a logger.
pub trait LogContext {
    fn log(&self) -> Option<&Logger>;
}

impl LogContext for Logger {
    fn log(&self) -> Option<&Logger> {
        Some(self)
    }
}

impl LogContext for Option<Logger> {
    fn log(&self) -> Option<&Logger> {
        self.as_ref()
    }
}

impl LogContext for LazyLogger {
    fn log(&self) -> Option<&Logger> {
        Some(self.get())
    }
}

/// Logs `message` at `DEBUG` through `logger`, or prints it plainly if there is none.
pub fn debug_print(logger: Option<&Logger>, message: impl fmt::Display) {
    debug_print_to(logger, message, &ProgressWriter::global())
}

/// Logs `message` through the logger of `context`.
///
/// A missing context and a context without a logger both fall back to plain output.
pub fn debug_print_in<C>(context: Option<&C>, message: impl fmt::Display)
where
    C: LogContext + ?Sized,
{
    debug_print_in_to(context, message, &ProgressWriter::global())
}

pub(crate) fn debug_print_to(
    logger: Option<&Logger>,
    message: impl fmt::Display,
    fallback: &dyn LineWriter,
) {
    match logger {
        Some(logger) => logger.debug(message),
        None => {
            tracing::warn!("{}", LoggingError::NullLogger);
            fallback.write_line(&message.to_string());
        }
    }
}

pub(crate) fn debug_print_in_to<C>(
    context: Option<&C>,
    message: impl fmt::Display,
    fallback: &dyn LineWriter,
) where
    C: LogContext + ?Sized,
{
    match context {
        Some(context) => debug_print_to(context.log(), message, fallback),
        None => {
            tracing::warn!("{}", LoggingError::MissingLoggerContext);
            fallback.write_line(&message.to_string());
        }
    }
}
