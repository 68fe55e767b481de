//! Named logger handles.
//!
//! A [`Logger`] is a cheap, clonable handle. Clones share the same name, level and
//! handler; [`Logger::ptr_eq`] tells whether two handles came from the same creation.

use std::fmt;
use std::sync::Arc;

use crate::formatter::{Record, RecordFormatter};
use crate::writer::LineWriter;
use crate::Severity;

/// Formats records and forwards them to a [`LineWriter`].
#[derive(Clone)]
pub struct Handler {
    level: Severity,
    formatter: RecordFormatter,
    writer: Arc<dyn LineWriter>,
}

impl Handler {
    pub fn new(level: Severity, formatter: RecordFormatter, writer: Arc<dyn LineWriter>) -> Self {
        Self {
            level,
            formatter,
            writer,
        }
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    /// Writes `record` unless it is below the handler's level.
    pub fn handle(&self, record: &Record<'_>) {
        if record.level >= self.level {
            self.writer.write_line(&self.formatter.format(record));
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("level", &self.level)
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}

struct LoggerInner {
    name: String,
    level: Severity,
    handler: Handler,
}

/// A named logger with a fixed level and exactly one handler.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

impl Logger {
    pub fn new(name: impl Into<String>, level: Severity, handler: Handler) -> Self {
        Self {
            inner: Arc::new(LoggerInner {
                name: name.into(),
                level,
                handler,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The level fixed at creation time.
    pub fn level(&self) -> Severity {
        self.inner.level
    }

    pub fn handler(&self) -> &Handler {
        &self.inner.handler
    }

    pub fn is_enabled(&self, level: Severity) -> bool {
        level >= self.inner.level
    }

    /// Whether both handles refer to the same logger.
    pub fn ptr_eq(this: &Logger, other: &Logger) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    pub fn log(&self, level: Severity, message: impl fmt::Display) {
        if !self.is_enabled(level) {
            return;
        }
        let message = message.to_string();
        self.inner
            .handler
            .handle(&Record::now(&self.inner.name, level, &message));
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Severity::Debug, message)
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(Severity::Info, message)
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.log(Severity::Warning, message)
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(Severity::Error, message)
    }

    pub fn critical(&self, message: impl fmt::Display) {
        self.log(Severity::Critical, message)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.inner.name)
            .field("level", &self.inner.level)
            .finish()
    }
}
