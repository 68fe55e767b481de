//! Process-wide logger factory.
//!
//! [`LoggerFactory`] is a [`Singleton`]: [`LoggerFactory::instance`] builds it from
//! [`LoggerConfig::from_env`] on first use, while [`LoggerFactory::install`] pins an
//! explicit configuration if it runs first.
//!
//! Loggers are cached by name. The first request for a name decides its level; later
//! requests return the cached handle and ignore whatever level they ask for.
//!
//! ```
//! use slepy::{LoggerConfig, LoggerFactory, MemoryWriter, Severity};
//!
//! let output = MemoryWriter::new();
//! let factory = LoggerFactory::with_writer(LoggerConfig::default(), output.clone());
//!
//! let log = factory.get_logger_with("svc", Severity::Warning);
//! let again = factory.get_logger_with("svc", Severity::Debug);
//! assert_eq!(again.level(), Severity::Warning);
//!
//! log.warning("disk almost full");
//! assert_eq!(output.lines().len(), 1);
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::LoggerConfig;
use crate::formatter::RecordFormatter;
use crate::logger::{Handler, Logger};
use crate::writer::{LineWriter, ProgressWriter};
use crate::{RegistryError, Severity, Singleton};

/// Level asked for when requesting a logger.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LevelRequest {
    /// Use the factory's default level.
    #[default]
    Default,
    Level(Severity),
    /// A level name such as `"WARNING"`; unknown names fall back to the default level.
    Name(String),
}

impl From<Severity> for LevelRequest {
    fn from(level: Severity) -> Self {
        LevelRequest::Level(level)
    }
}

impl From<Option<Severity>> for LevelRequest {
    fn from(level: Option<Severity>) -> Self {
        level.map_or(LevelRequest::Default, LevelRequest::Level)
    }
}

impl From<&str> for LevelRequest {
    fn from(name: &str) -> Self {
        LevelRequest::Name(name.to_string())
    }
}

impl From<String> for LevelRequest {
    fn from(name: String) -> Self {
        LevelRequest::Name(name)
    }
}

pub struct LoggerFactory {
    config: LoggerConfig,
    formatter: RecordFormatter,
    writer: Arc<dyn LineWriter>,
    loggers: Mutex<HashMap<String, Logger>>,
}

impl Singleton for LoggerFactory {
    fn create() -> Self {
        Self::new(LoggerConfig::from_env())
    }
}

impl LoggerFactory {
    /// A factory whose loggers write through [`ProgressWriter::global`].
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_writer(config, ProgressWriter::global())
    }

    pub fn with_writer(config: LoggerConfig, writer: impl LineWriter + 'static) -> Self {
        Self {
            formatter: RecordFormatter::new(&config),
            config,
            writer: Arc::new(writer),
            loggers: Mutex::new(HashMap::new()),
        }
    }

    /// Strictly constructs the global factory with `config`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::AlreadyInstantiated`] if the global factory already exists.
    pub fn install(config: LoggerConfig) -> Result<Arc<Self>, RegistryError> {
        Self::construct(Self::new(config))
    }

    pub fn default_level(&self) -> Severity {
        self.config.default_level
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Logger for `name` at the factory's default level.
    pub fn get_logger(&self, name: &str) -> Logger {
        self.get_logger_with(name, LevelRequest::Default)
    }

    /// Logger for `name`, created at `level` if it does not exist yet.
    ///
    /// An existing logger is returned unchanged, so `level` only matters on the first
    /// request for a name. An unknown level name produces a warning and the default level.
    ///
    /// No `tracing` event is emitted while the logger map is locked, so subscribers may
    /// request loggers themselves.
    pub fn get_logger_with(&self, name: &str, level: impl Into<LevelRequest>) -> Logger {
        if let Some(existing) = self.lock_loggers().get(name) {
            return existing.clone();
        }

        let level = self.resolve_level(level.into());
        let candidate = Logger::new(
            name,
            level,
            Handler::new(level, self.formatter.clone(), Arc::clone(&self.writer)),
        );

        let (logger, created) = match self.lock_loggers().entry(name.to_string()) {
            Entry::Occupied(entry) => (entry.get().clone(), false),
            Entry::Vacant(entry) => (entry.insert(candidate).clone(), true),
        };

        if created {
            tracing::debug!(logger = name, %level, "created logger");
        }
        logger
    }

    /// Whether a logger was already created for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.lock_loggers().contains_key(name)
    }

    /// Names of all created loggers, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock_loggers().keys().cloned().collect();
        names.sort();
        names
    }

    fn lock_loggers(&self) -> MutexGuard<'_, HashMap<String, Logger>> {
        self.loggers.lock().unwrap_or_else(|p| p.into_inner())
    }

    fn resolve_level(&self, request: LevelRequest) -> Severity {
        match request {
            LevelRequest::Default => self.config.default_level,
            LevelRequest::Level(level) => level,
            LevelRequest::Name(name) => name.parse().unwrap_or_else(|err| {
                tracing::warn!("{err}");
                self.config.default_level
            }),
        }
    }
}

impl std::fmt::Debug for LoggerFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerFactory")
            .field("config", &self.config)
            .field("loggers", &self.names())
            .finish_non_exhaustive()
    }
}

/// Logger for `name` from the global factory.
pub fn get_logger(name: &str) -> Logger {
    LoggerFactory::instance().get_logger(name)
}

/// Logger for `name` from the global factory, created at `level` on first request.
pub fn get_logger_with(name: &str, level: impl Into<LevelRequest>) -> Logger {
    LoggerFactory::instance().get_logger_with(name, level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::count_warnings;
    use crate::writer::MemoryWriter;
    use std::sync::mpsc;
    use std::time::Duration;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    fn factory(default_level: Severity) -> (LoggerFactory, MemoryWriter) {
        let memory = MemoryWriter::new();
        let config = LoggerConfig::default()
            .with_default_level(default_level)
            .with_colors(false);
        (LoggerFactory::with_writer(config, memory.clone()), memory)
    }

    #[test]
    fn test_same_name_same_handle() {
        let (factory, _) = factory(Severity::Info);

        let first = factory.get_logger("svc");
        let second = factory.get_logger("svc");
        assert!(Logger::ptr_eq(&first, &second));
    }

    #[test]
    fn test_distinct_names_distinct_handles() {
        let (factory, _) = factory(Severity::Info);

        let a = factory.get_logger("a");
        let b = factory.get_logger("b");
        assert!(!Logger::ptr_eq(&a, &b));
        assert_eq!(factory.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_level_fixed_at_first_creation() {
        let (factory, _) = factory(Severity::Info);

        let h = factory.get_logger_with("svc", Severity::Warning);
        assert_eq!(h.level(), Severity::Warning);

        let again = factory.get_logger_with("svc", Severity::Debug);
        assert!(Logger::ptr_eq(&h, &again));
        assert_eq!(again.level(), Severity::Warning);
    }

    #[test]
    fn test_level_names_are_translated() {
        let (factory, _) = factory(Severity::Info);

        assert_eq!(factory.get_logger_with("a", "ERROR").level(), Severity::Error);
        assert_eq!(
            factory.get_logger_with("b", String::from("debug")).level(),
            Severity::Debug
        );
        assert_eq!(
            factory.get_logger_with("c", None::<Severity>).level(),
            Severity::Info
        );
    }

    #[test]
    fn test_invalid_level_name_uses_default() {
        let (factory, _) = factory(Severity::Error);

        let log = factory.get_logger_with("svc", "NOPE");
        assert_eq!(log.level(), Severity::Error);
        assert_eq!(factory.default_level(), Severity::Error);
    }

    #[test]
    fn test_loggers_share_factory_writer() {
        let (factory, memory) = factory(Severity::Debug);

        factory.get_logger("one").info("first");
        factory.get_logger("two").debug("second");

        let lines = memory.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[INFO] [one] first"));
        assert!(lines[1].ends_with("[DEBUG] [two] second"));
    }

    #[test]
    fn test_concurrent_requests_create_one_logger() {
        let (factory, _) = factory(Severity::Info);
        let factory = Arc::new(factory);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let factory = Arc::clone(&factory);
                std::thread::spawn(move || factory.get_logger("shared"))
            })
            .collect();
        let loggers: Vec<Logger> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(loggers.iter().all(|l| Logger::ptr_eq(l, &loggers[0])));
        assert_eq!(factory.names(), vec!["shared"]);
    }

    #[test]
    fn test_invalid_level_name_warns_once() {
        let (factory, _) = factory(Severity::Info);

        let (log, warnings) = count_warnings(|| factory.get_logger_with("svc", "NOPE"));
        assert_eq!(log.level(), Severity::Info);
        assert_eq!(warnings, 1);

        let (_, warnings) = count_warnings(|| factory.get_logger_with("svc", "NOPE"));
        assert_eq!(warnings, 0);
    }

    /// Forwards every event into a logger requested from the same factory.
    struct ForwardToFactory(Arc<LoggerFactory>);

    impl<S: tracing::Subscriber> Layer<S> for ForwardToFactory {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            self.0
                .get_logger("forwarded")
                .info(event.metadata().name());
        }
    }

    #[test]
    fn test_subscriber_may_request_loggers() {
        let (factory, memory) = factory(Severity::Debug);
        let factory = Arc::new(factory);
        let (done, finished) = mpsc::channel();

        let worker = Arc::clone(&factory);
        std::thread::spawn(move || {
            let subscriber =
                tracing_subscriber::registry().with(ForwardToFactory(Arc::clone(&worker)));
            let log = tracing::subscriber::with_default(subscriber, || {
                worker.get_logger_with("svc", "NOPE")
            });
            let _ = done.send(log.level());
        });

        let level = finished
            .recv_timeout(Duration::from_secs(5))
            .expect("get_logger_with blocked inside a subscriber callback");
        assert_eq!(level, Severity::Debug);
        assert!(factory.contains("forwarded"));
        assert!(memory
            .lines()
            .iter()
            .any(|line| line.contains("[INFO] [forwarded]")));
    }
}
