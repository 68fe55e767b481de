use std::borrow::Cow;
use std::sync::OnceLock;

use crate::{Logger, LoggerFactory, Singleton};

/// A logger field or static resolved from the global [`LoggerFactory`] on first use.
///
/// Embed it in a type (or declare it as a `static`) instead of passing a logger around:
///
/// ```
/// use slepy::LazyLogger;
///
/// static LOG: LazyLogger = LazyLogger::new("importer");
///
/// fn import() {
///     LOG.get().debug("starting import");
/// }
/// # import();
/// ```
#[derive(Debug)]
pub struct LazyLogger {
    name: Cow<'static, str>,
    logger: OnceLock<Logger>,
}

impl LazyLogger {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            logger: OnceLock::new(),
        }
    }

    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            logger: OnceLock::new(),
        }
    }

    /// Named after the last path segment of `T`, e.g. `Importer` for `app::jobs::Importer<u8>`.
    pub fn for_type<T: ?Sized>() -> Self {
        Self::named(short_type_name::<T>())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The logger, fetched from [`LoggerFactory::instance`] the first time.
    pub fn get(&self) -> &Logger {
        self.logger
            .get_or_init(|| LoggerFactory::instance().get_logger(&self.name))
    }

    /// The logger if it was already resolved.
    pub fn resolved(&self) -> Option<&Logger> {
        self.logger.get()
    }
}

fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;
    use serial_test::serial;

    mod jobs {
        pub struct Importer<T>(pub T);
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<jobs::Importer<u8>>(), "Importer");
        assert_eq!(short_type_name::<String>(), "String");
        assert_eq!(short_type_name::<u32>(), "u32");
        assert_eq!(LazyLogger::for_type::<jobs::Importer<()>>().name(), "Importer");
    }

    #[test]
    #[serial]
    fn test_resolves_once_through_factory() {
        registry::clear();

        let lazy = LazyLogger::new("lazy-test");
        assert!(lazy.resolved().is_none());

        let first = lazy.get().clone();
        let second = lazy.get();

        assert!(Logger::ptr_eq(&first, second));
        assert!(Logger::ptr_eq(
            &first,
            &LoggerFactory::instance().get_logger("lazy-test")
        ));
    }

    #[test]
    #[serial]
    fn test_two_fields_same_name_share_logger() {
        registry::clear();

        let a = LazyLogger::named(String::from("shared-name"));
        let b = LazyLogger::named("shared-name");

        assert!(Logger::ptr_eq(a.get(), b.get()));
    }
}
