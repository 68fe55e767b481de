//! The process-wide singleton registry.
//!
//! Every [`Singleton`](crate::Singleton) lives here, as does anything stored through
//! the free functions of this module. Isolated registries can be declared with
//! [`define_registry!`](crate::define_registry).
//!
//! # Examples
//!
//! ```
//! use slepy::registry;
//! use std::sync::Arc;
//!
//! struct Settings {
//!     verbose: bool,
//! }
//!
//! let first: Arc<Settings> = registry::get_or_create(|| Settings { verbose: true }).unwrap();
//! let again: Arc<Settings> = registry::get_or_create(|| Settings { verbose: false }).unwrap();
//!
//! assert!(Arc::ptr_eq(&first, &again));
//! assert!(again.verbose);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

use crate::registry_trait::{SlotStorage, TraceStorage};
use crate::{RegistryApi, RegistryError, RegistryEvent};

static GLOBAL_STORAGE: SlotStorage = LazyLock::new(|| Mutex::new(HashMap::new()));

static GLOBAL_TRACE: TraceStorage = LazyLock::new(|| Mutex::new(None));

/// Handle to the process-wide registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalRegistry;

impl RegistryApi for GlobalRegistry {
    fn storage() -> &'static SlotStorage {
        &GLOBAL_STORAGE
    }

    fn trace() -> &'static TraceStorage {
        &GLOBAL_TRACE
    }
}

/// Constant for trait-based access to the process-wide registry.
pub const GLOBAL: GlobalRegistry = GlobalRegistry;

/// Strictly create the instance of `T` in the global registry.
///
/// # Errors
///
/// [`RegistryError::AlreadyInstantiated`] on any call after the first for `T`.
pub fn try_create<T, F>(init: F) -> Result<Arc<T>, RegistryError>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> T,
{
    GLOBAL.try_create(init)
}

/// Return the global instance of `T`, creating it with `init` if needed.
pub fn get_or_create<T, F>(init: F) -> Result<Arc<T>, RegistryError>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> T,
{
    GLOBAL.get_or_create(init)
}

/// Retrieve the global instance of `T` without creating it.
pub fn get<T: Send + Sync + 'static>() -> Result<Arc<T>, RegistryError> {
    GLOBAL.get()
}

/// Check whether `T` has a global instance.
pub fn contains<T: Send + Sync + 'static>() -> Result<bool, RegistryError> {
    GLOBAL.contains::<T>()
}

/// Set a tracing callback for the global registry.
///
/// # Example
/// ```rust
/// use slepy::registry;
///
/// registry::set_trace_callback(|event| eprintln!("[registry-trace] {event}"));
/// registry::clear_trace_callback();
/// ```
pub fn set_trace_callback(callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
    GLOBAL.set_trace_callback(callback)
}

/// Clears the tracing callback of the global registry.
pub fn clear_trace_callback() {
    GLOBAL.clear_trace_callback()
}

#[doc(hidden)]
pub fn clear() {
    GLOBAL.clear()
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
