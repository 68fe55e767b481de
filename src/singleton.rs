//! Types restricted to one live instance per process.
//!
//! Implement [`Singleton`] to give a type a slot in the global registry. The
//! implementor only says how to build the default instance; the trait supplies strict
//! construction, a get-or-create accessor and the [`INSTANCE`](Singleton::INSTANCE)
//! class property.
//!
//! ```
//! use slepy::Singleton;
//! use std::sync::Arc;
//!
//! struct Cache {
//!     capacity: usize,
//! }
//!
//! impl Singleton for Cache {
//!     fn create() -> Self {
//!         Cache { capacity: 64 }
//!     }
//! }
//!
//! let cache = Cache::instance();
//! assert_eq!(cache.capacity, 64);
//! assert!(Arc::ptr_eq(&cache, &Cache::INSTANCE.get()));
//! assert!(Cache::construct(Cache { capacity: 1 }).is_err());
//! ```

use std::sync::Arc;

use crate::registry::GLOBAL;
use crate::{ClassProperty, RegistryApi, RegistryError};

/// A type with at most one instance, stored in the global registry under its own `TypeId`.
///
/// Two implementors never share a slot, even if one wraps the other.
pub trait Singleton: Send + Sync + Sized + 'static {
    /// Builds the instance used when [`instance`](Singleton::instance) finds the slot empty.
    fn create() -> Self;

    /// Read-only class property funnelling through [`instance`](Singleton::instance).
    const INSTANCE: ClassProperty<Self, Arc<Self>> = ClassProperty::new(Self::instance);

    /// Get-or-create accessor.
    ///
    /// # Panics
    ///
    /// Panics if the global registry holds a value of another type under this type's
    /// `TypeId`, which the registry never does.
    fn instance() -> Arc<Self> {
        match Self::try_instance() {
            Ok(instance) => instance,
            Err(err) => panic!("singleton registry is corrupted: {err}"),
        }
    }

    /// Fallible form of [`instance`](Singleton::instance).
    fn try_instance() -> Result<Arc<Self>, RegistryError> {
        GLOBAL.get_or_create(Self::create)
    }

    /// Strict construction from a caller-built value.
    ///
    /// # Errors
    ///
    /// [`RegistryError::AlreadyInstantiated`] if this type already has an instance,
    /// whether it came from `construct` or from [`instance`](Singleton::instance).
    fn construct(value: Self) -> Result<Arc<Self>, RegistryError> {
        GLOBAL.register(value)
    }

    /// Returns the instance only if one was already created.
    fn existing() -> Option<Arc<Self>> {
        GLOBAL.get::<Self>().ok()
    }
}
