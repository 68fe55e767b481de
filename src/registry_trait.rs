//! Core trait defining singleton registry behavior.
//!
//! This module provides the `RegistryApi` trait with default implementations for
//! strict construction, lazy get-or-create, lookup and tracing of singleton instances.
//!
//! The registry is type-based: each type (`TypeId`) owns one slot, and a slot holds at
//! most one instance for the lifetime of the registry. Subtypes, wrappers and newtypes
//! all have their own `TypeId`, so each of them gets an independent slot.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, OnceLock};

use crate::{RegistryError, RegistryEvent};

/// Storage backing a registry: one type-erased `OnceLock<Arc<T>>` slot per `TypeId`.
pub type SlotStorage = LazyLock<Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>>;

/// Storage for the optional trace callback of a registry.
pub type TraceStorage = LazyLock<Mutex<Option<Arc<dyn Fn(&RegistryEvent) + Send + Sync>>>>;

type Slot<T> = OnceLock<Arc<T>>;

/// Core trait defining registry behavior.
///
/// Provides default implementations for all registry operations, requiring only
/// two accessor methods (`storage` and `trace`) to be implemented by the implementor.
///
/// Every slot moves through two states, uncreated and created. The only transition is
/// the first successful [`try_create`](RegistryApi::try_create) or
/// [`get_or_create`](RegistryApi::get_or_create) for that type; there is no way back
/// short of [`clear`](RegistryApi::clear).
pub trait RegistryApi {
    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback static.
    fn trace() -> &'static TraceStorage;

    /// Set a tracing callback for registry operations.
    ///
    /// The callback is cloned out of its lock before it runs, so it may call back into
    /// the same registry.
    fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    ///
    /// This does not affect stored instances, only the tracing callback.
    fn clear_trace_callback(&self) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    /// Emit a registry event using the current callback, if any.
    ///
    /// # Panics
    ///
    /// If the callback itself panics, the panic will propagate to the caller.
    /// No registry lock is held while the callback runs.
    fn emit_event(&self, event: &RegistryEvent) {
        let callback = Self::trace()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone();
        if let Some(callback) = callback {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------------------------------

    /// Access the storage static.
    fn storage() -> &'static SlotStorage;

    /// Returns the slot for `T`, inserting an empty one if the type was never seen.
    ///
    /// The storage lock is only held for the map lookup; initializers run outside of it,
    /// so a singleton may build other singletons while it is being created.
    #[doc(hidden)]
    fn slot<T: Send + Sync + 'static>(&self) -> Result<Arc<OnceLock<Arc<T>>>, RegistryError> {
        let erased = Self::storage()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Arc::new(Slot::<T>::new()) as Arc<dyn Any + Send + Sync>)
            .clone();

        erased
            .downcast::<Slot<T>>()
            .map_err(|_| RegistryError::TypeMismatch {
                type_name: std::any::type_name::<T>(),
            })
    }

    /// Strict construction: create and store the instance of `T`.
    ///
    /// `init` runs at most once per type, even when several threads race for the
    /// same slot; only the thread whose initializer ran gets `Ok`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::AlreadyInstantiated`] if `T` already has an instance
    /// - [`RegistryError::TypeMismatch`] if the slot holds a foreign type (extremely rare)
    fn try_create<T, F>(&self, init: F) -> Result<Arc<T>, RegistryError>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        let slot = self.slot::<T>()?;
        let mut created = false;
        let instance = slot
            .get_or_init(|| {
                created = true;
                Arc::new(init())
            })
            .clone();

        let type_name = std::any::type_name::<T>();
        if created {
            self.emit_event(&RegistryEvent::Create { type_name });
            Ok(instance)
        } else {
            self.emit_event(&RegistryEvent::Rejected { type_name });
            Err(RegistryError::AlreadyInstantiated { type_name })
        }
    }

    /// Strict construction from an already built value.
    ///
    /// If `T` already has an instance, `value` is dropped and
    /// [`RegistryError::AlreadyInstantiated`] is returned.
    fn register<T: Send + Sync + 'static>(&self, value: T) -> Result<Arc<T>, RegistryError> {
        self.try_create(move || value)
    }

    /// Get-or-create: return the existing instance of `T`, creating it with `init` first
    /// if the slot is still empty.
    ///
    /// Idempotent. Every call for the same type returns the same `Arc`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::TypeMismatch`] if the slot holds a foreign type (extremely rare)
    fn get_or_create<T, F>(&self, init: F) -> Result<Arc<T>, RegistryError>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        let slot = self.slot::<T>()?;
        let mut created = false;
        let instance = slot
            .get_or_init(|| {
                created = true;
                Arc::new(init())
            })
            .clone();

        let type_name = std::any::type_name::<T>();
        if created {
            self.emit_event(&RegistryEvent::Create { type_name });
        } else {
            self.emit_event(&RegistryEvent::Reuse { type_name });
        }

        Ok(instance)
    }

    /// Retrieve the instance of `T` without creating it.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::TypeNotFound`] if `T` was never created
    /// - [`RegistryError::TypeMismatch`] (extremely rare)
    /// - [`RegistryError::RegistryLock`] if the storage lock is poisoned
    fn get<T: Send + Sync + 'static>(&self) -> Result<Arc<T>, RegistryError> {
        let erased = Self::storage()
            .lock()
            .map_err(|_| RegistryError::RegistryLock)?
            .get(&TypeId::of::<T>())
            .cloned();

        let type_name = std::any::type_name::<T>();
        let result = match erased {
            Some(erased) => erased
                .downcast::<Slot<T>>()
                .map_err(|_| RegistryError::TypeMismatch { type_name })
                .and_then(|slot| {
                    slot.get()
                        .cloned()
                        .ok_or(RegistryError::TypeNotFound { type_name })
                }),
            None => Err(RegistryError::TypeNotFound { type_name }),
        };

        self.emit_event(&RegistryEvent::Get {
            type_name,
            found: result.is_ok(),
        });

        result
    }

    /// Retrieve a clone of the instance of `T`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](RegistryApi::get).
    fn get_cloned<T: Send + Sync + Clone + 'static>(&self) -> Result<T, RegistryError> {
        let arc = self.get::<T>()?;
        Ok((*arc).clone())
    }

    /// Check whether `T` has a created instance.
    ///
    /// # Errors
    ///
    /// - Registry lock is poisoned
    fn contains<T: Send + Sync + 'static>(&self) -> Result<bool, RegistryError> {
        let found = Self::storage()
            .lock()
            .map_err(|_| RegistryError::RegistryLock)?
            .get(&TypeId::of::<T>())
            .and_then(|erased| erased.downcast_ref::<Slot<T>>())
            .is_some_and(|slot| slot.get().is_some());

        self.emit_event(&RegistryEvent::Contains {
            type_name: std::any::type_name::<T>(),
            found,
        });

        Ok(found)
    }

    /// Drop every slot, returning all types to the uncreated state.
    ///
    /// Reset hook for tests. Already retrieved `Arc<T>` handles stay valid, and the
    /// tracing callback is kept.
    #[doc(hidden)]
    fn clear(&self) {
        self.emit_event(&RegistryEvent::Clear {});

        Self::storage()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clear();
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
