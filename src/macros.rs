//! Macros for creating isolated singleton registries.

/// Creates a complete, isolated singleton registry with a single macro invocation.
///
/// The macro generates a module containing:
/// - Slot storage static (hidden)
/// - Trace callback static (hidden)
/// - An `Api` struct that implements `RegistryApi`, plus an `API` constant
/// - Free functions delegating to it
///
/// Each generated registry has its own slots, so the same type may have one instance
/// per registry. This is the preferred way to keep tests independent of each other.
///
/// # Examples
///
/// ```rust
/// use slepy::define_registry;
/// use std::sync::Arc;
///
/// define_registry!(services);
///
/// struct Clock(u64);
///
/// let clock: Arc<Clock> = services::get_or_create(|| Clock(0)).unwrap();
/// assert!(services::try_create(|| Clock(1)).is_err());
/// assert_eq!(services::get::<Clock>().unwrap().0, clock.0);
/// ```
///
/// # Trait-Based Usage
///
/// ```rust
/// use slepy::{define_registry, RegistryApi};
///
/// define_registry!(app);
///
/// app::API.register(100i32).unwrap();
/// assert_eq!(*app::API.get::<i32>().unwrap(), 100);
/// ```
#[macro_export]
macro_rules! define_registry {
    ($name:ident) => {
        pub mod $name {
            use std::collections::HashMap;
            use std::sync::{Arc, LazyLock, Mutex};

            static STORAGE: $crate::SlotStorage = LazyLock::new(|| Mutex::new(HashMap::new()));

            static TRACE: $crate::TraceStorage = LazyLock::new(|| Mutex::new(None));

            /// Zero-sized type that implements the registry API.
            pub struct Api;

            impl $crate::RegistryApi for Api {
                fn storage() -> &'static $crate::SlotStorage {
                    &STORAGE
                }

                fn trace() -> &'static $crate::TraceStorage {
                    &TRACE
                }
            }

            /// Convenient constant for accessing the registry API.
            pub const API: Api = Api;

            /// Strictly create the instance of `T`.
            pub fn try_create<T, F>(init: F) -> Result<Arc<T>, $crate::RegistryError>
            where
                T: Send + Sync + 'static,
                F: FnOnce() -> T,
            {
                use $crate::RegistryApi;
                API.try_create(init)
            }

            /// Strictly store an already built value.
            pub fn register<T: Send + Sync + 'static>(
                value: T,
            ) -> Result<Arc<T>, $crate::RegistryError> {
                use $crate::RegistryApi;
                API.register(value)
            }

            /// Return the instance of `T`, creating it with `init` if needed.
            pub fn get_or_create<T, F>(init: F) -> Result<Arc<T>, $crate::RegistryError>
            where
                T: Send + Sync + 'static,
                F: FnOnce() -> T,
            {
                use $crate::RegistryApi;
                API.get_or_create(init)
            }

            /// Retrieve the instance of `T` without creating it.
            pub fn get<T: Send + Sync + 'static>() -> Result<Arc<T>, $crate::RegistryError> {
                use $crate::RegistryApi;
                API.get()
            }

            /// Check whether `T` has an instance.
            pub fn contains<T: Send + Sync + 'static>() -> Result<bool, $crate::RegistryError> {
                use $crate::RegistryApi;
                API.contains::<T>()
            }

            /// Set a tracing callback for registry operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::RegistryEvent) + Send + Sync + 'static,
            ) {
                use $crate::RegistryApi;
                API.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                use $crate::RegistryApi;
                API.clear_trace_callback()
            }

            #[doc(hidden)]
            pub fn clear() {
                use $crate::RegistryApi;
                API.clear()
            }
        }
    };
}
