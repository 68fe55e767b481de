//! Read-only properties bound to a type rather than to an instance.
//!
//! A [`ClassProperty`] wraps a zero-argument getter and is usually stored as an
//! associated constant. Reading it through the type ([`ClassProperty::get`]) or through
//! any instance ([`ClassProperty::get_via`]) runs the same getter; the instance is never
//! consulted.
//!
//! When the constant is declared as a trait default that names `Self`, every
//! implementor resolves the getter against its own concrete type. This is how
//! [`Singleton::INSTANCE`](crate::Singleton::INSTANCE) hands out one instance per type.
//!
//! ```
//! use slepy::ClassProperty;
//!
//! trait Described {
//!     fn description() -> String;
//!
//!     const DESCRIPTION: ClassProperty<Self, String> = ClassProperty::new(Self::description);
//! }
//!
//! struct Base;
//! struct Special;
//!
//! impl Described for Base {
//!     fn description() -> String {
//!         "base".into()
//!     }
//! }
//!
//! impl Described for Special {
//!     fn description() -> String {
//!         "special".into()
//!     }
//! }
//!
//! assert_eq!(Base::DESCRIPTION.get(), "base");
//! assert_eq!(Special::DESCRIPTION.get_via(&Special), "special");
//! ```

use std::fmt;
use std::marker::PhantomData;

/// A computed, read-only accessor owned by the type `O`.
pub struct ClassProperty<O: ?Sized, T> {
    getter: fn() -> T,
    _owner: PhantomData<fn() -> *const O>,
}

impl<O: ?Sized, T> ClassProperty<O, T> {
    /// Binds `getter` to the owner type `O`.
    pub const fn new(getter: fn() -> T) -> Self {
        Self {
            getter,
            _owner: PhantomData,
        }
    }

    /// Reads the property through the type.
    pub fn get(&self) -> T {
        (self.getter)()
    }

    /// Reads the property through an instance. The instance only selects the owner type.
    pub fn get_via(&self, _instance: &O) -> T {
        (self.getter)()
    }
}

impl<O: ?Sized, T> Clone for ClassProperty<O, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: ?Sized, T> Copy for ClassProperty<O, T> {}

impl<O: ?Sized, T> fmt::Debug for ClassProperty<O, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassProperty")
            .field("owner", &std::any::type_name::<O>())
            .field("value", &std::any::type_name::<T>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Widget;

    impl Widget {
        const KIND: ClassProperty<Widget, &'static str> = ClassProperty::new(|| "widget");
    }

    #[test]
    fn test_read_through_type_and_instance() {
        assert_eq!(Widget::KIND.get(), "widget");
        assert_eq!(Widget::KIND.get_via(&Widget), "widget");
    }

    #[test]
    fn test_getter_runs_on_every_read() {
        static READS: AtomicUsize = AtomicUsize::new(0);

        fn next() -> usize {
            READS.fetch_add(1, Ordering::SeqCst)
        }

        let counter: ClassProperty<Widget, usize> = ClassProperty::new(next);
        let first = counter.get();
        let second = counter.get();
        assert_eq!(second, first + 1);
    }

    trait Named {
        fn name() -> &'static str {
            "base"
        }

        const NAME: ClassProperty<Self, &'static str> = ClassProperty::new(Self::name);
    }

    struct Plain;
    struct Renamed;

    impl Named for Plain {}

    impl Named for Renamed {
        fn name() -> &'static str {
            "renamed"
        }
    }

    #[test]
    fn test_resolves_against_implementing_type() {
        assert_eq!(Plain::NAME.get(), "base");
        assert_eq!(Renamed::NAME.get(), "renamed");
        assert_eq!(Renamed::NAME.get_via(&Renamed), "renamed");
    }

    #[test]
    fn test_debug_names_owner() {
        let rendered = format!("{:?}", Widget::KIND);
        assert!(rendered.contains("Widget"));
    }
}
