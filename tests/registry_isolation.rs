//! Integration tests for registry isolation and multiple registries.
//!
//! Every registry declared with `define_registry!` has its own slots, so the same type
//! can have one instance per registry.

use slepy::define_registry;
use std::sync::Arc;

#[test]
fn test_multiple_isolated_registries() {
    define_registry!(database);
    define_registry!(cache);
    define_registry!(config);

    database::register("postgresql://localhost".to_string()).unwrap();
    cache::register("redis://localhost".to_string()).unwrap();
    config::register("app_config".to_string()).unwrap();

    let db: Arc<String> = database::get().unwrap();
    let cache_val: Arc<String> = cache::get().unwrap();
    let cfg: Arc<String> = config::get().unwrap();

    assert_eq!(&**db, "postgresql://localhost");
    assert_eq!(&**cache_val, "redis://localhost");
    assert_eq!(&**cfg, "app_config");
}

#[test]
fn test_same_type_different_registries() {
    define_registry!(reg_a);
    define_registry!(reg_b);

    let a = reg_a::get_or_create(|| 100i32).unwrap();
    let b = reg_b::get_or_create(|| 200i32).unwrap();

    assert_eq!(*a, 100);
    assert_eq!(*b, 200);
    // a strict construct in one registry does not see the other
    assert!(reg_a::try_create(|| 1u8).is_ok());
    assert!(reg_b::try_create(|| 1u8).is_ok());
}

#[test]
fn test_registry_does_not_leak_between_instances() {
    define_registry!(isolated_a);
    define_registry!(isolated_b);

    isolated_a::register("only in A".to_string()).unwrap();

    assert!(isolated_a::contains::<String>().unwrap());
    assert!(!isolated_b::contains::<String>().unwrap());

    let result: Result<Arc<String>, _> = isolated_b::get();
    assert!(result.is_err());
}

#[test]
fn test_wrapper_types_get_their_own_slot() {
    define_registry!(wrappers);

    struct Base(&'static str);
    struct Extended(Base);

    let base = wrappers::get_or_create(|| Base("base")).unwrap();
    let extended = wrappers::get_or_create(|| Extended(Base("extended"))).unwrap();

    assert_eq!(base.0, "base");
    assert_eq!(extended.0 .0, "extended");
    assert!(wrappers::try_create(|| Base("again")).is_err());
    assert!(wrappers::try_create(|| Extended(Base("again"))).is_err());
}

#[test]
fn test_registry_scoping() {
    mod module_a {
        use slepy::define_registry;
        define_registry!(scoped);

        pub fn value() -> String {
            scoped::get_or_create(|| "module A".to_string())
                .unwrap()
                .to_string()
        }
    }

    mod module_b {
        use slepy::define_registry;
        define_registry!(scoped);

        pub fn value() -> String {
            scoped::get_or_create(|| "module B".to_string())
                .unwrap()
                .to_string()
        }
    }

    assert_eq!(module_a::value(), "module A");
    assert_eq!(module_b::value(), "module B");
}

#[test]
fn test_registry_with_tracing_isolation() {
    define_registry!(traced_a);
    define_registry!(traced_b);

    let events = Arc::new(std::sync::Mutex::new(Vec::new()));
    let events_clone = events.clone();

    traced_a::set_trace_callback(move |event| {
        events_clone.lock().unwrap().push(format!("{}", event));
    });

    traced_a::register(1i32).unwrap();
    traced_b::register(2i32).unwrap();

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0], "create { type_name: i32 }");
}
