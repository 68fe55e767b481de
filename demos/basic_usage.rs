//! Basic usage example for slepy.
//!
//! Demonstrates:
//! - Per-type singletons with the `Singleton` trait and its `INSTANCE` class property
//! - Strict construction failing once an instance exists
//! - An isolated registry built with `define_registry!`
//! - Named loggers from the global factory
//!
//! Run with: `cargo run --example basic_usage`

use slepy::{define_registry, get_logger_with, Severity, Singleton};
use std::sync::Arc;

define_registry!(app);

#[derive(Debug)]
struct AppConfig {
    name: String,
    workers: usize,
}

impl Singleton for AppConfig {
    fn create() -> Self {
        AppConfig {
            name: "demo".to_string(),
            workers: 4,
        }
    }
}

fn main() {
    let log = get_logger_with("basic_usage", Severity::Debug);

    // -------------------------------------------------------------------------
    // 1. Strict construction pins the instance
    // -------------------------------------------------------------------------
    let config = AppConfig::construct(AppConfig {
        name: "basic".to_string(),
        workers: 8,
    })
    .unwrap();
    log.info(format_args!("constructed {config:?}"));

    match AppConfig::construct(AppConfig::create()) {
        Ok(_) => log.error("second construct unexpectedly succeeded"),
        Err(e) => log.warning(format_args!("expected: {e}")),
    }

    // -------------------------------------------------------------------------
    // 2. The class property always yields the same instance
    // -------------------------------------------------------------------------
    let via_property = AppConfig::INSTANCE.get();
    log.debug(format_args!(
        "INSTANCE is the constructed one: {}",
        Arc::ptr_eq(&config, &via_property)
    ));

    // -------------------------------------------------------------------------
    // 3. Isolated registry
    // -------------------------------------------------------------------------
    let answer = app::get_or_create(|| 42u32).unwrap();
    let again = app::get_or_create(|| 0u32).unwrap();
    log.info(format_args!("app registry u32 = {answer}, reused = {}", *again));
    log.info(format_args!(
        "global AppConfig in app registry: {}",
        app::contains::<AppConfig>().unwrap()
    ));
    log.info(format_args!("{} runs {} workers", config.name, config.workers));
}
