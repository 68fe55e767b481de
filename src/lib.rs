//! # slepy
//!
//! A small terminal toolkit: ANSI colors, per-type singletons with class-level
//! accessors, and a logger factory whose output does not tear `indicatif` progress bars.
//!
//! ## Quick Start
//!
//! ```rust
//! use slepy::{colorize_bool, get_logger_with, Color, Severity};
//!
//! println!("{} {}", Color::CyanBold.paint("ready:"), colorize_bool(true));
//!
//! let log = get_logger_with("importer", Severity::Info);
//! log.info("starting");
//! log.debug("dropped, below INFO");
//! ```
//!
//! ## Singletons
//!
//! ```rust
//! use slepy::Singleton;
//!
//! struct Pool {
//!     size: usize,
//! }
//!
//! impl Singleton for Pool {
//!     fn create() -> Self {
//!         Pool { size: 4 }
//!     }
//! }
//!
//! assert_eq!(Pool::INSTANCE.get().size, 4);
//! ```
//!
//! ## Main Items
//!
//! - [`Color`], [`Colorizer`], [`colorize_bool`] - terminal colors
//! - [`ClassProperty`] - read-only accessors bound to a type
//! - [`RegistryApi`], [`registry`], [`define_registry!`] - one instance per type
//! - [`Singleton`] - strict construction and get-or-create on the global registry
//! - [`LoggerFactory`], [`Logger`], [`LazyLogger`] - named, colored, progress-safe loggers
//! - [`debug_print`], [`debug_print_in`] - debug output with an injected logger

mod class_property;
mod color;
mod config;
mod debug;
mod factory;
mod formatter;
mod lazy_logger;
mod logger;
mod logging_error;
mod macros;
pub mod registry;
mod registry_error;
mod registry_event;
mod registry_trait;
mod severity;
mod singleton;
#[cfg(test)]
mod test_support;
mod writer;

pub use class_property::ClassProperty;
pub use color::{colorize_bool, Color, Colorizer, RESET};
pub use config::{buenos_aires, LoggerConfig, TimestampPrecision, LEVEL_ENV, NO_COLOR_ENV};
pub use debug::{debug_print, debug_print_in, LogContext};
pub use factory::{get_logger, get_logger_with, LevelRequest, LoggerFactory};
pub use formatter::{Record, RecordFormatter};
pub use lazy_logger::LazyLogger;
pub use logger::{Handler, Logger};
pub use logging_error::LoggingError;
pub use registry_error::RegistryError;
pub use registry_event::RegistryEvent;
pub use registry_trait::{RegistryApi, SlotStorage, TraceStorage};
pub use severity::Severity;
pub use singleton::Singleton;
pub use writer::{global_multi_progress, LineWriter, MemoryWriter, ProgressWriter};
