//! Configuration loading and resolution.
//!
//! The pipeline is decomposed into layered submodules: `sources` assembles
//! the merged [`config::Config`], `raw` mirrors the on-disk record, and
//! `resolved` holds the validated [`BuildConfig`]. `load` is the primary
//! entry point and runs once at pipeline startup; the record it returns is
//! read-only for the remainder of the run.

mod error;
mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use error::ConfigError;
pub use loader::{LoadOptions, load, load_with};
pub use raw::{ConfigDocument, ConfigOverrides};
pub use resolved::{BuildConfig, DarkMode, ThemeOverrides};
