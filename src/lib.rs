//! Core crate exports for the `weft` configuration front-end.
//!
//! The root module re-exports the loader entry points and the types a build
//! pipeline needs so that embedders can load a configuration without digging
//! through the module hierarchy.

pub mod app_dirs;
pub mod content;
pub mod plugins;
pub mod settings;
pub mod theme;

pub use content::{ContentGlob, ContentSet};
pub use plugins::{Capability, Plugin, PluginDescriptor, PluginRegistry, PluginSet};
pub use settings::{
    BuildConfig, ConfigDocument, ConfigError, DarkMode, LoadOptions, ThemeOverrides, load,
    load_with,
};
pub use theme::{Scheme, Theme, ThemeDefinition};
