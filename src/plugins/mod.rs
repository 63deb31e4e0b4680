//! Plugin registry and the capability model plugins contribute through.
//!
//! A configuration enables plugins by name; the registry resolves those
//! names deterministically and in order, producing the [`PluginSet`] carried
//! by the loaded record.

pub mod builtin;
mod capability;
mod descriptor;
mod registry;
mod set;

pub use capability::Capability;
pub use descriptor::PluginDescriptor;
pub use registry::{Plugin, PluginRegistry, RegisteredPlugin};
pub use set::PluginSet;
