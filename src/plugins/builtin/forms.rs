use crate::plugins::{Capability, Plugin, PluginDescriptor};

/// Resettable base styles for form controls.
pub struct FormsPlugin;

pub static FORMS_DESCRIPTOR: PluginDescriptor = PluginDescriptor {
    id: "forms",
    summary: "Base styles and utilities for form controls",
};

static CAPABILITIES: [Capability; 1] = [Capability::Utilities { namespace: "field" }];

impl Plugin for FormsPlugin {
    fn descriptor(&self) -> &'static PluginDescriptor {
        &FORMS_DESCRIPTOR
    }

    fn capabilities(&self) -> &'static [Capability] {
        &CAPABILITIES
    }
}
