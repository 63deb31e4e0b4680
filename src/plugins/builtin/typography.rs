use crate::plugins::{Capability, Plugin, PluginDescriptor};

/// Typographic defaults for long-form content under the `prose` namespace.
pub struct TypographyPlugin;

pub static TYPOGRAPHY_DESCRIPTOR: PluginDescriptor = PluginDescriptor {
    id: "typography",
    summary: "Typographic defaults for long-form content",
};

static CAPABILITIES: [Capability; 1] = [Capability::Utilities { namespace: "prose" }];

impl Plugin for TypographyPlugin {
    fn descriptor(&self) -> &'static PluginDescriptor {
        &TYPOGRAPHY_DESCRIPTOR
    }

    fn capabilities(&self) -> &'static [Capability] {
        &CAPABILITIES
    }
}
