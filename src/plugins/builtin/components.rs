use crate::plugins::{Capability, Plugin, PluginDescriptor};

/// Theme-aware component classes such as buttons, cards and badges.
///
/// Component colors come from the enabled themes, so this plugin refuses to
/// load into a configuration with an empty theme list.
pub struct ComponentsPlugin;

pub static COMPONENTS_DESCRIPTOR: PluginDescriptor = PluginDescriptor {
    id: "components",
    summary: "Theme-aware component classes (buttons, cards, badges)",
};

static CAPABILITIES: [Capability; 2] = [
    Capability::ThemedComponents {
        namespace: "component",
    },
    Capability::Variants { prefix: "theme" },
];

impl Plugin for ComponentsPlugin {
    fn descriptor(&self) -> &'static PluginDescriptor {
        &COMPONENTS_DESCRIPTOR
    }

    fn capabilities(&self) -> &'static [Capability] {
        &CAPABILITIES
    }
}
