use crate::plugins::{Capability, Plugin, PluginDescriptor};

/// Animation utilities plus the reduced-motion variant wrappers.
pub struct MotionPlugin;

pub static MOTION_DESCRIPTOR: PluginDescriptor = PluginDescriptor {
    id: "motion",
    summary: "Animation utilities and reduced-motion variants",
};

static CAPABILITIES: [Capability; 2] = [
    Capability::Utilities {
        namespace: "motion",
    },
    Capability::Variants {
        prefix: "motion-safe",
    },
];

impl Plugin for MotionPlugin {
    fn descriptor(&self) -> &'static PluginDescriptor {
        &MOTION_DESCRIPTOR
    }

    fn capabilities(&self) -> &'static [Capability] {
        &CAPABILITIES
    }
}
