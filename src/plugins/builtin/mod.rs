pub mod components;
pub mod forms;
pub mod motion;
pub mod typography;

use super::registry::PluginRegistry;

pub fn register_builtin_plugins(registry: &mut PluginRegistry) {
    registry.register(components::ComponentsPlugin);
    registry.register(typography::TypographyPlugin);
    registry.register(forms::FormsPlugin);
    registry.register(motion::MotionPlugin);
}

pub fn descriptors() -> &'static [&'static super::PluginDescriptor] {
    &BUILTIN_DESCRIPTORS
}

static BUILTIN_DESCRIPTORS: [&super::PluginDescriptor; 4] = [
    &components::COMPONENTS_DESCRIPTOR,
    &typography::TYPOGRAPHY_DESCRIPTOR,
    &forms::FORMS_DESCRIPTOR,
    &motion::MOTION_DESCRIPTOR,
];
