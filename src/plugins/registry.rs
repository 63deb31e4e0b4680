use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::settings::ConfigError;

use super::capability::Capability;
use super::descriptor::PluginDescriptor;
use super::set::PluginSet;

/// A capability-providing unit registered with the build pipeline.
pub trait Plugin: Send + Sync {
    /// Static descriptor advertising plugin metadata.
    fn descriptor(&self) -> &'static PluginDescriptor;

    /// Enumerate the capabilities the plugin contributes.
    fn capabilities(&self) -> &'static [Capability];
}

/// Metadata and implementation pair stored by the registry.
#[derive(Clone)]
pub struct RegisteredPlugin {
    descriptor: &'static PluginDescriptor,
    plugin: Arc<dyn Plugin>,
}

impl RegisteredPlugin {
    #[must_use]
    pub fn new(descriptor: &'static PluginDescriptor, plugin: Arc<dyn Plugin>) -> Self {
        Self { descriptor, plugin }
    }

    #[must_use]
    pub fn id(&self) -> &'static str {
        self.descriptor.id
    }

    #[must_use]
    pub fn descriptor(&self) -> &'static PluginDescriptor {
        self.descriptor
    }

    #[must_use]
    pub fn plugin(&self) -> Arc<dyn Plugin> {
        Arc::clone(&self.plugin)
    }

    /// Capabilities contributed by the underlying plugin.
    #[must_use]
    pub fn capabilities(&self) -> &'static [Capability] {
        self.plugin.capabilities()
    }

    /// Returns `true` when any contributed capability is theme dependent.
    #[must_use]
    pub fn requires_themes(&self) -> bool {
        self.capabilities()
            .iter()
            .any(|capability| capability.is_theme_dependent())
    }
}

impl fmt::Debug for RegisteredPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RegisteredPlugin").field(&self.id()).finish()
    }
}

/// Registry of all plugins known to the build pipeline.
#[derive(Clone)]
pub struct PluginRegistry {
    plugins: Vec<RegisteredPlugin>,
    index: HashMap<&'static str, usize>,
}

impl PluginRegistry {
    /// Create an empty registry without any plugins registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            plugins: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create a registry populated with the built-in plugins.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        super::builtin::register_builtin_plugins(&mut registry);
        registry
    }

    /// Register or replace a plugin implementation for its declared id.
    pub fn register<P>(&mut self, plugin: P)
    where
        P: Plugin + 'static,
    {
        let descriptor = plugin.descriptor();
        let registered = RegisteredPlugin::new(descriptor, Arc::new(plugin));
        if let Some(position) = self.index.get(descriptor.id).copied() {
            self.plugins[position] = registered;
        } else {
            let position = self.plugins.len();
            self.index.insert(descriptor.id, position);
            self.plugins.push(registered);
        }
    }

    /// Lookup a plugin by its stable identifier.
    pub fn plugin(&self, id: &str) -> Option<RegisteredPlugin> {
        self.index
            .get(id.trim())
            .and_then(|position| self.plugins.get(*position).cloned())
    }

    /// Iterate over registered plugins in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredPlugin> {
        self.plugins.iter()
    }

    /// Registered plugin identifiers in registration order.
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        self.plugins.iter().map(RegisteredPlugin::id).collect()
    }

    /// Return the number of registered plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns `true` when no plugins have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Resolve the enabled plugin names into an ordered [`PluginSet`].
    ///
    /// Resolution preserves the input order exactly, keeps duplicate entries,
    /// and fails on the first name the registry does not know.
    pub fn resolve(&self, names: &[String]) -> Result<PluginSet, ConfigError> {
        let mut resolved = Vec::with_capacity(names.len());
        for name in names {
            let plugin = self
                .plugin(name)
                .ok_or_else(|| ConfigError::UnknownPlugin {
                    name: name.trim().to_string(),
                })?;
            resolved.push(plugin);
        }
        Ok(PluginSet::new(resolved))
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) struct FakePlugin {
        descriptor: &'static PluginDescriptor,
        capabilities: &'static [Capability],
    }

    impl FakePlugin {
        pub(crate) fn new(
            descriptor: &'static PluginDescriptor,
            capabilities: &'static [Capability],
        ) -> Self {
            Self {
                descriptor,
                capabilities,
            }
        }
    }

    impl Plugin for FakePlugin {
        fn descriptor(&self) -> &'static PluginDescriptor {
            self.descriptor
        }

        fn capabilities(&self) -> &'static [Capability] {
            self.capabilities
        }
    }

    static FAKE_DESCRIPTOR: PluginDescriptor = PluginDescriptor {
        id: "fake",
        summary: "Test-only plugin",
    };

    #[test]
    fn builtins_are_registered_in_order() {
        let registry = PluginRegistry::new();
        assert_eq!(
            registry.ids(),
            vec!["components", "typography", "forms", "motion"]
        );
    }

    #[test]
    fn register_replaces_in_place_on_duplicate_id() {
        let mut registry = PluginRegistry::new();
        let before = registry.ids();

        registry.register(FakePlugin::new(
            &super::super::builtin::typography::TYPOGRAPHY_DESCRIPTOR,
            &[],
        ));

        assert_eq!(registry.ids(), before);
        let replaced = registry.plugin("typography").unwrap();
        assert!(replaced.capabilities().is_empty());
    }

    #[test]
    fn resolve_preserves_order_and_duplicates() {
        let registry = PluginRegistry::new();
        let names = vec![
            "motion".to_string(),
            "typography".to_string(),
            "motion".to_string(),
        ];

        let set = registry.resolve(&names).unwrap();

        assert_eq!(set.ids(), vec!["motion", "typography", "motion"]);
    }

    #[test]
    fn resolve_fails_on_unknown_plugin() {
        let registry = PluginRegistry::new();
        let err = registry
            .resolve(&["typography".to_string(), "bogus-plugin".to_string()])
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::UnknownPlugin { ref name } if name == "bogus-plugin"
        ));
    }

    #[test]
    fn lookup_trims_surrounding_whitespace() {
        let registry = PluginRegistry::new();
        assert!(registry.plugin(" forms ").is_some());
    }

    #[test]
    fn fake_plugins_can_be_registered_alongside_builtins() {
        let mut registry = PluginRegistry::new();
        registry.register(FakePlugin::new(&FAKE_DESCRIPTOR, &[]));

        assert_eq!(registry.len(), 5);
        assert_eq!(registry.plugin("fake").unwrap().id(), "fake");
    }
}
