use std::fmt;

use indexmap::IndexMap;

use super::registry::RegisteredPlugin;

/// Ordered collection of the plugins enabled by a configuration.
///
/// The order is the registration order from the configuration record and
/// doubles as precedence: when two plugins claim the same utility namespace
/// the later entry wins.
#[derive(Clone, Default)]
pub struct PluginSet {
    plugins: Vec<RegisteredPlugin>,
}

impl PluginSet {
    /// A set with no plugins enabled.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(plugins: Vec<RegisteredPlugin>) -> Self {
        Self { plugins }
    }

    /// Enabled plugin identifiers in configuration order.
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        self.plugins.iter().map(RegisteredPlugin::id).collect()
    }

    /// Iterate over the enabled plugins in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredPlugin> {
        self.plugins.iter()
    }

    /// Return the number of enabled plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns `true` when no plugins are enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// The first enabled plugin that cannot render without themes, if any.
    #[must_use]
    pub fn requires_themes(&self) -> Option<&'static str> {
        self.plugins
            .iter()
            .find(|plugin| plugin.requires_themes())
            .map(RegisteredPlugin::id)
    }

    /// Map each claimed utility namespace to the plugin that owns it.
    ///
    /// Later entries shadow earlier ones, so the returned mapping reflects
    /// the effective precedence on conflicting namespaces.
    #[must_use]
    pub fn namespace_owners(&self) -> IndexMap<&'static str, &'static str> {
        let mut owners = IndexMap::new();
        for plugin in &self.plugins {
            for capability in plugin.capabilities() {
                if let Some(namespace) = capability.namespace() {
                    owners.insert(namespace, plugin.id());
                }
            }
        }
        owners
    }
}

impl fmt::Debug for PluginSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PluginSet").field(&self.ids()).finish()
    }
}

impl PartialEq for PluginSet {
    fn eq(&self, other: &Self) -> bool {
        self.plugins.len() == other.plugins.len()
            && self
                .plugins
                .iter()
                .zip(other.plugins.iter())
                .all(|(a, b)| std::ptr::eq(a.descriptor(), b.descriptor()))
    }
}

impl Eq for PluginSet {}

#[cfg(test)]
mod tests {
    use super::super::capability::Capability;
    use super::super::descriptor::PluginDescriptor;
    use super::super::registry::{PluginRegistry, tests::FakePlugin};
    use super::*;

    static SHADOWING_DESCRIPTOR: PluginDescriptor = PluginDescriptor {
        id: "prose-extras",
        summary: "Test-only plugin claiming the prose namespace",
    };

    static SHADOWING_CAPABILITIES: [Capability; 1] =
        [Capability::Utilities { namespace: "prose" }];

    #[test]
    fn later_plugins_win_conflicting_namespaces() {
        let mut registry = PluginRegistry::new();
        registry.register(FakePlugin::new(
            &SHADOWING_DESCRIPTOR,
            &SHADOWING_CAPABILITIES,
        ));

        let set = registry
            .resolve(&["typography".to_string(), "prose-extras".to_string()])
            .unwrap();
        assert_eq!(set.namespace_owners().get("prose"), Some(&"prose-extras"));

        let reversed = registry
            .resolve(&["prose-extras".to_string(), "typography".to_string()])
            .unwrap();
        assert_eq!(reversed.namespace_owners().get("prose"), Some(&"typography"));
    }

    #[test]
    fn requires_themes_reports_the_offending_plugin() {
        let registry = PluginRegistry::new();

        let themed = registry.resolve(&["components".to_string()]).unwrap();
        assert_eq!(themed.requires_themes(), Some("components"));

        let plain = registry.resolve(&["typography".to_string()]).unwrap();
        assert_eq!(plain.requires_themes(), None);
    }

    #[test]
    fn equality_follows_identifier_order() {
        let registry = PluginRegistry::new();
        let a = registry
            .resolve(&["forms".to_string(), "motion".to_string()])
            .unwrap();
        let b = registry
            .resolve(&["forms".to_string(), "motion".to_string()])
            .unwrap();
        let c = registry
            .resolve(&["motion".to_string(), "forms".to_string()])
            .unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(PluginSet::empty(), PluginSet::empty());
    }
}
