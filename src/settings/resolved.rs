use indexmap::IndexMap;
use serde_json::Value;

use crate::content::{ContentGlob, ContentSet};
use crate::plugins::PluginSet;

use super::error::ConfigError;
use super::raw::ConfigDocument;

/// Nested design-token overrides keyed by theme scope (`extend` etc.).
pub type ThemeOverrides = IndexMap<String, Value>;

/// Strategy used to trigger dark-mode variants in generated utilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DarkMode {
    /// Follow the `prefers-color-scheme` media query.
    #[default]
    Media,
    /// Toggle on a `dark` class higher up the tree.
    Class,
    /// Toggle on a user-supplied selector.
    Selector,
}

impl DarkMode {
    /// Return the string representation used by the configuration record.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DarkMode::Media => "media",
            DarkMode::Class => "class",
            DarkMode::Selector => "selector",
        }
    }
}

/// The immutable settings record handed to the build pipeline once loading
/// succeeds.
///
/// Field order mirrors the record; `themes` and `plugins` keep their input
/// order, which downstream phases rely on for display and precedence.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    pub dark_mode: DarkMode,
    pub themes: Vec<String>,
    pub content: Vec<ContentGlob>,
    pub plugins: PluginSet,
    pub overrides: ThemeOverrides,
}

impl BuildConfig {
    /// Serialize the record back into the literal shape it was loaded from.
    #[must_use]
    pub fn to_document(&self) -> ConfigDocument {
        ConfigDocument {
            dark_mode: Some(self.dark_mode.as_str().to_string()),
            themes: Some(self.themes.clone()),
            content: Some(
                self.content
                    .iter()
                    .map(|glob| glob.as_str().to_string())
                    .collect(),
            ),
            theme: self.overrides.clone(),
            plugins: Some(
                self.plugins
                    .ids()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            ),
        }
    }

    /// Compile the configured content globs into a single matcher.
    pub fn content_set(&self) -> Result<ContentSet, ConfigError> {
        ContentSet::compile(&self.content)
    }

    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Dark mode: {}", self.dark_mode.as_str());
        println!("  Themes: {}", self.themes.join(", "));
        println!("  Content globs:");
        for glob in &self.content {
            println!("    {glob}");
        }
        if self.plugins.is_empty() {
            println!("  Plugins: (none)");
        } else {
            println!("  Plugins: {}", self.plugins.ids().join(", "));
            for (namespace, owner) in self.plugins.namespace_owners() {
                println!("    {namespace}: {owner}");
            }
        }
        if !self.overrides.is_empty() {
            let scopes: Vec<&str> = self.overrides.keys().map(String::as_str).collect();
            println!("  Override scopes: {}", scopes.join(", "));
        }
    }
}
