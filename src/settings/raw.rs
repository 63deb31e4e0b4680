use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::content::ContentGlob;
use crate::plugins::PluginRegistry;
use crate::theme;

use super::error::ConfigError;
use super::resolved::{BuildConfig, DarkMode};
use super::util::sanitize_patterns;

/// The configuration record as it is written, before overrides and
/// validation are applied.
///
/// Absent keys take defaults during [`resolve`](ConfigDocument::resolve);
/// the camelCase aliases accept records written in the older key style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigDocument {
    #[serde(alias = "darkMode", skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub themes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,
    /// Theme-scope overrides (`extend` etc.), each an arbitrary token tree.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub theme: IndexMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<String>>,
}

/// Values that take precedence over every file and environment source.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub dark_mode: Option<String>,
    pub themes: Option<Vec<String>>,
    pub content: Option<Vec<String>>,
    pub plugins: Option<Vec<String>>,
}

impl ConfigDocument {
    /// Apply override values on top of the merged document.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(value) = overrides.dark_mode.clone() {
            self.dark_mode = Some(value);
        }
        if let Some(values) = &overrides.themes {
            self.themes = Some(values.clone());
        }
        if let Some(values) = &overrides.content {
            self.content = Some(values.clone());
        }
        if let Some(values) = &overrides.plugins {
            self.plugins = Some(values.clone());
        }
    }

    /// Convert the document into a [`BuildConfig`], validating and filling
    /// defaults where required.
    pub fn resolve(self, registry: &PluginRegistry) -> Result<BuildConfig, ConfigError> {
        let dark_mode = match self.dark_mode {
            Some(value) => parse_dark_mode(&value)?,
            None => DarkMode::Media,
        };

        let themes = self.themes.unwrap_or_else(theme::default_names);
        for name in &themes {
            if theme::by_name(name).is_none() {
                warn!(theme = name.as_str(), "enabled theme is not in the built-in catalog");
            }
        }

        let patterns = sanitize_patterns(self.content.unwrap_or_else(default_content));
        if patterns.is_empty() {
            return Err(ConfigError::malformed(
                "'content' must list at least one glob",
            ));
        }
        let content = patterns
            .iter()
            .map(|pattern| ContentGlob::parse(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        let plugins = registry.resolve(&self.plugins.unwrap_or_default())?;
        if themes.is_empty()
            && let Some(id) = plugins.requires_themes()
        {
            return Err(ConfigError::malformed(format!(
                "'themes' must not be empty while plugin '{id}' is enabled"
            )));
        }

        let overrides = validate_overrides(self.theme)?;

        Ok(BuildConfig {
            dark_mode,
            themes,
            content,
            plugins,
            overrides,
        })
    }
}

/// Parse a dark-mode string into the strongly typed strategy.
fn parse_dark_mode(value: &str) -> Result<DarkMode, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "media" => Ok(DarkMode::Media),
        "class" => Ok(DarkMode::Class),
        "selector" => Ok(DarkMode::Selector),
        other => Err(ConfigError::InvalidOption {
            key: "dark_mode",
            value: other.to_string(),
            expected: "media, class, selector",
        }),
    }
}

/// Content globs used when the record does not list any.
fn default_content() -> Vec<String> {
    vec![
        "./src/**/*.{html,js,svelte,ts}".to_string(),
        "./index.html".to_string(),
    ]
}

/// Ensure each theme scope maps to a token tree, not a bare value.
fn validate_overrides(
    scopes: IndexMap<String, Value>,
) -> Result<IndexMap<String, Value>, ConfigError> {
    for (scope, tree) in &scopes {
        if !tree.is_object() {
            return Err(ConfigError::malformed(format!(
                "theme scope '{scope}' must be a table of token overrides"
            )));
        }
    }
    Ok(scopes)
}
