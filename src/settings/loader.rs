use std::path::PathBuf;

use tracing::debug;

use crate::plugins::PluginRegistry;

use super::error::ConfigError;
use super::raw::{ConfigDocument, ConfigOverrides};
use super::resolved::BuildConfig;
use super::sources::build_sources;

/// Inputs controlling where configuration is read from.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Additional configuration files merged after the default locations.
    pub config_files: Vec<PathBuf>,
    /// Skip the default file locations entirely.
    pub no_default_files: bool,
    /// Values that take precedence over every file and environment source.
    pub overrides: ConfigOverrides,
}

/// Load configuration by combining overrides, config files and environment
/// variables, resolving plugins against the built-in registry.
pub fn load(options: &LoadOptions) -> Result<BuildConfig, ConfigError> {
    load_with(options, &PluginRegistry::new())
}

/// Load configuration resolving plugins against the provided registry.
pub fn load_with(
    options: &LoadOptions,
    registry: &PluginRegistry,
) -> Result<BuildConfig, ConfigError> {
    let sources = build_sources(options)?;
    let mut document: ConfigDocument = sources
        .try_deserialize()
        .map_err(|err| ConfigError::malformed(err.to_string()))?;
    document.apply_overrides(&options.overrides);
    debug!("resolving configuration record");
    document.resolve(registry)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::settings::DarkMode;

    use super::*;

    fn options_for(path: PathBuf) -> LoadOptions {
        LoadOptions {
            config_files: vec![path],
            no_default_files: true,
            overrides: ConfigOverrides::default(),
        }
    }

    #[test]
    fn record_loads_from_an_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weft.toml");
        fs::write(
            &path,
            r##"
dark_mode = "class"
themes = ["cupcake", "night"]
content = ["./src/**/*.{html,ts}"]
plugins = ["components", "typography"]

[theme.extend.colors]
primary = "#ff0000"
"##,
        )
        .unwrap();

        let config = load(&options_for(path)).unwrap();

        assert_eq!(config.dark_mode, DarkMode::Class);
        assert_eq!(config.themes, vec!["cupcake", "night"]);
        assert_eq!(config.content.len(), 1);
        assert_eq!(config.plugins.ids(), vec!["components", "typography"]);
        assert_eq!(config.overrides["extend"]["colors"]["primary"], "#ff0000");
    }

    #[test]
    fn loading_twice_yields_equal_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weft.toml");
        fs::write(&path, "themes = [\"light\"]\n").unwrap();

        let options = options_for(path);
        let first = load(&options).unwrap();
        let second = load(&options).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn overrides_beat_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weft.toml");
        fs::write(&path, "dark_mode = \"media\"\nplugins = [\"forms\"]\n").unwrap();

        let mut options = options_for(path);
        options.overrides.dark_mode = Some("selector".into());
        options.overrides.plugins = Some(vec!["motion".into()]);

        let config = load(&options).unwrap();

        assert_eq!(config.dark_mode, DarkMode::Selector);
        assert_eq!(config.plugins.ids(), vec!["motion"]);
    }

    #[test]
    fn missing_explicit_file_aborts_the_load() {
        let dir = tempfile::tempdir().unwrap();
        let options = options_for(dir.path().join("absent.toml"));

        let err = load(&options).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedRecord { .. }));
    }

    #[test]
    fn structurally_invalid_records_are_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weft.toml");
        fs::write(&path, "themes = \"not-a-list\"\n").unwrap();

        let err = load(&options_for(path)).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedRecord { .. }));
    }

    #[test]
    fn validation_failures_surface_from_files_too() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weft.toml");
        fs::write(&path, "plugins = [\"bogus-plugin\"]\n").unwrap();

        let err = load(&options_for(path)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownPlugin { ref name } if name == "bogus-plugin"
        ));
    }
}
