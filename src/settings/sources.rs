use std::env;
use std::path::PathBuf;

use config::{Config, ConfigError as BuilderError, File};
use tracing::debug;

use crate::app_dirs;

use super::error::ConfigError;
use super::loader::LoadOptions;

/// Build a [`Config`] instance combining default locations, explicit files
/// and environment variables.
pub(super) fn build_sources(options: &LoadOptions) -> Result<Config, ConfigError> {
    let mut builder = Config::builder();

    if !options.no_default_files {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &options.config_files {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("weft")
            .separator("__")
            .try_parsing(true)
            .list_separator(","),
    );

    builder.build().map_err(|err| match err {
        BuilderError::Frozen => ConfigError::malformed("configuration builder is frozen"),
        other => ConfigError::malformed(other.to_string()),
    })
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("weft.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".weft.toml"));
        files.push(current_dir.join("weft.toml"));
    }

    debug!(locations = files.len(), "assembled default configuration locations");
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_files_include_current_directory_variants() {
        let files = default_config_files();
        assert!(files.iter().any(|path| path.ends_with(".weft.toml")));
        assert!(files.iter().any(|path| path.ends_with("weft.toml")));
    }
}
