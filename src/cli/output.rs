use anyhow::Result;
use weft::BuildConfig;

/// Print a plain-text representation of the resolved record.
pub(crate) fn print_plain(config: &BuildConfig) {
    println!("dark-mode: {}", config.dark_mode.as_str());
    println!("themes: {}", config.themes.join(", "));
    for glob in &config.content {
        println!("content: {glob}");
    }
    if config.plugins.is_empty() {
        println!("plugins: (none)");
    }
    for plugin in config.plugins.iter() {
        println!("plugin: {} ({})", plugin.id(), plugin.descriptor().summary);
    }
}

/// Format the resolved record as a JSON string in the literal shape.
pub(crate) fn format_config_json(config: &BuildConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&config.to_document())?)
}

/// Print the JSON representation of the resolved record.
pub(crate) fn print_json(config: &BuildConfig) -> Result<()> {
    println!("{}", format_config_json(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use weft::plugins::PluginRegistry;
    use weft::settings::ConfigDocument;

    use super::*;

    #[test]
    fn json_format_reflects_the_record_shape() {
        let config = ConfigDocument {
            dark_mode: Some("class".into()),
            themes: Some(vec!["light".into()]),
            plugins: Some(vec!["motion".into()]),
            ..ConfigDocument::default()
        }
        .resolve(&PluginRegistry::new())
        .unwrap();

        let json = format_config_json(&config).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");

        assert_eq!(value["dark_mode"], "class");
        assert_eq!(value["themes"][0], "light");
        assert_eq!(value["plugins"][0], "motion");
    }
}
