mod cli;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use tracing_subscriber::EnvFilter;
use weft::plugins::PluginRegistry;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = parse_cli();
    let registry = PluginRegistry::new();

    if cli.list_themes {
        for name in weft::theme::names() {
            println!("{name}");
        }
        return Ok(());
    }

    if cli.list_plugins {
        for plugin in registry.iter() {
            println!("{:<12} {}", plugin.id(), plugin.descriptor().summary);
        }
        return Ok(());
    }

    let config = weft::settings::load_with(&cli.load_options(), &registry)?;

    if cli.print_config {
        config.print_summary();
    }

    match cli.output {
        OutputFormat::Plain => print_plain(&config),
        OutputFormat::Json => print_json(&config)?,
    }

    Ok(())
}
