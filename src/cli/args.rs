use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ArgAction, ColorChoice, Parser, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use weft::app_dirs;
use weft::settings::{ConfigOverrides, LoadOptions};

/// Produce the full version banner including the config directory.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("weft {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");

    Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "weft",
    version,
    long_version = long_version(),
    about = "Configuration front-end for the weft utility-class build pipeline",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `weft` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "WEFT_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'd',
        long = "dark-mode",
        value_enum,
        help = "Override the dark-mode strategy (default: media)"
    )]
    pub(crate) dark_mode: Option<DarkModeArg>,
    #[arg(
        long = "themes",
        value_delimiter = ',',
        value_name = "NAME",
        help = "Comma-separated theme names to enable (default: light,dark)"
    )]
    pub(crate) themes: Option<Vec<String>>,
    // No value delimiter here: alternate groups such as *.{html,ts} contain
    // commas, so the flag is repeatable instead.
    #[arg(
        long = "content",
        value_name = "GLOB",
        action = ArgAction::Append,
        help = "Content glob to scan, repeatable (default: ./src sources)"
    )]
    pub(crate) content: Option<Vec<String>>,
    #[arg(
        long = "plugins",
        value_delimiter = ',',
        value_name = "ID",
        help = "Comma-separated plugin ids to enable (default: none)"
    )]
    pub(crate) plugins: Option<Vec<String>>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration summary (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List built-in themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        long = "list-plugins",
        help = "List registered plugins and exit (default: disabled)"
    )]
    pub(crate) list_plugins: bool,
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the resolved record")]
    pub(crate) output: OutputFormat,
}

impl CliArgs {
    /// Convert CLI values into loader inputs.
    pub(crate) fn load_options(&self) -> LoadOptions {
        LoadOptions {
            config_files: self.config.clone(),
            no_default_files: self.no_config,
            overrides: ConfigOverrides {
                dark_mode: self.dark_mode.map(|mode| mode.as_str().to_string()),
                themes: self.themes.clone(),
                content: self.content.clone(),
                plugins: self.plugins.clone(),
            },
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
/// Dark-mode strategies accepted via the command line.
pub(crate) enum DarkModeArg {
    Media,
    Class,
    Selector,
}

impl DarkModeArg {
    /// Return the string representation consumed by configuration loading.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            DarkModeArg::Media => "media",
            DarkModeArg::Class => "class",
            DarkModeArg::Selector => "selector",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn parse_cli_accepts_default_arguments() {
        let command = CliArgs::command();
        let matches = command.get_matches_from(vec!["weft"]);
        drop(matches);

        let parsed = CliArgs::parse_from(["weft"]);
        assert_eq!(parsed.output, OutputFormat::Plain);
        assert!(!parsed.no_config);
    }

    #[test]
    fn load_options_carry_cli_overrides() {
        let parsed = CliArgs::parse_from([
            "weft",
            "--dark-mode",
            "class",
            "--themes",
            "light,night",
            "--plugins",
            "typography",
            "--no-config",
        ]);

        let options = parsed.load_options();

        assert!(options.no_default_files);
        assert_eq!(options.overrides.dark_mode.as_deref(), Some("class"));
        assert_eq!(
            options.overrides.themes,
            Some(vec!["light".to_string(), "night".to_string()])
        );
        assert_eq!(
            options.overrides.plugins,
            Some(vec!["typography".to_string()])
        );
        assert_eq!(options.overrides.content, None);
    }
}
