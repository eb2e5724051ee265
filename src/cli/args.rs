use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ArgAction, ColorChoice, Parser, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use artsearch::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };
    let data_dir = match app_dirs::get_data_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("artsearch {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");
    let _ = writeln!(details, "data directory: {data_dir}");

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
    name = "artsearch",
    version,
    long_version = long_version(),
    about = "Interactive search-and-highlight over a fixed set of articles",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `artsearch` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "ARTSEARCH_CONFIG",
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
        short = 'q',
        long = "query",
        value_name = "QUERY",
        env = "ARTSEARCH_QUERY",
        help = "Provide an initial search query (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        short = 'r',
        long,
        value_name = "FILE",
        help = "Load articles from a JSON file instead of the built-in set"
    )]
    pub(crate) records: Option<PathBuf>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(long, help = "List the available theme names and exit")]
    pub(crate) list_themes: bool,
    #[arg(long, help = "Print the effective configuration before starting")]
    pub(crate) print_config: bool,
    #[arg(
        short = 'o',
        long,
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how the final outcome is printed (default: plain)"
    )]
    pub(crate) output: OutputFormat,
}

/// Output format for the outcome printed after the TUI exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_well_formed() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn query_and_theme_flags_parse() {
        let args =
            CliArgs::parse_from(["artsearch", "--query", "react", "--theme", "light", "-o", "json"]);
        assert_eq!(args.initial_query.as_deref(), Some("react"));
        assert_eq!(args.theme.as_deref(), Some("light"));
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn config_flag_accumulates() {
        let args = CliArgs::parse_from(["artsearch", "-c", "a.toml", "-c", "b.toml"]);
        assert_eq!(args.config.len(), 2);
    }
}
