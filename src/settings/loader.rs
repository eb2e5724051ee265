use anyhow::{Result, anyhow};

use crate::cli::CliArgs;

use super::raw::RawSettings;
use super::resolved::ResolvedSettings;
use super::sources::build_config;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedSettings> {
    let builder = build_config(cli)?;
    let mut raw: RawSettings = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    fn cli(args: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("artsearch").chain(args.iter().copied()))
    }

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp config");
        write!(file, "{contents}").expect("write config");
        file
    }

    #[test]
    fn config_file_values_are_picked_up() {
        let file = config_file("[ui]\ntheme = \"light\"\ninitial_query = \"hooks\"\n");
        let path = file.path().to_str().expect("utf-8 path");
        let settings = load(&cli(&["--no-config", "-c", path])).expect("load");
        assert_eq!(settings.theme_name, "light");
        assert_eq!(settings.initial_query, "hooks");
    }

    #[test]
    fn cli_overrides_beat_config_files() {
        let file = config_file("[ui]\ntheme = \"light\"\ninitial_query = \"hooks\"\n");
        let path = file.path().to_str().expect("utf-8 path");
        let settings = load(&cli(&[
            "--no-config",
            "-c",
            path,
            "--theme",
            "solarized",
            "--query",
            "router",
        ]))
        .expect("load");
        assert_eq!(settings.theme_name, "solarized");
        assert_eq!(settings.initial_query, "router");
    }

    #[test]
    fn unknown_theme_is_rejected_with_the_known_names() {
        let err = load(&cli(&["--no-config", "--theme", "midnight-disco"]))
            .expect_err("unknown theme must fail");
        let message = err.to_string();
        assert!(message.contains("midnight-disco"));
        assert!(message.contains("slate"));
    }

    #[test]
    fn defaults_apply_without_any_sources() {
        let settings = load(&cli(&["--no-config"])).expect("load");
        assert_eq!(settings.theme_name, "slate");
        assert_eq!(settings.initial_query, "");
        assert!(settings.records_path.is_none());
    }

    #[test]
    fn records_path_from_config_is_kept() {
        let file = config_file("[dataset]\nrecords = \"articles.json\"\n");
        let path = file.path().to_str().expect("utf-8 path");
        let settings = load(&cli(&["--no-config", "-c", path])).expect("load");
        assert_eq!(
            settings.records_path.as_deref(),
            Some(std::path::Path::new("articles.json"))
        );
    }
}
