use std::path::PathBuf;

use anyhow::{Result, anyhow};
use serde::Deserialize;

use artsearch::theme;

use crate::cli::CliArgs;

use super::resolved::ResolvedSettings;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawSettings {
    ui: UiSection,
    dataset: DatasetSection,
}

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    theme: Option<String>,
    initial_query: Option<String>,
}

/// Dataset configuration values as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DatasetSection {
    records: Option<PathBuf>,
}

impl RawSettings {
    /// Fold CLI arguments over the file/environment values; the CLI wins.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(theme) = &cli.theme {
            self.ui.theme = Some(theme.clone());
        }
        if let Some(query) = &cli.initial_query {
            self.ui.initial_query = Some(query.clone());
        }
        if let Some(records) = &cli.records {
            self.dataset.records = Some(records.clone());
        }
    }

    /// Validate the merged values into application-ready settings.
    pub(super) fn resolve(self) -> Result<ResolvedSettings> {
        let theme_name = self.ui.theme.unwrap_or_else(|| "slate".to_string());
        let theme = theme::by_name(&theme_name).ok_or_else(|| {
            anyhow!(
                "unknown theme '{theme_name}' (available: {})",
                theme::names().join(", ")
            )
        })?;

        Ok(ResolvedSettings {
            theme_name,
            theme,
            initial_query: self.ui.initial_query.unwrap_or_default(),
            records_path: self.dataset.records,
        })
    }
}
