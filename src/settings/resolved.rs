use std::path::PathBuf;

use artsearch::theme::Theme;

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub(crate) struct ResolvedSettings {
    pub(crate) theme_name: String,
    pub(crate) theme: Theme,
    pub(crate) initial_query: String,
    pub(crate) records_path: Option<PathBuf>,
}

impl ResolvedSettings {
    /// Print a human readable summary of the effective configuration.
    pub(crate) fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Theme: {}", self.theme_name);
        match &self.records_path {
            Some(path) => println!("  Records: {}", path.display()),
            None => println!("  Records: (built-in articles)"),
        }
        if self.initial_query.is_empty() {
            println!("  Initial query: (empty)");
        } else {
            println!("  Initial query: {}", self.initial_query);
        }
    }
}
