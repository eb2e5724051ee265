mod cli;
mod settings;

use anyhow::Result;
use tracing::info;

use artsearch::{dataset, logging, theme, ui};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedSettings;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in theme::names() {
            println!("{name}");
        }
        return Ok(());
    }

    if let Err(err) = logging::init() {
        eprintln!("warning: file logging disabled: {err}");
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    run_search(cli.output, resolved)
}

/// Run the interactive search and print the outcome in the chosen format.
fn run_search(format: OutputFormat, settings: ResolvedSettings) -> Result<()> {
    let records = match &settings.records_path {
        Some(path) => {
            let records = dataset::load(path)?;
            info!(path = %path.display(), count = records.len(), "loaded records file");
            records
        }
        None => {
            let records = dataset::builtin();
            info!(count = records.len(), "using built-in articles");
            records
        }
    };

    let outcome = ui::run(records, settings.theme, settings.initial_query)?;

    match format {
        OutputFormat::Plain => print_plain(&outcome),
        OutputFormat::Json => print_json(&outcome)?,
    }

    Ok(())
}
