mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use dropsheet::{Catalog, logging, tui};
use settings::ResolvedConfig;
use tracing::info;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_form(cli.output, resolved)
}

/// Run the demo screen and print its outcome in the chosen format.
fn run_form(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	if let Some(path) = logging::initialize(&settings.log)? {
		info!(path = %path.display(), "logging initialised");
	}

	let catalog = match &settings.items {
		Some(path) => Catalog::load(path)?,
		None => Catalog::builtin()?,
	};
	info!(items = catalog.len(), theme = %settings.theme_name, "starting form");

	let outcome = dropsheet::run(catalog, settings.screen)?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
