use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `dropsheet` binary.
#[derive(Parser, Debug)]
#[command(
	name = "dropsheet",
	version,
	long_version = long_version(),
	about = "Form demo with a searchable, paginated dropdown picker and a bottom sheet",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "DROPSHEET_CONFIG",
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
		short = 'i',
		long,
		value_name = "FILE",
		help = "JSON list of {label, value} items to serve (default: built-in cities)"
	)]
	pub(crate) items: Option<PathBuf>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Label shown above the pickers (default: City)"
	)]
	pub(crate) label: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Text shown while nothing is selected (default: Select city)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long = "search-placeholder",
		value_name = "TEXT",
		help = "Placeholder of the search input (default: \"Search \")"
	)]
	pub(crate) search_placeholder: Option<String>,
	#[arg(
		long,
		value_parser = BoolishValueParser::new(),
		help = "Require a selection before the form can be submitted (default: enabled)"
	)]
	pub(crate) required: Option<bool>,
	#[arg(
		long,
		value_parser = BoolishValueParser::new(),
		help = "Show a search input in the open list (default: enabled)"
	)]
	pub(crate) searchable: Option<bool>,
	#[arg(
		long = "disable-local-search",
		value_parser = BoolishValueParser::new(),
		help = "Leave filtering to the item provider (default: disabled)"
	)]
	pub(crate) disable_local_search: Option<bool>,
	#[arg(
		short = 'm',
		long,
		value_parser = BoolishValueParser::new(),
		help = "Allow selecting several items (default: disabled)"
	)]
	pub(crate) multiple: Option<bool>,
	#[arg(
		long = "show-error-line",
		value_parser = BoolishValueParser::new(),
		help = "Reserve a line for validation errors (default: enabled)"
	)]
	pub(crate) show_error_line: Option<bool>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period before a typed keyword is searched (default: 800)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "page-size",
		value_name = "NUM",
		help = "Items per provider page (default: 10)"
	)]
	pub(crate) page_size: Option<usize>,
	#[arg(
		long = "dropdown-height",
		value_name = "ROWS",
		help = "Maximum height of the open list (default: 12)"
	)]
	pub(crate) dropdown_height: Option<u16>,
	#[arg(
		long = "snap-points",
		value_delimiter = ',',
		value_name = "PERCENT",
		help = "Comma-separated sheet heights in percent of the screen (default: 25,70)"
	)]
	pub(crate) snap_points: Option<Vec<u16>>,
	#[arg(
		long = "initial-index",
		value_name = "INDEX",
		help = "Snap point the sheet opens at (default: 1)"
	)]
	pub(crate) initial_index: Option<usize>,
	#[arg(
		long = "latency-ms",
		value_name = "MS",
		help = "Simulated provider latency (default: 600)"
	)]
	pub(crate) latency_ms: Option<u64>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter used when RUST_LOG is unset (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: dropsheet.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(long = "no-log", help = "Disable logging (default: disabled)")]
	pub(crate) no_log: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}
