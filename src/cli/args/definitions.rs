use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser, Subcommand};

use super::styles::{cli_styles, long_version};

#[derive(Parser, Debug)]
#[command(
	name = "hydectl",
	version,
	long_version = long_version(),
	about = "hydectl is a CLI tool for managing HyDE configurations and scripts",
	long_about = "hydectl runs user scripts found on the script search path and \
		provides an interactive browser for editing registered configuration files.",
	color = ColorChoice::Auto,
	styles = cli_styles(),
	allow_external_subcommands = true
)]
/// Command-line arguments accepted by the `hydectl` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "HYDECTL_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading the default configuration file (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		global = true,
		help = "Tracing filter for the log file, e.g. `debug` (default: LOG_LEVEL or config)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "print-config",
		global = true,
		help = "Print the effective configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "script-path",
		value_name = "DIR",
		action = ArgAction::Append,
		global = true,
		help = "Directory to search for scripts; repeatable (default: config or built-in list)"
	)]
	pub(crate) script_paths: Vec<PathBuf>,
	#[arg(
		long,
		value_name = "THEME",
		global = true,
		help = "Select a browser theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(long = "list-themes", help = "List the built-in browser themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(short = 'l', long = "list", help = "List all available scripts")]
	pub(crate) list: bool,
	#[command(subcommand)]
	pub(crate) command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Commands {
	/// Dispatch a script by name
	Dispatch {
		#[arg(short = 'l', long = "list", help = "List all available scripts")]
		list: bool,
		#[arg(
			value_name = "SCRIPT",
			trailing_var_arg = true,
			allow_hyphen_values = true,
			help = "Script name followed by its arguments"
		)]
		args: Vec<String>,
	},
	/// Interactive configuration file editor
	Config {
		#[arg(
			long,
			value_name = "FILE",
			help = "Registry file to browse (default: config or the standard locations)"
		)]
		registry: Option<PathBuf>,
		#[arg(
			long,
			value_name = "COMMAND",
			help = "Editor command to open the selection with (default: config, $EDITOR)"
		)]
		editor: Option<String>,
	},
	/// Reload the HyDE configuration
	Reload,
	/// Print the version number
	Version,
	/// Run a script by name
	#[command(external_subcommand)]
	External(Vec<String>),
}
