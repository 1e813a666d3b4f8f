mod app_dirs;
mod builtins;
mod cli;
mod dispatch;
mod logging;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use cli::{CliArgs, Commands, format_columns, parse_cli, print_script_list};
use settings::ResolvedConfig;
use workflow::ConfigWorkflow;

fn main() -> ExitCode {
	match run(parse_cli()) {
		Ok(code) => code,
		Err(err) => {
			tracing::error!("{err:#}");
			eprintln!("Error: {err:#}");
			ExitCode::FAILURE
		}
	}
}

fn run(cli: CliArgs) -> Result<ExitCode> {
	if cli.list_themes {
		for name in hydectl_tui::style::names() {
			println!("{name}");
		}
		return Ok(ExitCode::SUCCESS);
	}

	let resolved = settings::load(&cli)?;
	if let Err(err) = logging::initialize(resolved.log_level.as_deref()) {
		eprintln!("Warning: logging disabled: {err:#}");
	}

	if cli.print_config {
		resolved.print_summary();
	}

	match cli.command {
		None if cli.list => list_scripts(&resolved),
		None => print_overview(&resolved),
		Some(Commands::Dispatch { list: true, .. }) => list_scripts(&resolved),
		Some(Commands::Dispatch { args, .. }) | Some(Commands::External(args)) => {
			match args.split_first() {
				Some((name, rest)) => {
					let code = dispatch::run(&resolved.script_paths, name, rest)?;
					Ok(ExitCode::from(code))
				}
				None => {
					cli::print_subcommand_help("dispatch")?;
					Ok(ExitCode::SUCCESS)
				}
			}
		}
		Some(Commands::Config { registry, editor }) => {
			ConfigWorkflow::from_config(&resolved, registry, editor)?.run()?;
			Ok(ExitCode::SUCCESS)
		}
		Some(Commands::Reload) => {
			builtins::reload()?;
			Ok(ExitCode::SUCCESS)
		}
		Some(Commands::Version) => {
			println!("{}", builtins::version_line());
			Ok(ExitCode::SUCCESS)
		}
	}
}

fn list_scripts(settings: &ResolvedConfig) -> Result<ExitCode> {
	let names = dispatch::script_names(&settings.script_paths)?;
	print_script_list("Available Scripts:", &names);
	Ok(ExitCode::SUCCESS)
}

/// Top-level help followed by the scripts that can be run as subcommands.
fn print_overview(settings: &ResolvedConfig) -> Result<ExitCode> {
	cli::print_top_level_help()?;
	let names = dispatch::script_names(&settings.script_paths)?;
	if !names.is_empty() {
		println!("\nPlugin Commands:");
		print!("{}", format_columns(&names));
	}
	Ok(ExitCode::SUCCESS)
}
