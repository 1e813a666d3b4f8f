mod definitions;
mod styles;

use std::io;

use clap::{CommandFactory, Parser};
pub(crate) use definitions::{CliArgs, Commands};

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

/// Print the top-level help text.
pub(crate) fn print_top_level_help() -> io::Result<()> {
	CliArgs::command().print_help()
}

/// Print the help text of one subcommand.
pub(crate) fn print_subcommand_help(name: &str) -> io::Result<()> {
	let mut command = CliArgs::command();
	command.build();
	match command.find_subcommand_mut(name) {
		Some(subcommand) => subcommand.print_help(),
		None => command.print_help(),
	}
}

#[cfg(test)]
mod tests;
