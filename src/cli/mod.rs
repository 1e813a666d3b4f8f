mod args;
mod output;

pub(crate) use args::{CliArgs, Commands, parse_cli, print_subcommand_help, print_top_level_help};
pub(crate) use output::{format_columns, print_script_list};
