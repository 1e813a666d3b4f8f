use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches};

use super::{CliArgs, Commands};

fn parse(args: &[&str]) -> CliArgs {
	let mut matches = CliArgs::command()
		.try_get_matches_from(args)
		.expect("arguments parse");
	CliArgs::from_arg_matches_mut(&mut matches).expect("matches convert")
}

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn bare_invocation_has_no_command() {
	let parsed = parse(&["hydectl"]);
	assert!(parsed.command.is_none());
	assert!(!parsed.list);
	assert!(parsed.config.is_empty());
}

#[test]
fn unknown_subcommands_become_script_invocations() {
	let parsed = parse(&["hydectl", "wallpaper", "--next", "-v"]);
	assert_eq!(
		parsed.command,
		Some(Commands::External(vec![
			"wallpaper".to_string(),
			"--next".to_string(),
			"-v".to_string(),
		]))
	);
}

#[test]
fn dispatch_passes_hyphenated_arguments_through() {
	let parsed = parse(&["hydectl", "dispatch", "wallpaper", "--next"]);
	assert_eq!(
		parsed.command,
		Some(Commands::Dispatch {
			list: false,
			args: vec!["wallpaper".to_string(), "--next".to_string()],
		})
	);

	let parsed = parse(&["hydectl", "dispatch", "--list"]);
	assert_eq!(
		parsed.command,
		Some(Commands::Dispatch {
			list: true,
			args: Vec::new(),
		})
	);
}

#[test]
fn global_flags_apply_before_and_after_subcommands() {
	let parsed = parse(&[
		"hydectl",
		"--log-level",
		"debug",
		"config",
		"--registry",
		"/tmp/registry.toml",
		"--no-config",
	]);
	assert_eq!(parsed.log_level.as_deref(), Some("debug"));
	assert!(parsed.no_config);
	assert_eq!(
		parsed.command,
		Some(Commands::Config {
			registry: Some(PathBuf::from("/tmp/registry.toml")),
			editor: None,
		})
	);
}

#[test]
fn builtins_are_not_treated_as_scripts() {
	assert_eq!(parse(&["hydectl", "reload"]).command, Some(Commands::Reload));
	assert_eq!(parse(&["hydectl", "version"]).command, Some(Commands::Version));
}
