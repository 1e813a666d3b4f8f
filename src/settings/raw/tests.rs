use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches};
use tempfile::tempdir;

use super::*;
use crate::settings::load;

fn cli(args: &[&str]) -> CliArgs {
	let mut matches = CliArgs::command()
		.try_get_matches_from(args)
		.expect("arguments parse");
	CliArgs::from_arg_matches_mut(&mut matches).expect("matches convert")
}

#[test]
fn defaults_apply_without_any_sources() {
	let resolved = RawConfig::default()
		.resolve(&cli(&["hydectl", "--log-level", "off"]))
		.expect("defaults resolve");
	assert_eq!(resolved.theme_name, DEFAULT_THEME);
	assert!(resolved.syntax_highlighting);
	assert_eq!(resolved.bat_theme.as_deref(), Some("Monokai Extended"));
	assert_eq!(resolved.script_paths, app_dirs::script_dirs());
	assert!(resolved.registry_path.is_none());
	assert_eq!(resolved.registry_candidates.len(), 4);
	assert!(
		resolved.registry_candidates[0].ends_with("hydectl/config-registry.toml"),
		"{:?}",
		resolved.registry_candidates[0]
	);
}

#[test]
fn cli_flags_override_the_config_file() {
	let raw = RawConfig {
		scripts: ScriptsSection {
			paths: Some(vec!["/from/config".into()]),
		},
		ui: UiSection {
			theme: Some("light".into()),
			..UiSection::default()
		},
		..RawConfig::default()
	};
	let resolved = raw
		.resolve(&cli(&[
			"hydectl",
			"--theme",
			"solarized",
			"--script-path",
			"/from/cli",
		]))
		.expect("resolves");
	assert_eq!(resolved.theme_name, "solarized");
	assert_eq!(resolved.script_paths, vec![PathBuf::from("/from/cli")]);
}

#[test]
fn configured_script_paths_replace_the_defaults() {
	let raw = RawConfig {
		scripts: ScriptsSection {
			paths: Some(vec!["/a".into(), "/b".into()]),
		},
		..RawConfig::default()
	};
	let resolved = raw.resolve(&cli(&["hydectl"])).expect("resolves");
	assert_eq!(
		resolved.script_paths,
		vec![PathBuf::from("/a"), PathBuf::from("/b")]
	);
}

#[test]
fn unknown_themes_are_reported_with_their_source() {
	let raw = RawConfig {
		ui: UiSection {
			theme: Some("neon".into()),
			..UiSection::default()
		},
		..RawConfig::default()
	};
	let err = raw.resolve(&cli(&["hydectl"])).expect_err("unknown theme");
	let message = err.to_string();
	assert!(message.contains("`neon`"), "{message}");
	assert!(message.contains("ui.theme"), "{message}");
}

#[test]
fn explicit_config_files_are_merged() {
	let dir = tempdir().expect("tempdir");
	let path = dir.path().join("extra.toml");
	fs::write(
		&path,
		r#"
[registry]
path = "/etc/hydectl/registry.toml"

[ui]
theme = "ansi"
highlight_theme = "Nord"
syntax_highlighting = false

[editor]
command = "code --wait"
"#,
	)
	.expect("write config");

	let path_arg = path.display().to_string();
	let resolved = load(&cli(&[
		"hydectl",
		"--no-config",
		"--log-level",
		"warn",
		"--config",
		&path_arg,
	]))
	.expect("config loads");

	assert_eq!(
		resolved.registry_path,
		Some(PathBuf::from("/etc/hydectl/registry.toml"))
	);
	assert_eq!(resolved.theme_name, "ansi");
	assert_eq!(resolved.bat_theme.as_deref(), Some("Nord"));
	assert!(!resolved.syntax_highlighting);
	assert_eq!(resolved.editor.as_deref(), Some("code --wait"));
	assert_eq!(resolved.log_level.as_deref(), Some("warn"));
}

#[test]
fn missing_explicit_config_files_are_errors() {
	let dir = tempdir().expect("tempdir");
	let path_arg = dir.path().join("absent.toml").display().to_string();
	assert!(load(&cli(&["hydectl", "--no-config", "--config", &path_arg])).is_err());
}
