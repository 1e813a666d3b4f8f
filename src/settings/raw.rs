use std::env;
use std::fmt;
use std::path::PathBuf;

use anyhow::{Result, bail};
use hydectl_core::expand;
use hydectl_tui::style;
use serde::Deserialize;

use super::resolved::ResolvedConfig;
use crate::app_dirs;
use crate::cli::CliArgs;

/// Theme used when neither the command line nor the config names one.
pub(super) const DEFAULT_THEME: &str = "slate";
/// Environment variable consulted for the log level after `--log-level`.
pub(super) const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) scripts: ScriptsSection,
	pub(super) registry: RegistrySection,
	pub(super) ui: UiSection,
	pub(super) editor: EditorSection,
	pub(super) log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ScriptsSection {
	pub(super) paths: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RegistrySection {
	pub(super) path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) highlight_theme: Option<String>,
	pub(super) syntax_highlighting: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct EditorSection {
	pub(super) command: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
}

/// Where a setting's value came from, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SettingSource {
	CliFlag(&'static str),
	ConfigKey(&'static str),
	Default,
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
			Self::Default => write!(f, "the built-in default"),
		}
	}
}

impl RawConfig {
	/// Apply CLI flags and defaults, producing the settings the workflows use.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let (theme_name, theme_source) = match (&cli.theme, &self.ui.theme) {
			(Some(name), _) => (name.clone(), SettingSource::CliFlag("--theme")),
			(None, Some(name)) => (name.clone(), SettingSource::ConfigKey("ui.theme")),
			(None, None) => (DEFAULT_THEME.to_string(), SettingSource::Default),
		};
		let Some(registration) = style::by_name(&theme_name) else {
			bail!(
				"unknown theme `{theme_name}` from {theme_source} (available: {})",
				style::names().join(", ")
			);
		};

		let log_level = cli
			.log_level
			.clone()
			.or_else(|| env::var(LOG_LEVEL_ENV).ok().filter(|level| !level.is_empty()))
			.or(self.log.level);

		Ok(ResolvedConfig {
			script_paths: script_paths(&cli.script_paths, self.scripts.paths),
			registry_path: self.registry.path.as_deref().map(expand),
			registry_candidates: app_dirs::registry_candidates(),
			bat_theme: self
				.ui
				.highlight_theme
				.or_else(|| registration.bat_theme.clone()),
			theme_name: registration.name,
			theme: registration.theme,
			syntax_highlighting: self.ui.syntax_highlighting.unwrap_or(true),
			editor: self.editor.command.filter(|command| !command.trim().is_empty()),
			log_level,
		})
	}
}

/// Script search directories: CLI flags, then config, then the built-in list.
fn script_paths(cli: &[PathBuf], configured: Option<Vec<String>>) -> Vec<PathBuf> {
	if !cli.is_empty() {
		return cli.to_vec();
	}
	if let Some(paths) = configured.filter(|paths| !paths.is_empty()) {
		return paths.iter().map(|path| expand(path)).collect();
	}
	app_dirs::script_dirs()
}

#[cfg(test)]
mod tests;
