use std::path::PathBuf;

use hydectl_tui::{BrowserOptions, Theme};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	/// Script search directories, in priority order.
	pub(crate) script_paths: Vec<PathBuf>,
	/// Explicit registry file, if configured.
	pub(crate) registry_path: Option<PathBuf>,
	/// Registry locations tried when no explicit path is set.
	pub(crate) registry_candidates: Vec<PathBuf>,
	pub(crate) theme_name: String,
	pub(crate) theme: Theme,
	pub(crate) bat_theme: Option<String>,
	pub(crate) syntax_highlighting: bool,
	/// Editor command overriding `$EDITOR`.
	pub(crate) editor: Option<String>,
	/// `tracing` filter for the log file; `None` or `off` disables logging.
	pub(crate) log_level: Option<String>,
}

impl ResolvedConfig {
	/// Options for the configuration browser.
	pub(crate) fn browser_options(&self) -> BrowserOptions {
		BrowserOptions::default()
			.with_theme(self.theme, self.bat_theme.clone())
			.with_syntax_highlighting(self.syntax_highlighting)
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		print!("{}", self.summary());
	}

	fn summary(&self) -> String {
		let mut lines = vec!["Effective configuration:".to_string()];
		lines.push("  Script paths:".to_string());
		lines.extend(
			self.script_paths
				.iter()
				.map(|path| format!("    {}", path.display())),
		);
		match &self.registry_path {
			Some(path) => lines.push(format!("  Registry: {}", path.display())),
			None => lines.push("  Registry: (first existing standard location)".to_string()),
		}
		lines.push(format!("  UI theme: {}", self.theme_name));
		lines.push(format!(
			"  Highlight theme: {}",
			self.bat_theme.as_deref().unwrap_or("(bat default)")
		));
		lines.push(format!(
			"  Syntax highlighting: {}",
			bool_to_word(self.syntax_highlighting)
		));
		lines.push(format!(
			"  Editor: {}",
			self.editor.as_deref().unwrap_or("($EDITOR or first found)")
		));
		lines.push(format!(
			"  Log level: {}",
			self.log_level.as_deref().unwrap_or("off")
		));
		let mut out = lines.join("\n");
		out.push('\n');
		out
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn summary_names_every_section() {
		let config = ResolvedConfig {
			script_paths: vec![PathBuf::from("/opt/scripts")],
			registry_path: None,
			registry_candidates: Vec::new(),
			theme_name: "slate".into(),
			theme: Theme::default(),
			bat_theme: None,
			syntax_highlighting: false,
			editor: Some("nvim".into()),
			log_level: None,
		};

		let summary = config.summary();
		assert!(summary.contains("    /opt/scripts"));
		assert!(summary.contains("UI theme: slate"));
		assert!(summary.contains("Syntax highlighting: no"));
		assert!(summary.contains("Editor: nvim"));
		assert!(summary.contains("Log level: off"));
	}
}
