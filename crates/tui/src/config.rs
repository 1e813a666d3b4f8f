use crate::style::Theme;

/// Text rendered around the panes.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Title shown in the header.
	pub title: String,
	/// Title of the application column.
	pub apps_title: String,
	/// Title of the file tray.
	pub files_title: String,
	/// Title of the preview pane when no file is shown.
	pub preview_title: String,
	/// Dim hint in the prompt row outside of search.
	pub idle_hint: String,
	/// Message shown when the registry has no applications.
	pub empty_registry: String,
	/// Placeholder shown for an expanded application without files.
	pub no_files: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "🏗️  HyDE Configuration Manager".to_string(),
			apps_title: "Applications".to_string(),
			files_title: "Files".to_string(),
			preview_title: "Preview".to_string(),
			idle_hint: "Press / to search, Tab to switch panes".to_string(),
			empty_registry: "No applications registered".to_string(),
			no_files: "No files registered".to_string(),
		}
	}
}

/// Everything the browser needs besides the registry.
#[derive(Debug, Clone)]
pub struct BrowserOptions {
	/// Styles for the panes.
	pub theme: Theme,
	/// bat theme for syntax highlighting; `None` uses bat's default.
	pub bat_theme: Option<String>,
	/// Whether previews are coloured with bat.
	pub syntax_highlighting: bool,
	/// Text around the panes.
	pub labels: UiLabels,
}

impl Default for BrowserOptions {
	fn default() -> Self {
		Self {
			theme: Theme::default(),
			bat_theme: None,
			syntax_highlighting: true,
			labels: UiLabels::default(),
		}
	}
}

impl BrowserOptions {
	/// Options with the given theme and its paired bat theme.
	#[must_use]
	pub fn with_theme(mut self, theme: Theme, bat_theme: Option<String>) -> Self {
		self.theme = theme;
		self.bat_theme = bat_theme;
		self
	}

	/// Turn syntax highlighting on or off.
	#[must_use]
	pub fn with_syntax_highlighting(mut self, enabled: bool) -> Self {
		self.syntax_highlighting = enabled;
		self
	}
}
