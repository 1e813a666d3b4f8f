use ratatui::style::{Modifier, Style};

/// Styles for every element the browser draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Title header.
	pub header: Style,
	/// Border of the focused pane.
	pub border_active: Style,
	/// Border of unfocused panes.
	pub border_inactive: Style,
	/// The row under the cursor.
	pub row_highlight: Style,
	/// Search and jump prompts.
	pub prompt: Style,
	/// Placeholders, hints and sentinel lines.
	pub empty: Style,
	/// Descriptions in the status bar and footer.
	pub description: Style,
	/// Files whose path does not exist.
	pub missing: Style,
	/// Preview read errors.
	pub error: Style,
	/// Content search matches.
	pub matched: Style,
	/// The content search match under the cursor.
	pub current_match: Style,
}

impl Theme {
	/// Terminal colours only, with reversed video marking the cursor row and
	/// the current match.
	#[must_use]
	pub fn plain() -> Self {
		let reversed = Style::new().add_modifier(Modifier::REVERSED);
		Self {
			header: Style::new().add_modifier(Modifier::BOLD),
			border_active: Style::new().add_modifier(Modifier::BOLD),
			border_inactive: Style::new(),
			row_highlight: reversed,
			prompt: Style::new(),
			empty: Style::new().add_modifier(Modifier::DIM),
			description: Style::new().add_modifier(Modifier::DIM),
			missing: Style::new().add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
			error: Style::new().add_modifier(Modifier::BOLD),
			matched: Style::new().add_modifier(Modifier::UNDERLINED),
			current_match: reversed,
		}
	}
}

/// A named theme together with its aliases and paired bat theme.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: String,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
	/// Optional bat syntax highlighting theme name.
	pub bat_theme: Option<String>,
}

impl ThemeRegistration {
	/// Creates a new theme registration with the given name and theme.
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
			bat_theme: None,
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	/// Sets the bat syntax highlighting theme name.
	pub fn with_bat_theme(mut self, bat_theme: impl Into<String>) -> Self {
		self.bat_theme = Some(bat_theme.into());
		self
	}

	/// Whether `name` refers to this theme, ignoring case.
	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		let name = name.trim();
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
