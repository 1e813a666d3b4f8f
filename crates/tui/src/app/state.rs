//! Session state of the configuration browser.
//!
//! The [`Browser`] owns everything that changes while the user navigates:
//! which application is expanded, where each cursor sits, the active filters
//! and the loaded preview. The registry itself is borrowed and never changes.

use std::collections::HashMap;
use std::time::Instant;

use hydectl_core::{AppEntry, Registry};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::preview::PreviewState;
use super::render::layout::PaneLayout;
use crate::components::lists::{MISSING_MARKER, PRESENT_MARKER};
use crate::components::preview::Highlighter;
use crate::config::BrowserOptions;

/// The pane that receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	/// The application column.
	#[default]
	Apps,
	/// The file tray of the expanded application.
	Files,
	/// The preview pane.
	Preview,
}

/// How typed characters are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
	/// Keys navigate.
	#[default]
	Normal,
	/// Keys edit the filter or content search of the focused pane.
	Search,
	/// Keys edit a line number for the preview.
	JumpToLine,
}

/// How a browsing session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserOutcome {
	/// The user left without choosing a file.
	Quit,
	/// The user confirmed an existing file.
	Selected {
		/// Application key.
		app: String,
		/// File key within the application.
		file: String,
	},
}

/// Interactive two-level browser over a [`Registry`].
pub struct Browser<'r> {
	pub(crate) registry: &'r Registry,
	pub(crate) apps: Vec<&'r str>,
	pub(crate) expanded: Option<usize>,
	pub(crate) files: Vec<&'r str>,
	pub(crate) file_exists: HashMap<&'r str, bool>,
	pub(crate) active_app: usize,
	pub(crate) active_file: usize,
	pub(crate) focus: Focus,
	pub(crate) mode: InputMode,
	pub(crate) input: String,
	pub(crate) filtered_apps: Vec<usize>,
	pub(crate) filtered_files: Vec<usize>,
	pub(crate) preview: PreviewState,
	pub(crate) highlighter: Highlighter,
	pub(crate) options: BrowserOptions,
	pub(crate) outcome: Option<BrowserOutcome>,
	pub(crate) last_wheel: Option<Instant>,
	pub(crate) area: Rect,
}

impl<'r> Browser<'r> {
	/// Build a browser with nothing expanded and the cursor on the first app.
	pub fn new(registry: &'r Registry, options: BrowserOptions) -> Self {
		let apps = registry.app_keys();
		let highlighter = if options.syntax_highlighting {
			Highlighter::new(options.bat_theme.as_deref())
		} else {
			Highlighter::plain()
		};

		let mut browser = Self {
			registry,
			filtered_apps: (0..apps.len()).collect(),
			apps,
			expanded: None,
			files: Vec::new(),
			file_exists: HashMap::new(),
			active_app: 0,
			active_file: 0,
			focus: Focus::Apps,
			mode: InputMode::Normal,
			input: String::new(),
			filtered_files: Vec::new(),
			preview: PreviewState::new(),
			highlighter,
			options,
			outcome: None,
			last_wheel: None,
			area: Rect::default(),
		};
		browser.refresh_preview();
		tracing::debug!(apps = browser.apps.len(), "browser ready");
		browser
	}

	/// Pane that currently has focus.
	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	/// Current input mode.
	#[must_use]
	pub fn mode(&self) -> InputMode {
		self.mode
	}

	/// Key of the expanded application, if any.
	#[must_use]
	pub fn expanded_app(&self) -> Option<&'r str> {
		self.expanded.and_then(|idx| self.apps.get(idx).copied())
	}

	/// Take the outcome once the session has ended.
	pub fn take_outcome(&mut self) -> Option<BrowserOutcome> {
		self.outcome.take()
	}

	/// Adapt to a new terminal size.
	pub fn resize(&mut self, width: u16, height: u16) {
		self.area = Rect::new(0, 0, width, height);
		let layout = self.layout();
		self.preview
			.set_viewport_height(usize::from(layout.preview.height.saturating_sub(2)));
	}

	pub(crate) fn layout(&self) -> PaneLayout {
		PaneLayout::compute(self.area, self.expanded.is_some())
	}

	/// Rows visible in a list pane.
	pub(crate) fn list_height(&self) -> usize {
		usize::from(self.layout().content_height()).max(1)
	}

	pub(crate) fn active_app_key(&self) -> Option<&'r str> {
		self.apps.get(self.active_app).copied()
	}

	pub(crate) fn active_app_entry(&self) -> Option<&'r AppEntry> {
		let registry = self.registry;
		self.active_app_key().and_then(|key| registry.app(key).ok())
	}

	pub(crate) fn active_file_key(&self) -> Option<&'r str> {
		self.expanded?;
		self.files.get(self.active_file).copied()
	}

	pub(crate) fn file_exists(&self, key: &str) -> bool {
		self.file_exists.get(key).copied().unwrap_or(false)
	}

	/// Open the active application's file tray and focus it.
	///
	/// File existence is checked afresh on every expansion.
	pub(crate) fn expand_active(&mut self) {
		let Some(app) = self.active_app_key() else {
			return;
		};
		let registry = self.registry;
		let files = registry.file_keys(app).unwrap_or_default();
		self.file_exists = files
			.iter()
			.map(|&key| {
				let exists = registry.file(app, key).is_ok_and(|entry| entry.exists());
				(key, exists)
			})
			.collect();
		self.filtered_files = (0..files.len()).collect();
		self.files = files;
		self.active_file = 0;
		self.expanded = Some(self.active_app);
		self.focus = Focus::Files;
		tracing::debug!(app, files = self.files.len(), "expanded application");
		self.after_layout_change();
		self.refresh_preview();
	}

	pub(crate) fn collapse(&mut self) {
		self.expanded = None;
		self.files.clear();
		self.file_exists.clear();
		self.filtered_files.clear();
		self.active_file = 0;
		self.focus = Focus::Apps;
		self.after_layout_change();
		self.refresh_preview();
	}

	fn after_layout_change(&mut self) {
		let area = self.area;
		self.resize(area.width, area.height);
	}

	/// Confirm the active file if it exists on disk.
	pub(crate) fn select_active_file(&mut self) {
		let (Some(app), Some(file)) = (self.active_app_key(), self.active_file_key()) else {
			return;
		};
		if !self.file_exists(file) {
			tracing::debug!(app, file, "ignoring selection of missing file");
			return;
		}
		self.outcome = Some(BrowserOutcome::Selected {
			app: app.to_string(),
			file: file.to_string(),
		});
	}

	pub(crate) fn quit(&mut self) {
		self.outcome = Some(BrowserOutcome::Quit);
	}

	/// Reload the preview for the current selection.
	pub(crate) fn refresh_preview(&mut self) {
		let theme = self.options.theme;
		if self.apps.is_empty() {
			let message = self.options.labels.empty_registry.clone();
			self.preview.show_lines(
				self.options.labels.preview_title.clone(),
				vec![Line::from(Span::styled(message, theme.empty))],
			);
			return;
		}

		let Some(expanded) = self.expanded.and_then(|idx| self.apps.get(idx).copied()) else {
			self.show_overview();
			return;
		};

		let Some(file) = self.files.get(self.active_file).copied() else {
			let message = self.options.labels.no_files.clone();
			self.preview
				.show_lines(expanded, vec![Line::from(Span::styled(message, theme.empty))]);
			return;
		};

		match self.registry.file(expanded, file) {
			Ok(entry) => {
				let title = format!("{file} · {}", entry.path);
				self.preview
					.show_file(title, &entry.resolved_path(), &self.highlighter, &theme);
			}
			Err(err) => {
				tracing::warn!(%err, "selected file vanished from registry");
				self.preview.show_lines(
					file,
					vec![Line::from(Span::styled(err.to_string(), theme.error))],
				);
			}
		}
	}

	fn show_overview(&mut self) {
		let (Some(key), Some(app)) = (self.active_app_key(), self.active_app_entry()) else {
			return;
		};
		let theme = self.options.theme;
		let heading = if app.icon.is_empty() {
			key.to_string()
		} else {
			format!("{} {key}", app.icon)
		};

		let mut lines = vec![Line::from(Span::styled(heading.clone(), theme.header))];
		if !app.description.is_empty() {
			lines.push(Line::from(Span::styled(
				app.description.clone(),
				theme.description,
			)));
		}
		lines.push(Line::default());

		if app.files.is_empty() {
			lines.push(Line::from(Span::styled(
				self.options.labels.no_files.clone(),
				theme.empty,
			)));
		} else {
			lines.push(Line::raw(format!("Files ({}):", app.files.len())));
			for (file, entry) in &app.files {
				lines.push(overview_file_line(file, &entry.path, entry.exists(), theme.missing));
			}
		}

		self.preview.show_lines(heading, lines);
	}
}

fn overview_file_line(key: &str, path: &str, exists: bool, missing: Style) -> Line<'static> {
	if exists {
		Line::from(vec![
			Span::raw(format!("  {PRESENT_MARKER}{key}")),
			Span::raw(format!("  {path}")),
		])
	} else {
		Line::from(Span::styled(
			format!("  {MISSING_MARKER}{key}  {path} (missing)"),
			missing,
		))
	}
}
