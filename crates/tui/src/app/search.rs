use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{Browser, Focus, InputMode};
use crate::filter::filter;

impl Browser<'_> {
	/// Start typing a query for the focused pane.
	pub(crate) fn begin_search(&mut self) {
		if self.focus == Focus::Apps && self.apps.is_empty() {
			return;
		}
		self.mode = InputMode::Search;
		self.input.clear();
		self.apply_query();
	}

	pub(crate) fn handle_search_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.cancel_search();
			}
			KeyCode::Esc => self.cancel_search(),
			KeyCode::Enter => self.commit_search(),
			KeyCode::Backspace => {
				if self.input.pop().is_some() {
					self.apply_query();
				}
			}
			KeyCode::Char(ch)
				if !key
					.modifiers
					.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
			{
				self.input.push(ch);
				self.apply_query();
			}
			_ => {}
		}
	}

	/// Recompute the filter or content matches for the current query.
	fn apply_query(&mut self) {
		let registry = self.registry;
		match self.focus {
			Focus::Apps => {
				self.filtered_apps = filter(&self.apps, &self.input, |&key| {
					let mut fields = vec![key];
					if let Ok(app) = registry.app(key) {
						fields.push(app.description.as_str());
					}
					fields
				});
			}
			Focus::Files => {
				let Some(app) = self.expanded_app() else {
					return;
				};
				self.filtered_files = filter(&self.files, &self.input, |&key| {
					let mut fields = vec![key];
					if let Ok(entry) = registry.file(app, key) {
						fields.push(entry.description.as_str());
						fields.push(entry.path.as_str());
					}
					fields
				});
			}
			Focus::Preview => self.preview.search_for(&self.input),
		}
	}

	/// Leave search mode, acting on the first hit.
	fn commit_search(&mut self) {
		let query = std::mem::take(&mut self.input);
		tracing::debug!(query = %query, focus = ?self.focus, "search committed");
		match self.focus {
			Focus::Apps => {
				let first = self.filtered_apps.first().copied();
				self.reset_filters();
				self.mode = InputMode::Normal;
				if let Some(app) = first {
					self.set_active_app(app);
					if self.expanded != Some(app) {
						self.expand_active();
					} else {
						self.focus = Focus::Files;
					}
				}
			}
			Focus::Files => {
				let first = self.filtered_files.first().copied();
				self.reset_filters();
				self.mode = InputMode::Normal;
				if let Some(file) = first {
					self.set_active_file(file);
				}
			}
			Focus::Preview => self.mode = InputMode::Normal,
		}
	}

	/// Leave search mode without acting, dropping any content matches.
	fn cancel_search(&mut self) {
		self.reset_filters();
		self.preview.clear_search();
		self.end_input();
	}

	fn reset_filters(&mut self) {
		self.filtered_apps = (0..self.apps.len()).collect();
		self.filtered_files = (0..self.files.len()).collect();
	}
}
