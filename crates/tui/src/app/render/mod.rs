pub(crate) mod layout;

use ratatui::Frame;
use ratatui::text::{Line, Span};

use super::state::{Browser, Focus, InputMode};
use crate::components::{
	Hint, ListContext, PreviewContext, PromptLine, app_item, file_item, render_footer,
	render_header, render_list, render_preview, render_prompt, render_status,
};
use layout::PaneLayout;

const SEARCH_HINTS: &[Hint] = &[("Enter", "commit"), ("Esc", "cancel")];
const JUMP_HINTS: &[Hint] = &[("0-9", "line"), ("Enter", "jump"), ("Esc", "cancel")];
const APPS_HINTS: &[Hint] = &[
	("↑↓", "move"),
	("Enter", "expand"),
	("/", "search"),
	("Tab", "switch"),
	("q", "quit"),
];
const FILES_HINTS: &[Hint] = &[
	("↑↓", "move"),
	("Enter", "edit"),
	("←", "apps"),
	("/", "search"),
	("Tab", "switch"),
	("q", "quit"),
];
const PREVIEW_HINTS: &[Hint] = &[
	("↑↓", "scroll"),
	("PgUp/PgDn", "page"),
	("/", "search"),
	("n/N", "match"),
	(":", "line"),
	("q", "quit"),
];

impl Browser<'_> {
	/// Draw the whole browser. Never changes the session.
	pub fn draw(&self, frame: &mut Frame) {
		let layout = PaneLayout::compute(frame.area(), self.expanded.is_some());
		let theme = &self.options.theme;

		render_header(frame, layout.header, &self.options.labels.title, theme);
		self.draw_prompt(frame, &layout);
		self.draw_apps(frame, &layout);
		self.draw_files(frame, &layout);

		render_preview(
			frame,
			layout.preview,
			PreviewContext {
				title: &self.preview.title,
				lines: &self.preview.lines,
				scroll: self.preview.scroll,
				metrics: self.preview.metrics(),
				search: self.preview.search.as_ref(),
				focused: self.focus == Focus::Preview,
				theme,
			},
		);

		render_status(frame, layout.status, self.status_left(), self.status_right());
		render_footer(frame, layout.footer, self.hints(), theme);
	}

	fn draw_prompt(&self, frame: &mut Frame, layout: &PaneLayout) {
		let counter;
		let prompt = match self.mode {
			InputMode::Search => PromptLine::Search(&self.input),
			InputMode::JumpToLine => PromptLine::Jump(&self.input),
			InputMode::Normal => match &self.preview.search {
				Some(search) => {
					counter = if search.is_empty() {
						format!("No matches for \"{}\"", search.pattern())
					} else {
						format!(
							"\"{}\": match {}/{} (n/N to cycle)",
							search.pattern(),
							search.current_index() + 1,
							search.len()
						)
					};
					PromptLine::Hint(&counter)
				}
				None => PromptLine::Hint(&self.options.labels.idle_hint),
			},
		};
		render_prompt(frame, layout.prompt, prompt, &self.options.theme);
	}

	fn draw_apps(&self, frame: &mut Frame, layout: &PaneLayout) {
		let registry = self.registry;
		let items = self
			.filtered_apps
			.iter()
			.filter_map(|&idx| {
				let key = self.apps.get(idx)?;
				let icon = registry
					.app(key)
					.map(|app| app.icon.as_str())
					.unwrap_or_default();
				Some(app_item(key, icon, self.expanded == Some(idx)))
			})
			.collect();

		render_list(
			frame,
			layout.apps,
			ListContext {
				title: &self.options.labels.apps_title,
				items,
				selected: self.shown_app_cursor(),
				focused: self.focus == Focus::Apps,
				empty_message: &self.options.labels.empty_registry,
				theme: &self.options.theme,
			},
		);
	}

	fn draw_files(&self, frame: &mut Frame, layout: &PaneLayout) {
		let (Some(area), Some(app)) = (layout.files, self.expanded_app()) else {
			return;
		};
		let items = self
			.filtered_files
			.iter()
			.filter_map(|&idx| {
				let key = self.files.get(idx)?;
				Some(file_item(key, self.file_exists(key), &self.options.theme))
			})
			.collect();

		let title = format!("{} · {app}", self.options.labels.files_title);
		render_list(
			frame,
			area,
			ListContext {
				title: &title,
				items,
				selected: self.shown_file_cursor(),
				focused: self.focus == Focus::Files,
				empty_message: &self.options.labels.no_files,
				theme: &self.options.theme,
			},
		);
	}

	fn status_left(&self) -> Line<'static> {
		let theme = &self.options.theme;
		match self.focus {
			Focus::Apps => {
				let Some(app) = self.active_app_entry() else {
					return Line::default();
				};
				Line::from(Span::styled(app.description.clone(), theme.description))
			}
			Focus::Files | Focus::Preview => {
				let (Some(app), Some(file)) = (self.expanded_app(), self.active_file_key()) else {
					return Line::default();
				};
				let Ok(entry) = self.registry.file(app, file) else {
					return Line::default();
				};
				let existence = if self.file_exists(file) {
					Span::styled("[exists]", theme.description)
				} else {
					Span::styled("[missing]", theme.missing)
				};
				let mut spans = Vec::with_capacity(3);
				if !entry.description.is_empty() {
					spans.push(Span::styled(
						format!("{}  ", entry.description),
						theme.description,
					));
				}
				spans.push(Span::raw(format!("{}  ", entry.path)));
				spans.push(existence);
				Line::from(spans)
			}
		}
	}

	fn status_right(&self) -> Line<'static> {
		let total = self.preview.line_count();
		if total == 0 {
			return Line::default();
		}
		let mut text = format!("Ln {}/{}", self.preview.scroll + 1, total);
		if let Some(search) = self.preview.search.as_ref().filter(|search| !search.is_empty()) {
			text.push_str(&format!(
				"  Match {}/{}",
				search.current_index() + 1,
				search.len()
			));
		}
		Line::from(Span::styled(text, self.options.theme.description))
	}

	fn hints(&self) -> &'static [Hint] {
		match (self.mode, self.focus) {
			(InputMode::Search, _) => SEARCH_HINTS,
			(InputMode::JumpToLine, _) => JUMP_HINTS,
			(InputMode::Normal, Focus::Apps) => APPS_HINTS,
			(InputMode::Normal, Focus::Files) => FILES_HINTS,
			(InputMode::Normal, Focus::Preview) => PREVIEW_HINTS,
		}
	}
}
