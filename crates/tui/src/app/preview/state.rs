//! Preview pane state management.

use std::path::Path;

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use crate::components::preview::{ContentKind, Highlighter, load};
use crate::components::ScrollMetrics;
use crate::filter::{ContentMatch, ContentSearch};
use crate::style::Theme;

/// Columns per tab stop when tabs are expanded for display.
const TAB_WIDTH: usize = 4;

/// State for the preview pane.
#[derive(Debug, Default)]
pub(crate) struct PreviewState {
	/// Title drawn on the pane border.
	pub title: String,
	/// Plain text of each line, as displayed. Content search runs over this.
	pub text: Vec<String>,
	/// Styled lines, one per entry in `text`.
	pub lines: Vec<Line<'static>>,
	/// Set when the preview shows a file rather than an overview.
	pub kind: Option<ContentKind>,
	/// Scroll offset within the preview pane.
	pub scroll: usize,
	/// Last known viewport height for scroll bounds.
	pub viewport_height: usize,
	/// Active in-content search, if any.
	pub search: Option<ContentSearch>,
}

impl PreviewState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Load and highlight the file at `path`, resetting scroll and search.
	pub fn show_file(
		&mut self,
		title: impl Into<String>,
		path: &Path,
		highlighter: &Highlighter,
		theme: &Theme,
	) {
		let loaded = load(path);
		let text: Vec<String> = loaded.lines.iter().map(|line| expand_tabs(line)).collect();

		let lines = match loaded.kind {
			ContentKind::Text => {
				let content_len = loaded.content_lines().len();
				let mut lines = highlighter.highlight(path, &text[..content_len]);
				lines.extend(
					text[content_len..]
						.iter()
						.map(|notice| Line::from(Span::styled(notice.clone(), theme.empty))),
				);
				lines
			}
			ContentKind::Empty => sentinel_lines(&text, theme.empty),
			ContentKind::Missing => sentinel_lines(&text, theme.missing),
			ContentKind::Error => sentinel_lines(&text, theme.error),
		};

		self.title = title.into();
		self.text = text;
		self.lines = lines;
		self.kind = Some(loaded.kind);
		self.reset_view();
	}

	/// Show lines that do not come from a file.
	pub fn show_lines(&mut self, title: impl Into<String>, lines: Vec<Line<'static>>) {
		self.title = title.into();
		self.text = lines.iter().map(line_text).collect();
		self.lines = lines;
		self.kind = None;
		self.reset_view();
	}

	fn reset_view(&mut self) {
		self.scroll = 0;
		self.search = None;
	}

	pub fn line_count(&self) -> usize {
		self.lines.len()
	}

	pub fn viewport_len(&self) -> usize {
		let content_length = self.line_count();
		if content_length == 0 {
			0
		} else {
			self.viewport_height.max(1).min(content_length)
		}
	}

	pub fn max_scroll(&self) -> usize {
		self.line_count().saturating_sub(self.viewport_len())
	}

	pub fn metrics(&self) -> ScrollMetrics {
		ScrollMetrics::compute(self.line_count(), self.viewport_height)
	}

	pub fn set_viewport_height(&mut self, height: usize) {
		self.viewport_height = height;
		self.scroll = self.scroll.min(self.max_scroll());
	}

	pub fn scroll_up(&mut self, lines: usize) {
		self.scroll = self.scroll.saturating_sub(lines);
	}

	pub fn scroll_down(&mut self, lines: usize) {
		self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
	}

	pub fn page_up(&mut self) {
		self.scroll_up(self.viewport_len().max(1));
	}

	pub fn page_down(&mut self) {
		self.scroll_down(self.viewport_len().max(1));
	}

	pub fn scroll_to_top(&mut self) {
		self.scroll = 0;
	}

	pub fn scroll_to_bottom(&mut self) {
		self.scroll = self.max_scroll();
	}

	/// Put one-based `line` at the top of the viewport, clamped.
	pub fn jump_to_line(&mut self, line: usize) {
		self.scroll = line.saturating_sub(1).min(self.max_scroll());
	}

	/// Search the previewed text and scroll to the first match.
	///
	/// An empty query clears the search.
	pub fn search_for(&mut self, query: &str) {
		if query.is_empty() {
			self.search = None;
			return;
		}
		let search = ContentSearch::compute(&self.text, query);
		let first = search.current().copied();
		self.search = Some(search);
		if let Some(found) = first {
			self.scroll_to_match(found);
		}
	}

	pub fn next_match(&mut self) {
		if let Some(found) = self.search.as_mut().and_then(ContentSearch::next).copied() {
			self.scroll_to_match(found);
		}
	}

	pub fn prev_match(&mut self) {
		if let Some(found) = self.search.as_mut().and_then(ContentSearch::prev).copied() {
			self.scroll_to_match(found);
		}
	}

	pub fn clear_search(&mut self) {
		self.search = None;
	}

	fn scroll_to_match(&mut self, found: ContentMatch) {
		self.scroll = found.line.min(self.max_scroll());
	}
}

fn sentinel_lines(text: &[String], style: ratatui::style::Style) -> Vec<Line<'static>> {
	text.iter()
		.map(|line| Line::from(Span::styled(line.clone(), style)))
		.collect()
}

fn line_text(line: &Line<'_>) -> String {
	line.spans.iter().map(|span| span.content.as_ref()).collect()
}

/// Replace tabs with spaces up to the next tab stop.
pub(crate) fn expand_tabs(line: &str) -> String {
	if !line.contains('\t') {
		return line.to_string();
	}
	let mut out = String::with_capacity(line.len() + TAB_WIDTH);
	let mut column = 0;
	for ch in line.chars() {
		if ch == '\t' {
			let pad = TAB_WIDTH - column % TAB_WIDTH;
			out.extend(std::iter::repeat_n(' ', pad));
			column += pad;
		} else {
			out.push(ch);
			column += ch.width().unwrap_or(0);
		}
	}
	out
}
