use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use super::preview::render_centered_placeholder;
use super::scrollbar::{ScrollMetrics, list_offset, render_scrollbar};
use crate::style::Theme;

/// Marker before the expanded application.
pub const EXPANDED_MARKER: &str = "▾ ";
/// Marker before collapsed applications.
pub const COLLAPSED_MARKER: &str = "  ";
/// Marker before a file that exists on disk.
pub const PRESENT_MARKER: &str = "• ";
/// Marker before a file whose path does not exist.
pub const MISSING_MARKER: &str = "✗ ";

/// Everything needed to draw one bordered list.
pub struct ListContext<'a> {
	/// Title drawn on the border.
	pub title: &'a str,
	/// Rows in display order.
	pub items: Vec<ListItem<'static>>,
	/// Highlighted row, as an index into `items`.
	pub selected: Option<usize>,
	/// Whether the pane has focus.
	pub focused: bool,
	/// Shown centered when `items` is empty.
	pub empty_message: &'a str,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Row for one application.
#[must_use]
pub fn app_item(key: &str, icon: &str, expanded: bool) -> ListItem<'static> {
	let marker = if expanded {
		EXPANDED_MARKER
	} else {
		COLLAPSED_MARKER
	};
	let label = if icon.is_empty() {
		key.to_string()
	} else {
		format!("{icon} {key}")
	};
	ListItem::new(Line::from(vec![Span::raw(marker), Span::raw(label)]))
}

/// Row for one file. Missing files are dimmed and flagged.
#[must_use]
pub fn file_item(key: &str, exists: bool, theme: &Theme) -> ListItem<'static> {
	if exists {
		ListItem::new(Line::from(vec![
			Span::raw(PRESENT_MARKER),
			Span::raw(key.to_string()),
		]))
	} else {
		ListItem::new(Line::from(Span::styled(
			format!("{MISSING_MARKER}{key} (missing)"),
			theme.missing,
		)))
	}
}

/// Render a bordered list, keeping the selected row in view.
///
/// Returns the inner area rows are drawn in, which pointer handling maps
/// back to items with [`list_offset`].
pub fn render_list(frame: &mut Frame, area: Rect, ctx: ListContext<'_>) -> Rect {
	let border_style = if ctx.focused {
		ctx.theme.border_active
	} else {
		ctx.theme.border_inactive
	};
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(border_style)
		.title(format!(" {} ", ctx.title));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if ctx.items.is_empty() {
		render_centered_placeholder(frame, inner, ctx.empty_message, ctx.theme.empty);
		return inner;
	}

	let len = ctx.items.len();
	let height = usize::from(inner.height);
	let offset = list_offset(ctx.selected, len, height);
	let metrics = ScrollMetrics::compute(len, height);
	let rows_area = if metrics.needs_scrollbar {
		render_scrollbar(frame, inner, metrics, offset, ctx.theme)
	} else {
		inner
	};

	let list = List::new(ctx.items).highlight_style(ctx.theme.row_highlight);
	let mut state = ListState::default()
		.with_offset(offset)
		.with_selected(ctx.selected);
	frame.render_stateful_widget(list, rows_area, &mut state);
	inner
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn rendered(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> Vec<String> {
		let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
		terminal.draw(draw).expect("draw");
		let buffer = terminal.backend().buffer().clone();
		(0..height)
			.map(|y| {
				(0..width)
					.map(|x| buffer[(x, y)].symbol().to_string())
					.collect::<String>()
			})
			.collect()
	}

	#[test]
	fn missing_files_are_flagged() {
		let theme = Theme::default();
		let rows = rendered(30, 5, |frame| {
			render_list(
				frame,
				frame.area(),
				ListContext {
					title: "Files",
					items: vec![file_item("config", true, &theme), file_item("gone", false, &theme)],
					selected: Some(0),
					focused: true,
					empty_message: "nothing",
					theme: &theme,
				},
			);
		});
		assert!(rows[1].contains("• config"));
		assert!(rows[2].contains("✗ gone (missing)"));
	}

	#[test]
	fn empty_lists_show_the_placeholder() {
		let theme = Theme::default();
		let rows = rendered(30, 5, |frame| {
			render_list(
				frame,
				frame.area(),
				ListContext {
					title: "Files",
					items: Vec::new(),
					selected: None,
					focused: false,
					empty_message: "nothing here",
					theme: &theme,
				},
			);
		});
		assert!(rows.iter().any(|row| row.contains("nothing here")));
	}

	#[test]
	fn selection_below_the_fold_scrolls_into_view() {
		let theme = Theme::default();
		let items = (0..10)
			.map(|idx| app_item(&format!("app{idx}"), "", false))
			.collect();
		let rows = rendered(20, 5, |frame| {
			render_list(
				frame,
				frame.area(),
				ListContext {
					title: "Apps",
					items,
					selected: Some(7),
					focused: true,
					empty_message: "",
					theme: &theme,
				},
			);
		});
		assert!(rows[1].contains("app5"));
		assert!(rows[3].contains("app7"));
	}
}
