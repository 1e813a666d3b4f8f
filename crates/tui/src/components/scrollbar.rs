//! Scroll arithmetic and the scrollbar shared by the lists and the preview.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Scroll bounds of one viewport over some content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	/// Rows of content.
	pub content_length: usize,
	/// Rows that fit in the viewport, at most `content_length`.
	pub viewport_len: usize,
	/// Largest valid scroll offset.
	pub max_scroll: usize,
	/// Content is taller than the viewport.
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Bounds for `content_length` rows shown `viewport_height` at a time.
	///
	/// Either value being zero yields empty bounds.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length);
		let max_scroll = content_length.saturating_sub(viewport_len);

		Self {
			content_length,
			viewport_len,
			max_scroll,
			needs_scrollbar: content_length > viewport_len,
		}
	}

	/// Thumb position for `scroll`, spread over the whole track.
	#[must_use]
	pub fn scrollbar_position(&self, scroll: usize) -> usize {
		if self.max_scroll == 0 {
			0
		} else {
			scroll.min(self.max_scroll).saturating_mul(self.content_length - 1) / self.max_scroll
		}
	}
}

/// Whether the cell at `column`, `row` lies within `area`.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	(area.x..area.right()).contains(&column) && (area.y..area.bottom()).contains(&row)
}

/// First visible row of a list so that `selected` stays on screen.
///
/// Matches the offset ratatui's `List` settles on when scrolling down from
/// the top, which lets pointer rows be mapped back to items.
#[must_use]
pub fn list_offset(selected: Option<usize>, len: usize, height: usize) -> usize {
	match selected {
		Some(selected) if height > 0 && selected < len && selected >= height => {
			selected + 1 - height
		}
		_ => 0,
	}
}

/// Render a themed vertical scrollbar on the right edge of `area`.
///
/// Returns the area left for content.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	metrics: ScrollMetrics,
	scroll: usize,
	theme: &Theme,
) -> Rect {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(theme.border_inactive)
		.thumb_style(theme.border_active);

	let track = Rect {
		x: area.right().saturating_sub(1),
		width: area.width.min(1),
		..area
	};

	let mut state = ScrollbarState::new(metrics.content_length)
		.viewport_content_length(metrics.viewport_len)
		.position(metrics.scrollbar_position(scroll));
	frame.render_stateful_widget(scrollbar, track, &mut state);

	Rect {
		width: area.width.saturating_sub(1),
		..area
	}
}
