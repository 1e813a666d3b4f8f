//! Preview pane rendering.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::components::{ScrollMetrics, render_scrollbar};
use crate::filter::ContentSearch;
use crate::style::Theme;

/// Context for rendering the preview pane.
pub struct PreviewContext<'a> {
	/// Title drawn on the border.
	pub title: &'a str,
	/// Every styled line of the preview.
	pub lines: &'a [Line<'static>],
	/// Vertical scroll offset.
	pub scroll: usize,
	/// Scroll metrics for the current viewport.
	pub metrics: ScrollMetrics,
	/// Matches to mark, if a content search is active.
	pub search: Option<&'a ContentSearch>,
	/// Whether the pane has focus.
	pub focused: bool,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Render a centered placeholder message.
pub fn render_centered_placeholder(frame: &mut Frame, area: Rect, message: &str, style: Style) {
	let vertical_padding = area.height.saturating_sub(1) / 2;
	let mut lines: Vec<Line<'_>> = (0..vertical_padding).map(|_| Line::from("")).collect();
	lines.push(Line::from(Span::styled(message, style)));

	let para = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
	frame.render_widget(para, area);
}

/// Render the preview pane: the scrolled window of lines with search matches
/// marked, and a scrollbar when the content overflows.
pub fn render_preview(frame: &mut Frame, area: Rect, ctx: PreviewContext<'_>) {
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

	let visible: Vec<Line<'static>> = ctx
		.lines
		.iter()
		.enumerate()
		.skip(ctx.scroll)
		.take(ctx.metrics.viewport_len)
		.map(|(idx, line)| match ctx.search {
			Some(search) => mark_matches(line, idx, search, ctx.theme),
			None => line.clone(),
		})
		.collect();

	let para = Paragraph::new(visible);
	if ctx.metrics.needs_scrollbar {
		let text_area = render_scrollbar(frame, inner, ctx.metrics, ctx.scroll, ctx.theme);
		frame.render_widget(para, text_area);
	} else {
		frame.render_widget(para, inner);
	}
}

fn mark_matches(
	line: &Line<'static>,
	line_idx: usize,
	search: &ContentSearch,
	theme: &Theme,
) -> Line<'static> {
	let current = search.current_index();
	let ranges: Vec<(usize, usize, Style)> = search
		.matches()
		.iter()
		.enumerate()
		.filter(|(_, found)| found.line == line_idx)
		.map(|(idx, found)| {
			let style = if idx == current {
				theme.current_match
			} else {
				theme.matched
			};
			(found.start, found.end, style)
		})
		.collect();

	if ranges.is_empty() {
		line.clone()
	} else {
		overlay_ranges(line, &ranges)
	}
}

/// Patch `style` onto the byte ranges of `line`, splitting spans as needed.
///
/// Ranges must be sorted and non-overlapping. A span whose boundaries do not
/// fall on character boundaries is kept as is.
pub(crate) fn overlay_ranges(line: &Line<'static>, ranges: &[(usize, usize, Style)]) -> Line<'static> {
	let mut spans = Vec::with_capacity(line.spans.len() + ranges.len() * 2);
	let mut span_start = 0;

	for span in &line.spans {
		let content = span.content.as_ref();
		let span_end = span_start + content.len();
		match split_span(content, span.style, span_start, ranges) {
			Some(pieces) => spans.extend(pieces),
			None => spans.push(span.clone()),
		}
		span_start = span_end;
	}

	Line::from(spans).style(line.style)
}

fn split_span(
	content: &str,
	base: Style,
	offset: usize,
	ranges: &[(usize, usize, Style)],
) -> Option<Vec<Span<'static>>> {
	let end_of_span = offset + content.len();
	let piece = |from: usize, to: usize, style: Style| {
		content
			.get(from - offset..to - offset)
			.map(|text| Span::styled(text.to_string(), style))
	};

	let mut pieces = Vec::new();
	let mut cursor = offset;
	for &(start, end, style) in ranges {
		if end <= cursor || start >= end_of_span {
			continue;
		}
		let start = start.max(cursor);
		let end = end.min(end_of_span);
		if start > cursor {
			pieces.push(piece(cursor, start, base)?);
		}
		pieces.push(piece(start, end, base.patch(style))?);
		cursor = end;
	}
	if cursor < end_of_span {
		pieces.push(piece(cursor, end_of_span, base)?);
	}
	Some(pieces)
}

#[cfg(test)]
mod tests {
	use ratatui::style::{Color, Modifier};

	use super::*;

	#[test]
	fn overlay_splits_across_span_boundaries() {
		let base = Style::default().fg(Color::Blue);
		let line = Line::from(vec![
			Span::styled("font_", base),
			Span::raw("size 11"),
		]);
		let mark = Style::default().bg(Color::Yellow);

		let marked = overlay_ranges(&line, &[(3, 7, mark)]);
		let parts: Vec<(&str, Style)> = marked
			.spans
			.iter()
			.map(|span| (span.content.as_ref(), span.style))
			.collect();

		assert_eq!(
			parts,
			vec![
				("fon", base),
				("t_", base.patch(mark)),
				("si", Style::default().patch(mark)),
				("ze 11", Style::default()),
			]
		);
	}

	#[test]
	fn overlay_handles_several_ranges_in_one_span() {
		let line = Line::raw("abcabc");
		let bold = Style::default().add_modifier(Modifier::BOLD);
		let marked = overlay_ranges(&line, &[(0, 1, bold), (3, 4, bold)]);
		let text: Vec<&str> = marked.spans.iter().map(|span| span.content.as_ref()).collect();
		assert_eq!(text, vec!["a", "bc", "a", "bc"]);
	}
}
