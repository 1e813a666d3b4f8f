use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::style::Theme;

/// Cursor glyph drawn after prompt input.
pub const CURSOR: &str = "█";
/// Glyph that opens the prompt row.
pub const PROMPT_SYMBOL: &str = "❯ ";

/// What the prompt row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptLine<'a> {
	/// Search input being typed.
	Search(&'a str),
	/// Line number being typed.
	Jump(&'a str),
	/// Dim text outside of input modes.
	Hint(&'a str),
}

/// A key and what it does, for the footer.
pub type Hint = (&'static str, &'static str);

/// Render the title header with a rounded border.
pub fn render_header(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_inactive);
	let title = Paragraph::new(Line::from(Span::styled(title.to_string(), theme.header)))
		.alignment(Alignment::Center)
		.block(block);
	frame.render_widget(title, area);
}

/// Render the one-line prompt row.
pub fn render_prompt(frame: &mut Frame, area: Rect, prompt: PromptLine<'_>, theme: &Theme) {
	let line = match prompt {
		PromptLine::Search(query) => input_line("Search: ", query, theme),
		PromptLine::Jump(digits) => input_line("Line: ", digits, theme),
		PromptLine::Hint(hint) => Line::from(Span::styled(hint.to_string(), theme.empty)),
	};
	frame.render_widget(Paragraph::new(line), area);
}

fn input_line(label: &str, input: &str, theme: &Theme) -> Line<'static> {
	Line::from(vec![
		Span::styled(format!("{PROMPT_SYMBOL}{label}"), theme.prompt),
		Span::raw(input.to_string()),
		Span::styled(CURSOR, theme.prompt),
	])
}

/// Render the status bar: `left` flush left, `right` flush right.
pub fn render_status(frame: &mut Frame, area: Rect, left: Line<'_>, right: Line<'_>) {
	frame.render_widget(Paragraph::new(left), area);
	frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), area);
}

/// Render the key hints footer.
pub fn render_footer(frame: &mut Frame, area: Rect, hints: &[Hint], theme: &Theme) {
	let mut spans = Vec::with_capacity(hints.len() * 3);
	for (idx, (key, action)) in hints.iter().enumerate() {
		if idx > 0 {
			spans.push(Span::styled("  ", theme.empty));
		}
		spans.push(Span::styled(*key, theme.prompt));
		spans.push(Span::styled(format!(" {action}"), theme.empty));
	}
	frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn first_row(width: u16, draw: impl FnOnce(&mut Frame)) -> String {
		let mut terminal = Terminal::new(TestBackend::new(width, 1)).expect("terminal");
		terminal.draw(draw).expect("draw");
		let buffer = terminal.backend().buffer();
		(0..width).map(|x| buffer[(x, 0)].symbol().to_string()).collect()
	}

	#[test]
	fn search_prompt_ends_with_cursor() {
		let theme = Theme::default();
		let row = first_row(30, |frame| {
			render_prompt(frame, frame.area(), PromptLine::Search("kit"), &theme);
		});
		assert!(row.starts_with("❯ Search: kit█"), "{row:?}");
	}

	#[test]
	fn footer_lists_hints_in_order() {
		let theme = Theme::default();
		let row = first_row(40, |frame| {
			render_footer(frame, frame.area(), &[("q", "quit"), ("/", "search")], &theme);
		});
		assert!(row.starts_with("q quit  / search"), "{row:?}");
	}

	#[test]
	fn status_puts_right_text_at_the_edge() {
		let row = first_row(20, |frame| {
			render_status(frame, frame.area(), Line::raw("left"), Line::raw("Ln 1/9"));
		});
		assert!(row.starts_with("left"));
		assert!(row.ends_with("Ln 1/9"));
	}
}
