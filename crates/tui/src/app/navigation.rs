use std::time::{Duration, Instant};

use ratatui::crossterm::event::{
	Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::render::layout::inner;
use super::state::{Browser, Focus, InputMode};
use crate::components::{list_offset, point_in_rect};

/// Wheel events closer together than this are dropped.
pub(crate) const WHEEL_DEBOUNCE: Duration = Duration::from_millis(50);
/// Lines the preview scrolls per wheel notch.
pub(crate) const WHEEL_SCROLL_LINES: usize = 3;

impl Browser<'_> {
	/// Apply one terminal event.
	pub fn handle_event(&mut self, event: Event) {
		match event {
			Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
			Event::Mouse(mouse) => self.handle_mouse(mouse, Instant::now()),
			Event::Resize(width, height) => self.resize(width, height),
			_ => {}
		}
	}

	/// Apply one key press.
	pub fn handle_key(&mut self, key: KeyEvent) {
		match self.mode {
			InputMode::Normal => self.handle_normal_key(key),
			InputMode::Search => self.handle_search_key(key),
			InputMode::JumpToLine => self.handle_jump_key(key),
		}
	}

	fn handle_normal_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
			KeyCode::Char('q') | KeyCode::Esc => self.quit(),
			KeyCode::Up | KeyCode::Char('k') => self.move_up(1),
			KeyCode::Down | KeyCode::Char('j') => self.move_down(1),
			KeyCode::PageUp => self.page_up(),
			KeyCode::PageDown => self.page_down(),
			KeyCode::Home | KeyCode::Char('g') => self.move_to_first(),
			KeyCode::End | KeyCode::Char('G') => self.move_to_last(),
			KeyCode::Enter => self.confirm(),
			KeyCode::Left | KeyCode::Char('h') => self.focus_left(),
			KeyCode::Right | KeyCode::Char('l') => self.focus_right(),
			KeyCode::Tab => self.cycle_focus(true),
			KeyCode::BackTab => self.cycle_focus(false),
			KeyCode::Char('/') => self.begin_search(),
			KeyCode::Char(':') if self.focus == Focus::Preview => {
				self.mode = InputMode::JumpToLine;
				self.input.clear();
			}
			KeyCode::Char('n') if self.focus == Focus::Preview => self.preview.next_match(),
			KeyCode::Char('N') if self.focus == Focus::Preview => self.preview.prev_match(),
			_ => {}
		}
	}

	fn handle_jump_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.end_input();
			}
			KeyCode::Char(digit) if digit.is_ascii_digit() => self.input.push(digit),
			KeyCode::Backspace => {
				self.input.pop();
			}
			KeyCode::Enter => {
				if let Ok(line) = self.input.parse::<usize>() {
					self.preview.jump_to_line(line);
				}
				self.end_input();
			}
			KeyCode::Esc => self.end_input(),
			_ => {}
		}
	}

	pub(crate) fn end_input(&mut self) {
		self.mode = InputMode::Normal;
		self.input.clear();
	}

	fn move_up(&mut self, amount: usize) {
		match self.focus {
			Focus::Apps => self.set_active_app(self.active_app.saturating_sub(amount)),
			Focus::Files => self.set_active_file(self.active_file.saturating_sub(amount)),
			Focus::Preview => self.preview.scroll_up(amount),
		}
	}

	fn move_down(&mut self, amount: usize) {
		match self.focus {
			Focus::Apps => self.set_active_app(self.active_app.saturating_add(amount)),
			Focus::Files => self.set_active_file(self.active_file.saturating_add(amount)),
			Focus::Preview => self.preview.scroll_down(amount),
		}
	}

	fn page_up(&mut self) {
		match self.focus {
			Focus::Preview => self.preview.page_up(),
			_ => self.move_up(self.list_height()),
		}
	}

	fn page_down(&mut self) {
		match self.focus {
			Focus::Preview => self.preview.page_down(),
			_ => self.move_down(self.list_height()),
		}
	}

	fn move_to_first(&mut self) {
		match self.focus {
			Focus::Apps => self.set_active_app(0),
			Focus::Files => self.set_active_file(0),
			Focus::Preview => self.preview.scroll_to_top(),
		}
	}

	fn move_to_last(&mut self) {
		match self.focus {
			Focus::Apps => self.set_active_app(usize::MAX),
			Focus::Files => self.set_active_file(usize::MAX),
			Focus::Preview => self.preview.scroll_to_bottom(),
		}
	}

	/// Move the app cursor, clamped to the list.
	///
	/// The overview in the preview follows the cursor while nothing is
	/// expanded.
	pub(crate) fn set_active_app(&mut self, index: usize) {
		if self.apps.is_empty() {
			return;
		}
		let index = index.min(self.apps.len() - 1);
		if index == self.active_app {
			return;
		}
		self.active_app = index;
		if self.expanded.is_none() {
			self.refresh_preview();
		}
	}

	/// Move the file cursor, clamped to the list, and reload the preview.
	pub(crate) fn set_active_file(&mut self, index: usize) {
		if self.files.is_empty() {
			return;
		}
		let index = index.min(self.files.len() - 1);
		if index == self.active_file {
			return;
		}
		self.active_file = index;
		self.refresh_preview();
	}

	fn confirm(&mut self) {
		match self.focus {
			Focus::Apps if self.apps.is_empty() => {}
			Focus::Apps if self.expanded == Some(self.active_app) => self.collapse(),
			Focus::Apps => self.expand_active(),
			Focus::Files => self.select_active_file(),
			Focus::Preview => {}
		}
	}

	fn focus_left(&mut self) {
		self.focus = match self.focus {
			Focus::Preview if self.expanded.is_some() => Focus::Files,
			_ => Focus::Apps,
		};
	}

	fn focus_right(&mut self) {
		if self.expanded.is_none() {
			return;
		}
		self.focus = match self.focus {
			Focus::Apps => Focus::Files,
			Focus::Files | Focus::Preview => Focus::Preview,
		};
	}

	/// Panes that can take focus, in visual order.
	pub(crate) fn focus_order(&self) -> &'static [Focus] {
		if self.expanded.is_some() {
			&[Focus::Apps, Focus::Files, Focus::Preview]
		} else {
			&[Focus::Apps]
		}
	}

	fn cycle_focus(&mut self, forward: bool) {
		let order = self.focus_order();
		let current = order
			.iter()
			.position(|focus| *focus == self.focus)
			.unwrap_or(0);
		let next = if forward {
			(current + 1) % order.len()
		} else {
			(current + order.len() - 1) % order.len()
		};
		self.focus = order[next];
	}

	/// Apply one mouse event observed at `now`.
	///
	/// The pointer is ignored while a query or line number is being typed.
	pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
		if self.mode != InputMode::Normal {
			return;
		}
		match mouse.kind {
			MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
				if let Some(last) = self.last_wheel
					&& now.saturating_duration_since(last) < WHEEL_DEBOUNCE
				{
					return;
				}
				self.last_wheel = Some(now);
				self.focus_at(mouse.column);
				let up = mouse.kind == MouseEventKind::ScrollUp;
				match (self.focus, up) {
					(Focus::Preview, true) => self.preview.scroll_up(WHEEL_SCROLL_LINES),
					(Focus::Preview, false) => self.preview.scroll_down(WHEEL_SCROLL_LINES),
					(_, true) => self.move_up(1),
					(_, false) => self.move_down(1),
				}
			}
			MouseEventKind::Down(MouseButton::Left) => {
				self.focus_at(mouse.column);
				self.click_row(mouse.column, mouse.row);
			}
			_ => {}
		}
	}

	/// Focus the pane whose column contains `column`.
	fn focus_at(&mut self, column: u16) {
		let layout = self.layout();
		if column < layout.apps.right() {
			self.focus = Focus::Apps;
			return;
		}
		if self.expanded.is_none() {
			return;
		}
		self.focus = match layout.files {
			Some(files) if column < files.right() => Focus::Files,
			_ => Focus::Preview,
		};
	}

	fn click_row(&mut self, column: u16, row: u16) {
		let layout = self.layout();
		match self.focus {
			Focus::Apps => {
				let area = inner(layout.apps);
				if !point_in_rect(column, row, area) {
					return;
				}
				let shown = self.shown_app_cursor();
				let offset = list_offset(shown, self.filtered_apps.len(), usize::from(area.height));
				let clicked = offset + usize::from(row - area.y);
				if let Some(&app) = self.filtered_apps.get(clicked) {
					self.set_active_app(app);
				}
			}
			Focus::Files => {
				let Some(area) = layout.files.map(inner) else {
					return;
				};
				if !point_in_rect(column, row, area) {
					return;
				}
				let shown = self.shown_file_cursor();
				let offset =
					list_offset(shown, self.filtered_files.len(), usize::from(area.height));
				let clicked = offset + usize::from(row - area.y);
				if let Some(&file) = self.filtered_files.get(clicked) {
					self.set_active_file(file);
				}
			}
			Focus::Preview => {}
		}
	}

	/// Row of the app cursor within the displayed, possibly filtered, list.
	pub(crate) fn shown_app_cursor(&self) -> Option<usize> {
		self.filtered_apps
			.iter()
			.position(|&idx| idx == self.active_app)
	}

	/// Row of the file cursor within the displayed, possibly filtered, list.
	pub(crate) fn shown_file_cursor(&self) -> Option<usize> {
		self.filtered_files
			.iter()
			.position(|&idx| idx == self.active_file)
	}
}
