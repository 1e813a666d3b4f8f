use ratatui::layout::Rect;

/// Width of the application column.
pub(crate) const APPS_WIDTH: u16 = 28;
/// Width of the file tray when an application is expanded.
pub(crate) const FILES_WIDTH: u16 = 38;
/// The preview never shrinks below this many columns.
pub(crate) const MIN_PREVIEW_WIDTH: u16 = 30;
/// Pane content never shrinks below this many rows.
pub(crate) const MIN_CONTENT_HEIGHT: u16 = 10;

const HEADER_HEIGHT: u16 = 3;
const PROMPT_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const FOOTER_HEIGHT: u16 = 1;
const BORDERS: u16 = 2;
const CHROME_HEIGHT: u16 = HEADER_HEIGHT + PROMPT_HEIGHT + STATUS_HEIGHT + FOOTER_HEIGHT + BORDERS;

/// Where each part of the browser is drawn.
///
/// Rects are clipped to the frame, so on small terminals trailing regions may
/// be cut short or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PaneLayout {
	pub header: Rect,
	pub prompt: Rect,
	pub apps: Rect,
	pub files: Option<Rect>,
	pub preview: Rect,
	pub status: Rect,
	pub footer: Rect,
}

impl PaneLayout {
	pub fn compute(area: Rect, expanded: bool) -> Self {
		let content_height = area
			.height
			.saturating_sub(CHROME_HEIGHT)
			.max(MIN_CONTENT_HEIGHT);
		let pane_height = content_height + BORDERS;

		let row = |offset: u16, height: u16| {
			Rect::new(area.x, area.y.saturating_add(offset), area.width, height)
		};
		let header = row(0, HEADER_HEIGHT);
		let prompt = row(HEADER_HEIGHT, PROMPT_HEIGHT);
		let panes_top = HEADER_HEIGHT + PROMPT_HEIGHT;
		let status = row(panes_top + pane_height, STATUS_HEIGHT);
		let footer = row(panes_top + pane_height + STATUS_HEIGHT, FOOTER_HEIGHT);

		let pane = |left: u16, width: u16| {
			Rect::new(
				area.x.saturating_add(left),
				area.y.saturating_add(panes_top),
				width,
				pane_height,
			)
		};
		let apps = pane(0, APPS_WIDTH);
		let (files, used) = if expanded {
			(Some(pane(APPS_WIDTH, FILES_WIDTH)), APPS_WIDTH + FILES_WIDTH)
		} else {
			(None, APPS_WIDTH)
		};
		let preview_width = area.width.saturating_sub(used).max(MIN_PREVIEW_WIDTH);
		let preview = pane(used, preview_width);

		let clip = |rect: Rect| rect.intersection(area);
		Self {
			header: clip(header),
			prompt: clip(prompt),
			apps: clip(apps),
			files: files.map(clip),
			preview: clip(preview),
			status: clip(status),
			footer: clip(footer),
		}
	}

	/// Rows available inside a bordered pane.
	pub fn content_height(&self) -> u16 {
		self.apps.height.saturating_sub(BORDERS)
	}
}

/// The area inside a one-cell border.
pub(crate) fn inner(rect: Rect) -> Rect {
	Rect {
		x: rect.x.saturating_add(1),
		y: rect.y.saturating_add(1),
		width: rect.width.saturating_sub(BORDERS),
		height: rect.height.saturating_sub(BORDERS),
	}
}
