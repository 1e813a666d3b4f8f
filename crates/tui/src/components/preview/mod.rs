//! File preview pane.
//!
//! Loading and highlighting are separate stages: [`load`] turns a path into
//! plain, sanitized lines and [`Highlighter`] colours them with `bat`.

mod content;
mod highlight;
mod render;

pub use content::{
	ContentKind, EMPTY_SENTINEL, LoadedContent, MAX_PREVIEW_LINES, MISSING_SENTINEL,
	NOT_A_FILE_SENTINEL, load, sanitize, truncation_notice,
};
pub use highlight::{DEFAULT_BAT_THEME, Highlighter, language_hint};
pub use render::{PreviewContext, render_centered_placeholder, render_preview};
