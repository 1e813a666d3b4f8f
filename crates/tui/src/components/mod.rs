//! UI building blocks shared across rendering and state modules.

/// Header, prompt, status and footer rows.
pub mod bars;
/// Application column and file tray.
pub mod lists;
pub mod preview;
/// Scrollbar for viewports.
pub mod scrollbar;

pub use bars::{Hint, PromptLine, render_footer, render_header, render_prompt, render_status};
pub use lists::{ListContext, app_item, file_item, render_list};
pub use preview::{PreviewContext, render_preview};
pub use scrollbar::{ScrollMetrics, list_offset, point_in_rect, render_scrollbar};
