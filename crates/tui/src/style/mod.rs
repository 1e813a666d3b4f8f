//! Visual styling of the browser.
//!
//! Themes are immutable values resolved once at startup and handed to the
//! renderer; nothing reads styles from global state while drawing.

/// Theme definitions, built-in themes and lookup.
pub mod theme;

pub use theme::{Theme, ThemeRegistration, bat_theme, builtin_themes, by_name, default_theme, names};
