//! Interactive terminal browser for the `hydectl` configuration registry.
//!
//! The browser lists registered applications, expands one into its
//! configuration files and previews the file under the cursor with syntax
//! highlighting. [`run`] owns the terminal for the duration of a session and
//! reports what the user chose.

mod app;
pub mod components;
mod config;
pub mod filter;
mod runtime;
pub mod style;

pub use app::{Browser, BrowserOutcome, Focus, InputMode};
pub use config::{BrowserOptions, UiLabels};
pub use runtime::run;

pub use crate::style::{Theme, ThemeRegistration, builtin_themes, default_theme};
