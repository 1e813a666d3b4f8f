//! The configuration browser.
//!
//! [`Browser`] holds the session state. Its behaviour is split across
//! modules: key and pointer handling, search and filtering, preview state,
//! and rendering.

mod navigation;
pub(crate) mod preview;
mod render;
mod search;
mod state;

pub use state::{Browser, BrowserOutcome, Focus, InputMode};
