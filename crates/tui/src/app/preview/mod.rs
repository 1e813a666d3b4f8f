//! Preview pane state and behavior.
//!
//! This module manages the preview pane functionality including content loading,
//! scrolling, wrapping, and mouse interaction.

mod state;

pub(crate) use state::PreviewState;
