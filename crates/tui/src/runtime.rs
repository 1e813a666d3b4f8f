//! Terminal setup and the event loop.

use std::io::stdout;

use anyhow::{Context, Result};
use hydectl_core::Registry;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use crate::app::{Browser, BrowserOutcome};
use crate::config::BrowserOptions;

/// Browse `registry` until the user selects a file or quits.
///
/// The terminal is restored before returning, whether or not the loop
/// failed.
pub fn run(registry: &Registry, options: BrowserOptions) -> Result<BrowserOutcome> {
	let mut browser = Browser::new(registry, options);
	let mut terminal = ratatui::try_init().context("failed to initialise the terminal")?;

	let result = event_loop(&mut terminal, &mut browser);

	if let Err(err) = execute!(stdout(), DisableMouseCapture) {
		tracing::warn!(%err, "failed to disable mouse capture");
	}
	ratatui::restore();
	tracing::debug!(outcome = ?result.as_ref().ok(), "browser closed");
	result
}

fn event_loop(terminal: &mut DefaultTerminal, browser: &mut Browser<'_>) -> Result<BrowserOutcome> {
	execute!(stdout(), EnableMouseCapture).context("failed to enable mouse capture")?;
	let size = terminal.size().context("failed to read the terminal size")?;
	browser.resize(size.width, size.height);

	loop {
		terminal
			.draw(|frame| browser.draw(frame))
			.context("failed to draw the browser")?;
		let event = event::read().context("failed to read terminal input")?;
		browser.handle_event(event);
		if let Some(outcome) = browser.take_outcome() {
			return Ok(outcome);
		}
	}
}
