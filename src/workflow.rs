use std::path::PathBuf;

use anyhow::{Context, Result};
use hydectl_core::{EditStep, EditSession, HookOutcome, Registry, resolve_editor};
use hydectl_tui::{BrowserOptions, BrowserOutcome};

use crate::settings::ResolvedConfig;

/// Browse the registry, then edit whatever file the user picked.
pub(crate) struct ConfigWorkflow {
	registry_path: PathBuf,
	registry: Registry,
	options: BrowserOptions,
	editor: Option<String>,
}

impl ConfigWorkflow {
	/// Locate and load the registry named by the command line or settings.
	///
	/// `registry` and `editor` come from the `config` subcommand and take
	/// precedence over the settings.
	pub(crate) fn from_config(
		config: &ResolvedConfig,
		registry: Option<PathBuf>,
		editor: Option<String>,
	) -> Result<Self> {
		let registry_path = locate_registry(config, registry)?;
		let registry = Registry::load(&registry_path)?;
		Ok(Self {
			registry_path,
			registry,
			options: config.browser_options(),
			editor: editor.or_else(|| config.editor.clone()),
		})
	}

	pub(crate) fn run(self) -> Result<()> {
		if self.registry.is_empty() {
			println!("No applications found in config registry.");
			println!(
				"Add applications to {} to browse them here.",
				self.registry_path.display()
			);
			return Ok(());
		}

		let outcome = hydectl_tui::run(&self.registry, self.options)?;
		let BrowserOutcome::Selected { app, file } = outcome else {
			tracing::debug!("browser closed without a selection");
			return Ok(());
		};

		let entry = self.registry.file(&app, &file)?;
		let editor = resolve_editor(self.editor.as_deref())?;
		let report = EditSession::new(&app, entry)
			.run(&editor, |step| match step {
				EditStep::PreHook => println!("Running pre-hook..."),
				EditStep::OpeningEditor(editor) => println!(
					"Opening {} with {editor}...",
					entry.resolved_path().display()
				),
				EditStep::PostHook => println!("Running post-hook..."),
			})
			.with_context(|| format!("failed to edit {app}/{file}"))?;

		report_hook("Pre-hook", &report.pre_hook);
		report_hook("Post-hook", &report.post_hook);
		println!("Finished editing {}.", report.path.display());
		Ok(())
	}
}

/// Pick the registry file: an explicit path must exist, otherwise the first
/// standard location that does.
fn locate_registry(config: &ResolvedConfig, explicit: Option<PathBuf>) -> Result<PathBuf> {
	match explicit.or_else(|| config.registry_path.clone()) {
		Some(path) => Ok(Registry::locate([path])?),
		None => Ok(Registry::locate(config.registry_candidates.clone())?),
	}
}

fn report_hook(label: &str, outcome: &HookOutcome) {
	match outcome {
		HookOutcome::Skipped => {}
		HookOutcome::Succeeded => println!("{label} completed."),
		HookOutcome::Failed(reason) => eprintln!("Warning: {label} failed: {reason}"),
	}
}
