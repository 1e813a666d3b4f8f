//! File logging through `tracing`.
//!
//! The terminal belongs to the browser and to dispatched scripts, so log
//! records only ever go to `<cache dir>/hydectl.log`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::app_dirs::AppDir;

const LOG_FILE: &str = "hydectl.log";

/// Location of the log file.
pub fn log_file() -> Result<PathBuf> {
	Ok(AppDir::Cache.path()?.join(LOG_FILE))
}

/// Whether `level` asks for any logging at all.
pub fn is_enabled(level: Option<&str>) -> bool {
	level.is_some_and(|level| !level.trim().is_empty() && !level.trim().eq_ignore_ascii_case("off"))
}

/// Install the global subscriber for `level`, a `tracing` filter directive.
///
/// Does nothing when logging is disabled.
pub fn initialize(level: Option<&str>) -> Result<()> {
	let Some(level) = level.filter(|level| is_enabled(Some(level))) else {
		return Ok(());
	};

	let filter = EnvFilter::try_new(level.trim())
		.with_context(|| format!("invalid log level `{level}`"))?;

	let path = log_file()?;
	if let Some(dir) = path.parent() {
		fs::create_dir_all(dir)
			.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install logger: {err}"))?;

	tracing::debug!(path = %path.display(), "logging initialised");
	Ok(())
}
