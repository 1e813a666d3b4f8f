//! Where hydectl keeps its settings and log, and where it looks for scripts
//! and the config registry.
//!
//! The per-user directories come from `directories` and can each be moved
//! with a `HYDECTL_*_DIR` variable. Scripts and the registry may also be
//! installed under one of the shared library roots.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;
use hydectl_core::expand;

/// Library roots holding shipped scripts and registries, searched after the
/// user's own directories.
const SHARED_ROOTS: [&str; 3] = [
	"~/.local/lib/hydectl",
	"/usr/local/lib/hydectl",
	"/usr/lib/hydectl",
];
const USER_REGISTRY_ROOT: &str = "${XDG_CONFIG_HOME:-~/.config}/hydectl";
const REGISTRY_FILE: &str = "config-registry.toml";
const SCRIPTS_SUBDIR: &str = "scripts";

/// A per-user directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppDir {
	/// Holds `config.toml`.
	Config,
	/// Its `scripts` subdirectory is searched before the shared roots.
	Data,
	/// Holds the log file.
	Cache,
}

impl AppDir {
	fn override_var(self) -> &'static str {
		match self {
			Self::Config => "HYDECTL_CONFIG_DIR",
			Self::Data => "HYDECTL_DATA_DIR",
			Self::Cache => "HYDECTL_CACHE_DIR",
		}
	}

	/// The override when set and non-empty, else the platform location.
	pub(crate) fn path(self) -> Result<PathBuf> {
		if let Some(dir) = env::var_os(self.override_var()).filter(|dir| !dir.is_empty()) {
			return Ok(PathBuf::from(dir));
		}

		let dirs = ProjectDirs::from("org", "HyDE", "hydectl")
			.ok_or_else(|| anyhow!("no home directory to place hydectl's {self:?} directory in"))?;
		let dir = match self {
			Self::Config => dirs.config_local_dir(),
			Self::Data => dirs.data_local_dir(),
			Self::Cache => dirs.cache_dir(),
		};
		Ok(dir.to_path_buf())
	}
}

/// Built-in script search path: the data directory, then the shared roots.
pub(crate) fn script_dirs() -> Vec<PathBuf> {
	let mut dirs = Vec::with_capacity(SHARED_ROOTS.len() + 1);
	match AppDir::Data.path() {
		Ok(dir) => dirs.push(dir.join(SCRIPTS_SUBDIR)),
		Err(err) => tracing::debug!(%err, "no user script directory"),
	}
	dirs.extend(
		SHARED_ROOTS
			.iter()
			.map(|root| expand(root).join(SCRIPTS_SUBDIR)),
	);
	dirs
}

/// Registry locations tried in order when none is configured.
pub(crate) fn registry_candidates() -> Vec<PathBuf> {
	std::iter::once(USER_REGISTRY_ROOT)
		.chain(SHARED_ROOTS)
		.map(|root| expand(root).join(REGISTRY_FILE))
		.collect()
}
