//! The configuration registry: applications and the files they own.
//!
//! A registry is loaded once from a TOML document whose top-level tables are
//! applications:
//!
//! ```toml
//! [kitty]
//! description = "Terminal emulator"
//! icon = ""
//!
//! [kitty.files.config]
//! description = "Main configuration"
//! path = "~/.config/kitty/kitty.conf"
//! post_hook = ["kitty", "@", "load-config"]
//! ```
//!
//! Keys are kept in [`BTreeMap`]s so every listing is sorted and free of
//! duplicates without further bookkeeping.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::paths;


/// Errors raised while loading or querying the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
	/// None of the candidate locations held a registry file.
	#[error("config-registry.toml not found in any of the expected locations")]
	NotFound {
		/// Locations that were searched, in order.
		searched: Vec<PathBuf>,
	},
	/// The registry file exists but could not be read.
	#[error("failed to read config registry {path}")]
	Read {
		/// File that failed to read.
		path: PathBuf,
		/// Underlying I/O failure.
		#[source]
		source: std::io::Error,
	},
	/// The registry file is not valid TOML or has the wrong shape.
	#[error("error parsing config registry {path}")]
	Parse {
		/// File that failed to parse.
		path: PathBuf,
		/// Underlying parse failure.
		#[source]
		source: toml::de::Error,
	},
	/// An application key is not present.
	#[error("application `{0}` is not in the registry")]
	AppNotFound(String),
	/// A file key is not present under its application.
	#[error("application `{app}` has no file `{file}`")]
	FileNotFound {
		/// Application that was searched.
		app: String,
		/// Missing file key.
		file: String,
	},
}

/// One configuration file owned by an application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileEntry {
	/// Human readable summary shown next to the file key.
	pub description: String,
	/// Location on disk; may contain `~`, `$VAR` or `${VAR:-default}`.
	pub path: String,
	/// Command tokens run before the editor opens.
	pub pre_hook: Vec<String>,
	/// Command tokens run after the editor exits.
	pub post_hook: Vec<String>,
}

impl FileEntry {
	/// The entry's path with `~` and environment references expanded.
	#[must_use]
	pub fn resolved_path(&self) -> PathBuf {
		paths::expand(&self.path)
	}

	/// Check the filesystem for the expanded path.
	///
	/// The answer is never cached; callers check again whenever they need a
	/// fresh view.
	#[must_use]
	pub fn exists(&self) -> bool {
		self.resolved_path().exists()
	}
}

/// An application and its configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppEntry {
	/// Human readable summary of the application.
	pub description: String,
	/// Glyph shown before the application name.
	pub icon: String,
	/// Files keyed by their registry key.
	pub files: BTreeMap<String, FileEntry>,
}

/// Read-only view over every registered application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
	apps: BTreeMap<String, AppEntry>,
}

impl Registry {
	/// Build a registry from already parsed applications.
	#[must_use]
	pub fn new(apps: BTreeMap<String, AppEntry>) -> Self {
		Self { apps }
	}

	/// Parse a registry document.
	pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
		let apps: BTreeMap<String, AppEntry> = toml::from_str(source)?;
		Ok(Self { apps })
	}

	/// Read and parse the registry stored at `path`.
	pub fn load(path: &Path) -> Result<Self, RegistryError> {
		let source = fs::read_to_string(path).map_err(|source| RegistryError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let registry = Self::from_toml_str(&source).map_err(|source| RegistryError::Parse {
			path: path.to_path_buf(),
			source,
		})?;
		tracing::debug!(
			path = %path.display(),
			apps = registry.len(),
			"loaded config registry"
		);
		Ok(registry)
	}

	/// Return the first candidate that exists on disk.
	pub fn locate<I, P>(candidates: I) -> Result<PathBuf, RegistryError>
	where
		I: IntoIterator<Item = P>,
		P: Into<PathBuf>,
	{
		let mut searched = Vec::new();
		for candidate in candidates {
			let candidate = candidate.into();
			if candidate.is_file() {
				return Ok(candidate);
			}
			tracing::trace!(path = %candidate.display(), "no registry at candidate");
			searched.push(candidate);
		}
		Err(RegistryError::NotFound { searched })
	}

	/// Number of applications.
	#[must_use]
	pub fn len(&self) -> usize {
		self.apps.len()
	}

	/// Whether the registry holds no applications.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.apps.is_empty()
	}

	/// Application keys in lexicographic order.
	#[must_use]
	pub fn app_keys(&self) -> Vec<&str> {
		self.apps.keys().map(String::as_str).collect()
	}

	/// File keys of `app` in lexicographic order.
	pub fn file_keys(&self, app: &str) -> Result<Vec<&str>, RegistryError> {
		Ok(self.app(app)?.files.keys().map(String::as_str).collect())
	}

	/// Look up an application.
	pub fn app(&self, app: &str) -> Result<&AppEntry, RegistryError> {
		self.apps
			.get(app)
			.ok_or_else(|| RegistryError::AppNotFound(app.to_string()))
	}

	/// Look up a file of an application.
	pub fn file(&self, app: &str, file: &str) -> Result<&FileEntry, RegistryError> {
		self.app(app)?
			.files
			.get(file)
			.ok_or_else(|| RegistryError::FileNotFound {
				app: app.to_string(),
				file: file.to_string(),
			})
	}
}
