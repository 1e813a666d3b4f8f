//! Discovery and execution of dispatchable scripts.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use ignore::WalkBuilder;
use thiserror::Error;

/// Failures while locating or running a script.
#[derive(Debug, Error)]
pub enum ScriptError {
	/// No search directory held a script with this name.
	#[error("script `{0}` not found")]
	NotFound(String),
	/// A search directory could not be walked.
	#[error("failed to scan script directory {path}")]
	Walk {
		/// Directory being walked.
		path: PathBuf,
		/// Underlying walker failure.
		#[source]
		source: ignore::Error,
	},
	/// The interpreter or the script itself failed to start.
	#[error("failed to execute script {path}")]
	Spawn {
		/// Script that failed to start.
		path: PathBuf,
		/// Underlying I/O failure.
		#[source]
		source: std::io::Error,
	},
}

/// Executable scripts found across the search directories, keyed by file stem.
#[derive(Debug, Clone, Default)]
pub struct ScriptIndex {
	scripts: BTreeMap<String, PathBuf>,
}

impl ScriptIndex {
	/// Walk `dirs` in order and index every executable regular file.
	///
	/// Hidden entries are skipped and ignore files are not consulted. When two
	/// directories provide the same name the earlier one wins. Directories
	/// that do not exist are skipped.
	pub fn scan<P: AsRef<Path>>(dirs: &[P]) -> Result<Self, ScriptError> {
		let mut scripts = BTreeMap::new();

		for dir in dirs {
			let dir = dir.as_ref();
			if !dir.is_dir() {
				tracing::debug!(path = %dir.display(), "script directory does not exist");
				continue;
			}

			let walker = WalkBuilder::new(dir)
				.standard_filters(false)
				.hidden(true)
				.follow_links(true)
				.build();

			for entry in walker {
				let entry = entry.map_err(|source| ScriptError::Walk {
					path: dir.to_path_buf(),
					source,
				})?;
				let path = entry.path();
				if !is_executable_file(path) {
					continue;
				}
				let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
					continue;
				};
				scripts
					.entry(stem.to_string())
					.or_insert_with(|| path.to_path_buf());
			}
		}

		tracing::debug!(count = scripts.len(), "indexed scripts");
		Ok(Self { scripts })
	}

	/// Script names in lexicographic order.
	#[must_use]
	pub fn names(&self) -> Vec<&str> {
		self.scripts.keys().map(String::as_str).collect()
	}

	/// Path of the script registered under `name`.
	#[must_use]
	pub fn get(&self, name: &str) -> Option<&Path> {
		self.scripts.get(name).map(PathBuf::as_path)
	}

	/// Number of indexed scripts.
	#[must_use]
	pub fn len(&self) -> usize {
		self.scripts.len()
	}

	/// Whether no script was found.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.scripts.is_empty()
	}
}

/// Find the script to run for `name`.
///
/// An exact `dir/name` match in any directory takes precedence; otherwise each
/// directory is tried in turn with the `.sh` and `.py` suffixes.
pub fn resolve<P: AsRef<Path>>(dirs: &[P], name: &str) -> Result<PathBuf, ScriptError> {
	let existing: Vec<&Path> = dirs
		.iter()
		.map(AsRef::as_ref)
		.filter(|dir| dir.is_dir())
		.collect();

	if let Some(found) = existing
		.iter()
		.map(|dir| dir.join(name))
		.find(|candidate| candidate.is_file())
	{
		return Ok(found);
	}

	for dir in &existing {
		for suffix in ["sh", "py"] {
			let candidate = dir.join(format!("{name}.{suffix}"));
			if candidate.is_file() {
				return Ok(candidate);
			}
		}
	}

	Err(ScriptError::NotFound(name.to_string()))
}

/// Run `script` with `args`, inheriting the terminal.
///
/// `.sh` files go through `bash` and `.py` files through `python`; anything
/// else is executed directly.
pub fn execute(script: &Path, args: &[String]) -> Result<ExitStatus, ScriptError> {
	let mut command = match script.extension().and_then(|ext| ext.to_str()) {
		Some("sh") => interpreted("bash", script),
		Some("py") => interpreted("python", script),
		_ => Command::new(script),
	};
	command.args(args);

	tracing::info!(script = %script.display(), ?args, "executing script");
	let status = command.status().map_err(|source| ScriptError::Spawn {
		path: script.to_path_buf(),
		source,
	})?;
	if !status.success() {
		tracing::warn!(script = %script.display(), %status, "script exited unsuccessfully");
	}
	Ok(status)
}

fn interpreted(interpreter: &str, script: &Path) -> Command {
	let mut command = Command::new(interpreter);
	command.arg(script);
	command
}

#[cfg(unix)]
fn is_executable_file(path: &Path) -> bool {
	use std::os::unix::fs::PermissionsExt;

	fs::metadata(path)
		.map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
		.unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable_file(path: &Path) -> bool {
	fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;

	use super::*;

	#[cfg(unix)]
	fn write_script(dir: &Path, name: &str, mode: u32) -> PathBuf {
		use std::os::unix::fs::PermissionsExt;

		let path = dir.join(name);
		fs::write(&path, "#!/bin/sh\nexit 0\n").expect("write script");
		fs::set_permissions(&path, fs::Permissions::from_mode(mode)).expect("chmod");
		path
	}

	#[cfg(unix)]
	#[test]
	fn scan_keeps_executables_and_skips_hidden() {
		let dir = tempdir().expect("tempdir");
		write_script(dir.path(), "wallpaper.sh", 0o755);
		write_script(dir.path(), "theme.py", 0o755);
		write_script(dir.path(), "notes.txt", 0o644);
		write_script(dir.path(), ".secret", 0o755);

		let index = ScriptIndex::scan(&[dir.path()]).expect("scan");
		assert_eq!(index.names(), vec!["theme", "wallpaper"]);
	}

	#[cfg(unix)]
	#[test]
	fn earlier_directory_wins_on_name_clash() {
		let first = tempdir().expect("tempdir");
		let second = tempdir().expect("tempdir");
		let winner = write_script(first.path(), "reload.sh", 0o755);
		write_script(second.path(), "reload", 0o755);
		write_script(second.path(), "extra", 0o755);

		let index = ScriptIndex::scan(&[first.path(), second.path()]).expect("scan");
		assert_eq!(index.names(), vec!["extra", "reload"]);
		assert_eq!(index.get("reload"), Some(winner.as_path()));
	}

	#[test]
	fn scan_skips_missing_directories() {
		let dir = tempdir().expect("tempdir");
		let index = ScriptIndex::scan(&[dir.path().join("absent")]).expect("scan");
		assert!(index.is_empty());
	}

	#[cfg(unix)]
	#[test]
	fn resolve_prefers_exact_names_across_directories() {
		let first = tempdir().expect("tempdir");
		let second = tempdir().expect("tempdir");
		write_script(first.path(), "tool.sh", 0o755);
		let exact = write_script(second.path(), "tool", 0o755);

		let found = resolve(&[first.path(), second.path()], "tool").expect("resolve");
		assert_eq!(found, exact);
	}

	#[cfg(unix)]
	#[test]
	fn resolve_falls_back_to_known_suffixes() {
		let dir = tempdir().expect("tempdir");
		let script = write_script(dir.path(), "picker.py", 0o755);

		assert_eq!(resolve(&[dir.path()], "picker").expect("resolve"), script);
		assert!(matches!(
			resolve(&[dir.path()], "absent"),
			Err(ScriptError::NotFound(name)) if name == "absent"
		));
	}

	#[cfg(unix)]
	#[test]
	fn execute_reports_exit_status() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("fail.sh");
		fs::write(&path, "exit 3\n").expect("write");

		let status = execute(&path, &[]).expect("bash available");
		assert_eq!(status.code(), Some(3));
	}

	#[test]
	fn execute_reports_spawn_failures() {
		let dir = tempdir().expect("tempdir");
		let err = execute(&dir.path().join("nothing-here"), &[]).expect_err("spawn fails");
		assert!(matches!(err, ScriptError::Spawn { .. }));
	}
}
