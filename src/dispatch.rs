//! Running scripts from the search path.

use std::path::PathBuf;
use std::process::ExitStatus;

use anyhow::{Context, Result};
use hydectl_core::ScriptIndex;
use hydectl_core::scripts::{self, ScriptError};

/// Exit code used when no script matches the requested name.
pub(crate) const NOT_FOUND_EXIT: u8 = 127;

/// Names of every script on the search path, sorted.
pub(crate) fn script_names(paths: &[PathBuf]) -> Result<Vec<String>> {
	let index = ScriptIndex::scan(paths).context("failed to load scripts")?;
	Ok(index.names().into_iter().map(str::to_string).collect())
}

/// Run the script `name` with `args` and return the exit code to mirror.
pub(crate) fn run(paths: &[PathBuf], name: &str, args: &[String]) -> Result<u8> {
	let script = match scripts::resolve(paths, name) {
		Ok(script) => script,
		Err(ScriptError::NotFound(_)) => {
			tracing::info!(name, "script does not exist");
			println!("Script {name} does not exist.");
			return Ok(NOT_FOUND_EXIT);
		}
		Err(err) => return Err(err.into()),
	};

	let status = scripts::execute(&script, args)?;
	Ok(status_code(status))
}

/// Process exit code for a finished child.
///
/// Children killed by a signal map to `128 + signal` like a shell reports them.
pub(crate) fn status_code(status: ExitStatus) -> u8 {
	if let Some(code) = status.code() {
		return u8::try_from(code).unwrap_or(1);
	}
	signal_code(status).unwrap_or(1)
}

#[cfg(unix)]
fn signal_code(status: ExitStatus) -> Option<u8> {
	use std::os::unix::process::ExitStatusExt;

	status
		.signal()
		.and_then(|signal| u8::try_from(128 + signal).ok())
}

#[cfg(not(unix))]
fn signal_code(_status: ExitStatus) -> Option<u8> {
	None
}

#[cfg(all(test, unix))]
mod tests {
	use std::fs;
	use std::os::unix::fs::PermissionsExt;
	use std::process::Command;

	use tempfile::tempdir;

	use super::*;

	fn write_script(dir: &std::path::Path, name: &str, body: &str) {
		let path = dir.join(name);
		fs::write(&path, body).unwrap();
		fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
	}

	#[test]
	fn exit_codes_pass_through() {
		let status = Command::new("sh").args(["-c", "exit 3"]).status().unwrap();
		assert_eq!(status_code(status), 3);

		let status = Command::new("sh").args(["-c", "exit 0"]).status().unwrap();
		assert_eq!(status_code(status), 0);
	}

	#[test]
	fn signalled_children_report_shell_style_codes() {
		let status = Command::new("sh")
			.args(["-c", "kill -TERM $$"])
			.status()
			.unwrap();
		assert_eq!(status_code(status), 128 + 15);
	}

	#[test]
	fn lists_scripts_from_every_directory() {
		let first = tempdir().unwrap();
		let second = tempdir().unwrap();
		write_script(first.path(), "wallpaper.sh", "#!/bin/sh\n");
		write_script(second.path(), "theme", "#!/bin/sh\n");
		fs::write(second.path().join("notes.txt"), "not executable").unwrap();

		let names = script_names(&[first.path().to_path_buf(), second.path().to_path_buf()]).unwrap();
		assert_eq!(names, vec!["theme".to_string(), "wallpaper".to_string()]);
	}

	#[test]
	fn running_a_script_succeeds() {
		let dir = tempdir().unwrap();
		write_script(dir.path(), "ok.sh", "exit 0\n");
		let code = run(&[dir.path().to_path_buf()], "ok", &[]).unwrap();
		assert_eq!(code, 0);
	}

	#[test]
	fn unknown_scripts_exit_with_not_found() {
		let dir = tempdir().unwrap();
		let code = run(&[dir.path().to_path_buf()], "missing", &[]).unwrap();
		assert_eq!(code, NOT_FOUND_EXIT);
	}
}
