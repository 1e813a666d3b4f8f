//! Editing a registered file: hooks around an external editor.

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::registry::FileEntry;

/// Editors looked up on `PATH` when neither the settings nor `$EDITOR` name one.
pub const FALLBACK_EDITORS: &[&str] = &["nvim", "vim", "nano", "code", "gedit"];

/// Failures that abort an edit session.
#[derive(Debug, Error)]
pub enum EditorError {
	/// No editor was configured and none of the fallbacks is installed.
	#[error("no editor found; set the EDITOR environment variable")]
	NoEditor,
	/// The parent directory of the target file could not be created.
	#[error("failed to create directory {path}")]
	CreateDir {
		/// Directory that could not be created.
		path: PathBuf,
		/// Underlying I/O failure.
		#[source]
		source: std::io::Error,
	},
	/// The editor process failed to start.
	#[error("failed to launch editor `{program}`")]
	Launch {
		/// Program that failed to start.
		program: String,
		/// Underlying I/O failure.
		#[source]
		source: std::io::Error,
	},
	/// The editor exited with a failure status.
	#[error("editor `{program}` exited with {status}")]
	Exited {
		/// Editor program.
		program: String,
		/// Exit status description.
		status: std::process::ExitStatus,
	},
}

/// A resolved editor invocation, possibly carrying its own arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
	/// Executable to run.
	pub program: String,
	/// Arguments placed before the file path.
	pub args: Vec<String>,
}

impl EditorCommand {
	/// Split a command line such as `code --wait` on whitespace.
	#[must_use]
	pub fn parse(command: &str) -> Option<Self> {
		let mut parts = command.split_whitespace().map(str::to_string);
		let program = parts.next()?;
		Some(Self {
			program,
			args: parts.collect(),
		})
	}
}

impl fmt::Display for EditorCommand {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.program)?;
		for arg in &self.args {
			write!(f, " {arg}")?;
		}
		Ok(())
	}
}

/// Pick the editor for this session from the process environment.
///
/// Precedence: `configured`, then `$EDITOR`, then the first of
/// [`FALLBACK_EDITORS`] found on `PATH`.
pub fn resolve_editor(configured: Option<&str>) -> Result<EditorCommand, EditorError> {
	resolve_editor_with(configured, env::var("EDITOR").ok(), env::var_os("PATH"))
}

/// [`resolve_editor`] with the environment passed in explicitly.
pub fn resolve_editor_with(
	configured: Option<&str>,
	editor_var: Option<String>,
	path_var: Option<OsString>,
) -> Result<EditorCommand, EditorError> {
	if let Some(command) = configured.and_then(EditorCommand::parse) {
		return Ok(command);
	}
	if let Some(command) = editor_var.as_deref().and_then(EditorCommand::parse) {
		return Ok(command);
	}

	let dirs: Vec<PathBuf> = path_var
		.map(|path| env::split_paths(&path).collect())
		.unwrap_or_default();
	FALLBACK_EDITORS
		.iter()
		.find(|name| dirs.iter().any(|dir| dir.join(name).is_file()))
		.map(|name| EditorCommand {
			program: (*name).to_string(),
			args: Vec::new(),
		})
		.ok_or(EditorError::NoEditor)
}

/// Result of running one hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
	/// The entry defines no hook.
	Skipped,
	/// The hook ran and exited successfully.
	Succeeded,
	/// The hook could not start or exited with a failure.
	Failed(String),
}

/// Progress notifications emitted while an edit session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStep<'a> {
	/// The pre-hook is about to run.
	PreHook,
	/// The editor is about to open.
	OpeningEditor(&'a EditorCommand),
	/// The post-hook is about to run.
	PostHook,
}

/// Summary of a finished edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditReport {
	/// Expanded path that was opened.
	pub path: PathBuf,
	/// What happened to the pre-hook.
	pub pre_hook: HookOutcome,
	/// What happened to the post-hook.
	pub post_hook: HookOutcome,
}

/// One edit of one registered file.
#[derive(Debug, Clone)]
pub struct EditSession<'a> {
	app: &'a str,
	entry: &'a FileEntry,
}

impl<'a> EditSession<'a> {
	/// Prepare to edit `entry`, registered under `app`.
	#[must_use]
	pub fn new(app: &'a str, entry: &'a FileEntry) -> Self {
		Self { app, entry }
	}

	/// Application the file belongs to.
	#[must_use]
	pub fn app(&self) -> &str {
		self.app
	}

	/// Run pre-hook, editor and post-hook in sequence.
	///
	/// Hook failures are recorded in the report and never abort the session.
	/// The parent directory of the target is created when missing.
	pub fn run<F>(&self, editor: &EditorCommand, mut on_step: F) -> Result<EditReport, EditorError>
	where
		F: FnMut(EditStep<'_>),
	{
		let path = self.entry.resolved_path();

		let pre_hook = if self.entry.pre_hook.is_empty() {
			HookOutcome::Skipped
		} else {
			on_step(EditStep::PreHook);
			run_hook(&self.entry.pre_hook)
		};

		ensure_parent(&path)?;

		on_step(EditStep::OpeningEditor(editor));
		tracing::info!(app = self.app, path = %path.display(), editor = %editor, "opening editor");
		let status = Command::new(&editor.program)
			.args(&editor.args)
			.arg(&path)
			.status()
			.map_err(|source| EditorError::Launch {
				program: editor.program.clone(),
				source,
			})?;
		if !status.success() {
			return Err(EditorError::Exited {
				program: editor.program.clone(),
				status,
			});
		}

		let post_hook = if self.entry.post_hook.is_empty() {
			HookOutcome::Skipped
		} else {
			on_step(EditStep::PostHook);
			run_hook(&self.entry.post_hook)
		};

		Ok(EditReport {
			path,
			pre_hook,
			post_hook,
		})
	}
}

fn ensure_parent(path: &Path) -> Result<(), EditorError> {
	let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) else {
		return Ok(());
	};
	fs::create_dir_all(parent).map_err(|source| EditorError::CreateDir {
		path: parent.to_path_buf(),
		source,
	})
}

/// Run a hook's command tokens, inheriting the terminal.
pub fn run_hook(tokens: &[String]) -> HookOutcome {
	let Some((program, args)) = tokens.split_first() else {
		return HookOutcome::Skipped;
	};

	tracing::debug!(%program, ?args, "running hook");
	match Command::new(program).args(args).status() {
		Ok(status) if status.success() => HookOutcome::Succeeded,
		Ok(status) => {
			tracing::warn!(%program, %status, "hook failed");
			HookOutcome::Failed(format!("`{program}` exited with {status}"))
		}
		Err(err) => {
			tracing::warn!(%program, error = %err, "hook failed to start");
			HookOutcome::Failed(format!("`{program}`: {err}"))
		}
	}
}
