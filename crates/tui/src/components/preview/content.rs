//! Reading configuration files into display-ready lines.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Lines read beyond this count are dropped.
pub const MAX_PREVIEW_LINES: usize = 10_000;

/// Sentinel shown when the path does not exist.
pub const MISSING_SENTINEL: &str = "File does not exist";
/// Sentinel shown when the path exists but is not a regular file.
pub const NOT_A_FILE_SENTINEL: &str = "Not a regular file";
/// Sentinel shown for a file with no content.
pub const EMPTY_SENTINEL: &str = "(empty file)";

/// What kind of lines a [`LoadedContent`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
	/// Real file content.
	Text,
	/// A single sentinel for an empty file.
	Empty,
	/// A single sentinel for a path that is absent or not a regular file.
	Missing,
	/// A single sentinel carrying the I/O error text.
	Error,
}

/// The plain lines of a previewed file.
///
/// Never empty: degenerate files are represented by exactly one sentinel
/// line whose meaning is given by [`ContentKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedContent {
	/// Lines without their terminators, control characters removed.
	pub lines: Vec<String>,
	/// Whether `lines` hold file content or a sentinel.
	pub kind: ContentKind,
	/// Set when the file exceeded [`MAX_PREVIEW_LINES`]; the last line is
	/// then a notice rather than content.
	pub truncated: bool,
}

impl LoadedContent {
	fn sentinel(kind: ContentKind, message: impl Into<String>) -> Self {
		Self {
			lines: vec![message.into()],
			kind,
			truncated: false,
		}
	}

	/// Number of lines, sentinels included.
	#[must_use]
	pub fn line_count(&self) -> usize {
		self.lines.len()
	}

	/// The lines that came from the file itself.
	#[must_use]
	pub fn content_lines(&self) -> &[String] {
		match self.kind {
			ContentKind::Text if self.truncated => &self.lines[..self.lines.len() - 1],
			ContentKind::Text => &self.lines,
			_ => &[],
		}
	}
}

/// Text of the notice appended to truncated files.
#[must_use]
pub fn truncation_notice() -> String {
	format!("... (file too large, showing first {MAX_PREVIEW_LINES} lines)")
}

/// Read `path` for display.
///
/// Invalid UTF-8 is replaced lossily. The file handle is closed before this
/// returns.
#[must_use]
pub fn load(path: &Path) -> LoadedContent {
	let metadata = match fs::metadata(path) {
		Ok(metadata) => metadata,
		Err(err) if err.kind() == ErrorKind::NotFound => {
			return LoadedContent::sentinel(ContentKind::Missing, MISSING_SENTINEL);
		}
		Err(err) => return read_error(path, &err),
	};
	if !metadata.is_file() {
		return LoadedContent::sentinel(ContentKind::Missing, NOT_A_FILE_SENTINEL);
	}

	let file = match File::open(path) {
		Ok(file) => file,
		Err(err) => return read_error(path, &err),
	};

	let mut reader = BufReader::new(file);
	let mut buf = Vec::new();
	let mut lines = Vec::new();
	let mut truncated = false;

	loop {
		buf.clear();
		match reader.read_until(b'\n', &mut buf) {
			Ok(0) => break,
			Ok(_) => {}
			Err(err) => return read_error(path, &err),
		}
		if lines.len() == MAX_PREVIEW_LINES {
			truncated = true;
			break;
		}
		if buf.last() == Some(&b'\n') {
			buf.pop();
			if buf.last() == Some(&b'\r') {
				buf.pop();
			}
		}
		lines.push(sanitize(&String::from_utf8_lossy(&buf)));
	}

	if lines.is_empty() {
		return LoadedContent::sentinel(ContentKind::Empty, EMPTY_SENTINEL);
	}
	if truncated {
		tracing::debug!(path = %path.display(), "preview truncated");
		lines.push(truncation_notice());
	}

	LoadedContent {
		lines,
		kind: ContentKind::Text,
		truncated,
	}
}

fn read_error(path: &Path, err: &std::io::Error) -> LoadedContent {
	tracing::debug!(path = %path.display(), error = %err, "preview read failed");
	LoadedContent::sentinel(ContentKind::Error, format!("Error reading file: {err}"))
}

/// Drop ASCII control characters other than tab.
#[must_use]
pub fn sanitize(line: &str) -> String {
	line.chars()
		.filter(|ch| *ch == '\t' || !ch.is_ascii_control())
		.collect()
}
