//! Live filtering of the app and file lists, and search inside the preview.

use regex::{Regex, RegexBuilder};

/// Indices of the `candidates` whose fields contain `query`, in original order.
///
/// Matching is a case-insensitive substring test over every field returned by
/// `fields`. An empty query keeps every candidate.
pub fn filter<C, F>(candidates: &[C], query: &str, fields: F) -> Vec<usize>
where
	F: Fn(&C) -> Vec<&str>,
{
	if query.is_empty() {
		return (0..candidates.len()).collect();
	}

	let needle = query.to_lowercase();
	candidates
		.iter()
		.enumerate()
		.filter(|(_, candidate)| {
			fields(*candidate)
				.iter()
				.any(|field| field.to_lowercase().contains(&needle))
		})
		.map(|(idx, _)| idx)
		.collect()
}

/// One match inside the preview text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentMatch {
	/// Byte offset of the match in the preview lines joined with `\n`.
	pub offset: usize,
	/// Zero-based line holding the match.
	pub line: usize,
	/// Byte column where the match starts.
	pub start: usize,
	/// Byte column one past the end of the match.
	pub end: usize,
}

/// Matches of a query inside the previewed lines plus a cursor over them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSearch {
	pattern: String,
	matches: Vec<ContentMatch>,
	current: usize,
}

impl ContentSearch {
	/// Find every non-overlapping, case-insensitive match of `query`.
	///
	/// The query is used as a regular expression when it compiles; otherwise
	/// it is matched literally. Empty matches are ignored.
	pub fn compute<S: AsRef<str>>(lines: &[S], query: &str) -> Self {
		let mut search = Self {
			pattern: query.to_string(),
			..Self::default()
		};
		if query.is_empty() {
			return search;
		}
		let Some(regex) = compile(query) else {
			return search;
		};

		let mut offset = 0;
		for (line_idx, line) in lines.iter().enumerate() {
			let line = line.as_ref();
			search.matches.extend(
				regex
					.find_iter(line)
					.filter(|found| !found.is_empty())
					.map(|found| ContentMatch {
						offset: offset + found.start(),
						line: line_idx,
						start: found.start(),
						end: found.end(),
					}),
			);
			offset += line.len() + 1;
		}
		search
	}

	/// The query this search was computed for.
	#[must_use]
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// All matches in document order.
	#[must_use]
	pub fn matches(&self) -> &[ContentMatch] {
		&self.matches
	}

	/// Number of matches.
	#[must_use]
	pub fn len(&self) -> usize {
		self.matches.len()
	}

	/// Whether the query matched nothing.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.matches.is_empty()
	}

	/// Index of the current match.
	#[must_use]
	pub fn current_index(&self) -> usize {
		self.current
	}

	/// The match the cursor is on.
	#[must_use]
	pub fn current(&self) -> Option<&ContentMatch> {
		self.matches.get(self.current)
	}

	/// Advance to the next match, wrapping after the last one.
	pub fn next(&mut self) -> Option<&ContentMatch> {
		if self.matches.is_empty() {
			return None;
		}
		self.current = (self.current + 1) % self.matches.len();
		self.current()
	}

	/// Step back to the previous match, wrapping before the first one.
	pub fn prev(&mut self) -> Option<&ContentMatch> {
		if self.matches.is_empty() {
			return None;
		}
		let len = self.matches.len();
		self.current = (self.current + len - 1) % len;
		self.current()
	}
}

fn compile(query: &str) -> Option<Regex> {
	RegexBuilder::new(query)
		.case_insensitive(true)
		.build()
		.or_else(|err| {
			tracing::debug!(%query, error = %err, "invalid pattern, matching literally");
			RegexBuilder::new(&regex::escape(query))
				.case_insensitive(true)
				.build()
		})
		.ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn names(candidates: &[(&str, &str)], query: &str) -> Vec<String> {
		filter(candidates, query, |(name, desc)| vec![*name, *desc])
			.into_iter()
			.map(|idx| candidates[idx].0.to_string())
			.collect()
	}

	#[test]
	fn empty_query_is_identity() {
		let apps = [("waybar", "Bar"), ("firefox", "Browser"), ("kitty", "Terminal")];
		assert_eq!(names(&apps, ""), vec!["waybar", "firefox", "kitty"]);
	}

	#[test]
	fn filtering_ignores_case() {
		let apps = [("Foo", "")];
		assert_eq!(names(&apps, "foo"), vec!["Foo"]);
		assert_eq!(names(&apps, "FOO"), vec!["Foo"]);
	}

	#[test]
	fn app_query_matches_name_or_description() {
		let apps = [("firefox", "Browser"), ("kitty", "Terminal"), ("waybar", "Bar")];
		assert_eq!(names(&apps, "fi"), vec!["firefox"]);
		assert_eq!(names(&apps, "bar"), vec!["waybar"]);
		assert_eq!(names(&apps, "term"), vec!["kitty"]);
		assert!(names(&apps, "zzz").is_empty());
	}

	#[test]
	fn filtering_preserves_order() {
		let files = [("c", "x"), ("a", "x"), ("b", "y")];
		assert_eq!(names(&files, "x"), vec!["c", "a"]);
	}

	#[test]
	fn content_search_uses_regex_case_insensitively() {
		let lines = ["font_size 11", "Font_family mono", "bold_font auto"];
		let search = ContentSearch::compute(&lines, "^font");
		assert_eq!(search.len(), 2);
		assert_eq!(search.matches()[0].line, 0);
		assert_eq!(search.matches()[1].line, 1);
		assert_eq!(search.matches()[1].offset, "font_size 11\n".len());
	}

	#[test]
	fn invalid_regex_matches_literally() {
		let lines = ["list = [1, 2]", "no brackets", "["];
		let search = ContentSearch::compute(&lines, "[");
		assert_eq!(search.pattern(), "[");
		assert_eq!(search.len(), 2);
		let first = search.matches()[0];
		assert_eq!((first.line, first.start, first.end), (0, 7, 8));
		assert_eq!(search.matches()[1].line, 2);
	}

	#[test]
	fn matches_do_not_overlap_and_skip_empty() {
		let search = ContentSearch::compute(&["aaaa"], "aa");
		assert_eq!(search.len(), 2);
		assert!(ContentSearch::compute(&["abc"], "x*").is_empty());
	}

	#[test]
	fn cycling_wraps_in_both_directions() {
		let lines = ["a", "a", "a"];
		let mut search = ContentSearch::compute(&lines, "a");
		assert_eq!(search.current_index(), 0);
		for _ in 0..search.len() {
			search.next();
		}
		assert_eq!(search.current_index(), 0);

		search.prev();
		assert_eq!(search.current_index(), 2);
		assert_eq!(search.current().map(|m| m.line), Some(2));
	}

	#[test]
	fn cycling_without_matches_is_a_noop() {
		let mut search = ContentSearch::compute(&["abc"], "zzz");
		assert!(search.next().is_none());
		assert!(search.prev().is_none());
		assert_eq!(search.current_index(), 0);
	}
}
