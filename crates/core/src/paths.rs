//! Expansion of `~` and environment references in registry paths.
//!
//! Paths in the registry are written the way a user would type them in a
//! shell: `~/.config/kitty/kitty.conf`, `${XDG_CONFIG_HOME:-~/.config}/waybar`
//! or `$HOME/.zshrc`. [`expand`] turns them into concrete filesystem paths
//! using the process environment.

use std::env;
use std::path::PathBuf;

/// Expand `path` against the current process environment.
#[must_use]
pub fn expand(path: &str) -> PathBuf {
	PathBuf::from(expand_with(path, |name| env::var(name).ok()))
}

/// Expand `path` using `lookup` to resolve variable names.
///
/// Supported forms, applied in this order:
/// - a leading `~` or `~/` is replaced with `HOME`;
/// - `${VAR:-default}` yields `VAR` when it is set and non-empty, otherwise the
///   expanded `default`;
/// - `${VAR}` and `$VAR` yield the variable's value or nothing.
///
/// Unterminated `${` sequences and a `$` that does not start a name are kept
/// verbatim.
pub fn expand_with<F>(path: &str, lookup: F) -> String
where
	F: Fn(&str) -> Option<String>,
{
	expand_inner(path, &lookup)
}

fn expand_inner(path: &str, lookup: &dyn Fn(&str) -> Option<String>) -> String {
	let path = expand_tilde(path, lookup);
	let mut out = String::with_capacity(path.len());
	let mut rest = path.as_str();

	while let Some(pos) = rest.find('$') {
		out.push_str(&rest[..pos]);
		let after = &rest[pos + 1..];

		if let Some(body) = after.strip_prefix('{') {
			match closing_brace(body) {
				Some(end) => {
					out.push_str(&expand_braced(&body[..end], lookup));
					rest = &body[end + 1..];
				}
				None => {
					out.push_str(&rest[pos..]);
					rest = "";
				}
			}
			continue;
		}

		let name_len = identifier_len(after);
		if name_len == 0 {
			out.push('$');
			rest = after;
		} else {
			out.push_str(&lookup(&after[..name_len]).unwrap_or_default());
			rest = &after[name_len..];
		}
	}

	out.push_str(rest);
	out
}

fn expand_tilde(path: &str, lookup: &dyn Fn(&str) -> Option<String>) -> String {
	if path == "~" {
		return lookup("HOME").unwrap_or_default();
	}
	match path.strip_prefix("~/") {
		Some(rest) => {
			let home = lookup("HOME").unwrap_or_default();
			if home.ends_with('/') {
				format!("{home}{rest}")
			} else {
				format!("{home}/{rest}")
			}
		}
		None => path.to_string(),
	}
}

fn expand_braced(expr: &str, lookup: &dyn Fn(&str) -> Option<String>) -> String {
	match expr.split_once(":-") {
		Some((name, default)) => match lookup(name) {
			Some(value) if !value.is_empty() => value,
			_ => expand_inner(default, lookup),
		},
		None => lookup(expr).unwrap_or_default(),
	}
}

/// Byte index of the `}` closing a `${`, honouring nested `${...}` defaults.
fn closing_brace(body: &str) -> Option<usize> {
	let mut depth = 0usize;
	let bytes = body.as_bytes();
	for (idx, byte) in bytes.iter().enumerate() {
		match byte {
			b'{' if idx > 0 && bytes[idx - 1] == b'$' => depth += 1,
			b'}' if depth == 0 => return Some(idx),
			b'}' => depth -= 1,
			_ => {}
		}
	}
	None
}

fn identifier_len(input: &str) -> usize {
	input
		.char_indices()
		.take_while(|(idx, ch)| {
			ch.is_ascii_alphabetic() || *ch == '_' || (*idx > 0 && ch.is_ascii_digit())
		})
		.count()
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| ((*k).to_string(), (*v).to_string()))
			.collect();
		move |name| map.get(name).cloned()
	}

	#[test]
	fn tilde_expands_to_home() {
		let lookup = env_of(&[("HOME", "/home/hyde")]);
		assert_eq!(
			expand_with("~/.config/kitty/kitty.conf", &lookup),
			"/home/hyde/.config/kitty/kitty.conf"
		);
		assert_eq!(expand_with("~", &lookup), "/home/hyde");
	}

	#[test]
	fn tilde_only_applies_at_the_start() {
		let lookup = env_of(&[("HOME", "/home/hyde")]);
		assert_eq!(expand_with("/etc/~/x", &lookup), "/etc/~/x");
	}

	#[test]
	fn braced_default_is_used_when_unset_or_empty() {
		let lookup = env_of(&[("HOME", "/home/hyde"), ("EMPTY", "")]);
		assert_eq!(
			expand_with("${XDG_CONFIG_HOME:-~/.config}/waybar/config.jsonc", &lookup),
			"/home/hyde/.config/waybar/config.jsonc"
		);
		assert_eq!(expand_with("${EMPTY:-/fallback}", &lookup), "/fallback");
	}

	#[test]
	fn braced_value_wins_over_default() {
		let lookup = env_of(&[("XDG_CONFIG_HOME", "/cfg")]);
		assert_eq!(
			expand_with("${XDG_CONFIG_HOME:-/nope}/hypr", &lookup),
			"/cfg/hypr"
		);
	}

	#[test]
	fn nested_defaults_expand_recursively() {
		let lookup = env_of(&[("HOME", "/home/hyde")]);
		assert_eq!(
			expand_with("${A:-${B:-$HOME/x}}/y", &lookup),
			"/home/hyde/x/y"
		);
	}

	#[test]
	fn simple_variables_and_unknowns() {
		let lookup = env_of(&[("HOME", "/home/hyde")]);
		assert_eq!(expand_with("$HOME/.zshrc", &lookup), "/home/hyde/.zshrc");
		assert_eq!(expand_with("/a/$MISSING/b", &lookup), "/a//b");
		assert_eq!(expand_with("/a/${MISSING}/b", &lookup), "/a//b");
	}

	#[test]
	fn stray_dollars_are_preserved() {
		let lookup = env_of(&[]);
		assert_eq!(expand_with("/price/$5", &lookup), "/price/$5");
		assert_eq!(expand_with("/open/${UNTERMINATED", &lookup), "/open/${UNTERMINATED");
		assert_eq!(expand_with("/end/$", &lookup), "/end/$");
	}
}
