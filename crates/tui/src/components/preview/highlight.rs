//! Syntax highlighting of preview lines through bat.

use std::io::Cursor;
use std::path::Path;

use bat::assets::HighlightingAssets;
use bat::config::{Config, VisibleLines};
use bat::controller::Controller;
use bat::input::Input;
use bat::line_range::LineRanges;
use bat::style::StyleComponents;
use bat::{SyntaxMapping, WrappingMode};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// bat theme used when none is configured or the configured one is unknown.
pub const DEFAULT_BAT_THEME: &str = "Monokai Extended";

/// Filename fragments tried, in order, when bat cannot tell the syntax from
/// the path alone. Values are bat language tokens.
const LANGUAGE_HINTS: &[(&[&str], &str)] = &[
	(&["css"], "css"),
	(&["toml"], "toml"),
	(&["conf", "rc"], "ini"),
	(&["json"], "json"),
	(&["sh", "bash", "zsh"], "bash"),
	(&["yaml", "yml"], "yaml"),
	(&["lua"], "lua"),
	(&["py"], "py"),
	(&["js"], "js"),
	(&["hypr"], "ini"),
];

/// Colours plain lines with bat, or passes them through when disabled.
pub struct Highlighter {
	assets: Option<HighlightingAssets>,
	theme: String,
}

impl Highlighter {
	/// Load bat's bundled syntaxes and themes.
	///
	/// An unknown `theme` falls back to [`DEFAULT_BAT_THEME`].
	#[must_use]
	pub fn new(theme: Option<&str>) -> Self {
		let assets = HighlightingAssets::from_binary();
		let requested = theme.unwrap_or(DEFAULT_BAT_THEME);
		let theme = if assets.themes().any(|name| name == requested) {
			requested.to_string()
		} else {
			tracing::warn!(theme = requested, "unknown bat theme, using default");
			DEFAULT_BAT_THEME.to_string()
		};
		Self {
			assets: Some(assets),
			theme,
		}
	}

	/// A highlighter that never colours anything.
	#[must_use]
	pub fn plain() -> Self {
		Self {
			assets: None,
			theme: DEFAULT_BAT_THEME.to_string(),
		}
	}

	/// Whether bat assets are loaded.
	#[must_use]
	pub fn is_enabled(&self) -> bool {
		self.assets.is_some()
	}

	/// Highlight `lines` as the contents of `path`.
	///
	/// Always returns one styled line per input line; any failure yields the
	/// input unstyled.
	#[must_use]
	pub fn highlight(&self, path: &Path, lines: &[String]) -> Vec<Line<'static>> {
		let Some(assets) = &self.assets else {
			return plain_lines(lines);
		};
		if lines.is_empty() {
			return Vec::new();
		}

		let language = fallback_language(assets, path);
		match run_bat(assets, &self.theme, path, language, lines) {
			Some(styled) if styled.len() == lines.len() => styled,
			Some(styled) => {
				tracing::debug!(
					path = %path.display(),
					expected = lines.len(),
					got = styled.len(),
					"highlighted line count mismatch"
				);
				plain_lines(lines)
			}
			None => plain_lines(lines),
		}
	}
}

/// Language to force when bat's own path detection finds nothing.
///
/// Only tokens bat has a syntax for are returned; bat reports unknown ones on
/// stderr, which would land on the browser's screen.
fn fallback_language(assets: &HighlightingAssets, path: &Path) -> Option<&'static str> {
	if assets
		.get_syntax_for_path(path, &SyntaxMapping::builtin())
		.is_ok()
	{
		return None;
	}
	let token = language_hint(path)?;
	let known = assets
		.get_syntax_set()
		.is_ok_and(|syntaxes| syntaxes.find_syntax_by_token(token).is_some());
	if !known {
		tracing::debug!(token, "bat has no syntax for language hint");
		return None;
	}
	Some(token)
}

/// The bat language token suggested by `path`'s file name, if any.
#[must_use]
pub fn language_hint(path: &Path) -> Option<&'static str> {
	let name = path.file_name()?.to_str()?.to_ascii_lowercase();
	LANGUAGE_HINTS
		.iter()
		.find(|(fragments, _)| fragments.iter().any(|fragment| name.contains(fragment)))
		.map(|(_, language)| *language)
}

fn run_bat(
	assets: &HighlightingAssets,
	theme: &str,
	path: &Path,
	language: Option<&str>,
	lines: &[String],
) -> Option<Vec<Line<'static>>> {
	let config = Config {
		colored_output: true,
		true_color: true,
		language,
		syntax_mapping: SyntaxMapping::builtin(),
		style_components: StyleComponents::default(),
		theme: theme.to_string(),
		visible_lines: VisibleLines::Ranges(LineRanges::all()),
		wrapping_mode: WrappingMode::NoWrapping(true),
		term_width: 120,
		tab_width: 0,
		..Default::default()
	};

	let mut source = lines.join("\n");
	source.push('\n');

	let controller = Controller::new(&config, assets);
	let input = Input::from_reader(Box::new(Cursor::new(source))).with_name(Some(path));

	let mut buffer = String::new();
	match controller.run(vec![input], Some(&mut buffer)) {
		Ok(true) => Some(buffer.lines().map(parse_ansi_line).collect()),
		Ok(false) => None,
		Err(err) => {
			tracing::debug!(path = %path.display(), error = %err, "bat failed");
			None
		}
	}
}

fn plain_lines(lines: &[String]) -> Vec<Line<'static>> {
	lines.iter().map(|line| Line::raw(line.clone())).collect()
}

/// Convert one line of bat's ANSI output into ratatui spans.
fn parse_ansi_line(line: &str) -> Line<'static> {
	let mut spans = Vec::new();
	let mut current_text = String::new();
	let mut current_style = Style::default();
	let mut chars = line.chars().peekable();

	while let Some(ch) = chars.next() {
		if ch != '\x1b' {
			current_text.push(ch);
			continue;
		}

		if !current_text.is_empty() {
			spans.push(Span::styled(
				std::mem::take(&mut current_text),
				current_style,
			));
		}

		if chars.next() == Some('[') {
			let mut code = String::new();
			while let Some(c) = chars.next_if(|c| c.is_ascii_digit() || *c == ';') {
				code.push(c);
			}
			if chars.next() == Some('m') {
				current_style = parse_ansi_codes(&code, current_style);
			}
		}
	}

	if !current_text.is_empty() {
		spans.push(Span::styled(current_text, current_style));
	}

	Line::from(spans)
}

/// Apply SGR parameters to `style`.
fn parse_ansi_codes(codes: &str, mut style: Style) -> Style {
	let parts: Vec<&str> = codes.split(';').collect();
	let mut i = 0;

	while i < parts.len() {
		let code = if parts[i].is_empty() {
			Ok(0)
		} else {
			parts[i].parse::<u8>()
		};
		match code {
			Ok(0) => style = Style::default(),
			Ok(1) => style = style.add_modifier(Modifier::BOLD),
			Ok(2) => style = style.add_modifier(Modifier::DIM),
			Ok(3) => style = style.add_modifier(Modifier::ITALIC),
			Ok(4) => style = style.add_modifier(Modifier::UNDERLINED),
			Ok(7) => style = style.add_modifier(Modifier::REVERSED),
			Ok(22) => {
				style = style
					.remove_modifier(Modifier::BOLD)
					.remove_modifier(Modifier::DIM);
			}
			Ok(23) => style = style.remove_modifier(Modifier::ITALIC),
			Ok(24) => style = style.remove_modifier(Modifier::UNDERLINED),
			Ok(27) => style = style.remove_modifier(Modifier::REVERSED),
			Ok(n @ 30..=37) => style = style.fg(basic_color(n - 30)),
			Ok(39) => style = style.fg(Color::Reset),
			Ok(n @ 40..=47) => style = style.bg(basic_color(n - 40)),
			Ok(49) => style = style.bg(Color::Reset),
			Ok(n @ 90..=97) => style = style.fg(bright_color(n - 90)),
			Ok(n @ 100..=107) => style = style.bg(bright_color(n - 100)),
			Ok(selector @ (38 | 48)) => {
				let (color, consumed) = extended_color(&parts[i + 1..]);
				if let Some(color) = color {
					style = if selector == 38 {
						style.fg(color)
					} else {
						style.bg(color)
					};
				}
				i += consumed;
			}
			_ => {}
		}
		i += 1;
	}

	style
}

/// Parse the `5;N` or `2;R;G;B` tail of an extended colour selector.
fn extended_color(rest: &[&str]) -> (Option<Color>, usize) {
	match rest {
		["5", n, ..] => (n.parse().ok().map(Color::Indexed), 2),
		["2", r, g, b, ..] => match (r.parse(), g.parse(), b.parse()) {
			(Ok(r), Ok(g), Ok(b)) => (Some(Color::Rgb(r, g, b)), 4),
			_ => (None, 4),
		},
		_ => (None, 0),
	}
}

fn basic_color(offset: u8) -> Color {
	match offset {
		0 => Color::Black,
		1 => Color::Red,
		2 => Color::Green,
		3 => Color::Yellow,
		4 => Color::Blue,
		5 => Color::Magenta,
		6 => Color::Cyan,
		_ => Color::Gray,
	}
}

fn bright_color(offset: u8) -> Color {
	match offset {
		0 => Color::DarkGray,
		1 => Color::LightRed,
		2 => Color::LightGreen,
		3 => Color::LightYellow,
		4 => Color::LightBlue,
		5 => Color::LightMagenta,
		6 => Color::LightCyan,
		_ => Color::White,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn text_of(line: &Line<'_>) -> String {
		line.spans.iter().map(|span| span.content.as_ref()).collect()
	}

	#[test]
	fn hints_follow_filename_fragments_in_order() {
		assert_eq!(language_hint(Path::new("/x/waybar/style.css")), Some("css"));
		assert_eq!(language_hint(Path::new("/x/starship.toml")), Some("toml"));
		assert_eq!(language_hint(Path::new("/x/kitty.conf")), Some("ini"));
		assert_eq!(language_hint(Path::new("/x/.zshrc")), Some("ini"));
		assert_eq!(language_hint(Path::new("/x/config.jsonc")), Some("ini"));
		assert_eq!(language_hint(Path::new("/x/layout.json")), Some("json"));
		assert_eq!(language_hint(Path::new("/x/hyprlock")), Some("ini"));
		assert_eq!(language_hint(Path::new("/x/README")), None);
	}

	#[test]
	fn plain_highlighter_passes_lines_through() {
		let lines = vec!["a = 1".to_string(), "b\t= 2".to_string()];
		let styled = Highlighter::plain().highlight(Path::new("x.toml"), &lines);
		assert_eq!(styled.len(), 2);
		assert_eq!(text_of(&styled[1]), "b\t= 2");
	}

	#[test]
	fn ansi_sequences_become_styles() {
		let line = parse_ansi_line("\x1b[38;2;255;0;0mred\x1b[0m \x1b[1;38;5;4mblue\x1b[0m");
		assert_eq!(text_of(&line), "red blue");
		assert_eq!(line.spans[0].style.fg, Some(Color::Rgb(255, 0, 0)));
		let blue = line.spans.last().expect("span");
		assert_eq!(blue.style.fg, Some(Color::Indexed(4)));
		assert!(blue.style.add_modifier.contains(Modifier::BOLD));
	}

	#[test]
	fn basic_and_bright_colours_map() {
		let style = parse_ansi_codes("31;104", Style::default());
		assert_eq!(style.fg, Some(Color::Red));
		assert_eq!(style.bg, Some(Color::LightBlue));
		assert_eq!(parse_ansi_codes("0", style), Style::default());
	}

	#[test]
	fn path_detection_wins_over_filename_hints() {
		let assets = HighlightingAssets::from_binary();
		assert_eq!(fallback_language(&assets, Path::new("/x/waybar/style.css")), None);
		assert_eq!(fallback_language(&assets, Path::new("/x/hyprlock")), Some("ini"));
		assert_eq!(fallback_language(&assets, Path::new("/x/README")), None);
	}

	#[test]
	fn bat_keeps_one_line_per_input_line() {
		let highlighter = Highlighter::new(None);
		let lines = vec![
			"[section]".to_string(),
			String::new(),
			"key = \"value\"".to_string(),
		];
		let styled = highlighter.highlight(Path::new("/tmp/example.toml"), &lines);
		assert_eq!(styled.len(), lines.len());
		let texts: Vec<String> = styled.iter().map(text_of).collect();
		assert_eq!(texts, lines);
	}
}
