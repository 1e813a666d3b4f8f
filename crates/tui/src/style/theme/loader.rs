//! Parsing of the theme documents embedded in the binary.
//!
//! Each document names one theme and gives a style for every slot of
//! [`Theme`]. Colours are ratatui colour names, ANSI indexes or `#rgb` and
//! `#rrggbb` hex values.

use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	bat_theme: Option<String>,
	styles: Palette,
}

impl ThemeFile {
	fn into_registration(self) -> ThemeRegistration {
		let mut registration = ThemeRegistration::new(self.name, self.styles.into());
		if let Some(bat_theme) = self.bat_theme {
			registration = registration.with_bat_theme(bat_theme);
		}
		for alias in self.aliases {
			let alias = alias.trim();
			if !alias.is_empty() {
				registration = registration.alias(alias);
			}
		}
		registration
	}
}

/// One style per [`Theme`] slot, as written in a theme document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Palette {
	header: StyleSpec,
	border_active: StyleSpec,
	border_inactive: StyleSpec,
	row_highlight: StyleSpec,
	prompt: StyleSpec,
	empty: StyleSpec,
	description: StyleSpec,
	missing: StyleSpec,
	error: StyleSpec,
	#[serde(rename = "match")]
	matched: StyleSpec,
	current_match: StyleSpec,
}

impl From<Palette> for Theme {
	fn from(palette: Palette) -> Self {
		Self {
			header: palette.header.into(),
			border_active: palette.border_active.into(),
			border_inactive: palette.border_inactive.into(),
			row_highlight: palette.row_highlight.into(),
			prompt: palette.prompt.into(),
			empty: palette.empty.into(),
			description: palette.description.into(),
			missing: palette.missing.into(),
			error: palette.error.into(),
			matched: palette.matched.into(),
			current_match: palette.current_match.into(),
		}
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleSpec {
	fg: Option<ColorSpec>,
	bg: Option<ColorSpec>,
	modifiers: Vec<ModifierSpec>,
}

impl From<StyleSpec> for Style {
	fn from(spec: StyleSpec) -> Self {
		let mut style = Style::new();
		if let Some(ColorSpec(fg)) = spec.fg {
			style = style.fg(fg);
		}
		if let Some(ColorSpec(bg)) = spec.bg {
			style = style.bg(bg);
		}
		spec.modifiers
			.into_iter()
			.fold(style, |style, ModifierSpec(modifier)| style.add_modifier(modifier))
	}
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(try_from = "String")]
struct ColorSpec(Color);

impl TryFrom<String> for ColorSpec {
	type Error = anyhow::Error;

	fn try_from(value: String) -> Result<Self> {
		parse_color(&value).map(Self)
	}
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(try_from = "String")]
struct ModifierSpec(Modifier);

impl TryFrom<String> for ModifierSpec {
	type Error = anyhow::Error;

	fn try_from(value: String) -> Result<Self> {
		parse_modifier(&value).map(Self)
	}
}

/// Parse every document in `dir`, in file name order.
///
/// Exactly one document may set `default = true`; without one the first
/// theme is the default.
pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<&File> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations = Vec::with_capacity(files.len());
	let mut default: Option<(usize, String)> = None;
	for file in files {
		let document = parse_theme_file(file)?;
		if document.default {
			if let Some((_, existing)) = &default {
				bail!(
					"built-in themes `{existing}` and `{}` are both marked as default",
					document.name
				);
			}
			default = Some((registrations.len(), document.name.clone()));
		}
		registrations.push(document.into_registration());
	}

	let index = default.map_or(0, |(index, _)| index);
	let default_theme = registrations
		.get(index)
		.map(|registration| registration.theme)
		.ok_or_else(|| anyhow!("no built-in theme definitions were found"))?;

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

fn parse_theme_file(file: &File) -> Result<ThemeFile> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{} is not valid UTF-8", path.display()))?;
	toml::from_str(contents)
		.with_context(|| format!("failed to parse built-in theme {}", path.display()))
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();
	if let Some(hex) = value.strip_prefix('#') {
		return match hex.len() {
			3 => {
				let doubled: String = hex.chars().flat_map(|ch| [ch, ch]).collect();
				parse_color(&format!("#{doubled}"))
			}
			6 => Color::from_str(value).map_err(|_| anyhow!("invalid hex colour `{value}`")),
			_ => bail!("hex colour `{value}` must have 3 or 6 digits"),
		};
	}
	Color::from_str(value).map_err(|_| anyhow!("unknown colour `{value}`"))
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	let key: String = input
		.trim()
		.chars()
		.filter(|ch| !matches!(ch, '-' | '_' | ' '))
		.map(|ch| ch.to_ascii_lowercase())
		.collect();
	let modifier = match key.as_str() {
		"bold" => Modifier::BOLD,
		"dim" => Modifier::DIM,
		"italic" => Modifier::ITALIC,
		"underline" | "underlined" => Modifier::UNDERLINED,
		"slowblink" => Modifier::SLOW_BLINK,
		"rapidblink" => Modifier::RAPID_BLINK,
		"reverse" | "reversed" => Modifier::REVERSED,
		"hidden" => Modifier::HIDDEN,
		"crossedout" | "strikethrough" => Modifier::CROSSED_OUT,
		_ => bail!("unknown modifier `{input}`"),
	};
	Ok(modifier)
}
