mod loader;
mod types;

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};

pub use types::{Theme, ThemeRegistration};

static THEME_DOCUMENTS: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/themes");

/// Every bundled theme, parsed on first use.
///
/// A broken document leaves the catalogue empty and [`Theme::plain`] as the
/// default, so the browser still starts.
fn catalogue() -> &'static loader::BuiltinThemes {
	static CATALOGUE: OnceLock<loader::BuiltinThemes> = OnceLock::new();
	CATALOGUE.get_or_init(|| {
		loader::load_builtin_themes(&THEME_DOCUMENTS).unwrap_or_else(|err| {
			tracing::error!("failed to load built-in themes: {err:#}");
			loader::BuiltinThemes {
				registrations: Vec::new(),
				default_theme: Theme::plain(),
			}
		})
	})
}

/// The theme flagged as default among the built-ins.
#[must_use]
pub fn default_theme() -> Theme {
	catalogue().default_theme
}

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	catalogue().registrations.clone()
}

/// Look up a built-in theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<ThemeRegistration> {
	catalogue()
		.registrations
		.iter()
		.find(|registration| registration.answers_to(name))
		.cloned()
}

/// Names of the built-in themes, sorted.
#[must_use]
pub fn names() -> Vec<String> {
	catalogue()
		.registrations
		.iter()
		.map(|registration| registration.name.clone())
		.collect()
}

/// The bat theme paired with the named theme.
#[must_use]
pub fn bat_theme(name: &str) -> Option<String> {
	by_name(name).and_then(|registration| registration.bat_theme)
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
