use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

use crate::app_dirs::AppDir;
use crate::logging;

/// Version banner listing where hydectl reads settings and writes its log.
pub(super) fn long_version() -> &'static str {
	let locations: [(&str, Result<PathBuf>); 3] = [
		("config directory", AppDir::Config.path()),
		("data directory", AppDir::Data.path()),
		("log file", logging::log_file()),
	];

	let mut banner = format!("{}\n", env!("CARGO_PKG_VERSION"));
	for (label, location) in locations {
		let shown = location.map_or_else(
			|err| format!("unavailable ({err})"),
			|path| path.display().to_string(),
		);
		let _ = writeln!(banner, "{label}: {shown}");
	}

	Box::leak(banner.into_boxed_str())
}

/// Help colours: section headings in blue, flags in cyan.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Blue.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(AnsiColor::Blue.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::BrightBlack.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
		.valid(AnsiColor::Green.on_default())
		.invalid(AnsiColor::Yellow.on_default())
}
