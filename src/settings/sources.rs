use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};

use crate::app_dirs;
use crate::cli::CliArgs;

const ENV_PREFIX: &str = "hydectl";

/// Build a [`Config`] from the default file, extra `--config` files and the
/// environment.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			tracing::debug!(path = %path.display(), "consulting config file");
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("scripts.paths"),
	);

	builder.build().context("failed to load configuration")
}

/// Default configuration file locations, in the order they are merged.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	app_dirs::AppDir::Config.path()
		.map(|dir| vec![dir.join("config.toml")])
		.unwrap_or_default()
}
