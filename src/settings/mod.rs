//! Configuration loading and resolution.
//!
//! Settings are layered with the `config` crate: built-in defaults, the user's
//! `config.toml`, any `--config` files, `HYDECTL__*` environment variables and
//! finally command-line flags. [`load`] returns a [`ResolvedConfig`] ready for
//! the workflows.

mod raw;
mod resolved;
mod sources;

use anyhow::{Context, Result};

pub(crate) use resolved::ResolvedConfig;

use crate::cli::CliArgs;
use raw::RawConfig;
use sources::build_config;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let config = build_config(cli)?;
	let raw: RawConfig = config
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.resolve(cli)
}
