//! Commands handled by `hydectl` itself rather than a script.

use std::process::Command;

use anyhow::{Context, Result, bail};

/// Ask the HyDE shell to reload its configuration.
pub(crate) fn reload() -> Result<()> {
	println!("Reloading HyDE configuration...");
	let output = Command::new("hyde-shell")
		.arg("reload")
		.output()
		.context("failed to run `hyde-shell reload`")?;
	if !output.status.success() {
		bail!(
			"`hyde-shell reload` exited with {}: {}",
			output.status,
			String::from_utf8_lossy(&output.stderr).trim()
		);
	}
	println!("Command output: {}", String::from_utf8_lossy(&output.stdout));
	println!("Configuration reloaded successfully.");
	Ok(())
}

pub(crate) fn version_line() -> String {
	format!("hydectl {}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn version_line_names_the_binary() {
		let line = version_line();
		assert!(line.starts_with("hydectl "));
		assert!(line.ends_with(env!("CARGO_PKG_VERSION")));
	}
}
