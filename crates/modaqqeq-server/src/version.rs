// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Version information for the `version` subcommand.

/// Human-readable version and build line.
pub fn format_version_info() -> String {
	format!(
		"{} {} ({} {})",
		env!("CARGO_PKG_NAME"),
		env!("CARGO_PKG_VERSION"),
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_version_line_contains_package() {
		let line = format_version_info();
		assert!(line.starts_with("modaqqeq-server "));
		assert!(line.contains(env!("CARGO_PKG_VERSION")));
	}
}
