// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Logging and localization defaults.

use serde::Deserialize;

/// Logging configuration (runtime, fully resolved).
///
/// `default_locale` is the server-wide locale used when a request carries
/// no stored preference. It is a locale *code*; an unsupported value here
/// falls back to Arabic at resolution time rather than failing startup.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
	pub level: String,
	pub default_locale: String,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			default_locale: "ar".to_string(),
		}
	}
}

/// Logging configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfigLayer {
	#[serde(default)]
	pub level: Option<String>,
	#[serde(default)]
	pub default_locale: Option<String>,
}

impl LoggingConfigLayer {
	pub fn merge(&mut self, other: LoggingConfigLayer) {
		if other.level.is_some() {
			self.level = other.level;
		}
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
	}

	pub fn finalize(self) -> LoggingConfig {
		let defaults = LoggingConfig::default();
		LoggingConfig {
			level: self.level.unwrap_or(defaults.level),
			default_locale: self.default_locale.unwrap_or(defaults.default_locale),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_locale_is_arabic() {
		let config = LoggingConfigLayer::default().finalize();
		assert_eq!(config.level, "info");
		assert_eq!(config.default_locale, "ar");
	}

	#[test]
	fn test_custom_locale() {
		let layer = LoggingConfigLayer {
			level: None,
			default_locale: Some("en".to_string()),
		};
		assert_eq!(layer.finalize().default_locale, "en");
	}
}
