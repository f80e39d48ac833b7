// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Filesystem paths.

use serde::Deserialize;

/// Paths configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct PathsConfig {
	/// Directory holding the built web pages served as static assets.
	pub web_dir: String,
}

impl Default for PathsConfig {
	fn default() -> Self {
		Self {
			web_dir: "./web".to_string(),
		}
	}
}

/// Paths configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfigLayer {
	#[serde(default)]
	pub web_dir: Option<String>,
}

impl PathsConfigLayer {
	pub fn merge(&mut self, other: PathsConfigLayer) {
		if other.web_dir.is_some() {
			self.web_dir = other.web_dir;
		}
	}

	pub fn finalize(self) -> PathsConfig {
		PathsConfig {
			web_dir: self.web_dir.unwrap_or_else(|| "./web".to_string()),
		}
	}
}
