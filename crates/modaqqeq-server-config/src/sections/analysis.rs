// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Mocked analysis endpoint configuration.

use serde::Deserialize;

/// Analysis configuration (runtime, fully resolved).
///
/// `delay_ms` is the artificial processing delay applied before the
/// mocked result is returned.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
	pub delay_ms: u64,
}

impl Default for AnalysisConfig {
	fn default() -> Self {
		Self { delay_ms: 2000 }
	}
}

/// Analysis configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisConfigLayer {
	#[serde(default)]
	pub delay_ms: Option<u64>,
}

impl AnalysisConfigLayer {
	pub fn merge(&mut self, other: AnalysisConfigLayer) {
		if other.delay_ms.is_some() {
			self.delay_ms = other.delay_ms;
		}
	}

	pub fn finalize(self) -> AnalysisConfig {
		AnalysisConfig {
			delay_ms: self.delay_ms.unwrap_or(2000),
		}
	}
}
