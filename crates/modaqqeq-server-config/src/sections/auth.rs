// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authentication gate configuration.
//!
//! The gate is a demo flag-cookie check, not real authentication: exactly
//! one credential pair is accepted and the cookie carries no session
//! state. `demo_mode` must never be enabled in production.

use serde::Deserialize;

/// Auth configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct AuthConfig {
	pub demo_mode: bool,
	pub environment: String,
	pub demo_email: String,
	pub demo_password: String,
	pub login_delay_ms: u64,
}

impl Default for AuthConfig {
	fn default() -> Self {
		Self {
			demo_mode: true,
			environment: "development".to_string(),
			demo_email: "admin@mhrsd.gov.sa".to_string(),
			demo_password: "admin123".to_string(),
			login_delay_ms: 1500,
		}
	}
}

/// Auth configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfigLayer {
	#[serde(default)]
	pub demo_mode: Option<bool>,
	#[serde(default)]
	pub environment: Option<String>,
	#[serde(default)]
	pub demo_email: Option<String>,
	#[serde(default)]
	pub demo_password: Option<String>,
	#[serde(default)]
	pub login_delay_ms: Option<u64>,
}

impl AuthConfigLayer {
	pub fn merge(&mut self, other: AuthConfigLayer) {
		if other.demo_mode.is_some() {
			self.demo_mode = other.demo_mode;
		}
		if other.environment.is_some() {
			self.environment = other.environment;
		}
		if other.demo_email.is_some() {
			self.demo_email = other.demo_email;
		}
		if other.demo_password.is_some() {
			self.demo_password = other.demo_password;
		}
		if other.login_delay_ms.is_some() {
			self.login_delay_ms = other.login_delay_ms;
		}
	}

	pub fn finalize(self) -> AuthConfig {
		let defaults = AuthConfig::default();
		AuthConfig {
			demo_mode: self.demo_mode.unwrap_or(defaults.demo_mode),
			environment: self.environment.unwrap_or(defaults.environment),
			demo_email: self.demo_email.unwrap_or(defaults.demo_email),
			demo_password: self.demo_password.unwrap_or(defaults.demo_password),
			login_delay_ms: self.login_delay_ms.unwrap_or(defaults.login_delay_ms),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = AuthConfigLayer::default().finalize();
		assert!(config.demo_mode);
		assert_eq!(config.environment, "development");
		assert_eq!(config.demo_email, "admin@mhrsd.gov.sa");
		assert_eq!(config.login_delay_ms, 1500);
	}

	#[test]
	fn test_override_credentials() {
		let layer = AuthConfigLayer {
			demo_email: Some("auditor@mhrsd.gov.sa".to_string()),
			..Default::default()
		};
		let config = layer.finalize();
		assert_eq!(config.demo_email, "auditor@mhrsd.gov.sa");
		assert_eq!(config.demo_password, "admin123");
	}
}
