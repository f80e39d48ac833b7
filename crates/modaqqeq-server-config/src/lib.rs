// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the Modaqqeq server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`MODAQQEQ_SERVER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use modaqqeq_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}:{}", config.http.host, config.http.port);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub auth: AuthConfig,
	pub analysis: AnalysisConfig,
	pub logging: LoggingConfig,
	pub paths: PathsConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`MODAQQEQ_SERVER_*`)
/// 2. Config file (`/etc/modaqqeq/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	let mut merged = ServerConfigLayer::default();
	merged.merge(EnvSource.load()?);
	finalize(merged)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let auth = layer.auth.unwrap_or_default().finalize();
	let analysis = layer.analysis.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();
	let paths = layer.paths.unwrap_or_default().finalize();

	validate_config(&auth)?;

	info!(
		host = %http.host,
		port = http.port,
		default_locale = %logging.default_locale,
		demo_mode = auth.demo_mode,
		analysis_delay_ms = analysis.delay_ms,
		web_dir = %paths.web_dir,
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		auth,
		analysis,
		logging,
		paths,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(auth: &AuthConfig) -> Result<(), ConfigError> {
	if auth.demo_mode && auth.environment == "production" {
		return Err(ConfigError::Validation(
			"MODAQQEQ_SERVER_AUTH_DEMO_MODE=1 is set while MODAQQEQ_SERVER_ENV=production. \
			 This is a security risk. Remove MODAQQEQ_SERVER_AUTH_DEMO_MODE or set \
			 MODAQQEQ_SERVER_ENV to a non-production value."
				.to_string(),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_demo_mode_production_validation() {
		let auth = AuthConfig {
			demo_mode: true,
			environment: "production".to_string(),
			..Default::default()
		};
		let result = validate_config(&auth);
		assert!(result.is_err());
		assert!(result.unwrap_err().to_string().contains("security risk"));
	}

	#[test]
	fn test_demo_mode_development_ok() {
		let auth = AuthConfig {
			demo_mode: true,
			environment: "development".to_string(),
			..Default::default()
		};
		assert!(validate_config(&auth).is_ok());
	}

	#[test]
	fn test_socket_addr() {
		let config = ServerConfig {
			http: HttpConfig {
				host: "127.0.0.1".to_string(),
				port: 9000,
				base_url: "http://localhost:9000".to_string(),
			},
			..Default::default()
		};
		assert_eq!(config.socket_addr(), "127.0.0.1:9000");
	}

	#[test]
	fn test_finalize_applies_defaults() {
		let config = finalize(ServerConfigLayer::default()).unwrap();
		assert_eq!(config.logging.default_locale, "ar");
		assert_eq!(config.analysis.delay_ms, 2000);
		assert_eq!(config.paths.web_dir, "./web");
	}
}
