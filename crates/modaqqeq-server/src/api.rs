// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP API routes and application state.

use std::sync::Arc;

use axum::{
	http::{header, HeaderName, HeaderValue},
	middleware,
	routing::{get, post},
	Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;

use modaqqeq_common_i18n::{resolve_locale, LocaleContext};
use modaqqeq_server_config::{AnalysisConfig, AuthConfig, ServerConfig};

use crate::{api_docs, auth_middleware, routes};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
	pub auth: Arc<AuthConfig>,
	pub analysis: Arc<AnalysisConfig>,
	/// Server-wide default locale code, used when a request carries no
	/// stored preference.
	pub default_locale: String,
	/// Process-wide active locale; one writer (the locale endpoint), many
	/// readers.
	pub locale_context: LocaleContext,
	pub web_dir: String,
}

/// Creates the application state from resolved configuration.
pub fn create_app_state(config: &ServerConfig) -> AppState {
	// The shared context starts on the configured default, which itself
	// falls back to Arabic when the configured code is unsupported.
	let initial = resolve_locale(None, &config.logging.default_locale);

	AppState {
		auth: Arc::new(config.auth.clone()),
		analysis: Arc::new(config.analysis.clone()),
		default_locale: config.logging.default_locale.clone(),
		locale_context: LocaleContext::new(initial),
		web_dir: config.paths.web_dir.clone(),
	}
}

/// Creates the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
	let web_dir = state.web_dir.clone();
	let serve_pages = ServeDir::new(&web_dir)
		.not_found_service(ServeFile::new(format!("{web_dir}/index.html")));

	Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/api/openapi.json", get(api_docs::openapi_json))
		.route("/api/analyze", post(routes::analyze::analyze_case))
		.route(
			"/api/locale",
			get(routes::locale::current_locale).put(routes::locale::switch_locale),
		)
		.route("/api/i18n/{locale}", get(routes::locale::catalog))
		.route("/api/auth/login", post(routes::auth::login))
		.route("/api/auth/logout", post(routes::auth::logout))
		.fallback_service(serve_pages)
		.layer(middleware::from_fn(auth_middleware::require_auth_cookie))
		.layer(SetResponseHeaderLayer::overriding(
			header::X_FRAME_OPTIONS,
			HeaderValue::from_static("DENY"),
		))
		.layer(SetResponseHeaderLayer::overriding(
			header::X_CONTENT_TYPE_OPTIONS,
			HeaderValue::from_static("nosniff"),
		))
		.layer(SetResponseHeaderLayer::overriding(
			header::REFERRER_POLICY,
			HeaderValue::from_static("strict-origin-when-cross-origin"),
		))
		.layer(SetResponseHeaderLayer::overriding(
			HeaderName::from_static("permissions-policy"),
			HeaderValue::from_static("camera=(), microphone=(), geolocation=()"),
		))
		.with_state(state)
}
