// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! OpenAPI documentation.

use axum::Json;
use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::routes;

/// OpenAPI document for the Modaqqeq HTTP API.
#[derive(OpenApi)]
#[openapi(
	paths(
		routes::analyze::analyze_case,
		routes::auth::login,
		routes::auth::logout,
		routes::health::health_check,
		routes::locale::current_locale,
		routes::locale::switch_locale,
		routes::locale::catalog,
	),
	components(schemas(
		ErrorResponse,
		routes::analyze::AnalysisResponse,
		routes::auth::LoginRequest,
		routes::auth::AuthResponse,
		routes::health::HealthResponse,
		routes::locale::LocaleResponse,
		routes::locale::SwitchLocaleRequest,
		routes::locale::CatalogResponse,
	)),
	tags(
		(name = "analysis", description = "Mocked case analysis"),
		(name = "auth", description = "Demo authentication gate"),
		(name = "locale", description = "Locale preference and catalogs"),
		(name = "health", description = "Health checks")
	)
)]
pub struct ApiDoc;

/// GET /api/openapi.json - the OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
	Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_openapi_document_builds() {
		let doc = ApiDoc::openapi();
		assert!(doc.paths.paths.contains_key("/api/analyze"));
		assert!(doc.paths.paths.contains_key("/api/locale"));
		assert!(doc.paths.paths.contains_key("/health"));
	}
}
