// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Cross-cutting integration tests for the Modaqqeq server.
//!
//! This test suite covers:
//! - Health endpoint aggregation
//! - Security headers on every response
//! - OpenAPI document delivery

use axum::body::Body;
use axum::http::{header, HeaderName, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use modaqqeq_server::{create_app_state, create_router};
use modaqqeq_server_config::ServerConfig;

fn test_app() -> axum::Router {
	let mut config = ServerConfig::default();
	config.analysis.delay_ms = 0;
	config.auth.login_delay_ms = 0;
	create_router(create_app_state(&config))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
	let bytes = response.into_body().collect().await.unwrap().to_bytes();
	serde_json::from_slice(&bytes).unwrap()
}

/// Tests the health endpoint.
///
/// Purpose: Verify that health aggregates component checks and that the
/// shipped catalogs report healthy parity.
#[tokio::test]
async fn test_health_reports_catalog_parity() {
	let response = test_app()
		.oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let json = body_json(response).await;

	assert_eq!(json["components"]["catalogs"]["status"], "healthy");
	assert!(json["duration_ms"].as_u64().is_some());
	assert!(json["timestamp"].as_str().is_some());
}

/// Tests the security header layer.
///
/// Purpose: Verify that every response carries the standard header set,
/// API and page routes alike.
#[tokio::test]
async fn test_security_headers_on_every_response() {
	for uri in ["/api/locale", "/health", "/about"] {
		let response = test_app()
			.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
			.await
			.unwrap();

		let headers = response.headers();
		assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
		assert_eq!(
			headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
			"nosniff"
		);
		assert_eq!(
			headers.get(header::REFERRER_POLICY).unwrap(),
			"strict-origin-when-cross-origin"
		);
		assert_eq!(
			headers
				.get(HeaderName::from_static("permissions-policy"))
				.unwrap(),
			"camera=(), microphone=(), geolocation=()"
		);
	}
}

/// Tests OpenAPI document delivery.
///
/// Purpose: Verify that the document is served and lists the API routes.
#[tokio::test]
async fn test_openapi_document_served() {
	let response = test_app()
		.oneshot(
			Request::builder()
				.uri("/api/openapi.json")
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let json = body_json(response).await;
	assert!(json["paths"]["/api/analyze"].is_object());
	assert!(json["paths"]["/api/locale"].is_object());
}
