// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Integration tests for the mocked analysis endpoint.
//!
//! This test suite covers:
//! - The response envelope shape and value ranges
//! - Locale-driven localization of the fixed findings
//! - Metadata echo and attachment counting

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use modaqqeq_server::{create_app_state, create_router};
use modaqqeq_server_config::ServerConfig;

const BOUNDARY: &str = "modaqqeq-test-boundary";

fn test_app() -> axum::Router {
	let mut config = ServerConfig::default();
	config.analysis.delay_ms = 0;
	config.auth.login_delay_ms = 0;
	create_router(create_app_state(&config))
}

fn multipart_body() -> String {
	format!(
		"--{BOUNDARY}\r\n\
		 Content-Disposition: form-data; name=\"title\"\r\n\r\n\
		 Suspicious payroll\r\n\
		 --{BOUNDARY}\r\n\
		 Content-Disposition: form-data; name=\"description\"\r\n\r\n\
		 Duplicate salary payments across two contracts\r\n\
		 --{BOUNDARY}\r\n\
		 Content-Disposition: form-data; name=\"category\"\r\n\r\n\
		 financial\r\n\
		 --{BOUNDARY}\r\n\
		 Content-Disposition: form-data; name=\"files\"; filename=\"evidence.txt\"\r\n\
		 Content-Type: text/plain\r\n\r\n\
		 ledger extract\r\n\
		 --{BOUNDARY}--\r\n"
	)
}

fn analyze_request(locale_cookie: Option<&str>) -> Request<Body> {
	let mut builder = Request::builder()
		.method("POST")
		.uri("/api/analyze")
		.header(
			header::CONTENT_TYPE,
			format!("multipart/form-data; boundary={BOUNDARY}"),
		);
	if let Some(cookie) = locale_cookie {
		builder = builder.header(header::COOKIE, cookie);
	}
	builder.body(Body::from(multipart_body())).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
	let bytes = response.into_body().collect().await.unwrap().to_bytes();
	serde_json::from_slice(&bytes).unwrap()
}

/// Tests the mocked envelope.
///
/// Purpose: Verify the response carries a generated case id, scores in
/// the documented ranges, four findings and four recommendations, and an
/// echo of the submitted metadata.
#[tokio::test]
async fn test_analyze_returns_mocked_envelope() {
	let response = test_app()
		.oneshot(analyze_request(Some("language=en")))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let json = body_json(response).await;

	assert_eq!(json["success"], true);
	let data = &json["data"];

	assert!(data["caseId"].as_str().unwrap().starts_with("CASE-"));

	let risk_score = data["riskScore"].as_u64().unwrap();
	assert!((60..=100).contains(&risk_score), "risk_score={risk_score}");

	let probability = data["fraudProbability"].as_f64().unwrap();
	assert!((0.7..=1.0).contains(&probability), "probability={probability}");

	let confidence = data["confidence"].as_f64().unwrap();
	assert!((0.8..=1.0).contains(&confidence), "confidence={confidence}");

	assert_eq!(data["riskLevel"], "High Risk");
	assert_eq!(data["keyFindings"].as_array().unwrap().len(), 4);
	assert_eq!(data["recommendations"].as_array().unwrap().len(), 4);
	assert_eq!(
		data["keyFindings"][0],
		"Suspicious transaction patterns detected in financial records"
	);

	assert_eq!(data["metadata"]["title"], "Suspicious payroll");
	assert_eq!(data["metadata"]["category"], "financial");
	assert_eq!(data["metadata"]["filesProcessed"], 1);
	assert!(data["processedAt"].as_str().is_some());
}

/// Tests default-locale localization.
///
/// Purpose: Verify that without a stored preference the fixed strings
/// come back in Arabic.
#[tokio::test]
async fn test_analyze_localizes_to_arabic_by_default() {
	let response = test_app().oneshot(analyze_request(None)).await.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let json = body_json(response).await;
	let data = &json["data"];

	assert_eq!(data["riskLevel"], "مخاطر عالية");
	assert_eq!(
		data["keyFindings"][0],
		"تم اكتشاف أنماط معاملات مشبوهة في السجلات المالية"
	);
}

/// Tests repeated submissions.
///
/// Purpose: Verify that concurrent-style repeated submissions each get
/// their own envelope (no de-duplication is performed).
#[tokio::test]
async fn test_repeated_submissions_are_independent() {
	let app = test_app();

	let first = body_json(
		app.clone()
			.oneshot(analyze_request(Some("language=en")))
			.await
			.unwrap(),
	)
	.await;
	let second = body_json(
		app.oneshot(analyze_request(Some("language=en")))
			.await
			.unwrap(),
	)
	.await;

	assert_eq!(first["success"], true);
	assert_eq!(second["success"], true);
	// Scores are random and ids timestamped; both must stand alone.
	assert!(first["data"]["caseId"].as_str().unwrap().starts_with("CASE-"));
	assert!(second["data"]["caseId"].as_str().unwrap().starts_with("CASE-"));
}
