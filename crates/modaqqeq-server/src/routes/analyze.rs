// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Mocked AI analysis HTTP handler.
//!
//! There is no detection engine behind this endpoint: it drains the
//! submission, waits the configured artificial delay, and returns
//! randomly generated scores with fixed localized findings. Concurrent
//! submissions are not coordinated, matching the product behavior.

use std::time::Duration;

use axum::{
	extract::{Multipart, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use modaqqeq_common_i18n::{t, Locale};

use crate::{api::AppState, error::ServerError, i18n::RequestLocale};

const FINDING_KEYS: [&str; 4] = [
	"analysis.finding.1",
	"analysis.finding.2",
	"analysis.finding.3",
	"analysis.finding.4",
];

const RECOMMENDATION_KEYS: [&str; 4] = [
	"analysis.recommendation.1",
	"analysis.recommendation.2",
	"analysis.recommendation.3",
	"analysis.recommendation.4",
];

/// Mocked analysis result.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
	pub case_id: String,
	/// Integer risk score in [60, 100].
	pub risk_score: u32,
	pub risk_level: String,
	/// Fraud probability in [0.7, 1.0].
	pub fraud_probability: f64,
	pub key_findings: Vec<String>,
	pub recommendations: Vec<String>,
	/// Confidence in [0.8, 1.0].
	pub confidence: f64,
	pub processed_at: String,
	pub metadata: CaseMetadata,
}

/// Echo of the submitted case metadata.
#[derive(Debug, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseMetadata {
	pub title: String,
	pub description: String,
	pub category: String,
	pub files_processed: usize,
}

/// Success envelope for the analysis endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalysisResponse {
	pub success: bool,
	pub data: AnalysisResult,
}

#[utoipa::path(
    post,
    path = "/api/analyze",
    responses(
        (status = 200, description = "Mocked analysis result", body = AnalysisResponse),
        (status = 500, description = "Processing failure, generic envelope")
    ),
    tag = "analysis"
)]
/// POST /api/analyze - mocked case analysis.
pub async fn analyze_case(
	State(state): State<AppState>,
	RequestLocale(locale): RequestLocale,
	multipart: Multipart,
) -> Response {
	match process_submission(&state, locale, multipart).await {
		Ok(result) => {
			tracing::info!(
				case_id = %result.case_id,
				risk_score = result.risk_score,
				files = result.metadata.files_processed,
				"case analyzed"
			);
			Json(AnalysisResponse {
				success: true,
				data: result,
			})
			.into_response()
		}
		Err(e) => {
			// Any processing failure collapses to the generic envelope.
			tracing::error!(error = %e, "analysis failed");
			(
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(serde_json::json!({
					"success": false,
					"error": t(locale, "error.analysis"),
				})),
			)
				.into_response()
		}
	}
}

async fn process_submission(
	state: &AppState,
	locale: Locale,
	mut multipart: Multipart,
) -> Result<AnalysisResult, ServerError> {
	let mut metadata = CaseMetadata::default();

	while let Some(field) = multipart
		.next_field()
		.await
		.map_err(|e| ServerError::Multipart(e.to_string()))?
	{
		let name = field.name().map(ToString::to_string);
		match name.as_deref() {
			Some("title") => {
				metadata.title = field
					.text()
					.await
					.map_err(|e| ServerError::Multipart(e.to_string()))?;
			}
			Some("description") => {
				metadata.description = field
					.text()
					.await
					.map_err(|e| ServerError::Multipart(e.to_string()))?;
			}
			Some("category") => {
				metadata.category = field
					.text()
					.await
					.map_err(|e| ServerError::Multipart(e.to_string()))?;
			}
			Some("files") => {
				// Attachments are drained and counted, never stored.
				let bytes = field
					.bytes()
					.await
					.map_err(|e| ServerError::Multipart(e.to_string()))?;
				tracing::debug!(len = bytes.len(), "received case attachment");
				metadata.files_processed += 1;
			}
			_ => {}
		}
	}

	// Simulated engine latency.
	tokio::time::sleep(Duration::from_millis(state.analysis.delay_ms)).await;

	Ok(AnalysisResult {
		case_id: format!("CASE-{}", chrono::Utc::now().timestamp_millis()),
		risk_score: fastrand::u32(60..=100),
		risk_level: t(locale, "cases.high"),
		fraud_probability: 0.7 + fastrand::f64() * 0.3,
		key_findings: FINDING_KEYS.iter().map(|key| t(locale, key)).collect(),
		recommendations: RECOMMENDATION_KEYS
			.iter()
			.map(|key| t(locale, key))
			.collect(),
		confidence: 0.8 + fastrand::f64() * 0.2,
		processed_at: chrono::Utc::now().to_rfc3339(),
		metadata,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_finding_keys_are_translated_in_both_locales() {
		for key in FINDING_KEYS.iter().chain(RECOMMENDATION_KEYS.iter()) {
			assert_ne!(t(Locale::Ar, key), *key, "untranslated: {key}");
			assert_ne!(t(Locale::En, key), *key, "untranslated: {key}");
		}
	}
}
