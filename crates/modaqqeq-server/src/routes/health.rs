// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use modaqqeq_common_i18n::parity_report;

use crate::api::AppState;

/// Component and overall health states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
	Healthy,
	Degraded,
	Unhealthy,
}

/// Health of a single component.
#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
	pub status: HealthStatus,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub detail: Option<String>,
}

impl ComponentHealth {
	fn healthy() -> Self {
		Self {
			status: HealthStatus::Healthy,
			detail: None,
		}
	}

	fn degraded(detail: impl Into<String>) -> Self {
		Self {
			status: HealthStatus::Degraded,
			detail: Some(detail.into()),
		}
	}
}

/// Per-component health breakdown.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthComponents {
	pub catalogs: ComponentHealth,
	pub web_dir: ComponentHealth,
}

/// Health endpoint response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
	pub status: HealthStatus,
	pub timestamp: String,
	pub duration_ms: u64,
	pub version: &'static str,
	pub components: HealthComponents,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "System is healthy or degraded", body = HealthResponse),
        (status = 503, description = "System is unhealthy", body = HealthResponse)
    ),
    tag = "health"
)]
/// GET /health - component health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	use tokio::time::Instant;

	let overall_start = Instant::now();

	let catalogs = check_catalogs();
	let web_dir = check_web_dir(&state.web_dir);

	let status = aggregate_status(&[&catalogs, &web_dir]);
	let duration_ms = overall_start.elapsed().as_millis() as u64;

	let response = HealthResponse {
		status,
		timestamp: chrono::Utc::now().to_rfc3339(),
		duration_ms,
		version: env!("CARGO_PKG_VERSION"),
		components: HealthComponents { catalogs, web_dir },
	};

	let http_status = match status {
		HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
		HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
	};

	(http_status, Json(response))
}

/// Catalog parity: divergent tables degrade the system but never fail it,
/// since lookups fall back to the key.
fn check_catalogs() -> ComponentHealth {
	let report = parity_report();
	if report.is_complete() {
		ComponentHealth::healthy()
	} else {
		ComponentHealth::degraded(format!(
			"{} translation keys missing",
			report.missing.len()
		))
	}
}

fn check_web_dir(web_dir: &str) -> ComponentHealth {
	if std::path::Path::new(web_dir).is_dir() {
		ComponentHealth::healthy()
	} else {
		ComponentHealth::degraded(format!("web dir {web_dir} missing, static pages unavailable"))
	}
}

fn aggregate_status(components: &[&ComponentHealth]) -> HealthStatus {
	components
		.iter()
		.map(|c| c.status)
		.max()
		.unwrap_or(HealthStatus::Healthy)
}
