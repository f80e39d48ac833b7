// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Demo authentication HTTP handlers.
//!
//! Not real authentication: exactly one configured credential pair is
//! accepted and success is recorded as a flag cookie that the page gate
//! checks. No sessions, no expiry, no token validation.

use std::time::Duration;

use axum::{
	extract::State,
	http::{header, StatusCode},
	response::{AppendHeaders, IntoResponse, Response},
	Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use modaqqeq_common_i18n::t;

use crate::{
	api::AppState,
	auth_middleware::AUTH_COOKIE_NAME,
	cookies,
	error::ErrorResponse,
	i18n::RequestLocale,
};

/// Lifetime of the auth flag cookie: one day.
const AUTH_COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24;

/// Login request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
	pub email: String,
	pub password: String,
}

/// Outcome envelope for auth endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
	pub success: bool,
	pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Demo credentials accepted", body = AuthResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 401, description = "Credentials rejected", body = ErrorResponse)
    ),
    tag = "auth"
)]
/// POST /api/auth/login - demo credential check.
pub async fn login(
	State(state): State<AppState>,
	RequestLocale(locale): RequestLocale,
	Json(payload): Json<LoginRequest>,
) -> Response {
	if payload.email.is_empty() || payload.password.is_empty() {
		return (
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse::new(
				"validation",
				t(locale, "error.validation"),
			)),
		)
			.into_response();
	}

	// Mirror the artificial latency of a real credential check.
	tokio::time::sleep(Duration::from_millis(state.auth.login_delay_ms)).await;

	let accepted = state.auth.demo_mode
		&& payload.email == state.auth.demo_email
		&& payload.password == state.auth.demo_password;

	if !accepted {
		tracing::info!("rejected login attempt");
		return (
			StatusCode::UNAUTHORIZED,
			Json(ErrorResponse::new(
				"unauthorized",
				t(locale, "error.unauthorized"),
			)),
		)
			.into_response();
	}

	tracing::info!(email = %payload.email, "demo login accepted");
	let cookie = cookies::persistent_cookie(AUTH_COOKIE_NAME, "true", AUTH_COOKIE_MAX_AGE_SECS);

	(
		AppendHeaders([(header::SET_COOKIE, cookie)]),
		Json(AuthResponse {
			success: true,
			message: t(locale, "success.login"),
		}),
	)
		.into_response()
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Auth cookie cleared", body = AuthResponse)
    ),
    tag = "auth"
)]
/// POST /api/auth/logout - clear the auth flag cookie.
pub async fn logout(RequestLocale(locale): RequestLocale) -> impl IntoResponse {
	let cookie = cookies::removal_cookie(AUTH_COOKIE_NAME);

	(
		AppendHeaders([(header::SET_COOKIE, cookie)]),
		Json(AuthResponse {
			success: true,
			message: t(locale, "success.logout"),
		}),
	)
}
