// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Route gating for the authenticated page area.
//!
//! A single conditional, not a session protocol: requests under the
//! protected page prefixes pass only when the flag cookie is present and
//! `"true"`; everything else is public. API routes are exempt so the
//! page shell can always reach the locale and auth endpoints.

use axum::{
	extract::Request,
	middleware::Next,
	response::{IntoResponse, Redirect, Response},
};

use crate::cookies;

/// Cookie flag marking an authenticated browser session.
pub const AUTH_COOKIE_NAME: &str = "isAuthenticated";

/// Page prefixes that require the auth cookie.
pub const PROTECTED_PREFIXES: [&str; 2] = ["/dashboard", "/cases"];

/// Login page destination for rejected requests.
pub const LOGIN_PATH: &str = "/login";

/// Gate requests to the protected page prefixes.
pub async fn require_auth_cookie(request: Request, next: Next) -> Response {
	let path = request.uri().path();

	if !path.starts_with("/api") && is_protected(path) {
		let authenticated = cookies::cookie_value(request.headers(), AUTH_COOKIE_NAME)
			.is_some_and(|v| v == "true");

		if !authenticated {
			tracing::debug!(path, "unauthenticated request to protected path");
			return Redirect::temporary(LOGIN_PATH).into_response();
		}
	}

	next.run(request).await
}

fn is_protected(path: &str) -> bool {
	PROTECTED_PREFIXES
		.iter()
		.any(|prefix| path.starts_with(prefix))
}
