// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Minimal cookie header helpers.
//!
//! The two cookies this server deals in (`language`, `isAuthenticated`)
//! are plain flags with no signing or encoding, so header-level parsing
//! is all that is needed.

use axum::http::{header, HeaderMap};

/// Read a cookie value from the request headers.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
	let raw = headers.get(header::COOKIE)?.to_str().ok()?;
	for pair in raw.split(';') {
		let mut parts = pair.trim().splitn(2, '=');
		if parts.next() == Some(name) {
			return parts.next().map(|v| v.to_string());
		}
	}
	None
}

/// Build a persistent `Set-Cookie` header value.
pub fn persistent_cookie(name: &str, value: &str, max_age_secs: i64) -> String {
	format!("{name}={value}; Path=/; Max-Age={max_age_secs}; SameSite=Lax")
}

/// Build a `Set-Cookie` header value that clears a cookie.
pub fn removal_cookie(name: &str) -> String {
	format!("{name}=; Path=/; Max-Age=0; SameSite=Lax")
}
