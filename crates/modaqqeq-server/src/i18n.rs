// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Per-request locale resolution.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use modaqqeq_common_i18n::{resolve_locale, Locale};

use crate::{api::AppState, cookies};

/// Name of the cookie holding the stored locale preference.
pub const LANGUAGE_COOKIE_NAME: &str = "language";

/// Extractor yielding the request's effective locale.
///
/// Reads the `language` cookie once and resolves it against the
/// configured server default. A fresh session without the cookie lands on
/// Arabic. Resolution never fails; an invalid stored code simply falls
/// through to the default.
#[derive(Debug, Clone, Copy)]
pub struct RequestLocale(pub Locale);

impl FromRequestParts<AppState> for RequestLocale {
	type Rejection = Infallible;

	async fn from_request_parts(
		parts: &mut Parts,
		state: &AppState,
	) -> Result<Self, Self::Rejection> {
		let stored = cookies::cookie_value(&parts.headers, LANGUAGE_COOKIE_NAME);
		let locale = resolve_locale(stored.as_deref(), &state.default_locale);
		Ok(RequestLocale(locale))
	}
}
