// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Locale preference and catalog HTTP handlers.

use std::collections::BTreeMap;
use std::str::FromStr;

use axum::{
	extract::{Path, State},
	http::{header, StatusCode},
	response::{AppendHeaders, IntoResponse, Response},
	Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use modaqqeq_common_i18n::{entries, locale_info, t, DocumentAttrs, Locale};

use crate::{
	api::AppState,
	cookies,
	error::ErrorResponse,
	i18n::{RequestLocale, LANGUAGE_COOKIE_NAME},
};

/// Lifetime of the stored locale preference: one year.
const LOCALE_COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 365;

/// A locale plus everything the page shell must apply for it.
#[derive(Debug, Serialize, ToSchema)]
pub struct LocaleResponse {
	pub locale: String,
	pub native_name: String,
	#[schema(value_type = Object)]
	pub document: DocumentAttrs,
}

impl LocaleResponse {
	fn for_locale(locale: Locale) -> Self {
		Self {
			locale: locale.as_str().to_string(),
			native_name: locale_info(locale).native_name.to_string(),
			document: DocumentAttrs::for_locale(locale),
		}
	}
}

#[utoipa::path(
    get,
    path = "/api/locale",
    responses(
        (status = 200, description = "Effective locale for this session", body = LocaleResponse)
    ),
    tag = "locale"
)]
/// GET /api/locale - effective locale and document attributes.
///
/// Pure read: resolves the stored preference (or the default for a fresh
/// session) without touching any state.
pub async fn current_locale(RequestLocale(locale): RequestLocale) -> Json<LocaleResponse> {
	Json(LocaleResponse::for_locale(locale))
}

/// Body of the locale switch request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SwitchLocaleRequest {
	pub locale: String,
}

#[utoipa::path(
    put,
    path = "/api/locale",
    request_body = SwitchLocaleRequest,
    responses(
        (status = 200, description = "Locale switched", body = LocaleResponse),
        (status = 400, description = "Unsupported locale code", body = ErrorResponse)
    ),
    tag = "locale"
)]
/// PUT /api/locale - switch the active locale.
///
/// Unsupported codes are rejected with 400; the typed setter never sees
/// them. The preference cookie is written before the document attributes
/// are derived, so a reloading client always reads the locale it is about
/// to render.
pub async fn switch_locale(
	State(state): State<AppState>,
	RequestLocale(current): RequestLocale,
	Json(payload): Json<SwitchLocaleRequest>,
) -> Response {
	let Ok(locale) = Locale::from_str(&payload.locale) else {
		tracing::warn!(code = %payload.locale, "rejected unsupported locale code");
		return (
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse::new(
				"invalid_locale",
				t(current, "error.invalidLocale"),
			)),
		)
			.into_response();
	};

	// Persist first: storage must be written before the direction/lang
	// payload the client will apply.
	let cookie = cookies::persistent_cookie(
		LANGUAGE_COOKIE_NAME,
		locale.as_str(),
		LOCALE_COOKIE_MAX_AGE_SECS,
	);

	// Idempotent: re-setting the active locale is a no-op for readers.
	state.locale_context.set(locale);

	(
		AppendHeaders([(header::SET_COOKIE, cookie)]),
		Json(LocaleResponse::for_locale(locale)),
	)
		.into_response()
}

/// A locale's complete catalog.
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
	pub locale: String,
	#[schema(value_type = Object)]
	pub document: DocumentAttrs,
	/// Full key/value table for the locale.
	#[schema(value_type = Object)]
	pub messages: BTreeMap<&'static str, &'static str>,
}

#[utoipa::path(
    get,
    path = "/api/i18n/{locale}",
    params(("locale" = String, Path, description = "Locale code (ar or en)")),
    responses(
        (status = 200, description = "Complete catalog for the locale", body = CatalogResponse),
        (status = 404, description = "Unknown locale", body = ErrorResponse)
    ),
    tag = "locale"
)]
/// GET /api/i18n/{locale} - complete catalog for a locale.
pub async fn catalog(
	Path(code): Path<String>,
	RequestLocale(current): RequestLocale,
) -> Response {
	match Locale::from_str(&code) {
		Ok(locale) => {
			let messages: BTreeMap<_, _> = entries(locale).collect();
			Json(CatalogResponse {
				locale: locale.as_str().to_string(),
				document: DocumentAttrs::for_locale(locale),
				messages,
			})
			.into_response()
		}
		Err(_) => (
			StatusCode::NOT_FOUND,
			Json(ErrorResponse::new(
				"unknown_locale",
				t(current, "error.invalidLocale"),
			)),
		)
			.into_response(),
	}
}
