// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error types and the JSON error envelope.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Top-level error type for server operations.
#[derive(Debug, Error)]
pub enum ServerError {
	#[error("multipart error: {0}")]
	Multipart(String),

	#[error(transparent)]
	UnsupportedLocale(#[from] modaqqeq_common_i18n::UnsupportedLocaleError),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("internal error: {0}")]
	Internal(String),
}

impl ServerError {
	fn status_and_code(&self) -> (StatusCode, &'static str) {
		match self {
			ServerError::Multipart(_) => (StatusCode::BAD_REQUEST, "bad_request"),
			ServerError::UnsupportedLocale(_) => (StatusCode::BAD_REQUEST, "invalid_locale"),
			ServerError::Io(_) | ServerError::Internal(_) => {
				(StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
			}
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, error) = self.status_and_code();
		(status, Json(ErrorResponse::new(error, self.to_string()))).into_response()
	}
}

/// JSON error envelope with `error` (stable code) and `message` (display
/// text, localized where a request locale is known).
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl ErrorResponse {
	pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			error: error.into(),
			message: message.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_multipart_maps_to_bad_request() {
		let err = ServerError::Multipart("truncated field".to_string());
		assert_eq!(err.status_and_code().0, StatusCode::BAD_REQUEST);
	}

	#[test]
	fn test_internal_maps_to_500() {
		let err = ServerError::Internal("boom".to_string());
		assert_eq!(err.status_and_code().0, StatusCode::INTERNAL_SERVER_ERROR);
	}
}
