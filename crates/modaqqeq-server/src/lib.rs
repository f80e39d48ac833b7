// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Modaqqeq case-intake server.
//!
//! This crate provides the HTTP server behind the bilingual fraud
//! reporting front-end: locale preference and catalog endpoints, the
//! mocked analysis endpoint, the demo authentication gate, and static
//! page hosting.

pub mod api;
pub mod api_docs;
pub mod auth_middleware;
pub mod cookies;
pub mod error;
pub mod i18n;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use api_docs::ApiDoc;
pub use error::{ErrorResponse, ServerError};
pub use modaqqeq_server_config::ServerConfig;
