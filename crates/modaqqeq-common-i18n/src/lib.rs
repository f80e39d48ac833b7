// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for Modaqqeq.
//!
//! This crate provides the bilingual (Arabic/English) translation layer:
//! typed locales, static catalogs with fallback-to-key lookup, RTL-aware
//! document attributes, locale resolution, and the process-wide active
//! locale context. Arabic is the primary locale; it renders right-to-left
//! and is the default for fresh sessions.
//!
//! # String Naming Convention
//!
//! All translatable strings use a hierarchical dot-notation key format,
//! grouped by page or section:
//!
//! - `nav.` navigation labels
//! - `cases.` case-management strings
//! - `analysis.` mocked analysis findings and recommendations
//! - `error.` / `success.` operation outcome messages
//!
//! Example: `dashboard.detectionAccuracy`
//!
//! # Example
//!
//! ```
//! use modaqqeq_common_i18n::{is_rtl, resolve_locale, t, DocumentAttrs, Locale};
//!
//! // Simple translation
//! let title = t(Locale::Ar, "nav.home");
//! assert_eq!(title, "الرئيسية");
//!
//! // Missing keys fall back to the key itself
//! assert_eq!(t(Locale::En, "no.such.key"), "no.such.key");
//!
//! // Layout direction follows the locale
//! assert!(is_rtl(Locale::Ar));
//! assert_eq!(DocumentAttrs::for_locale(Locale::Ar).dir, "rtl");
//!
//! // Resolve a session's effective locale
//! let locale = resolve_locale(Some("en"), "ar");
//! assert_eq!(locale, Locale::En);
//! ```

mod catalog;
mod context;
mod locale;
mod resolve;

pub use catalog::{entries, key_count, parity_report, t, t_fmt, MissingKey, ParityReport};
pub use context::LocaleContext;
pub use locale::{
	available_locales, is_rtl, is_supported, locale_info, Direction, DocumentAttrs, Locale,
	LocaleInfo, UnsupportedLocaleError,
};
pub use resolve::resolve_locale;

pub use locale::{DEFAULT_LOCALE, LOCALES};
