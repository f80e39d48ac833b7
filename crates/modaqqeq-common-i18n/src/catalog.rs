// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Static translation catalogs and lookup.
//!
//! Both catalogs are compiled into the crate as typed key/value tables
//! and indexed once on first use. Lookups never fail: a key absent from
//! the active catalog resolves to the key itself, so untranslated text is
//! visible in the UI instead of breaking the render.

mod ar;
mod en;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::locale::Locale;

static EN_MAP: Lazy<HashMap<&'static str, &'static str>> =
	Lazy::new(|| en::MESSAGES.iter().copied().collect());

static AR_MAP: Lazy<HashMap<&'static str, &'static str>> =
	Lazy::new(|| ar::MESSAGES.iter().copied().collect());

fn table(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
	match locale {
		Locale::Ar => &AR_MAP,
		Locale::En => &EN_MAP,
	}
}

/// Look up the translation for `key` in `locale`.
///
/// Missing keys resolve to the key itself, verbatim — never an error,
/// never an empty string.
///
/// # Example
///
/// ```
/// use modaqqeq_common_i18n::{t, Locale};
///
/// assert_eq!(t(Locale::En, "nav.home"), "Home");
/// assert_eq!(t(Locale::En, "no.such.key"), "no.such.key");
/// ```
pub fn t(locale: Locale, key: &str) -> String {
	match table(locale).get(key) {
		Some(value) => (*value).to_string(),
		None => key.to_string(),
	}
}

/// Look up a translation and substitute `{name}` placeholders.
///
/// # Example
///
/// ```
/// use modaqqeq_common_i18n::{t_fmt, Locale};
///
/// // Unknown keys still fall back to the key, placeholders applied.
/// let s = t_fmt(Locale::En, "greeting {name}", &[("name", "Nora")]);
/// assert_eq!(s, "greeting Nora");
/// ```
pub fn t_fmt(locale: Locale, key: &str, vars: &[(&str, &str)]) -> String {
	let mut value = t(locale, key);
	for (name, replacement) in vars {
		value = value.replace(&format!("{{{name}}}"), replacement);
	}
	value
}

/// Iterate a locale's complete key/value table.
pub fn entries(locale: Locale) -> impl Iterator<Item = (&'static str, &'static str)> {
	table(locale).iter().map(|(k, v)| (*k, *v))
}

/// Number of keys in a locale's catalog.
pub fn key_count(locale: Locale) -> usize {
	table(locale).len()
}

/// A key present in one catalog but absent from the other.
#[derive(Debug, Clone, Serialize)]
pub struct MissingKey {
	/// The locale whose catalog lacks the key.
	pub locale: &'static str,
	pub key: &'static str,
}

/// Result of comparing the two catalogs for key parity.
#[derive(Debug, Clone, Serialize)]
pub struct ParityReport {
	pub missing: Vec<MissingKey>,
}

impl ParityReport {
	/// True when every key exists in both catalogs.
	pub fn is_complete(&self) -> bool {
		self.missing.is_empty()
	}
}

static PARITY: Lazy<ParityReport> = Lazy::new(|| {
	let mut missing = Vec::new();

	for key in EN_MAP.keys().copied() {
		if !AR_MAP.contains_key(key) {
			missing.push(MissingKey {
				locale: Locale::Ar.as_str(),
				key,
			});
		}
	}
	for key in AR_MAP.keys().copied() {
		if !EN_MAP.contains_key(key) {
			missing.push(MissingKey {
				locale: Locale::En.as_str(),
				key,
			});
		}
	}

	missing.sort_by(|a, b| (a.locale, a.key).cmp(&(b.locale, b.key)));
	for entry in &missing {
		// Data-completeness bug, not a runtime error: lookups on these
		// keys fall back to the key itself.
		tracing::warn!(
			locale = entry.locale,
			key = entry.key,
			"translation key missing from catalog"
		);
	}

	ParityReport { missing }
});

/// Compare the catalogs for key parity.
///
/// Computed once on first call; each missing key is also logged at warn
/// level at that point.
pub fn parity_report() -> &'static ParityReport {
	&PARITY
}
