// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use std::str::FromStr;

use crate::locale::{Locale, DEFAULT_LOCALE};

/// Resolve the effective locale from a stored preference and the server
/// default.
///
/// Resolution order (highest to lowest priority):
/// 1. The stored preference, typically read from the `language` cookie
///    (may be absent or invalid)
/// 2. The configured server default (if valid)
/// 3. Fallback to Arabic ("ar")
///
/// # Returns
///
/// A locale that is guaranteed to be supported.
///
/// # Example
///
/// ```
/// use modaqqeq_common_i18n::{resolve_locale, Locale};
///
/// // Stored preference takes priority
/// assert_eq!(resolve_locale(Some("en"), "ar"), Locale::En);
///
/// // Falls back to the server default without a preference
/// assert_eq!(resolve_locale(None, "en"), Locale::En);
///
/// // Falls back to Arabic if both are invalid
/// assert_eq!(resolve_locale(Some("invalid"), "also_invalid"), Locale::Ar);
/// ```
pub fn resolve_locale(preferred: Option<&str>, server_default: &str) -> Locale {
	if let Some(code) = preferred {
		if let Ok(locale) = Locale::from_str(code) {
			return locale;
		}
	}

	Locale::from_str(server_default).unwrap_or(DEFAULT_LOCALE)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_stored_preference_takes_priority() {
		assert_eq!(resolve_locale(Some("en"), "ar"), Locale::En);
		assert_eq!(resolve_locale(Some("ar"), "en"), Locale::Ar);
	}

	#[test]
	fn test_server_default_when_no_preference() {
		assert_eq!(resolve_locale(None, "en"), Locale::En);
		assert_eq!(resolve_locale(None, "ar"), Locale::Ar);
	}

	#[test]
	fn test_fallback_to_default_when_preference_invalid() {
		assert_eq!(resolve_locale(Some("invalid"), "en"), Locale::En);
		assert_eq!(resolve_locale(Some("fr"), "ar"), Locale::Ar);
	}

	#[test]
	fn test_fallback_to_arabic_when_both_invalid() {
		assert_eq!(resolve_locale(Some("invalid"), "also_invalid"), Locale::Ar);
		assert_eq!(resolve_locale(None, "invalid"), Locale::Ar);
	}

	#[test]
	fn test_empty_string_is_invalid() {
		assert_eq!(resolve_locale(Some(""), "en"), Locale::En);
		assert_eq!(resolve_locale(None, ""), Locale::Ar);
	}
}
