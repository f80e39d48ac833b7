// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Locale definitions and layout-direction metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A locale supported by Modaqqeq.
///
/// Exactly one locale is active per session. Arabic is the primary locale
/// and the default for fresh sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	/// Arabic (primary).
	#[default]
	Ar,
	/// English (secondary).
	En,
}

/// All supported locales.
pub const LOCALES: [Locale; 2] = [Locale::Ar, Locale::En];

/// The default locale for fresh sessions.
pub const DEFAULT_LOCALE: Locale = Locale::Ar;

/// Error returned when parsing an unsupported locale code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale code '{code}'")]
pub struct UnsupportedLocaleError {
	/// The code that failed to parse.
	pub code: String,
}

impl Locale {
	/// The ISO 639-1 code for this locale.
	pub fn as_str(&self) -> &'static str {
		match self {
			Locale::Ar => "ar",
			Locale::En => "en",
		}
	}

	/// Text direction for this locale.
	pub fn direction(&self) -> Direction {
		match self {
			Locale::Ar => Direction::Rtl,
			Locale::En => Direction::Ltr,
		}
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Locale {
	type Err = UnsupportedLocaleError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"ar" => Ok(Locale::Ar),
			"en" => Ok(Locale::En),
			_ => Err(UnsupportedLocaleError {
				code: s.to_string(),
			}),
		}
	}
}

/// Check whether a locale code is supported.
pub fn is_supported(code: &str) -> bool {
	Locale::from_str(code).is_ok()
}

/// True if and only if the locale renders right-to-left.
pub fn is_rtl(locale: Locale) -> bool {
	locale.direction() == Direction::Rtl
}

/// Text layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	/// Right-to-left (Arabic).
	Rtl,
	/// Left-to-right (English).
	Ltr,
}

impl Direction {
	/// The HTML `dir` attribute value.
	pub fn as_str(&self) -> &'static str {
		match self {
			Direction::Rtl => "rtl",
			Direction::Ltr => "ltr",
		}
	}
}

/// Static metadata describing a supported locale.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleInfo {
	pub code: &'static str,
	pub english_name: &'static str,
	pub native_name: &'static str,
	pub direction: Direction,
	pub font_class: &'static str,
}

static LOCALE_INFO: [LocaleInfo; 2] = [
	LocaleInfo {
		code: "ar",
		english_name: "Arabic",
		native_name: "العربية",
		direction: Direction::Rtl,
		font_class: "font-arabic",
	},
	LocaleInfo {
		code: "en",
		english_name: "English",
		native_name: "English",
		direction: Direction::Ltr,
		font_class: "font-sans",
	},
];

/// Metadata for a single locale.
pub fn locale_info(locale: Locale) -> &'static LocaleInfo {
	match locale {
		Locale::Ar => &LOCALE_INFO[0],
		Locale::En => &LOCALE_INFO[1],
	}
}

/// Metadata for every supported locale.
pub fn available_locales() -> &'static [LocaleInfo] {
	&LOCALE_INFO
}

/// Document-level presentation attributes derived from a locale.
///
/// Covers everything the page shell applies when the locale changes: the
/// `dir` and `lang` attributes, the root element class, and the body font
/// class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentAttrs {
	pub dir: &'static str,
	pub lang: &'static str,
	pub root_class: &'static str,
	pub font_class: &'static str,
}

impl DocumentAttrs {
	/// Derive the document attributes for a locale.
	pub fn for_locale(locale: Locale) -> Self {
		let dir = locale.direction().as_str();
		Self {
			dir,
			lang: locale.as_str(),
			root_class: dir,
			font_class: locale_info(locale).font_class,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_is_rtl_truth_table() {
		assert!(is_rtl(Locale::Ar));
		assert!(!is_rtl(Locale::En));
	}

	#[test]
	fn test_default_locale_is_arabic() {
		assert_eq!(Locale::default(), Locale::Ar);
		assert_eq!(DEFAULT_LOCALE, Locale::Ar);
	}

	#[test]
	fn test_parse_supported_codes() {
		assert_eq!("ar".parse::<Locale>(), Ok(Locale::Ar));
		assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
	}

	#[test]
	fn test_parse_rejects_unsupported_codes() {
		assert!("fr".parse::<Locale>().is_err());
		assert!("AR".parse::<Locale>().is_err());
		assert!("".parse::<Locale>().is_err());
	}

	#[test]
	fn test_is_supported() {
		assert!(is_supported("ar"));
		assert!(is_supported("en"));
		assert!(!is_supported("es"));
	}

	#[test]
	fn test_document_attrs_arabic() {
		let attrs = DocumentAttrs::for_locale(Locale::Ar);
		assert_eq!(attrs.dir, "rtl");
		assert_eq!(attrs.lang, "ar");
		assert_eq!(attrs.root_class, "rtl");
		assert_eq!(attrs.font_class, "font-arabic");
	}

	#[test]
	fn test_document_attrs_english() {
		let attrs = DocumentAttrs::for_locale(Locale::En);
		assert_eq!(attrs.dir, "ltr");
		assert_eq!(attrs.lang, "en");
		assert_eq!(attrs.root_class, "ltr");
		assert_eq!(attrs.font_class, "font-sans");
	}

	#[test]
	fn test_locale_info_native_names() {
		assert_eq!(locale_info(Locale::Ar).native_name, "العربية");
		assert_eq!(locale_info(Locale::En).english_name, "English");
		assert_eq!(available_locales().len(), LOCALES.len());
	}
}
