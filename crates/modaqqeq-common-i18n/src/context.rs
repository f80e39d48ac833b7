// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Process-wide active-locale context.

use std::sync::Arc;

use tokio::sync::watch;

use crate::locale::{DocumentAttrs, Locale, DEFAULT_LOCALE};

/// Explicitly owned active-locale state: one mutator, many readers.
///
/// Readers either take a snapshot via [`LocaleContext::current`] or
/// subscribe to change notifications via [`LocaleContext::subscribe`].
/// Snapshots are immutable copies distributed through a watch channel, so
/// readers never observe a partially applied switch. Created once at
/// startup and shared for the life of the process; no explicit teardown.
#[derive(Debug, Clone)]
pub struct LocaleContext {
	tx: Arc<watch::Sender<Locale>>,
}

impl LocaleContext {
	/// Create a context with the given initial locale.
	pub fn new(initial: Locale) -> Self {
		let (tx, _rx) = watch::channel(initial);
		Self { tx: Arc::new(tx) }
	}

	/// Snapshot of the active locale.
	pub fn current(&self) -> Locale {
		*self.tx.borrow()
	}

	/// Switch the active locale.
	///
	/// Returns `true` when the value changed. Setting the locale that is
	/// already active is a no-op and does not notify subscribers.
	pub fn set(&self, locale: Locale) -> bool {
		let changed = self.tx.send_if_modified(|current| {
			if *current == locale {
				false
			} else {
				*current = locale;
				true
			}
		});

		if changed {
			tracing::info!(
				locale = %locale,
				dir = locale.direction().as_str(),
				"active locale changed"
			);
		}

		changed
	}

	/// Subscribe to locale changes.
	pub fn subscribe(&self) -> watch::Receiver<Locale> {
		self.tx.subscribe()
	}

	/// Document attributes for the active locale.
	pub fn document_attrs(&self) -> DocumentAttrs {
		DocumentAttrs::for_locale(self.current())
	}
}

impl Default for LocaleContext {
	fn default() -> Self {
		Self::new(DEFAULT_LOCALE)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_is_arabic() {
		let ctx = LocaleContext::default();
		assert_eq!(ctx.current(), Locale::Ar);
		assert_eq!(ctx.document_attrs().dir, "rtl");
	}

	#[test]
	fn test_set_changes_snapshot() {
		let ctx = LocaleContext::default();
		assert!(ctx.set(Locale::En));
		assert_eq!(ctx.current(), Locale::En);
		assert_eq!(ctx.document_attrs().dir, "ltr");
	}

	#[test]
	fn test_set_same_locale_is_idempotent() {
		let ctx = LocaleContext::new(Locale::Ar);
		let before = ctx.document_attrs();

		assert!(!ctx.set(Locale::Ar));
		assert!(!ctx.set(Locale::Ar));

		assert_eq!(ctx.document_attrs(), before);
	}

	#[test]
	fn test_subscribers_observe_changes() {
		let ctx = LocaleContext::default();
		let mut rx = ctx.subscribe();

		assert!(ctx.set(Locale::En));
		assert!(rx.has_changed().unwrap());
		assert_eq!(*rx.borrow_and_update(), Locale::En);

		// No-op set does not wake subscribers.
		assert!(!ctx.set(Locale::En));
		assert!(!rx.has_changed().unwrap());
	}

	#[test]
	fn test_clones_share_state() {
		let ctx = LocaleContext::default();
		let reader = ctx.clone();

		ctx.set(Locale::En);
		assert_eq!(reader.current(), Locale::En);
	}
}
