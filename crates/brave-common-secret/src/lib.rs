// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Redacting wrapper for credentials such as the Brave Search subscription token.
//!
//! A [`Secret`] prints as `[REDACTED]` through `Debug` and `Display`, and its
//! memory is zeroed on drop. The only way to read the value is
//! [`Secret::expose`], which keeps every use of the raw key visible at the
//! call site.
//!
//! ```
//! use brave_common_secret::SecretString;
//!
//! let token = SecretString::new("BSA-live-token".to_string());
//! assert_eq!(format!("{token}"), "[REDACTED]");
//! assert_eq!(token.expose(), "BSA-live-token");
//! ```

use std::fmt;
use zeroize::Zeroize;

/// Placeholder written wherever a secret would otherwise be printed.
pub const REDACTED: &str = "[REDACTED]";

/// A value that must never show up in logs or dumps.
///
/// There is deliberately no `Deref`; call [`Secret::expose`] to read it.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Secret<T>
where
	T: Zeroize,
{
	inner: T,
}

/// The common case: an API key or token.
pub type SecretString = Secret<String>;

impl<T> Secret<T>
where
	T: Zeroize,
{
	pub fn new(inner: T) -> Self {
		Self { inner }
	}

	/// Borrow the raw value.
	pub fn expose(&self) -> &T {
		&self.inner
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<&str> for SecretString {
	fn from(value: &str) -> Self {
		Self::new(value.to_string())
	}
}

impl<T> Clone for Secret<T>
where
	T: Zeroize + Clone,
{
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

impl<T> fmt::Debug for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Secret").field(&REDACTED).finish()
	}
}

impl<T> fmt::Display for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl<T> PartialEq for Secret<T>
where
	T: Zeroize + PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}

impl<T> Eq for Secret<T> where T: Zeroize + Eq {}
