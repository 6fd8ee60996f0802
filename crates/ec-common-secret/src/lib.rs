// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Secret wrapper type for sensitive string values.
//!
//! [`SecretString`] redacts itself in `Debug` and `Display` output and
//! zeroes its memory on drop. Reading the inner value requires an explicit
//! [`SecretString::expose`] call, which keeps accidental leaks out of logs
//! and error messages.

use std::fmt;

use zeroize::Zeroize;

/// A string whose value is hidden from `Debug`/`Display` and zeroed on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
	/// Wraps a sensitive string value.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner value. Call sites should be deliberate; the
	/// exposed reference must not flow into log output.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns true if the wrapped value is the empty string.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("SecretString([REDACTED])")
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("[REDACTED]")
	}
}

impl Drop for SecretString {
	fn drop(&mut self) {
		self.0.zeroize();
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for SecretString {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

#[cfg(feature = "serde")]
impl serde::Serialize for SecretString {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SecretString {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		<String as serde::Deserialize>::deserialize(deserializer).map(Self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_debug_is_redacted() {
		let secret = SecretString::new("hunter2");
		assert_eq!(format!("{:?}", secret), "SecretString([REDACTED])");
	}

	#[test]
	fn test_display_is_redacted() {
		let secret = SecretString::new("hunter2");
		assert_eq!(format!("{}", secret), "[REDACTED]");
	}

	#[test]
	fn test_expose_returns_inner_value() {
		let secret = SecretString::new("hunter2");
		assert_eq!(secret.expose(), "hunter2");
	}

	#[test]
	fn test_is_empty() {
		assert!(SecretString::new("").is_empty());
		assert!(!SecretString::new("x").is_empty());
	}

	#[cfg(feature = "serde")]
	#[test]
	fn test_serde_roundtrip() {
		let secret = SecretString::new("api-token");
		let json = serde_json::to_string(&secret).unwrap();
		assert_eq!(json, "\"api-token\"");
		let back: SecretString = serde_json::from_str(&json).unwrap();
		assert_eq!(back, secret);
	}

	proptest! {
		#[test]
		fn prop_debug_never_contains_value(value in "[a-zA-Z0-9]{1,32}") {
			let secret = SecretString::new(value.clone());
			let debug_output = format!("{:?}", secret);
			let display_output = format!("{}", secret);
			prop_assert!(!debug_output.contains(&value));
			prop_assert!(!display_output.contains(&value));
		}
	}
}
