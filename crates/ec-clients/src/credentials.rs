// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Credential payload parsing and authentication scheme selection.
//!
//! A [`CredentialSet`] is the decoded form of the JSON payload stored in
//! the referenced provider config. Exactly one authentication scheme must
//! be derivable from it: an API key, or a username/password pair. The
//! [`AuthScheme`] smart constructor enforces that invariant and is the
//! only way to obtain a scheme.

use std::collections::HashMap;

use ec_common_secret::SecretString;

use crate::error::CredentialError;

// Credential field names in the stored payload.
pub const KEY_API_KEY: &str = "apikey";
pub const KEY_USERNAME: &str = "username";
pub const KEY_PASSWORD: &str = "password";
pub const KEY_HOST: &str = "endpoint";

// Environment variable names consumed by the provisioning engine.
pub const ENV_API_KEY: &str = "EC_API_KEY";
pub const ENV_USERNAME: &str = "EC_USERNAME";
pub const ENV_PASSWORD: &str = "EC_PASSWORD";

/// A decoded credential payload: field name to string value.
///
/// Built fresh from the secret payload on every resolution and never
/// persisted. Absent fields read as the empty string; emptiness is judged
/// during scheme selection, not here.
#[derive(Debug, Clone, Default)]
pub struct CredentialSet {
	fields: HashMap<String, String>,
}

impl CredentialSet {
	/// Decodes a JSON object with string values into a credential set.
	pub fn from_json(data: &[u8]) -> Result<Self, serde_json::Error> {
		let fields: HashMap<String, String> = serde_json::from_slice(data)?;
		Ok(Self { fields })
	}

	/// Returns the value for `key`, or the empty string when absent.
	pub fn get(&self, key: &str) -> &str {
		self.fields.get(key).map(String::as_str).unwrap_or_default()
	}
}

impl From<HashMap<String, String>> for CredentialSet {
	fn from(fields: HashMap<String, String>) -> Self {
		Self { fields }
	}
}

impl<const N: usize> From<[(&str, &str); N]> for CredentialSet {
	fn from(pairs: [(&str, &str); N]) -> Self {
		Self {
			fields: pairs
				.iter()
				.map(|(k, v)| (k.to_string(), v.to_string()))
				.collect(),
		}
	}
}

/// The authentication scheme selected from a credential set.
///
/// The two schemes are mutually exclusive. Construction goes through
/// [`AuthScheme::from_credentials`], which checks for conflicts before
/// checking for completeness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthScheme {
	ApiKey {
		key: SecretString,
	},
	UsernamePassword {
		username: String,
		password: SecretString,
	},
}

impl AuthScheme {
	/// Selects the authentication scheme for `creds`.
	///
	/// Fails with [`CredentialError::ConflictingSchemes`] when an API key
	/// is supplied alongside username or password material, and with
	/// [`CredentialError::IncompleteCredentials`] when neither a key nor a
	/// complete username/password pair is present. The conflict check runs
	/// first.
	pub fn from_credentials(creds: &CredentialSet) -> Result<Self, CredentialError> {
		let apikey = creds.get(KEY_API_KEY);
		let username = creds.get(KEY_USERNAME);
		let password = creds.get(KEY_PASSWORD);

		if !apikey.is_empty() && (!username.is_empty() || !password.is_empty()) {
			return Err(CredentialError::ConflictingSchemes);
		}

		if !apikey.is_empty() {
			return Ok(Self::ApiKey {
				key: SecretString::new(apikey),
			});
		}

		if username.is_empty() || password.is_empty() {
			return Err(CredentialError::IncompleteCredentials);
		}

		Ok(Self::UsernamePassword {
			username: username.to_string(),
			password: SecretString::new(password),
		})
	}

	/// Scheme name for structured log fields. Never carries secret material.
	pub fn name(&self) -> &'static str {
		match self {
			Self::ApiKey { .. } => "apikey",
			Self::UsernamePassword { .. } => "username_password",
		}
	}

	/// Renders the `NAME=VALUE` environment entries for this scheme.
	///
	/// One entry for the API key scheme, two for username/password with
	/// the username entry first. The order is fixed; the provisioning
	/// engine injects these verbatim into its execution environment.
	pub fn env_vars(&self) -> Vec<String> {
		match self {
			Self::ApiKey { key } => {
				vec![format!("{}={}", ENV_API_KEY, key.expose())]
			}
			Self::UsernamePassword { username, password } => {
				vec![
					format!("{}={}", ENV_USERNAME, username),
					format!("{}={}", ENV_PASSWORD, password.expose()),
				]
			}
		}
	}
}
