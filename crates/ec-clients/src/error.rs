// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Credential validation failures.
///
/// Both variants are user configuration errors: they are terminal for the
/// current reconciliation attempt and stay terminal until the referenced
/// credentials change. Callers should surface them verbatim rather than
/// retry.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CredentialError {
	#[error("either apikey OR username and password may be supplied")]
	ConflictingSchemes,

	#[error("username and password are required")]
	IncompleteCredentials,
}

/// Failures while assembling a provider setup.
///
/// Collaborator errors (reference lookup, credential fetch, payload
/// decoding) are wrapped with context; the cause is preserved via
/// `source()` so callers keep the full message chain.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
	#[error("no provider config reference provided")]
	MissingProviderConfig,

	#[error("cannot fetch ec credentials")]
	FetchCredentials(#[source] Box<dyn std::error::Error + Send + Sync>),

	#[error("cannot unmarshal ec credentials as JSON")]
	Unmarshal(#[from] serde_json::Error),

	#[error("cannot extract credentials")]
	Credentials(#[from] CredentialError),
}
