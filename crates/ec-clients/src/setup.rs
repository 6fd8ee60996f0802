// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Provider setup assembly for the provisioning engine.
//!
//! [`SetupBuilder`] runs once per reconciliation cycle, before the
//! provisioning engine: it pulls the credential payload through a
//! [`CredentialSource`], decodes it, selects the authentication scheme and
//! hands back a [`ProviderSetup`] the engine can execute with. The
//! resolution step itself ([`SetupBuilder::resolve`]) is a pure function
//! and is exercised directly by tests.

use async_trait::async_trait;
use tracing::debug;

use crate::credentials::{AuthScheme, CredentialSet, KEY_HOST};
use crate::error::{CredentialError, SetupError};

/// Pinned provisioning-engine plugin requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRequirement {
	pub source: String,
	pub version: String,
}

/// Runtime configuration handed to the provisioning engine.
///
/// `endpoint` is taken verbatim from the credential payload and may be
/// empty; the engine is the authority on connectivity. `env` holds the
/// `NAME=VALUE` entries for exactly one authentication scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSetup {
	pub version: String,
	pub requirement: ProviderRequirement,
	pub endpoint: String,
	pub env: Vec<String>,
}

/// Reference to the provider config object holding the credential payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfigRef {
	pub name: String,
}

impl ProviderConfigRef {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}

/// Collaborator that resolves a provider config reference to the raw
/// credential payload bytes. Implementations live outside this crate
/// (backed by the cluster secret store); errors are wrapped by the
/// builder and surface with their full chain intact.
#[async_trait]
pub trait CredentialSource: Send + Sync {
	async fn fetch(
		&self,
		reference: &ProviderConfigRef,
	) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Builds provider setups for a pinned engine and plugin version.
#[derive(Debug, Clone)]
pub struct SetupBuilder {
	version: String,
	requirement: ProviderRequirement,
}

impl SetupBuilder {
	/// Creates a builder for the given engine version and plugin
	/// source/version requirement.
	pub fn new(
		version: impl Into<String>,
		provider_source: impl Into<String>,
		provider_version: impl Into<String>,
	) -> Self {
		Self {
			version: version.into(),
			requirement: ProviderRequirement {
				source: provider_source.into(),
				version: provider_version.into(),
			},
		}
	}

	/// Resolves a credential set into a provider setup.
	///
	/// Pure and deterministic: no I/O, identical input yields an identical
	/// setup. Validation failures are terminal for the reconciliation
	/// attempt.
	pub fn resolve(&self, creds: &CredentialSet) -> Result<ProviderSetup, CredentialError> {
		let scheme = AuthScheme::from_credentials(creds)?;
		debug!(scheme = scheme.name(), "resolved ec credentials");

		Ok(ProviderSetup {
			version: self.version.clone(),
			requirement: self.requirement.clone(),
			endpoint: creds.get(KEY_HOST).to_string(),
			env: scheme.env_vars(),
		})
	}

	/// Fetches, decodes and resolves the credential payload referenced by
	/// `config_ref`.
	///
	/// Collaborator failures come back as [`SetupError`] variants wrapping
	/// their cause; a missing reference fails before any fetch.
	pub async fn build(
		&self,
		source: &dyn CredentialSource,
		config_ref: Option<&ProviderConfigRef>,
	) -> Result<ProviderSetup, SetupError> {
		let reference = config_ref.ok_or(SetupError::MissingProviderConfig)?;

		let data = source
			.fetch(reference)
			.await
			.map_err(SetupError::FetchCredentials)?;

		let creds = CredentialSet::from_json(&data)?;
		Ok(self.resolve(&creds)?)
	}
}
