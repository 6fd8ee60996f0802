// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Credential resolution and provider setup assembly for Elastic Cloud.
//!
//! This crate turns a stored credential payload into the runtime
//! configuration the provisioning engine needs: a connection endpoint plus
//! environment entries for exactly one authentication scheme (API key, or
//! username and password). It performs no I/O of its own; the credential
//! payload arrives through the [`CredentialSource`] collaborator trait.

pub mod credentials;
pub mod error;
pub mod setup;

pub use credentials::{AuthScheme, CredentialSet};
pub use error::{CredentialError, SetupError};
pub use setup::{
	CredentialSource, ProviderConfigRef, ProviderRequirement, ProviderSetup, SetupBuilder,
};
