// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resource configuration for the Elastic Cloud provider.
//!
//! Individual resource kinds register a [`ResourceConfig`] into an
//! explicit [`Provider`] registry at startup. For `ec_deployment` the
//! configuration also carries the sensitive-output extractor that turns
//! the engine's reported attributes into connection-secret entries.

pub mod deployment;
pub mod registry;

pub use registry::{
	AttributeMap, ConnectionDetails, ConnectionDetailsFn, ExternalName, Provider, ResourceConfig,
	Sensitive,
};

/// Registers every resource configurator this provider ships.
pub fn configure(provider: &mut Provider) {
	deployment::configure(provider);
}
