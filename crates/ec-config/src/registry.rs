// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resource configuration registry.
//!
//! An explicit [`Provider`] value replaces global registration state:
//! process startup constructs one, the configurator functions register
//! into it, and the control loop reads from it. Nothing here is mutated
//! after startup.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::debug;

/// Reported attribute bag of a provisioned resource.
///
/// Values may be strings, nested objects or arrays of nested objects;
/// known field names are looked up defensively and absence is never an
/// error.
pub type AttributeMap = Map<String, Value>;

/// Redacted sensitive outputs keyed by secret name, ready for persistence
/// into a connection secret.
pub type ConnectionDetails = HashMap<String, Vec<u8>>;

/// Callback that harvests additional connection details from a resource's
/// reported attributes. The `Result` is part of the registry contract;
/// extractors that tolerate arbitrary shapes simply always return `Ok`.
pub type ConnectionDetailsFn = Box<
	dyn Fn(&AttributeMap) -> Result<ConnectionDetails, Box<dyn std::error::Error + Send + Sync>>
		+ Send
		+ Sync,
>;

/// How a resource's external name maps onto the remote identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExternalName {
	/// The remote provider assigns the identifier; it is read back after
	/// creation.
	#[default]
	IdentifierFromProvider,
}

/// Sensitive-output handling for one resource kind.
#[derive(Default)]
pub struct Sensitive {
	pub additional_connection_details: Option<ConnectionDetailsFn>,
}

/// Per-resource configuration registered with the [`Provider`].
#[derive(Default)]
pub struct ResourceConfig {
	pub external_name: ExternalName,
	pub sensitive: Sensitive,
	/// Reconcile asynchronously; set for resources whose provisioning
	/// outlives a single reconciliation cycle.
	pub use_async: bool,
}

/// Registry of resource configurations for this provider.
#[derive(Default)]
pub struct Provider {
	resources: HashMap<String, ResourceConfig>,
}

impl Provider {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers the configuration for a resource kind, replacing any
	/// earlier registration under the same name.
	pub fn add_resource_configurator(
		&mut self,
		name: impl Into<String>,
		config: ResourceConfig,
	) {
		let name = name.into();
		debug!(resource = %name, "registering resource configurator");
		self.resources.insert(name, config);
	}

	/// Looks up the configuration for a resource kind.
	pub fn resource(&self, name: &str) -> Option<&ResourceConfig> {
		self.resources.get(name)
	}

	/// Number of registered resource kinds.
	pub fn len(&self) -> usize {
		self.resources.len()
	}

	pub fn is_empty(&self) -> bool {
		self.resources.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_registry_starts_empty() {
		let provider = Provider::new();
		assert!(provider.is_empty());
		assert!(provider.resource("ec_deployment").is_none());
	}

	#[test]
	fn test_register_and_look_up() {
		let mut provider = Provider::new();
		provider.add_resource_configurator(
			"ec_deployment",
			ResourceConfig {
				use_async: true,
				..ResourceConfig::default()
			},
		);
		assert_eq!(provider.len(), 1);
		let config = provider.resource("ec_deployment").unwrap();
		assert!(config.use_async);
		assert_eq!(config.external_name, ExternalName::IdentifierFromProvider);
	}

	#[test]
	fn test_reregistration_replaces() {
		let mut provider = Provider::new();
		provider.add_resource_configurator("ec_deployment", ResourceConfig::default());
		provider.add_resource_configurator(
			"ec_deployment",
			ResourceConfig {
				use_async: true,
				..ResourceConfig::default()
			},
		);
		assert_eq!(provider.len(), 1);
		assert!(provider.resource("ec_deployment").unwrap().use_async);
	}
}
