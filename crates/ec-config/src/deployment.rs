// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the `ec_deployment` resource.
//!
//! The interesting part is [`connection_details`]: after the provisioning
//! engine reports a deployment's attributes, it harvests the login secrets
//! and per-topology endpoints into a redacted map for the connection
//! secret. Partial attribute bags are normal during the resource lifecycle
//! (mid-creation, or when a scheme does not apply), so every lookup
//! degrades to omission rather than failure.

use serde_json::Value;

use crate::registry::{
	AttributeMap, ConnectionDetails, ExternalName, Provider, ResourceConfig, Sensitive,
};

/// Attribute field names reported by the provisioning engine.
pub const ATTR_USERNAME: &str = "elasticsearch_username";
pub const ATTR_PASSWORD: &str = "elasticsearch_password";
pub const ATTR_ELASTICSEARCH: &str = "elasticsearch";
pub const ATTR_HTTP_ENDPOINT: &str = "http_endpoint";
pub const ATTR_HTTPS_ENDPOINT: &str = "https_endpoint";

/// Registers the `ec_deployment` resource configuration.
pub fn configure(provider: &mut Provider) {
	provider.add_resource_configurator(
		"ec_deployment",
		ResourceConfig {
			external_name: ExternalName::IdentifierFromProvider,
			sensitive: Sensitive {
				additional_connection_details: Some(Box::new(|attr| {
					Ok(connection_details(attr))
				})),
			},
			// Deployments take more than a minute to provision.
			use_async: true,
		},
	);
}

/// Collects the deployment's sensitive outputs from its reported
/// attributes.
///
/// Top-level username/password fields are copied verbatim when present
/// and string-typed. Each element of the `elasticsearch` block list
/// contributes its endpoints under names suffixed with the element's
/// 0-based position, so repeated topology entries stay distinguishable.
/// One element may legitimately emit both an http and an https endpoint.
/// Total: malformed shapes contribute nothing and never abort extraction.
pub fn connection_details(attr: &AttributeMap) -> ConnectionDetails {
	let mut conn = ConnectionDetails::new();

	for key in [ATTR_USERNAME, ATTR_PASSWORD] {
		if let Some(value) = attr.get(key).and_then(Value::as_str) {
			conn.insert(key.to_string(), value.as_bytes().to_vec());
		}
	}

	if let Some(groups) = attr.get(ATTR_ELASTICSEARCH).and_then(Value::as_array) {
		for (i, group) in groups.iter().enumerate() {
			let nested = match group.as_object() {
				Some(nested) => nested,
				None => continue,
			};
			for key in [ATTR_HTTP_ENDPOINT, ATTR_HTTPS_ENDPOINT] {
				if let Some(endpoint) = nested.get(key).and_then(Value::as_str) {
					conn.insert(format!("{}_{}", key, i), endpoint.as_bytes().to_vec());
				}
			}
		}
	}

	conn
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	fn attrs(value: serde_json::Value) -> AttributeMap {
		match value {
			Value::Object(map) => map,
			other => panic!("expected object, got {}", other),
		}
	}

	fn secret(conn: &ConnectionDetails, key: &str) -> String {
		String::from_utf8(conn.get(key).unwrap().clone()).unwrap()
	}

	#[test]
	fn test_full_extraction() {
		let attr = attrs(json!({
			"elasticsearch_username": "admin",
			"elasticsearch": [
				{"http_endpoint": "h0"},
				{"https_endpoint": "h1"},
			],
		}));
		let conn = connection_details(&attr);
		assert_eq!(conn.len(), 3);
		assert_eq!(secret(&conn, "elasticsearch_username"), "admin");
		assert_eq!(secret(&conn, "http_endpoint_0"), "h0");
		assert_eq!(secret(&conn, "https_endpoint_1"), "h1");
	}

	#[test]
	fn test_absent_fields_are_omitted_not_emptied() {
		let conn = connection_details(&AttributeMap::new());
		assert!(conn.is_empty());
	}

	#[test]
	fn test_wrong_typed_top_level_fields_are_skipped() {
		let attr = attrs(json!({
			"elasticsearch_username": 42,
			"elasticsearch_password": "s3cr3t",
		}));
		let conn = connection_details(&attr);
		assert_eq!(conn.len(), 1);
		assert_eq!(secret(&conn, "elasticsearch_password"), "s3cr3t");
	}

	#[test]
	fn test_non_array_elasticsearch_is_skipped() {
		let attr = attrs(json!({
			"elasticsearch_password": "s3cr3t",
			"elasticsearch": {"http_endpoint": "h0"},
		}));
		let conn = connection_details(&attr);
		assert_eq!(conn.len(), 1);
		assert!(!conn.contains_key("http_endpoint_0"));
	}

	#[test]
	fn test_malformed_elements_keep_their_index() {
		// The second element is not an object; the third must still be
		// emitted under index 2, not compacted down to 1.
		let attr = attrs(json!({
			"elasticsearch": [
				{"http_endpoint": "h0"},
				"bogus",
				{"https_endpoint": "h2"},
			],
		}));
		let conn = connection_details(&attr);
		assert_eq!(conn.len(), 2);
		assert_eq!(secret(&conn, "http_endpoint_0"), "h0");
		assert_eq!(secret(&conn, "https_endpoint_2"), "h2");
	}

	#[test]
	fn test_element_may_emit_both_endpoints() {
		let attr = attrs(json!({
			"elasticsearch": [
				{"http_endpoint": "http://es:9200", "https_endpoint": "https://es:9243"},
			],
		}));
		let conn = connection_details(&attr);
		assert_eq!(secret(&conn, "http_endpoint_0"), "http://es:9200");
		assert_eq!(secret(&conn, "https_endpoint_0"), "https://es:9243");
	}

	#[test]
	fn test_configure_registers_deployment() {
		let mut provider = Provider::new();
		configure(&mut provider);

		let config = provider.resource("ec_deployment").unwrap();
		assert!(config.use_async);
		let extract = config
			.sensitive
			.additional_connection_details
			.as_ref()
			.unwrap();

		let attr = attrs(json!({"elasticsearch_username": "admin"}));
		let conn = extract(&attr).unwrap();
		assert_eq!(secret(&conn, "elasticsearch_username"), "admin");
	}

	proptest! {
		#[test]
		fn prop_indices_follow_input_order(endpoints in prop::collection::vec("[a-z0-9:/]{1,16}", 0..8)) {
			let groups: Vec<_> = endpoints
				.iter()
				.map(|e| json!({"http_endpoint": e}))
				.collect();
			let attr = attrs(json!({"elasticsearch": groups}));
			let conn = connection_details(&attr);
			prop_assert_eq!(conn.len(), endpoints.len());
			for (i, endpoint) in endpoints.iter().enumerate() {
				let key = format!("http_endpoint_{}", i);
				prop_assert_eq!(conn.get(&key).unwrap(), endpoint.as_bytes());
			}
		}
	}
}
