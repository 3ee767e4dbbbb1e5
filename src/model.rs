//! Resource records as served by the policy backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An access-controllable entity: carries its permission verbs, grantable
/// roles, and named relations to other resources.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
	pub id: String,
	pub key: String,
	pub name: String,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub actions: BTreeMap<String, Action>,
	#[serde(default)]
	pub roles: BTreeMap<String, Role>,
	#[serde(default)]
	pub relations: BTreeMap<String, Relation>,
}

/// A named permission verb on a resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action {
	pub id: String,
	pub key: String,
	pub name: String,
	#[serde(default)]
	pub description: Option<String>,
}

/// A named bundle of actions grantable on a resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Role {
	pub id: String,
	pub key: String,
	pub name: String,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub permissions: Vec<String>,
}

/// A directed reference to another resource. `resource_id` may name an id
/// that is absent from the loaded set; that is tolerated downstream, not
/// rejected here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Relation {
	pub resource_id: String,
	/// Key of the target resource, informational only.
	#[serde(default)]
	pub resource: String,
	#[serde(default)]
	pub description: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserializes_backend_payload() {
		let payload = r#"[{
			"id": "res-1",
			"key": "document",
			"name": "Document",
			"description": null,
			"actions": {
				"read": { "id": "act-1", "key": "read", "name": "Read", "description": null }
			},
			"roles": {
				"viewer": {
					"id": "role-1",
					"key": "viewer",
					"name": "Viewer",
					"description": "Read-only access",
					"permissions": ["read"]
				}
			},
			"relations": {
				"owner": { "resource_id": "res-2", "resource": "user", "description": null }
			}
		}]"#;

		let resources: Vec<Resource> = serde_json::from_str(payload).unwrap();
		assert_eq!(resources.len(), 1);

		let resource = &resources[0];
		assert_eq!(resource.id, "res-1");
		assert_eq!(resource.key, "document");
		assert_eq!(resource.name, "Document");
		assert_eq!(resource.description, None);
		assert_eq!(resource.actions["read"].name, "Read");
		assert_eq!(resource.roles["viewer"].permissions, vec!["read"]);
		assert_eq!(resource.relations["owner"].resource_id, "res-2");
		assert_eq!(resource.relations["owner"].resource, "user");
	}

	#[test]
	fn missing_collections_default_to_empty() {
		let payload = r#"{ "id": "res-9", "key": "org", "name": "Organization" }"#;
		let resource: Resource = serde_json::from_str(payload).unwrap();
		assert!(resource.actions.is_empty());
		assert!(resource.roles.is_empty());
		assert!(resource.relations.is_empty());
		assert_eq!(resource.description, None);
	}

	#[test]
	fn role_names_iterate_in_sorted_order() {
		let payload = r#"{
			"id": "res-3",
			"key": "folder",
			"name": "Folder",
			"roles": {
				"writer": { "id": "r-2", "key": "writer", "name": "Writer", "permissions": [] },
				"admin": { "id": "r-1", "key": "admin", "name": "Admin", "permissions": [] }
			}
		}"#;
		let resource: Resource = serde_json::from_str(payload).unwrap();
		let names: Vec<&String> = resource.roles.keys().collect();
		assert_eq!(names, vec!["admin", "writer"]);
	}
}
