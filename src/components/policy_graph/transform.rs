//! Mapping from the loaded resource list to drawable nodes and edges.

use std::f64::consts::PI;

use crate::model::Resource;

use super::types::{PolicyEdge, PolicyGraphData, PolicyNode};

/// Radius of the layout circle, in graph units.
pub const LAYOUT_RADIUS: f64 = 250.0;

/// Derive one node per resource and one edge per declared relation.
///
/// Node `i` of `n` sits on a circle of radius [`LAYOUT_RADIUS`] at angle
/// `2π·i/n`. The placement is decorative, not force-directed; it only
/// spreads nodes evenly regardless of topology. Edges keep the declaration
/// order of their owning resources, and a relation whose target id is not in
/// the list still produces an edge.
pub fn build_graph(resources: &[Resource]) -> PolicyGraphData {
	if resources.is_empty() {
		return PolicyGraphData::default();
	}

	let count = resources.len();
	let mut nodes = Vec::with_capacity(count);
	let mut edges = Vec::new();

	for (i, resource) in resources.iter().enumerate() {
		let angle = 2.0 * PI * (i as f64) / (count as f64);
		nodes.push(PolicyNode {
			id: resource.id.clone(),
			name: resource.name.clone(),
			roles: resource.roles.keys().cloned().collect(),
			actions: resource.actions.keys().cloned().collect(),
			x: LAYOUT_RADIUS * angle.cos(),
			y: LAYOUT_RADIUS * angle.sin(),
		});

		for (name, relation) in &resource.relations {
			edges.push(PolicyEdge {
				id: format!("{}-{}-{}", resource.id, relation.resource_id, name),
				source: resource.id.clone(),
				target: relation.resource_id.clone(),
				label: name.clone(),
			});
		}
	}

	PolicyGraphData { nodes, edges }
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use crate::model::{Relation, Resource};

	use super::*;

	fn resource(id: &str, name: &str) -> Resource {
		Resource {
			id: id.to_string(),
			key: id.to_string(),
			name: name.to_string(),
			description: None,
			actions: Default::default(),
			roles: Default::default(),
			relations: Default::default(),
		}
	}

	fn relation(target: &str) -> Relation {
		Relation {
			resource_id: target.to_string(),
			resource: String::new(),
			description: None,
		}
	}

	fn relations(entries: &[(&str, &str)]) -> BTreeMap<String, Relation> {
		entries
			.iter()
			.map(|(name, target)| (name.to_string(), relation(target)))
			.collect()
	}

	#[test]
	fn empty_input_yields_empty_graph() {
		let graph = build_graph(&[]);
		assert!(graph.nodes.is_empty());
		assert!(graph.edges.is_empty());
	}

	#[test]
	fn one_node_per_resource_in_input_order() {
		let graph = build_graph(&[
			resource("r1", "Doc"),
			resource("r2", "User"),
			resource("r3", "Org"),
		]);
		let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, vec!["r1", "r2", "r3"]);
	}

	#[test]
	fn nodes_sit_on_the_layout_circle() {
		let input: Vec<Resource> = (0..4)
			.map(|i| resource(&format!("r{}", i), "n"))
			.collect();
		let graph = build_graph(&input);

		for (i, node) in graph.nodes.iter().enumerate() {
			let angle = 2.0 * PI * (i as f64) / 4.0;
			assert!((node.x - LAYOUT_RADIUS * angle.cos()).abs() < 1e-9);
			assert!((node.y - LAYOUT_RADIUS * angle.sin()).abs() < 1e-9);
		}
	}

	#[test]
	fn single_resource_lands_at_angle_zero() {
		let graph = build_graph(&[resource("only", "Only")]);
		assert_eq!(graph.nodes.len(), 1);
		assert!((graph.nodes[0].x - LAYOUT_RADIUS).abs() < 1e-9);
		assert!(graph.nodes[0].y.abs() < 1e-9);
	}

	#[test]
	fn relation_becomes_a_labeled_directed_edge() {
		let mut doc = resource("r1", "Doc");
		doc.relations = relations(&[("owner", "r2")]);
		let graph = build_graph(&[doc, resource("r2", "User")]);

		assert_eq!(graph.nodes.len(), 2);
		assert_eq!(graph.edges.len(), 1);
		let edge = &graph.edges[0];
		assert_eq!(edge.source, "r1");
		assert_eq!(edge.target, "r2");
		assert_eq!(edge.label, "owner");
		assert_eq!(edge.id, "r1-r2-owner");
	}

	#[test]
	fn same_relation_name_on_two_resources_keeps_both_edges() {
		let mut doc = resource("r1", "Doc");
		doc.relations = relations(&[("parent", "r3")]);
		let mut folder = resource("r2", "Folder");
		folder.relations = relations(&[("parent", "r3")]);
		let graph = build_graph(&[doc, folder, resource("r3", "Org")]);

		assert_eq!(graph.edges.len(), 2);
		let mut ids: Vec<&str> = graph.edges.iter().map(|e| e.id.as_str()).collect();
		ids.sort();
		assert_eq!(ids, vec!["r1-r3-parent", "r2-r3-parent"]);
	}

	#[test]
	fn dangling_relation_still_emits_an_edge() {
		let mut doc = resource("r1", "Doc");
		doc.relations = relations(&[("owner", "missing")]);
		let graph = build_graph(&[doc]);

		assert_eq!(graph.edges.len(), 1);
		assert_eq!(graph.edges[0].target, "missing");
	}

	#[test]
	fn roles_and_actions_ride_along_sorted() {
		let payload = r#"{
			"id": "r1",
			"key": "doc",
			"name": "Doc",
			"actions": {
				"write": { "id": "a2", "key": "write", "name": "Write" },
				"read": { "id": "a1", "key": "read", "name": "Read" }
			},
			"roles": {
				"viewer": { "id": "ro2", "key": "viewer", "name": "Viewer", "permissions": ["read"] },
				"admin": { "id": "ro1", "key": "admin", "name": "Admin", "permissions": ["read", "write"] }
			}
		}"#;
		let doc: Resource = serde_json::from_str(payload).unwrap();
		let graph = build_graph(&[doc]);

		assert_eq!(graph.nodes[0].roles, vec!["admin", "viewer"]);
		assert_eq!(graph.nodes[0].actions, vec!["read", "write"]);
	}
}
