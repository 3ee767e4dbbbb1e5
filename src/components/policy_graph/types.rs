/// A rendered resource: identity, display payload, and its slot on the
/// layout circle. `actions` ride along for future use but are not drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct PolicyNode {
	pub id: String,
	pub name: String,
	pub roles: Vec<String>,
	pub actions: Vec<String>,
	pub x: f64,
	pub y: f64,
}

/// A directed relation between two resources. `source`/`target` are resource
/// ids; `target` may be absent from the node set (dangling relations are
/// kept here and dealt with at draw time).
#[derive(Clone, Debug, PartialEq)]
pub struct PolicyEdge {
	pub id: String,
	pub source: String,
	pub target: String,
	pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolicyGraphData {
	pub nodes: Vec<PolicyNode>,
	pub edges: Vec<PolicyEdge>,
}
