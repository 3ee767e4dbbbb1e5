use std::collections::{HashMap, HashSet};

use super::types::PolicyGraphData;

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

pub const NODE_RADIUS: f64 = 10.0;
pub const HIT_RADIUS: f64 = 18.0;
pub const FIT_MARGIN: f64 = 80.0;

const HIGHLIGHT_SPEED: f64 = 4.0;

/// One resource as the canvas draws it. Position is mutable so nodes can be
/// dragged off the layout circle.
#[derive(Clone, Debug)]
pub struct NodeVisual {
	pub id: String,
	pub name: String,
	/// Sorted role names joined for the label line, `None` when the resource
	/// declares no roles.
	pub roles_line: Option<String>,
	pub color: &'static str,
	pub x: f64,
	pub y: f64,
}

/// An edge whose endpoints resolved to node indices, plus its relation name.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeVisual {
	pub source: usize,
	pub target: usize,
	pub label: String,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
	/// Cleared on press; set once the pointer leaves the click slop, which
	/// turns the gesture from a click into a drag.
	pub moved: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub neighbors: HashSet<usize>,
	pub highlight_t: f64,
}

pub struct PolicyGraphState {
	pub nodes: Vec<NodeVisual>,
	pub edges: Vec<EdgeVisual>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
}

impl PolicyGraphState {
	pub fn new(data: &PolicyGraphData, width: f64, height: f64) -> Self {
		let mut id_to_idx = HashMap::new();
		let mut nodes = Vec::with_capacity(data.nodes.len());

		for (i, node) in data.nodes.iter().enumerate() {
			id_to_idx.insert(node.id.clone(), i);
			nodes.push(NodeVisual {
				id: node.id.clone(),
				name: node.name.clone(),
				roles_line: if node.roles.is_empty() {
					None
				} else {
					Some(node.roles.join(", "))
				},
				color: COLORS[i % COLORS.len()],
				x: node.x,
				y: node.y,
			});
		}

		// Relations may point at ids the payload never defined; keep the
		// graph drawable by dropping only those edges here.
		let mut edges = Vec::with_capacity(data.edges.len());
		for edge in &data.edges {
			match (id_to_idx.get(&edge.source), id_to_idx.get(&edge.target)) {
				(Some(&source), Some(&target)) => edges.push(EdgeVisual {
					source,
					target,
					label: edge.label.clone(),
				}),
				_ => log::warn!("skipping dangling relation edge {}", edge.id),
			}
		}

		let mut state = Self {
			nodes,
			edges,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
		};
		state.fit_view();
		state
	}

	/// Center the node bounds in the viewport and pick a zoom that fits them
	/// with a margin.
	pub fn fit_view(&mut self) {
		let Some(first) = self.nodes.first() else {
			return;
		};
		let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
		for node in &self.nodes {
			min_x = min_x.min(node.x);
			min_y = min_y.min(node.y);
			max_x = max_x.max(node.x);
			max_y = max_y.max(node.y);
		}

		let span_x = (max_x - min_x) + FIT_MARGIN * 2.0;
		let span_y = (max_y - min_y) + FIT_MARGIN * 2.0;
		let k = (self.width / span_x).min(self.height / span_y).clamp(0.1, 2.0);
		let (cx, cy) = ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);

		self.transform = ViewTransform {
			x: self.width / 2.0 - cx * k,
			y: self.height / 2.0 - cy * k,
			k,
		};
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under a screen position, if any. Later nodes draw on
	/// top, so scan from the back.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.nodes
			.iter()
			.enumerate()
			.rev()
			.find(|(_, node)| {
				let (dx, dy) = (node.x - gx, node.y - gy);
				(dx * dx + dy * dy).sqrt() < HIT_RADIUS
			})
			.map(|(i, _)| i)
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			for edge in &self.edges {
				if edge.source == idx {
					self.hover.neighbors.insert(edge.target);
				} else if edge.target == idx {
					self.hover.neighbors.insert(edge.source);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.hover.node == Some(idx) || self.hover.neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hover.node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some()
	}

	/// Ease the highlight animation toward its target.
	pub fn tick(&mut self, dt: f64) {
		let target = if self.hover.node.is_some() { 1.0 } else { 0.0 };
		self.hover.highlight_t += (target - self.hover.highlight_t) * HIGHLIGHT_SPEED * dt;
		if self.hover.node.is_none() && self.hover.highlight_t < 0.01 {
			self.hover.highlight_t = 0.0;
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
