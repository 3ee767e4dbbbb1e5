use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{NODE_RADIUS, PolicyGraphState};

const BACKGROUND: &str = "#f8fafc";
const GRID_COLOR: &str = "#dbe2ea";
const EDGE_COLOR: &str = "100, 116, 139";
const LABEL_COLOR: &str = "15, 23, 42";

const GRID_SPACING: f64 = 28.0;
const MINIMAP_WIDTH: f64 = 180.0;
const MINIMAP_HEIGHT: f64 = 130.0;
const MINIMAP_MARGIN: f64 = 16.0;
const MINIMAP_PADDING: f64 = 6.0;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &PolicyGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_grid(state, ctx);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
	draw_minimap(state, ctx);
}

/// Dot grid over the visible graph rectangle. Skipped when zoomed far out,
/// where the dots would collapse into noise.
fn draw_grid(state: &PolicyGraphState, ctx: &CanvasRenderingContext2d) {
	if state.transform.k < 0.4 {
		return;
	}
	let (x0, y0) = state.screen_to_graph(0.0, 0.0);
	let (x1, y1) = state.screen_to_graph(state.width, state.height);
	let dot = 1.5 / state.transform.k;

	ctx.set_fill_style_str(GRID_COLOR);
	let mut gx = (x0 / GRID_SPACING).floor() * GRID_SPACING;
	while gx <= x1 {
		let mut gy = (y0 / GRID_SPACING).floor() * GRID_SPACING;
		while gy <= y1 {
			ctx.fill_rect(gx, gy, dot, dot);
			gy += GRID_SPACING;
		}
		gx += GRID_SPACING;
	}
}

fn draw_edges(state: &PolicyGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (line_width, arrow_size) = (1.5 / k, 8.0 / k);
	let t = ease_out_cubic(state.hover.highlight_t);

	for edge in &state.edges {
		let (from, to) = (&state.nodes[edge.source], &state.nodes[edge.target]);
		let (dx, dy) = (to.x - from.x, to.y - from.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}

		let is_highlighted =
			state.is_highlighted(edge.source) && state.is_highlighted(edge.target);

		// t=0: everything at base. t=1: edges touching the hovered node
		// brighten, the rest recede.
		let (edge_alpha, width) = if is_highlighted {
			(0.55 + 0.35 * t, line_width * (1.0 + 0.3 * t))
		} else {
			(0.55 - 0.4 * t, line_width * (1.0 - 0.3 * t))
		};

		let (ux, uy) = (dx / dist, dy / dist);
		let (tip_x, tip_y) = (to.x - ux * NODE_RADIUS, to.y - uy * NODE_RADIUS);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);

		ctx.set_stroke_style_str(&format!("rgba({}, {})", EDGE_COLOR, edge_alpha));
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(from.x + ux * NODE_RADIUS, from.y + uy * NODE_RADIUS);
		ctx.line_to(back_x, back_y);
		ctx.stroke();

		ctx.set_fill_style_str(&format!("rgba({}, {})", EDGE_COLOR, edge_alpha));
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();

		// Relation name at the midpoint, nudged off the line.
		let (mid_x, mid_y) = ((from.x + to.x) / 2.0, (from.y + to.y) / 2.0);
		ctx.set_fill_style_str(&format!("rgba({}, {})", EDGE_COLOR, edge_alpha + 0.2));
		ctx.set_font(&format!("{}px sans-serif", 10.0 / k.max(0.5)));
		ctx.set_text_align("center");
		let _ = ctx.fill_text(&edge.label, mid_x - uy * 8.0 / k, mid_y + ux * 8.0 / k);
		ctx.set_text_align("start");
	}
}

fn draw_nodes(state: &PolicyGraphState, ctx: &CanvasRenderingContext2d) {
	let has_highlight = state.has_active_highlight();
	let t = ease_out_cubic(state.hover.highlight_t);
	let k = state.transform.k;

	for (idx, node) in state.nodes.iter().enumerate() {
		let hovered = state.is_hovered(idx);
		let highlighted = state.is_highlighted(idx);
		let dimmed = has_highlight && !highlighted;

		let alpha = if dimmed { 1.0 - 0.7 * t } else { 1.0 };
		let radius = if hovered {
			NODE_RADIUS * (1.0 + 0.25 * t)
		} else {
			NODE_RADIUS
		};

		if hovered && t > 0.01 {
			let glow_radius = NODE_RADIUS * (1.8 + 1.2 * t);
			let gradient = ctx
				.create_radial_gradient(node.x, node.y, radius * 0.3, node.x, node.y, glow_radius)
				.unwrap();
			gradient
				.add_color_stop(0.0, &format!("rgba(148, 163, 184, {})", 0.45 * t))
				.unwrap();
			gradient
				.add_color_stop(1.0, "rgba(148, 163, 184, 0)")
				.unwrap();
			ctx.begin_path();
			let _ = ctx.arc(node.x, node.y, glow_radius, 0.0, 2.0 * PI);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.color);
		ctx.fill();
		ctx.set_global_alpha(1.0);

		if hovered && t > 0.01 {
			ctx.begin_path();
			let _ = ctx.arc(node.x, node.y, radius + 2.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba({}, {})", LABEL_COLOR, 0.7 * t));
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}

		let label_x = node.x + radius + 4.0 / k;
		ctx.set_fill_style_str(&format!("rgba({}, {})", LABEL_COLOR, alpha));
		ctx.set_font(&format!("600 {}px sans-serif", 12.0 / k.max(0.5)));
		let _ = ctx.fill_text(&node.name, label_x, node.y + 3.0 / k.max(0.5));

		if let Some(roles) = &node.roles_line {
			ctx.set_fill_style_str(&format!("rgba({}, {})", EDGE_COLOR, alpha * 0.9));
			ctx.set_font(&format!("{}px sans-serif", 10.0 / k.max(0.5)));
			let _ = ctx.fill_text(
				&format!("roles: {}", roles),
				label_x,
				node.y + 16.0 / k.max(0.5),
			);
		}
	}
}

/// Overview panel in the bottom-right corner: every node as a dot, plus the
/// rectangle of graph space currently on screen.
fn draw_minimap(state: &PolicyGraphState, ctx: &CanvasRenderingContext2d) {
	if state.nodes.is_empty() {
		return;
	}
	let panel_x = state.width - MINIMAP_WIDTH - MINIMAP_MARGIN;
	let panel_y = state.height - MINIMAP_HEIGHT - MINIMAP_MARGIN;

	ctx.set_fill_style_str("rgba(255, 255, 255, 0.9)");
	ctx.fill_rect(panel_x, panel_y, MINIMAP_WIDTH, MINIMAP_HEIGHT);
	ctx.set_stroke_style_str(GRID_COLOR);
	ctx.set_line_width(1.0);
	ctx.stroke_rect(panel_x, panel_y, MINIMAP_WIDTH, MINIMAP_HEIGHT);

	let first = &state.nodes[0];
	let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
	for node in &state.nodes {
		min_x = min_x.min(node.x);
		min_y = min_y.min(node.y);
		max_x = max_x.max(node.x);
		max_y = max_y.max(node.y);
	}
	min_x -= 40.0;
	min_y -= 40.0;
	max_x += 40.0;
	max_y += 40.0;

	let scale = ((MINIMAP_WIDTH - MINIMAP_PADDING * 2.0) / (max_x - min_x))
		.min((MINIMAP_HEIGHT - MINIMAP_PADDING * 2.0) / (max_y - min_y));
	let to_panel = |wx: f64, wy: f64| {
		(
			panel_x + MINIMAP_PADDING + (wx - min_x) * scale,
			panel_y + MINIMAP_PADDING + (wy - min_y) * scale,
		)
	};

	for node in &state.nodes {
		let (px, py) = to_panel(node.x, node.y);
		ctx.begin_path();
		let _ = ctx.arc(px, py, 2.0, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.color);
		ctx.fill();
	}

	// Viewport rectangle, clipped to the panel so deep zooms stay tidy.
	let (vx0, vy0) = state.screen_to_graph(0.0, 0.0);
	let (vx1, vy1) = state.screen_to_graph(state.width, state.height);
	let (px0, py0) = to_panel(vx0, vy0);
	let (px1, py1) = to_panel(vx1, vy1);

	ctx.save();
	ctx.begin_path();
	ctx.rect(panel_x, panel_y, MINIMAP_WIDTH, MINIMAP_HEIGHT);
	ctx.clip();
	ctx.set_stroke_style_str(&format!("rgba({}, 0.8)", EDGE_COLOR));
	ctx.stroke_rect(px0, py0, px1 - px0, py1 - py0);
	ctx.restore();
}
