use std::collections::HashMap;

use log::debug;

use super::types::{Graph, GraphEdge, NodeId};

/// Distance from the target center back to the arrowhead base.
///
/// Fixed regardless of `nodeRadius`; with a radius other than 25 the head
/// sits inside or outside the disc edge.
pub const ARROW_OFFSET: f64 = 20.0;
/// Length of the arrowhead from base to point.
pub const ARROW_HEAD_LENGTH: f64 = 10.0;
/// Full width of the arrowhead base.
pub const ARROW_HEAD_WIDTH: f64 = 8.0;

/// A point in scene space (canvas units, y down).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Arithmetic midpoint of `self` and `other`.
	pub fn midpoint(self, other: Point) -> Point {
		Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
	}

	fn offset(self, dx: f64, dy: f64) -> Point {
		Point::new(self.x + dx, self.y + dy)
	}
}

/// A rendered node.
#[derive(Clone, Debug, PartialEq)]
pub struct Disc {
	/// Id of the node this disc draws.
	pub id: NodeId,
	/// Disc center.
	pub center: Point,
	/// Disc radius.
	pub radius: f64,
	/// Text centered in the disc.
	pub label: String,
}

/// Filled triangular arrowhead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrowhead {
	/// Base center, `ARROW_OFFSET` before the target center.
	pub tip: Point,
	/// Pointed end, `ARROW_HEAD_LENGTH` past `tip`.
	pub forward: Point,
	/// Base corners on either side of `tip`.
	pub wings: [Point; 2],
}

impl Arrowhead {
	/// Triangle corners in paint order.
	pub fn triangle(&self) -> [Point; 3] {
		[self.forward, self.wings[0], self.wings[1]]
	}
}

/// Text anchored on an edge.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelAnchor {
	/// Anchor point, centered under the text.
	pub at: Point,
	/// Label text.
	pub text: String,
}

/// A rendered edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
	/// Index into [`Scene::discs`] of the source disc.
	pub source: usize,
	/// Index into [`Scene::discs`] of the target disc.
	pub target: usize,
	/// Line start, the source center.
	pub from: Point,
	/// Line end, the target center. Discs painted later hide the overlap.
	pub to: Point,
	/// `None` when both endpoints coincide.
	pub arrowhead: Option<Arrowhead>,
	/// Midpoint label, if the edge has one.
	pub label: Option<LabelAnchor>,
}

impl Stroke {
	/// True when the stroke has no direction.
	pub fn is_degenerate(&self) -> bool {
		self.arrowhead.is_none()
	}
}

/// Backend-agnostic geometry for one graph.
///
/// Built only by [`resolve`] and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	discs: Vec<Disc>,
	strokes: Vec<Stroke>,
}

impl Scene {
	/// One disc per node, in node order.
	pub fn discs(&self) -> &[Disc] {
		&self.discs
	}

	/// One stroke per edge whose endpoints both exist, in edge order.
	pub fn strokes(&self) -> &[Stroke] {
		&self.strokes
	}

	/// Disc drawn at the source end of `stroke`.
	pub fn source_of(&self, stroke: &Stroke) -> &Disc {
		&self.discs[stroke.source]
	}

	/// Disc drawn at the target end of `stroke`.
	pub fn target_of(&self, stroke: &Stroke) -> &Disc {
		&self.discs[stroke.target]
	}

	/// True when there is nothing to draw.
	pub fn is_empty(&self) -> bool {
		self.discs.is_empty()
	}
}

/// Turn a graph into drawable geometry.
///
/// Every node becomes a disc. Edges naming an id absent from `graph.nodes`
/// are dropped. When ids repeat, edges attach to the first node carrying
/// the id.
pub fn resolve(graph: &Graph) -> Scene {
	let mut id_to_idx: HashMap<&NodeId, usize> = HashMap::with_capacity(graph.nodes.len());
	for (i, node) in graph.nodes.iter().enumerate() {
		id_to_idx.entry(&node.id).or_insert(i);
	}

	let discs: Vec<Disc> = graph
		.nodes
		.iter()
		.map(|node| Disc {
			id: node.id.clone(),
			center: Point::new(node.x, node.y),
			radius: graph.node_radius,
			label: node.display_label(),
		})
		.collect();

	let mut strokes = Vec::with_capacity(graph.edges.len());
	for edge in &graph.edges {
		if let (Some(&src), Some(&tgt)) = (id_to_idx.get(&edge.source), id_to_idx.get(&edge.target))
		{
			strokes.push(stroke_between(edge, src, tgt, &discs));
		} else {
			debug!(
				"skipping edge {} -> {}: endpoint not in graph",
				edge.source, edge.target
			);
		}
	}

	Scene { discs, strokes }
}

fn stroke_between(edge: &GraphEdge, src: usize, tgt: usize, discs: &[Disc]) -> Stroke {
	let (from, to) = (discs[src].center, discs[tgt].center);
	Stroke {
		source: src,
		target: tgt,
		from,
		to,
		arrowhead: arrowhead(from, to),
		label: edge.label.as_ref().map(|text| LabelAnchor {
			at: from.midpoint(to),
			text: text.clone(),
		}),
	}
}

fn arrowhead(from: Point, to: Point) -> Option<Arrowhead> {
	let (dx, dy) = (to.x - from.x, to.y - from.y);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist == 0.0 {
		return None;
	}

	let (ux, uy) = (dx / dist, dy / dist);
	let tip = to.offset(-ux * ARROW_OFFSET, -uy * ARROW_OFFSET);
	let forward = tip.offset(ux * ARROW_HEAD_LENGTH, uy * ARROW_HEAD_LENGTH);
	let (px, py) = (-uy * ARROW_HEAD_WIDTH * 0.5, ux * ARROW_HEAD_WIDTH * 0.5);
	Some(Arrowhead {
		tip,
		forward,
		wings: [tip.offset(px, py), tip.offset(-px, -py)],
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::DEFAULT_NODE_RADIUS;

	fn assert_close(actual: Point, expected: Point) {
		assert!(
			(actual.x - expected.x).abs() < 1e-9 && (actual.y - expected.y).abs() < 1e-9,
			"expected {expected:?}, got {actual:?}"
		);
	}

	fn assert_finite(p: Point) {
		assert!(p.x.is_finite() && p.y.is_finite(), "non-finite point {p:?}");
	}

	#[test]
	fn every_node_becomes_a_disc() {
		let graph = Graph::new()
			.labeled_node(1, 100.0, 100.0, "A")
			.node("two", 200.0, 50.0)
			.node(3, 10.0, 10.0)
			.edge(1, "missing");
		let scene = resolve(&graph);

		assert_eq!(scene.discs().len(), graph.nodes.len());
		let labels: Vec<&str> = scene.discs().iter().map(|d| d.label.as_str()).collect();
		assert_eq!(labels, ["A", "two", "3"]);
		assert!(scene.discs().iter().all(|d| d.radius == DEFAULT_NODE_RADIUS));
		assert_eq!(scene.discs()[0].center, Point::new(100.0, 100.0));
	}

	#[test]
	fn radius_applies_to_all_discs() {
		let graph = Graph::new()
			.node(1, 0.0, 0.0)
			.node(2, 10.0, 0.0)
			.with_node_radius(40.0);
		assert!(resolve(&graph).discs().iter().all(|d| d.radius == 40.0));
	}

	#[test]
	fn dangling_edges_are_dropped() {
		let graph = Graph::new()
			.node(1, 0.0, 0.0)
			.node(2, 100.0, 0.0)
			.edge(1, 2)
			.edge(1, 9)
			.edge(9, 2)
			.edge("1", 2)
			.edge(2, 1);
		let scene = resolve(&graph);

		assert_eq!(scene.strokes().len(), 2);
		for stroke in scene.strokes() {
			let ids = [&scene.source_of(stroke).id, &scene.target_of(stroke).id];
			for id in ids {
				assert!(graph.nodes.iter().any(|n| &n.id == id));
			}
		}
	}

	#[test]
	fn arrowhead_sits_twenty_units_before_target() {
		let graph = Graph::new().node(1, 0.0, 0.0).node(2, 100.0, 0.0).edge(1, 2);
		let scene = resolve(&graph);
		let stroke = &scene.strokes()[0];
		let head = stroke.arrowhead.unwrap();

		assert_eq!(stroke.from, Point::new(0.0, 0.0));
		assert_eq!(stroke.to, Point::new(100.0, 0.0));
		assert_close(head.tip, Point::new(80.0, 0.0));
		assert_close(head.forward, Point::new(90.0, 0.0));
		assert_close(head.wings[0], Point::new(80.0, 4.0));
		assert_close(head.wings[1], Point::new(80.0, -4.0));
	}

	#[test]
	fn arrow_offset_ignores_node_radius() {
		let graph = Graph::new()
			.node(1, 0.0, 0.0)
			.node(2, 0.0, 100.0)
			.edge(1, 2)
			.with_node_radius(60.0);
		let head = resolve(&graph).strokes()[0].arrowhead.unwrap();
		assert_close(head.tip, Point::new(0.0, 80.0));
		assert_close(head.forward, Point::new(0.0, 90.0));
	}

	#[test]
	fn diagonal_arrowhead_follows_direction() {
		let graph = Graph::new().node(1, 0.0, 0.0).node(2, 30.0, 40.0).edge(1, 2);
		let head = resolve(&graph).strokes()[0].arrowhead.unwrap();
		// unit vector (0.6, 0.8)
		assert_close(head.tip, Point::new(30.0 - 12.0, 40.0 - 16.0));
		assert_close(head.forward, Point::new(24.0, 32.0));
		assert_close(head.wings[0], Point::new(18.0 - 3.2, 24.0 + 2.4));
		assert_close(head.wings[1], Point::new(18.0 + 3.2, 24.0 - 2.4));
	}

	#[test]
	fn zero_length_edge_has_no_arrowhead() {
		let graph = Graph::new()
			.node(1, 50.0, 50.0)
			.node(2, 50.0, 50.0)
			.labeled_edge(1, 2, "same")
			.edge(1, 1);
		let scene = resolve(&graph);

		assert_eq!(scene.strokes().len(), 2);
		for stroke in scene.strokes() {
			assert!(stroke.is_degenerate());
			assert_eq!(stroke.from, stroke.to);
			assert_finite(stroke.from);
			assert_finite(stroke.to);
		}
		assert_eq!(
			scene.strokes()[0].label.as_ref().unwrap().at,
			Point::new(50.0, 50.0)
		);
	}

	#[test]
	fn label_anchor_is_the_midpoint() {
		let graph = Graph::new()
			.node("a", 10.0, 20.0)
			.node("b", 31.0, -7.0)
			.labeled_edge("a", "b", "ab")
			.edge("b", "a");
		let scene = resolve(&graph);

		let label = scene.strokes()[0].label.as_ref().unwrap();
		assert_eq!(label.text, "ab");
		assert_eq!(label.at, Point::new(20.5, 6.5));
		assert!(scene.strokes()[1].label.is_none());
	}

	#[test]
	fn parallel_edges_are_kept() {
		let graph = Graph::new()
			.node(1, 0.0, 0.0)
			.node(2, 10.0, 10.0)
			.edge(1, 2)
			.edge(1, 2);
		let scene = resolve(&graph);
		assert_eq!(scene.strokes().len(), 2);
		assert_eq!(scene.strokes()[0], scene.strokes()[1]);
	}

	#[test]
	fn duplicate_ids_attach_to_first_node() {
		let graph = Graph::new()
			.node(1, 0.0, 0.0)
			.node(1, 500.0, 500.0)
			.node(2, 100.0, 0.0)
			.edge(2, 1);
		let scene = resolve(&graph);
		assert_eq!(scene.discs().len(), 3);
		assert_eq!(scene.strokes()[0].to, Point::new(0.0, 0.0));
	}

	#[test]
	fn resolve_is_idempotent() {
		let graph = Graph::new()
			.labeled_node(1, 12.5, 40.0, "x")
			.node(2, 300.0, 410.0)
			.node(3, 700.0, 20.0)
			.labeled_edge(1, 2, "first")
			.edge(2, 3)
			.edge(3, 1);
		assert_eq!(resolve(&graph), resolve(&graph));
	}

	#[test]
	fn empty_graph_yields_empty_scene() {
		let scene = resolve(&Graph::new());
		assert!(scene.is_empty());
		assert!(scene.strokes().is_empty());
	}
}
