//! Z-ordered draw operations shared by the pixel backends.
//!
//! Strokes run center to center and rely on discs painted after them to
//! hide the overlap, so the layer order below is load-bearing.

use super::scene::{Point, Scene};

/// Line and arrowhead color.
pub const INK: &str = "#000000";
/// Disc fill (CSS `lightblue`).
pub const DISC_FILL: &str = "#add8e6";
/// Canvas background.
pub const BACKGROUND: &str = "#ffffff";
/// Width of edge lines and disc outlines.
pub const LINE_WIDTH: f64 = 2.0;
/// Node label font size, bold.
pub const NODE_LABEL_FONT_SIZE: f64 = 14.0;
/// Edge label font size.
pub const EDGE_LABEL_FONT_SIZE: f64 = 12.0;
/// Opacity of the white box behind edge labels.
pub const EDGE_LABEL_BACKGROUND_OPACITY: f64 = 0.8;
/// Corner radius of the edge label box.
pub const EDGE_LABEL_CORNER_RADIUS: f64 = 3.0;

const EDGE_LABEL_PADDING: f64 = 3.0;
// Average glyph advance relative to font size, for sizing label boxes.
const GLYPH_ADVANCE: f64 = 0.6;

/// Paint layer of a [`DrawOp`], in paint order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
	/// Edge lines.
	Strokes,
	/// Filled arrowheads.
	Arrowheads,
	/// Node circles.
	Discs,
	/// Text inside discs.
	NodeLabels,
	/// Edge labels with their background boxes.
	EdgeLabels,
}

/// One primitive to paint.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp<'a> {
	/// Black line of [`LINE_WIDTH`].
	Line {
		/// Start point.
		from: Point,
		/// End point.
		to: Point,
	},
	/// Filled black triangle.
	Arrowhead([Point; 3]),
	/// Light-blue disc with a black outline.
	Disc {
		/// Center.
		center: Point,
		/// Radius.
		radius: f64,
	},
	/// Bold text centered on a disc.
	NodeLabel {
		/// Text center.
		at: Point,
		/// Text.
		text: &'a str,
	},
	/// Text centered on an edge midpoint over a translucent box.
	EdgeLabel {
		/// Text center.
		at: Point,
		/// Text.
		text: &'a str,
	},
}

impl DrawOp<'_> {
	/// Layer this op is painted in.
	pub fn layer(&self) -> Layer {
		match self {
			DrawOp::Line { .. } => Layer::Strokes,
			DrawOp::Arrowhead(_) => Layer::Arrowheads,
			DrawOp::Disc { .. } => Layer::Discs,
			DrawOp::NodeLabel { .. } => Layer::NodeLabels,
			DrawOp::EdgeLabel { .. } => Layer::EdgeLabels,
		}
	}
}

/// Background box of an edge label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelBox {
	/// Left edge.
	pub x: f64,
	/// Top edge.
	pub y: f64,
	/// Box width.
	pub width: f64,
	/// Box height.
	pub height: f64,
}

impl LabelBox {
	/// Box centered on `at` sized for `text` at [`EDGE_LABEL_FONT_SIZE`].
	pub fn around(at: Point, text: &str) -> Self {
		let width = text.chars().count() as f64 * EDGE_LABEL_FONT_SIZE * GLYPH_ADVANCE
			+ 2.0 * EDGE_LABEL_PADDING;
		let height = EDGE_LABEL_FONT_SIZE + 2.0 * EDGE_LABEL_PADDING;
		Self {
			x: at.x - width / 2.0,
			y: at.y - height / 2.0,
			width,
			height,
		}
	}
}

/// Flatten a scene into paint order: lines, arrowheads, discs, node labels,
/// edge labels.
pub fn draw_list(scene: &Scene) -> Vec<DrawOp<'_>> {
	let strokes = scene.strokes();
	let discs = scene.discs();
	let mut ops = Vec::with_capacity(strokes.len() * 3 + discs.len() * 2);

	ops.extend(strokes.iter().map(|s| DrawOp::Line {
		from: s.from,
		to: s.to,
	}));
	ops.extend(
		strokes
			.iter()
			.filter_map(|s| s.arrowhead.as_ref())
			.map(|head| DrawOp::Arrowhead(head.triangle())),
	);
	ops.extend(discs.iter().map(|d| DrawOp::Disc {
		center: d.center,
		radius: d.radius,
	}));
	ops.extend(discs.iter().map(|d| DrawOp::NodeLabel {
		at: d.center,
		text: &d.label,
	}));
	ops.extend(
		strokes
			.iter()
			.filter_map(|s| s.label.as_ref())
			.map(|label| DrawOp::EdgeLabel {
				at: label.at,
				text: &label.text,
			}),
	);
	ops
}
