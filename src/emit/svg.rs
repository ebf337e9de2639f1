use log::debug;

use crate::config::RenderConfig;
use crate::graph::{
	BACKGROUND, DISC_FILL, DrawOp, EDGE_LABEL_BACKGROUND_OPACITY, EDGE_LABEL_CORNER_RADIUS,
	EDGE_LABEL_FONT_SIZE, INK, LINE_WIDTH, LabelBox, NODE_LABEL_FONT_SIZE, Point, Scene,
	draw_list,
};

/// Paint a scene as a standalone SVG document of the configured size.
///
/// Elements appear in draw-list order, so later elements cover earlier ones
/// exactly as on a raster canvas.
pub fn render_svg(scene: &Scene, config: &RenderConfig) -> String {
	let (w, h) = (config.width, config.height);
	let font = escape_xml(&config.font_family);
	let mut svg = format!(
		"<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
	);
	svg.push_str(&format!(
		"  <rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"{BACKGROUND}\"/>\n"
	));

	for op in draw_list(scene) {
		match op {
			DrawOp::Line { from, to } => svg.push_str(&format!(
				"  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{INK}\" stroke-width=\"{LINE_WIDTH}\"/>\n",
				num(from.x),
				num(from.y),
				num(to.x),
				num(to.y)
			)),
			DrawOp::Arrowhead(points) => svg.push_str(&format!(
				"  <polygon points=\"{}\" fill=\"{INK}\"/>\n",
				polygon_points(&points)
			)),
			DrawOp::Disc { center, radius } => svg.push_str(&format!(
				"  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{DISC_FILL}\" stroke=\"{INK}\" stroke-width=\"{LINE_WIDTH}\"/>\n",
				num(center.x),
				num(center.y),
				num(radius)
			)),
			DrawOp::NodeLabel { at, text } => svg.push_str(&text_element(
				at,
				text,
				&font,
				NODE_LABEL_FONT_SIZE,
				" font-weight=\"bold\"",
			)),
			DrawOp::EdgeLabel { at, text } => {
				let b = LabelBox::around(at, text);
				svg.push_str(&format!(
					"  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{EDGE_LABEL_CORNER_RADIUS}\" fill=\"{BACKGROUND}\" fill-opacity=\"{EDGE_LABEL_BACKGROUND_OPACITY}\"/>\n",
					num(b.x),
					num(b.y),
					num(b.width),
					num(b.height)
				));
				svg.push_str(&text_element(at, text, &font, EDGE_LABEL_FONT_SIZE, ""));
			}
		}
	}

	svg.push_str("</svg>\n");
	debug!(
		"rendered svg: {} discs, {} strokes, {} bytes",
		scene.discs().len(),
		scene.strokes().len(),
		svg.len()
	);
	svg
}

fn text_element(at: Point, text: &str, font: &str, size: f64, extra: &str) -> String {
	format!(
		"  <text x=\"{}\" y=\"{}\" font-family=\"{font}\" font-size=\"{size}\"{extra} fill=\"{INK}\" text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>\n",
		num(at.x),
		num(at.y),
		escape_xml(text)
	)
}

fn polygon_points(points: &[Point]) -> String {
	points
		.iter()
		.map(|p| format!("{},{}", num(p.x), num(p.y)))
		.collect::<Vec<_>>()
		.join(" ")
}

// Two decimals is well below a pixel; trailing zeros are trimmed.
fn num(value: f64) -> String {
	let s = format!("{:.2}", value + 0.0);
	let s = s.trim_end_matches('0').trim_end_matches('.');
	if s == "-0" { "0".into() } else { s.into() }
}

fn escape_xml(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{Graph, resolve};

	#[test]
	fn numbers_are_compact() {
		assert_eq!(num(100.0), "100");
		assert_eq!(num(80.5), "80.5");
		assert_eq!(num(1.0 / 3.0), "0.33");
		assert_eq!(num(-0.0), "0");
		assert_eq!(num(-0.001), "0");
	}

	#[test]
	fn document_has_configured_size() {
		let svg = render_svg(&resolve(&Graph::new()), &RenderConfig::default());
		assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"1000\" height=\"700\""));
		assert!(svg.trim_end().ends_with("</svg>"));
	}

	#[test]
	fn elements_follow_paint_order() {
		let graph = Graph::new()
			.labeled_node(1, 0.0, 0.0, "A")
			.node(2, 100.0, 0.0)
			.labeled_edge(1, 2, "go");
		let svg = render_svg(&resolve(&graph), &RenderConfig::default());

		let pos = |needle: &str| svg.find(needle).unwrap();
		assert!(pos("<line") < pos("<polygon"));
		assert!(pos("<polygon") < pos("<circle"));
		assert!(svg.rfind("<circle").unwrap() < pos(">A</text>"));
		assert!(pos(">A</text>") < pos(">go</text>"));
		assert!(svg.contains("<polygon points=\"90,0 80,4 80,-4\""));
		assert!(svg.contains("<line x1=\"0\" y1=\"0\" x2=\"100\" y2=\"0\""));
	}

	#[test]
	fn labels_are_escaped() {
		let graph = Graph::new().labeled_node(1, 5.0, 5.0, "a<b & \"c\"");
		let svg = render_svg(&resolve(&graph), &RenderConfig::default());
		assert!(svg.contains(">a&lt;b &amp; &quot;c&quot;</text>"));
	}
}
