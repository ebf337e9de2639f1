use std::f64::consts::PI;

use log::{LevelFilter, debug};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::graph::{
	BACKGROUND, DISC_FILL, DrawOp, EDGE_LABEL_BACKGROUND_OPACITY, EDGE_LABEL_FONT_SIZE, INK,
	LINE_WIDTH, LabelBox, NODE_LABEL_FONT_SIZE, Scene, draw_list, resolve,
};
use crate::{Graph, init_logging};

/// Initialize console logging and the panic hook from JavaScript.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_web_logging() {
	init_logging(LevelFilter::Debug);
}

/// Parse `graph_json`, resolve it and paint it onto `canvas`.
#[wasm_bindgen(js_name = renderToCanvas)]
pub fn render_to_canvas(canvas: HtmlCanvasElement, graph_json: &str) -> Result<(), JsValue> {
	let graph = Graph::from_json(graph_json).map_err(|err| JsValue::from_str(&err.to_string()))?;
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
		.dyn_into()?;
	paint(
		&resolve(&graph),
		&ctx,
		canvas.width() as f64,
		canvas.height() as f64,
	)
}

/// Paint a scene with the 2D context API, in draw-list order.
pub fn paint(
	scene: &Scene,
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
) -> Result<(), JsValue> {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, width, height);
	ctx.set_line_dash(&js_sys::Array::new())?;
	ctx.set_line_width(LINE_WIDTH);
	ctx.set_stroke_style_str(INK);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	let ops = draw_list(scene);
	for op in &ops {
		match *op {
			DrawOp::Line { from, to } => {
				ctx.begin_path();
				ctx.move_to(from.x, from.y);
				ctx.line_to(to.x, to.y);
				ctx.stroke();
			}
			DrawOp::Arrowhead([a, b, c]) => {
				ctx.set_fill_style_str(INK);
				ctx.begin_path();
				ctx.move_to(a.x, a.y);
				ctx.line_to(b.x, b.y);
				ctx.line_to(c.x, c.y);
				ctx.close_path();
				ctx.fill();
			}
			DrawOp::Disc { center, radius } => {
				ctx.begin_path();
				ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
				ctx.set_fill_style_str(DISC_FILL);
				ctx.fill();
				ctx.stroke();
			}
			DrawOp::NodeLabel { at, text } => {
				ctx.set_fill_style_str(INK);
				ctx.set_font(&format!("bold {NODE_LABEL_FONT_SIZE}px sans-serif"));
				ctx.fill_text(text, at.x, at.y)?;
			}
			DrawOp::EdgeLabel { at, text } => {
				let b = LabelBox::around(at, text);
				ctx.set_global_alpha(EDGE_LABEL_BACKGROUND_OPACITY);
				ctx.set_fill_style_str(BACKGROUND);
				ctx.fill_rect(b.x, b.y, b.width, b.height);
				ctx.set_global_alpha(1.0);
				ctx.set_fill_style_str(INK);
				ctx.set_font(&format!("{EDGE_LABEL_FONT_SIZE}px sans-serif"));
				ctx.fill_text(text, at.x, at.y)?;
			}
		}
	}
	debug!("painted {} ops onto canvas", ops.len());
	Ok(())
}
