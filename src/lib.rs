//! Render positioned directed graphs to PNG, JPEG, SVG and TikZ.
//!
//! [`graph::resolve`] turns a [`Graph`] into a backend-agnostic
//! [`graph::Scene`]; the functions in [`emit`] turn a scene into output.
//! [`export`] ties the two together for a named graph.

use log::{LevelFilter, info};

mod config;
/// Backends turning a scene into output.
pub mod emit;
mod error;
mod export;
/// Graph model, geometry resolution and paint ordering.
pub mod graph;
mod store;

pub use config::{
	CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_FONT_FAMILY, DEFAULT_JPEG_QUALITY, MAX_CANVAS_SIDE,
	RenderConfig,
};
pub use error::{ExportError, Result};
pub use export::{Export, ExportFormat, export};
pub use graph::{Graph, GraphEdge, GraphNode, NodeId};
pub use store::{GraphStore, MemoryStore, export_stored, show_stored};

/// Initialize logging for the current target: the browser console on
/// wasm, stderr elsewhere.
pub fn init_logging(level: LevelFilter) {
	#[cfg(target_arch = "wasm32")]
	{
		let _ = console_log::init_with_level(level.to_level().unwrap_or(log::Level::Error));
		console_error_panic_hook::set_once();
	}
	#[cfg(not(target_arch = "wasm32"))]
	{
		let _ = simplelog::TermLogger::init(
			level,
			simplelog::Config::default(),
			simplelog::TerminalMode::Stderr,
			simplelog::ColorChoice::Auto,
		);
	}
	info!("Logging initialized");
}
