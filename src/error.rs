use thiserror::Error;

use crate::export::ExportFormat;

/// Result alias used across the crate.
pub type Result<T, E = ExportError> = std::result::Result<T, E>;

/// Failures surfaced to callers of the export pipeline.
///
/// Structural gaps in a graph (missing collections, dangling edges, absent
/// labels) never produce one of these; they are absorbed by the resolver.
#[derive(Debug, Error)]
pub enum ExportError {
	/// Input was not a graph document at all.
	#[error("invalid graph document: {0}")]
	Json(#[from] serde_json::Error),

	/// A graph built in code carries coordinates no backend can draw.
	#[error("invalid graph: {0}")]
	InvalidGraph(String),

	/// The generated SVG was rejected by the rasterizer.
	#[cfg(not(target_arch = "wasm32"))]
	#[error("failed to parse generated SVG: {0}")]
	Svg(#[from] resvg::usvg::Error),

	/// The drawing surface could not be allocated.
	#[error("failed to allocate {width}x{height} drawing surface")]
	Surface {
		/// Requested width in pixels.
		width: u32,
		/// Requested height in pixels.
		height: u32,
	},

	/// PNG encoding failed.
	#[error("failed to encode PNG output: {0}")]
	Png(String),

	/// JPEG encoding failed.
	#[cfg(not(target_arch = "wasm32"))]
	#[error("failed to encode JPEG output: {0}")]
	Jpeg(#[from] image::ImageError),

	/// The format has no backend on this target.
	#[error("{0} export is not available on this target")]
	Unsupported(ExportFormat),

	/// No graph is stored under the requested id.
	#[error("graph not found: {0}")]
	NotFound(String),

	/// A format name did not match any known export format.
	#[error("unknown export format `{0}` (expected png, jpg, tikz or svg)")]
	UnknownFormat(String),

	/// Reading or writing a file failed.
	#[error(transparent)]
	Io(#[from] std::io::Error),
}
