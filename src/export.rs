use std::fmt;
use std::str::FromStr;

use log::info;

use crate::config::RenderConfig;
#[cfg(not(target_arch = "wasm32"))]
use crate::emit::{RasterFormat, render_raster};
use crate::emit::{render_svg, render_tikz};
use crate::error::{ExportError, Result};
use crate::graph::{Graph, Scene, resolve};

/// Output formats a graph can be exported to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
	/// `image/png`.
	Png,
	/// `image/jpeg`.
	Jpeg,
	/// TikZ markup as `text/plain`.
	Tikz,
	/// `image/svg+xml`.
	Svg,
}

impl ExportFormat {
	/// Every format, in CLI listing order.
	pub const ALL: [ExportFormat; 4] = [
		ExportFormat::Png,
		ExportFormat::Jpeg,
		ExportFormat::Tikz,
		ExportFormat::Svg,
	];

	/// MIME type of the exported bytes.
	pub fn mime_type(self) -> &'static str {
		match self {
			ExportFormat::Png => "image/png",
			ExportFormat::Jpeg => "image/jpeg",
			ExportFormat::Tikz => "text/plain",
			ExportFormat::Svg => "image/svg+xml",
		}
	}

	/// File extension, without the dot.
	pub fn extension(self) -> &'static str {
		match self {
			ExportFormat::Png => "png",
			ExportFormat::Jpeg => "jpg",
			ExportFormat::Tikz => "tex",
			ExportFormat::Svg => "svg",
		}
	}

	/// Suggested download name for graph `graph_id`.
	pub fn file_name(self, graph_id: &str) -> String {
		format!("{graph_id}.{}", self.extension())
	}
}

impl fmt::Display for ExportFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			ExportFormat::Png => "png",
			ExportFormat::Jpeg => "jpeg",
			ExportFormat::Tikz => "tikz",
			ExportFormat::Svg => "svg",
		})
	}
}

impl FromStr for ExportFormat {
	type Err = ExportError;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_ascii_lowercase().as_str() {
			"png" => Ok(ExportFormat::Png),
			"jpg" | "jpeg" => Ok(ExportFormat::Jpeg),
			"tikz" | "tex" => Ok(ExportFormat::Tikz),
			"svg" => Ok(ExportFormat::Svg),
			_ => Err(ExportError::UnknownFormat(s.into())),
		}
	}
}

/// Rendered output plus what a transport needs to deliver it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
	/// `<graph_id>.<ext>`.
	pub file_name: String,
	/// MIME type of `bytes`.
	pub mime_type: &'static str,
	/// Encoded image or UTF-8 markup.
	pub bytes: Vec<u8>,
}

/// Render `graph` in `format`.
///
/// `graph_id` only names the output; it never affects rendering.
pub fn export(
	graph_id: &str,
	graph: &Graph,
	format: ExportFormat,
	config: &RenderConfig,
) -> Result<Export> {
	graph.validate()?;
	let scene = resolve(graph);
	let bytes = match format {
		ExportFormat::Tikz => render_tikz(&scene, config).into_bytes(),
		ExportFormat::Svg => render_svg(&scene, config).into_bytes(),
		ExportFormat::Png | ExportFormat::Jpeg => raster(&scene, format, config)?,
	};
	info!(
		"exported graph {graph_id} as {format}: {} nodes, {} edges drawn, {} bytes",
		scene.discs().len(),
		scene.strokes().len(),
		bytes.len()
	);
	Ok(Export {
		file_name: format.file_name(graph_id),
		mime_type: format.mime_type(),
		bytes,
	})
}

#[cfg(not(target_arch = "wasm32"))]
fn raster(scene: &Scene, format: ExportFormat, config: &RenderConfig) -> Result<Vec<u8>> {
	let raster_format = match format {
		ExportFormat::Jpeg => RasterFormat::Jpeg,
		_ => RasterFormat::Png,
	};
	render_raster(scene, raster_format, config)
}

#[cfg(target_arch = "wasm32")]
fn raster(_scene: &Scene, format: ExportFormat, _config: &RenderConfig) -> Result<Vec<u8>> {
	Err(ExportError::Unsupported(format))
}
