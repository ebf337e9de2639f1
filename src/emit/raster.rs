use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use log::debug;
use resvg::tiny_skia::{Color, Pixmap, Transform};
use resvg::usvg;

use super::svg::render_svg;
use crate::config::{MAX_CANVAS_SIDE, RenderConfig};
use crate::error::{ExportError, Result};
use crate::graph::Scene;

/// Encodings produced by [`render_raster`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterFormat {
	/// Lossless PNG.
	Png,
	/// JPEG at [`RenderConfig::jpeg_quality`].
	Jpeg,
}

/// Rasterize a scene onto a white canvas and encode it.
///
/// Both formats share one draw sequence and differ only in the final
/// encoding step.
pub fn render_raster(scene: &Scene, format: RasterFormat, config: &RenderConfig) -> Result<Vec<u8>> {
	let pixmap = rasterize(scene, config)?;
	let bytes = match format {
		RasterFormat::Png => pixmap
			.encode_png()
			.map_err(|err| ExportError::Png(err.to_string()))?,
		RasterFormat::Jpeg => encode_jpeg(&pixmap, config.jpeg_quality)?,
	};
	debug!("encoded {format:?}: {} bytes", bytes.len());
	Ok(bytes)
}

pub(crate) fn rasterize(scene: &Scene, config: &RenderConfig) -> Result<Pixmap> {
	let (width, height) = (config.width, config.height);
	if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
		return Err(ExportError::Surface { width, height });
	}
	let svg = render_svg(scene, config);

	let mut options = usvg::Options::default();
	options.font_family = config.font_family.clone();
	options.fontdb_mut().load_system_fonts();
	let tree = usvg::Tree::from_str(&svg, &options)?;

	let mut pixmap = Pixmap::new(width, height).ok_or(ExportError::Surface { width, height })?;
	pixmap.fill(Color::WHITE);
	resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());
	Ok(pixmap)
}

// The canvas is filled opaque white first, so premultiplied RGBA equals
// straight RGB once alpha is dropped.
fn encode_jpeg(pixmap: &Pixmap, quality: u8) -> Result<Vec<u8>> {
	let rgb: Vec<u8> = pixmap
		.data()
		.chunks_exact(4)
		.flat_map(|px| [px[0], px[1], px[2]])
		.collect();

	let mut bytes = Vec::new();
	JpegEncoder::new_with_quality(&mut bytes, quality).write_image(
		&rgb,
		pixmap.width(),
		pixmap.height(),
		ExtendedColorType::Rgb8,
	)?;
	Ok(bytes)
}
