use serde::{Deserialize, Serialize};

/// Width of the fixed drawing canvas, in scene units.
pub const CANVAS_WIDTH: u32 = 1000;
/// Height of the fixed drawing canvas, in scene units.
pub const CANVAS_HEIGHT: u32 = 700;
/// Largest accepted canvas side, in pixels.
pub const MAX_CANVAS_SIDE: u32 = 16384;
/// JPEG quality used unless overridden.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;
/// Font family requested for node and edge labels.
pub const DEFAULT_FONT_FAMILY: &str = "DejaVu Sans";

/// Output settings shared by every backend.
///
/// Scene coordinates map 1:1 onto a `width` x `height` canvas. The TikZ
/// backend uses `height` to flip the y axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(clap::Args))]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
	/// Canvas width in pixels.
	#[cfg_attr(
		not(target_arch = "wasm32"),
		arg(long, global = true, default_value_t = CANVAS_WIDTH, value_parser = clap::value_parser!(u32).range(1..=MAX_CANVAS_SIDE as i64))
	)]
	pub width: u32,
	/// Canvas height in pixels.
	#[cfg_attr(
		not(target_arch = "wasm32"),
		arg(long, global = true, default_value_t = CANVAS_HEIGHT, value_parser = clap::value_parser!(u32).range(1..=MAX_CANVAS_SIDE as i64))
	)]
	pub height: u32,
	/// JPEG encoder quality, 1-100.
	#[cfg_attr(
		not(target_arch = "wasm32"),
		arg(long, global = true, default_value_t = DEFAULT_JPEG_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))
	)]
	pub jpeg_quality: u8,
	/// Font family for labels.
	#[cfg_attr(not(target_arch = "wasm32"), arg(long, global = true, default_value = DEFAULT_FONT_FAMILY))]
	pub font_family: String,
}

impl Default for RenderConfig {
	fn default() -> Self {
		Self {
			width: CANVAS_WIDTH,
			height: CANVAS_HEIGHT,
			jpeg_quality: DEFAULT_JPEG_QUALITY,
			font_family: DEFAULT_FONT_FAMILY.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[cfg(not(target_arch = "wasm32"))]
	#[derive(clap::Parser)]
	struct Flags {
		#[command(flatten)]
		render: RenderConfig,
	}

	#[cfg(not(target_arch = "wasm32"))]
	#[test]
	fn canvas_flags_are_bounded() {
		use clap::Parser;

		let ok = Flags::try_parse_from(["graph-export", "--width", "16384", "--height", "1"]).unwrap();
		assert_eq!((ok.render.width, ok.render.height), (MAX_CANVAS_SIDE, 1));
		assert!(Flags::try_parse_from(["graph-export", "--width", "100000"]).is_err());
		assert!(Flags::try_parse_from(["graph-export", "--height", "0"]).is_err());
		assert!(Flags::try_parse_from(["graph-export", "--jpeg-quality", "0"]).is_err());
	}

	#[test]
	fn partial_config_fills_defaults() {
		let cfg: RenderConfig = serde_json::from_str(r#"{"jpegQuality": 70}"#).unwrap();
		assert_eq!(cfg.jpeg_quality, 70);
		assert_eq!(cfg.width, CANVAS_WIDTH);
		assert_eq!(cfg.height, CANVAS_HEIGHT);
		assert_eq!(cfg.font_family, DEFAULT_FONT_FAMILY);
	}
}
