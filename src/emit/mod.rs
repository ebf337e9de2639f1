#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(not(target_arch = "wasm32"))]
mod raster;
mod svg;
mod tikz;

#[cfg(target_arch = "wasm32")]
pub use canvas::{init_web_logging, paint, render_to_canvas};
#[cfg(not(target_arch = "wasm32"))]
pub use raster::{RasterFormat, render_raster};
pub use svg::render_svg;
pub use tikz::render_tikz;
