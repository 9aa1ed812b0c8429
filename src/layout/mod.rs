//! Layout invocation: translates a word catalog into the external renderer's
//! configuration and hands it over.
//!
//! The renderer (wordcloud2.js in the browser) decides where every word goes
//! and draws straight to pixels. Nothing here computes geometry; positions
//! are recovered afterwards by [`crate::scan`] and [`crate::resolve`].

mod options;
#[cfg(target_arch = "wasm32")]
mod wordcloud2;

pub use options::{canvas_size, weight_scale, CloudOptions, RenderRequest};
#[cfg(target_arch = "wasm32")]
pub use wordcloud2::CanvasRasterizer;

use crate::error::Result;
use crate::raster::Raster;

/// A black-box word-cloud renderer drawing onto a pixel surface.
pub trait Rasterizer {
    /// Size the surface to `request.canvas` and start drawing.
    ///
    /// Drawing may finish asynchronously; callers must not assume the
    /// surface is complete when this returns.
    fn draw(&mut self, request: &RenderRequest) -> Result<()>;

    /// Read back whatever is on the surface now.
    fn read_pixels(&self) -> Result<Raster>;
}
