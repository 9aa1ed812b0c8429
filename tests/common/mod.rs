//! Common test utilities.
//!
//! Provides a stand-in for the browser renderer that paints each word as a
//! solid block in its assigned color, so the scan/resolve pipeline can be
//! driven end to end without a canvas.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use xlcloud::color::Rgb;
use xlcloud::error::Result;
use xlcloud::layout::{RenderRequest, Rasterizer};
use xlcloud::raster::Raster;
use xlcloud::types::Bounds;

// Re-export fixtures for convenience
pub use super::fixtures::*;

/// Where the block rasterizer put a word.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBlock {
    pub word: String,
    pub color: String,
    pub bounds: Bounds,
}

/// Paints words left to right, top to bottom, one solid rectangle each.
///
/// Block width is the word's font size (weight × scale) and the height is
/// half of it, with a fixed gap between blocks. Words that do not fit are
/// skipped, like an out-of-bounds word in a real layout.
#[derive(Debug, Default)]
pub struct BlockRasterizer {
    surface: Option<Raster>,
    pub placed: Vec<PlacedBlock>,
    pub draws: usize,
    /// Stop after painting this many words, simulating an unfinished render.
    pub paint_limit: Option<usize>,
}

pub const GAP: u32 = 6;

impl BlockRasterizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_paint_limit(limit: usize) -> Self {
        Self {
            paint_limit: Some(limit),
            ..Self::default()
        }
    }

    /// Centre of the block painted for `word`, if any.
    #[must_use]
    pub fn centre_of(&self, word: &str) -> Option<(f64, f64)> {
        self.placed.iter().find(|b| b.word == word).map(|b| {
            (
                f64::from(b.bounds.min_x + b.bounds.max_x) / 2.0,
                f64::from(b.bounds.min_y + b.bounds.max_y) / 2.0,
            )
        })
    }
}

impl Rasterizer for BlockRasterizer {
    fn draw(&mut self, request: &RenderRequest) -> Result<()> {
        let mut raster = Raster::transparent(request.canvas.width, request.canvas.height)?;
        self.placed.clear();
        self.draws += 1;

        let (mut x, mut y, mut line_h) = (GAP, GAP, 0u32);
        for (i, (word, weight)) in request.options.list.iter().enumerate() {
            if self.paint_limit.is_some_and(|limit| i >= limit) {
                break;
            }
            let w = request.font_size(f64::from(*weight)).round() as u32;
            let h = (w / 2).max(1);
            if x + w + GAP > request.canvas.width {
                x = GAP;
                y += line_h + GAP;
                line_h = 0;
            }
            if y + h + GAP > request.canvas.height {
                continue;
            }
            let color = request.color_for(word);
            let rgb: Rgb = color.parse()?;
            raster.fill_rect(x, y, w, h, [rgb.r, rgb.g, rgb.b, 255]);
            self.placed.push(PlacedBlock {
                word: word.clone(),
                color,
                bounds: Bounds {
                    min_x: x,
                    max_x: x + w - 1,
                    min_y: y,
                    max_y: y + h - 1,
                },
            });
            x += w + GAP;
            line_h = line_h.max(h);
        }

        self.surface = Some(raster);
        Ok(())
    }

    fn read_pixels(&self) -> Result<Raster> {
        match &self.surface {
            Some(raster) => Ok(raster.clone()),
            None => Raster::transparent(0, 0),
        }
    }
}

/// A canvas with one opaque rectangle per `(color, x, y, w, h)`.
#[must_use]
pub fn raster_with_blocks(width: u32, height: u32, blocks: &[(Rgb, u32, u32, u32, u32)]) -> Raster {
    let mut raster = Raster::transparent(width, height).unwrap();
    for &(rgb, x, y, w, h) in blocks {
        raster.fill_rect(x, y, w, h, [rgb.r, rgb.g, rgb.b, 255]);
    }
    raster
}
