//! RGBA pixel buffers read back from a rendered word cloud.
//!
//! The layout matches canvas `ImageData`: row-major, four bytes per pixel,
//! no row padding.

use crate::error::{CloudError, Result};
use crate::types::Size;

/// Bytes per RGBA pixel.
const CHANNELS: usize = 4;

/// An owned RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

fn byte_len(width: u32, height: u32) -> Option<usize> {
    usize::try_from(width)
        .ok()?
        .checked_mul(usize::try_from(height).ok()?)?
        .checked_mul(CHANNELS)
}

impl Raster {
    /// Wrap an existing RGBA buffer, checking its length.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)
            .ok_or_else(|| CloudError::Raster(format!("{width}x{height} raster is too large")))?;
        if data.len() != expected {
            return Err(CloudError::Raster(format!(
                "expected {expected} bytes for a {width}x{height} RGBA raster, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A fully transparent raster.
    pub fn transparent(width: u32, height: u32) -> Result<Self> {
        let len = byte_len(width, height)
            .ok_or_else(|| CloudError::Raster(format!("{width}x{height} raster is too large")))?;
        Self::from_rgba(width, height, vec![0; len])
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let row = usize::try_from(y).ok()?;
        let col = usize::try_from(x).ok()?;
        let width = usize::try_from(self.width).ok()?;
        Some((row * width + col) * CHANNELS)
    }

    /// `[r, g, b, a]` at `(x, y)`, or `None` outside the raster.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let start = self.offset(x, y)?;
        let px = self.data.get(start..start + CHANNELS)?;
        Some([*px.first()?, *px.get(1)?, *px.get(2)?, *px.get(3)?])
    }

    /// Paint a solid rectangle, clipped to the raster.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, rgba: [u8; 4]) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for py in y..y_end {
            for px in x..x_end {
                if let Some(start) = self.offset(px, py) {
                    if let Some(slot) = self.data.get_mut(start..start + CHANNELS) {
                        slot.copy_from_slice(&rgba);
                    }
                }
            }
        }
    }
}

/// Decode a PNG screenshot of a rendered cloud into an RGBA raster.
#[cfg(not(target_arch = "wasm32"))]
pub fn decode_png(bytes: &[u8]) -> Result<Raster> {
    let image = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .map_err(|e| CloudError::Raster(e.to_string()))?
        .to_rgba8();
    let (width, height) = image.dimensions();
    Raster::from_rgba(width, height, image.into_raw())
}
