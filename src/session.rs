//! The load → render → scan pipeline around one word catalog.

use crate::catalog::WordCatalog;
use crate::config::CloudConfig;
use crate::error::Result;
use crate::hit_test::{locate, HoverChange, HoverTracker};
use crate::layout::{RenderRequest, Rasterizer};
use crate::parser::{read_rows, InputFormat};
use crate::raster::Raster;
use crate::resolve::resolve;
use crate::scan::scan;
use crate::types::{Row, Size, WordEntry, WordPosition};
use crate::words::extract_entries;

/// Owns the loaded catalog and the positions recovered from the last scan.
///
/// A failed load leaves the previous state untouched.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: CloudConfig,
    catalog: WordCatalog,
    positions: Vec<WordPosition>,
    hover: HoverTracker,
}

impl Session {
    #[must_use]
    pub fn new(config: CloudConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    /// Positions from the most recent scan, in resolver order.
    #[must_use]
    pub fn positions(&self) -> &[WordPosition] {
        &self.positions
    }

    /// Replace the catalog. Positions and hover state are cleared with it.
    pub fn load(&mut self, entries: Vec<WordEntry>) -> &WordCatalog {
        self.catalog = WordCatalog::build(entries);
        self.positions.clear();
        self.hover.reset();
        log::info!(
            "loaded {} words ({} distinct colors)",
            self.catalog.len(),
            self.catalog.distinct_colors()
        );
        &self.catalog
    }

    /// Extract words from rows and load them.
    ///
    /// # Errors
    /// [`crate::error::CloudError::NoWords`] if no row has a word.
    pub fn load_rows(&mut self, rows: &[Row]) -> Result<&WordCatalog> {
        let entries = extract_entries(rows)?;
        Ok(self.load(entries))
    }

    /// Read a file's bytes, choosing the reader from `file_name`, and load it.
    ///
    /// # Errors
    /// Parse failures and [`crate::error::CloudError::NoWords`].
    pub fn load_bytes(&mut self, data: &[u8], file_name: &str) -> Result<&WordCatalog> {
        let format = InputFormat::from_file_name(file_name);
        log::debug!("reading {file_name} ({} bytes) as {format:?}", data.len());
        let rows = read_rows(data, format)?;
        self.load_rows(&rows)
    }

    /// Build the renderer input for a container and start drawing.
    ///
    /// Clears the previous positions; they describe a surface that is being
    /// redrawn.
    ///
    /// # Errors
    /// Whatever the rasterizer reports.
    pub fn render<R: Rasterizer + ?Sized>(
        &mut self,
        rasterizer: &mut R,
        container: Size,
    ) -> Result<RenderRequest> {
        let request = RenderRequest::build(&self.catalog, container, &self.config);
        self.positions.clear();
        self.hover.reset();
        rasterizer.draw(&request)?;
        log::debug!(
            "render started on {}x{} canvas",
            request.canvas.width,
            request.canvas.height
        );
        Ok(request)
    }

    /// Read the rasterizer's pixels and rebuild positions from them.
    ///
    /// # Errors
    /// Whatever the rasterizer reports while reading pixels.
    pub fn scan<R: Rasterizer + ?Sized>(&mut self, rasterizer: &R) -> Result<&[WordPosition]> {
        let raster = rasterizer.read_pixels()?;
        Ok(self.ingest_raster(&raster))
    }

    /// Rebuild positions from an already captured raster.
    pub fn ingest_raster(&mut self, raster: &Raster) -> &[WordPosition] {
        let clusters = scan(raster, self.config.stride());
        self.positions = resolve(&clusters, &self.catalog, self.config.tolerance);
        self.hover.reset();
        if self.positions.is_empty() && !self.catalog.is_empty() {
            log::warn!("scan found no word positions; the render may not have finished");
        } else {
            log::info!("mapped {} word regions", self.positions.len());
        }
        &self.positions
    }

    /// Word under `(x, y)` in canvas coordinates.
    #[must_use]
    pub fn locate(&self, x: f64, y: f64) -> Option<&WordPosition> {
        locate(&self.positions, x, y)
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) -> HoverChange {
        self.hover.pointer_moved(&self.positions, x, y)
    }

    pub fn pointer_left(&mut self) -> HoverChange {
        self.hover.pointer_left()
    }
}
