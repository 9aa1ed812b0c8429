//! Tunables for rendering, scanning and tooltip placement.
//!
//! Every field has a default, so JavaScript may pass a partial object (or
//! nothing) to the viewer constructor.

use serde::{Deserialize, Serialize};

/// Layout knobs forwarded verbatim to the external word-cloud renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RendererKnobs {
    pub grid_size: u32,
    pub font_family: String,
    /// Probability that a word is drawn rotated.
    pub rotate_ratio: f64,
    pub rotation_steps: u32,
    pub background_color: String,
    pub draw_out_of_bound: bool,
    pub shrink_to_fit: bool,
    /// Minimum font size in pixels.
    pub min_size: u32,
    pub ellipticity: f64,
    /// Multiplier applied to every weight before canvas scaling.
    pub weight_coefficient: f64,
    /// Canvas edge length at which `weight_coefficient` applies unscaled.
    pub reference_extent: f64,
}

impl Default for RendererKnobs {
    fn default() -> Self {
        Self {
            grid_size: 12,
            font_family: "Arial, sans-serif".to_string(),
            rotate_ratio: 0.3,
            rotation_steps: 2,
            background_color: "transparent".to_string(),
            draw_out_of_bound: false,
            shrink_to_fit: true,
            min_size: 12,
            ellipticity: 0.65,
            weight_coefficient: 0.8,
            reference_extent: 400.0,
        }
    }
}

/// Configuration for a word cloud session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudConfig {
    /// Per-channel color tolerance (exclusive) when matching clusters to words.
    pub tolerance: u8,
    /// Sample every Nth pixel on both axes while scanning.
    pub scan_stride: u32,
    /// Total padding subtracted from the container to size the canvas.
    pub canvas_padding: u32,
    /// Wait after invoking the renderer before reading pixels back.
    pub scan_delay_ms: u32,
    /// Also scan on the renderer's completion event when it fires first.
    pub wait_for_completion: bool,
    /// Tooltip offset from the pointer.
    pub tooltip_offset: f64,
    /// Minimum gap between the tooltip and the viewport edge.
    pub tooltip_padding: f64,
    /// Color for words the catalog does not know.
    pub default_color: String,
    /// Browser console log level ("error" .. "trace"); `info` when unset.
    pub log_level: Option<String>,
    pub renderer: RendererKnobs,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            tolerance: 25,
            scan_stride: 2,
            canvas_padding: 40,
            scan_delay_ms: 100,
            wait_for_completion: true,
            tooltip_offset: 15.0,
            tooltip_padding: 10.0,
            default_color: "#333333".to_string(),
            log_level: None,
            renderer: RendererKnobs::default(),
        }
    }
}

impl CloudConfig {
    /// Stride clamped to at least 1 so scanning always advances.
    #[must_use]
    pub fn stride(&self) -> u32 {
        self.scan_stride.max(1)
    }
}
