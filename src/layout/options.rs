//! Renderer configuration derived from a word catalog.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::WordCatalog;
use crate::color::Rgb;
use crate::config::{CloudConfig, RendererKnobs};
use crate::types::Size;

/// Canvas size for a container: its client size minus the total padding,
/// never negative.
#[must_use]
pub fn canvas_size(container: Size, padding: u32) -> Size {
    Size::new(
        container.width.saturating_sub(padding),
        container.height.saturating_sub(padding),
    )
}

/// Font size scale for a canvas: `coefficient × min(w, h) / reference`.
#[must_use]
pub fn weight_scale(canvas: Size, knobs: &RendererKnobs) -> f64 {
    if knobs.reference_extent <= 0.0 {
        return knobs.weight_coefficient;
    }
    let extent = f64::from(canvas.width.min(canvas.height));
    knobs.weight_coefficient * extent / knobs.reference_extent
}

/// The serializable part of the wordcloud2.js option object.
///
/// `weightFactor` and `color` are callbacks; the browser adapter attaches
/// them separately from [`RenderRequest::font_size`] and
/// [`RenderRequest::color_for`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudOptions {
    pub list: Vec<(String, u32)>,
    pub grid_size: u32,
    pub font_family: String,
    pub rotate_ratio: f64,
    pub rotation_steps: u32,
    pub background_color: String,
    pub draw_out_of_bound: bool,
    pub shrink_to_fit: bool,
    pub min_size: u32,
    pub ellipticity: f64,
}

impl CloudOptions {
    #[must_use]
    pub fn new(list: Vec<(String, u32)>, knobs: &RendererKnobs) -> Self {
        Self {
            list,
            grid_size: knobs.grid_size,
            font_family: knobs.font_family.clone(),
            rotate_ratio: knobs.rotate_ratio,
            rotation_steps: knobs.rotation_steps,
            background_color: knobs.background_color.clone(),
            draw_out_of_bound: knobs.draw_out_of_bound,
            shrink_to_fit: knobs.shrink_to_fit,
            min_size: knobs.min_size,
            ellipticity: knobs.ellipticity,
        }
    }
}

/// Everything a rasterizer needs to draw one cloud.
///
/// Owns a snapshot of the catalog colors so renderer callbacks can outlive
/// the session borrow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub options: CloudOptions,
    pub canvas: Size,
    pub weight_scale: f64,
    pub default_color: String,
    colors: BTreeMap<String, Rgb>,
}

impl RenderRequest {
    /// Translate a catalog into renderer input for a container of the given size.
    #[must_use]
    pub fn build(catalog: &WordCatalog, container: Size, config: &CloudConfig) -> Self {
        let canvas = canvas_size(container, config.canvas_padding);
        let colors = catalog
            .entries()
            .iter()
            .filter_map(|e| catalog.color_of(&e.word).map(|c| (e.key(), c)))
            .collect();
        Self {
            options: CloudOptions::new(catalog.weights(), &config.renderer),
            canvas,
            weight_scale: weight_scale(canvas, &config.renderer),
            default_color: config.default_color.clone(),
            colors,
        }
    }

    /// `weightFactor` callback: font size in pixels for a weight.
    #[must_use]
    pub fn font_size(&self, weight: f64) -> f64 {
        weight * self.weight_scale
    }

    /// `color` callback: assigned color by case-insensitive word, or the
    /// default gray.
    #[must_use]
    pub fn color_for(&self, word: &str) -> String {
        self.colors
            .get(&word.to_lowercase())
            .map_or_else(|| self.default_color.clone(), |c| c.to_hex())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::WordEntry;

    fn catalog() -> WordCatalog {
        WordCatalog::build(vec![
            WordEntry::from_cells("Apple", Some("A fruit")).unwrap(),
            WordEntry::from_cells("Bee", None).unwrap(),
        ])
    }

    #[test]
    fn test_canvas_size_subtracts_padding() {
        assert_eq!(canvas_size(Size::new(840, 640), 40), Size::new(800, 600));
        assert_eq!(canvas_size(Size::new(30, 10), 40), Size::new(0, 0));
    }

    #[test]
    fn test_weight_scale_uses_shorter_side() {
        let knobs = RendererKnobs::default();
        // 0.8 * 400 / 400
        assert_eq!(weight_scale(Size::new(800, 400), &knobs), 0.8);
        assert_eq!(weight_scale(Size::new(200, 800), &knobs), 0.4);
    }

    #[test]
    fn test_request_callbacks() {
        let config = CloudConfig::default();
        let request = RenderRequest::build(&catalog(), Size::new(840, 440), &config);
        assert_eq!(request.canvas, Size::new(800, 400));
        assert_eq!(request.font_size(40.0), 32.0);
        assert_eq!(request.color_for("apple"), "#1f77b4");
        assert_eq!(request.color_for("BEE"), "#ff7f0e");
        assert_eq!(request.color_for("Wasp"), "#333333");
    }

    #[test]
    fn test_options_serialize_as_wordcloud2_keys() {
        let config = CloudConfig::default();
        let request = RenderRequest::build(&catalog(), Size::new(440, 440), &config);
        let json = serde_json::to_value(&request.options).unwrap();
        assert_eq!(json["list"][0][0], "Apple");
        assert_eq!(json["list"][0][1], 40);
        assert_eq!(json["list"][1][1], 42);
        assert_eq!(json["gridSize"], 12);
        assert_eq!(json["fontFamily"], "Arial, sans-serif");
        assert_eq!(json["rotateRatio"], 0.3);
        assert_eq!(json["rotationSteps"], 2);
        assert_eq!(json["backgroundColor"], "transparent");
        assert_eq!(json["drawOutOfBound"], false);
        assert_eq!(json["shrinkToFit"], true);
        assert_eq!(json["minSize"], 12);
        assert_eq!(json["ellipticity"], 0.65);
    }

    #[test]
    fn test_request_serializes_identically_across_builds() {
        let config = CloudConfig::default();
        let a = RenderRequest::build(&catalog(), Size::new(440, 440), &config);
        let b = RenderRequest::build(&catalog(), Size::new(440, 440), &config);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, serde_json::to_string(&b).unwrap());
        assert!(json.contains(r##""colors":{"apple":"#1f77b4","bee":"#ff7f0e"}"##));
    }
}
