//! wordcloud2.js adapter for an HTML canvas.
//!
//! Expects the page to have loaded wordcloud2.js so that a global
//! `WordCloud(canvas, options)` function exists.

use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{CloudError, Result};
use crate::raster::Raster;

use super::{RenderRequest, Rasterizer};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = WordCloud)]
    fn word_cloud(canvas: &HtmlCanvasElement, options: &JsValue) -> std::result::Result<(), JsValue>;
}

type WeightCallback = Closure<dyn Fn(f64) -> f64>;
type ColorCallback = Closure<dyn Fn(String) -> String>;

/// Draws with wordcloud2.js and reads pixels back through the 2D context.
pub struct CanvasRasterizer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    // wordcloud2 keeps calling these from its own timers after `draw`
    // returns. The previous pair is retained too, since a superseded run may
    // still fire once before it notices the restart.
    callbacks: Vec<(WeightCallback, ColorCallback)>,
}

impl CanvasRasterizer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| CloudError::Render("Failed to get 2d context".into()))?
            .ok_or_else(|| CloudError::Render("No 2d context available".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| CloudError::Render("Failed to cast to CanvasRenderingContext2d".into()))?;
        Ok(Self {
            canvas,
            ctx,
            callbacks: Vec::new(),
        })
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

fn js_err(context: &str, err: &JsValue) -> CloudError {
    let detail = err
        .as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"));
    CloudError::Render(format!("{context}: {detail}"))
}

impl Rasterizer for CanvasRasterizer {
    fn draw(&mut self, request: &RenderRequest) -> Result<()> {
        self.canvas.set_width(request.canvas.width);
        self.canvas.set_height(request.canvas.height);

        let options = serde_wasm_bindgen::to_value(&request.options)
            .map_err(|e| CloudError::Render(format!("Serialization error: {e}")))?;

        let shared = Rc::new(request.clone());
        let weight_factor = {
            let request = Rc::clone(&shared);
            Closure::wrap(Box::new(move |weight: f64| request.font_size(weight))
                as Box<dyn Fn(f64) -> f64>)
        };
        let color = {
            let request = Rc::clone(&shared);
            Closure::wrap(Box::new(move |word: String| request.color_for(&word))
                as Box<dyn Fn(String) -> String>)
        };

        Reflect::set(&options, &"weightFactor".into(), weight_factor.as_ref())
            .map_err(|e| js_err("Failed to set weightFactor", &e))?;
        Reflect::set(&options, &"color".into(), color.as_ref())
            .map_err(|e| js_err("Failed to set color", &e))?;

        word_cloud(&self.canvas, &options).map_err(|e| js_err("WordCloud failed", &e))?;

        if self.callbacks.len() >= 2 {
            self.callbacks.remove(0);
        }
        self.callbacks.push((weight_factor, color));
        Ok(())
    }

    fn read_pixels(&self) -> Result<Raster> {
        let width = self.canvas.width();
        let height = self.canvas.height();
        if width == 0 || height == 0 {
            return Raster::transparent(width, height);
        }
        let image = self
            .ctx
            .get_image_data(0.0, 0.0, f64::from(width), f64::from(height))
            .map_err(|e| js_err("getImageData failed", &e))?;
        Raster::from_rgba(image.width(), image.height(), image.data().0)
    }
}
