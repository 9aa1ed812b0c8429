//! `WordCloudView` - the browser entry point.
//!
//! Owns a [`Session`] plus the DOM pieces around it:
//! - the container whose size decides the canvas size
//! - the canvas wordcloud2.js draws on
//! - the tooltip element shown while hovering a word
//!
//! Pointer handlers are registered on construction. Loading a file renders
//! the cloud and schedules a scan of the finished canvas.

mod events;
mod schedule;

pub use schedule::{ScanSchedule, ScanTrigger};

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{Event, File, HtmlCanvasElement, HtmlElement, HtmlInputElement, MouseEvent};

#[cfg(target_arch = "wasm32")]
use crate::config::CloudConfig;
#[cfg(target_arch = "wasm32")]
use crate::layout::CanvasRasterizer;
#[cfg(target_arch = "wasm32")]
use crate::logging;
use crate::session::Session;

/// Everything the event closures need, shared behind `Rc<RefCell<…>>`.
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub session: Session,
    pub rasterizer: CanvasRasterizer,
    pub container: HtmlElement,
    pub tooltip: HtmlElement,
    pub schedule: ScanSchedule,
    pub scan_timer: Option<i32>,
    pub scan_closure: Option<Closure<dyn FnMut()>>,
}

/// The word cloud viewer exported to JavaScript
#[wasm_bindgen]
pub struct WordCloudView {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    stop_closure: Option<Closure<dyn FnMut(Event)>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    input_closures: Vec<Closure<dyn FnMut(Event)>>,

    // Non-wasm32 fields
    #[cfg(not(target_arch = "wasm32"))]
    session: Session,
    #[cfg(not(target_arch = "wasm32"))]
    schedule: ScanSchedule,
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl WordCloudView {
    /// Create a viewer over existing DOM elements.
    ///
    /// `config` is an optional partial `CloudConfig` object; omitted fields
    /// keep their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container: HtmlElement,
        canvas: HtmlCanvasElement,
        tooltip: HtmlElement,
        config: JsValue,
    ) -> Result<WordCloudView, JsValue> {
        let config: CloudConfig = if config.is_undefined() || config.is_null() {
            CloudConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?
        };
        logging::init(logging::parse_level(config.log_level.as_deref()));

        let wait_for_completion = config.wait_for_completion;
        let rasterizer = CanvasRasterizer::new(canvas.clone())?;

        let state = Rc::new(RefCell::new(SharedState {
            session: Session::new(config),
            rasterizer,
            container,
            tooltip,
            schedule: ScanSchedule::new(),
            scan_timer: None,
            scan_closure: None,
        }));

        let mut closures = Vec::new();

        // Mouse move - hover lookup
        {
            let state = Rc::clone(&state);
            let canvas_ref = canvas.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let rect = canvas_ref.get_bounding_client_rect();
                let client_x = f64::from(event.client_x());
                let client_y = f64::from(event.client_y());
                WordCloudView::internal_pointer_move(
                    &state,
                    client_x - rect.left(),
                    client_y - rect.top(),
                    client_x,
                    client_y,
                );
            }) as Box<dyn FnMut(MouseEvent)>);
            canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
                .map_err(|e| JsValue::from_str(&format!("Failed to add mousemove: {e:?}")))?;
            closures.push(closure);
        }

        // Mouse leave - hide tooltip
        {
            let state = Rc::clone(&state);
            let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
                WordCloudView::internal_pointer_leave(&state);
            }) as Box<dyn FnMut(MouseEvent)>);
            canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref())
                .map_err(|e| JsValue::from_str(&format!("Failed to add mouseleave: {e:?}")))?;
            closures.push(closure);
        }

        // wordcloud2 fires `wordcloudstop` on the canvas when layout finishes
        let stop_closure = if wait_for_completion {
            let weak_state = Rc::downgrade(&state);
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                if let Some(state) = weak_state.upgrade() {
                    log::debug!("renderer reported completion");
                    WordCloudView::scan_if_pending(&state, ScanTrigger::Completion);
                }
            }) as Box<dyn FnMut(Event)>);
            canvas
                .add_event_listener_with_callback(
                    "wordcloudstop",
                    closure.as_ref().unchecked_ref(),
                )
                .map_err(|e| JsValue::from_str(&format!("Failed to add wordcloudstop: {e:?}")))?;
            Some(closure)
        } else {
            None
        };

        Ok(WordCloudView {
            state,
            closures,
            stop_closure,
            input_closures: Vec::new(),
        })
    }

    /// Load whatever file the user picks in `input`.
    ///
    /// Failures are logged and reported with a blocking alert; the previous
    /// cloud stays in place.
    #[wasm_bindgen(js_name = "attachFileInput")]
    pub fn attach_file_input(&mut self, input: HtmlInputElement) -> Result<(), JsValue> {
        let weak_state = Rc::downgrade(&self.state);
        let input_ref = input.clone();
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            let Some(file) = input_ref.files().and_then(|files| files.get(0)) else {
                return;
            };
            let Some(state) = weak_state.upgrade() else {
                return;
            };
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = WordCloudView::internal_load_file(&state, file).await {
                    log::error!("{err}");
                    WordCloudView::alert(&format!("Error: {err}"));
                }
            });
        }) as Box<dyn FnMut(Event)>);
        input
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .map_err(|e| JsValue::from_str(&format!("Failed to add change: {e:?}")))?;
        self.input_closures.push(closure);
        Ok(())
    }

    /// Load raw file bytes, render, and schedule a scan. Returns the number
    /// of words loaded.
    #[wasm_bindgen(js_name = "loadBytes")]
    pub fn load_bytes(&self, data: &[u8], file_name: &str) -> Result<usize, JsValue> {
        Ok(Self::internal_load_bytes(&self.state, data, file_name)?)
    }

    /// Read a `File` and load it. Resolves to the number of words loaded.
    #[wasm_bindgen(js_name = "loadFile")]
    pub fn load_file(&self, file: File) -> js_sys::Promise {
        let state = Rc::clone(&self.state);
        wasm_bindgen_futures::future_to_promise(async move {
            let count = WordCloudView::internal_load_file(&state, file).await?;
            Ok(JsValue::from(u32::try_from(count).unwrap_or(u32::MAX)))
        })
    }

    /// Scan the canvas now, replacing the positions. Returns how many
    /// regions were mapped. The pending timer scan is skipped afterwards.
    pub fn rescan(&self) -> Result<usize, JsValue> {
        let mut s = self.state.borrow_mut();
        let s = &mut *s;
        let count = s.session.scan(&s.rasterizer)?.len();
        s.schedule.record(ScanTrigger::Completion);
        Ok(count)
    }

    /// Position record under canvas point `(x, y)`, or `null`.
    #[wasm_bindgen(js_name = "wordAt")]
    pub fn word_at(&self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        let s = self.state.borrow();
        match s.session.locate(x, y) {
            Some(position) => serde_wasm_bindgen::to_value(position)
                .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}"))),
            None => Ok(JsValue::NULL),
        }
    }

    /// All positions from the last scan.
    pub fn positions(&self) -> Result<JsValue, JsValue> {
        let s = self.state.borrow();
        serde_wasm_bindgen::to_value(s.session.positions())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// The loaded words and their colors.
    pub fn catalog(&self) -> Result<JsValue, JsValue> {
        let s = self.state.borrow();
        serde_wasm_bindgen::to_value(s.session.catalog())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}

// ============================================================================
// Non-WASM32 Implementation (for testing/CLI)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl WordCloudView {
    /// Create a viewer without a DOM (non-wasm version for testing)
    #[must_use]
    pub fn new_test(config: crate::config::CloudConfig) -> Self {
        Self {
            session: Session::new(config),
            schedule: ScanSchedule::new(),
        }
    }

    /// Draw the loaded words, as the browser does after a load.
    pub fn render<R: crate::layout::Rasterizer + ?Sized>(
        &mut self,
        rasterizer: &mut R,
        container: crate::types::Size,
    ) -> crate::error::Result<crate::layout::RenderRequest> {
        let request = self.session.render(rasterizer, container)?;
        self.schedule.begin_render();
        Ok(request)
    }

    /// Scan `rasterizer` if `trigger` still has something to add to the
    /// current render. Returns whether a scan ran.
    pub fn scan_on<R: crate::layout::Rasterizer + ?Sized>(
        &mut self,
        rasterizer: &R,
        trigger: ScanTrigger,
    ) -> crate::error::Result<bool> {
        if !self.schedule.claim(trigger) {
            return Ok(false);
        }
        self.session.scan(rasterizer)?;
        Ok(true)
    }

    /// Load raw file bytes. Returns the number of words loaded.
    pub fn load_bytes(&mut self, data: &[u8], file_name: &str) -> crate::error::Result<usize> {
        Ok(self.session.load_bytes(data, file_name)?.len())
    }

    /// Feed a captured canvas and rebuild positions.
    pub fn ingest(&mut self, raster: &crate::raster::Raster) -> usize {
        self.session.ingest_raster(raster).len()
    }

    #[must_use]
    pub fn word_at(&self, x: f64, y: f64) -> Option<&crate::types::WordPosition> {
        self.session.locate(x, y)
    }

    #[must_use]
    pub fn positions(&self) -> &[crate::types::WordPosition] {
        self.session.positions()
    }

    #[must_use]
    pub fn catalog(&self) -> &crate::catalog::WordCatalog {
        self.session.catalog()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }
}
