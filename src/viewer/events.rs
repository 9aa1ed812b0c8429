//! Pointer, file and timer handlers for `WordCloudView`.
//!
//! All methods here are `pub(crate)` helpers called from the wasm-exported
//! public API and the closures registered in `mod.rs`.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;
#[cfg(target_arch = "wasm32")]
use web_sys::File;

#[cfg(target_arch = "wasm32")]
use super::{ScanTrigger, SharedState, WordCloudView};
#[cfg(target_arch = "wasm32")]
use crate::error::{CloudError, Result};
#[cfg(target_arch = "wasm32")]
use crate::hit_test::HoverChange;
#[cfg(target_arch = "wasm32")]
use crate::tooltip::{adjust, anchor, TooltipRect};
#[cfg(target_arch = "wasm32")]
use crate::types::Size;

#[cfg(target_arch = "wasm32")]
impl WordCloudView {
    pub(crate) async fn internal_load_file(
        state: &Rc<RefCell<SharedState>>,
        file: File,
    ) -> Result<usize> {
        let name = file.name();
        let buffer = JsFuture::from(file.array_buffer())
            .await
            .map_err(|_| CloudError::Read)?;
        let data = js_sys::Uint8Array::new(&buffer).to_vec();
        Self::internal_load_bytes(state, &data, &name)
    }

    pub(crate) fn internal_load_bytes(
        state: &Rc<RefCell<SharedState>>,
        data: &[u8],
        file_name: &str,
    ) -> Result<usize> {
        let count = state.borrow_mut().session.load_bytes(data, file_name)?.len();
        Self::render_and_schedule(state)?;
        Ok(count)
    }

    /// Draw the current catalog and arm the post-render scan.
    pub(crate) fn render_and_schedule(state: &Rc<RefCell<SharedState>>) -> Result<()> {
        let delay_ms = {
            let mut s = state.borrow_mut();
            let s = &mut *s;
            let container = Size::new(
                u32::try_from(s.container.client_width()).unwrap_or(0),
                u32::try_from(s.container.client_height()).unwrap_or(0),
            );
            Self::hide_tooltip(s);
            s.session.render(&mut s.rasterizer, container)?;
            s.schedule.begin_render();
            s.session.config().scan_delay_ms
        };
        Self::schedule_scan(state, delay_ms);
        Ok(())
    }

    fn schedule_scan(state: &Rc<RefCell<SharedState>>, delay_ms: u32) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut s = state.borrow_mut();

        if let Some(timer) = s.scan_timer.take() {
            window.clear_timeout_with_handle(timer);
        }

        if s.scan_closure.is_none() {
            let weak_state = Rc::downgrade(state);
            let closure = Closure::wrap(Box::new(move || {
                if let Some(state) = weak_state.upgrade() {
                    state.borrow_mut().scan_timer = None;
                    WordCloudView::scan_if_pending(&state, ScanTrigger::Timer);
                }
            }) as Box<dyn FnMut()>);
            s.scan_closure = Some(closure);
        }

        let Some(callback) = s.scan_closure.as_ref() else {
            return;
        };
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            timeout,
        ) {
            Ok(id) => s.scan_timer = Some(id),
            Err(_) => s.scan_timer = None,
        }
    }

    /// Scan the current render if `trigger` still has something to add.
    pub(crate) fn scan_if_pending(state: &Rc<RefCell<SharedState>>, trigger: ScanTrigger) {
        let mut s = state.borrow_mut();
        let s = &mut *s;
        if !s.schedule.claim(trigger) {
            return;
        }
        log::debug!("scanning render {} ({trigger:?})", s.schedule.render_id());
        if let Err(err) = s.session.scan(&s.rasterizer) {
            log::error!("scan failed: {err}");
        }
    }

    pub(crate) fn internal_pointer_move(
        state: &Rc<RefCell<SharedState>>,
        x: f64,
        y: f64,
        client_x: f64,
        client_y: f64,
    ) {
        let mut s = state.borrow_mut();
        let change = s.session.pointer_moved(x, y);
        Self::apply_cursor(&s, &change);
        match change {
            HoverChange::Show { explanation, .. } => {
                Self::show_tooltip(&s, &explanation, client_x, client_y);
            }
            HoverChange::Hide => Self::hide_tooltip(&s),
            HoverChange::Unchanged => {}
        }
    }

    pub(crate) fn internal_pointer_leave(state: &Rc<RefCell<SharedState>>) {
        let mut s = state.borrow_mut();
        let change = s.session.pointer_left();
        Self::apply_cursor(&s, &change);
        Self::hide_tooltip(&s);
    }

    fn apply_cursor(s: &SharedState, change: &HoverChange) {
        if let Some(cursor) = change.cursor() {
            let _ = s
                .rasterizer
                .canvas()
                .style()
                .set_property("cursor", cursor);
        }
    }

    fn show_tooltip(s: &SharedState, text: &str, client_x: f64, client_y: f64) {
        let config = s.session.config();
        let (offset, padding) = (config.tooltip_offset, config.tooltip_padding);
        let tooltip = s.tooltip.clone();

        tooltip.set_text_content(Some(text));
        let _ = tooltip.class_list().add_1("show");

        let first = anchor(client_x, client_y, offset);
        let style = tooltip.style();
        let _ = style.set_property("left", &format!("{}px", first.left));
        let _ = style.set_property("top", &format!("{}px", first.top));

        // Measure once the browser has laid the tooltip out
        let Some(window) = web_sys::window() else {
            return;
        };
        let viewport_w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let viewport_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let frame = Closure::once_into_js(move || {
            let rect = tooltip.get_bounding_client_rect();
            let measured = TooltipRect {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            };
            let placed = adjust(
                measured, client_x, client_y, viewport_w, viewport_h, offset, padding,
            );
            let style = tooltip.style();
            let _ = style.set_property("left", &format!("{}px", placed.left));
            let _ = style.set_property("top", &format!("{}px", placed.top));
        });
        let _ = window.request_animation_frame(frame.unchecked_ref());
    }

    fn hide_tooltip(s: &SharedState) {
        let _ = s.tooltip.class_list().remove_1("show");
    }

    pub(crate) fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
