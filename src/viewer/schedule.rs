//! When to scan a render.
//!
//! wordcloud2.js draws asynchronously. A render can be scanned from two
//! places: a fixed timer armed when drawing starts, and the renderer's
//! `wordcloudstop` event. The timer may fire on a half-drawn canvas, so a
//! later completion event always rescans; the timer only scans a render
//! nothing has scanned yet.

/// What asked for a scan of the current render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanTrigger {
    /// The fallback delay armed when drawing started.
    Timer,
    /// The renderer reported the layout finished.
    Completion,
}

/// Render/scan bookkeeping for one canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSchedule {
    render_id: u64,
    /// Strongest trigger that has scanned the current render.
    scanned_by: Option<ScanTrigger>,
}

impl ScanSchedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A new render started; previous scans no longer count.
    pub fn begin_render(&mut self) -> u64 {
        self.render_id = self.render_id.saturating_add(1);
        self.scanned_by = None;
        self.render_id
    }

    #[must_use]
    pub fn render_id(&self) -> u64 {
        self.render_id
    }

    /// Whether the current render has been scanned after it finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.scanned_by == Some(ScanTrigger::Completion)
    }

    /// Decide whether `trigger` should scan now, recording it if so.
    ///
    /// - nothing is scanned before the first render
    /// - the timer scans only an unscanned render
    /// - completion scans unless completion already did
    pub fn claim(&mut self, trigger: ScanTrigger) -> bool {
        if self.render_id == 0 {
            return false;
        }
        let scan = match (trigger, self.scanned_by) {
            (_, None) => true,
            (ScanTrigger::Completion, Some(ScanTrigger::Timer)) => true,
            _ => false,
        };
        if scan {
            self.scanned_by = Some(trigger);
        }
        scan
    }

    /// Record a scan made outside the schedule, e.g. an explicit rescan.
    pub fn record(&mut self, trigger: ScanTrigger) {
        if self.render_id > 0 {
            self.scanned_by = Some(trigger);
        }
    }
}
