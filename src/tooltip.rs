//! Tooltip placement next to the pointer.
//!
//! Placement happens in two passes. The tooltip is first put at a fixed
//! offset up-right of the pointer; once the browser has laid it out (one
//! animation frame later) its measured rectangle is fed to [`adjust`], which
//! flips it to the other side of the pointer or clamps it inside the viewport.

/// Top-left corner of the tooltip, in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}

/// A laid-out tooltip rectangle as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl TooltipRect {
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// First-pass anchor: `offset` right of and above the pointer.
#[must_use]
pub fn anchor(pointer_x: f64, pointer_y: f64, offset: f64) -> Placement {
    Placement {
        left: pointer_x + offset,
        top: pointer_y - offset,
    }
}

/// Second pass: keep the measured tooltip inside a `viewport_w × viewport_h`
/// viewport with `padding` to spare.
///
/// Overflowing right or bottom flips the tooltip to the other side of the
/// pointer; overflowing left or top pins it to the padding. Every check uses
/// the rectangle measured at the anchor, and later checks override earlier
/// ones on the same axis.
#[must_use]
pub fn adjust(
    measured: TooltipRect,
    pointer_x: f64,
    pointer_y: f64,
    viewport_w: f64,
    viewport_h: f64,
    offset: f64,
    padding: f64,
) -> Placement {
    let mut placement = Placement {
        left: measured.left,
        top: measured.top,
    };

    if measured.right() > viewport_w - padding {
        placement.left = pointer_x - measured.width - offset;
    }
    if measured.bottom() > viewport_h - padding {
        placement.top = pointer_y - measured.height - offset;
    }
    if measured.left < padding {
        placement.left = padding;
    }
    if measured.top < padding {
        placement.top = padding;
    }

    placement
}
