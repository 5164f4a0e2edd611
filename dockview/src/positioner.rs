//! The placement algorithms.
//!
//! All functions are pure: identical inputs always produce identical layouts, so repeated
//! invocations (e.g. coalesced content mutations) are harmless.
//!
//! Targets and overflow checks are viewport-relative. The resulting layout is expressed in the
//! coordinate space of the requested [`PositionMode`], then clamped.

use crate::{
    Axis, DockingSide, HorizontalSide, Layout, PositionMode, Rect, Size, VerticalSide, Viewport,
};

/// The vertical keyword after the overflow flip.
///
/// - Horizontal primary: a `bottom` preference whose bottom-flush placement would start above
///   the viewport top becomes `top`.
/// - Vertical primary: a `top` preference without room above the target becomes `bottom`.
pub fn resolve_vertical(side: DockingSide, target: Rect, overlay: Size) -> Option<VerticalSide> {
    let vertical = side.vertical_side();
    match (side.primary(), vertical) {
        (Axis::Horizontal, Some(VerticalSide::Bottom))
            if target.bottom() - overlay.height < 0.0 =>
        {
            Some(VerticalSide::Top)
        }
        (Axis::Vertical, Some(VerticalSide::Top)) if target.top - overlay.height < 0.0 => {
            Some(VerticalSide::Bottom)
        }
        _ => vertical,
    }
}

/// The cross-axis pin for a preference: `(width, height)`.
///
/// Pins never depend on the overlay's own size, so they can be applied before it is measured.
pub fn pinned_size(side: DockingSide, target: Rect) -> (Option<f64>, Option<f64>) {
    match side.primary() {
        Axis::Vertical if side.horizontal_side().is_none() => (Some(target.width), None),
        Axis::Horizontal if side.vertical_side().is_none() => (None, Some(target.height)),
        _ => (None, None),
    }
}

/// Preference-driven docking.
pub fn dock(
    side: DockingSide,
    target: Rect,
    overlay: Size,
    viewport: Viewport,
    mode: PositionMode,
    pin: bool,
) -> Layout {
    let vertical = resolve_vertical(side, target, overlay);
    let horizontal = side.horizontal_side();

    let (top, left) = match side.primary() {
        Axis::Horizontal => {
            // Overlay sits beside the target; vertical keyword aligns edges flush.
            let left = match horizontal {
                Some(HorizontalSide::Left) => target.left - overlay.width,
                Some(HorizontalSide::Right) => target.right(),
                None => target.left,
            };
            let top = match vertical {
                Some(VerticalSide::Bottom) => target.bottom() - overlay.height,
                Some(VerticalSide::Top) | None => target.top,
            };
            (top, left)
        }
        Axis::Vertical => {
            let top = match vertical {
                Some(VerticalSide::Top) => target.top - overlay.height,
                Some(VerticalSide::Bottom) => target.bottom(),
                None => target.top,
            };
            let left = match horizontal {
                Some(HorizontalSide::Right) => target.right() - overlay.width,
                Some(HorizontalSide::Left) | None => target.left,
            };
            (top, left)
        }
    };

    let (width, height) = if pin {
        pinned_size(side, target)
    } else {
        (None, None)
    };

    Layout {
        top,
        left,
        width,
        height,
        inverted: false,
    }
    .in_mode(mode, viewport)
    .clamped()
}

/// The initial, unflipped position below the target.
pub fn below(target: Rect, viewport: Viewport, mode: PositionMode, pin: bool) -> Layout {
    unflipped(target, pin).in_mode(mode, viewport).clamped()
}

/// Below the target, flipped above when the viewport bottom clips it and there is room above.
///
/// A flipped layout keeps `top` at the target's top edge and sets `inverted`; the renderer
/// shifts the overlay up by its own height.
pub fn flip_below(
    target: Rect,
    overlay: Size,
    viewport: Viewport,
    mode: PositionMode,
    pin: bool,
) -> Layout {
    let mut layout = unflipped(target, pin);
    let overflows_bottom = target.bottom() + overlay.height > viewport.height;
    let fits_above = target.top - overlay.height > 0.0;
    if overflows_bottom && fits_above {
        layout.top = target.top;
        layout.inverted = true;
    }
    layout.in_mode(mode, viewport).clamped()
}

fn unflipped(target: Rect, pin: bool) -> Layout {
    Layout {
        top: target.bottom(),
        left: target.left,
        width: pin.then_some(target.width),
        height: None,
        inverted: false,
    }
}
