use crate::{PositionMode, Viewport, Visibility};

/// The complete style state of the overlay, written to the host in one step.
///
/// `width`/`height` are `Some` when pinned to the target and `None` when the overlay sizes to
/// its content.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub top: f64,
    pub left: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub visibility: Visibility,
    pub mode: PositionMode,
    /// The overlay is flipped above its target and must be translated up by its own height
    /// (`transform: translateY(-100%)`).
    pub inverted: bool,
}

impl Placement {
    pub fn hidden(mode: PositionMode) -> Self {
        Self {
            top: 0.0,
            left: 0.0,
            width: None,
            height: None,
            visibility: Visibility::Hidden,
            mode,
            inverted: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// The rendered top edge once the inversion transform is applied.
    pub fn effective_top(&self, overlay_height: f64) -> f64 {
        if self.inverted {
            self.top - overlay_height
        } else {
            self.top
        }
    }

    pub(crate) fn set_layout(&mut self, layout: Layout) {
        self.top = layout.top;
        self.left = layout.left;
        self.width = layout.width;
        self.height = layout.height;
        self.inverted = layout.inverted;
    }
}

/// Geometry produced by one run of a placement algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub top: f64,
    pub left: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub inverted: bool,
}

impl Layout {
    /// Moves viewport-relative geometry into `mode`'s coordinate space: `Absolute` adds the
    /// scroll offsets, `Fixed` keeps it as is.
    pub fn in_mode(mut self, mode: PositionMode, viewport: Viewport) -> Self {
        if mode == PositionMode::Absolute {
            self.top += viewport.scroll_y;
            self.left += viewport.scroll_x;
        }
        self
    }

    /// Never places the overlay off the top or left edge.
    pub fn clamped(mut self) -> Self {
        self.top = self.top.max(0.0);
        self.left = self.left.max(0.0);
        self
    }
}
