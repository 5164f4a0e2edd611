use crate::positioner;
use crate::{
    DockOptions, Placement, Rect, Size, Strategy, Viewport, Visibility, VisibilityState,
};

/// The target box captured when a reposition was requested, awaiting the frame callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingFrame {
    /// Target box with the offset vector already applied.
    pub target: Rect,
}

/// A headless docking overlay.
///
/// This type holds no UI objects. The adapter drives it in two phases per reposition:
///
/// 1. [`DockView::begin_reposition`] with the target's current bounding box. Anything that can
///    be decided without measuring the overlay (size pins, the unflipped position) is written to
///    the placement immediately, so the host can apply it before the next layout.
/// 2. [`DockView::finish_reposition`] from a "before next repaint" callback, with the overlay's
///    measured size. This computes the final coordinates.
///
/// Measuring the overlay in the same turn as a style write reads stale geometry, so hosts must
/// not call both phases back-to-back unless their layout is synchronous.
#[derive(Clone, Debug)]
pub struct DockView<T> {
    options: DockOptions,
    state: VisibilityState<T>,
    placement: Placement,
}

impl<T: Clone + PartialEq> DockView<T> {
    pub fn new(options: DockOptions) -> Self {
        ddebug!(strategy = ?options.strategy, mode = ?options.mode, "DockView::new");
        Self {
            placement: Placement::hidden(options.mode),
            state: VisibilityState::new(),
            options,
        }
    }

    pub fn options(&self) -> &DockOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: DockOptions) {
        self.options = options;
        self.placement.mode = options.mode;
        dtrace!(strategy = ?options.strategy, "DockView::set_options");
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn state(&self) -> &VisibilityState<T> {
        &self.state
    }

    pub fn is_shown(&self) -> bool {
        self.state.is_shown()
    }

    pub fn is_suppressed(&self) -> bool {
        self.state.is_suppressed()
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn current_target(&self) -> Option<&T> {
        self.state.target()
    }

    /// Shows the overlay at `target`.
    ///
    /// While suppressed the target is recorded but the overlay stays hidden. Returns `true` when
    /// the caller should reposition.
    pub fn show_at(&mut self, target: T) -> bool {
        let reposition = self.state.show_at(target);
        self.sync_visibility();
        reposition
    }

    pub fn hide(&mut self) {
        self.state.hide();
        self.sync_visibility();
    }

    /// Returns `true` when the overlay was revealed and the caller should reposition.
    pub fn set_suppressed(&mut self, suppressed: bool) -> bool {
        let reposition = self.state.set_suppressed(suppressed);
        self.sync_visibility();
        ddebug!(suppressed, reposition, "DockView::set_suppressed");
        reposition
    }

    /// Whether a reposition request would do anything right now.
    pub fn wants_reposition(&self) -> bool {
        self.state.is_visible() && self.state.target().is_some()
    }

    /// First phase of a reposition against the current target's bounding box.
    ///
    /// Returns `None` (and leaves the placement untouched) when there is no current target or
    /// the overlay is not visible. Measuring a hidden overlay yields a degenerate box.
    pub fn begin_reposition(&mut self, target: Rect, viewport: Viewport) -> Option<PendingFrame> {
        if !self.wants_reposition() {
            dtrace!(
                shown = self.state.is_shown(),
                suppressed = self.state.is_suppressed(),
                "reposition ignored"
            );
            return None;
        }

        let target = target.outset(self.options.offsets);
        let pin = self.options.pin_to_target;
        let mode = self.options.mode;
        match self.options.strategy {
            Strategy::Dock(side) => {
                let (width, height) = if pin {
                    positioner::pinned_size(side, target)
                } else {
                    (None, None)
                };
                self.placement.width = width;
                self.placement.height = height;
            }
            Strategy::FlipBelow => {
                self.placement
                    .set_layout(positioner::below(target, viewport, mode, pin));
            }
        }
        Some(PendingFrame { target })
    }

    /// Second phase of a reposition, run before the next repaint.
    ///
    /// Always computes the placement, even if the overlay was hidden since the frame was
    /// requested; the coordinates then apply to a hidden overlay.
    pub fn finish_reposition(
        &mut self,
        frame: PendingFrame,
        overlay: Size,
        viewport: Viewport,
    ) -> Placement {
        let pin = self.options.pin_to_target;
        let mode = self.options.mode;
        let layout = match self.options.strategy {
            Strategy::Dock(side) => {
                positioner::dock(side, frame.target, overlay, viewport, mode, pin)
            }
            Strategy::FlipBelow => {
                positioner::flip_below(frame.target, overlay, viewport, mode, pin)
            }
        };
        self.placement.set_layout(layout);
        dtrace!(
            top = layout.top,
            left = layout.left,
            inverted = layout.inverted,
            "placement computed"
        );
        self.placement
    }

    /// Runs both phases in one call, for hosts whose layout is synchronous (immediate-mode UIs,
    /// terminal renderers) and whose `overlay` size already reflects any pins.
    pub fn reposition_immediate(
        &mut self,
        target: Rect,
        overlay: Size,
        viewport: Viewport,
    ) -> Option<Placement> {
        let frame = self.begin_reposition(target, viewport)?;
        Some(self.finish_reposition(frame, overlay, viewport))
    }

    fn sync_visibility(&mut self) {
        self.placement.visibility = if self.state.is_visible() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}
