/// Show/hide bookkeeping for one overlay.
///
/// `shown` is the logical state driven by show/hide triggers. `suppressed` is an orthogonal
/// override: while set, the overlay is never visible, but triggers keep updating the target so
/// the overlay can be revealed in the right place once the override is lifted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityState<T> {
    shown: bool,
    suppressed: bool,
    target: Option<T>,
}

impl<T> Default for VisibilityState<T> {
    fn default() -> Self {
        Self {
            shown: false,
            suppressed: false,
            target: None,
        }
    }
}

impl<T> VisibilityState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    pub fn is_visible(&self) -> bool {
        self.shown && !self.suppressed
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Records `target` and marks the overlay shown.
    ///
    /// Returns `true` when the overlay is now visible and should be positioned.
    pub fn show_at(&mut self, target: T) -> bool {
        self.shown = true;
        self.target = Some(target);
        self.is_visible()
    }

    pub fn hide(&mut self) {
        self.shown = false;
        self.target = None;
    }

    /// Returns `true` when lifting the override revealed the overlay at a recorded target.
    pub fn set_suppressed(&mut self, suppressed: bool) -> bool {
        self.suppressed = suppressed;
        if suppressed || self.target.is_none() {
            return false;
        }
        self.shown = true;
        true
    }
}
