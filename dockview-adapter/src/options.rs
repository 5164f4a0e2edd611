use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use dockview::{DockOptions, DockingSide, Offsets, ParseOffsetsError, ParseSideError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid dockingSide: {0}")]
    DockingSide(#[from] ParseSideError),
    #[error("invalid offsets: {0}")]
    Offsets(#[from] ParseOffsetsError),
}

/// Configuration for [`crate::Popover`].
#[derive(Clone, Debug, PartialEq)]
pub struct PopoverOptions<K> {
    /// Event names that show the overlay at the element they fire on.
    pub show_events: Vec<String>,
    /// Event names that hide the overlay.
    pub hide_events: Vec<String>,
    pub dock: DockOptions,
    /// Elements attached on mount.
    pub observe: Vec<K>,
    /// Start muted.
    pub suppressed: bool,
}

impl<K> Default for PopoverOptions<K> {
    fn default() -> Self {
        Self {
            show_events: vec!["focus".to_string()],
            hide_events: vec!["blur".to_string()],
            dock: DockOptions::default(),
            observe: Vec::new(),
            suppressed: false,
        }
    }
}

impl<K> PopoverOptions<K> {
    pub fn new(dock: DockOptions) -> Self {
        Self {
            dock,
            ..Self::default()
        }
    }

    pub fn with_show_events<S: Into<String>>(mut self, events: impl IntoIterator<Item = S>) -> Self {
        self.show_events = events.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_hide_events<S: Into<String>>(mut self, events: impl IntoIterator<Item = S>) -> Self {
        self.hide_events = events.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dock(mut self, dock: DockOptions) -> Self {
        self.dock = dock;
        self
    }

    /// Switches to preference-driven docking, keeping the current offsets.
    pub fn with_docking_side(mut self, side: DockingSide) -> Self {
        self.dock = DockOptions::docked(side).with_offsets(self.dock.offsets);
        self
    }

    pub fn with_offsets(mut self, offsets: Offsets) -> Self {
        self.dock.offsets = offsets;
        self
    }

    pub fn with_observe(mut self, id: K) -> Self {
        self.observe.push(id);
        self
    }

    pub fn with_suppressed(mut self, suppressed: bool) -> Self {
        self.suppressed = suppressed;
        self
    }
}

/// The string-typed property surface a host component exposes (`showEvents`, `hideEvents`,
/// `dockingSide`, `offsets`).
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize` using camelCase
/// field names; every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct PopoverProps {
    pub show_events: Option<Vec<String>>,
    pub hide_events: Option<Vec<String>>,
    pub docking_side: Option<String>,
    pub offsets: Option<String>,
}

impl<K> TryFrom<PopoverProps> for PopoverOptions<K> {
    type Error = ConfigError;

    /// Missing event lists keep the defaults; a missing or blank `dockingSide` selects the
    /// below/above flipping policy.
    fn try_from(props: PopoverProps) -> Result<Self, Self::Error> {
        let offsets = match props.offsets.as_deref() {
            Some(s) => s.parse()?,
            None => Offsets::ZERO,
        };
        let dock = DockOptions::from_docking_side(props.docking_side.as_deref())?
            .with_offsets(offsets);

        let mut options = Self::new(dock);
        if let Some(events) = props.show_events {
            options.show_events = events;
        }
        if let Some(events) = props.hide_events {
            options.hide_events = events;
        }
        Ok(options)
    }
}
