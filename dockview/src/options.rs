use crate::{DockingSide, Offsets, ParseSideError, PositionMode};

/// Which placement algorithm a [`crate::DockView`] runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Preference-driven docking against one edge of the target, with an edge-overflow flip on
    /// the vertical axis.
    Dock(DockingSide),
    /// Always below the target; flipped above when the viewport bottom would clip the overlay
    /// and there is room above.
    FlipBelow,
}

/// Configuration for [`crate::DockView`].
///
/// Use [`DockOptions::docked`] or [`DockOptions::flip_below`] for the usual pairing of strategy
/// and position mode, then adjust with the `with_*` builders.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DockOptions {
    pub strategy: Strategy,
    pub mode: PositionMode,
    /// Pin the overlay's cross-axis size to the target's when the preference names no
    /// cross-axis keyword.
    pub pin_to_target: bool,
    /// Grows the target box before placement.
    pub offsets: Offsets,
}

impl DockOptions {
    /// Preference-driven docking in viewport-relative (`fixed`) mode, with pinning.
    pub fn docked(side: DockingSide) -> Self {
        Self {
            strategy: Strategy::Dock(side),
            mode: PositionMode::Fixed,
            pin_to_target: true,
            offsets: Offsets::ZERO,
        }
    }

    /// Below/above flipping in document-relative (`absolute`) mode, without pinning.
    pub fn flip_below() -> Self {
        Self {
            strategy: Strategy::FlipBelow,
            mode: PositionMode::Absolute,
            pin_to_target: false,
            offsets: Offsets::ZERO,
        }
    }

    /// Builds options from a host `dockingSide` string.
    ///
    /// A missing or blank preference falls back to [`Strategy::FlipBelow`].
    pub fn from_docking_side(side: Option<&str>) -> Result<Self, ParseSideError> {
        match side.map(DockingSide::parse_optional).transpose()?.flatten() {
            Some(side) => Ok(Self::docked(side)),
            None => Ok(Self::flip_below()),
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_mode(mut self, mode: PositionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_pin_to_target(mut self, pin_to_target: bool) -> Self {
        self.pin_to_target = pin_to_target;
        self
    }

    pub fn with_offsets(mut self, offsets: Offsets) -> Self {
        self.offsets = offsets;
        self
    }

    pub fn docking_side(&self) -> Option<DockingSide> {
        match self.strategy {
            Strategy::Dock(side) => Some(side),
            Strategy::FlipBelow => None,
        }
    }
}

impl Default for DockOptions {
    fn default() -> Self {
        Self::flip_below()
    }
}
