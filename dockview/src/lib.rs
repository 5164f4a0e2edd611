//! A headless docking engine for floating overlays.
//!
//! For host integration (trigger binding, frame scheduling, content observation), see the
//! `dockview-adapter` crate.
//!
//! This crate attaches an overlay panel (tooltip, menu, suggestion list) to an edge of a target
//! box and keeps the two in sync:
//! - docking preferences such as `"bottom left"` with an overflow flip
//! - a simpler "below, flip above when clipped" policy
//! - CSS-shorthand offset vectors and cross-axis size pinning
//! - show/hide/suppression state and a single applied [`Placement`] value
//!
//! It is UI-agnostic. A DOM/GUI/TUI layer is expected to provide:
//! - the target's bounding box
//! - the overlay's measured size
//! - the viewport size and scroll offsets
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod dock_view;
mod offsets;
mod options;
mod placement;
pub mod positioner;
mod side;
mod types;
mod visibility;

#[cfg(test)]
mod tests;

pub use dock_view::{DockView, PendingFrame};
pub use offsets::{Offsets, ParseOffsetsError};
pub use options::{DockOptions, Strategy};
pub use placement::{Layout, Placement};
pub use side::{Axis, DockingSide, HorizontalSide, ParseSideError, VerticalSide};
pub use types::{PositionMode, Rect, Size, Viewport, Visibility};
pub use visibility::VisibilityState;
