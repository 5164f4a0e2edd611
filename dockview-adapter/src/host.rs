use dockview::{Placement, Rect, Size, Viewport};

use crate::TargetId;

/// Identity of one installed event listener.
///
/// The host must hand the same id back to [`crate::Popover::dispatch`] when the event fires, and
/// receives it again in [`Host::remove_listener`]; removal matches on this id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(pub u64);

/// Identity of one requested animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameTicket(pub u64);

/// What an installed listener does when its event fires.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigger<K> {
    Show(K),
    Hide,
}

/// Notifications emitted to the host for analytics/coordination.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Notification<K> {
    Show { target: K },
    Hide,
}

/// The environment a [`crate::Popover`] lives in (a DOM, a GUI toolkit, a test fake).
///
/// Callbacks flow back into the popover explicitly, the host never holds it:
/// - a fired listener → [`crate::Popover::dispatch`]
/// - a requested frame → [`crate::Popover::on_animation_frame`]
/// - observed overlay content mutations → [`crate::Popover::on_content_mutated`]
pub trait Host {
    type Id: TargetId;
    /// A live element handle, valid for the duration of one call.
    type Element;

    fn get_element(&self, id: &Self::Id) -> Option<Self::Element>;

    fn add_listener(&mut self, element: &Self::Element, event: &str, listener: ListenerId);
    fn remove_listener(&mut self, element: &Self::Element, event: &str, listener: ListenerId);

    /// Viewport-relative bounding box of `element`.
    fn bounding_rect(&self, element: &Self::Element) -> Rect;
    /// Current rendered size of the overlay.
    fn overlay_size(&self) -> Size;
    fn viewport(&self) -> Viewport;

    /// Writes the whole overlay style in one step.
    fn apply_placement(&mut self, placement: &Placement);

    /// Schedules [`crate::Popover::on_animation_frame`] before the next repaint.
    fn request_animation_frame(&mut self, ticket: FrameTicket);

    /// Starts watching the overlay subtree (children, attributes, character data).
    fn observe_content(&mut self);
    fn disconnect_content_observer(&mut self);

    /// Makes the overlay swallow pointer presses (`mousedown`/`click`: prevent default, stop
    /// propagation), so pressing on it does not blur the bound target before the click lands.
    fn capture_overlay_pointer_events(&mut self);
    fn release_overlay_pointer_events(&mut self);

    fn emit(&mut self, notification: Notification<Self::Id>) {
        let _ = notification;
    }
}
