use alloc::string::String;
use alloc::vec::Vec;

use dockview::{DockOptions, DockView, PendingFrame, Placement};

use crate::{
    BindError, Bindings, FrameTicket, Host, ListenerId, Notification, PopoverOptions, Trigger,
};

/// A framework-neutral docking overlay component.
///
/// Wraps a [`DockView`] and a host, and owns the show/hide listener bindings, the pending frame
/// callback, the content observer subscription and the overlay's pointer capture. The host
/// feeds events back in through [`Popover::dispatch`], [`Popover::on_animation_frame`] and
/// [`Popover::on_content_mutated`].
///
/// Dropping a popover tears it down.
pub struct Popover<H: Host> {
    host: H,
    view: DockView<H::Id>,
    bindings: Bindings<H::Id>,
    show_events: Vec<String>,
    hide_events: Vec<String>,
    /// At most one frame is outstanding; a newer request supersedes it.
    pending: Option<(FrameTicket, PendingFrame)>,
    next_ticket: u64,
    torn_down: bool,
}

impl<H: Host> Popover<H> {
    /// Mounts the overlay: writes its initial hidden placement, starts observing its content,
    /// captures pointer presses on it and attaches every id in `options.observe`.
    pub fn mount(host: H, options: PopoverOptions<H::Id>) -> Self {
        let PopoverOptions {
            show_events,
            hide_events,
            dock,
            observe,
            suppressed,
        } = options;

        let mut view = DockView::new(dock);
        if suppressed {
            view.set_suppressed(true);
        }

        let mut popover = Self {
            host,
            view,
            bindings: Bindings::new(),
            show_events,
            hide_events,
            pending: None,
            next_ticket: 0,
            torn_down: false,
        };

        popover.apply();
        popover.host.observe_content();
        popover.host.capture_overlay_pointer_events();
        for id in observe {
            // Unresolved ids are already logged.
            let _ = popover.attach(id);
        }
        ddebug!(attached = popover.bindings.len(), "popover mounted");
        popover
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn view(&self) -> &DockView<H::Id> {
        &self.view
    }

    pub fn placement(&self) -> Placement {
        self.view.placement()
    }

    pub fn is_visible(&self) -> bool {
        self.view.is_visible()
    }

    pub fn current_target(&self) -> Option<&H::Id> {
        self.view.current_target()
    }

    pub fn bindings(&self) -> &Bindings<H::Id> {
        &self.bindings
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn pending_frames(&self) -> usize {
        usize::from(self.pending.is_some())
    }

    /// Binds the configured show/hide events on the element behind `id`.
    pub fn attach(&mut self, id: H::Id) -> Result<(), BindError> {
        if self.torn_down {
            return Err(BindError::TornDown);
        }
        self.bindings
            .attach(&mut self.host, id, &self.show_events, &self.hide_events)
            .map(|_| ())
    }

    pub fn detach(&mut self, id: &H::Id) {
        self.bindings.detach(&mut self.host, id);
    }

    pub fn detach_all(&mut self) {
        self.bindings.detach_all(&mut self.host);
    }

    /// Runs the action of a fired listener. Returns `false` for unknown or detached listeners.
    pub fn dispatch(&mut self, listener: ListenerId) -> bool {
        if self.torn_down {
            return false;
        }
        let Some(trigger) = self.bindings.trigger(listener).cloned() else {
            dtrace!(listener = listener.0, "dispatch: unknown listener");
            return false;
        };
        match trigger {
            Trigger::Show(id) => self.show_at(id),
            Trigger::Hide => self.hide(),
        }
        true
    }

    /// Shows the overlay docked to the element behind `id`.
    ///
    /// An id that does not resolve is logged and ignored. While suppressed, the target is
    /// recorded and `show` is still emitted, but the overlay stays hidden.
    pub fn show_at(&mut self, id: H::Id) {
        if self.torn_down {
            return;
        }
        if self.host.get_element(&id).is_none() {
            dwarn!(id = ?id, "could not show overlay at element");
            return;
        }
        let reposition = self.view.show_at(id.clone());
        self.apply();
        if reposition {
            self.reposition();
        }
        self.host.emit(Notification::Show { target: id });
    }

    pub fn hide(&mut self) {
        if self.torn_down {
            return;
        }
        self.view.hide();
        self.apply();
        self.host.emit(Notification::Hide);
    }

    pub fn set_suppressed(&mut self, suppressed: bool) {
        if self.torn_down {
            return;
        }
        let reposition = self.view.set_suppressed(suppressed);
        self.apply();
        if reposition {
            self.reposition();
        }
    }

    pub fn set_dock_options(&mut self, options: DockOptions) {
        if self.torn_down {
            return;
        }
        self.view.set_options(options);
        self.apply();
        self.reposition();
    }

    /// Requests a reposition against the current target.
    ///
    /// Writes what is known up front (pins, the unflipped position) and schedules the measuring
    /// pass for the next frame. Returns the scheduled ticket, or `None` when there is nothing to
    /// do (hidden, no target, or the target no longer resolves). A frame still pending from an
    /// earlier request is superseded and its ticket ignored when it fires.
    pub fn reposition(&mut self) -> Option<FrameTicket> {
        if self.torn_down || !self.view.wants_reposition() {
            return None;
        }
        let id = self.view.current_target()?;
        let Some(element) = self.host.get_element(id) else {
            dtrace!(id = ?id, "reposition: target no longer resolves");
            return None;
        };
        let target = self.host.bounding_rect(&element);
        let viewport = self.host.viewport();

        let frame = self.view.begin_reposition(target, viewport)?;
        self.apply();

        let ticket = FrameTicket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        if self.pending.replace((ticket, frame)).is_some() {
            dtrace!(ticket = ticket.0, "reposition: superseded pending frame");
        }
        self.host.request_animation_frame(ticket);
        Some(ticket)
    }

    /// Completes a reposition scheduled with [`Host::request_animation_frame`].
    ///
    /// Runs even if the overlay was hidden since the request; the result applies to the hidden
    /// overlay. Unknown or superseded tickets and frames arriving after teardown are ignored.
    pub fn on_animation_frame(&mut self, ticket: FrameTicket) {
        if self.torn_down {
            return;
        }
        let frame = match self.pending.take() {
            Some((pending, frame)) if pending == ticket => frame,
            other => {
                self.pending = other;
                return;
            }
        };
        let overlay = self.host.overlay_size();
        let viewport = self.host.viewport();
        self.view.finish_reposition(frame, overlay, viewport);
        self.apply();
    }

    /// Reacts to a mutation in the overlay subtree. Coalesced notifications are fine.
    pub fn on_content_mutated(&mut self) {
        if self.torn_down {
            return;
        }
        self.reposition();
    }

    /// Disconnects the content observer, releases the pointer capture, then removes every
    /// listener. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.host.disconnect_content_observer();
        self.host.release_overlay_pointer_events();
        self.detach_all();
        self.pending = None;
        self.torn_down = true;
        ddebug!("popover torn down");
    }

    fn apply(&mut self) {
        let placement = self.view.placement();
        self.host.apply_placement(&placement);
    }
}

impl<H: Host> Drop for Popover<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<H: Host + core::fmt::Debug> core::fmt::Debug for Popover<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Popover")
            .field("host", &self.host)
            .field("view", &self.view)
            .field("bindings", &self.bindings.len())
            .field("pending", &self.pending.as_ref().map(|(ticket, _)| *ticket))
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}
