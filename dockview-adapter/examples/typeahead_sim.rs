use std::collections::HashMap;

use dockview::{Placement, Rect, Size, Viewport};
use dockview_adapter::{
    FrameTicket, Host, ListenerId, Notification, Popover, PopoverOptions, PopoverProps,
};

// Example: a typeahead that stays muted until the query is long enough.
//
// The host here is a toy: one input element, a suggestion list whose height grows with the
// number of matches, and a frame queue drained by the "event loop" below.
#[derive(Default)]
struct ToyDom {
    rects: HashMap<&'static str, Rect>,
    listeners: Vec<(&'static str, String, ListenerId)>,
    frames: Vec<FrameTicket>,
    rows: usize,
}

impl Host for ToyDom {
    type Id = &'static str;
    type Element = &'static str;

    fn get_element(&self, id: &&'static str) -> Option<&'static str> {
        self.rects.contains_key(id).then_some(*id)
    }

    fn add_listener(&mut self, element: &&'static str, event: &str, listener: ListenerId) {
        self.listeners.push((*element, event.to_string(), listener));
    }

    fn remove_listener(&mut self, element: &&'static str, event: &str, listener: ListenerId) {
        self.listeners
            .retain(|(el, ev, l)| !(el == element && ev == event && *l == listener));
    }

    fn bounding_rect(&self, element: &&'static str) -> Rect {
        self.rects[element]
    }

    fn overlay_size(&self) -> Size {
        Size::new(240.0, 24.0 * self.rows as f64)
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(1024.0, 300.0)
    }

    fn apply_placement(&mut self, p: &Placement) {
        println!(
            "  style: visibility={} position={} top={} left={} width={:?}",
            p.visibility.as_css(),
            p.mode.as_css(),
            p.top,
            p.left,
            p.width
        );
    }

    fn request_animation_frame(&mut self, ticket: FrameTicket) {
        self.frames.push(ticket);
    }

    fn observe_content(&mut self) {}

    fn disconnect_content_observer(&mut self) {}

    fn capture_overlay_pointer_events(&mut self) {
        println!("  overlay swallows mousedown/click");
    }

    fn release_overlay_pointer_events(&mut self) {}

    fn emit(&mut self, notification: Notification<&'static str>) {
        println!("  event: {notification:?}");
    }
}

fn fire(p: &mut Popover<ToyDom>, id: &'static str, event: &str) {
    let listeners: Vec<_> = p
        .host()
        .listeners
        .iter()
        .filter(|(el, ev, _)| *el == id && ev == event)
        .map(|(_, _, l)| *l)
        .collect();
    for l in listeners {
        p.dispatch(l);
    }
}

fn run_frames(p: &mut Popover<ToyDom>) {
    let frames = std::mem::take(&mut p.host_mut().frames);
    for ticket in frames {
        p.on_animation_frame(ticket);
    }
}

fn main() {
    let mut dom = ToyDom::default();
    dom.rects.insert("query", Rect::new(200.0, 40.0, 240.0, 28.0));

    let props = PopoverProps {
        show_events: Some(vec!["focus".into(), "input".into()]),
        hide_events: Some(vec!["blur".into()]),
        docking_side: Some("bottom".into()),
        offsets: Some("2 0".into()),
    };
    let options = PopoverOptions::try_from(props)
        .expect("valid props")
        .with_observe("query")
        .with_suppressed(true);
    let mut popover = Popover::mount(dom, options);

    println!("focus (muted):");
    fire(&mut popover, "query", "focus");

    for (typed, rows) in [("r", 9), ("ru", 4), ("rus", 1)] {
        println!("typed {typed:?}:");
        popover.set_suppressed(typed.len() < 2);
        popover.host_mut().rows = rows;
        popover.on_content_mutated();
        run_frames(&mut popover);
    }

    println!("blur:");
    fire(&mut popover, "query", "blur");
    popover.teardown();
    println!("listeners left: {}", popover.host().listeners.len());
}
