// Example: dock a suggestion list below an input and follow it as content grows.
use dockview::{DockOptions, DockView, Rect, Size, Viewport};

fn main() {
    let side = "bottom left".parse().expect("valid docking side");
    let mut view = DockView::new(DockOptions::docked(side));

    let input = Rect::new(100.0, 50.0, 240.0, 30.0);
    let viewport = Viewport::new(1024.0, 768.0);

    view.show_at("search-input");

    // Phase 1: apply pins (none here, a horizontal keyword is present) before layout.
    let frame = view
        .begin_reposition(input, viewport)
        .expect("visible with a target");

    // Phase 2: a frame later, with the overlay's measured size.
    let placement = view.finish_reposition(frame, Size::new(240.0, 120.0), viewport);
    println!(
        "top={} left={} visible={}",
        placement.top,
        placement.left,
        placement.is_visible()
    );

    // The list got longer; run the same entrypoint again.
    if let Some(p) = view.reposition_immediate(input, Size::new(240.0, 400.0), viewport) {
        println!("after growth: top={} left={}", p.top, p.left);
    }

    view.hide();
    println!("hidden: {:?}", view.placement().visibility);
}
