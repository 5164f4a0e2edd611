// Example: the simple policy, document-relative, flipping above near the viewport bottom.
use dockview::{DockOptions, DockView, Rect, Size, Viewport};

fn main() {
    let mut view = DockView::new(DockOptions::flip_below());
    view.show_at(1u32);

    let viewport = Viewport::new(1024.0, 600.0).with_scroll(0.0, 300.0);
    let overlay = Size::new(200.0, 180.0);

    for top in [100.0, 300.0, 500.0] {
        let target = Rect::new(top, 20.0, 200.0, 24.0);
        let Some(p) = view.reposition_immediate(target, overlay, viewport) else {
            continue;
        };
        println!(
            "target.top={top} -> top={} inverted={} rendered_top={}",
            p.top,
            p.inverted,
            p.effective_top(overlay.height)
        );
    }
}
