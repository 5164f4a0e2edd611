use crate::*;

use alloc::string::ToString;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_f64(&mut self, start: f64, end: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        start + (end - start) * unit
    }
}

fn dock_fixed(side: DockingSide, target: Rect, overlay: Size, pin: bool) -> Layout {
    positioner::dock(side, target, overlay, Viewport::default(), PositionMode::Fixed, pin)
}

fn flip_absolute(target: Rect, overlay: Size, viewport: Viewport, pin: bool) -> Layout {
    positioner::flip_below(target, overlay, viewport, PositionMode::Absolute, pin)
}

fn target() -> Rect {
    // top:100 left:50 right:150 bottom:130
    Rect::new(100.0, 50.0, 100.0, 30.0)
}

fn side(s: &str) -> DockingSide {
    s.parse().unwrap()
}

fn docked(s: &str) -> DockView<&'static str> {
    DockView::new(DockOptions::docked(side(s)))
}

fn shown(mut view: DockView<&'static str>) -> DockView<&'static str> {
    assert!(view.show_at("input"));
    view
}

#[test]
fn offsets_expand_css_shorthand() {
    assert_eq!(
        Offsets::from_values(&[3.0]).unwrap(),
        Offsets::new(3.0, 3.0, 3.0, 3.0)
    );
    assert_eq!(
        Offsets::from_values(&[1.0, 2.0]).unwrap(),
        Offsets::new(1.0, 2.0, 1.0, 2.0)
    );
    assert_eq!(
        Offsets::from_values(&[1.0, 2.0, 3.0, 4.0]).unwrap(),
        Offsets::new(1.0, 2.0, 3.0, 4.0)
    );
}

#[test]
fn offsets_parse_from_props_string() {
    assert_eq!("4".parse::<Offsets>().unwrap(), Offsets::uniform(4.0));
    assert_eq!(
        " 2  -6 ".parse::<Offsets>().unwrap(),
        Offsets::new(2.0, -6.0, 2.0, -6.0)
    );
    assert_eq!("".parse::<Offsets>().unwrap(), Offsets::ZERO);
    assert!("".parse::<Offsets>().unwrap().is_zero());
}

#[test]
fn offsets_reject_bad_counts_and_tokens() {
    assert_eq!(
        "1 2 3".parse::<Offsets>(),
        Err(ParseOffsetsError::InvalidCount(3))
    );
    assert_eq!(
        Offsets::from_values(&[]),
        Err(ParseOffsetsError::InvalidCount(0))
    );
    assert_eq!(
        "1 2 3 4 5".parse::<Offsets>(),
        Err(ParseOffsetsError::InvalidCount(5))
    );
    assert_eq!(
        "4px".parse::<Offsets>(),
        Err(ParseOffsetsError::InvalidNumber("4px".to_string()))
    );
    assert_eq!(
        "NaN".parse::<Offsets>(),
        Err(ParseOffsetsError::InvalidNumber("NaN".to_string()))
    );
}

#[test]
fn docking_side_primary_axis_is_first_keyword() {
    let s = side("bottom left");
    assert_eq!(s.primary(), Axis::Vertical);
    assert_eq!(s.vertical_side(), Some(VerticalSide::Bottom));
    assert_eq!(s.horizontal_side(), Some(HorizontalSide::Left));

    let s = side("right bottom");
    assert_eq!(s.primary(), Axis::Horizontal);
    assert_eq!(s.vertical_side(), Some(VerticalSide::Bottom));
    assert_eq!(s.horizontal_side(), Some(HorizontalSide::Right));

    let s = side("top");
    assert_eq!(s, DockingSide::vertical(VerticalSide::Top));
    assert_eq!(s.horizontal_side(), None);
}

#[test]
fn docking_side_display_keeps_order() {
    assert_eq!(side("bottom  left").to_string(), "bottom left");
    assert_eq!(side("left").to_string(), "left");
    assert_eq!(
        DockingSide::horizontal(HorizontalSide::Right)
            .then_vertical(VerticalSide::Top)
            .to_string(),
        "right top"
    );
}

#[test]
fn docking_side_rejects_invalid_input() {
    assert_eq!("".parse::<DockingSide>(), Err(ParseSideError::Empty));
    assert_eq!("   ".parse::<DockingSide>(), Err(ParseSideError::Empty));
    assert_eq!(
        "top bottom".parse::<DockingSide>(),
        Err(ParseSideError::DuplicateAxis(Axis::Vertical))
    );
    assert_eq!(
        "left left".parse::<DockingSide>(),
        Err(ParseSideError::DuplicateAxis(Axis::Horizontal))
    );
    assert_eq!(
        "below".parse::<DockingSide>(),
        Err(ParseSideError::UnknownKeyword("below".to_string()))
    );
    assert_eq!(DockingSide::parse_optional(" "), Ok(None));
}

#[test]
fn then_builders_ignore_primary_axis() {
    // A second keyword on the primary axis would break the one-keyword-per-axis invariant.
    let s = DockingSide::vertical(VerticalSide::Top).then_vertical(VerticalSide::Bottom);
    assert_eq!(s.vertical_side(), Some(VerticalSide::Top));
    let s = DockingSide::horizontal(HorizontalSide::Left).then_horizontal(HorizontalSide::Right);
    assert_eq!(s.horizontal_side(), Some(HorizontalSide::Left));
}

#[test]
fn dock_bottom_places_below_and_pins_width() {
    let mut view = shown(docked("bottom"));
    let viewport = Viewport::new(800.0, 400.0);

    let frame = view.begin_reposition(target(), viewport).unwrap();
    // Width pin is known before the overlay is measured.
    assert_eq!(view.placement().width, Some(100.0));

    let p = view.finish_reposition(frame, Size::new(40.0, 20.0), viewport);
    assert_eq!(p.top, 130.0);
    assert_eq!(p.left, 50.0);
    assert_eq!(p.width, Some(100.0));
    assert_eq!(p.height, None);
    assert_eq!(p.mode, PositionMode::Fixed);
    assert!(p.is_visible());
}

#[test]
fn dock_top_places_above_when_there_is_room() {
    let mut view = shown(docked("top"));
    let viewport = Viewport::new(800.0, 400.0);
    let p = view
        .reposition_immediate(target(), Size::new(100.0, 20.0), viewport)
        .unwrap();
    // target.top - 20 = 80 >= 0: no flip.
    assert_eq!(p.top, 80.0);
    assert_eq!(p.left, 50.0);
    assert_eq!(p.width, Some(100.0));
}

#[test]
fn dock_top_flips_below_without_room_above() {
    let t = Rect::new(10.0, 50.0, 100.0, 30.0);
    let overlay = Size::new(100.0, 20.0);
    assert_eq!(
        positioner::resolve_vertical(side("top"), t, overlay),
        Some(VerticalSide::Bottom)
    );
    let l = dock_fixed(side("top"), t, overlay, true);
    assert_eq!(l.top, 40.0);
}

#[test]
fn horizontal_primary_bottom_flips_to_top_when_it_would_overflow_above() {
    let t = Rect::new(5.0, 50.0, 100.0, 20.0);
    let overlay = Size::new(60.0, 40.0);
    // bottom(25) - 40 < 0
    assert_eq!(
        positioner::resolve_vertical(side("right bottom"), t, overlay),
        Some(VerticalSide::Top)
    );
    let l = dock_fixed(side("right bottom"), t, overlay, true);
    assert_eq!(l.top, 5.0);
    assert_eq!(l.left, 150.0);
    assert_eq!(l.height, None);
}

#[test]
fn horizontal_primary_bottom_aligns_bottom_edges_when_it_fits() {
    let overlay = Size::new(60.0, 20.0);
    assert_eq!(
        positioner::resolve_vertical(side("right bottom"), target(), overlay),
        Some(VerticalSide::Bottom)
    );
    let l = dock_fixed(side("right bottom"), target(), overlay, true);
    // bottom(130) - 20
    assert_eq!(l.top, 110.0);
    assert_eq!(l.left, 150.0);
}

#[test]
fn horizontal_left_places_overlay_before_target() {
    let l = dock_fixed(side("left top"), target(), Size::new(30.0, 60.0), true);
    assert_eq!(l.left, 20.0);
    assert_eq!(l.top, 100.0);
    assert_eq!((l.width, l.height), (None, None));
}

#[test]
fn horizontal_without_vertical_pins_height() {
    let l = dock_fixed(side("right"), target(), Size::new(30.0, 60.0), true);
    assert_eq!(l.top, 100.0);
    assert_eq!(l.left, 150.0);
    assert_eq!(l.height, Some(30.0));
    assert_eq!(l.width, None);

    let l = dock_fixed(side("right"), target(), Size::new(30.0, 60.0), false);
    assert_eq!(l.height, None);
}

#[test]
fn vertical_with_horizontal_keyword_aligns_and_does_not_pin() {
    let overlay = Size::new(180.0, 20.0);
    let l = dock_fixed(side("bottom right"), target(), overlay, true);
    // right(150) - 180 = -30, clamped.
    assert_eq!(l.left, 0.0);
    assert_eq!(l.top, 130.0);
    assert_eq!(l.width, None);

    let l = dock_fixed(side("bottom left"), target(), overlay, true);
    assert_eq!(l.left, 50.0);
}

#[test]
fn negative_coordinates_clamp_to_zero() {
    let t = Rect::new(-50.0, -20.0, 10.0, 10.0);
    let l = dock_fixed(side("left bottom"), t, Size::new(30.0, 100.0), true);
    assert_eq!(l.top, 0.0);
    assert_eq!(l.left, 0.0);

    let l = flip_absolute(t, Size::new(30.0, 100.0), Viewport::new(300.0, 300.0), false);
    assert_eq!(l.top, 0.0);
    assert_eq!(l.left, 0.0);
}

#[test]
fn placement_is_clamped_for_random_inputs() {
    let mut rng = Lcg::new(7);
    let sides = ["top", "bottom", "left", "right", "top right", "left bottom"];
    for i in 0..500usize {
        let t = Rect::new(
            rng.gen_f64(-200.0, 600.0),
            rng.gen_f64(-200.0, 600.0),
            rng.gen_f64(0.0, 300.0),
            rng.gen_f64(0.0, 300.0),
        );
        let overlay = Size::new(rng.gen_f64(0.0, 400.0), rng.gen_f64(0.0, 400.0));
        let s = side(sides[i % sides.len()]);
        let a = dock_fixed(s, t, overlay, true);
        let b = dock_fixed(s, t, overlay, true);
        assert_eq!(a, b);
        assert!(a.top >= 0.0 && a.left >= 0.0, "{a:?}");

        let viewport = Viewport::new(800.0, rng.gen_f64(100.0, 800.0));
        let f = flip_absolute(t, overlay, viewport, false);
        assert!(f.top >= 0.0 && f.left >= 0.0, "{f:?}");
    }
}

#[test]
fn repositioning_twice_is_idempotent() {
    let mut view = shown(docked("bottom left"));
    let viewport = Viewport::new(800.0, 400.0);
    let overlay = Size::new(40.0, 20.0);
    let a = view.reposition_immediate(target(), overlay, viewport).unwrap();
    let b = view.reposition_immediate(target(), overlay, viewport).unwrap();
    assert_eq!(a, b);
    assert_eq!((a.top, a.left), (130.0, 50.0));
}

#[test]
fn offsets_grow_the_target_box() {
    let opts = DockOptions::docked(side("bottom")).with_offsets("4 2".parse().unwrap());
    let mut view = DockView::new(opts);
    view.show_at("input");
    let p = view
        .reposition_immediate(target(), Size::new(40.0, 20.0), Viewport::new(800.0, 400.0))
        .unwrap();
    // bottom 130 + 4, left 50 - 2, width 100 + 2 + 2
    assert_eq!(p.top, 134.0);
    assert_eq!(p.left, 48.0);
    assert_eq!(p.width, Some(104.0));
}

#[test]
fn pinning_can_be_disabled() {
    let opts = DockOptions::docked(side("bottom")).with_pin_to_target(false);
    let mut view = DockView::new(opts);
    view.show_at("input");
    let p = view
        .reposition_immediate(target(), Size::new(40.0, 20.0), Viewport::new(800.0, 400.0))
        .unwrap();
    assert_eq!(p.width, None);
    assert_eq!(p.top, 130.0);
}

#[test]
fn flip_below_defaults_below_in_document_coordinates() {
    let mut view = DockView::new(DockOptions::flip_below());
    view.show_at("input");
    let viewport = Viewport::new(800.0, 400.0).with_scroll(10.0, 250.0);

    let frame = view.begin_reposition(target(), viewport).unwrap();
    // The unflipped position is applied before measuring.
    assert_eq!(view.placement().top, 380.0);
    assert_eq!(view.placement().left, 60.0);

    let p = view.finish_reposition(frame, Size::new(80.0, 50.0), viewport);
    assert_eq!(p.top, 380.0);
    assert_eq!(p.left, 60.0);
    assert!(!p.inverted);
    assert_eq!(p.mode, PositionMode::Absolute);
}

#[test]
fn flip_below_inverts_when_clipped_and_room_above() {
    let mut view = DockView::new(DockOptions::flip_below());
    view.show_at("input");
    let viewport = Viewport::new(800.0, 200.0).with_scroll(0.0, 40.0);
    let overlay = Size::new(80.0, 90.0);

    let p = view.reposition_immediate(target(), overlay, viewport).unwrap();
    // 130 + 90 > 200 and 100 - 90 > 0
    assert!(p.inverted);
    assert_eq!(p.top, 140.0);
    assert_eq!(p.effective_top(overlay.height), 50.0);
}

#[test]
fn flip_below_stays_below_without_room_above() {
    let viewport = Viewport::new(800.0, 200.0);
    let l = flip_absolute(target(), Size::new(80.0, 120.0), viewport, false);
    assert!(!l.inverted);
    assert_eq!(l.top, 130.0);

    let l = flip_absolute(target(), Size::new(80.0, 120.0), viewport, true);
    assert_eq!(l.width, Some(100.0));
}

#[test]
fn absolute_docking_adds_scroll_offsets() {
    let opts = DockOptions::docked(side("bottom")).with_mode(PositionMode::Absolute);
    let mut view = DockView::new(opts);
    view.show_at("input");
    let viewport = Viewport::new(800.0, 400.0).with_scroll(20.0, 500.0);
    let p = view
        .reposition_immediate(target(), Size::new(40.0, 20.0), viewport)
        .unwrap();
    assert_eq!(p.mode, PositionMode::Absolute);
    assert_eq!((p.top, p.left), (630.0, 70.0));
    assert_eq!(p.width, Some(100.0));
}

#[test]
fn fixed_flip_below_ignores_scroll_offsets() {
    let opts = DockOptions::flip_below().with_mode(PositionMode::Fixed);
    let mut view = DockView::new(opts);
    view.show_at("input");
    let viewport = Viewport::new(800.0, 400.0).with_scroll(20.0, 500.0);

    let frame = view.begin_reposition(target(), viewport).unwrap();
    assert_eq!((view.placement().top, view.placement().left), (130.0, 50.0));

    let p = view.finish_reposition(frame, Size::new(80.0, 50.0), viewport);
    assert_eq!(p.mode, PositionMode::Fixed);
    assert_eq!((p.top, p.left), (130.0, 50.0));

    // Flipped above, still screen-relative.
    let viewport = Viewport::new(800.0, 200.0).with_scroll(0.0, 500.0);
    let p = view
        .reposition_immediate(target(), Size::new(80.0, 90.0), viewport)
        .unwrap();
    assert!(p.inverted);
    assert_eq!(p.top, 100.0);
}

#[test]
fn missing_docking_side_defaults_to_flip_below() {
    assert_eq!(
        DockOptions::from_docking_side(None).unwrap(),
        DockOptions::flip_below()
    );
    assert_eq!(
        DockOptions::from_docking_side(Some("  ")).unwrap(),
        DockOptions::default()
    );
    let opts = DockOptions::from_docking_side(Some("bottom left")).unwrap();
    assert_eq!(opts.docking_side(), Some(side("bottom left")));
    assert_eq!(opts.mode, PositionMode::Fixed);
    assert!(DockOptions::from_docking_side(Some("sideways")).is_err());
}

#[test]
fn starts_hidden_and_not_suppressed() {
    let view = docked("bottom");
    assert!(!view.is_shown());
    assert!(!view.is_suppressed());
    assert!(!view.placement().is_visible());
    assert_eq!(view.current_target(), None);
}

#[test]
fn reposition_is_ignored_without_target_or_while_hidden() {
    let viewport = Viewport::new(800.0, 400.0);
    let mut view = docked("bottom");
    assert!(view.begin_reposition(target(), viewport).is_none());

    view.show_at("input");
    view.hide();
    assert_eq!(view.current_target(), None);
    assert!(!view.wants_reposition());
    assert!(view.begin_reposition(target(), viewport).is_none());
    assert_eq!(view.placement(), Placement::hidden(PositionMode::Fixed));
}

#[test]
fn show_while_suppressed_records_target_but_stays_hidden() {
    let viewport = Viewport::new(800.0, 400.0);
    let mut view = docked("bottom");
    assert!(!view.set_suppressed(true));

    assert!(!view.show_at("input"));
    assert_eq!(view.current_target(), Some(&"input"));
    assert!(!view.placement().is_visible());
    assert!(view.begin_reposition(target(), viewport).is_none());

    assert!(view.set_suppressed(false));
    assert!(view.placement().is_visible());
    let p = view
        .reposition_immediate(target(), Size::new(40.0, 20.0), viewport)
        .unwrap();
    assert_eq!((p.top, p.left), (130.0, 50.0));
}

#[test]
fn suppressing_a_shown_overlay_hides_it_until_released() {
    let mut view = shown(docked("bottom"));
    assert!(view.placement().is_visible());

    assert!(!view.set_suppressed(true));
    assert!(!view.placement().is_visible());
    assert!(view.is_shown());

    assert!(view.set_suppressed(false));
    assert!(view.placement().is_visible());
}

#[test]
fn releasing_suppression_without_target_does_nothing() {
    let mut view = docked("bottom");
    view.set_suppressed(true);
    assert!(!view.set_suppressed(false));
    assert!(!view.placement().is_visible());
}

#[test]
fn frame_finishing_after_hide_keeps_overlay_hidden() {
    let viewport = Viewport::new(800.0, 400.0);
    let mut view = shown(docked("bottom"));
    let frame = view.begin_reposition(target(), viewport).unwrap();
    view.hide();

    let p = view.finish_reposition(frame, Size::new(40.0, 20.0), viewport);
    assert_eq!(p.top, 130.0);
    assert!(!p.is_visible());
}

#[test]
fn set_options_switches_mode_and_strategy() {
    let mut view = shown(docked("bottom"));
    view.set_options(DockOptions::flip_below());
    assert_eq!(view.placement().mode, PositionMode::Absolute);
    let p = view
        .reposition_immediate(target(), Size::new(40.0, 20.0), Viewport::new(800.0, 400.0))
        .unwrap();
    assert_eq!(p.width, None);
    assert_eq!(p.top, 130.0);
}

#[test]
fn rect_helpers() {
    let r = target();
    assert_eq!(r.right(), 150.0);
    assert_eq!(r.bottom(), 130.0);
    assert_eq!(r.size(), Size::new(100.0, 30.0));
    assert_eq!(r.outset(Offsets::ZERO), r);
    assert_eq!(PositionMode::Fixed.as_css(), "fixed");
    assert_eq!(Visibility::Hidden.as_css(), "hidden");
}
