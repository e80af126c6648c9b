//! End-to-end tests: compose an intent, resolve the result, check frames.

use joist_compose::{compose, CrossAlignment, Distribution, LayoutIntent};
use joist_core::{Axis, BoxId, Extent, LayoutBox, Priority};
use joist_solver::{resolve, Resolver};

fn assert_frame(frame: joist_core::Frame, x: f64, y: f64, width: f64, height: f64) {
    assert!((frame.x - x).abs() < 0.001, "x: {} != {x}", frame.x);
    assert!((frame.y - y).abs() < 0.001, "y: {} != {y}", frame.y);
    assert!(
        (frame.width - width).abs() < 0.001,
        "width: {} != {width}",
        frame.width
    );
    assert!(
        (frame.height - height).abs() < 0.001,
        "height: {} != {height}",
        frame.height
    );
}

#[test]
fn fill_equally_splits_with_stable_residual() {
    let boxes: Vec<LayoutBox> = (0..3).map(|i| LayoutBox::new(BoxId(i))).collect();
    let intent = LayoutIntent::horizontal().with_distribution(Distribution::FillEqually);
    let outer = Extent::new(100.0, 50.0);

    let set = compose(&intent, &boxes, outer).unwrap();
    let frames = resolve(&set, &boxes, outer).unwrap();

    assert_frame(frames[&BoxId(0)], 0.0, 0.0, 34.0, 50.0);
    assert_frame(frames[&BoxId(1)], 34.0, 0.0, 33.0, 50.0);
    assert_frame(frames[&BoxId(2)], 67.0, 0.0, 33.0, 50.0);
}

#[test]
fn fill_shrinks_proportionally_at_equal_resistance() {
    let boxes = vec![
        LayoutBox::new(BoxId(1)).with_intrinsic_width(40.0),
        LayoutBox::new(BoxId(2)).with_intrinsic_width(200.0),
    ];
    let intent = LayoutIntent::horizontal();
    let outer = Extent::new(150.0, 50.0);

    let set = compose(&intent, &boxes, outer).unwrap();
    let frames = resolve(&set, &boxes, outer).unwrap();

    assert_frame(frames[&BoxId(1)], 0.0, 0.0, 25.0, 50.0);
    assert_frame(frames[&BoxId(2)], 25.0, 0.0, 125.0, 50.0);
}

#[test]
fn fill_squeezes_lowest_resistance_first() {
    let boxes = vec![
        LayoutBox::new(BoxId(1))
            .with_intrinsic_width(80.0)
            .with_resistance(Axis::Horizontal, Priority::new(600).unwrap()),
        LayoutBox::new(BoxId(2))
            .with_intrinsic_width(80.0)
            .with_resistance(Axis::Horizontal, Priority::new(700).unwrap()),
    ];
    let intent = LayoutIntent::horizontal();
    let outer = Extent::new(100.0, 40.0);

    let set = compose(&intent, &boxes, outer).unwrap();
    let frames = resolve(&set, &boxes, outer).unwrap();

    assert_frame(frames[&BoxId(1)], 0.0, 0.0, 20.0, 40.0);
    assert_frame(frames[&BoxId(2)], 20.0, 0.0, 80.0, 40.0);
}

#[test]
fn overflow_empties_weakest_group_in_input_order() {
    let boxes = vec![
        LayoutBox::new(BoxId(1))
            .with_intrinsic_width(50.0)
            .with_resistance(Axis::Horizontal, Priority::new(300).unwrap()),
        LayoutBox::new(BoxId(2))
            .with_intrinsic_width(80.0)
            .with_resistance(Axis::Horizontal, Priority::new(700).unwrap()),
    ];
    let intent = LayoutIntent::horizontal();
    let outer = Extent::new(60.0, 40.0);

    let set = compose(&intent, &boxes, outer).unwrap();
    let frames = resolve(&set, &boxes, outer).unwrap();

    assert_frame(frames[&BoxId(1)], 0.0, 0.0, 0.0, 40.0);
    assert_frame(frames[&BoxId(2)], 0.0, 0.0, 60.0, 40.0);
}

#[test]
fn spacing_offsets_origins() {
    let boxes: Vec<LayoutBox> = (0..2).map(|i| LayoutBox::new(BoxId(i))).collect();
    let intent = LayoutIntent::horizontal()
        .with_distribution(Distribution::FillEqually)
        .with_spacing(10.0);
    let outer = Extent::new(110.0, 40.0);

    let set = compose(&intent, &boxes, outer).unwrap();
    let frames = resolve(&set, &boxes, outer).unwrap();

    assert_frame(frames[&BoxId(0)], 0.0, 0.0, 50.0, 40.0);
    assert_frame(frames[&BoxId(1)], 60.0, 0.0, 50.0, 40.0);
}

#[test]
fn fill_proportionally_weights_by_intrinsic_ratio() {
    let boxes = vec![
        LayoutBox::new(BoxId(1)).with_intrinsic_width(10.0),
        LayoutBox::new(BoxId(2)).with_intrinsic_width(30.0),
    ];
    let intent = LayoutIntent::horizontal().with_distribution(Distribution::FillProportionally);
    let outer = Extent::new(80.0, 40.0);

    let set = compose(&intent, &boxes, outer).unwrap();
    let frames = resolve(&set, &boxes, outer).unwrap();

    assert_frame(frames[&BoxId(1)], 0.0, 0.0, 20.0, 40.0);
    assert_frame(frames[&BoxId(2)], 20.0, 0.0, 60.0, 40.0);
}

#[test]
fn vertical_stack_fills_cross_width() {
    let boxes: Vec<LayoutBox> = (0..2).map(|i| LayoutBox::new(BoxId(i))).collect();
    let intent = LayoutIntent::vertical().with_distribution(Distribution::FillEqually);
    let outer = Extent::new(80.0, 100.0);

    let set = compose(&intent, &boxes, outer).unwrap();
    let frames = resolve(&set, &boxes, outer).unwrap();

    assert_frame(frames[&BoxId(0)], 0.0, 0.0, 80.0, 50.0);
    assert_frame(frames[&BoxId(1)], 0.0, 50.0, 80.0, 50.0);
}

#[test]
fn center_alignment_centers_intrinsic_cross_extent() {
    let boxes = vec![LayoutBox::new(BoxId(1)).with_intrinsic_height(20.0)];
    let intent = LayoutIntent::horizontal()
        .with_distribution(Distribution::FillEqually)
        .with_alignment(CrossAlignment::Center);
    let outer = Extent::new(100.0, 100.0);

    let set = compose(&intent, &boxes, outer).unwrap();
    let frames = resolve(&set, &boxes, outer).unwrap();

    assert_frame(frames[&BoxId(1)], 0.0, 40.0, 100.0, 20.0);
}

#[test]
fn trailing_alignment_pins_far_edge() {
    let boxes = vec![LayoutBox::new(BoxId(1)).with_intrinsic_height(20.0)];
    let intent = LayoutIntent::horizontal()
        .with_distribution(Distribution::FillEqually)
        .with_alignment(CrossAlignment::Trailing);
    let outer = Extent::new(100.0, 100.0);

    let set = compose(&intent, &boxes, outer).unwrap();
    let frames = resolve(&set, &boxes, outer).unwrap();

    assert_frame(frames[&BoxId(1)], 0.0, 80.0, 100.0, 20.0);
}

#[test]
fn leading_alignment_without_intrinsic_collapses_cross_extent() {
    let boxes = vec![LayoutBox::new(BoxId(1))];
    let intent = LayoutIntent::horizontal()
        .with_distribution(Distribution::FillEqually)
        .with_alignment(CrossAlignment::Leading);
    let outer = Extent::new(100.0, 100.0);

    let set = compose(&intent, &boxes, outer).unwrap();
    let frames = resolve(&set, &boxes, outer).unwrap();

    assert_frame(frames[&BoxId(1)], 0.0, 0.0, 100.0, 0.0);
}

#[test]
fn zero_children_resolve_to_no_frames() {
    let intent = LayoutIntent::horizontal();
    let outer = Extent::new(100.0, 100.0);

    let set = compose(&intent, &[], outer).unwrap();
    assert!(set.is_empty());
    let frames = resolve(&set, &[], outer).unwrap();
    assert!(frames.is_empty());
}

#[test]
fn pipeline_is_deterministic_and_cache_transparent() {
    let boxes = vec![
        LayoutBox::new(BoxId(1)).with_intrinsic_width(40.0),
        LayoutBox::new(BoxId(2)).with_intrinsic_width(200.0),
    ];
    let intent = LayoutIntent::horizontal().with_spacing(4.0);
    let outer = Extent::new(150.0, 50.0);

    let set = compose(&intent, &boxes, outer).unwrap();
    let again = compose(&intent, &boxes, outer).unwrap();
    assert_eq!(set.len(), again.len());

    let first = resolve(&set, &boxes, outer).unwrap();
    let second = resolve(&again, &boxes, outer).unwrap();
    assert_eq!(first, second);

    let mut cached = Resolver::with_cache();
    assert_eq!(cached.resolve(&set, &boxes, outer).unwrap(), first);
    assert_eq!(cached.resolve(&set, &boxes, outer).unwrap(), first);
}
