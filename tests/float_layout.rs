//! Float layout behavior through the public API.
//!
//! Each test runs on its own thread, so the thread-local widget world is
//! private to it; `reset()` only guards against leftovers within a thread.

use std::rc::Rc;

use pretty_assertions::assert_eq;
use spark_float::engine::arrays;
use spark_float::{
    add_widget, float_layout, flush_default, get_children, release_index, remove_widget, reset,
    tick, widget, FloatLayout, Layout, Point, PosHint, Size, SizeHint, WidgetProps,
};

fn size(width: f32, height: f32) -> Size<f32> {
    Size { width, height }
}

fn layout_of(width: f32, height: f32) -> Rc<FloatLayout> {
    float_layout(WidgetProps {
        size: Some(size(width, height)),
        ..Default::default()
    })
}

fn child_of(layout: &FloatLayout, child_size: Size<f32>, hint: SizeHint) -> usize {
    let index = widget(WidgetProps {
        size: Some(child_size),
        size_hint: Some(hint),
        ..Default::default()
    });
    add_widget(layout.index(), index).unwrap();
    index
}

// =============================================================================
// Geometry pass
// =============================================================================

#[test]
fn unhinted_children_keep_their_size() {
    reset();
    let layout = layout_of(400.0, 300.0);
    let a = child_of(&layout, size(10.0, 20.0), SizeHint::NONE);
    let b = child_of(&layout, size(500.0, 1.0), SizeHint::NONE);

    tick();

    assert_eq!(arrays::get_size(a), size(10.0, 20.0));
    assert_eq!(arrays::get_size(b), size(500.0, 1.0));
}

#[test]
fn full_hint_fills_the_container() {
    reset();
    let layout = layout_of(640.0, 480.0);
    let c = child_of(&layout, size(10.0, 10.0), SizeHint::FILL);

    tick();

    assert_eq!(arrays::get_size(c), arrays::get_size(layout.index()));
    assert_eq!(arrays::get_position(c), arrays::get_position(layout.index()));
}

#[test]
fn half_width_hint_leaves_height_alone() {
    reset();
    let layout = layout_of(200.0, 80.0);
    let c = child_of(&layout, size(10.0, 33.0), SizeHint::width(0.5));

    tick();

    assert_eq!(arrays::get_size(c), size(100.0, 33.0));
}

#[test]
fn zero_hints_are_applied_not_skipped() {
    reset();
    let layout = float_layout(WidgetProps {
        pos: Some(Point { x: 10.0, y: 20.0 }),
        size: Some(size(200.0, 100.0)),
        ..Default::default()
    });
    let c = widget(WidgetProps {
        pos: Some(Point { x: 55.0, y: 66.0 }),
        size: Some(size(30.0, 40.0)),
        size_hint: Some(SizeHint::new(0.0, 0.0)),
        pos_hint: Some(PosHint::new(0.0, 0.0)),
        ..Default::default()
    });
    add_widget(layout.index(), c).unwrap();

    tick();

    assert_eq!(arrays::get_size(c), size(0.0, 0.0));
    assert_eq!(arrays::get_position(c), Point { x: 10.0, y: 20.0 });
}

#[test]
fn negative_hints_pass_through_unvalidated() {
    reset();
    let layout = layout_of(200.0, 100.0);
    let c = child_of(&layout, size(1.0, 1.0), SizeHint::new(-0.5, 2.0));

    tick();

    assert_eq!(arrays::get_size(c), size(-100.0, 200.0));
}

#[test]
fn centered_child() {
    reset();
    let layout = layout_of(300.0, 300.0);
    let c = widget(WidgetProps {
        size_hint: Some(SizeHint::new(0.5, 0.5)),
        pos_hint: Some(PosHint::new(0.25, 0.25)),
        ..Default::default()
    });
    add_widget(layout.index(), c).unwrap();

    tick();

    assert_eq!(arrays::get_size(c), size(150.0, 150.0));
    assert_eq!(arrays::get_position(c), Point { x: 75.0, y: 75.0 });
}

#[test]
fn explicit_position_survives_without_pos_hint() {
    reset();
    let layout = layout_of(300.0, 300.0);
    let c = widget(WidgetProps {
        pos: Some(Point { x: 20.0, y: 20.0 }),
        size_hint: Some(SizeHint::new(0.5, 0.25)),
        ..Default::default()
    });
    add_widget(layout.index(), c).unwrap();

    tick();

    assert_eq!(arrays::get_size(c), size(150.0, 75.0));
    assert_eq!(arrays::get_position(c), Point { x: 20.0, y: 20.0 });
}

#[test]
fn repeated_passes_do_not_drift() {
    reset();
    let layout = layout_of(333.0, 777.0);
    let a = child_of(&layout, size(1.0, 1.0), SizeHint::new(0.3, 0.7));
    arrays::set_pos_hint(a, PosHint::new(0.1, 0.9));
    let b = child_of(&layout, size(5.0, 5.0), SizeHint::height(0.5));

    layout.perform_layout_pass();
    let first = (arrays::get_size(a), arrays::get_position(a), arrays::get_size(b));
    layout.perform_layout_pass();
    let second = (arrays::get_size(a), arrays::get_position(a), arrays::get_size(b));

    assert_eq!(first, second);
}

// =============================================================================
// Scheduling
// =============================================================================

#[test]
fn burst_of_additions_runs_one_pass() {
    reset();
    let layout = layout_of(100.0, 100.0);

    for _ in 0..25 {
        child_of(&layout, size(1.0, 1.0), SizeHint::FILL);
    }
    arrays::set_size(layout.index(), size(200.0, 200.0));

    assert_eq!(layout.layout_passes(), 0);
    assert_eq!(tick(), 1);
    assert_eq!(layout.layout_passes(), 1);
    assert_eq!(tick(), 0);

    for child in get_children(layout.index()) {
        assert_eq!(arrays::get_size(child), size(200.0, 200.0));
    }
}

#[test]
fn resize_triggers_relayout() {
    reset();
    let layout = layout_of(100.0, 100.0);
    let c = child_of(&layout, size(1.0, 1.0), SizeHint::width(0.5));
    tick();
    assert_eq!(arrays::get_size(c).width, 50.0);

    arrays::set_width(layout.index(), 300.0);
    assert!(layout.is_layout_pending());
    tick();
    assert_eq!(arrays::get_size(c).width, 150.0);
    assert_eq!(layout.layout_passes(), 2);
}

#[test]
fn setting_an_equal_size_does_not_relayout() {
    reset();
    let layout = layout_of(100.0, 100.0);
    child_of(&layout, size(1.0, 1.0), SizeHint::FILL);
    tick();

    arrays::set_size(layout.index(), size(100.0, 100.0));
    assert!(!layout.is_layout_pending());
}

#[test]
fn removing_a_child_requests_a_pass() {
    reset();
    let layout = layout_of(100.0, 100.0);
    let c = child_of(&layout, size(1.0, 1.0), SizeHint::FILL);
    tick();

    remove_widget(layout.index(), c).unwrap();
    assert!(layout.is_layout_pending());
}

#[test]
fn moving_the_container_alone_does_not_relayout() {
    reset();
    let layout = layout_of(100.0, 100.0);
    child_of(&layout, size(1.0, 1.0), SizeHint::FILL);
    tick();

    arrays::set_position(layout.index(), Point { x: 5.0, y: 5.0 });
    assert!(!layout.is_layout_pending());
}

// =============================================================================
// Nested layouts
// =============================================================================

#[test]
fn nested_layout_runs_on_the_following_tick() {
    reset();
    let outer = layout_of(400.0, 200.0);
    let inner = float_layout(WidgetProps {
        size_hint: Some(SizeHint::new(0.5, 0.5)),
        ..Default::default()
    });
    add_widget(outer.index(), inner.index()).unwrap();
    let leaf = child_of(&inner, size(1.0, 1.0), SizeHint::FILL);

    // Outer runs first and resizes inner, which pushes inner's pass to the
    // next tick instead of running it inside this one.
    assert!(outer.is_layout_pending() && inner.is_layout_pending());
    assert_eq!(tick(), 1);
    assert_eq!(arrays::get_size(inner.index()), size(200.0, 100.0));
    assert!(inner.is_layout_pending());
    assert_eq!(inner.layout_passes(), 0);
    assert_eq!(arrays::get_size(leaf), size(1.0, 1.0));

    assert_eq!(tick(), 1);
    assert_eq!(inner.layout_passes(), 1);
    assert_eq!(arrays::get_size(leaf), size(200.0, 100.0));
    assert_eq!(flush_default(), 0);
}

#[test]
fn nested_layout_decoupled_from_parent_pass() {
    reset();
    let outer = layout_of(400.0, 200.0);
    let inner = float_layout(WidgetProps {
        size_hint: Some(SizeHint::FILL),
        ..Default::default()
    });
    let leaf = child_of(&inner, size(1.0, 1.0), SizeHint::FILL);
    tick();
    assert_eq!(inner.layout_passes(), 1);

    add_widget(outer.index(), inner.index()).unwrap();
    assert_eq!(tick(), 1);
    assert_eq!(outer.layout_passes(), 1);
    assert_eq!(inner.layout_passes(), 1);
    assert_eq!(arrays::get_size(leaf), size(1.0, 1.0));

    assert_eq!(tick(), 1);
    assert_eq!(inner.layout_passes(), 2);
    assert_eq!(arrays::get_size(leaf), size(400.0, 200.0));
}

// =============================================================================
// Minimum content size
// =============================================================================

#[test]
fn minimum_size_from_unhinted_child() {
    reset();
    let layout = layout_of(10.0, 10.0);
    child_of(&layout, size(50.0, 30.0), SizeHint::NONE);

    assert_eq!(layout.compute_minimum_content_size(), size(50.0, 30.0));
    assert_eq!(layout.minimum_content_size(), size(50.0, 30.0));
}

#[test]
fn width_hinted_child_does_not_constrain_width() {
    reset();
    let layout = layout_of(10.0, 10.0);
    child_of(&layout, size(50.0, 30.0), SizeHint::width(1.0));

    assert_eq!(layout.compute_minimum_content_size(), size(0.0, 30.0));
}

#[test]
fn minimum_size_takes_the_max_per_axis() {
    reset();
    let layout = layout_of(10.0, 10.0);
    child_of(&layout, size(50.0, 5.0), SizeHint::NONE);
    child_of(&layout, size(20.0, 90.0), SizeHint::NONE);
    child_of(&layout, size(999.0, 999.0), SizeHint::FILL);

    assert_eq!(layout.compute_minimum_content_size(), size(50.0, 90.0));
}

#[test]
fn minimum_size_is_stale_until_recomputed() {
    reset();
    let layout = layout_of(10.0, 10.0);
    let c = child_of(&layout, size(50.0, 30.0), SizeHint::NONE);
    layout.compute_minimum_content_size();

    release_index(c);
    assert_eq!(layout.minimum_content_size(), size(50.0, 30.0));
    assert_eq!(layout.compute_minimum_content_size(), size(0.0, 0.0));
}

/// Inner layout whose minimum content size is (80, 40).
fn nested_with_minimum(outer: &FloatLayout, hint: SizeHint) -> Rc<FloatLayout> {
    let inner = float_layout(WidgetProps {
        size: Some(size(7.0, 7.0)),
        size_hint: Some(hint),
        ..Default::default()
    });
    child_of(&inner, size(80.0, 40.0), SizeHint::NONE);
    assert_eq!(inner.compute_minimum_content_size(), size(80.0, 40.0));
    add_widget(outer.index(), inner.index()).unwrap();
    inner
}

// A nested layout counts on width when its width hint is ABSENT, but on
// height when its height hint is PRESENT. A plain child uses "absent" on
// both axes. These four cases pin that asymmetry down.

#[test]
fn nested_minimum_unhinted_counts_width_only() {
    reset();
    let outer = layout_of(10.0, 10.0);
    nested_with_minimum(&outer, SizeHint::NONE);

    assert_eq!(outer.compute_minimum_content_size(), size(80.0, 0.0));
}

#[test]
fn nested_minimum_height_hint_counts_both_axes() {
    reset();
    let outer = layout_of(10.0, 10.0);
    nested_with_minimum(&outer, SizeHint::height(0.5));

    assert_eq!(outer.compute_minimum_content_size(), size(80.0, 40.0));
}

#[test]
fn nested_minimum_width_hint_counts_nothing() {
    reset();
    let outer = layout_of(10.0, 10.0);
    nested_with_minimum(&outer, SizeHint::width(1.0));

    assert_eq!(outer.compute_minimum_content_size(), size(0.0, 0.0));
}

#[test]
fn nested_minimum_full_hint_counts_height_only() {
    reset();
    let outer = layout_of(10.0, 10.0);
    nested_with_minimum(&outer, SizeHint::FILL);

    assert_eq!(outer.compute_minimum_content_size(), size(0.0, 40.0));
}

#[test]
fn nested_minimum_uses_reported_value_not_widget_size() {
    reset();
    let outer = layout_of(10.0, 10.0);
    let inner = float_layout(WidgetProps {
        size: Some(size(500.0, 500.0)),
        size_hint: Some(SizeHint::NONE),
        ..Default::default()
    });
    add_widget(outer.index(), inner.index()).unwrap();

    // Never computed: the nested layout still reports (0, 0).
    assert_eq!(outer.compute_minimum_content_size(), size(0.0, 0.0));
}

// =============================================================================
// Teardown
// =============================================================================

#[test]
fn releasing_the_layout_releases_children_and_cancels_the_pass() {
    reset();
    let layout = layout_of(100.0, 100.0);
    let c = child_of(&layout, size(1.0, 1.0), SizeHint::FILL);
    assert!(layout.is_layout_pending());

    release_index(layout.index());

    assert!(!spark_float::is_allocated(c));
    assert!(!spark_float::is_layout(layout.index()));
    assert_eq!(tick(), 0);
    assert_eq!(layout.layout_passes(), 0);
}
