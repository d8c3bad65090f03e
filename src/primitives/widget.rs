//! Widget Primitive - Leaf widget with geometry and hints.
//!
//! # Example
//!
//! ```ignore
//! use spark_float::primitives::{widget, WidgetProps};
//! use spark_float::{Point, SizeHint};
//!
//! let button = widget(WidgetProps {
//!     size_hint: Some(SizeHint::new(0.5, 0.25)),
//!     pos: Some(Point { x: 20.0, y: 20.0 }),
//!     ..Default::default()
//! });
//! ```

use crate::engine::{
    add_widget, allocate_index, arrays, get_current_parent_index, pop_parent_context,
    push_parent_context,
};
use crate::types::{ComponentType, Point, PosHint, Size, SizeHint, WIDGET_DEFAULT_SIZE};

use super::types::{Children, WidgetProps};

/// Create a leaf widget and return its index.
///
/// The widget is attached to the current parent context, if any.
pub fn widget(props: WidgetProps) -> usize {
    let (index, children) = build(props, ComponentType::Widget, WIDGET_DEFAULT_SIZE);
    run_children(index, children);
    index
}

// =============================================================================
// Shared construction
// =============================================================================

/// Allocate an index, write initial geometry and attach to the parent context.
///
/// Geometry is written before anything can observe the widget, so
/// construction alone never schedules a layout. The children builder is handed
/// back so the caller can finish its own setup first.
pub(super) fn build(
    props: WidgetProps,
    component_type: ComponentType,
    default_size: Size<f32>,
) -> (usize, Option<Children>) {
    let index = allocate_index(props.id.as_deref());

    arrays::set_component_type(index, component_type);
    arrays::set_position(index, props.pos.unwrap_or(Point::ZERO));
    arrays::set_size(index, props.size.unwrap_or(default_size));
    arrays::set_size_hint(index, props.size_hint.unwrap_or(SizeHint::FILL));
    arrays::set_pos_hint(index, props.pos_hint.unwrap_or(PosHint::NONE));

    if let Some(parent) = get_current_parent_index() {
        if let Err(error) = add_widget(parent, index) {
            tracing::warn!(index, parent, %error, "widget left detached");
        }
    }

    (index, props.children)
}

/// Run a children builder with `index` as the current parent.
pub(super) fn run_children(index: usize, children: Option<Children>) {
    if let Some(children) = children {
        push_parent_context(index);
        children();
        pop_parent_context();
    }
}
