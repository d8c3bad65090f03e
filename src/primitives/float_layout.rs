//! Float Layout Primitive - Container that honors child hints.
//!
//! # Example
//!
//! ```ignore
//! use spark_float::primitives::{float_layout, widget, WidgetProps};
//! use spark_float::{PosHint, Size, SizeHint};
//!
//! // A child that always covers the layout minus 20% on each side.
//! let layout = float_layout(WidgetProps {
//!     size: Some(Size { width: 300.0, height: 300.0 }),
//!     children: Some(Box::new(|| {
//!         widget(WidgetProps {
//!             size_hint: Some(SizeHint::new(0.6, 0.6)),
//!             pos_hint: Some(PosHint::new(0.2, 0.2)),
//!             ..Default::default()
//!         });
//!     })),
//!     ..Default::default()
//! });
//! ```

use std::rc::Rc;

use crate::layout::FloatLayout;
use crate::types::{ComponentType, FLOAT_LAYOUT_DEFAULT_SIZE};

use super::types::WidgetProps;
use super::widget::{build, run_children};

/// Create a float layout.
///
/// Same defaults as [`widget`](super::widget) except `size`, which defaults to
/// `(1, 1)`. Children built by `props.children` are attached after the layout
/// is listening, so they schedule exactly one pass for the next tick.
pub fn float_layout(props: WidgetProps) -> Rc<FloatLayout> {
    let (index, children) = build(props, ComponentType::FloatLayout, FLOAT_LAYOUT_DEFAULT_SIZE);
    let layout = FloatLayout::attach(index);
    run_children(index, children);
    layout
}
