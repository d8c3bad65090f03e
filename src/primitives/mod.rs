//! Widget Primitives
//!
//! Constructors that allocate a widget, write its initial geometry from props
//! and attach it to the current parent context.
//!
//! - [`widget`] - Leaf widget
//! - [`float_layout`] - Container resolving child size and position hints

mod float_layout;
mod types;
mod widget;

pub use float_layout::float_layout;
pub use types::{Children, WidgetProps};
pub use widget::widget;
