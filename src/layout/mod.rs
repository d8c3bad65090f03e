//! Layout Module
//!
//! A layout is a widget that positions and sizes its children. Layouts expose
//! a minimum content size so an enclosing layout can tell how small the child
//! container may get before it clips.
//!
//! # Architecture
//!
//! Each layout owns a [`Trigger`](crate::pipeline::Trigger) for its layout
//! pass. Property observers request the pass; the frame clock runs it once per
//! tick. A pass only writes the geometry of direct children, so a nested
//! layout re-lays itself out on a later tick through its own observers.
//!
//! # Example
//!
//! ```ignore
//! use spark_float::primitives::{float_layout, widget, WidgetProps};
//! use spark_float::{pipeline, SizeHint, Size};
//!
//! let root = float_layout(WidgetProps {
//!     size: Some(Size { width: 300.0, height: 300.0 }),
//!     children: Some(Box::new(|| {
//!         widget(WidgetProps {
//!             size_hint: Some(SizeHint::new(0.5, 0.25)),
//!             ..Default::default()
//!         });
//!     })),
//!     ..Default::default()
//! });
//!
//! pipeline::tick(); // child is now 150 x 75
//! ```

mod float_layout;

pub use float_layout::FloatLayout;

use crate::types::Size;

/// Capability of a widget that lays out its children.
pub trait Layout {
    /// Widget index of the container.
    fn index(&self) -> usize;

    /// Last computed minimum content size.
    ///
    /// Only meaningful right after
    /// [`compute_minimum_content_size`](Self::compute_minimum_content_size);
    /// it is not invalidated by later child changes.
    fn minimum_content_size(&self) -> Size<f32>;

    /// Recompute the minimum content size from the current children.
    fn compute_minimum_content_size(&self) -> Size<f32>;

    /// Ask for a layout pass on the next tick.
    fn request_layout(&self);

    /// Position and size the direct children now.
    fn perform_layout_pass(&self);
}
