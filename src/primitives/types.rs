//! Primitive Types - Props for widget construction.
//!
//! Every field is optional. Unset geometry falls back to the defaults of the
//! primitive being built; only `size` differs between a plain widget and a
//! float layout.

use crate::types::{Point, PosHint, Size, SizeHint};

/// Children builder, run with the new widget as the current parent.
pub type Children = Box<dyn FnOnce()>;

/// Props shared by every primitive.
#[derive(Default)]
pub struct WidgetProps {
    /// Optional widget ID for lookup.
    pub id: Option<String>,

    /// Position (default: origin).
    pub pos: Option<Point<f32>>,

    /// Size (default: primitive specific).
    pub size: Option<Size<f32>>,

    /// Size hint (default: fill the parent).
    pub size_hint: Option<SizeHint>,

    /// Position hint (default: none).
    pub pos_hint: Option<PosHint>,

    /// Widgets created inside this closure become children.
    pub children: Option<Children>,
}

impl std::fmt::Debug for WidgetProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetProps")
            .field("id", &self.id)
            .field("pos", &self.pos)
            .field("size", &self.size)
            .field("size_hint", &self.size_hint)
            .field("pos_hint", &self.pos_hint)
            .field("children", &self.children.is_some())
            .finish()
    }
}
