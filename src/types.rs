//! Core types for spark-float.
//!
//! Geometry, per-child hints and the property flags that observers subscribe to.
//! Every hint axis is an `Option`: `None` means "leave this axis alone", while
//! `Some(0.0)` is a real hint that resolves to zero.

use bitflags::bitflags;

pub use taffy::geometry::{Point, Size};

// =============================================================================
// Defaults
// =============================================================================

/// Size given to a plain widget when its props leave `size` unset.
pub const WIDGET_DEFAULT_SIZE: Size<f32> = Size { width: 100.0, height: 100.0 };

/// Size given to a float layout when its props leave `size` unset.
pub const FLOAT_LAYOUT_DEFAULT_SIZE: Size<f32> = Size { width: 1.0, height: 1.0 };

// =============================================================================
// Size Hint
// =============================================================================

/// Fraction of the parent size a child should take, per axis.
///
/// An absent axis keeps the child's own size on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeHint {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl SizeHint {
    /// No hint on either axis.
    pub const NONE: Self = Self { width: None, height: None };

    /// Fill the parent on both axes. This is the widget default.
    pub const FILL: Self = Self::new(1.0, 1.0);

    /// Hint on both axes.
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Hint on the horizontal axis only.
    pub const fn width(width: f32) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    /// Hint on the vertical axis only.
    pub const fn height(height: f32) -> Self {
        Self {
            width: None,
            height: Some(height),
        }
    }

    /// True when neither axis is hinted.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}

// =============================================================================
// Position Hint
// =============================================================================

/// Offset of a child inside its parent, as a fraction of the parent size.
///
/// An absent axis leaves the child's coordinate untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PosHint {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl PosHint {
    /// No hint on either axis. This is the widget default.
    pub const NONE: Self = Self { x: None, y: None };

    /// Offset on both axes.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x: Some(x), y: Some(y) }
    }

    /// Horizontal offset only.
    pub const fn x(x: f32) -> Self {
        Self { x: Some(x), y: None }
    }

    /// Vertical offset only.
    pub const fn y(y: f32) -> Self {
        Self { x: None, y: Some(y) }
    }

    /// True when neither axis is hinted.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

// =============================================================================
// Properties
// =============================================================================

bitflags! {
    /// Observable widget properties.
    ///
    /// Subscriptions take a set of flags; notifications carry exactly one.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Property: u8 {
        const POSITION = 1 << 0;
        const SIZE = 1 << 1;
        const CHILDREN = 1 << 2;
        const PARENT = 1 << 3;
        const SIZE_HINT = 1 << 4;
        const POS_HINT = 1 << 5;
        const MINIMUM_SIZE = 1 << 6;
    }
}

// =============================================================================
// Component Type
// =============================================================================

/// What kind of widget lives at an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentType {
    /// Free slot.
    #[default]
    None,
    Widget,
    FloatLayout,
}
