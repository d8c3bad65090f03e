//! Parallel Arrays - Per-index widget geometry.
//!
//! Each array index corresponds to one widget:
//!
//! ```text
//! Index 0: FloatLayout (pos=(0,0),   size=(800,600), size_hint=(1,1))
//! Index 1: Widget      (pos=(0,300), size=(400,300), size_hint=(0.5,0.5))
//! ```
//!
//! Setters notify observers only when the stored value actually changes, so
//! writing the same geometry twice is silent.

use std::cell::RefCell;
use std::thread::LocalKey;

use super::observers;
use crate::types::{ComponentType, Point, PosHint, Property, Size, SizeHint};

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Component type (widget, float layout).
    static COMPONENT_TYPE: RefCell<Vec<ComponentType>> = RefCell::new(Vec::new());

    /// Bottom-left corner in parent coordinates.
    static POSITION: RefCell<Vec<Point<f32>>> = RefCell::new(Vec::new());

    /// Width and height.
    static SIZE: RefCell<Vec<Size<f32>>> = RefCell::new(Vec::new());

    static SIZE_HINT: RefCell<Vec<SizeHint>> = RefCell::new(Vec::new());

    static POS_HINT: RefCell<Vec<PosHint>> = RefCell::new(Vec::new());
}

type Array<T> = LocalKey<RefCell<Vec<T>>>;

fn read<T: Copy + Default>(array: &'static Array<T>, index: usize) -> T {
    array.with(|arr| arr.borrow().get(index).copied().unwrap_or_default())
}

/// Store `value`, growing the array if needed. Returns true if the value changed.
fn write<T: Copy + Default + PartialEq>(array: &'static Array<T>, index: usize, value: T) -> bool {
    array.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize(index + 1, T::default());
        }
        if arr[index] == value {
            false
        } else {
            arr[index] = value;
            true
        }
    })
}

fn grow<T: Copy + Default>(array: &'static Array<T>, index: usize) {
    array.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize(index + 1, T::default());
        }
    });
}

fn clear<T: Copy + Default>(array: &'static Array<T>, index: usize) {
    array.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            *slot = T::default();
        }
    });
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    grow(&COMPONENT_TYPE, index);
    grow(&POSITION, index);
    grow(&SIZE, index);
    grow(&SIZE_HINT, index);
    grow(&POS_HINT, index);
}

/// Clear values at index. No notifications are sent.
pub fn clear_at_index(index: usize) {
    clear(&COMPONENT_TYPE, index);
    clear(&POSITION, index);
    clear(&SIZE, index);
    clear(&SIZE_HINT, index);
    clear(&POS_HINT, index);
}

/// Reset all arrays to release memory.
pub fn reset() {
    COMPONENT_TYPE.with(|arr| arr.borrow_mut().clear());
    POSITION.with(|arr| arr.borrow_mut().clear());
    SIZE.with(|arr| arr.borrow_mut().clear());
    SIZE_HINT.with(|arr| arr.borrow_mut().clear());
    POS_HINT.with(|arr| arr.borrow_mut().clear());
}

// =============================================================================
// Component Type
// =============================================================================

pub fn get_component_type(index: usize) -> ComponentType {
    read(&COMPONENT_TYPE, index)
}

pub fn set_component_type(index: usize, component_type: ComponentType) {
    write(&COMPONENT_TYPE, index, component_type);
}

// =============================================================================
// Position
// =============================================================================

pub fn get_position(index: usize) -> Point<f32> {
    read(&POSITION, index)
}

pub fn set_position(index: usize, position: Point<f32>) {
    if write(&POSITION, index, position) {
        observers::notify(index, Property::POSITION);
    }
}

/// Set only the horizontal coordinate.
pub fn set_x(index: usize, x: f32) {
    let position = get_position(index);
    set_position(index, Point { x, y: position.y });
}

/// Set only the vertical coordinate.
pub fn set_y(index: usize, y: f32) {
    let position = get_position(index);
    set_position(index, Point { x: position.x, y });
}

// =============================================================================
// Size
// =============================================================================

pub fn get_size(index: usize) -> Size<f32> {
    read(&SIZE, index)
}

pub fn set_size(index: usize, size: Size<f32>) {
    if write(&SIZE, index, size) {
        observers::notify(index, Property::SIZE);
    }
}

/// Set only the width.
pub fn set_width(index: usize, width: f32) {
    let size = get_size(index);
    set_size(index, Size { width, height: size.height });
}

/// Set only the height.
pub fn set_height(index: usize, height: f32) {
    let size = get_size(index);
    set_size(index, Size { width: size.width, height });
}

// =============================================================================
// Hints
// =============================================================================

pub fn get_size_hint(index: usize) -> SizeHint {
    read(&SIZE_HINT, index)
}

pub fn set_size_hint(index: usize, hint: SizeHint) {
    if write(&SIZE_HINT, index, hint) {
        observers::notify(index, Property::SIZE_HINT);
    }
}

pub fn get_pos_hint(index: usize) -> PosHint {
    read(&POS_HINT, index)
}

pub fn set_pos_hint(index: usize, hint: PosHint) {
    if write(&POS_HINT, index, hint) {
        observers::notify(index, Property::POS_HINT);
    }
}
