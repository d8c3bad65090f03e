//! Layout Registry - Which widgets are themselves layout containers.
//!
//! A container registers its [`Layout`] implementation here when it is built.
//! Parents ask [`get_layout`] to find out whether a child exposes a minimum
//! content size; a plain widget simply has no entry.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::layout::Layout;

/// One registered container, kept both as the capability and as its
/// concrete type.
struct LayoutEntry {
    layout: Rc<dyn Layout>,
    concrete: Rc<dyn Any>,
}

thread_local! {
    /// Map widget index → layout capability.
    static LAYOUTS: RefCell<HashMap<usize, LayoutEntry>> = RefCell::new(HashMap::new());
}

/// Register the layout capability for a widget.
///
/// Replaces any capability already registered at `index`.
pub fn register_layout<T: Layout + 'static>(index: usize, layout: Rc<T>) {
    let entry = LayoutEntry {
        layout: layout.clone(),
        concrete: layout,
    };
    let previous = LAYOUTS.with(|layouts| layouts.borrow_mut().insert(index, entry));
    drop(previous);
}

/// Remove the layout capability. Called by `release_index()`.
pub fn unregister_layout(index: usize) -> Option<Rc<dyn Layout>> {
    LAYOUTS.with(|layouts| layouts.borrow_mut().remove(&index)).map(|entry| entry.layout)
}

/// Layout capability of a widget, `None` for plain widgets.
pub fn get_layout(index: usize) -> Option<Rc<dyn Layout>> {
    LAYOUTS.with(|layouts| layouts.borrow().get(&index).map(|entry| entry.layout.clone()))
}

/// Registered layout at `index` if it is a `T`.
pub fn get_layout_as<T: Layout + 'static>(index: usize) -> Option<Rc<T>> {
    let concrete = LAYOUTS.with(|layouts| {
        layouts
            .borrow()
            .get(&index)
            .map(|entry| entry.concrete.clone())
    })?;
    concrete.downcast::<T>().ok()
}

/// Whether the widget at `index` lays out its children.
pub fn is_layout(index: usize) -> bool {
    LAYOUTS.with(|layouts| layouts.borrow().contains_key(&index))
}

/// Number of registered layouts.
pub fn layout_count() -> usize {
    LAYOUTS.with(|layouts| layouts.borrow().len())
}

/// Clear the registry (for testing).
pub fn reset_layouts() {
    // Take the map first: dropping layouts may touch other thread-locals.
    let layouts = LAYOUTS.with(|layouts| std::mem::take(&mut *layouts.borrow_mut()));
    drop(layouts);
}
