//! Widget Registry - Index allocation for parallel arrays.
//!
//! Manages the lifecycle of widget indices:
//! - ID ↔ Index bidirectional mapping
//! - Free index pool for O(1) reuse
//! - Parent context stack for nested widget creation
//! - Destroy callbacks and recursive release

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use super::{arrays, layout_registry, observers, tree};

/// Callbacks run once when an index is released.
type DestroyCallbacks = HashMap<usize, Vec<Box<dyn FnOnce()>>>;

// =============================================================================
// Registry State
// =============================================================================

thread_local! {
    /// Map widget ID to array index.
    static ID_TO_INDEX: RefCell<HashMap<String, usize>> = RefCell::new(HashMap::new());

    /// Map array index to widget ID.
    static INDEX_TO_ID: RefCell<HashMap<usize, String>> = RefCell::new(HashMap::new());

    /// Currently allocated indices, ordered for deterministic iteration.
    static ALLOCATED_INDICES: RefCell<BTreeSet<usize>> = RefCell::new(BTreeSet::new());

    /// Pool of freed indices for reuse.
    static FREE_INDICES: RefCell<Vec<usize>> = RefCell::new(Vec::new());

    /// Next index to allocate if pool is empty.
    static NEXT_INDEX: RefCell<usize> = const { RefCell::new(0) };

    /// Counter for generating unique IDs.
    static ID_COUNTER: RefCell<usize> = const { RefCell::new(0) };

    /// Stack of parent indices for nested widget creation.
    static PARENT_STACK: RefCell<Vec<usize>> = RefCell::new(Vec::new());

    /// Destroy callbacks registered per index.
    static DESTROY_CALLBACKS: RefCell<DestroyCallbacks> = RefCell::new(HashMap::new());
}

// =============================================================================
// Parent Context Stack
// =============================================================================

/// Get current parent index (`None` if at root).
pub fn get_current_parent_index() -> Option<usize> {
    PARENT_STACK.with(|stack| stack.borrow().last().copied())
}

/// Push a parent index onto the stack.
pub fn push_parent_context(index: usize) {
    PARENT_STACK.with(|stack| stack.borrow_mut().push(index));
}

/// Pop a parent index from the stack.
pub fn pop_parent_context() {
    PARENT_STACK.with(|stack| {
        stack.borrow_mut().pop();
    });
}

// =============================================================================
// Index Allocation
// =============================================================================

/// Allocate an index for a new widget.
///
/// # Arguments
///
/// * `id` - Optional widget ID. A generated `w<n>` ID is used when `None`.
///
/// # Returns
///
/// The widget's index. If `id` is already registered, the existing index is
/// returned and nothing new is allocated.
pub fn allocate_index(id: Option<&str>) -> usize {
    let widget_id = match id {
        Some(id) => id.to_string(),
        None => ID_COUNTER.with(|counter| {
            let mut counter = counter.borrow_mut();
            let id = format!("w{}", *counter);
            *counter += 1;
            id
        }),
    };

    let existing = ID_TO_INDEX.with(|map| map.borrow().get(&widget_id).copied());
    if let Some(index) = existing {
        return index;
    }

    let index = FREE_INDICES.with(|free| free.borrow_mut().pop()).unwrap_or_else(|| {
        NEXT_INDEX.with(|next| {
            let mut next = next.borrow_mut();
            let index = *next;
            *next += 1;
            index
        })
    });

    ID_TO_INDEX.with(|map| {
        map.borrow_mut().insert(widget_id.clone(), index);
    });
    INDEX_TO_ID.with(|map| {
        map.borrow_mut().insert(index, widget_id);
    });
    ALLOCATED_INDICES.with(|set| {
        set.borrow_mut().insert(index);
    });

    arrays::ensure_capacity(index);

    index
}

/// Release an index back to the pool.
///
/// Children are released first (recursively). Then destroy callbacks run, the
/// widget is detached from its parent (which hears `CHILDREN`), and its
/// subscriptions, layout capability and array values are dropped.
///
/// # Arguments
///
/// * `index` - Widget to release. Unknown indices are ignored.
pub fn release_index(index: usize) {
    let id = INDEX_TO_ID.with(|map| map.borrow().get(&index).cloned());
    let Some(id) = id else { return };

    for child in tree::get_children(index) {
        release_index(child);
    }

    run_destroy_callbacks(index);

    tree::remove_released(index);
    observers::unsubscribe_index(index);
    layout_registry::unregister_layout(index);

    ID_TO_INDEX.with(|map| {
        map.borrow_mut().remove(&id);
    });
    INDEX_TO_ID.with(|map| {
        map.borrow_mut().remove(&index);
    });
    ALLOCATED_INDICES.with(|set| {
        set.borrow_mut().remove(&index);
    });

    arrays::clear_at_index(index);

    FREE_INDICES.with(|free| free.borrow_mut().push(index));

    // Last widget gone: drop the arrays entirely.
    let is_empty = ALLOCATED_INDICES.with(|set| set.borrow().is_empty());
    if is_empty {
        arrays::reset();
        FREE_INDICES.with(|free| free.borrow_mut().clear());
        NEXT_INDEX.with(|next| *next.borrow_mut() = 0);
    }
}

// =============================================================================
// Destroy Callbacks
// =============================================================================

/// Register a callback to run when the widget at `index` is destroyed.
pub fn on_destroy(index: usize, callback: impl FnOnce() + 'static) {
    DESTROY_CALLBACKS.with(|callbacks| {
        callbacks
            .borrow_mut()
            .entry(index)
            .or_default()
            .push(Box::new(callback));
    });
}

fn run_destroy_callbacks(index: usize) {
    let callbacks = DESTROY_CALLBACKS.with(|callbacks| callbacks.borrow_mut().remove(&index));
    if let Some(callbacks) = callbacks {
        for callback in callbacks {
            callback();
        }
    }
}

// =============================================================================
// Lookups
// =============================================================================

/// Get index for a widget ID.
pub fn get_index(id: &str) -> Option<usize> {
    ID_TO_INDEX.with(|map| map.borrow().get(id).copied())
}

/// Get ID for an index.
pub fn get_id(index: usize) -> Option<String> {
    INDEX_TO_ID.with(|map| map.borrow().get(&index).cloned())
}

/// Get all currently allocated indices in ascending order.
pub fn get_allocated_indices() -> Vec<usize> {
    ALLOCATED_INDICES.with(|set| set.borrow().iter().copied().collect())
}

pub fn is_allocated(index: usize) -> bool {
    ALLOCATED_INDICES.with(|set| set.borrow().contains(&index))
}

pub fn get_allocated_count() -> usize {
    ALLOCATED_INDICES.with(|set| set.borrow().len())
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Reset all engine state (for testing).
pub fn reset_registry() {
    ID_TO_INDEX.with(|map| map.borrow_mut().clear());
    INDEX_TO_ID.with(|map| map.borrow_mut().clear());
    ALLOCATED_INDICES.with(|set| set.borrow_mut().clear());
    FREE_INDICES.with(|free| free.borrow_mut().clear());
    NEXT_INDEX.with(|next| *next.borrow_mut() = 0);
    ID_COUNTER.with(|counter| *counter.borrow_mut() = 0);
    PARENT_STACK.with(|stack| stack.borrow_mut().clear());
    DESTROY_CALLBACKS.with(|callbacks| callbacks.borrow_mut().clear());
    layout_registry::reset_layouts();
    observers::reset_observers();
    tree::reset_tree();
    arrays::reset();
}
