//! Widget Tree - Parent/child structure.
//!
//! Children are kept in insertion order. Order never affects geometry, but it
//! keeps traversal deterministic. Structural changes notify `CHILDREN` on the
//! parent and `PARENT` on the child.

use std::cell::RefCell;
use std::collections::HashMap;

use super::observers;
use super::registry::is_allocated;
use crate::error::TreeError;
use crate::types::Property;

// =============================================================================
// Tree State
// =============================================================================

thread_local! {
    /// Parent of each widget.
    static PARENTS: RefCell<HashMap<usize, usize>> = RefCell::new(HashMap::new());

    /// Ordered children of each widget.
    static CHILDREN: RefCell<HashMap<usize, Vec<usize>>> = RefCell::new(HashMap::new());
}

// =============================================================================
// Queries
// =============================================================================

/// Parent of a widget, `None` for roots.
pub fn get_parent(index: usize) -> Option<usize> {
    PARENTS.with(|parents| parents.borrow().get(&index).copied())
}

/// Children of a widget in insertion order.
pub fn get_children(index: usize) -> Vec<usize> {
    CHILDREN.with(|children| children.borrow().get(&index).cloned().unwrap_or_default())
}

pub fn child_count(index: usize) -> usize {
    CHILDREN.with(|children| children.borrow().get(&index).map_or(0, Vec::len))
}

/// True if `ancestor` is `index` itself or sits above it in the tree.
pub fn is_ancestor(ancestor: usize, index: usize) -> bool {
    let mut current = Some(index);
    while let Some(node) = current {
        if node == ancestor {
            return true;
        }
        current = get_parent(node);
    }
    false
}

// =============================================================================
// Mutation
// =============================================================================

/// Append `child` to `parent`'s children.
pub fn add_widget(parent: usize, child: usize) -> Result<(), TreeError> {
    insert_widget(parent, child, usize::MAX)
}

/// Insert `child` at `position` in `parent`'s children (clamped to the end).
pub fn insert_widget(parent: usize, child: usize, position: usize) -> Result<(), TreeError> {
    check_attach(parent, child)?;

    CHILDREN.with(|children| {
        let mut children = children.borrow_mut();
        let list = children.entry(parent).or_default();
        let position = position.min(list.len());
        list.insert(position, child);
    });
    PARENTS.with(|parents| {
        parents.borrow_mut().insert(child, parent);
    });

    observers::notify(child, Property::PARENT);
    observers::notify(parent, Property::CHILDREN);
    Ok(())
}

/// Detach `child` from `parent`.
pub fn remove_widget(parent: usize, child: usize) -> Result<(), TreeError> {
    if get_parent(child) != Some(parent) {
        return Err(TreeError::NotAChild { parent, child });
    }

    detach(parent, child);
    observers::notify(child, Property::PARENT);
    observers::notify(parent, Property::CHILDREN);
    Ok(())
}

/// Detach every child of `parent`. Sends a single `CHILDREN` notification.
pub fn clear_widgets(parent: usize) {
    let children = CHILDREN.with(|children| children.borrow_mut().remove(&parent));
    let Some(children) = children else { return };
    if children.is_empty() {
        return;
    }

    PARENTS.with(|parents| {
        let mut parents = parents.borrow_mut();
        for child in &children {
            parents.remove(child);
        }
    });

    for child in children {
        observers::notify(child, Property::PARENT);
    }
    observers::notify(parent, Property::CHILDREN);
}

fn check_attach(parent: usize, child: usize) -> Result<(), TreeError> {
    if !is_allocated(parent) {
        return Err(TreeError::UnknownWidget(parent));
    }
    if !is_allocated(child) {
        return Err(TreeError::UnknownWidget(child));
    }
    if parent == child {
        return Err(TreeError::SelfParent(child));
    }
    if let Some(existing) = get_parent(child) {
        return Err(TreeError::AlreadyHasParent { child, parent: existing });
    }
    if is_ancestor(child, parent) {
        return Err(TreeError::Cycle { parent, child });
    }
    Ok(())
}

fn detach(parent: usize, child: usize) {
    CHILDREN.with(|children| {
        let mut children = children.borrow_mut();
        if let Some(list) = children.get_mut(&parent) {
            list.retain(|&c| c != child);
            if list.is_empty() {
                children.remove(&parent);
            }
        }
    });
    PARENTS.with(|parents| {
        parents.borrow_mut().remove(&child);
    });
}

// =============================================================================
// Release Support
// =============================================================================

/// Detach a widget that is being released.
///
/// The parent still hears `CHILDREN`; the released widget gets no `PARENT`
/// notification since its observers are about to be dropped.
pub(crate) fn remove_released(index: usize) {
    if let Some(parent) = get_parent(index) {
        detach(parent, index);
        observers::notify(parent, Property::CHILDREN);
    }
    CHILDREN.with(|children| {
        children.borrow_mut().remove(&index);
    });
}

/// Clear the whole tree (for testing).
pub fn reset_tree() {
    PARENTS.with(|parents| parents.borrow_mut().clear());
    CHILDREN.with(|children| children.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::engine::{allocate_index, release_index, reset_registry};

    fn three() -> (usize, usize, usize) {
        reset_registry();
        (allocate_index(None), allocate_index(None), allocate_index(None))
    }

    #[test]
    fn test_add_and_remove() {
        let (root, a, b) = three();

        add_widget(root, a).unwrap();
        add_widget(root, b).unwrap();
        assert_eq!(get_children(root), vec![a, b]);
        assert_eq!(get_parent(a), Some(root));

        remove_widget(root, a).unwrap();
        assert_eq!(get_children(root), vec![b]);
        assert_eq!(get_parent(a), None);
    }

    #[test]
    fn test_insert_position() {
        let (root, a, b) = three();

        add_widget(root, a).unwrap();
        insert_widget(root, b, 0).unwrap();
        assert_eq!(get_children(root), vec![b, a]);
    }

    #[test]
    fn test_attach_errors() {
        let (root, a, b) = three();

        assert_eq!(add_widget(root, root), Err(TreeError::SelfParent(root)));
        assert_eq!(add_widget(root, 99), Err(TreeError::UnknownWidget(99)));

        add_widget(root, a).unwrap();
        assert_eq!(
            add_widget(b, a),
            Err(TreeError::AlreadyHasParent { child: a, parent: root })
        );
        assert_eq!(add_widget(a, root), Err(TreeError::Cycle { parent: a, child: root }));
        assert_eq!(remove_widget(b, a), Err(TreeError::NotAChild { parent: b, child: a }));
    }

    #[test]
    fn test_clear_widgets_notifies_once() {
        let (root, a, b) = three();
        add_widget(root, a).unwrap();
        add_widget(root, b).unwrap();

        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        observers::subscribe(root, Property::CHILDREN, move |_, _| {
            hits_clone.set(hits_clone.get() + 1);
        });

        clear_widgets(root);
        assert_eq!(hits.get(), 1);
        assert_eq!(child_count(root), 0);
        assert_eq!(get_parent(b), None);
    }

    #[test]
    fn test_release_detaches_from_parent() {
        let (root, a, b) = three();
        add_widget(root, a).unwrap();
        add_widget(a, b).unwrap();

        release_index(a);
        assert_eq!(get_children(root), Vec::<usize>::new());
        assert!(!is_allocated(b));
    }

    #[test]
    fn test_is_ancestor() {
        let (root, a, b) = three();
        add_widget(root, a).unwrap();
        add_widget(a, b).unwrap();

        assert!(is_ancestor(root, b));
        assert!(is_ancestor(b, b));
        assert!(!is_ancestor(b, root));
    }
}
