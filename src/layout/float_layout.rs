//! Float Layout - Children sized and placed by proportional hints.
//!
//! Each child is resolved per axis, independently of its siblings:
//!
//! ```text
//! size_hint (0.5, None)  in 200 x 100 → width = 100, height untouched
//! pos_hint  (0.25, 0.5)  at (10, 20)  → pos = (10 + 50, 20 + 50)
//! ```
//!
//! An absent axis leaves the child's own value alone. `Some(0.0)` is a real
//! hint. Hints are not validated, negative fractions give negative geometry.
//!
//! The container re-lays itself out when its own `SIZE` or `CHILDREN` change,
//! and when a child's `SIZE_HINT` or `POS_HINT` changes. All of these go
//! through one [`Trigger`], so any burst of changes costs one pass per tick.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::engine::observers::{self, SubscriptionId};
use crate::engine::{arrays, layout_registry, on_destroy, tree};
use crate::pipeline::Trigger;
use crate::types::{Point, Property, Size};

use super::Layout;

/// Proportional layout container.
pub struct FloatLayout {
    index: usize,
    this: Weak<FloatLayout>,
    minimum_size: Cell<Size<f32>>,
    trigger: Trigger,
    passes: Cell<u64>,
    own_watch: Cell<Option<SubscriptionId>>,
    child_watches: RefCell<HashMap<usize, SubscriptionId>>,
}

impl FloatLayout {
    /// Turn the widget at `index` into a float layout.
    ///
    /// Subscribes to the widget's own `SIZE | CHILDREN`, watches the hints of
    /// any children already attached, and registers the layout capability.
    /// Nothing is scheduled until one of those properties changes.
    ///
    /// Attaching an index that already is a float layout returns the existing
    /// layout, so a widget never carries two sets of subscriptions.
    pub fn attach(index: usize) -> Rc<Self> {
        if let Some(existing) = layout_registry::get_layout_as::<Self>(index) {
            tracing::debug!(index, "float layout already attached");
            return existing;
        }

        let layout = Rc::new_cyclic(|this: &Weak<Self>| {
            let pass = this.clone();
            Self {
                index,
                this: this.clone(),
                minimum_size: Cell::new(Size::ZERO),
                trigger: Trigger::new(move || {
                    if let Some(layout) = pass.upgrade() {
                        layout.perform_layout_pass();
                    }
                }),
                passes: Cell::new(0),
                own_watch: Cell::new(None),
                child_watches: RefCell::new(HashMap::new()),
            }
        });

        let this = Rc::downgrade(&layout);
        let watch = observers::subscribe(
            index,
            Property::CHILDREN | Property::SIZE,
            move |_, property| {
                let Some(layout) = this.upgrade() else { return };
                if property.contains(Property::CHILDREN) {
                    layout.sync_child_watches();
                }
                layout.request_layout();
            },
        );
        layout.own_watch.set(Some(watch));
        layout.sync_child_watches();

        layout_registry::register_layout(index, layout.clone());

        let this = Rc::downgrade(&layout);
        on_destroy(index, move || {
            if let Some(layout) = this.upgrade() {
                layout.detach();
            }
        });

        tracing::debug!(index, "float layout attached");
        layout
    }

    /// Number of layout passes completed.
    pub fn layout_passes(&self) -> u64 {
        self.passes.get()
    }

    /// True while a layout pass is waiting for the next tick.
    pub fn is_layout_pending(&self) -> bool {
        self.trigger.is_pending()
    }

    /// Keep one hint subscription per current child.
    fn sync_child_watches(&self) {
        let children = tree::get_children(self.index);
        let mut watches = self.child_watches.borrow_mut();

        watches.retain(|child, id| {
            let attached = children.contains(child);
            if !attached {
                observers::unsubscribe(*id);
            }
            attached
        });

        for child in children {
            if watches.contains_key(&child) {
                continue;
            }
            let this = self.this.clone();
            let id = observers::subscribe(
                child,
                Property::SIZE_HINT | Property::POS_HINT,
                move |_, _| {
                    if let Some(layout) = this.upgrade() {
                        layout.request_layout();
                    }
                },
            );
            watches.insert(child, id);
        }
    }

    /// Drop every subscription and any pending pass.
    fn detach(&self) {
        self.trigger.cancel();
        if let Some(id) = self.own_watch.take() {
            observers::unsubscribe(id);
        }
        let watches = std::mem::take(&mut *self.child_watches.borrow_mut());
        for id in watches.into_values() {
            observers::unsubscribe(id);
        }
        tracing::debug!(index = self.index, "float layout detached");
    }
}

impl Layout for FloatLayout {
    fn index(&self) -> usize {
        self.index
    }

    fn minimum_content_size(&self) -> Size<f32> {
        self.minimum_size.get()
    }

    fn compute_minimum_content_size(&self) -> Size<f32> {
        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;

        for child in tree::get_children(self.index) {
            let hint = arrays::get_size_hint(child);

            if let Some(nested) = layout_registry::get_layout(child) {
                let min = nested.minimum_content_size();
                if hint.width.is_none() {
                    width = width.max(min.width);
                }
                // Height counts only when hinted, unlike width and unlike plain children.
                if hint.height.is_some() {
                    height = height.max(min.height);
                }
            } else {
                let size = arrays::get_size(child);
                if hint.width.is_none() {
                    width = width.max(size.width);
                }
                if hint.height.is_none() {
                    height = height.max(size.height);
                }
            }
        }

        let minimum = Size { width, height };
        let previous = self.minimum_size.replace(minimum);
        tracing::debug!(index = self.index, width, height, "minimum content size");
        if previous != minimum {
            observers::notify(self.index, Property::MINIMUM_SIZE);
        }
        minimum
    }

    fn request_layout(&self) {
        self.trigger.request();
    }

    fn perform_layout_pass(&self) {
        let Size { width: w, height: h } = arrays::get_size(self.index);
        let Point { x, y } = arrays::get_position(self.index);
        let children = tree::get_children(self.index);

        for &child in &children {
            let size_hint = arrays::get_size_hint(child);
            match (size_hint.width, size_hint.height) {
                (Some(shw), Some(shh)) => arrays::set_size(
                    child,
                    Size { width: w * shw, height: h * shh },
                ),
                (Some(shw), None) => arrays::set_width(child, w * shw),
                (None, Some(shh)) => arrays::set_height(child, h * shh),
                (None, None) => {}
            }

            let pos_hint = arrays::get_pos_hint(child);
            match (pos_hint.x, pos_hint.y) {
                (Some(phx), Some(phy)) => arrays::set_position(
                    child,
                    Point { x: x + w * phx, y: y + h * phy },
                ),
                (Some(phx), None) => arrays::set_x(child, x + w * phx),
                (None, Some(phy)) => arrays::set_y(child, y + h * phy),
                (None, None) => {}
            }
        }

        let passes = self.passes.get() + 1;
        self.passes.set(passes);
        tracing::debug!(index = self.index, children = children.len(), passes, "layout pass");
    }
}

impl std::fmt::Debug for FloatLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloatLayout")
            .field("index", &self.index)
            .field("minimum_size", &self.minimum_size.get())
            .field("passes", &self.passes.get())
            .finish()
    }
}
