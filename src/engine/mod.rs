//! Widget Engine - Registry, tree, parallel arrays and observers.
//!
//! The engine manages the core data structures:
//! - Registry: Index allocation, ID mapping, parent context, release
//! - Tree: Parent/child structure
//! - Arrays: Per-index geometry and hints
//! - Observers: Property-change subscriptions
//! - LayoutRegistry: Which widgets are layout containers
//!
//! # Architecture
//!
//! Widgets are NOT objects. They are indices into parallel arrays:
//!
//! ```text
//! Index 0: FloatLayout (parent=None, size=(800,600))
//! Index 1: Widget      (parent=0,    size_hint=(0.5,None))
//! Index 2: FloatLayout (parent=0,    size_hint=(1,1))
//! ```
//!
//! All state is thread-local: the UI runs on a single thread.

mod registry;
pub mod arrays;
pub mod layout_registry;
pub mod observers;
pub mod tree;

pub use registry::*;
pub use layout_registry::{get_layout, is_layout};
pub use observers::{notify, subscribe, unsubscribe, SubscriptionId};
pub use tree::{add_widget, clear_widgets, get_children, get_parent, insert_widget, remove_widget};
