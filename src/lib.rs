//! # spark-float
//!
//! Proportional float layout for reactive, retained-mode widget trees.
//!
//! A float layout honors two per-child hints and nothing else:
//! - `size_hint`: fraction of the layout size, per axis
//! - `pos_hint`: offset inside the layout, as a fraction of its size, per axis
//!
//! ## Architecture
//!
//! Widgets are indices into thread-local parallel arrays. Property writes that
//! change a value notify observers; a float layout observes itself and its
//! children and requests a deferred pass from the frame clock:
//!
//! ```text
//! set_size / add_widget → observers → Trigger::request() → tick() → layout pass
//! ```
//!
//! Requests made within one frame coalesce into a single pass. A pass writes
//! only the geometry of direct children; nested layouts follow on later ticks.
//!
//! ## Modules
//!
//! - [`types`] - Geometry, hints, property flags
//! - [`engine`] - Registry, tree, arrays, observers
//! - [`pipeline`] - Frame clock and triggers
//! - [`layout`] - `Layout` capability and [`FloatLayout`]
//! - [`primitives`] - Widget constructors and props

pub mod engine;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod primitives;
pub mod types;

pub use types::*;

pub use error::TreeError;

pub use engine::{
    add_widget, allocate_index, clear_widgets, get_children, get_id, get_index, get_layout,
    get_parent, insert_widget, is_allocated, is_layout, on_destroy, release_index,
    remove_widget, reset_registry, subscribe, unsubscribe, SubscriptionId,
};

pub use layout::{FloatLayout, Layout};

pub use pipeline::{flush, flush_default, reset_clock, tick, Trigger};

pub use primitives::{float_layout, widget, WidgetProps};

/// Reset all thread-local state: widgets, observers, layouts and the clock.
pub fn reset() {
    engine::reset_registry();
    pipeline::reset_clock();
}
