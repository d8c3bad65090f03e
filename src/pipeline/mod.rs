//! Frame Pipeline
//!
//! Deferred work runs once per frame instead of at the moment it is requested:
//!
//! ```text
//! property change → observer → Trigger::request() → clock::tick() → layout pass
//! ```
//!
//! A layout pass that resizes a nested container only schedules that
//! container's own pass, which runs on the following tick.

pub mod clock;

pub use clock::{
    cancel_pending, flush, flush_default, frame_count, is_pending, next_key, pending_count,
    reset_clock, schedule_once, tick, Callback, CallbackKey, Trigger, DEFAULT_MAX_ITERATIONS,
};
