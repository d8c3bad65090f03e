//! Frame Clock - Deferred, coalesced callback invocation.
//!
//! Work is queued for the next [`tick`] instead of running immediately. Each
//! [`CallbackKey`] owns a single pending slot: scheduling a key that is already
//! pending replaces the earlier request, so bursts of requests within one frame
//! collapse into one invocation.
//!
//! # Pattern
//!
//! - A layout creates one [`Trigger`] for its layout pass
//! - Every change calls `trigger.request()` (cancel + schedule)
//! - The host loop calls [`tick`] once per frame
//! - Work scheduled while a tick runs lands on the following tick
//!
//! # Example
//!
//! ```ignore
//! use spark_float::pipeline::clock::{tick, Trigger};
//!
//! let trigger = Trigger::new(|| println!("layout"));
//! trigger.request();
//! trigger.request();
//!
//! assert_eq!(tick(), 1); // prints "layout" once
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Cap used by [`flush_default`].
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Deferred callback.
pub type Callback = Rc<dyn Fn()>;

/// Identity of a pending slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallbackKey(u64);

// =============================================================================
// CLOCK STATE
// =============================================================================

#[derive(Default)]
struct ClockState {
    /// Scheduled for the next tick, in scheduling order.
    pending: Vec<(CallbackKey, Callback)>,
    /// Batch of the tick currently running.
    running: VecDeque<(CallbackKey, Callback)>,
    next_key: u64,
    frames: u64,
}

impl ClockState {
    /// Remove every entry for `key`.
    ///
    /// The removed callbacks are handed back so the caller drops them after
    /// releasing the borrow; a callback may own a `Trigger` whose drop
    /// re-enters the clock.
    fn remove(&mut self, key: CallbackKey) -> Vec<Callback> {
        let mut removed = Vec::new();
        let mut keep = |(k, callback): &(CallbackKey, Callback)| {
            if *k == key {
                removed.push(callback.clone());
                false
            } else {
                true
            }
        };
        self.pending.retain(&mut keep);
        self.running.retain(&mut keep);
        removed
    }
}

thread_local! {
    static CLOCK: RefCell<ClockState> = RefCell::new(ClockState::default());
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Allocate a fresh key.
pub fn next_key() -> CallbackKey {
    CLOCK.with(|clock| {
        let mut clock = clock.borrow_mut();
        let key = CallbackKey(clock.next_key);
        clock.next_key += 1;
        key
    })
}

/// Run `callback` on the next tick.
///
/// Any request already pending for `key` is superseded, including one that
/// belongs to the tick currently running but has not started yet.
///
/// # Arguments
///
/// * `key` - Pending slot, usually from [`next_key`]
/// * `callback` - Invoked once by the next [`tick`]
pub fn schedule_once(key: CallbackKey, callback: Callback) {
    let superseded = CLOCK.with(|clock| {
        let mut clock = clock.borrow_mut();
        let superseded = clock.remove(key);
        clock.pending.push((key, callback));
        superseded
    });
    drop(superseded);
    tracing::trace!(?key, "schedule_once");
}

/// Drop the pending request for `key`. Returns true if one was pending.
pub fn cancel_pending(key: CallbackKey) -> bool {
    // try_with: triggers are dropped during thread teardown too.
    let removed = CLOCK
        .try_with(|clock| clock.borrow_mut().remove(key))
        .unwrap_or_default();
    !removed.is_empty()
}

/// Whether `key` has a request waiting to run.
pub fn is_pending(key: CallbackKey) -> bool {
    CLOCK.with(|clock| {
        let clock = clock.borrow();
        clock.pending.iter().any(|(k, _)| *k == key) || clock.running.iter().any(|(k, _)| *k == key)
    })
}

/// Number of callbacks waiting for a tick.
pub fn pending_count() -> usize {
    CLOCK.with(|clock| {
        let clock = clock.borrow();
        clock.pending.len() + clock.running.len()
    })
}

/// Number of ticks processed so far.
pub fn frame_count() -> u64 {
    CLOCK.with(|clock| clock.borrow().frames)
}

/// Process one frame: run every callback that was pending when the tick
/// started. Returns how many ran.
pub fn tick() -> usize {
    CLOCK.with(|clock| {
        let mut clock = clock.borrow_mut();
        let batch = std::mem::take(&mut clock.pending);
        clock.running.extend(batch);
        clock.frames += 1;
    });

    let mut ran = 0;
    // Pop one at a time so callbacks can schedule and cancel freely.
    while let Some((_, callback)) = CLOCK.with(|clock| clock.borrow_mut().running.pop_front()) {
        callback();
        ran += 1;
    }

    if ran > 0 {
        tracing::trace!(ran, frame = frame_count(), "tick");
    }
    ran
}

/// Tick until nothing is pending or `max_iterations` ticks have run.
///
/// Returns the number of ticks processed.
pub fn flush(max_iterations: usize) -> usize {
    let mut iterations = 0;
    while pending_count() > 0 {
        if iterations == max_iterations {
            tracing::warn!(
                max_iterations,
                pending = pending_count(),
                "clock iteration cap reached with work still pending"
            );
            break;
        }
        tick();
        iterations += 1;
    }
    iterations
}

/// [`flush`] with [`DEFAULT_MAX_ITERATIONS`].
pub fn flush_default() -> usize {
    flush(DEFAULT_MAX_ITERATIONS)
}

/// Drop all pending work and counters (for testing).
pub fn reset_clock() {
    let old = CLOCK.with(|clock| std::mem::take(&mut *clock.borrow_mut()));
    drop(old);
}

// =============================================================================
// TRIGGER
// =============================================================================

/// A callback bound to its own pending slot.
///
/// Dropping the trigger cancels any pending request.
pub struct Trigger {
    key: CallbackKey,
    callback: Callback,
}

impl Trigger {
    /// Wrap `callback` and give it a fresh pending slot. Nothing is scheduled.
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self {
            key: next_key(),
            callback: Rc::new(callback),
        }
    }

    /// Cancel any pending request and schedule a new one.
    pub fn request(&self) {
        cancel_pending(self.key);
        schedule_once(self.key, self.callback.clone());
    }

    /// Drop the pending request. Returns true if one was pending.
    pub fn cancel(&self) -> bool {
        cancel_pending(self.key)
    }

    /// Whether a request is waiting for a tick.
    pub fn is_pending(&self) -> bool {
        is_pending(self.key)
    }

    /// Pending slot owned by this trigger.
    pub fn key(&self) -> CallbackKey {
        self.key
    }
}

impl Drop for Trigger {
    fn drop(&mut self) {
        cancel_pending(self.key);
    }
}

impl std::fmt::Debug for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trigger").field("key", &self.key).finish()
    }
}
