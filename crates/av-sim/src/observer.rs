//! Observer hooks for watching a run in progress.

use crate::report::CollisionRecord;
use crate::sim::TickOutcome;

/// Callbacks invoked by [`Sim::run`](crate::Sim::run) at key points in the
/// tick loop.
///
/// All methods default to no-ops, so implementors override only what they
/// care about.  The engine itself does no logging or printing; applications
/// attach an observer to surface progress.
///
/// # Example
///
/// ```rust,ignore
/// struct CollisionPrinter;
///
/// impl SimObserver for CollisionPrinter {
///     fn on_collision(&mut self, record: &CollisionRecord) {
///         println!("{} hit {} at {}", record.moving_car, record.occupant, record.position);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Start of a tick, before any car is processed.  `step` is the 0-based
    /// script index this tick executes.
    fn on_tick_start(&mut self, _step: usize) {}

    /// A collision, the moment it is recorded.
    fn on_collision(&mut self, _record: &CollisionRecord) {}

    /// End of a tick, after every car has been processed (or the halt cut
    /// the tick short).
    fn on_tick_end(&mut self, _step: usize, _outcome: &TickOutcome) {}

    /// After the final tick, whether the run completed all steps or halted.
    fn on_run_end(&mut self, _ticks_run: usize) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
