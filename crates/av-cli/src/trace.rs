//! Tracing-backed simulation observer.

use tracing::{debug, info};

use av_sim::{CollisionRecord, SimObserver, TickOutcome};

/// A [`SimObserver`] that emits tracing events: tick progress at `debug`,
/// collisions and run completion at `info`.
///
/// Events go wherever the installed subscriber routes them (stderr in the
/// `av` binary), keeping stdout clean for the transcript itself.
pub struct TraceObserver;

impl SimObserver for TraceObserver {
    fn on_tick_start(&mut self, step: usize) {
        debug!(step, "tick start");
    }

    fn on_collision(&mut self, record: &CollisionRecord) {
        info!(
            step = record.step,
            moving_car = %record.moving_car,
            occupant = %record.occupant,
            position = %record.position,
            "collision detected"
        );
    }

    fn on_tick_end(&mut self, step: usize, outcome: &TickOutcome) {
        debug!(step, halted = outcome.halted, "tick end");
    }

    fn on_run_end(&mut self, ticks_run: usize) {
        info!(ticks_run, "simulation complete");
    }
}
