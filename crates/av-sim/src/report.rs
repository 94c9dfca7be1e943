//! Run reports: collision records and final car states.

use av_core::{Heading, Position};

// ── CollisionRecord ───────────────────────────────────────────────────────────

/// One recorded collision: `moving_car` attempted to enter `position` while
/// `occupant` stood there.
///
/// `step` is 1-based, matching the step numbering users see in transcripts
/// (the first tick is step 1).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CollisionRecord {
    /// The car whose forward move triggered the collision.
    pub moving_car: String,
    /// The car already standing on the contested cell.
    pub occupant: String,
    /// The contested cell.  The mover never actually enters it.
    pub position: Position,
    /// 1-based step at which the collision occurred.
    pub step: usize,
}

// ── CarState ──────────────────────────────────────────────────────────────────

/// Snapshot of one car at the end of a run.
///
/// Collided cars appear with `active == false`, frozen where they stood when
/// the collision happened: the occupant on the contested cell, the mover on
/// its pre-move cell.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CarState {
    pub name: String,
    pub position: Position,
    pub heading: Heading,
    pub active: bool,
}

// ── RunReport ─────────────────────────────────────────────────────────────────

/// The complete outcome of a simulation run.
///
/// `cars` is the full roster in registration order, survivors and collided
/// cars alike.  Reports are plain data and compare with `==`; two runs with
/// identical inputs produce equal reports.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RunReport {
    pub cars: Vec<CarState>,
    pub collisions: Vec<CollisionRecord>,
    /// Ticks entered before the run ended (a halted tick counts).
    pub ticks_run: usize,
}

impl RunReport {
    /// Cars still active at the end of the run, in registration order.
    pub fn survivors(&self) -> impl Iterator<Item = &CarState> + '_ {
        self.cars.iter().filter(|c| c.active)
    }

    /// `true` if the run finished without a collision.
    pub fn collision_free(&self) -> bool {
        self.collisions.is_empty()
    }
}
