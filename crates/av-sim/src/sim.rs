//! The step engine: `Sim` and its tick loop.

use av_agent::CarRoster;
use av_core::{CarId, Command, Field};
use av_occupancy::OccupancyIndex;

use crate::observer::SimObserver;
use crate::report::{CarState, CollisionRecord, RunReport};
use crate::SimResult;

// ── TickOutcome ───────────────────────────────────────────────────────────────

/// What one call to [`Sim::tick`] produced.
///
/// `halted` is an explicit stop signal rather than an early return from deep
/// inside the loop, so partial-tick state stays observable to tests and
/// observers.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct TickOutcome {
    /// Collisions recorded this tick.  At most one under the halting policy:
    /// the first collision ends the tick.
    pub collisions: Vec<CollisionRecord>,
    /// Cars deactivated this tick, mover first.
    pub removed: Vec<CarId>,
    /// `true` if the run must stop after this tick.
    pub halted: bool,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation engine: one field, one roster, one occupancy index.
///
/// `Sim` exclusively owns all run state, and [`run`](Self::run) consumes it,
/// so no state ever aliases across runs.  Construct via
/// [`SimBuilder`](crate::SimBuilder).
///
/// # Tick rule
///
/// Each tick visits every active car in registration order:
///
/// 1. Script exhausted at this step: skip.  The car stays on the field as a
///    stationary obstacle.
/// 2. `TurnLeft` / `TurnRight`: rotate the heading in place.
/// 3. `Forward`: resolve the target cell three ways.
///    - Outside the field: boundary absorption, the car does not move.
///    - Occupied: collision.  Both cars deactivate and leave the index, a
///      record is logged, and the run halts.
///    - Vacant: the index relocates the car and its position advances.
///
/// A car later in registration order sees the moves earlier cars already
/// made this tick.  That partial-tick visibility is deliberate; it is what
/// makes simultaneous-move outcomes deterministic.
#[derive(Debug)]
pub struct Sim {
    /// Field bounds, consulted read-only for boundary checks.
    pub field: Field,

    /// Every car of the run in registration order; collided cars stay,
    /// deactivated.
    pub roster: CarRoster,

    /// Cell → car mapping over the active cars.
    pub occupancy: OccupancyIndex,

    /// Collision log accumulated across ticks.
    pub collisions: Vec<CollisionRecord>,

    /// Ticks entered so far (a halted tick counts).
    pub ticks_run: usize,
}

impl Sim {
    pub(crate) fn new(field: Field, roster: CarRoster, occupancy: OccupancyIndex) -> Self {
        Self {
            field,
            roster,
            occupancy,
            collisions: Vec::new(),
            ticks_run: 0,
        }
    }

    // ── Run loop ──────────────────────────────────────────────────────────

    /// Run the simulation to completion, consuming the engine.
    ///
    /// The tick count is the longest script length in the roster (zero for
    /// an empty roster), and the loop stops early the tick a collision is
    /// recorded.  Observer hooks fire at tick boundaries, on each collision,
    /// and once at run end; pass [`NoopObserver`](crate::NoopObserver) when
    /// callbacks aren't needed.
    ///
    /// # Errors
    ///
    /// Only [`SimError::Occupancy`](crate::SimError::Occupancy), on an index
    /// bookkeeping violation.  User-level outcomes, collisions included, are
    /// data in the report, not errors.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> SimResult<RunReport> {
        let total_steps = self.roster.max_script_len();

        for step in 0..total_steps {
            observer.on_tick_start(step);
            let outcome = self.tick(step)?;
            for record in &outcome.collisions {
                observer.on_collision(record);
            }
            observer.on_tick_end(step, &outcome);
            if outcome.halted {
                break;
            }
        }

        observer.on_run_end(self.ticks_run);
        Ok(self.into_report())
    }

    // ── Tick processing ───────────────────────────────────────────────────

    /// Advance every active car by one command.
    ///
    /// `step` is the 0-based script index to execute.  Public so tests and
    /// frontends can single-step; [`run`](Self::run) is the loop over this.
    ///
    /// # Errors
    ///
    /// [`SimError::Occupancy`](crate::SimError::Occupancy) on an index
    /// invariant violation.  Never absorbed: the engine's bookkeeping is
    /// broken and the run must abort.
    pub fn tick(&mut self, step: usize) -> SimResult<TickOutcome> {
        self.ticks_run += 1;
        let mut outcome = TickOutcome::default();

        for idx in 0..self.roster.len() {
            let id = CarId(idx as u32);
            let car = self.roster.get(id);
            if !car.is_active() {
                continue;
            }
            let Some(command) = car.command_at(step) else {
                continue;
            };

            match command {
                Command::TurnLeft => self.roster.get_mut(id).turn_left(),
                Command::TurnRight => self.roster.get_mut(id).turn_right(),
                Command::Forward => self.resolve_forward(id, step, &mut outcome)?,
            }

            // First collision ends the tick; cars after the mover do not
            // execute their command this step.
            if outcome.halted {
                break;
            }
        }

        Ok(outcome)
    }

    /// Resolve one car's forward move: boundary absorption, collision, or
    /// relocation.
    fn resolve_forward(
        &mut self,
        id: CarId,
        step: usize,
        outcome: &mut TickOutcome,
    ) -> SimResult<()> {
        let (origin, target) = {
            let car = self.roster.get(id);
            (car.position, car.forward_target())
        };

        // Boundary absorption: an off-field target is discarded silently and
        // the car keeps its cell and heading.
        if !self.field.contains(target) {
            return Ok(());
        }

        match self.occupancy.occupant(target) {
            // Collision.  Both cars deactivate and leave the index entirely:
            // the occupant's cell and the mover's origin cell are both
            // vacated, and the mover never enters the contested cell.
            Some(occupant_id) => {
                let record = CollisionRecord {
                    moving_car: self.roster.get(id).name.clone(),
                    occupant: self.roster.get(occupant_id).name.clone(),
                    position: target,
                    step: step + 1,
                };

                self.occupancy.remove(target)?;
                self.occupancy.remove(origin)?;
                self.roster.get_mut(id).deactivate();
                self.roster.get_mut(occupant_id).deactivate();

                self.collisions.push(record.clone());
                outcome.collisions.push(record);
                outcome.removed.push(id);
                outcome.removed.push(occupant_id);
                outcome.halted = true;
            }

            // Vacant target: single-operation relocate, then the car's own
            // position catches up.
            None => {
                self.occupancy.relocate(origin, target, id)?;
                self.roster.get_mut(id).position = target;
            }
        }

        Ok(())
    }

    // ── Reporting ─────────────────────────────────────────────────────────

    /// Snapshot the roster and collision log into a [`RunReport`].
    fn into_report(self) -> RunReport {
        let cars = self
            .roster
            .iter()
            .map(|car| CarState {
                name: car.name.clone(),
                position: car.position,
                heading: car.heading,
                active: car.is_active(),
            })
            .collect();

        RunReport {
            cars,
            collisions: self.collisions,
            ticks_run: self.ticks_run,
        }
    }
}
