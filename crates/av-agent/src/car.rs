//! Car specifications and live car state.

use av_core::{Command, Heading, Position, Script};

// ── CarSpec ───────────────────────────────────────────────────────────────────

/// The validated input shape for one car: everything needed to place it on
/// the field at tick zero.
///
/// `CarSpec` itself is a plain record.  The placement contract (non-empty
/// unique name, in-bounds unoccupied start cell) is enforced when specs are
/// registered with the sim builder, not here.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarSpec {
    pub name: String,
    pub position: Position,
    pub heading: Heading,
    pub script: Script,
}

impl CarSpec {
    pub fn new(
        name: impl Into<String>,
        position: Position,
        heading: Heading,
        script: Script,
    ) -> Self {
        Self { name: name.into(), position, heading, script }
    }
}

// ── Car ───────────────────────────────────────────────────────────────────────

/// A car on the field.
///
/// Created active at its validated start cell; mutated once per tick by the
/// step engine while active; permanently deactivated on collision
/// involvement.  A deactivated car is never dropped from the roster, so its
/// name, heading, and position at the moment of the collision stay
/// reportable after the run.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Car {
    pub name: String,
    pub position: Position,
    pub heading: Heading,
    pub script: Script,
    active: bool,
}

impl Car {
    /// Place a spec on the field as an active car.
    pub fn new(spec: CarSpec) -> Self {
        Self {
            name: spec.name,
            position: spec.position,
            heading: spec.heading,
            script: spec.script,
            active: true,
        }
    }

    /// `true` until the car is involved in a collision.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// One-way transition to inactive.  The position freezes where the car
    /// stands; there is no way back to active.
    #[inline]
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// The command this car runs at 0-based `step`, or `None` once its
    /// script is exhausted.  An exhausted car stays active and stationary,
    /// and remains collidable as an occupant, while longer scripts play out.
    #[inline]
    pub fn command_at(&self, step: usize) -> Option<Command> {
        self.script.get(step)
    }

    /// Rotate 90° counter-clockwise in place.
    #[inline]
    pub fn turn_left(&mut self) {
        self.heading = self.heading.left();
    }

    /// Rotate 90° clockwise in place.
    #[inline]
    pub fn turn_right(&mut self) {
        self.heading = self.heading.right();
    }

    /// The cell one step ahead in the current heading.
    ///
    /// Pure lookahead: the target may lie outside the field, and deciding
    /// what happens there (absorption, collision, move) is the engine's job.
    #[inline]
    pub fn forward_target(&self) -> Position {
        self.position.step(self.heading)
    }
}
