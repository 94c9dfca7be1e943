//! Fluent builder for constructing a [`Sim`].

use av_agent::{CarRoster, CarSpec};
use av_core::Field;
use av_occupancy::OccupancyIndex;

use crate::sim::Sim;
use crate::{SimError, SimResult};

/// Collects car specs in registration order and validates the placement
/// contract on [`build`](Self::build):
///
/// - every name is non-empty and unique,
/// - every start cell lies inside the field,
/// - no two cars share a start cell.
///
/// Interactive frontends re-prompt on bad input long before specs reach
/// this point, so a build failure is a programming error in the caller, not
/// something to absorb.
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(Field::new(5, 5)?)
///     .car(CarSpec::new("CarA", Position::new(2, 2), Heading::North, "FF".parse()?))
///     .build()?;
/// let report = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    field: Field,
    specs: Vec<CarSpec>,
}

impl SimBuilder {
    /// A builder for a run on `field`, with an empty roster.
    pub fn new(field: Field) -> Self {
        Self { field, specs: Vec::new() }
    }

    /// Register one car.  Call order is registration order.
    pub fn car(mut self, spec: CarSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Register a batch of cars, preserving iteration order.
    pub fn cars<I: IntoIterator<Item = CarSpec>>(mut self, specs: I) -> Self {
        self.specs.extend(specs);
        self
    }

    /// Validate the placement contract and produce a ready-to-run [`Sim`].
    ///
    /// Specs are validated in registration order, so the first offending car
    /// names the error.  An empty roster is legal and yields a zero-tick run.
    ///
    /// # Errors
    ///
    /// [`SimError::EmptyName`], [`SimError::DuplicateName`],
    /// [`SimError::StartOutOfBounds`], or [`SimError::StartCellOccupied`].
    pub fn build(self) -> SimResult<Sim> {
        let mut roster = CarRoster::new();
        let mut occupancy = OccupancyIndex::new();

        for spec in self.specs {
            if spec.name.is_empty() {
                return Err(SimError::EmptyName);
            }
            if roster.contains_name(&spec.name) {
                return Err(SimError::DuplicateName(spec.name));
            }
            if !self.field.contains(spec.position) {
                return Err(SimError::StartOutOfBounds {
                    name: spec.name,
                    cell: spec.position,
                });
            }
            if occupancy.occupant(spec.position).is_some() {
                return Err(SimError::StartCellOccupied {
                    name: spec.name,
                    cell: spec.position,
                });
            }

            let cell = spec.position;
            let id = roster.push(spec);
            occupancy.insert(cell, id)?;
        }

        Ok(Sim::new(self.field, roster, occupancy))
    }
}
