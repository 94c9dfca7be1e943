//! The car roster: registration-ordered storage for every car in a run.

use av_core::CarId;

use crate::car::{Car, CarSpec};

/// All cars of a simulation run, in registration order.
///
/// A car's [`CarId`] equals its index here and never changes.  Collided cars
/// are deactivated in place rather than removed, which keeps ids stable and
/// final state reportable.
///
/// Registration order is load-bearing: the step engine processes cars in
/// roster order, which fixes the priority among simultaneous moves and makes
/// collision outcomes deterministic.
#[derive(Default, Debug)]
pub struct CarRoster {
    cars: Vec<Car>,
}

impl CarRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a car, returning its id (its registration index).
    pub fn push(&mut self, spec: CarSpec) -> CarId {
        let id = CarId(self.cars.len() as u32);
        self.cars.push(Car::new(spec));
        id
    }

    /// Panics on an id not issued by this roster.
    #[inline]
    pub fn get(&self, id: CarId) -> &Car {
        &self.cars[id.index()]
    }

    /// Panics on an id not issued by this roster.
    #[inline]
    pub fn get_mut(&mut self, id: CarId) -> &mut Car {
        &mut self.cars[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// All ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = CarId> + '_ {
        (0..self.cars.len() as u32).map(CarId)
    }

    /// All cars in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Car> + '_ {
        self.cars.iter()
    }

    /// `true` if some registered car already uses `name`.
    pub fn contains_name(&self, name: &str) -> bool {
        self.cars.iter().any(|c| c.name == name)
    }

    /// The longest script length across the roster.  This is the run's tick
    /// count; an empty roster yields zero.
    pub fn max_script_len(&self) -> usize {
        self.cars.iter().map(|c| c.script.len()).max().unwrap_or(0)
    }
}
