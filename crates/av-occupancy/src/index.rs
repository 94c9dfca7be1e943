//! The occupancy index: the authoritative cell → car mapping.

use rustc_hash::FxHashMap;

use av_core::{CarId, Position};

use crate::{OccupancyError, OccupancyResult};

/// Maps each occupied cell to the car standing on it.
///
/// The index covers exactly the active cars: a deactivated car has no entry.
/// Between ticks at most one car maps to any cell, and a lookup hit on a
/// forward move's target is what defines a collision.
///
/// Mid-tick the index reflects the moves resolved so far, which is exactly
/// the state registration-order collision detection must observe.
#[derive(Default, Debug)]
pub struct OccupancyIndex {
    cells: FxHashMap<Position, CarId>,
}

impl OccupancyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// The car occupying `cell`, if any.
    #[inline]
    pub fn occupant(&self, cell: Position) -> Option<CarId> {
        self.cells.get(&cell).copied()
    }

    /// Number of occupied cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Claim `cell` for `car`.
    ///
    /// # Errors
    ///
    /// [`OccupancyError::DuplicateOccupancy`] if the cell is already mapped;
    /// the existing entry is left untouched.
    pub fn insert(&mut self, cell: Position, car: CarId) -> OccupancyResult<()> {
        if let Some(&occupant) = self.cells.get(&cell) {
            return Err(OccupancyError::DuplicateOccupancy { cell, occupant });
        }
        self.cells.insert(cell, car);
        Ok(())
    }

    /// Release `cell`, returning the car that held it.
    ///
    /// # Errors
    ///
    /// [`OccupancyError::NotFound`] if the cell is vacant.
    pub fn remove(&mut self, cell: Position) -> OccupancyResult<CarId> {
        self.cells
            .remove(&cell)
            .ok_or(OccupancyError::NotFound(cell))
    }

    /// Move `car` from `from` to `to` as one operation.
    ///
    /// This is the only mutation path for a successful forward move.  Both
    /// cells are validated before either is touched, so the index is never
    /// observable in a double-occupied or vacant-source intermediate state.
    ///
    /// # Errors
    ///
    /// - [`OccupancyError::DuplicateOccupancy`] if `to` is occupied.
    /// - [`OccupancyError::NotFound`] if `from` is vacant.
    /// - [`OccupancyError::WrongOccupant`] if `from` is held by another car.
    ///
    /// On any error the index is unchanged.
    pub fn relocate(&mut self, from: Position, to: Position, car: CarId) -> OccupancyResult<()> {
        if let Some(&occupant) = self.cells.get(&to) {
            return Err(OccupancyError::DuplicateOccupancy { cell: to, occupant });
        }
        match self.cells.get(&from) {
            None => return Err(OccupancyError::NotFound(from)),
            Some(&found) if found != car => {
                return Err(OccupancyError::WrongOccupant {
                    cell: from,
                    expected: car,
                    found,
                });
            }
            Some(_) => {}
        }
        self.cells.remove(&from);
        self.cells.insert(to, car);
        Ok(())
    }

    /// All `(cell, car)` entries, in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (Position, CarId)> + '_ {
        self.cells.iter().map(|(&cell, &car)| (cell, car))
    }
}
