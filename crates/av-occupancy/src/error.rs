//! Occupancy-index error types.

use av_core::{CarId, Position};
use thiserror::Error;

/// Errors produced by `av-occupancy`.
///
/// Every variant indicates a violated engine invariant, not a recoverable
/// input problem.
#[derive(Debug, Error)]
pub enum OccupancyError {
    /// Attempted to map a cell that already has an occupant.
    #[error("cell {cell} is already occupied by {occupant}")]
    DuplicateOccupancy { cell: Position, occupant: CarId },

    /// Attempted to release a cell with no occupant.
    #[error("no occupant recorded at cell {0}")]
    NotFound(Position),

    /// A cell's recorded occupant is not the car the engine expected.
    #[error("cell {cell} is held by {found}, not {expected}")]
    WrongOccupant {
        cell: Position,
        expected: CarId,
        found: CarId,
    },
}

/// Convenience alias for occupancy operations.
pub type OccupancyResult<T> = Result<T, OccupancyError>;
