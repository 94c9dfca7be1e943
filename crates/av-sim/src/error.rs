use av_core::Position;
use av_occupancy::OccupancyError;
use thiserror::Error;

/// Errors produced by sim construction and execution.
///
/// The first four variants are placement-contract violations raised by
/// [`SimBuilder::build`](crate::SimBuilder::build); interactive frontends
/// re-prompt before specs ever reach the builder, so hitting one there means
/// the caller skipped its own validation.  `Occupancy` wraps an index
/// invariant violation during a run and is always fatal.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("car name cannot be empty")]
    EmptyName,

    #[error("car name {0:?} is not unique")]
    DuplicateName(String),

    #[error("start position {cell} of car {name:?} is outside the field")]
    StartOutOfBounds { name: String, cell: Position },

    #[error("start position {cell} of car {name:?} is already occupied")]
    StartCellOccupied { name: String, cell: Position },

    #[error("occupancy invariant violated: {0}")]
    Occupancy(#[from] OccupancyError),
}

pub type SimResult<T> = Result<T, SimError>;
