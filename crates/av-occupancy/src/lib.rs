//! `av-occupancy` — the cell occupancy index for the rust_av simulator.
//!
//! One mapping, `Position → CarId`, covering exactly the active cars'
//! current cells.  The step engine consults it to detect collisions and
//! mutates it through three paths: [`insert`](OccupancyIndex::insert) for
//! initial placement, [`remove`](OccupancyIndex::remove) for collision
//! eviction, and [`relocate`](OccupancyIndex::relocate) for a successful
//! forward move.
//!
//! Index errors are never user-input errors.  Each one means the engine
//! violated its own bookkeeping invariant, so callers propagate them and
//! abort the run rather than absorbing them.

pub mod error;
pub mod index;


pub use error::{OccupancyError, OccupancyResult};
pub use index::OccupancyIndex;
