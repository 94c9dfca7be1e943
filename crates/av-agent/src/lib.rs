//! `av-agent` — car records, the roster, and scenario loading.
//!
//! # Crate layout
//!
//! | Module     | Contents                                   |
//! |------------|--------------------------------------------|
//! | [`car`]    | `CarSpec`, `Car`                           |
//! | [`roster`] | `CarRoster` (registration-ordered storage) |
//! | [`loader`] | `load_specs_csv`, `load_specs_reader`      |
//! | [`error`]  | `RosterError`, `RosterResult`              |
//!
//! The split between [`car::CarSpec`] and [`car::Car`] mirrors the
//! input/runtime boundary: specs are what users and scenario files provide,
//! cars are what the step engine mutates.

pub mod car;
pub mod error;
pub mod loader;
pub mod roster;

#[cfg(test)]
mod tests;

pub use car::{Car, CarSpec};
pub use error::{RosterError, RosterResult};
pub use loader::{load_specs_csv, load_specs_reader};
pub use roster::CarRoster;
