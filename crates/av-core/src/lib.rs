//! `av-core` — foundational types for the `rust_av` car simulator.
//!
//! Every other `av-*` crate depends on this one; it depends on no `av-*`
//! crate itself and keeps its external surface minimal (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                |
//! |-------------|-----------------------------------------|
//! | [`ids`]     | `CarId`                                 |
//! | [`grid`]    | `Position`, `Field`                     |
//! | [`heading`] | `Heading` and its fixed rotation tables |
//! | [`script`]  | `Command`, `Script`                     |
//! | [`error`]   | `AvError`, `AvResult`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod grid;
pub mod heading;
pub mod ids;
pub mod script;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{AvError, AvResult};
pub use grid::{Field, Position};
pub use heading::Heading;
pub use ids::CarId;
pub use script::{Command, Script};
