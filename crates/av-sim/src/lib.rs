//! `av-sim` — the deterministic step engine for the rust_av car simulator.
//!
//! # Tick loop
//!
//! ```text
//! for step in 0..max_script_len:
//!     for each active car, in registration order:
//!         no command at step      → skip (car parks as an obstacle)
//!         TurnLeft / TurnRight    → rotate heading in place
//!         Forward, target off-field   → stay put (boundary absorption)
//!         Forward, target occupied    → collision: deactivate both cars,
//!                                       log the record, halt the run
//!         Forward, target vacant      → relocate in the occupancy index
//!     halted?                     → stop; no further ticks execute
//! ```
//!
//! Determinism is total: the same field, registration order, and scripts
//! always produce an identical [`RunReport`].  There is no randomness and no
//! parallel car processing — collision detection depends on each car seeing
//! the moves earlier cars already made within the tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use av_agent::CarSpec;
//! use av_core::{Field, Heading, Position};
//! use av_sim::{NoopObserver, SimBuilder};
//!
//! let sim = SimBuilder::new(Field::new(5, 5)?)
//!     .car(CarSpec::new("CarA", Position::new(2, 2), Heading::North, "FF".parse()?))
//!     .build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! assert_eq!(report.cars[0].position, Position::new(2, 4));
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{CarState, CollisionRecord, RunReport};
pub use sim::{Sim, TickOutcome};
