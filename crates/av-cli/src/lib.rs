//! Shared plumbing for the `av` console binary.
//!
//! The binary itself stays thin: argument parsing and subscriber setup live
//! in `main.rs`, while the interactive session, the batch runner, report
//! rendering, and the tracing observer live here so integration tests can
//! drive them with in-memory readers and writers.

pub mod batch;
pub mod render;
pub mod session;
pub mod trace;

pub use batch::run_scenario;
pub use session::run_session;
pub use trace::TraceObserver;
