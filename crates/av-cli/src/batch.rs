//! Non-interactive scenario execution.

use std::io::Write;

use anyhow::Result;

use av_agent::CarSpec;
use av_core::Field;
use av_sim::{RunReport, SimBuilder};

use crate::render;
use crate::trace::TraceObserver;

/// Run a scripted scenario and print the collision and results blocks to
/// `output`, in the same format the interactive session uses.
///
/// Unlike the session there is no re-prompting here, so a spec that breaks
/// the placement contract (duplicate name, bad start cell) fails the run.
/// Returns the full report for callers that want more than the rendering.
pub fn run_scenario<W: Write>(
    field: Field,
    specs: Vec<CarSpec>,
    output: &mut W,
) -> Result<RunReport> {
    let report = SimBuilder::new(field)
        .cars(specs)
        .build()?
        .run(&mut TraceObserver)?;

    render::collision_lines(output, &report)?;
    render::results_block(output, &report)?;
    Ok(report)
}
