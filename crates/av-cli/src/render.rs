//! Text rendering for run results.
//!
//! Shared by the interactive session and the batch runner so both surfaces
//! print identical blocks.  Formats are byte-stable; transcript tests assert
//! on them.
//!
//! Two coordinate spellings are deliberate: the in-run collision
//! announcement writes `(x, y)` with a space, the report lines `(x,y)`
//! without one.

use std::io::{self, Write};

use av_sim::RunReport;

/// The in-run collision announcement, one line per record, each preceded by
/// a blank line.
pub fn collision_lines<W: Write>(output: &mut W, report: &RunReport) -> io::Result<()> {
    for record in &report.collisions {
        writeln!(
            output,
            "\nCollision detected at step {} between {} and {} at ({}, {}).",
            record.step,
            record.moving_car,
            record.occupant,
            record.position.x,
            record.position.y
        )?;
    }
    Ok(())
}

/// The post-simulation results block: surviving cars first, then one line
/// per collision.
pub fn results_block<W: Write>(output: &mut W, report: &RunReport) -> io::Result<()> {
    writeln!(output, "\nAfter simulation, the result is:")?;
    for car in report.survivors() {
        writeln!(
            output,
            "- {}, ({},{}) {}",
            car.name, car.position.x, car.position.y, car.heading
        )?;
    }
    for record in &report.collisions {
        writeln!(
            output,
            "- {}, collides with {} at ({},{}) at step {}",
            record.moving_car,
            record.occupant,
            record.position.x,
            record.position.y,
            record.step
        )?;
    }
    Ok(())
}
