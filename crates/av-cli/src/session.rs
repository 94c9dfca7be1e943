//! The interactive console session.
//!
//! Every prompt, validation message, and result line here is byte-stable so
//! transcript tests can assert on exact output.  The session performs all
//! caller-side validation (bounds, name uniqueness, cell occupancy) with
//! re-prompts; by the time specs reach [`SimBuilder`] they satisfy its
//! placement contract.
//!
//! End-of-input is a clean exit at any prompt, so piped input that simply
//! runs out ends the session without an error.

use std::io::{BufRead, Write};

use anyhow::Result;

use av_agent::CarSpec;
use av_core::{Field, Heading, Position, Script};
use av_sim::SimBuilder;

use crate::render;
use crate::trace::TraceObserver;

// ── Line I/O ──────────────────────────────────────────────────────────────────

/// One trimmed input line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Write `text` without a newline, flush, and read the answer.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;
    read_line(input)
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Where the session goes after a simulation run.
enum SessionNext {
    StartOver,
    Exit,
    Eof,
}

/// Run the interactive session until the user exits or input ends.
pub fn run_session<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    loop {
        let Some(field) = prompt_field(input, output)? else {
            return Ok(());
        };
        writeln!(output, "You have created a field of {field}.\n")?;

        match main_menu(input, output, field)? {
            SessionNext::StartOver => continue,
            SessionNext::Exit => {
                writeln!(output, "Thank you for running the simulation. Goodbye!")?;
                return Ok(());
            }
            SessionNext::Eof => return Ok(()),
        }
    }
}

/// Prompt for field dimensions until a valid pair arrives.
///
/// The welcome banner re-prints on every retry; starting over re-enters
/// this loop from the top.
fn prompt_field<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<Field>> {
    loop {
        writeln!(output, "Welcome to Auto Driving Car Simulation!\n")?;
        let Some(line) = prompt(
            input,
            output,
            "Please enter the width and height of the simulation field in x y format: ",
        )?
        else {
            return Ok(None);
        };

        match parse_dimensions(&line) {
            None => {
                writeln!(output, "Invalid input: Please enter two integers in x y format.")?;
            }
            Some((width, height)) if width <= 0 || height <= 0 => {
                writeln!(output, "Invalid input: Field dimensions must be positive integers.")?;
            }
            Some((width, height)) => return Ok(Some(Field::new(width, height)?)),
        }
    }
}

fn parse_dimensions(line: &str) -> Option<(i32, i32)> {
    let mut parts = line.split_whitespace();
    let width = parts.next()?.parse().ok()?;
    let height = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((width, height))
}

/// The add-car / run-simulation menu for one field.  The menu re-prints on
/// every pass, including after an invalid choice.
fn main_menu<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    field: Field,
) -> Result<SessionNext> {
    let mut specs: Vec<CarSpec> = Vec::new();

    loop {
        writeln!(output, "Please choose from the following options:")?;
        writeln!(output, "[1] Add a car to field")?;
        writeln!(output, "[2] Run simulation")?;
        output.flush()?;

        let Some(choice) = read_line(input)? else {
            return Ok(SessionNext::Eof);
        };

        match choice.parse::<i32>() {
            Ok(1) => {
                if !add_car(input, output, field, &mut specs)? {
                    return Ok(SessionNext::Eof);
                }
            }
            Ok(2) => {
                if specs.is_empty() {
                    writeln!(output, "No cars to simulate. Please add cars first.\n")?;
                    continue;
                }
                simulate(output, field, &specs)?;
                return post_run_menu(input, output);
            }
            _ => {
                writeln!(output, "Invalid input: Please choose a valid option (1 or 2).")?;
            }
        }
    }
}

/// Add-car dialogue: name, position and heading, then commands, each with
/// its own re-prompt loop.  Returns `false` if input ended mid-dialogue.
fn add_car<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    field: Field,
    specs: &mut Vec<CarSpec>,
) -> Result<bool> {
    let name = loop {
        let Some(name) = prompt(input, output, "Please enter the name of the car: ")? else {
            return Ok(false);
        };
        if name.is_empty() {
            writeln!(output, "Car name cannot be empty.")?;
        } else if specs.iter().any(|s| s.name == name) {
            writeln!(output, "Car name must be unique.")?;
        } else {
            break name;
        }
    };

    let (position, heading) = loop {
        let text = format!("Please enter initial position of car {name} in x y Direction format: ");
        let Some(line) = prompt(input, output, &text)? else {
            return Ok(false);
        };
        match parse_placement(&line, field, specs) {
            Ok(placed) => break placed,
            Err(msg) => writeln!(output, "Invalid input: {msg}")?,
        }
    };

    let script = loop {
        let text = format!("Please enter the commands for car {name}: ");
        let Some(line) = prompt(input, output, &text)? else {
            return Ok(false);
        };
        match line.parse::<Script>() {
            Ok(script) => break script,
            Err(_) => writeln!(output, "Commands can only contain L, R, and F.")?,
        }
    };

    specs.push(CarSpec::new(name, position, heading, script));

    writeln!(output, "\nYour current list of cars are:")?;
    for spec in specs.iter() {
        writeln!(
            output,
            "- {}, ({},{}) {}, {}",
            spec.name, spec.position.x, spec.position.y, spec.heading, spec.script
        )?;
    }
    writeln!(output)?;

    Ok(true)
}

/// Parse `"x y Direction"`, applying the checks in their fixed order:
/// format, direction letter, field bounds, then start-cell occupancy.
fn parse_placement(
    line: &str,
    field: Field,
    specs: &[CarSpec],
) -> Result<(Position, Heading), String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [x, y, direction] = parts.as_slice() else {
        return Err("Position must be in x y Direction format.".into());
    };
    let (Ok(x), Ok(y)) = (x.parse::<i32>(), y.parse::<i32>()) else {
        return Err("Position must be in x y Direction format.".into());
    };
    let heading: Heading = direction
        .parse()
        .map_err(|_| "Direction must be one of N, S, E, W.".to_string())?;

    let position = Position::new(x, y);
    if !field.contains(position) {
        return Err("Position must be within field boundaries.".into());
    }
    if specs.iter().any(|s| s.position == position) {
        return Err("Position is already occupied by another car.".into());
    }
    Ok((position, heading))
}

/// Build, run, and print one simulation over the collected specs.
fn simulate<W: Write>(output: &mut W, field: Field, specs: &[CarSpec]) -> Result<()> {
    writeln!(output, "\nRunning simulation...")?;

    let report = SimBuilder::new(field)
        .cars(specs.iter().cloned())
        .build()?
        .run(&mut TraceObserver)?;

    render::collision_lines(output, &report)?;
    render::results_block(output, &report)?;
    Ok(())
}

/// The start-over / exit menu shown once after each run; invalid choices
/// re-prompt without re-printing the menu.
fn post_run_menu<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<SessionNext> {
    writeln!(output, "\nPlease choose from the following options:")?;
    writeln!(output, "[1] Start over")?;
    writeln!(output, "[2] Exit")?;
    output.flush()?;

    loop {
        let Some(choice) = read_line(input)? else {
            return Ok(SessionNext::Eof);
        };
        match choice.parse::<i32>() {
            Ok(1) => return Ok(SessionNext::StartOver),
            Ok(2) => return Ok(SessionNext::Exit),
            _ => {
                writeln!(output, "Invalid input: Please choose a valid option (1 or 2).")?;
            }
        }
    }
}
