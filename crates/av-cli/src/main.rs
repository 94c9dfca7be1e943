//! `av` — auto-driving car simulator console.
//!
//! Without a subcommand the binary runs the interactive session on
//! stdin/stdout.  `av run` executes a scripted scenario from a CSV file:
//!
//! ```text
//! av run --width 10 --height 10 --scenario cars.csv
//! ```
//!
//! Diagnostics go to stderr via `tracing`; set `RUST_LOG=debug` to watch
//! tick-by-tick progress.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use av_agent::load_specs_csv;
use av_cli::{run_scenario, run_session};
use av_core::Field;

#[derive(Parser)]
#[command(name = "av", version, about = "Auto-driving car simulation on a bounded grid")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run a scripted scenario from a CSV file and print the results
    Run {
        /// Field width in cells
        #[arg(long)]
        width: i32,

        /// Field height in cells
        #[arg(long)]
        height: i32,

        /// Scenario CSV with name,x,y,heading,script rows
        #[arg(long)]
        scenario: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();

    match Cli::parse().command {
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            run_session(&mut input, &mut output)
        }
        Some(Command::Run { width, height, scenario }) => {
            let field = Field::new(width, height)?;
            let specs = load_specs_csv(&scenario)?;
            run_scenario(field, specs, &mut io::stdout())?;
            Ok(())
        }
    }
}

/// Route tracing events to stderr, honoring `RUST_LOG`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}
