//! CSV scenario loader.
//!
//! # CSV format
//!
//! One row per car, in registration order:
//!
//! ```csv
//! name,x,y,heading,script
//! CarA,2,2,N,FFRFF
//! CarB,0,0,E,FFFFF
//! ```
//!
//! `heading` is one of `N`/`S`/`E`/`W` and `script` a letter string over
//! `L`/`R`/`F`; both are case-insensitive.  An empty `script` cell is a
//! valid empty script.
//!
//! Bounds and name uniqueness are *not* checked here.  The sim builder
//! enforces the placement contract when the specs are registered, so the
//! loader stays usable for fields of any size.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use av_core::{Heading, Position, Script};

use crate::car::CarSpec;
use crate::RosterError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CarRecord {
    name:    String,
    x:       i32,
    y:       i32,
    heading: String,
    script:  String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load car specs from a CSV file, preserving row order as registration
/// order.
pub fn load_specs_csv(path: &Path) -> Result<Vec<CarSpec>, RosterError> {
    let file = std::fs::File::open(path).map_err(RosterError::Io)?;
    load_specs_reader(file)
}

/// Like [`load_specs_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded scenarios.
pub fn load_specs_reader<R: Read>(reader: R) -> Result<Vec<CarSpec>, RosterError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut specs = Vec::new();

    for (row, result) in csv_reader.deserialize::<CarRecord>().enumerate() {
        let record = result.map_err(|e| RosterError::Parse(format!("row {}: {e}", row + 1)))?;

        let heading: Heading = record
            .heading
            .parse()
            .map_err(|e| RosterError::Parse(format!("row {} ({}): {e}", row + 1, record.name)))?;
        let script: Script = record
            .script
            .trim()
            .parse()
            .map_err(|e| RosterError::Parse(format!("row {} ({}): {e}", row + 1, record.name)))?;

        specs.push(CarSpec {
            name: record.name,
            position: Position::new(record.x, record.y),
            heading,
            script,
        });
    }

    Ok(specs)
}
