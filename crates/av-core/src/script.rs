//! Car command scripts over the `L`/`R`/`F` instruction alphabet.

use std::fmt;
use std::str::FromStr;

use crate::AvError;

// ── Command ───────────────────────────────────────────────────────────────────

/// A single car instruction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Rotate 90° counter-clockwise; the car stays in its cell.
    TurnLeft,
    /// Rotate 90° clockwise; the car stays in its cell.
    TurnRight,
    /// Advance one cell in the current heading.
    Forward,
}

impl Command {
    /// Parse one instruction letter, case-insensitively.
    pub fn from_char(c: char) -> Result<Command, AvError> {
        match c.to_ascii_uppercase() {
            'L' => Ok(Command::TurnLeft),
            'R' => Ok(Command::TurnRight),
            'F' => Ok(Command::Forward),
            other => Err(AvError::Parse(format!(
                "invalid command {other:?}: commands can only contain L, R, and F"
            ))),
        }
    }

    /// Canonical letter for this command.
    pub fn as_char(self) -> char {
        match self {
            Command::TurnLeft => 'L',
            Command::TurnRight => 'R',
            Command::Forward => 'F',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ── Script ────────────────────────────────────────────────────────────────────

/// An ordered command sequence, executed one command per tick.
///
/// Scripts may be empty, and a script shorter than the run simply exhausts:
/// the car then stays on the field as a stationary obstacle for the
/// remaining ticks.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Script(Vec<Command>);

impl Script {
    pub fn new(commands: Vec<Command>) -> Self {
        Self(commands)
    }

    /// The command at 0-based `step`, or `None` once the script is exhausted.
    #[inline]
    pub fn get(&self, step: usize) -> Option<Command> {
        self.0.get(step).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The commands in execution order.
    pub fn commands(&self) -> impl Iterator<Item = Command> + '_ {
        self.0.iter().copied()
    }
}

impl FromStr for Script {
    type Err = AvError;

    /// Parse a letter string over `L`/`R`/`F` (case-insensitive).  The empty
    /// string parses to an empty script.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(Command::from_char)
            .collect::<Result<Vec<_>, _>>()
            .map(Script)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{}", c.as_char())?;
        }
        Ok(())
    }
}
