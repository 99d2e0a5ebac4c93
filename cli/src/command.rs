use std::fmt;
use std::str::FromStr;

use connect_four_core::Coord;
use thiserror::Error;

/// One step of a replay, as typed on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Drop(Coord),
    Undo,
    Reset,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown command {0:?}, expected a column number, `undo` or `reset`")]
pub struct ParseCommandError(String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u" | "undo" => Ok(Self::Undo),
            "r" | "reset" => Ok(Self::Reset),
            other => other
                .parse()
                .map(Self::Drop)
                .map_err(|_| ParseCommandError(s.to_owned())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drop(col) => write!(f, "drop {col}"),
            Self::Undo => f.write_str("undo"),
            Self::Reset => f.write_str("reset"),
        }
    }
}
