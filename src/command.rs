//! Requests the tool can serve.
//!
//! [`Command`] is what the command line resolves to before anything is
//! queried; [`RangeArgs`] carries the (possibly incomplete) managed range the
//! user typed.

use crate::config::ConfigError;
use crate::directory::{ManagedRange, DEFAULT_STEP_RANGE};
use std::fmt;

/// Which way to step through the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Prev,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Next => write!(f, "next"),
            Direction::Prev => write!(f, "prev"),
        }
    }
}

/// Everything a single invocation can do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Report the workspace that is visible and focused.
    Current,

    /// Report the whole sequence, placeholders included.
    All,

    /// Report the neighbour of the current workspace in `direction`,
    /// optionally moving the focused container there and/or switching to it.
    Step {
        direction: Direction,
        /// Switch to the target workspace.
        activate: bool,
        /// Move the focused container to the target workspace.
        move_container: bool,
    },
}

impl Command {
    pub fn step(direction: Direction) -> Self {
        Command::Step {
            direction,
            activate: false,
            move_container: false,
        }
    }

    /// Range to use when neither the command line nor the config sets one.
    pub fn default_range(&self) -> Option<ManagedRange> {
        match self {
            Command::Step { .. } => Some(DEFAULT_STEP_RANGE),
            Command::Current | Command::All => None,
        }
    }
}

/// Managed range bounds as given on the command line.
///
/// Either both bounds are set or neither is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeArgs {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl RangeArgs {
    /// `Ok(None)` when no bound is set; an error when only one is.
    pub fn resolve(&self) -> Result<Option<ManagedRange>, ConfigError> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Ok(Some(ManagedRange::new(min, max))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(ConfigError::PartialRange("max")),
            (None, Some(_)) => Err(ConfigError::PartialRange("min")),
        }
    }
}
