//! Command-line interface.
//!
//! ```text
//! workspacer [--json] [--socket PATH] [--config PATH] [current|all|next|prev]
//! ```
//!
//! Every subcommand takes `--min-digit N --max-digit N` to declare the
//! managed range; `next` and `prev` also take `--make-current` and
//! `--move-container`.  Without a subcommand, `all` is assumed.

use crate::command::{Command, Direction, RangeArgs};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "workspacer",
    version,
    about = "Step through i3/sway workspaces, including numbered ones that do not exist yet"
)]
pub struct Cli {
    /// Print JSON instead of the human-readable rendering.
    #[arg(long, global = true)]
    pub json: bool,

    /// Path of the i3/sway IPC socket (default: $I3SOCK, then $SWAYSOCK).
    #[arg(long, global = true, value_name = "PATH")]
    pub socket: Option<PathBuf>,

    /// Configuration file (default: $XDG_CONFIG_HOME/workspacer/config.json).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Subcommands>,
}

#[derive(Debug, Subcommand)]
pub enum Subcommands {
    /// Show the focused workspace.
    Current(RangeFlags),
    /// Show every workspace, placeholders included.
    All(RangeFlags),
    /// Show (and optionally go to) the next workspace.
    Next(StepFlags),
    /// Show (and optionally go to) the previous workspace.
    Prev(StepFlags),
}

/// Managed range bounds; both or neither.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct RangeFlags {
    /// First always-navigable numbered workspace.
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub min_digit: Option<i64>,

    /// Last always-navigable numbered workspace.
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub max_digit: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, Args)]
pub struct StepFlags {
    #[command(flatten)]
    pub range: RangeFlags,

    /// Switch to the target workspace.
    #[arg(long)]
    pub make_current: bool,

    /// Move the focused container to the target workspace.
    #[arg(long)]
    pub move_container: bool,
}

impl From<RangeFlags> for RangeArgs {
    fn from(flags: RangeFlags) -> Self {
        RangeArgs {
            min: flags.min_digit,
            max: flags.max_digit,
        }
    }
}

impl Cli {
    /// The command to run and the managed range given for it.
    pub fn request(&self) -> (Command, RangeArgs) {
        match self.command {
            None => (Command::All, RangeArgs::default()),
            Some(Subcommands::All(range)) => (Command::All, range.into()),
            Some(Subcommands::Current(range)) => (Command::Current, range.into()),
            Some(Subcommands::Next(flags)) => (step(Direction::Next, flags), flags.range.into()),
            Some(Subcommands::Prev(flags)) => (step(Direction::Prev, flags), flags.range.into()),
        }
    }
}

fn step(direction: Direction, flags: StepFlags) -> Command {
    Command::Step {
        direction,
        activate: flags.make_current,
        move_container: flags.move_container,
    }
}
