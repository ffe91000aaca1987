//! Cyclic navigation over a built workspace sequence.
//!
//! All functions are pure: they never touch the window manager and never
//! modify the sequence.  Positions are looked up by full value equality, so
//! callers must pass back a [`Workspace`] obtained from the same sequence.

use crate::command::Direction;
use crate::workspace::Workspace;

/// Lookup failures.  There is no fallback for any of them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// No workspace is both visible and focused.
    #[error("no workspace is both visible and focused")]
    NoCurrent,

    /// The window manager reported several focused, visible workspaces.
    #[error("inconsistent snapshot: {0} workspaces are both visible and focused")]
    MultipleCurrent(usize),

    /// The starting workspace is not part of the sequence.
    #[error("workspace {0:?} is not in the sequence")]
    NotInSequence(String),
}

/// The unique workspace that is visible and focused.
pub fn current(sequence: &[Workspace]) -> Result<&Workspace, NavigationError> {
    let mut found = sequence.iter().filter(|w| w.is_current());
    let first = found.next().ok_or(NavigationError::NoCurrent)?;
    let others = found.count();
    if others > 0 {
        return Err(NavigationError::MultipleCurrent(others + 1));
    }
    Ok(first)
}

/// The workspace after `from`, wrapping from the last to the first.
pub fn successor<'a>(
    sequence: &'a [Workspace],
    from: &Workspace,
) -> Result<&'a Workspace, NavigationError> {
    let index = index_of(sequence, from)?;
    Ok(&sequence[(index + 1) % sequence.len()])
}

/// The workspace before `from`, wrapping from the first to the last.
pub fn predecessor<'a>(
    sequence: &'a [Workspace],
    from: &Workspace,
) -> Result<&'a Workspace, NavigationError> {
    let index = index_of(sequence, from)?;
    let len = sequence.len();
    Ok(&sequence[(index + len - 1) % len])
}

/// [`successor`] or [`predecessor`], depending on `direction`.
pub fn step<'a>(
    sequence: &'a [Workspace],
    from: &Workspace,
    direction: Direction,
) -> Result<&'a Workspace, NavigationError> {
    match direction {
        Direction::Next => successor(sequence, from),
        Direction::Prev => predecessor(sequence, from),
    }
}

fn index_of(sequence: &[Workspace], from: &Workspace) -> Result<usize, NavigationError> {
    sequence
        .iter()
        .position(|w| w == from)
        .ok_or_else(|| NavigationError::NotInSequence(from.name.clone()))
}
