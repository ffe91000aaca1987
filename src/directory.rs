//! Workspace directory.
//!
//! [`build`] turns the window manager's workspace list into the ordered
//! sequence that navigation walks over.  Real workspaces keep the order the
//! window manager reported.  For every *managed* name (typically `"1"` to
//! `"10"`) that has no workspace yet, a placeholder is interleaved so the
//! managed names can be stepped through before they are created.

use crate::workspace::{Workspace, WorkspaceRecord};
use serde::{Deserialize, Serialize};

/// An inclusive range of numbered workspaces that should always be
/// navigable.
///
/// `min > max` is allowed and yields no names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedRange {
    pub min: i64,
    pub max: i64,
}

/// Range stepped through by `next`/`prev` when none is configured.
pub const DEFAULT_STEP_RANGE: ManagedRange = ManagedRange { min: 1, max: 10 };

impl ManagedRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// The managed names, in order.
    pub fn names(&self) -> Vec<String> {
        (self.min..=self.max).map(|n| n.to_string()).collect()
    }
}

/// Build the ordered workspace sequence.
///
/// Each record becomes a created [`Workspace`].  Then, for each name in
/// `managed`, in order, a placeholder is inserted unless a workspace with
/// that name already exists anywhere in the sequence:
///
/// * the first managed name goes right before the present workspace with the
///   lowest managed index, or at the end if no managed workspace is present;
/// * every later managed name goes right after the previous managed name,
///   which is present by then (originally or as a placeholder).
///
/// Names are never duplicated.  Real workspaces are never reordered, so if
/// the window manager reports managed workspaces out of order they stay out
/// of order.
pub fn build(
    records: impl IntoIterator<Item = WorkspaceRecord>,
    managed: &[String],
) -> Vec<Workspace> {
    let mut sequence: Vec<Workspace> = records.into_iter().map(Workspace::from).collect();

    for (index, name) in managed.iter().enumerate() {
        if position_of(&sequence, name).is_some() {
            continue;
        }
        let at = if index == 0 {
            first_managed_position(&sequence, managed).unwrap_or(sequence.len())
        } else {
            position_of(&sequence, &managed[index - 1])
                .map(|p| p + 1)
                .unwrap_or(sequence.len())
        };
        sequence.insert(at, Workspace::placeholder(name.as_str()));
    }

    sequence
}

fn position_of(sequence: &[Workspace], name: &str) -> Option<usize> {
    sequence.iter().position(|w| w.name == name)
}

/// Position of the workspace whose name has the lowest index in `managed`.
fn first_managed_position(sequence: &[Workspace], managed: &[String]) -> Option<usize> {
    sequence
        .iter()
        .enumerate()
        .filter_map(|(pos, w)| {
            managed
                .iter()
                .position(|m| *m == w.name)
                .map(|managed_index| (managed_index, pos))
        })
        .min()
        .map(|(_, pos)| pos)
}
